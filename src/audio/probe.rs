use crate::error::{PlayerError, Result};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Reads the total length from the container headers without decoding.
///
/// `Ok(None)` means the format was recognised but does not advertise a frame
/// count (common for VBR mp3 without a Xing header).
pub fn probe_duration(path: &Path) -> Result<Option<Duration>> {
    let file = File::open(path).map_err(|source| PlayerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension() {
        hint.with_extension(&extension.to_string_lossy());
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let Some(track) = probed.format.default_track() else {
        return Ok(None);
    };

    match (track.codec_params.n_frames, track.codec_params.sample_rate) {
        (Some(n_frames), Some(sample_rate)) if sample_rate > 0 => Ok(Some(
            Duration::from_secs_f64(n_frames as f64 / sample_rate as f64),
        )),
        _ => Ok(None),
    }
}
