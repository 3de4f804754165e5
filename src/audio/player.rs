use crate::audio::backend::PlaybackBackend;
use crate::audio::probe::probe_duration;
use crate::error::{PlayerError, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

type FileDecoder = Decoder<BufReader<File>>;

/// `PlaybackBackend` on top of a rodio sink.
///
/// The output stream is opened on first use and kept until `release`, each
/// prepared file gets a fresh sink.
#[derive(Default)]
pub struct RodioBackend {
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    sink: Option<Sink>,
    prepared: Option<PathBuf>,
}

impl RodioBackend {
    fn open_decoder(path: &Path) -> Result<FileDecoder> {
        let file = File::open(path).map_err(|source| PlayerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Decoder::new(BufReader::new(file))?)
    }

    fn stream_handle(&mut self) -> Result<&OutputStreamHandle> {
        if self.stream_handle.is_none() {
            let (stream, handle) = OutputStream::try_default()?;
            debug!("opened audio output stream");
            self._stream = Some(stream);
            self.stream_handle = Some(handle);
        }
        self.stream_handle.as_ref().ok_or(PlayerError::NotPrepared)
    }

    /// Once the sink has drained it holds no source, so queue the file again.
    /// The requeued file stays paused until `start`.
    fn rewind_if_finished(&mut self) -> Result<()> {
        let (Some(sink), Some(path)) = (&self.sink, &self.prepared) else {
            return Err(PlayerError::NotPrepared);
        };

        if sink.empty() {
            debug!(path = %path.display(), "re-queueing finished file");
            sink.pause();
            sink.append(Self::open_decoder(path)?);
        }
        Ok(())
    }
}

impl PlaybackBackend for RodioBackend {
    fn reset(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.prepared = None;
    }

    fn prepare(&mut self, path: &Path) -> Result<Duration> {
        self.reset();

        let source = Self::open_decoder(path)?;
        let duration = match probe_duration(path) {
            Ok(Some(duration)) => Some(duration),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "duration probe failed");
                None
            }
        }
        .or_else(|| source.total_duration())
        .unwrap_or_else(|| {
            warn!(path = %path.display(), "unknown duration");
            Duration::ZERO
        });

        let sink = Sink::try_new(self.stream_handle()?)?;
        sink.pause();
        sink.append(source);

        self.sink = Some(sink);
        self.prepared = Some(path.to_path_buf());
        Ok(duration)
    }

    fn start(&mut self) -> Result<()> {
        self.rewind_if_finished()?;
        if let Some(sink) = &self.sink {
            sink.play();
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.rewind_if_finished()?;
        match &self.sink {
            Some(sink) => Ok(sink.try_seek(position)?),
            None => Err(PlayerError::NotPrepared),
        }
    }

    fn position(&self) -> Duration {
        self.sink.as_ref().map_or(Duration::ZERO, Sink::get_pos)
    }

    fn is_finished(&self) -> bool {
        self.prepared.is_some() && self.sink.as_ref().is_some_and(Sink::empty)
    }

    fn release(&mut self) {
        self.reset();
        self.stream_handle = None;
        self._stream = None;
    }
}
