use single_track_player::PlayerError;
use single_track_player::audio::backend::PlaybackBackend;
use single_track_player::audio::controller::PlaybackController;
use single_track_player::audio::player::RodioBackend;
use single_track_player::audio::probe::probe_duration;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

const SAMPLE_RATE: u32 = 44_100;

fn write_tone(dir: &TempDir, name: &str, seconds: u32) -> PathBuf {
    let path = dir.path().join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for n in 0..SAMPLE_RATE * seconds {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (t * 440.0 * std::f32::consts::TAU).sin() * 0.2;
        writer.write_sample((sample * i16::MAX as f32) as i16).unwrap();
    }
    writer.finalize().unwrap();
    path
}

#[test]
fn probes_wav_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tone(&dir, "two.wav", 2);

    assert_eq!(probe_duration(&path).unwrap(), Some(Duration::from_secs(2)));
}

#[test]
fn missing_file_fails_before_touching_the_device() {
    let mut backend = RodioBackend::default();
    let err = backend.prepare(Path::new("/no/such/file.wav")).unwrap_err();
    assert!(matches!(err, PlayerError::Open { .. }));
    assert!(!backend.is_finished());
    assert_eq!(backend.position(), Duration::ZERO);
}

#[test]
fn controller_stays_idle_on_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    std::fs::write(&path, b"not really audio").unwrap();

    let mut controller = PlaybackController::new(RodioBackend::default());
    assert!(!controller.load(&path));
    assert!(!controller.is_playing());
    assert_eq!(controller.duration(), Duration::ZERO);
}

#[test]
fn unprepared_backend_rejects_start_and_seek() {
    let mut backend = RodioBackend::default();
    assert!(matches!(backend.start(), Err(PlayerError::NotPrepared)));
    assert!(matches!(
        backend.seek(Duration::from_secs(1)),
        Err(PlayerError::NotPrepared)
    ));
}

#[test]
fn plays_generated_tone_when_a_device_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tone(&dir, "one.wav", 1);

    let mut backend = RodioBackend::default();
    let duration = match backend.prepare(&path) {
        Ok(duration) => duration,
        // Headless CI machines have no output device.
        Err(PlayerError::OutputStream(_)) | Err(PlayerError::Sink(_)) => return,
        Err(err) => panic!("prepare failed: {err}"),
    };
    assert_eq!(duration, Duration::from_secs(1));
    assert!(!backend.is_finished());

    backend.start().unwrap();
    backend.pause();
    backend.release();
    assert!(!backend.is_finished());
}
