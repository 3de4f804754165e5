use crate::audio::backend::PlaybackBackend;
use crate::error::Result;
use crate::ui::view_state::ViewState;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

const UNKNOWN_FILE: &str = "Unknown";

struct Session {
    file_name: String,
    duration: Duration,
}

/// Owns the one playback handle and the state mirrored into the UI.
///
/// Errors from the backend are logged and swallowed here; nothing is retried.
pub struct PlaybackController<B: PlaybackBackend> {
    backend: B,
    session: Option<Session>,
    is_playing: bool,
    elapsed: Duration,
}

impl<B: PlaybackBackend> PlaybackController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: None,
            is_playing: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Replaces the current session with `path` and starts playing it.
    ///
    /// Returns `false` if the file could not be prepared or started, in which
    /// case the controller is left idle.
    pub fn load(&mut self, path: &Path) -> bool {
        self.clear_session();

        match self.prepare_and_start(path) {
            Ok(duration) => {
                let file_name = file_name_of(path);
                info!(file = %file_name, duration_ms = duration.as_millis() as u64, "playing");
                self.session = Some(Session {
                    file_name,
                    duration,
                });
                self.is_playing = true;
                true
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "error playing audio");
                self.backend.reset();
                false
            }
        }
    }

    fn prepare_and_start(&mut self, path: &Path) -> Result<Duration> {
        let duration = self.backend.prepare(path)?;
        self.backend.start()?;
        Ok(duration)
    }

    fn clear_session(&mut self) {
        self.backend.reset();
        self.session = None;
        self.is_playing = false;
        self.elapsed = Duration::ZERO;
    }

    /// Pause if playing, resume otherwise. Position is kept.
    pub fn toggle(&mut self) {
        if self.session.is_none() {
            return;
        }

        if self.is_playing {
            self.backend.pause();
            self.is_playing = false;
            debug!(elapsed_ms = self.elapsed.as_millis() as u64, "paused");
        } else {
            if let Err(err) = self.backend.start() {
                error!(error = %err, "could not resume playback");
                return;
            }
            self.is_playing = true;
            self.elapsed = self.clamp(self.backend.position());
            debug!(elapsed_ms = self.elapsed.as_millis() as u64, "resumed");
        }
    }

    /// Jump to `target`, clamped to the loaded file's length.
    pub fn seek(&mut self, target: Duration) {
        if self.session.is_none() {
            return;
        }

        let target = self.clamp(target);
        if let Err(err) = self.backend.seek(target) {
            error!(target_ms = target.as_millis() as u64, error = %err, "seek failed");
            return;
        }
        self.elapsed = target;
        info!(target_ms = target.as_millis() as u64, "seeked");
    }

    /// Refreshes the elapsed offset from the backend while playing.
    pub fn sample(&mut self) -> Duration {
        if self.is_playing {
            self.elapsed = self.clamp(self.backend.position());
        }
        self.elapsed
    }

    /// Flips to paused once the file has played out. Elapsed is left alone.
    pub fn poll_completion(&mut self) -> bool {
        if self.is_playing && self.backend.is_finished() {
            self.is_playing = false;
            info!("playback completed");
            return true;
        }
        false
    }

    pub fn release(&mut self) {
        self.clear_session();
        self.backend.release();
    }

    fn clamp(&self, offset: Duration) -> Duration {
        offset.min(self.duration())
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.session
            .as_ref()
            .map_or(Duration::ZERO, |session| session.duration)
    }

    pub fn file_name(&self) -> &str {
        self.session
            .as_ref()
            .map_or("", |session| session.file_name.as_str())
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            file_name: self.file_name().to_string(),
            is_playing: self.is_playing,
            elapsed: self.elapsed,
            duration: self.duration(),
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: PlaybackBackend> Drop for PlaybackController<B> {
    fn drop(&mut self) {
        self.backend.release();
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_FILE.to_string())
}
