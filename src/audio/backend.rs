use crate::error::Result;
use std::path::Path;
use std::time::Duration;

/// The single audio handle the controller drives.
///
/// Implementations are only touched from the UI thread, so the trait is not
/// `Send`.
pub trait PlaybackBackend {
    /// Drops whatever is loaded. The handle stays usable.
    fn reset(&mut self);

    /// Binds `path` and readies it paused at the start. Returns the total
    /// duration, or zero when it cannot be determined.
    fn prepare(&mut self, path: &Path) -> Result<Duration>;

    /// Starts or resumes. After natural completion this restarts from the top.
    fn start(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn seek(&mut self, position: Duration) -> Result<()>;

    fn position(&self) -> Duration;

    /// True once a prepared file has played to its end.
    fn is_finished(&self) -> bool;

    /// Frees the output device. Safe to call more than once.
    fn release(&mut self);
}
