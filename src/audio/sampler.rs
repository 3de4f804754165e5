use crate::audio::backend::PlaybackBackend;
use crate::audio::controller::PlaybackController;
use std::time::{Duration, Instant};
use tracing::debug;

/// Re-reads the playback position on a fixed interval, only while playing.
///
/// Driven from the frame loop; a pause ends the sampling run and the next
/// resume samples straight away.
pub struct PositionSampler {
    interval: Duration,
    last_sample: Option<Instant>,
}

impl PositionSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sample: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Samples `controller` if an interval has passed. Returns whether it did.
    pub fn tick<B: PlaybackBackend>(
        &mut self,
        controller: &mut PlaybackController<B>,
        now: Instant,
    ) -> bool {
        if !controller.is_playing() {
            self.last_sample = None;
            return false;
        }

        let due = self
            .last_sample
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            let elapsed = controller.sample();
            self.last_sample = Some(now);
            debug!(elapsed_ms = elapsed.as_millis() as u64, "sampled position");
        }
        due
    }

    /// Time until the next sample is due, `None` when not sampling.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.last_sample
            .map(|last| self.interval.saturating_sub(now.saturating_duration_since(last)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::controller::tests::{FakeBackend, init_tracing};
    use std::path::Path;

    fn playing() -> PlaybackController<FakeBackend> {
        init_tracing();
        let mut controller =
            PlaybackController::new(FakeBackend::with_duration(Duration::from_secs(60)));
        controller.load(Path::new("track.wav"));
        controller
    }

    #[test]
    fn samples_once_per_interval() {
        let mut controller = playing();
        let mut sampler = PositionSampler::new(Duration::from_millis(500));
        let start = Instant::now();

        controller.backend_mut().position = Duration::from_secs(1);
        assert!(sampler.tick(&mut controller, start));
        assert_eq!(controller.elapsed(), Duration::from_secs(1));

        controller.backend_mut().position = Duration::from_secs(2);
        assert!(!sampler.tick(&mut controller, start + Duration::from_millis(200)));
        assert_eq!(controller.elapsed(), Duration::from_secs(1));
        assert_eq!(
            sampler.until_next(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );

        assert!(sampler.tick(&mut controller, start + Duration::from_millis(500)));
        assert_eq!(controller.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn stops_sampling_when_paused() {
        let mut controller = playing();
        let mut sampler = PositionSampler::new(Duration::from_millis(500));
        let start = Instant::now();
        assert!(sampler.tick(&mut controller, start));

        controller.toggle();
        controller.backend_mut().position = Duration::from_secs(7);
        assert!(!sampler.tick(&mut controller, start + Duration::from_secs(2)));
        assert_eq!(sampler.until_next(start + Duration::from_secs(2)), None);
        assert_eq!(controller.elapsed(), Duration::ZERO);
    }

    #[test]
    fn resume_samples_immediately() {
        let mut controller = playing();
        let mut sampler = PositionSampler::new(Duration::from_millis(500));
        let start = Instant::now();
        sampler.tick(&mut controller, start);

        controller.toggle();
        sampler.tick(&mut controller, start + Duration::from_millis(100));
        controller.toggle();
        assert!(sampler.tick(&mut controller, start + Duration::from_millis(150)));
    }
}
