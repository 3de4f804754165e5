use crate::utils::time_format::{format_duration, progress_fraction};
use std::time::Duration;

/// Snapshot of the playback session taken once per frame for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub file_name: String,
    pub is_playing: bool,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl ViewState {
    pub fn progress(&self) -> f32 {
        progress_fraction(self.elapsed, self.duration)
    }

    pub fn elapsed_label(&self) -> String {
        format_duration(self.elapsed)
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }

    pub fn play_button_label(&self) -> &'static str {
        if self.is_playing { "Pause" } else { "Play" }
    }
}
