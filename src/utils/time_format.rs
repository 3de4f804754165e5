use std::time::Duration;

/// `mm:ss`, minutes are not wrapped into hours.
pub fn format_time(millis: u64) -> String {
    let total_secs = millis / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn format_duration(duration: Duration) -> String {
    format_time(duration.as_millis() as u64)
}

/// Slider position for `elapsed` out of `total`, in `[0, 1]`.
pub fn progress_fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0) as f32
}

/// Offset a dragged slider fraction points at.
pub fn seek_target(fraction: f32, total: Duration) -> Duration {
    if !fraction.is_finite() {
        return Duration::ZERO;
    }
    total.mul_f64(fraction.clamp(0.0, 1.0) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_boundaries() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(999), "00:00");
        assert_eq!(format_time(61_000), "01:01");
        assert_eq!(format_time(3_599_000), "59:59");
        assert_eq!(format_time(3_600_000), "60:00");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(Duration::from_millis(125_400)), "02:05");
    }

    #[test]
    fn fraction_is_zero_without_duration() {
        assert_eq!(progress_fraction(Duration::from_secs(3), Duration::ZERO), 0.0);
    }

    #[test]
    fn fraction_is_clamped() {
        let total = Duration::from_secs(10);
        assert_eq!(progress_fraction(Duration::from_secs(5), total), 0.5);
        assert_eq!(progress_fraction(Duration::from_secs(20), total), 1.0);
    }

    #[test]
    fn seek_target_scales_and_clamps() {
        let total = Duration::from_secs(200);
        assert_eq!(seek_target(0.25, total), Duration::from_secs(50));
        assert_eq!(seek_target(-0.5, total), Duration::ZERO);
        assert_eq!(seek_target(1.5, total), total);
        assert_eq!(seek_target(f32::NAN, total), Duration::ZERO);
        assert_eq!(seek_target(0.7, Duration::ZERO), Duration::ZERO);
    }
}
