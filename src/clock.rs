//! Frame timing for the driver loop
//!
//! The time step handed to the simulation is the running mean of measured frame durations,
//! starting from the display refresh interval.

use std::time::{Duration, Instant};

/// Step used when the refresh rate is unknown or implausibly low
pub const FALLBACK_TIME_STEP: f64 = 0.1;

const REPORT_INTERVAL: f64 = 1.0;

/// Snapshot emitted about once per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsReport {
    /// Seconds since the clock started
    pub elapsed: f64,
    pub frames: u64,
    pub fps: f64,
    pub time_step: f64,
}

#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_report: Instant,
    count: u64,
    last_count: u64,
    time_step: f64,
    fixed: bool,
}

impl FrameClock {
    pub fn new(time_step: f64, fixed: bool, now: Instant) -> Self {
        Self {
            start: now,
            last_report: now,
            count: 0,
            last_count: 0,
            time_step,
            fixed,
        }
    }

    /// `1 / refresh` for a plausible refresh rate, [`FALLBACK_TIME_STEP`] otherwise
    pub fn initial_time_step(refresh_hz: Option<f64>) -> f64 {
        match refresh_hz {
            Some(hz) if hz >= 10.0 => 1.0 / hz,
            _ => FALLBACK_TIME_STEP,
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn frames(&self) -> u64 {
        self.count
    }

    /// Record one finished frame. Returns a report once a second has passed since the last.
    pub fn frame(&mut self, loop_elapsed: Duration, now: Instant) -> Option<FpsReport> {
        self.count += 1;
        if !self.fixed {
            let count = self.count as f64;
            self.time_step =
                (self.time_step * (count - 1.0) + loop_elapsed.as_secs_f64()) / count;
        }

        let since_report = now.saturating_duration_since(self.last_report).as_secs_f64();
        (since_report >= REPORT_INTERVAL).then(|| self.report(now))
    }

    /// Report unconditionally and restart the FPS window
    pub fn report(&mut self, now: Instant) -> FpsReport {
        let window = now.saturating_duration_since(self.last_report).as_secs_f64();
        let frames = self.count - self.last_count;
        let fps = if window > 0.0 {
            frames as f64 / window
        } else {
            0.0
        };

        self.last_report = now;
        self.last_count = self.count;

        FpsReport {
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            frames: self.count,
            fps,
            time_step: self.time_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_initial_time_step() {
        assert_eq!(FrameClock::initial_time_step(None), 0.1);
        assert_eq!(FrameClock::initial_time_step(Some(0.0)), 0.1);
        assert_eq!(FrameClock::initial_time_step(Some(9.9)), 0.1);
        assert!((FrameClock::initial_time_step(Some(60.0)) - 1.0 / 60.0).abs() < EPS);
        assert_eq!(FrameClock::initial_time_step(Some(10.0)), 0.1);
    }

    #[test]
    fn test_running_mean() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.1, false, start);

        clock.frame(Duration::from_millis(300), start);
        assert!((clock.time_step() - 0.3).abs() < EPS);

        clock.frame(Duration::from_millis(100), start);
        assert!((clock.time_step() - 0.2).abs() < EPS);

        clock.frame(Duration::from_millis(500), start);
        assert!((clock.time_step() - 0.3).abs() < EPS);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn test_fixed_step_is_not_smoothed() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.02, true, start);
        clock.frame(Duration::from_millis(300), start);
        clock.frame(Duration::from_millis(700), start);
        assert_eq!(clock.time_step(), 0.02);
    }

    #[test]
    fn test_reports_once_per_second() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.1, true, start);
        let frame = Duration::from_millis(10);

        assert!(clock
            .frame(frame, start + Duration::from_millis(500))
            .is_none());
        assert!(clock
            .frame(frame, start + Duration::from_millis(999))
            .is_none());

        let report = clock
            .frame(frame, start + Duration::from_secs(1))
            .expect("a second has passed");
        assert_eq!(report.frames, 3);
        assert!((report.fps - 3.0).abs() < EPS);
        assert!((report.elapsed - 1.0).abs() < EPS);
        assert_eq!(report.time_step, 0.1);

        // Window restarts after a report
        assert!(clock
            .frame(frame, start + Duration::from_millis(1500))
            .is_none());
        let report = clock.report(start + Duration::from_secs(2));
        assert_eq!(report.frames, 4);
        assert!((report.fps - 1.0).abs() < EPS);
    }

    #[test]
    fn test_report_with_empty_window() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.1, false, start);
        let report = clock.report(start);
        assert_eq!(report.fps, 0.0);
        assert_eq!(report.frames, 0);
    }
}
