//! Simulation clock: a discrete speed ladder, pause and reverse, and the simulated calendar date.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Available time scales, slowest first.
pub const TIME_SCALES: [f64; 8] = [0.1, 0.5, 1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0];
/// Ladder index of real time (1×).
pub const REALTIME_INDEX: usize = 2;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// A discrete user command, from the keyboard or a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeCommand {
    Faster,
    Slower,
    TogglePause,
    Reverse,
    Realtime,
}

/// Snapshot for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInfo {
    pub date: DateTime<Utc>,
    pub time_scale: f64,
    pub paused: bool,
    pub reversed: bool,
    pub simulated_days: f64,
}

#[derive(Debug, Clone)]
pub struct TimeController {
    scale_index: usize,
    paused: bool,
    reversed: bool,
    start: DateTime<Utc>,
    date: DateTime<Utc>,
    /// Signed simulated seconds since `start`.
    simulated_seconds: f64,
}

impl TimeController {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            scale_index: REALTIME_INDEX,
            paused: false,
            reversed: false,
            start,
            date: start,
            simulated_seconds: 0.0,
        }
    }

    /// Starts at the current wall-clock date.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn time_scale(&self) -> f64 {
        TIME_SCALES[self.scale_index]
    }

    pub fn scale_index(&self) -> usize {
        self.scale_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Signed multiplier applied to wall-clock deltas; 0 while paused.
    pub fn effective_rate(&self) -> f64 {
        if self.paused {
            0.0
        } else if self.reversed {
            -self.time_scale()
        } else {
            self.time_scale()
        }
    }

    /// Convert a raw frame delta into simulated seconds.
    pub fn scale_delta(&self, raw_delta: f64) -> f64 {
        raw_delta * self.effective_rate()
    }

    /// One rung up the ladder; stays put at the top.
    pub fn faster(&mut self) {
        if self.scale_index + 1 < TIME_SCALES.len() {
            self.scale_index += 1;
            log::info!("{}", self.speed_label());
        }
    }

    /// One rung down; stays put at the bottom.
    pub fn slower(&mut self) {
        if self.scale_index > 0 {
            self.scale_index -= 1;
            log::info!("{}", self.speed_label());
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", self.speed_label());
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
        log::info!("{}", self.speed_label());
    }

    /// Back to 1×, forward, running.
    pub fn realtime(&mut self) {
        self.scale_index = REALTIME_INDEX;
        self.reversed = false;
        self.paused = false;
        log::info!("{}", self.speed_label());
    }

    pub fn apply(&mut self, command: TimeCommand) {
        match command {
            TimeCommand::Faster => self.faster(),
            TimeCommand::Slower => self.slower(),
            TimeCommand::TogglePause => self.toggle_pause(),
            TimeCommand::Reverse => self.reverse(),
            TimeCommand::Realtime => self.realtime(),
        }
    }

    /// Accumulate an already-scaled delta into the calendar. No-op while paused.
    pub fn advance(&mut self, scaled_delta: f64) {
        if self.paused {
            return;
        }
        self.simulated_seconds += scaled_delta;
        // Dates outside chrono's range keep the last representable date.
        if let Some(date) = offset(self.simulated_seconds).and_then(|d| self.start.checked_add_signed(d)) {
            self.date = date;
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn simulated_days(&self) -> f64 {
        self.simulated_seconds / SECONDS_PER_DAY
    }

    /// `"Paused"`, `"Speed: 10×"`, `"Speed: -1k×"`.
    pub fn speed_label(&self) -> String {
        if self.paused {
            return "Paused".to_string();
        }
        let sign = if self.reversed { "-" } else { "" };
        let scale = self.time_scale();
        if scale >= 1000.0 {
            format!("Speed: {}{}k×", sign, scale / 1000.0)
        } else {
            format!("Speed: {}{}×", sign, scale)
        }
    }

    /// Long-form date, e.g. `"19 October 2026"`.
    pub fn date_label(&self) -> String {
        self.date.format("%-d %B %Y").to_string()
    }

    pub fn info(&self) -> TimeInfo {
        TimeInfo {
            date: self.date,
            time_scale: self.time_scale(),
            paused: self.paused,
            reversed: self.reversed,
            simulated_days: self.simulated_days(),
        }
    }
}

/// Signed seconds as a chrono duration with nanosecond resolution.
fn offset(seconds: f64) -> Option<Duration> {
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round() as i64;
    Duration::try_seconds(whole as i64)?.checked_add(&Duration::nanoseconds(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn ladder_clamps_at_both_ends() {
        let mut time = TimeController::new(start());
        for _ in 0..2 {
            time.slower();
        }
        assert_eq!(time.time_scale(), 0.1);
        time.slower();
        assert_eq!(time.time_scale(), 0.1);

        for _ in 0..7 {
            time.faster();
        }
        assert_eq!(time.time_scale(), 100000.0);
        time.faster();
        assert_eq!(time.time_scale(), 100000.0);
        assert_eq!(time.scale_index(), TIME_SCALES.len() - 1);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut time = TimeController::new(start());
        time.reverse();
        time.reverse();
        assert!(!time.is_reversed());
        time.toggle_pause();
        time.toggle_pause();
        assert!(!time.is_paused());
        assert_eq!(time.effective_rate(), 1.0);
    }

    #[test]
    fn paused_rate_is_always_zero() {
        let mut time = TimeController::new(start());
        time.faster();
        time.reverse();
        time.pause();
        assert_eq!(time.effective_rate(), 0.0);
        assert_eq!(time.scale_delta(0.5), 0.0);
        time.play();
        assert_eq!(time.effective_rate(), -10.0);
    }

    #[test]
    fn realtime_resets_everything() {
        let mut time = TimeController::new(start());
        time.faster();
        time.faster();
        time.reverse();
        time.toggle_pause();
        time.realtime();
        assert_eq!(time.scale_index(), REALTIME_INDEX);
        assert_eq!(time.effective_rate(), 1.0);
    }

    #[test]
    fn date_accumulates_signed_time() {
        let mut time = TimeController::new(start());
        time.advance(SECONDS_PER_DAY * 2.0);
        assert_eq!(time.date(), start() + Duration::days(2));
        assert!((time.simulated_days() - 2.0).abs() < 1e-12);

        time.advance(-SECONDS_PER_DAY * 3.0);
        assert_eq!(time.date(), start() - Duration::days(1));
        assert!((time.simulated_days() + 1.0).abs() < 1e-12);
        assert_eq!(time.date_label(), "31 December 2025");

        time.pause();
        time.advance(SECONDS_PER_DAY);
        assert_eq!(time.date(), start() - Duration::days(1));
    }

    #[test]
    fn calendar_tracks_many_small_steps() {
        let mut time = TimeController::new(start());
        time.slower();
        time.slower();
        for _ in 0..3600 {
            time.advance(time.scale_delta(1.0 / 60.0));
        }
        let moved = (time.date() - start()).num_microseconds().unwrap();
        assert!((moved - 6_000_000).abs() < 1_000, "{}", moved);

        for _ in 0..10_000 {
            time.advance(0.0004);
        }
        let moved = (time.date() - start()).num_microseconds().unwrap();
        assert!((moved - 10_000_000).abs() < 1_000, "{}", moved);
        assert!((time.simulated_days() * SECONDS_PER_DAY - 10.0).abs() < 1e-6);
    }

    #[test]
    fn speed_labels() {
        let mut time = TimeController::new(start());
        assert_eq!(time.speed_label(), "Speed: 1×");
        time.slower();
        assert_eq!(time.speed_label(), "Speed: 0.5×");
        for _ in 0..4 {
            time.faster();
        }
        time.reverse();
        assert_eq!(time.speed_label(), "Speed: -1k×");
        time.faster();
        time.faster();
        assert_eq!(time.speed_label(), "Speed: -100k×");
        time.toggle_pause();
        assert_eq!(time.speed_label(), "Paused");
    }

    #[test]
    fn commands_dispatch() {
        let mut time = TimeController::new(start());
        for command in [TimeCommand::Faster, TimeCommand::Faster, TimeCommand::Faster, TimeCommand::Reverse] {
            time.apply(command);
        }
        assert_eq!(time.effective_rate(), -1000.0);
        time.apply(TimeCommand::TogglePause);
        assert_eq!(time.effective_rate(), 0.0);
        time.apply(TimeCommand::Realtime);
        assert_eq!(time.effective_rate(), 1.0);
    }
}
