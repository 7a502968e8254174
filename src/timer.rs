//! Wall-clock timing of a test run.

use std::time::{Duration, Instant};

/// Units used when rendering a duration, largest first.
const UNITS: &'static [(&'static str, u128)] = &[
    ("hour", 3_600_000),
    ("minute", 60_000),
    ("second", 1_000),
];

/// A stopwatch which is started once and stopped once.
#[derive(Clone, Debug, Default)]
pub struct Timer
{
    started_at: Option<Instant>,
}

impl Timer
{
    pub fn new() -> Self {
        Timer { started_at: None }
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stops the timer, returning the time since it was started.
    ///
    /// A timer which was never started reports zero.
    pub fn stop(&mut self) -> Duration {
        self.started_at.take().map(|t| t.elapsed()).unwrap_or_default()
    }
}

/// Renders a duration for humans, e.g. `350 ms`, `1 second` or `2.25 minutes`.
///
/// Values are truncated to two decimal places in the largest unit they reach.
pub fn format_duration(duration: Duration) -> String {
    let millis = (duration.as_micros() + 500) / 1000;

    for &(unit, unit_millis) in UNITS {
        if millis >= unit_millis {
            let hundredths = millis * 100 / unit_millis;
            let value = hundredths as f64 / 100.0;

            return if hundredths == 100 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", value, unit)
            };
        }
    }

    format!("{} ms", millis)
}
