//! Engine tuning knobs.

use chrono::Duration;

/// Default pulse tolerance in seconds. Pulse correctness assumes the
/// external tick cadence is no slower than this.
pub const PULSE_TOLERANCE_SECS: i64 = 30;

/// Evaluation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// How close to a pulse window's start/end instant "now" must be for the
    /// edge to fire.
    pub pulse_tolerance: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pulse_tolerance: Duration::seconds(PULSE_TOLERANCE_SECS),
        }
    }
}
