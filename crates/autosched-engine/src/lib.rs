//! # autosched-engine
//!
//! Holiday-aware, multi-schedule time-window decision engine for
//! building-automation devices (HVAC, lighting, valves).
//!
//! The engine is invoked on a fixed external tick and answers one binary
//! question per call: should this device be active "now"? It holds no
//! timers and no state across ticks -- every call re-resolves the calendar,
//! filters the applicable schedule entries, evaluates their time windows,
//! and merges the results with shutdown-wins precedence.
//!
//! ## Modules
//!
//! - [`calendar`] — classify "today" as holiday/excluded/weekday
//! - [`schedule`] — schedule entry types and lenient `HH:MM` parsing
//! - [`filter`] — holiday-exclusive entry selection and ordering
//! - [`window`] — per-entry retain/pulse window evaluation
//! - [`decision`] — aggregation, exclusion override, top-level [`evaluate`]
//! - [`device`] — actuator target identity
//! - [`config`] — pulse tolerance and friends
//! - [`error`] — validation error types

pub mod calendar;
pub mod config;
pub mod decision;
pub mod device;
pub mod error;
pub mod filter;
pub mod schedule;
pub mod window;

pub use calendar::{CalendarContext, WeekdayTag};
pub use config::EngineConfig;
pub use decision::{evaluate, Decision, Evaluation, Reason};
pub use device::Device;
pub use error::EngineError;
pub use schedule::{DaysWeek, ScheduleEntry};
pub use window::{evaluate_entry, WindowEval};
