//! # autosched-adapters
//!
//! The thin seams between the autosched decision engine and its external
//! collaborators: the device registry, the actuator command transport, and
//! the telemetry sink -- plus the per-tick orchestration that wires them
//! together with per-device failure isolation.
//!
//! ## Modules
//!
//! - [`registry`] — device lookup trait, trimmed-key resolve, miss handling
//! - [`actuator`] — decision → `{generic, id, channel, value}` payloads
//! - [`telemetry`] — record → per-device telemetry frames
//! - [`tick`] — one-device and batch tick runners

pub mod actuator;
pub mod registry;
pub mod telemetry;
pub mod tick;

pub use actuator::{map_command, ActuatorCommand, ACTIVATE_VALUE, SHUTDOWN_VALUE};
pub use registry::{resolve_device, DeviceRegistry, InMemoryRegistry};
pub use telemetry::format_telemetry;
pub use tick::{run_batch, run_tick, DeviceTick};
