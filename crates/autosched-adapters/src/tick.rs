//! Per-tick orchestration.
//!
//! Wires the adapter seams around one engine evaluation:
//! registry lookup → evaluate → record → store save → actuator command.
//! Every failure stays local to its device: a registry miss, an empty
//! schedule set, or a store fault is logged and yields `None` without
//! touching the rest of the batch.

use chrono::{DateTime, TimeZone};
use tracing::error;

use autosched_engine::{evaluate, EngineConfig, ScheduleEntry};
use autosched_log::{build_record, save, LogStore};

use crate::actuator::{map_command, ActuatorCommand};
use crate::registry::{resolve_device, DeviceRegistry};

/// One device's input for a tick.
#[derive(Debug, Clone)]
pub struct DeviceTick<'a> {
    /// Schedule-group key offered to the registry.
    pub device_key: &'a str,
    pub schedules: &'a [ScheduleEntry],
}

/// Evaluate one device for this tick.
///
/// Returns the actuator payload, or `None` when the device is skipped
/// (registry miss, no schedules, store fault) or the decision carries no
/// command (pulse entry outside its edges).
pub fn run_tick<Tz: TimeZone>(
    registry: &dyn DeviceRegistry,
    store: &mut dyn LogStore,
    tick: &DeviceTick<'_>,
    holidays: &[String],
    excluded_days: &[String],
    now: DateTime<Tz>,
    config: &EngineConfig,
) -> Option<ActuatorCommand>
where
    Tz::Offset: std::fmt::Display,
{
    let device = resolve_device(registry, tick.device_key)?;
    let evaluation = evaluate(
        tick.schedules,
        holidays,
        excluded_days,
        now.naive_local(),
        config,
    )?;

    let record = build_record(&device, &evaluation, now);
    if let Err(err) = save(store, record) {
        error!(device = %device.name, error = %err, "failed to persist decision record");
        return None;
    }

    map_command(&evaluation.decision, &device)
}

/// Evaluate a batch of devices for the same tick instant.
///
/// Devices are independent; one device's failure never blocks the others.
/// Returns each offered key with its (possibly absent) command.
pub fn run_batch<'a, Tz: TimeZone>(
    registry: &dyn DeviceRegistry,
    store: &mut dyn LogStore,
    ticks: &[DeviceTick<'a>],
    holidays: &[String],
    excluded_days: &[String],
    now: DateTime<Tz>,
    config: &EngineConfig,
) -> Vec<(&'a str, Option<ActuatorCommand>)>
where
    Tz::Offset: std::fmt::Display,
{
    ticks
        .iter()
        .map(|tick| {
            let command = run_tick(
                registry,
                store,
                tick,
                holidays,
                excluded_days,
                now.clone(),
                config,
            );
            (tick.device_key, command)
        })
        .collect()
}
