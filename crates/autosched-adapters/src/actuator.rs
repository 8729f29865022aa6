//! Decision to actuator-command mapping.
//!
//! Shapes the final decision for the downstream command transport. A tick
//! that neither activates nor shuts down produces no payload at all --
//! never an ambiguous value.

use serde::{Deserialize, Serialize};

use autosched_engine::{Decision, Device};

/// Channel value commanded on activation.
pub const ACTIVATE_VALUE: u8 = 100;
/// Channel value commanded on shutdown.
pub const SHUTDOWN_VALUE: u8 = 0;

/// Wire payload for the command transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorCommand {
    /// Always `true`; marks the generic channel-write command family.
    pub generic: bool,
    /// Bus slave address.
    pub id: u8,
    pub channel: u8,
    pub value: u8,
}

/// Map a decision onto the device's bus address.
///
/// Activation wins the payload when both flags would apply upstream -- by
/// the engine's invariant they never do, so the order here only documents
/// the priority.
pub fn map_command(decision: &Decision, device: &Device) -> Option<ActuatorCommand> {
    let value = if decision.should_activate {
        ACTIVATE_VALUE
    } else if decision.should_shutdown {
        SHUTDOWN_VALUE
    } else {
        return None;
    };
    Some(ActuatorCommand {
        generic: true,
        id: device.slave_id,
        channel: device.channel_id,
        value,
    })
}
