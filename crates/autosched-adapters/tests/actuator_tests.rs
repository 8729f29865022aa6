//! Tests for the actuator command mapper.

use autosched_adapters::{map_command, ACTIVATE_VALUE, SHUTDOWN_VALUE};
use autosched_engine::{Decision, Device, Reason};

fn device() -> Device {
    Device {
        name: "Hall Light".to_string(),
        id: "dev-4".to_string(),
        slave_id: 9,
        channel_id: 2,
    }
}

#[test]
fn activation_commands_full_value() {
    let decision = Decision {
        should_activate: true,
        should_shutdown: false,
        reason: Reason::Weekday,
    };
    let command = map_command(&decision, &device()).expect("activating decision has a payload");
    assert!(command.generic);
    assert_eq!(command.id, 9);
    assert_eq!(command.channel, 2);
    assert_eq!(command.value, ACTIVATE_VALUE);
}

#[test]
fn shutdown_commands_zero() {
    let decision = Decision {
        should_activate: false,
        should_shutdown: true,
        reason: Reason::Excluded,
    };
    let command = map_command(&decision, &device()).expect("shutdown decision has a payload");
    assert_eq!(command.value, SHUTDOWN_VALUE);
}

#[test]
fn neither_flag_means_no_payload_at_all() {
    let decision = Decision {
        should_activate: false,
        should_shutdown: false,
        reason: Reason::Weekday,
    };
    assert!(map_command(&decision, &device()).is_none());
}

#[test]
fn wire_layout_matches_the_transport() {
    let decision = Decision {
        should_activate: true,
        should_shutdown: false,
        reason: Reason::Holiday,
    };
    let command = map_command(&decision, &device()).expect("activating decision has a payload");
    let json = serde_json::to_value(command).expect("command serializes");
    assert_eq!(
        json,
        serde_json::json!({ "generic": true, "id": 9, "channel": 2, "value": 100 })
    );
}
