//! Actuator target identity.

use serde::{Deserialize, Serialize};

/// An actuator target resolved from the device registry.
///
/// `slave_id`/`channel_id` are the bus addressing the command mapper needs;
/// `name` and `id` identify the device in observability records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    pub id: String,
    pub slave_id: u8,
    pub channel_id: u8,
}
