//! Device registry seam.
//!
//! The registry is external; this module defines the lookup trait the tick
//! runner consumes, an in-memory implementation, and the miss handling: try
//! the raw key, then a trimmed variant, then log a diagnostic naming the
//! offered key and the available keys and skip the device. No retry, no
//! default.

use std::collections::HashMap;

use tracing::warn;

use autosched_engine::Device;

/// Lookup interface over the external device registry, keyed by a
/// schedule-group key.
pub trait DeviceRegistry {
    fn lookup(&self, key: &str) -> Option<Device>;
    /// The keys currently known, for miss diagnostics.
    fn keys(&self) -> Vec<String>;
}

/// HashMap-backed registry for tests and the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    devices: HashMap<String, Device>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, device: Device) {
        self.devices.insert(key.into(), device);
    }
}

impl FromIterator<(String, Device)> for InMemoryRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Device)>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl DeviceRegistry for InMemoryRegistry {
    fn lookup(&self, key: &str) -> Option<Device> {
        self.devices.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.devices.keys().cloned().collect()
    }
}

/// Resolve a device, tolerating stray whitespace in the offered key.
///
/// Tries the raw key first, then the trimmed variant. On a miss, logs a
/// warning with the offered key and the keys the registry does know, and
/// returns `None` so the caller skips this device's tick.
pub fn resolve_device(registry: &dyn DeviceRegistry, key: &str) -> Option<Device> {
    if let Some(device) = registry.lookup(key) {
        return Some(device);
    }
    let trimmed = key.trim();
    if trimmed != key {
        if let Some(device) = registry.lookup(trimmed) {
            return Some(device);
        }
    }
    warn!(
        offered = %key,
        available = ?registry.keys(),
        "device not found in registry, skipping tick"
    );
    None
}
