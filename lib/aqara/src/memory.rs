use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Command, Device, DeviceEvent, DeviceManager, ErasedError, Error, Result};

/// Serialized device list a [`MemoryDeviceManager`] is seeded from.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Snapshot {
    pub devices: Vec<SnapshotDevice>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SnapshotDevice {
    pub id: String,
    pub model: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: BTreeMap<String, String>,
}

#[derive(Default)]
struct State {
    devices: BTreeMap<String, SnapshotDevice>,
    sent: Vec<(String, Command)>,
}

/// Device manager backed by an in-process point cache.
///
/// Commands are recorded rather than delivered anywhere, so callers can
/// inspect what an entity wrote.
#[derive(Default)]
pub struct MemoryDeviceManager {
    state: Mutex<State>,
}

impl MemoryDeviceManager {
    pub fn from_snapshot(snapshot: Snapshot) -> MemoryDeviceManager {
        let manager = MemoryDeviceManager::default();
        for device in snapshot.devices {
            manager.add_device(device);
        }
        manager
    }

    pub fn from_json(json: &str) -> Result<MemoryDeviceManager> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(MemoryDeviceManager::from_snapshot(snapshot))
    }

    pub fn add_device(&self, device: SnapshotDevice) -> DeviceEvent {
        debug!("adding device {} ({})", device.id, device.model);

        let id = device.id.clone();
        self.lock().devices.insert(id.clone(), device);
        DeviceEvent::Discovered(vec![id])
    }

    /// Stores a new point value, returns `None` for unknown devices.
    pub fn update(&self, device_id: &str, resource_key: &str, value: &str) -> Option<DeviceEvent> {
        let mut state = self.lock();
        let device = state.devices.get_mut(device_id)?;

        trace!("{device_id} {resource_key} = {value}");
        device
            .points
            .insert(resource_key.to_string(), value.to_string());

        Some(DeviceEvent::Updated {
            device_id: device_id.to_string(),
            resource_key: resource_key.to_string(),
        })
    }

    pub fn remove_device(&self, device_id: &str) -> Option<DeviceEvent> {
        self.lock()
            .devices
            .remove(device_id)
            .map(|device| DeviceEvent::Removed(device.id))
    }

    pub fn device_ids(&self) -> Vec<String> {
        self.lock().devices.keys().cloned().collect()
    }

    pub fn commands(&self) -> Vec<(String, Command)> {
        self.lock().sent.clone()
    }

    pub fn take_commands(&self) -> Vec<(String, Command)> {
        std::mem::take(&mut self.lock().sent)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DeviceManager for MemoryDeviceManager {
    fn device(&self, device_id: &str) -> Option<Device> {
        self.lock().devices.get(device_id).map(|device| Device {
            id: device.id.clone(),
            model: device.model.clone(),
            name: device.name.clone(),
            resource_keys: device.points.keys().cloned().collect(),
        })
    }

    fn get_point_value(&self, device_id: &str, resource_key: &str) -> Option<String> {
        self.lock()
            .devices
            .get(device_id)?
            .points
            .get(resource_key)
            .cloned()
    }

    async fn send_command(
        &self,
        device_id: &str,
        command: Command,
    ) -> std::result::Result<(), ErasedError> {
        let mut state = self.lock();

        if !state.devices.contains_key(device_id) {
            return Err(Box::new(Error::UnknownDevice(device_id.to_string())));
        }

        debug!(
            "{device_id} <- {}",
            serde_json::to_string(&command).unwrap_or_default()
        );
        state.sent.push((device_id.to_string(), command));

        Ok(())
    }
}
