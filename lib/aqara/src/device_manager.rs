use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Device, PointId};

pub type ErasedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Resource key -> value pairs written to one device in a single call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Command(BTreeMap<String, String>);

impl Command {
    pub fn single<K: Into<String>, V: Into<String>>(key: K, value: V) -> Command {
        let mut command = Command::default();
        command.insert(key, value);
        command
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Notifications the device manager pushes towards the integration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceEvent {
    Discovered(Vec<String>),
    Updated {
        device_id: String,
        resource_key: String,
    },
    Removed(String),
}

/// Cached device state and the outbound command path.
///
/// Reads are synchronous and served from the manager's cache. An absent value
/// and an empty string mean the same thing to callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceManager: Send + Sync {
    fn device(&self, device_id: &str) -> Option<Device>;

    fn get_point_value(&self, device_id: &str, resource_key: &str) -> Option<String>;

    fn get_value(&self, point: &PointId) -> Option<String> {
        self.get_point_value(&point.device_id, &point.resource_key)
    }

    async fn send_command(&self, device_id: &str, command: Command) -> Result<(), ErasedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json() {
        let mut command = Command::single("14.47.85", "1");
        command.insert("14.48.85", "3");

        assert_eq!(
            serde_json::to_string(&command).unwrap(),
            r#"{"14.47.85":"1","14.48.85":"3"}"#
        );
        assert_eq!(command.get("14.48.85"), Some("3"));
        assert_eq!(command.len(), 2);
    }
}
