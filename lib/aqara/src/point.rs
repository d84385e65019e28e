use std::fmt;

use serde::{Deserialize, Serialize};

const UNIQUE_ID_PREFIX: &str = "Aqara";
const SIGNAL_PREFIX: &str = "aqara_update_point_value";

/// Identifies one resource endpoint on one device.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct PointId {
    pub device_id: String,
    pub resource_key: String,
}

impl PointId {
    pub fn new<D: Into<String>, R: Into<String>>(device_id: D, resource_key: R) -> PointId {
        PointId {
            device_id: device_id.into(),
            resource_key: resource_key.into(),
        }
    }

    pub fn unique_id(&self) -> String {
        format!("{UNIQUE_ID_PREFIX}.{self}")
    }

    /// Name of the dispatcher signal fired when this point's value changes.
    pub fn signal(&self) -> String {
        format!("{SIGNAL_PREFIX}_{}", self.to_string().replace('.', "_"))
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.device_id, self.resource_key)
    }
}

/// A device as reported by the device manager at discovery time.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Device {
    pub id: String,
    pub model: String,
    pub name: String,
    pub resource_keys: Vec<String>,
}

impl Device {
    pub fn has_resource(&self, resource_key: &str) -> bool {
        self.resource_keys.iter().any(|key| key == resource_key)
    }

    pub fn point(&self, resource_key: &str) -> PointId {
        PointId::new(&self.id, resource_key)
    }
}
