use serde::{Deserialize, Serialize};
use str_derive::Str;

use crate::{Error, Result, VacuumProfile};

/// Raw wire value -> display label.
pub type EnumMap = &'static [(&'static str, &'static str)];

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Sensor,
    BinarySensor,
    Switch,
    Number,
    Button,
    Siren,
    Vacuum,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Config,
    Diagnostic,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Integer,
    Decimal,
    Enum,
    Boolean,
}

/// How an entity reads its point and which commands it accepts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Capability {
    /// On/off threshold test, read only.
    Binary,
    /// On/off read, turn on/off writes.
    Toggle,
    /// Scaled numeric read.
    Measurement,
    /// Scaled numeric read and bounded write.
    Setting,
    /// Read through `enum_value_map`, write by label.
    EnumState,
    /// Write only, sends `press_value`.
    Momentary,
    Vacuum(&'static VacuumProfile),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OnValue {
    Single(&'static str),
    AnyOf(&'static [&'static str]),
}

impl OnValue {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            OnValue::Single(value) => *value == raw,
            OnValue::AnyOf(values) => values.contains(&raw),
        }
    }

    /// The value written when turning on.
    pub fn wire(&self) -> &'static str {
        match self {
            OnValue::Single(value) => value,
            OnValue::AnyOf(values) => values.first().copied().unwrap_or_default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Static metadata and encoding rules for presenting one resource as an entity.
///
/// Variants for other channels are built with struct update syntax:
///
/// ```ignore
/// const CHANNEL_3: Descriptor = Descriptor {
///     resource_key: "0.3.85",
///     name: "Channel 3 Temperature",
///     ..TEMPERATURE
/// };
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Descriptor {
    pub resource_key: &'static str,
    pub name: &'static str,
    pub capability: Capability,
    pub unit: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub on_icon: Option<&'static str>,
    pub off_icon: Option<&'static str>,
    pub category: Option<Category>,
    pub device_class: Option<&'static str>,
    pub scale: f64,
    pub precision: Option<u8>,
    pub data_type: Option<DataType>,
    pub on_value: OnValue,
    pub off_value: &'static str,
    pub on_command_key: Option<&'static str>,
    pub off_command_key: Option<&'static str>,
    pub press_value: &'static str,
    pub bounds: Option<Bounds>,
    pub enum_value_map: Option<EnumMap>,
    /// Raw value -> device event kind fired when the point changes.
    pub events: Option<EnumMap>,
}

impl Descriptor {
    pub const fn new(
        resource_key: &'static str,
        name: &'static str,
        capability: Capability,
    ) -> Descriptor {
        Descriptor {
            resource_key,
            name,
            capability,
            unit: None,
            icon: None,
            on_icon: None,
            off_icon: None,
            category: None,
            device_class: None,
            scale: 1.0,
            precision: None,
            data_type: None,
            on_value: OnValue::Single("1"),
            off_value: "0",
            on_command_key: None,
            off_command_key: None,
            press_value: "1",
            bounds: None,
            enum_value_map: None,
            events: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason| Err(Error::InvalidDescriptor(self.resource_key, reason));

        if self.scale == 0.0 || !self.scale.is_finite() {
            return invalid("scale must be finite and non-zero");
        }

        if let Some(bounds) = self.bounds {
            if bounds.min > bounds.max {
                return invalid("min is greater than max");
            }
            if bounds.step <= 0.0 {
                return invalid("step must be positive");
            }
        }

        match self.capability {
            Capability::Setting if self.bounds.is_none() => invalid("setting without bounds"),
            Capability::EnumState if self.enum_value_map.is_none() => {
                invalid("enum state without value map")
            }
            _ => Ok(()),
        }
    }

    pub fn command_key(&self, on: bool) -> &'static str {
        let key = if on {
            self.on_command_key
        } else {
            self.off_command_key
        };

        key.unwrap_or(self.resource_key)
    }
}
