use std::fmt;

use crate::{ErasedError, Platform};

#[derive(Debug)]
pub enum Error {
    MissingTypeData(&'static str),
    InvalidDescriptor(&'static str, &'static str),
    OutOfRange { value: f64, min: f64, max: f64 },
    UnknownLabel(String),
    Unsupported(&'static str, Platform),
    UnknownDevice(String),
    UnknownEntity(String),
    DeviceManager(ErasedError),
    Json(serde_json::Error),
}

impl From<ErasedError> for Error {
    fn from(err: ErasedError) -> Self {
        Self::DeviceManager(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTypeData(key) => {
                write!(f, "cannot set value of {key}, descriptor has no type data")
            }
            Self::InvalidDescriptor(key, reason) => {
                write!(f, "invalid descriptor {key}: {reason}")
            }
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} is out of range [{min}, {max}]")
            }
            Self::UnknownLabel(label) => write!(f, "unknown label {label}"),
            Self::Unsupported(operation, platform) => {
                write!(f, "{operation} is not supported by {platform} entities")
            }
            Self::UnknownDevice(id) => write!(f, "unknown device {id}"),
            Self::UnknownEntity(id) => write!(f, "unknown entity {id}"),
            Self::DeviceManager(err) => write!(f, "device manager error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
