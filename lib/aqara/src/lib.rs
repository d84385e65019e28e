mod codec;
mod descriptor;
mod device_manager;
mod dispatcher;
mod entity;
mod error;
mod integration;
mod memory;
mod point;
mod registry;
mod vacuum;

pub use codec::{decode, decode_bool, decode_enum, encode, encode_bool, encode_label, round_to, Value};
pub use descriptor::{Bounds, Capability, Category, DataType, Descriptor, EnumMap, OnValue, Platform};
pub use device_manager::{Command, DeviceEvent, DeviceManager, ErasedError};
pub use dispatcher::{Dispatcher, Subscription};
pub use entity::{Entity, EntityState};
pub use error::Error;
pub use integration::{DeviceTrigger, Integration, StateUpdate};
pub use memory::{MemoryDeviceManager, Snapshot, SnapshotDevice};
pub use point::{Device, PointId};
pub use registry::descriptors;
pub use vacuum::{FanSpeed, VacuumFeature, VacuumProfile, VacuumState, VacuumStatus, Write};

pub type Result<T> = std::result::Result<T, Error>;
