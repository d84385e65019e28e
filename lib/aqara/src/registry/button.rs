use super::Table;
use crate::{Capability, Category, Descriptor};

const STOP: Descriptor = Descriptor {
    icon: Some("mdi:stop"),
    category: Some(Category::Config),
    ..Descriptor::new("4.7.85", "Stop", Capability::Momentary)
};

const START: Descriptor = Descriptor {
    resource_key: "14.1.85",
    name: "Start",
    icon: Some("mdi:play"),
    ..STOP
};

pub(super) const TABLE: Table = &[(&["aqara.bed.hhcn03"], &[STOP, START])];
