use super::Table;
use crate::{Capability, Category, Descriptor};

const BATTERY_LOW: Descriptor = Descriptor {
    icon: Some("mdi:battery"),
    on_icon: Some("mdi:battery-alert"),
    off_icon: Some("mdi:battery"),
    device_class: Some("battery"),
    category: Some(Category::Diagnostic),
    ..Descriptor::new("8.0.9001", "Battery Low", Capability::Binary)
};

const MOTION: Descriptor = Descriptor {
    icon: Some("mdi:account-switch"),
    device_class: Some("motion"),
    ..Descriptor::new("3.1.85", "Motion", Capability::Binary)
};

const OCCUPANCY: Descriptor = Descriptor {
    icon: Some("mdi:account-question"),
    device_class: Some("occupancy"),
    ..Descriptor::new("3.51.85", "Presence", Capability::Binary)
};

const DOOR: Descriptor = Descriptor {
    on_icon: Some("mdi:door-open"),
    off_icon: Some("mdi:door-closed"),
    device_class: Some("door"),
    ..Descriptor::new("3.1.85", "Contact", Capability::Binary)
};

const FLOOD: Descriptor = Descriptor {
    icon: Some("mdi:water"),
    device_class: Some("moisture"),
    ..Descriptor::new("3.1.85", "Water Leak", Capability::Binary)
};

pub(super) const TABLE: Table = &[
    (
        &[
            "lumi.motion.jcn001",
            "lumi.motion.ac02",
            "lumi.motion.agl04",
            "lumi.motion.akr01",
            "lumi.motion.agl02",
            "lumi.sensor_motion.es2",
            "lumi.sensor_motion.aq2",
            "lumi.sensor_motion.v2",
            "lumi.sensor_motion.v1",
        ],
        &[MOTION, BATTERY_LOW],
    ),
    (&["lumi.motion.ac01"], &[OCCUPANCY, BATTERY_LOW]),
    (
        &[
            "lumi.magnet.acn002",
            "lumi.magnet.jcn002",
            "lumi.magnet.ac01",
            "lumi.magnet.akr01",
            "lumi.magnet.agl02",
            "lumi.sensor_magnet.v1",
            "lumi.sensor_magnet.v2",
            "lumi.sensor_magnet.es2",
            "lumi.sensor_magnet.aq2",
        ],
        &[DOOR, BATTERY_LOW],
    ),
    (
        &[
            "lumi.flood.jcn001",
            "lumi.flood.agl02",
            "lumi.sensor_wleak.v1",
            "lumi.sensor_wleak.es1",
            "lumi.sensor_wleak.aq1",
        ],
        &[FLOOD, BATTERY_LOW],
    ),
    (&["aqara.lock.acn008"], &[BATTERY_LOW]),
];
