use super::Table;
use crate::{Bounds, Capability, DataType, Descriptor};

const BACK_LIFT: Descriptor = Descriptor {
    icon: Some("mdi:bed"),
    data_type: Some(DataType::Integer),
    precision: Some(0),
    bounds: Some(Bounds {
        min: 0.0,
        max: 60.0,
        step: 1.0,
    }),
    ..Descriptor::new("14.48.85", "Back Lift", Capability::Setting)
};

const LEG_LIFT: Descriptor = Descriptor {
    resource_key: "14.93.85",
    name: "Leg Lift",
    bounds: Some(Bounds {
        min: 0.0,
        max: 40.0,
        step: 1.0,
    }),
    ..BACK_LIFT
};

pub(super) const TABLE: Table = &[(&["aqara.bed.hhcn03"], &[BACK_LIFT, LEG_LIFT])];
