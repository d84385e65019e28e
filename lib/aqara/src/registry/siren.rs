use super::Table;
use crate::{Capability, Descriptor};

// alarm state is read from 8.0.2232, test and mute are separate write keys
const SMOKE_ALARM: Descriptor = Descriptor {
    icon: Some("mdi:alarm-light"),
    on_command_key: Some("4.15.85"),
    off_command_key: Some("4.12.85"),
    ..Descriptor::new("8.0.2232", "Siren", Capability::Toggle)
};

const GATEWAY_ALARM: Descriptor = Descriptor {
    icon: Some("mdi:alarm-light"),
    ..Descriptor::new("14.1.111", "Alarm", Capability::Toggle)
};

pub(super) const TABLE: Table = &[
    (
        &[
            "lumi.sensor_smoke.acn05",
            "lumi.sensor_smoke.jcn01",
            "lumi.sensor_smoke.acn03",
        ],
        &[SMOKE_ALARM],
    ),
    (
        &[
            "lumi.gateway.acn01",
            "lumi.gateway.acn002",
            "lumi.gateway.acn004",
            "lumi.gateway.acn005",
            "lumi.gateway.aeu01",
            "lumi.gateway.agl001",
            "lumi.gateway.agl002",
            "lumi.gateway.irabr01",
            "lumi.gateway.iragl5",
            "lumi.gateway.iragl8",
            "lumi.gateway.sacn01",
            "lumi.acpartner.acn001",
            "lumi.acpartner.eicn01",
            "lumi.aircondition.acn05",
            "lumi.plug.eicn02",
            "lumi.camera.acn003",
            "lumi.camera.agl001",
            "lumi.camera.akr001",
            "lumi.camera.gwag03",
            "lumi.camera.gwagl01",
            "lumi.camera.gwagl02",
            "lumi.camera.gwakr1",
            "lumi.camera.gwpagl01",
            "lumi.camera.gwpgl1",
        ],
        &[GATEWAY_ALARM],
    ),
];
