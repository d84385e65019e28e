use super::Table;
use crate::{Capability, Category, Descriptor};

const OUTLET: Descriptor = Descriptor {
    device_class: Some("outlet"),
    category: Some(Category::Config),
    ..Descriptor::new("4.1.85", "Switch", Capability::Toggle)
};

const CHANNEL_1: Descriptor = Descriptor {
    device_class: Some("switch"),
    category: Some(Category::Config),
    ..Descriptor::new("4.1.85", "Switch 1", Capability::Toggle)
};

const CHANNEL_2: Descriptor = Descriptor {
    resource_key: "4.2.85",
    name: "Switch 2",
    ..CHANNEL_1
};

const CHANNEL_3: Descriptor = Descriptor {
    resource_key: "4.3.85",
    name: "Switch 3",
    ..CHANNEL_1
};

const CHANNEL_4: Descriptor = Descriptor {
    resource_key: "4.4.85",
    name: "Switch 4",
    ..CHANNEL_1
};

const CHANNEL_5: Descriptor = Descriptor {
    resource_key: "4.5.85",
    name: "Switch 5",
    ..CHANNEL_1
};

const CHANNEL_6: Descriptor = Descriptor {
    resource_key: "4.6.85",
    name: "Switch 6",
    ..CHANNEL_1
};

pub(super) const TABLE: Table = &[
    (
        &[
            "lumi.plug.v1",
            "lumi.plug.aq1",
            "lumi.plug.es1",
            "lumi.plug.acn002",
            "lumi.plug.acn003",
            "lumi.plug.eicn01",
            "lumi.plug.eicn03",
            "lumi.plug.macn01",
            "lumi.plug.maeu01",
            "lumi.plug.maus01",
            "lumi.plug.makr01",
            "lumi.plug.mitw01",
            "lumi.plug.mmeu01",
            "lumi.plug.sacn02",
            "lumi.plug.sacn03",
            "lumi.plug.sgwacn01",
            "lumi.gateway.sacn01",
            "lumi.ctrl_86plug.v1",
            "lumi.ctrl_86plug.aq1",
            "lumi.ctrl_86plug.es1",
            "miot.powerstrip.v2",
            "miot.powerstrip.qmi_v1",
        ],
        &[OUTLET],
    ),
    (
        &[
            "lumi.switch.jcn001",
            "lumi.switch.acn023",
            "lumi.switch.acn029",
            "lumi.switch.b1lc04",
            "lumi.switch.b1nc01",
            "lumi.switch.b1lacn01",
            "lumi.switch.b1lacn02",
            "lumi.switch.b1nacn01",
            "lumi.switch.b1laus01",
            "lumi.switch.b1naus01",
            "lumi.switch.l0acn1",
            "lumi.switch.l0agl1",
            "lumi.switch.l1acn1",
            "lumi.switch.l1aeu1",
            "lumi.switch.l1akr1",
            "lumi.switch.n0acn1",
            "lumi.switch.n0acn2",
            "lumi.switch.n0agl1",
            "lumi.switch.n1acn1",
            "lumi.switch.n1aeu1",
            "lumi.switch.n1eic1",
            "lumi.switch.eicn02",
            "lumi.switch.eicn03",
            "lumi.ctrl_neutral1.es1",
            "lumi.ctrl_neutral1.aq1",
            "lumi.ctrl_ln1.v1",
            "lumi.ctrl_ln1.es1",
            "lumi.ctrl_dualchn.v1",
            "lumi.ctrl_dualchn.es1",
        ],
        &[CHANNEL_1],
    ),
    (
        &[
            "lumi.switch.acn024",
            "lumi.switch.acn030",
            "lumi.switch.b2lc04",
            "lumi.switch.b2nc01",
            "lumi.switch.b2lacn01",
            "lumi.switch.b2lacn02",
            "lumi.switch.b2nacn01",
            "lumi.switch.b2nacn02",
            "lumi.switch.b1nacn02",
            "lumi.switch.b2laus01",
            "lumi.switch.b2naus01",
            "lumi.switch.jcn002",
            "lumi.switch.l2acn1",
            "lumi.switch.l2aeu1",
            "lumi.switch.l2akr1",
            "lumi.switch.n2acn1",
            "lumi.switch.n2aeu1",
            "lumi.switch.n2eic1",
            "aqara.switch.n2eic1",
            "lumi.airrtc.pcacn2_scenepanel",
            "lumi.ctrl_ln1.aq1",
            "lumi.ctrl_ln2.v1",
            "lumi.ctrl_ln2.es1",
            "lumi.ctrl_ln2.aq1",
            "lumi.ctrl_neutral1.v1",
            "lumi.ctrl_neutral2.v1",
            "lumi.ctrl_neutral2.es1",
            "lumi.ctrl_neutral2.aq1",
            "lumi.ctrl_dualchn.aq1",
            "lumi.relay.c2acn01",
        ],
        &[CHANNEL_1, CHANNEL_2],
    ),
    (
        &[
            "lumi.switch.acn015",
            "lumi.switch.acn022",
            "lumi.switch.acn028",
            "lumi.switch.acn031",
            "lumi.switch.b3l01",
            "lumi.switch.b3n01",
            "lumi.switch.jcn004",
            "lumi.switch.l3acn1",
            "lumi.switch.l3acn3",
            "lumi.switch.n3acn1",
            "lumi.switch.n3acn3",
            "lumi.switch.n3eic1",
            "lumi.switch.n4acn4",
            "lumi.airrtc.pcacn2",
            "lumi.airrtc.pcacn2_thermostat",
        ],
        &[CHANNEL_1, CHANNEL_2, CHANNEL_3],
    ),
    (
        &["lumi.switch.n4eic1", "lumi.relay.c4acn01"],
        &[CHANNEL_1, CHANNEL_2, CHANNEL_3, CHANNEL_4],
    ),
    (
        &["lumi.switch.n6eic1"],
        &[CHANNEL_1, CHANNEL_2, CHANNEL_3, CHANNEL_4, CHANNEL_5, CHANNEL_6],
    ),
];
