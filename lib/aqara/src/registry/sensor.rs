use super::Table;
use crate::{Capability, Category, Descriptor, EnumMap};

const BATTERY_STATE: Descriptor = Descriptor {
    icon: Some("mdi:battery"),
    category: Some(Category::Diagnostic),
    ..Descriptor::new("8.0.9001", "Battery State", Capability::Measurement)
};

const BATTERY_VOLTAGE: Descriptor = Descriptor {
    unit: Some("V"),
    device_class: Some("voltage"),
    category: Some(Category::Diagnostic),
    scale: 0.001,
    precision: Some(2),
    ..Descriptor::new("8.0.2008", "Battery Voltage", Capability::Measurement)
};

const TEMPERATURE: Descriptor = Descriptor {
    unit: Some("°C"),
    device_class: Some("temperature"),
    scale: 0.01,
    precision: Some(1),
    ..Descriptor::new("0.1.85", "Temperature", Capability::Measurement)
};

const HUMIDITY: Descriptor = Descriptor {
    unit: Some("%"),
    device_class: Some("humidity"),
    scale: 0.01,
    precision: Some(1),
    ..Descriptor::new("0.2.85", "Humidity", Capability::Measurement)
};

const PRESSURE: Descriptor = Descriptor {
    unit: Some("kPa"),
    device_class: Some("pressure"),
    scale: 0.001,
    precision: Some(2),
    ..Descriptor::new("0.3.85", "Pressure", Capability::Measurement)
};

const CO2: Descriptor = Descriptor {
    unit: Some("ppm"),
    device_class: Some("carbon_dioxide"),
    scale: 0.01,
    ..Descriptor::new("0.6.85", "CO2", Capability::Measurement)
};

const PM25: Descriptor = Descriptor {
    unit: Some("µg/m³"),
    device_class: Some("pm25"),
    ..Descriptor::new("0.20.85", "PM2.5", Capability::Measurement)
};

const ILLUMINANCE: Descriptor = Descriptor {
    unit: Some("lx"),
    device_class: Some("illuminance"),
    precision: Some(0),
    ..Descriptor::new("0.3.85", "Illuminance", Capability::Measurement)
};

const TVOC: Descriptor = Descriptor {
    unit: Some("mg/m³"),
    device_class: Some("volatile_organic_compounds"),
    precision: Some(0),
    ..Descriptor::new("0.3.85", "TVOC", Capability::Measurement)
};

const GAS: Descriptor = Descriptor {
    unit: Some("%LEL"),
    device_class: Some("gas"),
    precision: Some(0),
    ..Descriptor::new("0.5.85", "Gas Concentration", Capability::Measurement)
};

const LEVEL: Descriptor = Descriptor::new("13.1.85", "Level", Capability::Measurement);

const VALVE: Descriptor = Descriptor {
    icon: Some("mdi:valve"),
    enum_value_map: Some(&[("1", "open"), ("2", "forced_closed")]),
    ..Descriptor::new("14.1.85", "Valve", Capability::EnumState)
};

const SMOKE_ALARM: Descriptor = Descriptor {
    icon: Some("mdi:smoke-detector"),
    enum_value_map: Some(&[("0", "normal"), ("1", "alarm")]),
    ..Descriptor::new("14.1.111", "Alarm State", Capability::EnumState)
};

const SMOKE_DENSITY: Descriptor =
    Descriptor::new("0.1.85", "Smoke Density", Capability::Measurement);

const CUBE_GESTURES: EnumMap = &[
    ("0", "flip90"),
    ("1", "flip180"),
    ("2", "move"),
    ("3", "shake_air"),
    ("16", "rotate"),
    ("17", "tap_twice"),
    ("20", "alert"),
    ("28", "hold"),
    ("29", "swing"),
];

const CUBE_STATUS: Descriptor = Descriptor {
    icon: Some("mdi:cube-outline"),
    enum_value_map: Some(CUBE_GESTURES),
    events: Some(CUBE_GESTURES),
    ..Descriptor::new("13.1.85", "Cube Status", Capability::EnumState)
};

// percent of a full turn
const CUBE_ROTATION: Descriptor = Descriptor {
    unit: Some("%"),
    precision: Some(0),
    ..Descriptor::new("0.3.85", "Rotation", Capability::Measurement)
};

const CUBE_ACTION_SIDE: Descriptor = Descriptor {
    precision: Some(0),
    ..Descriptor::new("13.101.85", "Action Side", Capability::Measurement)
};

const CUBE_TOP_SIDE: Descriptor = Descriptor {
    resource_key: "13.103.85",
    name: "Top Side",
    ..CUBE_ACTION_SIDE
};

const VIBRATION: Descriptor = Descriptor::new("13.1.85", "Vibration", Capability::Measurement);

const BUTTON_CLICKS: EnumMap = &[
    ("1", "single_click"),
    ("2", "double_click"),
    ("16", "long_press"),
];

const BUTTON_1: Descriptor = Descriptor {
    icon: Some("mdi:light-switch"),
    events: Some(BUTTON_CLICKS),
    ..Descriptor::new("13.1.85", "Button 1", Capability::Measurement)
};

const BUTTON_2: Descriptor = Descriptor {
    resource_key: "13.2.85",
    name: "Button 2",
    ..BUTTON_1
};

const BUTTON_3: Descriptor = Descriptor {
    resource_key: "13.3.85",
    name: "Button 3",
    ..BUTTON_1
};

const BUTTON_BOTH: Descriptor = Descriptor {
    resource_key: "13.3.85",
    name: "Both Buttons",
    ..BUTTON_1
};

const BUTTON_4: Descriptor = Descriptor {
    resource_key: "13.4.85",
    name: "Button 4",
    ..BUTTON_1
};

// 13.5.85 is skipped by the six key panels
const BUTTON_5: Descriptor = Descriptor {
    resource_key: "13.6.85",
    name: "Button 5",
    ..BUTTON_1
};

const BUTTON_6: Descriptor = Descriptor {
    resource_key: "13.7.85",
    name: "Button 6",
    ..BUTTON_1
};

const fn channel(
    base: Descriptor,
    resource_key: &'static str,
    name: &'static str,
) -> Descriptor {
    Descriptor {
        resource_key,
        name,
        ..base
    }
}

const TEMPERATURE_HUMIDITY: &[Descriptor] = &[
    TEMPERATURE,
    HUMIDITY,
    PRESSURE,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const SOIL: &[Descriptor] = &[
    TEMPERATURE,
    HUMIDITY,
    channel(TEMPERATURE, "0.3.85", "Channel 3 Temperature"),
    channel(TEMPERATURE, "0.4.85", "Channel 4 Temperature"),
    channel(TEMPERATURE, "0.5.85", "Channel 5 Temperature"),
    channel(TEMPERATURE, "0.6.85", "Channel 6 Temperature"),
    channel(TEMPERATURE, "0.7.85", "Channel 7 Temperature"),
    channel(TEMPERATURE, "0.8.85", "Channel 8 Temperature"),
    channel(TEMPERATURE, "0.9.85", "Channel 9 Temperature"),
    channel(TEMPERATURE, "0.10.85", "Channel 10 Temperature"),
    channel(HUMIDITY, "0.11.85", "Channel 1 Humidity"),
    channel(HUMIDITY, "0.12.85", "Channel 2 Humidity"),
    channel(HUMIDITY, "0.13.85", "Channel 3 Humidity"),
    channel(HUMIDITY, "0.14.85", "Channel 4 Humidity"),
    channel(HUMIDITY, "0.15.85", "Channel 5 Humidity"),
    channel(HUMIDITY, "0.16.85", "Channel 6 Humidity"),
    channel(HUMIDITY, "0.17.85", "Channel 7 Humidity"),
    channel(HUMIDITY, "0.18.85", "Channel 8 Humidity"),
    channel(HUMIDITY, "0.19.85", "Channel 9 Humidity"),
    channel(HUMIDITY, "0.20.85", "Channel 10 Humidity"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const CO2_CHANNELS: &[Descriptor] = &[
    channel(CO2, "0.1.85", "Channel 1 CO2"),
    channel(CO2, "0.2.85", "Channel 2 CO2"),
    channel(CO2, "0.3.85", "Channel 3 CO2"),
    channel(CO2, "0.4.85", "Channel 4 CO2"),
    channel(CO2, "0.5.85", "Channel 5 CO2"),
    channel(CO2, "0.6.85", "Channel 6 CO2"),
    channel(CO2, "0.7.85", "Channel 7 CO2"),
    channel(CO2, "0.8.85", "Channel 8 CO2"),
    channel(CO2, "0.9.85", "Channel 9 CO2"),
    channel(CO2, "0.10.85", "Channel 10 CO2"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const ILLUMINATION: &[Descriptor] = &[ILLUMINANCE, BATTERY_STATE, BATTERY_VOLTAGE];

const AIR_DETECTOR: &[Descriptor] = &[
    TEMPERATURE,
    HUMIDITY,
    channel(CO2, "0.6.85", "Indoor CO2"),
    channel(PM25, "0.19.85", "Outdoor PM2.5"),
    channel(PM25, "0.20.85", "Indoor PM2.5"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const TVOC_MONITOR: &[Descriptor] = &[
    TEMPERATURE,
    HUMIDITY,
    TVOC,
    channel(LEVEL, "13.1.85", "TVOC Level"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const AIR_PANEL: &[Descriptor] = &[
    TEMPERATURE,
    HUMIDITY,
    CO2,
    channel(PM25, "0.19.85", "PM2.5"),
    channel(LEVEL, "13.11.85", "CO2 Level"),
    channel(LEVEL, "13.12.85", "PM2.5 Level"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const GAS_ALARM: &[Descriptor] = &[TEMPERATURE, GAS, BATTERY_STATE, BATTERY_VOLTAGE];

const GAS_ALARM_WITH_VALVE: &[Descriptor] = &[
    TEMPERATURE,
    GAS,
    VALVE,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const GAS_METER: &[Descriptor] = &[
    TEMPERATURE,
    channel(GAS, "0.5.85", "Gas Meter"),
    VALVE,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const NATURAL_GAS: &[Descriptor] = &[
    channel(GAS, "0.1.85", "Gas Concentration"),
    VALVE,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const SMOKE_ALARM_X1: &[Descriptor] = &[
    channel(GAS, "0.5.85", "Smoke Concentration"),
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const SMOKE_SENSOR: &[Descriptor] = &[SMOKE_DENSITY, SMOKE_ALARM, BATTERY_STATE, BATTERY_VOLTAGE];

const CUBE: &[Descriptor] = &[CUBE_STATUS, CUBE_ROTATION, BATTERY_STATE, BATTERY_VOLTAGE];

const CUBE_PRO: &[Descriptor] = &[
    CUBE_STATUS,
    channel(CUBE_ROTATION, "0.21.85", "Rotation"),
    CUBE_ACTION_SIDE,
    CUBE_TOP_SIDE,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const ONE_KEY: &[Descriptor] = &[BUTTON_1, BATTERY_STATE, BATTERY_VOLTAGE];

const TWO_KEY: &[Descriptor] = &[BUTTON_1, BUTTON_2, BATTERY_STATE, BATTERY_VOLTAGE];

const TWO_KEY_WITH_BOTH: &[Descriptor] = &[
    BUTTON_1,
    BUTTON_2,
    BUTTON_BOTH,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const THREE_KEY: &[Descriptor] = &[
    BUTTON_1,
    BUTTON_2,
    BUTTON_3,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const FOUR_KEY: &[Descriptor] = &[
    BUTTON_1,
    BUTTON_2,
    BUTTON_3,
    BUTTON_4,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

const SIX_KEY: &[Descriptor] = &[
    BUTTON_1,
    BUTTON_2,
    BUTTON_3,
    BUTTON_4,
    BUTTON_5,
    BUTTON_6,
    BATTERY_STATE,
    BATTERY_VOLTAGE,
];

pub(super) const TABLE: Table = &[
    (
        &[
            "lumi.sensor_ht.jcn001",
            "lumi.sensor_ht.agl02",
            "lumi.sensor_ht.v1",
            "lumi.sensor_ht.es1",
            "lumi.weather.es1",
            "lumi.weather.v1",
        ],
        TEMPERATURE_HUMIDITY,
    ),
    (&["lumi.sensor_ht.agl03"], SOIL),
    (
        &[
            "lumi.sen_ill.eicn01",
            "lumi.sen_ill.akr01",
            "lumi.sen_ill.mgl01",
            "lumi.sen_ill.agl01",
        ],
        ILLUMINATION,
    ),
    (&["aqara.adetector.drcn01"], AIR_DETECTOR),
    (&["lumi.airmonitor.acn01"], TVOC_MONITOR),
    (&["lumi.airmonitor.agl02"], CO2_CHANNELS),
    (&["lumi.airm.fhac01"], AIR_PANEL),
    (&["lumi.sensor_gas.acn001", "lumi.sensor_gas.jcn001"], GAS_ALARM),
    (&["lumi.sensor_gas.acn02"], GAS_ALARM_WITH_VALVE),
    (&["lumi.sen_gas.hrcn01"], GAS_METER),
    (&["lumi.sensor_natgas.v1"], NATURAL_GAS),
    (
        &[
            "lumi.sensor_smoke.acn05",
            "lumi.sensor_smoke.jcn01",
            "lumi.sensor_smoke.acn03",
        ],
        SMOKE_ALARM_X1,
    ),
    (&["lumi.sensor_smoke.acn02", "lumi.sensor_smoke.v1"], SMOKE_SENSOR),
    (
        &[
            "lumi.remote.jcn001",
            "lumi.remote.eicn01",
            "lumi.remote.cagl01",
            "lumi.sensor_cube.aqgl01",
            "lumi.sensor_cube.es1",
            "lumi.sensor_cube.v1",
        ],
        CUBE,
    ),
    (&["lumi.remote.cagl02"], CUBE_PRO),
    (
        &["lumi.vibration.aq1"],
        &[VIBRATION, BATTERY_STATE, BATTERY_VOLTAGE],
    ),
    (
        &["lumi.vibration.agl01"],
        &[
            channel(VIBRATION, "13.7.85", "Vibration"),
            BATTERY_STATE,
            BATTERY_VOLTAGE,
        ],
    ),
    (
        &[
            "lumi.remote.acn001",
            "lumi.remote.acn003",
            "lumi.remote.acn007",
            "lumi.remote.acn008",
            "lumi.remote.jcn002",
            "lumi.remote.b186acn01",
            "lumi.remote.b186acn03",
            "lumi.remote.b18ac1",
            "lumi.remote.b1acn01",
            "lumi.remote.b1acn02",
            "lumi.sensor_switch.v1",
            "lumi.sensor_switch.v2",
            "lumi.sensor_switch.aq2",
            "lumi.sensor_switch.aq3",
            "lumi.sensor_switch.es2",
            "lumi.sensor_switch.es3",
            "lumi.sensor_86sw1.v1",
            "lumi.sensor_86sw1.es1",
            "lumi.sensor_86sw1.aq1",
            "lumi.switch.n1eic2",
        ],
        ONE_KEY,
    ),
    (
        &[
            "lumi.remote.b1akr1",
            "lumi.remote.b286acn01",
            "lumi.remote.b286acn03",
            "lumi.remote.b286opcn01",
            "lumi.remote.b28ac1",
            "lumi.sensor_86sw2.v1",
            "lumi.sensor_86sw2.es1",
            "lumi.sensor_86sw2.aq1",
            "lumi.switch.n2eic2",
        ],
        TWO_KEY,
    ),
    (
        &["lumi.remote.acn002", "lumi.remote.acn004", "lumi.remote.acn009"],
        TWO_KEY_WITH_BOTH,
    ),
    (&["lumi.switch.n3eic2"], THREE_KEY),
    (&["lumi.switch.n4eic2", "lumi.remote.b486opcn01"], FOUR_KEY),
    (&["lumi.switch.n6eic2", "lumi.remote.b686opcn01"], SIX_KEY),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, Value};

    #[test]
    fn test_six_key_panel_skips_13_5() {
        let keys: Vec<_> = SIX_KEY.iter().map(|d| d.resource_key).collect();

        assert!(keys.contains(&"13.6.85"));
        assert!(keys.contains(&"13.7.85"));
        assert!(!keys.contains(&"13.5.85"));
    }

    #[test]
    fn test_channel_copies_keep_scaling() {
        let channel_7 = SOIL
            .iter()
            .find(|d| d.resource_key == "0.17.85")
            .unwrap();

        assert_eq!(channel_7.name, "Channel 7 Humidity");
        assert_eq!(decode(Some("5520"), channel_7), Some(Value::Number(55.2)));
    }

    #[test]
    fn test_gesture_events() {
        assert_eq!(CUBE_STATUS.events, CUBE_STATUS.enum_value_map);
        assert!(CUBE_PRO.iter().any(|d| d.events == Some(CUBE_GESTURES)));
        assert!(SIX_KEY
            .iter()
            .filter(|d| d.resource_key.starts_with("13."))
            .all(|d| d.events == Some(BUTTON_CLICKS)));
        assert_eq!(TEMPERATURE.events, None);
    }

    #[test]
    fn test_battery_voltage() {
        assert_eq!(
            decode(Some("3012"), &BATTERY_VOLTAGE),
            Some(Value::Number(3.01))
        );
    }
}
