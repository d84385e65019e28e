use std::sync::Arc;

use enumflags2::BitFlags;
use log::{debug, warn};
use serde::Serialize;

use crate::codec::{decode, decode_bool, decode_enum, encode, encode_bool, encode_label, Value};
use crate::vacuum::{FanSpeed, VacuumFeature, VacuumProfile, VacuumState, VacuumStatus, Write};
use crate::{Capability, Category, Command, Descriptor, DeviceManager, Error, Platform, PointId, Result};

// battery level reads like any other measurement, rounded to whole percent
const BATTERY_LEVEL: Descriptor = Descriptor {
    precision: Some(0),
    ..Descriptor::new("battery", "Battery", Capability::Measurement)
};

/// Current state of an entity as pushed to the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityState {
    Value(Option<Value>),
    Vacuum(VacuumState),
}

/// One device point presented through one platform.
///
/// Entities hold no value cache. Every read goes to the device manager.
pub struct Entity {
    point: PointId,
    platform: Platform,
    descriptor: &'static Descriptor,
    device_manager: Arc<dyn DeviceManager>,
}

impl Entity {
    pub fn new(
        point: PointId,
        platform: Platform,
        descriptor: &'static Descriptor,
        device_manager: Arc<dyn DeviceManager>,
    ) -> Entity {
        Entity {
            point,
            platform,
            descriptor,
            device_manager,
        }
    }

    pub fn point(&self) -> &PointId {
        &self.point
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        self.descriptor
    }

    pub fn unique_id(&self) -> String {
        self.point.unique_id()
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.descriptor.unit
    }

    pub fn category(&self) -> Option<Category> {
        self.descriptor.category
    }

    pub fn device_class(&self) -> Option<&'static str> {
        self.descriptor.device_class
    }

    pub fn icon(&self) -> Option<&'static str> {
        let stateful = match self.is_on() {
            Some(true) => self.descriptor.on_icon,
            Some(false) => self.descriptor.off_icon,
            None => None,
        };

        stateful.or(self.descriptor.icon)
    }

    /// Point keys whose updates change this entity's state.
    pub fn watched_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.descriptor.resource_key];

        if let Capability::Vacuum(profile) = self.descriptor.capability {
            for key in profile.keys() {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }

        keys
    }

    pub fn raw_value(&self) -> Option<String> {
        self.get(self.descriptor.resource_key)
    }

    pub fn read(&self) -> Option<Value> {
        let raw = self.raw_value();
        let raw = raw.as_deref();

        match self.descriptor.capability {
            Capability::Binary | Capability::Toggle => {
                decode_bool(raw, &self.descriptor.on_value).map(Value::Bool)
            }
            Capability::Measurement | Capability::Setting => decode(raw, self.descriptor),
            Capability::EnumState => {
                decode_enum(raw, self.descriptor.enum_value_map?).map(Value::Label)
            }
            Capability::Momentary => None,
            Capability::Vacuum(profile) => self
                .status(profile)
                .map(|status| Value::Text(status.to_string())),
        }
    }

    pub fn is_on(&self) -> Option<bool> {
        match self.descriptor.capability {
            Capability::Binary | Capability::Toggle => decode_bool(
                self.raw_value().as_deref(),
                &self.descriptor.on_value,
            ),
            Capability::Vacuum(profile) => self
                .status(profile)
                .map(|status| status == VacuumStatus::Cleaning),
            _ => None,
        }
    }

    pub fn state(&self) -> EntityState {
        match self.vacuum_state() {
            Ok(state) => EntityState::Vacuum(state),
            Err(_) => EntityState::Value(self.read()),
        }
    }

    /// Writes a numeric setting.
    pub async fn write(&self, value: f64) -> Result<()> {
        if self.descriptor.capability != Capability::Setting {
            return Err(self.unsupported("write"));
        }

        if let Some(bounds) = self.descriptor.bounds {
            if !bounds.contains(value) {
                return Err(Error::OutOfRange {
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }

        let raw = encode(value, self.descriptor)?;
        self.send(self.descriptor.resource_key, &raw).await
    }

    pub async fn turn_on(&self) -> Result<()> {
        self.switch(true).await
    }

    pub async fn turn_off(&self) -> Result<()> {
        self.switch(false).await
    }

    async fn switch(&self, on: bool) -> Result<()> {
        match self.descriptor.capability {
            Capability::Toggle => {
                let key = self.descriptor.command_key(on);
                self.send(key, encode_bool(on, self.descriptor)).await
            }
            Capability::Vacuum(_) if on => self.start().await,
            Capability::Vacuum(_) => self.stop().await,
            _ => Err(self.unsupported(if on { "turn_on" } else { "turn_off" })),
        }
    }

    pub async fn press(&self) -> Result<()> {
        if self.descriptor.capability != Capability::Momentary {
            return Err(self.unsupported("press"));
        }

        self.send(self.descriptor.resource_key, self.descriptor.press_value)
            .await
    }

    /// Writes the raw value mapped to `label`.
    pub async fn select(&self, label: &str) -> Result<()> {
        let map = match (self.descriptor.capability, self.descriptor.enum_value_map) {
            (Capability::EnumState, Some(map)) => map,
            _ => return Err(self.unsupported("select")),
        };

        let raw = encode_label(label, map)?;
        self.send(self.descriptor.resource_key, raw).await
    }

    /// Event kind the current raw value stands for, if the descriptor maps
    /// point values to device events.
    pub fn event(&self) -> Option<&'static str> {
        decode_enum(self.raw_value().as_deref(), self.descriptor.events?)
    }

    pub fn options(&self) -> Vec<&'static str> {
        self.descriptor
            .enum_value_map
            .map(|map| map.iter().map(|(_, label)| *label).collect())
            .unwrap_or_default()
    }

    pub fn vacuum_state(&self) -> Result<VacuumState> {
        let profile = self.profile("vacuum_state")?;

        let fan_speed = profile
            .fan_speed_key
            .and_then(|key| decode_enum(self.get(key).as_deref(), profile.fan_speed_map));

        let battery = profile
            .battery_key
            .and_then(|key| decode(self.get(key).as_deref(), &BATTERY_LEVEL))
            .and_then(|value| value.as_f64())
            .map(|level| level.clamp(0.0, 100.0) as u8);

        Ok(VacuumState {
            status: self.status(profile),
            fan_speed,
            battery,
        })
    }

    pub fn features(&self) -> BitFlags<VacuumFeature> {
        match self.descriptor.capability {
            Capability::Vacuum(profile) => profile.features,
            _ => BitFlags::empty(),
        }
    }

    pub fn fan_speed_list(&self) -> Vec<FanSpeed> {
        match self.descriptor.capability {
            Capability::Vacuum(profile) => profile.fan_speeds(),
            _ => Vec::new(),
        }
    }

    pub async fn start(&self) -> Result<()> {
        let profile = self.feature("start", VacuumFeature::Start)?;
        self.send_write(profile.start).await
    }

    pub async fn stop(&self) -> Result<()> {
        let profile = self.feature("stop", VacuumFeature::Stop)?;
        self.send_write(profile.stop).await
    }

    pub async fn pause(&self) -> Result<()> {
        let profile = self.feature("pause", VacuumFeature::Pause)?;
        self.send_write(profile.pause).await
    }

    pub async fn return_to_base(&self) -> Result<()> {
        let profile = self.feature("return_to_base", VacuumFeature::ReturnHome)?;

        match profile.return_home {
            Some(write) => self.send_write(write).await,
            None => Err(self.unsupported("return_to_base")),
        }
    }

    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<()> {
        let profile = self.feature("set_fan_speed", VacuumFeature::FanSpeed)?;

        let Some(key) = profile.fan_speed_key else {
            return Err(self.unsupported("set_fan_speed"));
        };

        let raw = encode_label(speed, profile.fan_speed_map)?;
        self.send(key, raw).await
    }

    fn status(&self, profile: &VacuumProfile) -> Option<VacuumStatus> {
        decode_enum(self.get(profile.status_key).as_deref(), profile.status_map)
    }

    fn profile(&self, operation: &'static str) -> Result<&'static VacuumProfile> {
        match self.descriptor.capability {
            Capability::Vacuum(profile) => Ok(profile),
            _ => Err(self.unsupported(operation)),
        }
    }

    fn feature(
        &self,
        operation: &'static str,
        feature: VacuumFeature,
    ) -> Result<&'static VacuumProfile> {
        let profile = self.profile(operation)?;

        if profile.supports(feature) {
            Ok(profile)
        } else {
            Err(self.unsupported(operation))
        }
    }

    fn get(&self, resource_key: &str) -> Option<String> {
        self.device_manager
            .get_point_value(&self.point.device_id, resource_key)
            .filter(|value| !value.is_empty())
    }

    async fn send_write(&self, write: Write) -> Result<()> {
        self.send(write.key, write.value).await
    }

    async fn send(&self, resource_key: &str, value: &str) -> Result<()> {
        debug!("{} -> {resource_key} = {value}", self.point.device_id);

        let command = Command::single(resource_key, value);
        self.device_manager
            .send_command(&self.point.device_id, command)
            .await
            .map_err(|err| {
                warn!("unable to write {}: {err}", self.point);
                Error::DeviceManager(err)
            })
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::Unsupported(operation, self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_manager::MockDeviceManager;
    use crate::vacuum::{ECOVACS, STONE};
    use crate::{Bounds, DataType, MemoryDeviceManager, OnValue, SnapshotDevice};

    const HUMIDITY: Descriptor = Descriptor {
        unit: Some("%"),
        device_class: Some("humidity"),
        scale: 0.01,
        precision: Some(1),
        ..Descriptor::new("0.2.85", "Humidity", Capability::Measurement)
    };

    const MOTION: Descriptor = Descriptor {
        on_icon: Some("mdi:motion-sensor"),
        off_icon: Some("mdi:motion-sensor-off"),
        ..Descriptor::new("3.1.85", "Motion", Capability::Binary)
    };

    const SIREN: Descriptor = Descriptor {
        on_value: OnValue::AnyOf(&["1", "255"]),
        on_command_key: Some("4.15.85"),
        off_command_key: Some("4.12.85"),
        ..Descriptor::new("8.0.2232", "Siren", Capability::Toggle)
    };

    const BACK: Descriptor = Descriptor {
        data_type: Some(DataType::Integer),
        precision: Some(0),
        bounds: Some(Bounds {
            min: 0.0,
            max: 60.0,
            step: 1.0,
        }),
        ..Descriptor::new("14.48.85", "Back", Capability::Setting)
    };

    const VALVE: Descriptor = Descriptor {
        enum_value_map: Some(&[("1", "open"), ("2", "forced_closed")]),
        ..Descriptor::new("14.1.85", "Valve", Capability::EnumState)
    };

    const SWITCH: Descriptor = Descriptor::new("4.1.85", "Switch", Capability::Toggle);

    const STOP: Descriptor = Descriptor::new("4.7.85", "Stop", Capability::Momentary);

    const STONE_VACUUM: Descriptor =
        Descriptor::new("14.47.85", "Vacuum", Capability::Vacuum(&STONE));

    const ECOVACS_VACUUM: Descriptor =
        Descriptor::new("14.29.85", "Vacuum", Capability::Vacuum(&ECOVACS));

    const DEVICE: &str = "lumi.158d0001";

    fn manager(points: &[(&str, &str)]) -> Arc<MemoryDeviceManager> {
        let manager = MemoryDeviceManager::default();
        manager.add_device(SnapshotDevice {
            id: DEVICE.to_string(),
            model: "lumi.test".to_string(),
            name: String::new(),
            points: points
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        Arc::new(manager)
    }

    fn entity(
        platform: Platform,
        descriptor: &'static Descriptor,
        manager: &Arc<MemoryDeviceManager>,
    ) -> Entity {
        Entity::new(
            PointId::new(DEVICE, descriptor.resource_key),
            platform,
            descriptor,
            manager.clone(),
        )
    }

    fn sent(manager: &MemoryDeviceManager) -> Vec<(String, String)> {
        manager
            .take_commands()
            .into_iter()
            .flat_map(|(_, command)| {
                command
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_metadata() {
        let manager = manager(&[("0.2.85", "7820")]);
        let humidity = entity(Platform::Sensor, &HUMIDITY, &manager);

        assert_eq!(humidity.unique_id(), "Aqara.lumi.158d0001__0.2.85");
        assert_eq!(humidity.name(), "Humidity");
        assert_eq!(humidity.unit(), Some("%"));
        assert_eq!(humidity.device_class(), Some("humidity"));
        assert_eq!(humidity.read(), Some(Value::Number(78.2)));
    }

    #[test]
    fn test_read_without_value() {
        let manager = manager(&[("3.1.85", "")]);

        assert_eq!(entity(Platform::Sensor, &HUMIDITY, &manager).read(), None);

        let motion = entity(Platform::BinarySensor, &MOTION, &manager);
        assert_eq!(motion.read(), None);
        assert_eq!(motion.is_on(), None);
        assert_eq!(motion.icon(), None);
    }

    #[test]
    fn test_binary_icons() {
        let manager = manager(&[("3.1.85", "1")]);
        let motion = entity(Platform::BinarySensor, &MOTION, &manager);

        assert_eq!(motion.is_on(), Some(true));
        assert_eq!(motion.icon(), Some("mdi:motion-sensor"));

        manager.update(DEVICE, "3.1.85", "0");
        assert_eq!(motion.is_on(), Some(false));
        assert_eq!(motion.icon(), Some("mdi:motion-sensor-off"));
    }

    #[test]
    fn test_enum_read() {
        let manager = manager(&[("14.1.85", "2")]);
        let valve = entity(Platform::Sensor, &VALVE, &manager);

        assert_eq!(valve.read(), Some(Value::Label("forced_closed")));
        assert_eq!(valve.options(), vec!["open", "forced_closed"]);

        manager.update(DEVICE, "14.1.85", "9");
        assert_eq!(valve.read(), None);
    }

    #[tokio::test]
    async fn test_toggle_uses_command_keys() {
        let manager = manager(&[("8.0.2232", "255")]);
        let siren = entity(Platform::Siren, &SIREN, &manager);

        assert_eq!(siren.is_on(), Some(true));

        siren.turn_off().await.unwrap();
        siren.turn_on().await.unwrap();

        assert_eq!(
            sent(&manager),
            vec![pair("4.12.85", "0"), pair("4.15.85", "1")]
        );
    }

    #[tokio::test]
    async fn test_write_setting() {
        let manager = manager(&[("14.48.85", "10")]);
        let back = entity(Platform::Number, &BACK, &manager);

        back.write(30.0).await.unwrap();
        assert_eq!(sent(&manager), vec![pair("14.48.85", "30")]);

        assert!(matches!(
            back.write(61.0).await,
            Err(Error::OutOfRange { max, .. }) if max == 60.0
        ));
        assert!(sent(&manager).is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_operations() {
        let manager = manager(&[]);
        let humidity = entity(Platform::Sensor, &HUMIDITY, &manager);

        assert!(matches!(
            humidity.write(1.0).await,
            Err(Error::Unsupported("write", Platform::Sensor))
        ));
        assert!(matches!(
            humidity.turn_on().await,
            Err(Error::Unsupported("turn_on", Platform::Sensor))
        ));
        assert!(matches!(
            humidity.start().await,
            Err(Error::Unsupported("start", Platform::Sensor))
        ));
        assert!(sent(&manager).is_empty());
    }

    #[tokio::test]
    async fn test_press_and_select() {
        let manager = manager(&[]);

        entity(Platform::Button, &STOP, &manager)
            .press()
            .await
            .unwrap();

        let valve = entity(Platform::Sensor, &VALVE, &manager);
        valve.select("open").await.unwrap();
        assert!(matches!(
            valve.select("ajar").await,
            Err(Error::UnknownLabel(label)) if label == "ajar"
        ));

        assert_eq!(
            sent(&manager),
            vec![pair("4.7.85", "1"), pair("14.1.85", "1")]
        );
    }

    #[tokio::test]
    async fn test_stone_vacuum() {
        let manager = manager(&[("13.4.85", "7"), ("14.48.85", "3"), ("8.0.2001", "87")]);
        let vacuum = entity(Platform::Vacuum, &STONE_VACUUM, &manager);

        assert_eq!(
            vacuum.state(),
            EntityState::Vacuum(VacuumState {
                status: Some(VacuumStatus::Cleaning),
                fan_speed: Some(FanSpeed::Max),
                battery: Some(87),
            })
        );
        assert_eq!(vacuum.is_on(), Some(true));
        assert_eq!(
            vacuum.watched_keys(),
            vec!["14.47.85", "13.4.85", "14.48.85", "8.0.2001"]
        );

        vacuum.pause().await.unwrap();
        vacuum.return_to_base().await.unwrap();
        vacuum.set_fan_speed(FanSpeed::Soft).await.unwrap();
        vacuum.turn_on().await.unwrap();

        assert_eq!(
            sent(&manager),
            vec![
                pair("14.47.85", "0"),
                pair("14.47.85", "3"),
                pair("14.48.85", "4"),
                pair("14.47.85", "1"),
            ]
        );
    }

    #[test]
    fn test_vacuum_battery_is_rounded_measurement() {
        let manager = manager(&[("13.4.85", "8"), ("8.0.2001", "87.4")]);
        let vacuum = entity(Platform::Vacuum, &STONE_VACUUM, &manager);

        let battery = |raw| {
            manager.update(DEVICE, "8.0.2001", raw);
            vacuum.vacuum_state().unwrap().battery
        };

        assert_eq!(battery("87.4"), Some(87));
        assert_eq!(battery("87.0"), Some(87));
        assert_eq!(battery("99.6"), Some(100));
        assert_eq!(battery("140"), Some(100));
        assert_eq!(battery("low"), None);
        assert_eq!(battery(""), None);

        assert_eq!(vacuum.vacuum_state().unwrap().status, None);
    }

    #[test]
    fn test_event_kind() {
        const BUTTON: Descriptor = Descriptor {
            events: Some(&[("1", "single_click"), ("2", "double_click")]),
            ..Descriptor::new("13.1.85", "Button 1", Capability::Measurement)
        };

        let manager = manager(&[("13.1.85", "2")]);
        let button = entity(Platform::Sensor, &BUTTON, &manager);
        assert_eq!(button.event(), Some("double_click"));

        manager.update(DEVICE, "13.1.85", "7");
        assert_eq!(button.event(), None);

        assert_eq!(entity(Platform::Sensor, &HUMIDITY, &manager).event(), None);
    }

    #[tokio::test]
    async fn test_ecovacs_vacuum() {
        let manager = manager(&[("13.1.85", "16")]);
        let vacuum = entity(Platform::Vacuum, &ECOVACS_VACUUM, &manager);

        assert_eq!(
            vacuum.vacuum_state().unwrap(),
            VacuumState {
                status: Some(VacuumStatus::Paused),
                fan_speed: None,
                battery: None,
            }
        );
        assert!(vacuum.fan_speed_list().is_empty());
        assert!(matches!(
            vacuum.set_fan_speed(FanSpeed::Max).await,
            Err(Error::Unsupported("set_fan_speed", Platform::Vacuum))
        ));

        vacuum.return_to_base().await.unwrap();
        vacuum.turn_off().await.unwrap();

        assert_eq!(
            sent(&manager),
            vec![pair("4.41.85", "1"), pair("14.29.85", "2")]
        );
    }

    #[tokio::test]
    async fn test_device_manager_error() {
        let mut mock = MockDeviceManager::new();
        mock.expect_send_command()
            .times(1)
            .returning(|_, _| Err("gateway offline".into()));

        let entity = Entity::new(
            PointId::new(DEVICE, "4.1.85"),
            Platform::Switch,
            &SWITCH,
            Arc::new(mock),
        );

        let err = entity.turn_on().await.unwrap_err();
        assert!(matches!(err, Error::DeviceManager(_)));
        assert_eq!(err.to_string(), "device manager error: gateway offline");
    }

    #[test]
    fn test_read_goes_through_device_manager() {
        let mut mock = MockDeviceManager::new();
        mock.expect_get_point_value()
            .withf(|device_id, key| device_id == DEVICE && key == "0.2.85")
            .returning(|_, _| Some("4150".to_string()));

        let entity = Entity::new(
            PointId::new(DEVICE, "0.2.85"),
            Platform::Sensor,
            &HUMIDITY,
            Arc::new(mock),
        );

        assert_eq!(entity.read(), Some(Value::Number(41.5)));
        assert_eq!(entity.state(), EntityState::Value(Some(Value::Number(41.5))));
    }
}
