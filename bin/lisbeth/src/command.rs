use std::fmt;
use std::str::FromStr;

use aqara::{Error, FanSpeed, Integration, MemoryDeviceManager, StateUpdate};
use log::debug;

use crate::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VacuumAction {
    Start,
    Stop,
    Pause,
    Home,
}

impl FromStr for VacuumAction {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "start" => Ok(VacuumAction::Start),
            "stop" => Ok(VacuumAction::Stop),
            "pause" => Ok(VacuumAction::Pause),
            "home" => Ok(VacuumAction::Home),
            _ => Err(ParseError::InvalidArgument("action", s.to_string())),
        }
    }
}

/// A line of stdin input.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCommand {
    Set { unique_id: String, value: f64 },
    On(String),
    Off(String),
    Press(String),
    Select { unique_id: String, label: String },
    Vacuum { unique_id: String, action: VacuumAction },
    Fan { unique_id: String, speed: FanSpeed },
    Update {
        device_id: String,
        resource_key: String,
        value: String,
    },
    State,
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidArgument(&'static str, String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(name) => write!(f, "unknown command {name}"),
            Self::MissingArgument(name) => write!(f, "missing argument {name}"),
            Self::InvalidArgument(name, value) => write!(f, "invalid {name}: {value}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for HostCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let mut arg = |name: &'static str| {
            words
                .next()
                .map(str::to_string)
                .ok_or(ParseError::MissingArgument(name))
        };

        let command = match name {
            "set" => {
                let unique_id = arg("unique_id")?;
                let value = arg("value")?;
                let value = value
                    .parse()
                    .map_err(|_| ParseError::InvalidArgument("value", value))?;
                HostCommand::Set { unique_id, value }
            }
            "on" => HostCommand::On(arg("unique_id")?),
            "off" => HostCommand::Off(arg("unique_id")?),
            "press" => HostCommand::Press(arg("unique_id")?),
            "select" => HostCommand::Select {
                unique_id: arg("unique_id")?,
                label: arg("label")?,
            },
            "vacuum" => HostCommand::Vacuum {
                unique_id: arg("unique_id")?,
                action: arg("action")?.parse()?,
            },
            "fan" => {
                let unique_id = arg("unique_id")?;
                let speed = arg("speed")?;
                let speed = speed
                    .parse()
                    .map_err(|_| ParseError::InvalidArgument("speed", speed))?;
                HostCommand::Fan { unique_id, speed }
            }
            "update" => HostCommand::Update {
                device_id: arg("device_id")?,
                resource_key: arg("resource_key")?,
                value: arg("value").unwrap_or_default(),
            },
            "state" => HostCommand::State,
            _ => return Err(ParseError::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }
}

/// Applies `command`; only `state` yields updates directly, the rest are
/// reported through the integration's state channel.
pub async fn execute(
    integration: &mut Integration,
    manager: &MemoryDeviceManager,
    command: HostCommand,
) -> Result<Vec<StateUpdate>> {
    debug!("executing {command:?}");

    let entity = |unique_id: &str| {
        integration
            .entity(unique_id)
            .ok_or_else(|| Error::UnknownEntity(unique_id.to_string()))
    };

    match command {
        HostCommand::Set { unique_id, value } => entity(&unique_id)?.write(value).await?,
        HostCommand::On(unique_id) => entity(&unique_id)?.turn_on().await?,
        HostCommand::Off(unique_id) => entity(&unique_id)?.turn_off().await?,
        HostCommand::Press(unique_id) => entity(&unique_id)?.press().await?,
        HostCommand::Select { unique_id, label } => entity(&unique_id)?.select(&label).await?,
        HostCommand::Vacuum { unique_id, action } => {
            let vacuum = entity(&unique_id)?;
            match action {
                VacuumAction::Start => vacuum.start().await?,
                VacuumAction::Stop => vacuum.stop().await?,
                VacuumAction::Pause => vacuum.pause().await?,
                VacuumAction::Home => vacuum.return_to_base().await?,
            }
        }
        HostCommand::Fan { unique_id, speed } => entity(&unique_id)?.set_fan_speed(speed).await?,
        HostCommand::Update {
            device_id,
            resource_key,
            value,
        } => {
            let event = manager
                .update(&device_id, &resource_key, &value)
                .ok_or(Error::UnknownDevice(device_id))?;
            integration.handle(event);
        }
        HostCommand::State => {
            return Ok(integration
                .entities()
                .map(|entity| StateUpdate {
                    unique_id: entity.unique_id(),
                    state: entity.state(),
                })
                .collect());
        }
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqara::{EntityState, Value};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_parse() {
        assert_eq!(
            "set Aqara.bed__14.48.85 30".parse::<HostCommand>(),
            Ok(HostCommand::Set {
                unique_id: "Aqara.bed__14.48.85".to_string(),
                value: 30.0,
            })
        );
        assert_eq!(
            "vacuum Aqara.rob__14.47.85 home".parse::<HostCommand>(),
            Ok(HostCommand::Vacuum {
                unique_id: "Aqara.rob__14.47.85".to_string(),
                action: VacuumAction::Home,
            })
        );
        assert_eq!(
            "fan Aqara.rob__14.47.85 max".parse::<HostCommand>(),
            Ok(HostCommand::Fan {
                unique_id: "Aqara.rob__14.47.85".to_string(),
                speed: FanSpeed::Max,
            })
        );
        assert_eq!(
            "update lumi.1 8.0.9001".parse::<HostCommand>(),
            Ok(HostCommand::Update {
                device_id: "lumi.1".to_string(),
                resource_key: "8.0.9001".to_string(),
                value: String::new(),
            })
        );
        assert_eq!("  state ".parse::<HostCommand>(), Ok(HostCommand::State));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<HostCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "dance".parse::<HostCommand>(),
            Err(ParseError::UnknownCommand("dance".to_string()))
        );
        assert_eq!(
            "select Aqara.x".parse::<HostCommand>(),
            Err(ParseError::MissingArgument("label"))
        );
        assert_eq!(
            "set Aqara.x high".parse::<HostCommand>(),
            Err(ParseError::InvalidArgument("value", "high".to_string()))
        );
        assert_eq!(
            "fan Aqara.x turbo".parse::<HostCommand>(),
            Err(ParseError::InvalidArgument("speed", "turbo".to_string()))
        );
    }

    fn setup() -> (Arc<MemoryDeviceManager>, Integration) {
        let snapshot = json!({
            "devices": [
                {
                    "id": "bed",
                    "model": "aqara.bed.hhcn03",
                    "points": { "14.48.85": "10", "14.93.85": "0", "4.7.85": "" }
                }
            ]
        });

        let manager = Arc::new(MemoryDeviceManager::from_json(&snapshot.to_string()).unwrap());
        let (mut integration, _updates, _triggers) = Integration::new(manager.clone());
        integration.discover(&manager.device_ids());

        (manager, integration)
    }

    #[tokio::test]
    async fn test_execute_set() {
        let (manager, mut integration) = setup();

        let command = "set Aqara.bed__14.48.85 30".parse().unwrap();
        execute(&mut integration, &manager, command).await.unwrap();

        let sent = manager.take_commands();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1.get("14.48.85"), Some("30"));

        let command = "set Aqara.bed__14.48.85 90".parse().unwrap();
        assert!(execute(&mut integration, &manager, command).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_update_and_state() {
        let (manager, mut integration) = setup();

        let command = "update bed 14.48.85 45".parse().unwrap();
        execute(&mut integration, &manager, command).await.unwrap();

        let states = execute(&mut integration, &manager, HostCommand::State)
            .await
            .unwrap();
        assert!(states.contains(&StateUpdate {
            unique_id: "Aqara.bed__14.48.85".to_string(),
            state: EntityState::Value(Some(Value::Number(45.0))),
        }));
        assert_eq!(states.len(), 3);
    }

    #[tokio::test]
    async fn test_execute_unknown_entity() {
        let (manager, mut integration) = setup();

        let err = execute(&mut integration, &manager, HostCommand::On("Aqara.x".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown entity Aqara.x");
    }
}
