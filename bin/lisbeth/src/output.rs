use aqara::{Command, DeviceTrigger, StateUpdate};
use serde::Serialize;

/// One JSON line written to stdout.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Output {
    State(StateUpdate),
    Command { device_id: String, command: Command },
    Event { device_id: String, event: &'static str },
}

impl From<DeviceTrigger> for Output {
    fn from(trigger: DeviceTrigger) -> Self {
        Output::Event {
            device_id: trigger.device_id,
            event: trigger.kind,
        }
    }
}

impl Output {
    pub fn to_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
