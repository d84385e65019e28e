use lisbeth::{execute, HostCommand, Output, Result};

use std::sync::Arc;

use aqara::{DeviceTrigger, Integration, MemoryDeviceManager, StateUpdate};
use log::{error, info};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::mpsc::UnboundedReceiver;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let snapshot_path =
        std::env::var("AQARA_SNAPSHOT").expect("set ENV variable AQARA_SNAPSHOT");
    let snapshot = tokio::fs::read_to_string(&snapshot_path).await?;

    let manager = Arc::new(MemoryDeviceManager::from_json(&snapshot)?);
    let (mut integration, updates, triggers) = Integration::new(manager.clone());
    let mut receivers = Receivers { updates, triggers };

    let added = integration.discover(&manager.device_ids());
    info!("loaded {snapshot_path} with {} entities", added.len());

    let mut stdout = io::stdout();
    flush(&mut stdout, &manager, &mut receivers, Vec::new()).await?;

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(err) => {
                error!("{line}: {err}");
                continue;
            }
        };

        let states = match execute(&mut integration, &manager, command).await {
            Ok(states) => states,
            Err(err) => {
                error!("{line}: {err}");
                Vec::new()
            }
        };

        flush(&mut stdout, &manager, &mut receivers, states).await?;
    }

    integration.unload();
    Ok(())
}

struct Receivers {
    updates: UnboundedReceiver<StateUpdate>,
    triggers: UnboundedReceiver<DeviceTrigger>,
}

async fn flush(
    stdout: &mut Stdout,
    manager: &MemoryDeviceManager,
    receivers: &mut Receivers,
    mut states: Vec<StateUpdate>,
) -> Result<()> {
    while let Ok(update) = receivers.updates.try_recv() {
        states.push(update);
    }

    for (device_id, command) in manager.take_commands() {
        let line = Output::Command { device_id, command }.to_line()?;
        stdout.write_all(line.as_bytes()).await?;
    }

    for state in states {
        stdout.write_all(Output::State(state).to_line()?.as_bytes()).await?;
    }

    while let Ok(trigger) = receivers.triggers.try_recv() {
        stdout.write_all(Output::from(trigger).to_line()?.as_bytes()).await?;
    }

    stdout.flush().await?;
    Ok(())
}
