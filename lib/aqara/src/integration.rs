use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    registry, DeviceEvent, DeviceManager, Dispatcher, Entity, EntityState, Platform, PointId,
    Subscription,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateUpdate {
    pub unique_id: String,
    pub state: EntityState,
}

/// A device-level event such as a button click or a cube gesture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceTrigger {
    pub device_id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Clone)]
struct Channels {
    states: UnboundedSender<StateUpdate>,
    triggers: UnboundedSender<DeviceTrigger>,
}

struct Registration {
    // declared first so listeners go away before the entity
    _subscriptions: Vec<Subscription>,
    entity: Arc<Entity>,
}

/// Owns the entities created for a device manager's devices and keeps
/// their state flowing to the host.
///
/// Unique ids are scoped per platform, the same point may back a sensor and
/// a switch at once.
pub struct Integration {
    device_manager: Arc<dyn DeviceManager>,
    dispatcher: Dispatcher,
    entities: BTreeMap<(Platform, String), Registration>,
    channels: Channels,
}

impl Integration {
    pub fn new(
        device_manager: Arc<dyn DeviceManager>,
    ) -> (
        Integration,
        UnboundedReceiver<StateUpdate>,
        UnboundedReceiver<DeviceTrigger>,
    ) {
        let (states, state_receiver) = mpsc::unbounded_channel();
        let (triggers, trigger_receiver) = mpsc::unbounded_channel();

        let integration = Integration {
            device_manager,
            dispatcher: Dispatcher::new(),
            entities: BTreeMap::new(),
            channels: Channels { states, triggers },
        };

        (integration, state_receiver, trigger_receiver)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Creates entities for every descriptor the devices expose, returns the
    /// unique ids of the ones that did not exist yet.
    pub fn discover(&mut self, device_ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();

        for device_id in device_ids {
            let Some(device) = self.device_manager.device(device_id) else {
                warn!("device {device_id} is not known to the device manager");
                continue;
            };

            for platform in Platform::ALL {
                let Some(descriptors) = registry::descriptors(platform, &device.model) else {
                    continue;
                };

                for descriptor in descriptors {
                    if !device.has_resource(descriptor.resource_key) {
                        continue;
                    }

                    let point = device.point(descriptor.resource_key);
                    if self.entities.contains_key(&(platform, point.unique_id())) {
                        continue;
                    }

                    let entity = Entity::new(
                        point,
                        platform,
                        descriptor,
                        self.device_manager.clone(),
                    );
                    if let Some(unique_id) = self.attach(Arc::new(entity)) {
                        added.push(unique_id);
                    }
                }
            }

            info!("{} ({}) discovered", device.id, device.model);
        }

        added
    }

    /// Registers the entity and pushes its initial state. Returns `None` when
    /// the platform already has an entity with the same unique id.
    fn attach(&mut self, entity: Arc<Entity>) -> Option<String> {
        let unique_id = entity.unique_id();
        let key = (entity.platform(), unique_id.clone());

        if self.entities.contains_key(&key) {
            warn!("{unique_id} is already a {} entity", entity.platform());
            return None;
        }

        debug!("attaching {unique_id} as {}", entity.platform());

        let subscriptions = entity
            .watched_keys()
            .into_iter()
            .map(|resource_key| {
                let signal = PointId::new(&entity.point().device_id, resource_key).signal();
                let entity = Arc::downgrade(&entity);
                let channels = self.channels.clone();

                self.dispatcher.connect(&signal, move || {
                    if let Some(entity) = Weak::upgrade(&entity) {
                        push_state(&channels.states, &entity);
                        push_trigger(&channels.triggers, &entity);
                    }
                })
            })
            .collect();

        push_state(&self.channels.states, &entity);

        self.entities.insert(
            key,
            Registration {
                _subscriptions: subscriptions,
                entity,
            },
        );

        Some(unique_id)
    }

    /// Fires the point's signal, returns how many entities re-read it.
    pub fn point_updated(&self, device_id: &str, resource_key: &str) -> usize {
        let signal = PointId::new(device_id, resource_key).signal();
        self.dispatcher.send(&signal)
    }

    /// Drops every entity of the device, returns how many were removed.
    pub fn remove_device(&mut self, device_id: &str) -> usize {
        let before = self.entities.len();
        self.entities
            .retain(|_, registration| registration.entity.point().device_id != device_id);

        let removed = before - self.entities.len();
        info!("{device_id} removed with {removed} entities");
        removed
    }

    pub fn handle(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Discovered(device_ids) => {
                self.discover(&device_ids);
            }
            DeviceEvent::Updated {
                device_id,
                resource_key,
            } => {
                self.point_updated(&device_id, &resource_key);
            }
            DeviceEvent::Removed(device_id) => {
                self.remove_device(&device_id);
            }
        }
    }

    /// Handles device events until every sender is gone.
    pub async fn run(&mut self, mut events: UnboundedReceiver<DeviceEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event);
        }

        debug!("device event stream closed");
    }

    /// Looks an entity up on any platform, in `Platform::ALL` order.
    pub fn entity(&self, unique_id: &str) -> Option<Arc<Entity>> {
        Platform::ALL
            .into_iter()
            .find_map(|platform| self.platform_entity(platform, unique_id))
    }

    pub fn platform_entity(&self, platform: Platform, unique_id: &str) -> Option<Arc<Entity>> {
        self.entities
            .get(&(platform, unique_id.to_string()))
            .map(|registration| registration.entity.clone())
    }

    pub fn entities(&self) -> impl Iterator<Item = &Arc<Entity>> {
        self.entities.values().map(|registration| &registration.entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn unload(&mut self) {
        info!("unloading {} entities", self.entities.len());
        self.entities.clear();
    }
}

fn push_state(states: &UnboundedSender<StateUpdate>, entity: &Entity) {
    let update = StateUpdate {
        unique_id: entity.unique_id(),
        state: entity.state(),
    };

    if states.send(update).is_err() {
        debug!("state receiver for {} is gone", entity.point());
    }
}

fn push_trigger(triggers: &UnboundedSender<DeviceTrigger>, entity: &Entity) {
    let Some(kind) = entity.event() else {
        return;
    };

    debug!("{} fired {kind}", entity.point());

    let trigger = DeviceTrigger {
        device_id: entity.point().device_id.clone(),
        kind,
    };

    if triggers.send(trigger).is_err() {
        debug!("trigger receiver for {} is gone", entity.point());
    }
}
