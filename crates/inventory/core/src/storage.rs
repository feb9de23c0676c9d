//! Restricted storage (fridge, pantry) with an open/closed lid.

use crate::container::{AcceptancePolicy, Container, ContainerKind, ItemContainer};
use crate::event::{LidChanged, Observers, SubscriptionId};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LidState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct Storage {
    container: Container,
    lid: LidState,
    lid_observers: Observers<LidChanged>,
}

impl Storage {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            lid: LidState::Closed,
            lid_observers: Observers::new(),
        }
    }

    /// Accepts only ingredients that must be kept cold.
    pub fn fridge(slot_count: usize) -> Self {
        Self::new(
            Container::new("Fridge", ContainerKind::Fridge, slot_count)
                .with_policy(AcceptancePolicy::Refrigerated),
        )
    }

    /// Accepts only ingredients that keep at room temperature.
    pub fn pantry(slot_count: usize) -> Self {
        Self::new(
            Container::new("Pantry", ContainerKind::Pantry, slot_count)
                .with_policy(AcceptancePolicy::ShelfStable),
        )
    }

    pub fn lid_state(&self) -> LidState {
        self.lid
    }

    pub fn is_open(&self) -> bool {
        self.lid == LidState::Open
    }

    pub fn toggle(&mut self) {
        let next = match self.lid {
            LidState::Open => LidState::Closed,
            LidState::Closed => LidState::Open,
        };
        self.set_lid(next);
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            self.set_lid(LidState::Open);
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            self.set_lid(LidState::Closed);
        }
    }

    /// Interaction label for the current state, e.g. "Open Fridge".
    pub fn prompt(&self) -> String {
        let verb = match self.lid {
            LidState::Open => "Close",
            LidState::Closed => "Open",
        };
        format!("{verb} {}", self.container.name())
    }

    pub fn on_lid_changed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LidChanged) + 'static,
    {
        self.lid_observers.subscribe(observer)
    }

    pub fn remove_lid_observer(&mut self, id: SubscriptionId) -> bool {
        self.lid_observers.unsubscribe(id)
    }

    fn set_lid(&mut self, state: LidState) {
        self.lid = state;
        tracing::debug!("{} is now {}", self.container.name(), state);
        self.lid_observers.emit(&LidChanged {
            kind: self.container.kind(),
            state,
        });
    }
}

impl ItemContainer for Storage {
    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }
}
