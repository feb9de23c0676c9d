//! Change notifications.
//!
//! Observers are plain closures registered on the object that owns the
//! state. Notifications are delivered synchronously, in registration order,
//! inside the call that caused the change. Observers only get a shared
//! reference to the event, so they cannot mutate the notifying container
//! while it is being changed; callers that need to react with a mutation
//! record the intent and act once the call returns.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::ItemKind;
use crate::slot::Slot;
use crate::storage::LidState;
use crate::ContainerKind;

static NEXT_SUBSCRIPTION: AtomicU64 = AtomicU64::new(1);

/// Token returned by every `subscribe` call, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION.fetch_add(1, Ordering::Relaxed))
    }
}

/// Emitted after every slot mutation, including clears of empty slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotChanged {
    pub index: usize,
    pub item: Option<ItemKind>,
    pub quantity: u32,
}

/// Aggregate notification: fired once for every [`SlotChanged`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerChanged {
    pub kind: ContainerKind,
    pub index: usize,
}

/// Toolbar selection moved (or was re-announced).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChanged {
    pub index: usize,
    pub slot: Slot,
}

/// Storage lid opened or closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LidChanged {
    pub kind: ContainerKind,
    pub state: LidState,
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered list of observers for one event type.
pub struct Observers<E> {
    entries: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId::next();
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the id was not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
