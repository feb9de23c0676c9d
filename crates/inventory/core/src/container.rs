//! Base container: a fixed-length, ordered set of slots.
//!
//! [`Container`] implements the behavior every variant shares: capacity
//! checks, greedy placement, removal, and change fan-in. Variants
//! ([`PlayerInventory`](crate::PlayerInventory), [`Toolbar`](crate::Toolbar),
//! [`Storage`](crate::Storage)) wrap a `Container` and expose it through the
//! [`ItemContainer`] trait. Swap and cross-container transfer live in
//! [`crate::transfer`].

use std::fmt;
use std::sync::Arc;

use crate::event::{ContainerChanged, Observers, SlotChanged, SubscriptionId};
use crate::item::{ItemDefinition, ItemKind};
use crate::slot::Slot;
use crate::snapshot::ContainerSnapshot;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContainerKind {
    PlayerInventory,
    Toolbar,
    Fridge,
    Pantry,
    Generic,
}

type Predicate = Arc<dyn Fn(&ItemDefinition, u32) -> bool + Send + Sync>;

/// Which item kinds a container is willing to take, independent of space.
#[derive(Clone, Default)]
pub enum AcceptancePolicy {
    #[default]
    AcceptAll,

    /// Only ingredients that must be kept cold.
    Refrigerated,

    /// Only ingredients that keep at room temperature.
    ShelfStable,

    Custom(Predicate),
}

impl AcceptancePolicy {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&ItemDefinition, u32) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Items without the ingredient capability fail both restricted policies.
    pub fn permits(&self, item: &ItemDefinition, amount: u32) -> bool {
        match self {
            Self::AcceptAll => true,
            Self::Refrigerated => item.requires_refrigeration() == Some(true),
            Self::ShelfStable => item.requires_refrigeration() == Some(false),
            Self::Custom(predicate) => predicate(item, amount),
        }
    }
}

impl fmt::Debug for AcceptancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AcceptAll => f.write_str("AcceptAll"),
            Self::Refrigerated => f.write_str("Refrigerated"),
            Self::ShelfStable => f.write_str("ShelfStable"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

pub struct Container {
    name: String,
    kind: ContainerKind,
    slots: Box<[Slot]>,
    policy: AcceptancePolicy,
    slot_observers: Box<[Observers<SlotChanged>]>,
    observers: Observers<ContainerChanged>,
}

impl Container {
    /// Creates a container of `slot_count` empty slots that accepts anything.
    pub fn new(name: impl Into<String>, kind: ContainerKind, slot_count: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            slots: vec![Slot::new(); slot_count].into_boxed_slice(),
            policy: AcceptancePolicy::default(),
            slot_observers: (0..slot_count).map(|_| Observers::new()).collect(),
            observers: Observers::new(),
        }
    }

    pub fn with_policy(mut self, policy: AcceptancePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }

    pub fn accepts(&self, item: &ItemKind, amount: u32) -> bool {
        self.policy.permits(item, amount)
    }

    /// Acceptance policy first, then raw capacity.
    pub fn can_add_item(&self, item: &ItemKind, amount: u32) -> bool {
        self.accepts(item, amount) && self.has_room_for(item, amount)
    }

    /// Capacity check ignoring the acceptance policy.
    ///
    /// Headroom in existing stacks of the same kind is counted first; the
    /// remainder must fit into empty slots (`ceil(remainder / max)` of them
    /// for stackable kinds, one per unit otherwise).
    pub fn has_room_for(&self, item: &ItemKind, amount: u32) -> bool {
        let mut remaining = amount;

        if item.stackable {
            for slot in self.slots.iter().filter(|slot| slot.holds(item)) {
                let headroom = slot.headroom();
                if headroom >= remaining {
                    return true;
                }
                remaining -= headroom;
            }
        }

        let empty = self.slots.iter().filter(|slot| slot.is_empty()).count() as u64;
        let required = if item.stackable {
            u64::from(remaining.div_ceil(item.max_stack_size))
        } else {
            u64::from(remaining)
        };
        empty >= required
    }

    /// Places `amount` units: first topping up existing stacks of the same
    /// kind in slot order, then filling empty slots in slot order.
    ///
    /// Not atomic. When the units do not all fit this returns `false`, but
    /// the units that did fit stay placed. Use [`Container::can_add_item`]
    /// beforehand for an all-or-nothing add. The acceptance policy is not
    /// consulted here.
    pub fn add_item(&mut self, item: &ItemKind, amount: u32) -> bool {
        if amount == 0 {
            return true;
        }
        let mut remaining = amount;

        if item.stackable {
            for index in 0..self.slots.len() {
                if remaining == 0 {
                    break;
                }
                let slot = &self.slots[index];
                if slot.holds(item) && slot.can_accept(item) {
                    let before = slot.quantity();
                    self.with_slot(index, |slot| slot.add(item, remaining));
                    remaining -= self.slots[index].quantity() - before;
                }
            }
        }

        for index in 0..self.slots.len() {
            if remaining == 0 {
                break;
            }
            if self.slots[index].is_empty() {
                let portion = remaining.min(item.stack_limit());
                self.with_slot(index, |slot| slot.add(item, portion));
                remaining -= portion;
            }
        }

        if remaining > 0 {
            tracing::debug!(
                "{}: placed {} of {} {} (out of space)",
                self.name,
                amount - remaining,
                amount,
                item.name
            );
        }
        remaining == 0
    }

    /// Removes from one slot. `amount <= 1` removes a single unit; larger
    /// amounts clear the slot if they exceed its quantity.
    pub fn remove_item(&mut self, index: usize, amount: u32) -> Option<ItemKind> {
        if index >= self.slots.len() {
            return None;
        }
        if amount <= 1 {
            self.with_slot(index, Slot::remove_one)
        } else {
            self.with_slot(index, |slot| slot.remove_amount(amount))
        }
    }

    /// Subscribes to the aggregate change notification.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ContainerChanged) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Subscribes to one slot. Returns `None` for an out-of-range index.
    pub fn subscribe_slot<F>(&mut self, index: usize, observer: F) -> Option<SubscriptionId>
    where
        F: FnMut(&SlotChanged) + 'static,
    {
        self.slot_observers
            .get_mut(index)
            .map(|observers| observers.subscribe(observer))
    }

    /// Removes an aggregate or per-slot subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
            || self
                .slot_observers
                .iter_mut()
                .any(|observers| observers.unsubscribe(id))
    }

    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot::capture(self)
    }

    /// Runs a slot mutation and notifies if the slot changed.
    pub(crate) fn with_slot<R>(&mut self, index: usize, op: impl FnOnce(&mut Slot) -> R) -> R {
        let before = self.slots[index].snapshot();
        let result = op(&mut self.slots[index]);
        if self.slots[index] != before {
            self.notify(index);
        }
        result
    }

    /// Clears a slot and notifies even if it was already empty.
    pub(crate) fn clear_slot(&mut self, index: usize) {
        self.slots[index].clear();
        self.notify(index);
    }

    fn notify(&mut self, index: usize) {
        let slot = &self.slots[index];
        let change = SlotChanged {
            index,
            item: slot.item().cloned(),
            quantity: slot.quantity(),
        };
        self.slot_observers[index].emit(&change);
        self.observers.emit(&ContainerChanged {
            kind: self.kind,
            index,
        });
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("slots", &self.slots)
            .field("policy", &self.policy)
            .field("observers", &self.observers)
            .finish()
    }
}

/// Capability surface shared by every container variant.
///
/// Implementors only provide access to their [`Container`]; every operation
/// has a default that delegates to it.
pub trait ItemContainer {
    fn container(&self) -> &Container;

    fn container_mut(&mut self) -> &mut Container;

    fn name(&self) -> &str {
        self.container().name()
    }

    fn kind(&self) -> ContainerKind {
        self.container().kind()
    }

    fn slot_count(&self) -> usize {
        self.container().slot_count()
    }

    fn slots(&self) -> &[Slot] {
        self.container().slots()
    }

    fn slot(&self, index: usize) -> Option<&Slot> {
        self.container().slot(index)
    }

    fn accepts(&self, item: &ItemKind, amount: u32) -> bool {
        self.container().accepts(item, amount)
    }

    fn can_add_item(&self, item: &ItemKind, amount: u32) -> bool {
        self.container().can_add_item(item, amount)
    }

    fn add_item(&mut self, item: &ItemKind, amount: u32) -> bool {
        self.container_mut().add_item(item, amount)
    }

    fn remove_item(&mut self, index: usize, amount: u32) -> Option<ItemKind> {
        self.container_mut().remove_item(index, amount)
    }

    fn swap_items(&mut self, from: usize, to: usize) -> bool {
        self.container_mut().swap_items(from, to)
    }

    /// Merge-or-swap into another container's slot. The target's acceptance
    /// policy is not consulted.
    fn transfer_item_to(&mut self, target: &mut dyn ItemContainer, from: usize, to: usize) -> bool {
        self.container_mut()
            .transfer_to(target.container_mut(), from, to)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.container_mut().unsubscribe(id)
    }
}

impl ItemContainer for Container {
    fn container(&self) -> &Container {
        self
    }

    fn container_mut(&mut self) -> &mut Container {
        self
    }
}
