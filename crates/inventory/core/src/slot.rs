//! Slot: the atomic unit of storage.
//!
//! A slot holds at most one item kind and a quantity. The invariant
//! `item.is_none() == (quantity == 0)` holds after every operation, and an
//! occupied slot never exceeds its kind's [`stack_limit`].
//!
//! Mutators are crate-private: slots are only changed through their owning
//! [`Container`](crate::Container), which emits change notifications after
//! each mutation. Slots themselves hold no subscribers and no back-reference.
//!
//! [`stack_limit`]: crate::ItemDefinition::stack_limit

use crate::item::ItemKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    item: Option<ItemKind>,
    quantity: u32,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self) -> Option<&ItemKind> {
        self.item.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// True if the slot is occupied by exactly this kind.
    pub fn holds(&self, kind: &ItemKind) -> bool {
        self.item.as_ref() == Some(kind)
    }

    /// Units of the held kind that still fit; zero when empty.
    pub fn headroom(&self) -> u32 {
        self.item
            .as_ref()
            .map_or(0, |kind| kind.stack_limit().saturating_sub(self.quantity))
    }

    /// Empty slots accept anything; occupied slots only top up a stackable
    /// stack of the same kind that is not yet full.
    pub fn can_accept(&self, kind: &ItemKind) -> bool {
        match &self.item {
            None => true,
            Some(held) => held == kind && held.stackable && self.quantity < held.max_stack_size,
        }
    }

    /// Value copy used for before/after comparisons during swaps.
    pub fn snapshot(&self) -> Slot {
        self.clone()
    }

    /// Places up to `amount` units and reports whether all of them fit.
    ///
    /// An empty slot takes the kind and `min(amount, stack_limit)` units.
    /// Returns false without mutating for a different kind, a non-stackable
    /// occupant, a full stack, or a zero amount.
    pub(crate) fn add(&mut self, kind: &ItemKind, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }

        if self.is_empty() {
            let placed = amount.min(kind.stack_limit());
            self.item = Some(kind.clone());
            self.quantity = placed;
            return placed == amount;
        }

        if self.can_accept(kind) {
            let placed = amount.min(self.headroom());
            self.quantity += placed;
            return placed == amount;
        }

        false
    }

    pub(crate) fn remove_one(&mut self) -> Option<ItemKind> {
        self.remove_amount(1)
    }

    /// Removes `amount` units. Removing more than is present clears the slot.
    pub(crate) fn remove_amount(&mut self, amount: u32) -> Option<ItemKind> {
        if amount == 0 {
            return None;
        }
        let removed = self.item.clone()?;

        if amount >= self.quantity {
            self.clear();
        } else {
            self.quantity -= amount;
        }
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.item = None;
        self.quantity = 0;
    }
}
