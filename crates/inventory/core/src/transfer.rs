//! Merge-or-swap engine.
//!
//! Both operations follow the same decision: when source and destination
//! hold the same stackable kind and the destination has headroom, units are
//! merged; otherwise the two slots exchange their entire contents. Neither
//! operation consults an acceptance policy.

use crate::container::Container;
use crate::slot::Slot;

impl Container {
    /// Moves or exchanges the contents of two slots of this container.
    ///
    /// Returns false only for an out-of-range index. `from == to` is a no-op.
    pub fn swap_items(&mut self, from: usize, to: usize) -> bool {
        if from >= self.slot_count() || to >= self.slot_count() {
            return false;
        }
        if from == to {
            return true;
        }

        let source = self.slots()[from].snapshot();
        let destination = self.slots()[to].snapshot();

        if let Some(moved) = mergeable(&source, &destination) {
            tracing::debug!("{}: merge {} units {} -> {}", self.name(), moved, from, to);
            self.merge_within(from, to, moved);
            return true;
        }

        tracing::debug!("{}: swap {} <-> {}", self.name(), from, to);
        self.clear_slot(from);
        self.clear_slot(to);
        restore(self, from, &destination);
        restore(self, to, &source);
        true
    }

    /// Merge-or-swap into a slot of another container.
    ///
    /// Returns false for an out-of-range index on either side or an empty
    /// source slot. An empty destination receives the whole stack.
    pub fn transfer_to(&mut self, target: &mut Container, from: usize, to: usize) -> bool {
        let (Some(source), Some(destination)) = (self.slot(from), target.slot(to)) else {
            return false;
        };
        if source.is_empty() {
            return false;
        }
        let source = source.snapshot();
        let destination = destination.snapshot();

        match TransferPlan::between(&source, &destination) {
            TransferPlan::Move => {
                tracing::debug!(
                    "move {} x{} from {}[{}] to {}[{}]",
                    item_name(&source),
                    source.quantity(),
                    self.name(),
                    from,
                    target.name(),
                    to
                );
                self.clear_slot(from);
                restore(target, to, &source);
            }
            TransferPlan::Merge(moved) => {
                tracing::debug!(
                    "merge {} units from {}[{}] into {}[{}]",
                    moved,
                    self.name(),
                    from,
                    target.name(),
                    to
                );
                if let Some(kind) = self.with_slot(from, |slot| slot.remove_amount(moved)) {
                    target.with_slot(to, |slot| slot.add(&kind, moved));
                }
            }
            TransferPlan::Exchange => {
                tracing::debug!(
                    "swap {}[{}] <-> {}[{}]",
                    self.name(),
                    from,
                    target.name(),
                    to
                );
                exchange_between(self, from, target, to, &source, &destination);
            }
        }
        true
    }

    fn merge_within(&mut self, from: usize, to: usize, moved: u32) {
        if let Some(kind) = self.with_slot(from, |slot| slot.remove_amount(moved)) {
            self.with_slot(to, |slot| slot.add(&kind, moved));
        }
    }
}

/// How a transfer from an occupied slot into another container resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferPlan {
    /// Destination is empty and receives the whole stack.
    Move,
    /// This many units join the destination stack.
    Merge(u32),
    /// Both slots trade their entire contents.
    Exchange,
}

impl TransferPlan {
    pub fn between(source: &Slot, destination: &Slot) -> Self {
        if destination.is_empty() {
            return Self::Move;
        }
        match mergeable(source, destination) {
            Some(moved) => Self::Merge(moved),
            None => Self::Exchange,
        }
    }

    /// True when the destination's contents end up in the source slot.
    pub fn is_exchange(self) -> bool {
        self == Self::Exchange
    }
}

/// Units that merge from `source` into `destination`, or `None` when the two
/// slots must be exchanged instead.
fn mergeable(source: &Slot, destination: &Slot) -> Option<u32> {
    let kind = source.item()?;
    if !kind.stackable || !destination.holds(kind) {
        return None;
    }
    match source.quantity().min(destination.headroom()) {
        0 => None,
        moved => Some(moved),
    }
}

fn exchange_between(
    source: &mut Container,
    from: usize,
    target: &mut Container,
    to: usize,
    source_before: &Slot,
    target_before: &Slot,
) {
    source.clear_slot(from);
    target.clear_slot(to);
    restore(source, from, target_before);
    restore(target, to, source_before);
}

/// Refills an emptied slot with previously captured contents.
fn restore(container: &mut Container, index: usize, contents: &Slot) {
    if let Some(kind) = contents.item() {
        container.with_slot(index, |slot| slot.add(kind, contents.quantity()));
    }
}

fn item_name(slot: &Slot) -> &str {
    slot.item().map_or("nothing", |kind| kind.name.as_str())
}
