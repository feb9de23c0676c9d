//! Drag-and-drop gesture state.
//!
//! The controller only decides what a gesture means; the caller owns the
//! containers and performs the resulting [`DropAction`].

use crate::container::ContainerKind;
use crate::item::ItemKind;
use crate::slot::Slot;

/// Address of one slot across all containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub container: ContainerKind,
    pub index: usize,
}

impl SlotRef {
    pub fn new(container: ContainerKind, index: usize) -> Self {
        Self { container, index }
    }
}

/// The drag in progress: where it started and what was picked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragState {
    pub origin: SlotRef,
    pub item: ItemKind,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropAction {
    /// Reorder within one container.
    Swap {
        container: ContainerKind,
        from: usize,
        to: usize,
    },
    /// Move across containers.
    Transfer { from: SlotRef, to: SlotRef },
    Cancelled,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag from an occupied slot. Empty slots and a drag already
    /// in progress are refused.
    pub fn begin(&mut self, origin: SlotRef, slot: &Slot) -> bool {
        if self.state.is_some() {
            return false;
        }
        let Some(item) = slot.item() else {
            return false;
        };
        self.state = Some(DragState {
            origin,
            item: item.clone(),
            quantity: slot.quantity(),
        });
        true
    }

    /// Ends the drag over `target` (or over nothing).
    pub fn finish(&mut self, target: Option<SlotRef>) -> DropAction {
        let (Some(state), Some(target)) = (self.state.take(), target) else {
            return DropAction::Cancelled;
        };
        let origin = state.origin;

        if origin == target {
            DropAction::Cancelled
        } else if origin.container == target.container {
            DropAction::Swap {
                container: origin.container,
                from: origin.index,
                to: target.index,
            }
        } else {
            DropAction::Transfer {
                from: origin,
                to: target,
            }
        }
    }

    pub fn cancel(&mut self) -> Option<DragState> {
        self.state.take()
    }

    /// Cancels the drag if it started in `container`.
    pub fn cancel_from(&mut self, container: ContainerKind) -> bool {
        if self.origin().is_some_and(|origin| origin.container == container) {
            self.state = None;
            return true;
        }
        false
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    pub fn origin(&self) -> Option<SlotRef> {
        self.state.as_ref().map(|state| state.origin)
    }

    pub fn state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::slot::tests::potion_and_knife;

    fn occupied() -> Slot {
        let (potion, _) = potion_and_knife();
        let mut container = Container::new("Crate", ContainerKind::Generic, 1);
        container.add_item(&potion, 3);
        container.slots()[0].snapshot()
    }

    #[test]
    fn empty_slots_cannot_be_dragged() {
        let mut drag = DragController::new();
        assert!(!drag.begin(SlotRef::new(ContainerKind::Toolbar, 0), &Slot::new()));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn same_container_drop_is_a_swap() {
        let mut drag = DragController::new();
        assert!(drag.begin(SlotRef::new(ContainerKind::PlayerInventory, 2), &occupied()));
        assert_eq!(drag.state().map(|s| s.quantity), Some(3));

        let action = drag.finish(Some(SlotRef::new(ContainerKind::PlayerInventory, 5)));
        assert_eq!(
            action,
            DropAction::Swap {
                container: ContainerKind::PlayerInventory,
                from: 2,
                to: 5
            }
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cross_container_drop_is_a_transfer() {
        let mut drag = DragController::new();
        let from = SlotRef::new(ContainerKind::PlayerInventory, 0);
        let to = SlotRef::new(ContainerKind::Fridge, 1);
        drag.begin(from, &occupied());
        assert_eq!(drag.finish(Some(to)), DropAction::Transfer { from, to });
    }

    #[test]
    fn drops_on_nothing_or_origin_cancel() {
        let mut drag = DragController::new();
        let origin = SlotRef::new(ContainerKind::Toolbar, 1);

        drag.begin(origin, &occupied());
        assert_eq!(drag.finish(None), DropAction::Cancelled);

        drag.begin(origin, &occupied());
        assert_eq!(drag.finish(Some(origin)), DropAction::Cancelled);

        assert_eq!(drag.finish(Some(origin)), DropAction::Cancelled);
    }

    #[test]
    fn second_begin_is_refused_until_cancelled() {
        let mut drag = DragController::new();
        let first = SlotRef::new(ContainerKind::Pantry, 0);
        assert!(drag.begin(first, &occupied()));
        assert!(!drag.begin(SlotRef::new(ContainerKind::Pantry, 1), &occupied()));
        assert_eq!(drag.origin(), Some(first));

        assert!(!drag.cancel_from(ContainerKind::Fridge));
        assert!(drag.cancel_from(ContainerKind::Pantry));
        assert!(drag.cancel().is_none());
    }
}
