use crate::container::{Container, ContainerKind, ItemContainer};
use crate::event::{Observers, SelectionChanged, SubscriptionId};
use crate::slot::Slot;

/// Hotbar with a selected slot.
///
/// Selection is independent of contents: adding to or emptying the selected
/// slot does not move the selection.
#[derive(Debug)]
pub struct Toolbar {
    container: Container,
    selected: usize,
    selection_observers: Observers<SelectionChanged>,
}

impl Toolbar {
    pub fn new(slot_count: usize) -> Self {
        Self {
            container: Container::new("Toolbar", ContainerKind::Toolbar, slot_count),
            selected: 0,
            selection_observers: Observers::new(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.container.slot(self.selected)
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.container.slot_count() {
            return;
        }
        self.selected = index;
        self.announce_selection();
    }

    pub fn select_next(&mut self) {
        let count = self.container.slot_count();
        if count == 0 {
            return;
        }
        self.select((self.selected + 1) % count);
    }

    pub fn select_previous(&mut self) {
        let count = self.container.slot_count();
        if count == 0 {
            return;
        }
        self.select((self.selected + count - 1) % count);
    }

    /// Re-emits the current selection, e.g. after the selected slot's
    /// contents changed and a listener wants the fresh snapshot.
    pub fn announce_selection(&mut self) {
        let Some(slot) = self.container.slot(self.selected) else {
            return;
        };
        let event = SelectionChanged {
            index: self.selected,
            slot: slot.snapshot(),
        };
        self.selection_observers.emit(&event);
    }

    pub fn on_selection_changed<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SelectionChanged) + 'static,
    {
        self.selection_observers.subscribe(observer)
    }

    pub fn remove_selection_observer(&mut self, id: SubscriptionId) -> bool {
        self.selection_observers.unsubscribe(id)
    }
}

impl ItemContainer for Toolbar {
    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }
}
