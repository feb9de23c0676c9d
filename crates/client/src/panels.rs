//! Which container panels are on screen.
//!
//! The toolbar is always shown. Storage panels are only shown alongside the
//! player inventory, so showing one pulls the inventory up and hiding the
//! inventory takes every storage panel with it.

use std::collections::HashSet;

use inventory_core::ContainerKind;

/// Render order of the panels.
pub const PANEL_ORDER: [ContainerKind; 4] = [
    ContainerKind::Toolbar,
    ContainerKind::PlayerInventory,
    ContainerKind::Fridge,
    ContainerKind::Pantry,
];

pub fn is_storage(kind: ContainerKind) -> bool {
    matches!(kind, ContainerKind::Fridge | ContainerKind::Pantry)
}

#[derive(Clone, Debug)]
pub struct PanelSet {
    visible: HashSet<ContainerKind>,
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSet {
    pub fn new() -> Self {
        Self {
            visible: HashSet::from([ContainerKind::Toolbar]),
        }
    }

    pub fn is_visible(&self, kind: ContainerKind) -> bool {
        self.visible.contains(&kind)
    }

    /// Visible panels in render order.
    pub fn visible(&self) -> impl Iterator<Item = ContainerKind> + '_ {
        PANEL_ORDER.into_iter().filter(|kind| self.is_visible(*kind))
    }

    /// Shows a panel. Returns the panels that became visible.
    pub fn show(&mut self, kind: ContainerKind) -> Vec<ContainerKind> {
        let mut shown = Vec::new();
        if !PANEL_ORDER.contains(&kind) {
            return shown;
        }
        if is_storage(kind) && self.visible.insert(ContainerKind::PlayerInventory) {
            shown.push(ContainerKind::PlayerInventory);
        }
        if self.visible.insert(kind) {
            shown.push(kind);
        }
        shown
    }

    /// Hides a panel. Returns the panels that became hidden.
    pub fn hide(&mut self, kind: ContainerKind) -> Vec<ContainerKind> {
        let mut hidden = Vec::new();
        if kind == ContainerKind::Toolbar || !self.visible.remove(&kind) {
            return hidden;
        }
        hidden.push(kind);

        if kind == ContainerKind::PlayerInventory {
            for storage in PANEL_ORDER.into_iter().filter(|k| is_storage(*k)) {
                if self.visible.remove(&storage) {
                    hidden.push(storage);
                }
            }
        } else if is_storage(kind)
            && !self.visible.iter().any(|k| is_storage(*k))
            && self.visible.remove(&ContainerKind::PlayerInventory)
        {
            hidden.push(ContainerKind::PlayerInventory);
        }
        hidden
    }

    /// Returns `(shown, hidden)`.
    pub fn toggle_player_inventory(&mut self) -> (Vec<ContainerKind>, Vec<ContainerKind>) {
        if self.is_visible(ContainerKind::PlayerInventory) {
            (Vec::new(), self.hide(ContainerKind::PlayerInventory))
        } else {
            (self.show(ContainerKind::PlayerInventory), Vec::new())
        }
    }
}
