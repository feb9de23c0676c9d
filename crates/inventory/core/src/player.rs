//! Player-side containers: the backpack and the kit that ties it to the
//! toolbar and tool wear.

use crate::config::InventoryConfig;
use crate::container::{Container, ContainerKind, ItemContainer};
use crate::item::ItemKind;
use crate::tool::{ToolUse, ToolWear};
use crate::toolbar::Toolbar;

/// General-purpose inventory; accepts anything.
#[derive(Debug)]
pub struct PlayerInventory {
    container: Container,
}

impl PlayerInventory {
    pub fn new(slot_count: usize) -> Self {
        Self {
            container: Container::new("Inventory", ContainerKind::PlayerInventory, slot_count),
        }
    }

    /// Non-stackable items go to the toolbar when it has room; everything
    /// else (and any tool the toolbar cannot take) lands here.
    pub fn add_item_with_auto_equip(
        &mut self,
        toolbar: Option<&mut Toolbar>,
        item: &ItemKind,
        amount: u32,
    ) -> bool {
        if !item.stackable {
            if let Some(toolbar) = toolbar {
                if toolbar.can_add_item(item, amount) {
                    tracing::debug!("Equipping {} x{} to toolbar", item.name, amount);
                    return toolbar.add_item(item, amount);
                }
            }
        }
        self.container.add_item(item, amount)
    }
}

impl ItemContainer for PlayerInventory {
    fn container(&self) -> &Container {
        &self.container
    }

    fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }
}

/// Everything the player carries.
#[derive(Debug)]
pub struct PlayerKit {
    pub inventory: PlayerInventory,
    pub toolbar: Toolbar,
    pub wear: ToolWear,
}

impl PlayerKit {
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self {
            inventory: PlayerInventory::new(config.player_inventory_slots),
            toolbar: Toolbar::new(config.toolbar_slots),
            wear: ToolWear::new(),
        }
    }

    /// Picks up a single unit, equipping tools when the toolbar has room.
    pub fn pick_up(&mut self, item: &ItemKind) -> bool {
        let picked = self
            .inventory
            .add_item_with_auto_equip(Some(&mut self.toolbar), item, 1);
        if !picked {
            tracing::warn!("No room for {}", item.name);
        }
        picked
    }

    /// Applies wear to the selected toolbar item. A tool that breaks is
    /// removed from its slot.
    pub fn use_selected_tool(&mut self) -> ToolUse {
        let index = self.toolbar.selected_index();
        let Some(item) = self.toolbar.selected_slot().and_then(|slot| slot.item()).cloned() else {
            return ToolUse::Idle;
        };

        let outcome = self.wear.use_tool(&item);
        if outcome == ToolUse::Broke {
            self.toolbar.remove_item(index, 1);
        }
        outcome
    }
}
