//! A kitchen session: the player's kit, the fridge and pantry, and the panel
//! and drag state of the text frontend.
//!
//! Core notifications are wired here. Observers only record what happened
//! (dirty panels, lid changes, messages); the session acts on lid changes
//! after the triggering call has returned.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use inventory_core::{
    ContainerKind, DragController, DropAction, InventoryConfig, ItemCatalog, ItemContainer,
    ItemKind, LidChanged, LidState, PlayerKit, SlotRef, Storage, ToolUse, TransferPlan,
};

use crate::command::{Command, CommandError, HELP};
use crate::message::MessageLog;
use crate::panels::{PanelSet, is_storage};
use crate::render;

/// What the frontend should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Done,
    Text(String),
    Quit,
}

pub struct Kitchen {
    catalog: ItemCatalog,
    kit: PlayerKit,
    fridge: Storage,
    pantry: Storage,
    panels: PanelSet,
    drag: DragController,
    messages: Rc<RefCell<MessageLog>>,
    dirty: Rc<RefCell<HashSet<ContainerKind>>>,
    lid_changes: Rc<RefCell<Vec<LidChanged>>>,
}

impl Kitchen {
    pub fn new(catalog: ItemCatalog, config: &InventoryConfig, message_capacity: usize) -> Self {
        let mut kitchen = Self {
            catalog,
            kit: PlayerKit::from_config(config),
            fridge: Storage::fridge(config.fridge_slots),
            pantry: Storage::pantry(config.pantry_slots),
            panels: PanelSet::new(),
            drag: DragController::new(),
            messages: Rc::new(RefCell::new(MessageLog::new(message_capacity))),
            dirty: Rc::new(RefCell::new(HashSet::new())),
            lid_changes: Rc::new(RefCell::new(Vec::new())),
        };
        kitchen.wire_observers();
        kitchen
    }

    fn wire_observers(&mut self) {
        for kind in [
            ContainerKind::PlayerInventory,
            ContainerKind::Toolbar,
            ContainerKind::Fridge,
            ContainerKind::Pantry,
        ] {
            let dirty = Rc::clone(&self.dirty);
            if let Some(container) = self.container_mut(kind) {
                container.container_mut().subscribe(move |change| {
                    dirty.borrow_mut().insert(change.kind);
                });
            }
        }

        let messages = Rc::clone(&self.messages);
        self.kit.toolbar.on_selection_changed(move |event| {
            let held = event
                .slot
                .item()
                .map_or_else(|| "nothing".to_owned(), |kind| kind.name.clone());
            messages
                .borrow_mut()
                .info(format!("Selected slot {}: {}", event.index, held));
        });

        for storage in [&mut self.fridge, &mut self.pantry] {
            let messages = Rc::clone(&self.messages);
            let pending = Rc::clone(&self.lid_changes);
            storage.on_lid_changed(move |event| {
                let verb = match event.state {
                    LidState::Open => "opened",
                    LidState::Closed => "closed",
                };
                messages.borrow_mut().info(format!("The {} {}", event.kind, verb));
                pending.borrow_mut().push(*event);
            });
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn kit(&self) -> &PlayerKit {
        &self.kit
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn messages(&self) -> Rc<RefCell<MessageLog>> {
        Rc::clone(&self.messages)
    }

    pub fn storage(&self, kind: ContainerKind) -> Option<&Storage> {
        match kind {
            ContainerKind::Fridge => Some(&self.fridge),
            ContainerKind::Pantry => Some(&self.pantry),
            _ => None,
        }
    }

    fn storage_mut(&mut self, kind: ContainerKind) -> Option<&mut Storage> {
        match kind {
            ContainerKind::Fridge => Some(&mut self.fridge),
            ContainerKind::Pantry => Some(&mut self.pantry),
            _ => None,
        }
    }

    pub fn container(&self, kind: ContainerKind) -> Option<&dyn ItemContainer> {
        match kind {
            ContainerKind::PlayerInventory => Some(&self.kit.inventory),
            ContainerKind::Toolbar => Some(&self.kit.toolbar),
            ContainerKind::Fridge => Some(&self.fridge),
            ContainerKind::Pantry => Some(&self.pantry),
            ContainerKind::Generic => None,
        }
    }

    fn container_mut(&mut self, kind: ContainerKind) -> Option<&mut dyn ItemContainer> {
        match kind {
            ContainerKind::PlayerInventory => Some(&mut self.kit.inventory),
            ContainerKind::Toolbar => Some(&mut self.kit.toolbar),
            ContainerKind::Fridge => Some(&mut self.fridge),
            ContainerKind::Pantry => Some(&mut self.pantry),
            ContainerKind::Generic => None,
        }
    }

    /// Two distinct containers borrowed mutably at once.
    fn pair_mut(
        &mut self,
        first: ContainerKind,
        second: ContainerKind,
    ) -> Option<(&mut dyn ItemContainer, &mut dyn ItemContainer)> {
        if first == second {
            return None;
        }
        let mut a = None;
        let mut b = None;
        let all: [(ContainerKind, &mut dyn ItemContainer); 4] = [
            (ContainerKind::PlayerInventory, &mut self.kit.inventory),
            (ContainerKind::Toolbar, &mut self.kit.toolbar),
            (ContainerKind::Fridge, &mut self.fridge),
            (ContainerKind::Pantry, &mut self.pantry),
        ];
        for (kind, container) in all {
            if kind == first {
                a = Some(container);
            } else if kind == second {
                b = Some(container);
            }
        }
        Some((a?, b?))
    }

    /// Visible panels that changed since the last call, in render order.
    pub fn take_dirty(&mut self) -> Vec<ContainerKind> {
        let dirty = std::mem::take(&mut *self.dirty.borrow_mut());
        self.panels
            .visible()
            .filter(|kind| dirty.contains(kind))
            .collect()
    }

    pub fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        tracing::debug!("Executing {:?}", command);
        let response = match command {
            Command::Help => Response::Text(HELP.to_owned()),
            Command::Items => Response::Text(render::catalog(&self.catalog)),
            Command::Give { item, count } => {
                self.give(&item, count)?;
                Response::Done
            }
            Command::Show(kind) => Response::Text(self.render_panel(kind)?),
            Command::Open(kind) => {
                self.storage_mut(kind).ok_or(CommandError::NotStorage(kind))?.open();
                Response::Done
            }
            Command::Close(kind) => {
                self.storage_mut(kind).ok_or(CommandError::NotStorage(kind))?.close();
                Response::Done
            }
            Command::UseStorage(kind) => {
                let storage = self.storage_mut(kind).ok_or(CommandError::NotStorage(kind))?;
                storage.toggle();
                Response::Done
            }
            Command::Tab => {
                let (shown, hidden) = self.panels.toggle_player_inventory();
                self.mark_dirty(&shown);
                self.on_panels_hidden(&hidden);
                Response::Done
            }
            Command::Drag { from, to } => {
                self.drag(from, to)?;
                Response::Done
            }
            Command::Swap {
                container,
                from,
                to,
            } => {
                self.require_visible(container)?;
                self.require_slot(SlotRef::new(container, from))?;
                self.require_slot(SlotRef::new(container, to))?;
                if let Some(target) = self.container_mut(container) {
                    target.swap_items(from, to);
                }
                Response::Done
            }
            Command::Take {
                container,
                index,
                amount,
            } => {
                self.take(SlotRef::new(container, index), amount)?;
                Response::Done
            }
            Command::Select(index) => {
                if index >= self.kit.toolbar.slot_count() {
                    return Err(CommandError::NoSuchSlot {
                        container: ContainerKind::Toolbar,
                        index,
                    });
                }
                self.kit.toolbar.select(index);
                Response::Done
            }
            Command::Next => {
                self.kit.toolbar.select_next();
                Response::Done
            }
            Command::Prev => {
                self.kit.toolbar.select_previous();
                Response::Done
            }
            Command::Use => {
                self.use_tool();
                Response::Done
            }
            Command::Dump(kind) => {
                let container = self
                    .container(kind)
                    .ok_or(CommandError::UnknownContainer(kind.to_string()))?;
                let json = serde_json::to_string_pretty(&container.container().snapshot())
                    .map_err(|e| CommandError::Dump(e.to_string()))?;
                Response::Text(json)
            }
            Command::Quit => Response::Quit,
        };

        self.apply_lid_changes();
        Ok(response)
    }

    fn give(&mut self, name: &str, count: u32) -> Result<(), CommandError> {
        let kind = self
            .catalog
            .find(name)
            .cloned()
            .ok_or_else(|| CommandError::UnknownItem(name.to_owned()))?;

        let equipped = !kind.stackable && self.kit.toolbar.can_add_item(&kind, count);
        if !equipped && !self.kit.inventory.can_add_item(&kind, count) {
            return Err(CommandError::NoRoom {
                item: kind.name.clone(),
                count,
            });
        }
        self.kit
            .inventory
            .add_item_with_auto_equip(Some(&mut self.kit.toolbar), &kind, count);

        let place = if equipped { "toolbar" } else { "bag" };
        self.messages
            .borrow_mut()
            .info(format!("Put {} x{} in your {}", kind.name, count, place));
        Ok(())
    }

    fn take(&mut self, slot: SlotRef, amount: u32) -> Result<(), CommandError> {
        self.require_visible(slot.container)?;
        let quantity = self.require_slot(slot)?;
        if quantity == 0 {
            return Err(CommandError::EmptySlot {
                container: slot.container,
                index: slot.index,
            });
        }
        let removed = amount.clamp(1, quantity);
        if let Some(kind) = self
            .container_mut(slot.container)
            .and_then(|container| container.remove_item(slot.index, amount))
        {
            self.messages
                .borrow_mut()
                .info(format!("Took {} x{}", kind.name, removed));
        }
        Ok(())
    }

    fn drag(&mut self, from: SlotRef, to: SlotRef) -> Result<(), CommandError> {
        self.require_visible(from.container)?;
        self.require_visible(to.container)?;
        self.require_slot(to)?;

        let origin = self
            .container(from.container)
            .and_then(|container| container.slot(from.index))
            .cloned()
            .ok_or(CommandError::NoSuchSlot {
                container: from.container,
                index: from.index,
            })?;
        if !self.drag.begin(from, &origin) {
            return Err(CommandError::EmptySlot {
                container: from.container,
                index: from.index,
            });
        }

        match self.drag.finish(Some(to)) {
            DropAction::Cancelled => {}
            DropAction::Swap {
                container,
                from,
                to,
            } => {
                if let Some(target) = self.container_mut(container) {
                    target.swap_items(from, to);
                }
            }
            DropAction::Transfer { from, to } => {
                let Some(item) = origin.item() else {
                    return Ok(());
                };
                self.require_accepts(to.container, item, origin.quantity())?;

                let destination = self
                    .container(to.container)
                    .and_then(|container| container.slot(to.index))
                    .cloned()
                    .unwrap_or_default();
                if let Some(displaced) = destination.item() {
                    if TransferPlan::between(&origin, &destination).is_exchange() {
                        self.require_accepts(from.container, displaced, destination.quantity())?;
                    }
                }

                if let Some((source, target)) = self.pair_mut(from.container, to.container) {
                    source.transfer_item_to(target, from.index, to.index);
                }
            }
        }
        Ok(())
    }

    fn use_tool(&mut self) {
        let held = self
            .kit
            .toolbar
            .selected_slot()
            .and_then(|slot| slot.item())
            .map(|kind| kind.name.clone());
        let outcome = self.kit.use_selected_tool();
        let mut messages = self.messages.borrow_mut();
        match (outcome, held) {
            (ToolUse::Idle, _) | (_, None) => messages.info("Your hands are empty"),
            (ToolUse::NotATool, Some(name)) => messages.info(format!("{name} is not a tool")),
            (ToolUse::Used { remaining: None }, Some(name)) => {
                messages.info(format!("Used the {name}"))
            }
            (ToolUse::Used { remaining: Some(left) }, Some(name)) => {
                messages.info(format!("Used the {name} ({left} uses left)"))
            }
            (ToolUse::Broke, Some(name)) => messages.warn(format!("The {name} broke!")),
        }
    }

    fn render_panel(&self, kind: ContainerKind) -> Result<String, CommandError> {
        let container = self
            .container(kind)
            .ok_or(CommandError::UnknownContainer(kind.to_string()))?;
        let selected = (kind == ContainerKind::Toolbar).then(|| self.kit.toolbar.selected_index());
        Ok(render::container(container, &self.kit.wear, selected))
    }

    /// Renders every visible panel in order.
    pub fn render_visible(&self) -> String {
        self.panels
            .visible()
            .filter_map(|kind| self.render_panel(kind).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_panels(&self, kinds: &[ContainerKind]) -> String {
        kinds
            .iter()
            .filter_map(|kind| self.render_panel(*kind).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Storage refuses items its policy does not accept; other containers
    /// take anything.
    fn require_accepts(
        &self,
        kind: ContainerKind,
        item: &ItemKind,
        amount: u32,
    ) -> Result<(), CommandError> {
        let refused = is_storage(kind)
            && self
                .container(kind)
                .is_some_and(|container| !container.accepts(item, amount));
        if refused {
            tracing::debug!("{} refused {}", kind, item.name);
            return Err(CommandError::Rejected {
                container: kind,
                item: item.name.clone(),
            });
        }
        Ok(())
    }

    fn require_visible(&self, kind: ContainerKind) -> Result<(), CommandError> {
        if self.panels.is_visible(kind) {
            Ok(())
        } else {
            Err(CommandError::PanelHidden(kind))
        }
    }

    /// Quantity held at `slot`, or an error for a slot that does not exist.
    fn require_slot(&self, slot: SlotRef) -> Result<u32, CommandError> {
        self.container(slot.container)
            .and_then(|container| container.slot(slot.index))
            .map(|found| found.quantity())
            .ok_or(CommandError::NoSuchSlot {
                container: slot.container,
                index: slot.index,
            })
    }

    fn mark_dirty(&mut self, kinds: &[ContainerKind]) {
        self.dirty.borrow_mut().extend(kinds.iter().copied());
    }

    fn on_panels_hidden(&mut self, hidden: &[ContainerKind]) {
        for kind in hidden {
            if self.drag.cancel_from(*kind) {
                tracing::debug!("Drag from {} cancelled", kind);
            }
            if let Some(storage) = self.storage_mut(*kind) {
                storage.close();
            }
        }
    }

    /// Lets open/closed storage drive its panel. Closing a storage panel may
    /// close further lids, so this runs until no changes are pending.
    fn apply_lid_changes(&mut self) {
        loop {
            let pending = std::mem::take(&mut *self.lid_changes.borrow_mut());
            if pending.is_empty() {
                break;
            }
            for change in pending {
                match change.state {
                    LidState::Open => {
                        let shown = self.panels.show(change.kind);
                        self.mark_dirty(&shown);
                    }
                    LidState::Closed => {
                        let hidden = self.panels.hide(change.kind);
                        self.on_panels_hidden(&hidden);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{IngredientData, ItemCategory, ItemSpec, ToolData, ToolFunction};

    fn kitchen() -> Kitchen {
        let catalog = ItemCatalog::from_specs([
            ItemSpec::new("Milk", ItemCategory::Ingredient(IngredientData::refrigerated())),
            ItemSpec::new("Flour", ItemCategory::Ingredient(IngredientData::shelf_stable())),
            ItemSpec::new(
                "Whisk",
                ItemCategory::Tool(ToolData::new(ToolFunction::Whipping, Some(2))),
            ),
        ])
        .unwrap();
        let config = InventoryConfig {
            player_inventory_slots: 4,
            toolbar_slots: 3,
            fridge_slots: 2,
            pantry_slots: 2,
        };
        Kitchen::new(catalog, &config, 16)
    }

    fn run(kitchen: &mut Kitchen, line: &str) -> Result<Response, CommandError> {
        kitchen.execute(line.parse()?)
    }

    fn quantity(kitchen: &Kitchen, kind: ContainerKind, index: usize) -> u32 {
        kitchen
            .container(kind)
            .and_then(|c| c.slot(index))
            .map_or(0, |slot| slot.quantity())
    }

    #[test]
    fn give_places_tools_on_the_toolbar() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give whisk").unwrap();
        run(&mut kitchen, "give milk 3").unwrap();

        assert_eq!(quantity(&kitchen, ContainerKind::Toolbar, 0), 1);
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 3);
        assert_eq!(
            run(&mut kitchen, "give butter"),
            Err(CommandError::UnknownItem("butter".into()))
        );
    }

    #[test]
    fn give_is_all_or_nothing() {
        let mut kitchen = kitchen();
        let err = run(&mut kitchen, "give flour 49").unwrap_err();
        assert_eq!(
            err,
            CommandError::NoRoom {
                item: "Flour".into(),
                count: 49
            }
        );
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 0);
    }

    #[test]
    fn opening_storage_shows_panels() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "open fridge").unwrap();
        assert!(kitchen.panels().is_visible(ContainerKind::Fridge));
        assert!(kitchen.panels().is_visible(ContainerKind::PlayerInventory));

        run(&mut kitchen, "use-storage fridge").unwrap();
        assert!(!kitchen.panels().is_visible(ContainerKind::Fridge));
        assert!(!kitchen.panels().is_visible(ContainerKind::PlayerInventory));
    }

    #[test]
    fn closing_inventory_closes_storage_lids() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "open fridge").unwrap();
        run(&mut kitchen, "open pantry").unwrap();
        run(&mut kitchen, "tab").unwrap();

        assert!(!kitchen.storage(ContainerKind::Fridge).unwrap().is_open());
        assert!(!kitchen.storage(ContainerKind::Pantry).unwrap().is_open());
        assert_eq!(kitchen.panels().visible().count(), 1);
    }

    #[test]
    fn drag_into_fridge_checks_policy() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give milk 3").unwrap();
        run(&mut kitchen, "give flour 2").unwrap();
        run(&mut kitchen, "open fridge").unwrap();

        assert_eq!(
            run(&mut kitchen, "drag inv 1 fridge 0"),
            Err(CommandError::Rejected {
                container: ContainerKind::Fridge,
                item: "Flour".into()
            })
        );
        run(&mut kitchen, "drag inv 0 fridge 1").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::Fridge, 1), 3);
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 0);
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 1), 2);
    }

    #[test]
    fn drag_out_of_fridge_checks_what_it_swaps_in() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give milk 3").unwrap();
        run(&mut kitchen, "give flour 2").unwrap();
        run(&mut kitchen, "open fridge").unwrap();
        run(&mut kitchen, "drag inv 0 fridge 0").unwrap();

        assert_eq!(
            run(&mut kitchen, "drag fridge 0 inv 1"),
            Err(CommandError::Rejected {
                container: ContainerKind::Fridge,
                item: "Flour".into()
            })
        );
        assert_eq!(quantity(&kitchen, ContainerKind::Fridge, 0), 3);
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 1), 2);

        run(&mut kitchen, "drag fridge 0 inv 0").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::Fridge, 0), 0);
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 3);
    }

    #[test]
    fn drag_requires_visible_panels_and_occupied_slot() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give milk").unwrap();
        assert_eq!(
            run(&mut kitchen, "drag inv 0 bar 0"),
            Err(CommandError::PanelHidden(ContainerKind::PlayerInventory))
        );

        run(&mut kitchen, "tab").unwrap();
        assert_eq!(
            run(&mut kitchen, "drag inv 2 bar 0"),
            Err(CommandError::EmptySlot {
                container: ContainerKind::PlayerInventory,
                index: 2
            })
        );
        run(&mut kitchen, "drag inv 0 bar 2").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::Toolbar, 2), 1);
        run(&mut kitchen, "drag bar 2 bar 0").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::Toolbar, 0), 1);
    }

    #[test]
    fn dirty_panels_are_reported_once() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give whisk").unwrap();
        run(&mut kitchen, "give milk").unwrap();

        assert_eq!(kitchen.take_dirty(), vec![ContainerKind::Toolbar]);
        assert!(kitchen.take_dirty().is_empty());

        run(&mut kitchen, "tab").unwrap();
        assert_eq!(kitchen.take_dirty(), vec![ContainerKind::PlayerInventory]);
    }

    #[test]
    fn using_the_whisk_until_it_breaks() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give whisk").unwrap();
        run(&mut kitchen, "use").unwrap();
        run(&mut kitchen, "use").unwrap();
        run(&mut kitchen, "use").unwrap();

        let log = kitchen.messages();
        let texts: Vec<String> = log.borrow_mut().take_unread().into_iter().map(|m| m.text).collect();
        assert_eq!(
            texts[texts.len() - 3..],
            [
                "Used the Whisk (1 uses left)".to_owned(),
                "The Whisk broke!".to_owned(),
                "Your hands are empty".to_owned(),
            ]
        );
    }

    #[test]
    fn selection_is_bounds_checked() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "select 2").unwrap();
        assert_eq!(kitchen.kit().toolbar.selected_index(), 2);
        assert_eq!(
            run(&mut kitchen, "select 3"),
            Err(CommandError::NoSuchSlot {
                container: ContainerKind::Toolbar,
                index: 3
            })
        );
        run(&mut kitchen, "next").unwrap();
        assert_eq!(kitchen.kit().toolbar.selected_index(), 0);
    }

    #[test]
    fn dump_is_json() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give milk 2").unwrap();
        let Response::Text(json) = run(&mut kitchen, "dump inv").unwrap() else {
            panic!("dump should produce text");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "PlayerInventory");
        assert_eq!(value["slots"][0]["item"], "Milk");
        assert_eq!(value["slots"][0]["quantity"], 2);
    }

    #[test]
    fn take_removes_and_reports() {
        let mut kitchen = kitchen();
        run(&mut kitchen, "give milk 5").unwrap();
        run(&mut kitchen, "tab").unwrap();
        run(&mut kitchen, "take inv 0 2").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 3);
        run(&mut kitchen, "take inv 0 9").unwrap();
        assert_eq!(quantity(&kitchen, ContainerKind::PlayerInventory, 0), 0);
        assert!(run(&mut kitchen, "take inv 0").is_err());
    }
}
