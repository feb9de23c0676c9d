use inventory_core::{
    AcceptancePolicy, Container, ContainerKind, IngredientData, InventoryConfig, ItemCatalog,
    ItemCategory, ItemContainer, ItemKind, ItemSpec, PlayerKit, Storage, ToolData, ToolFunction,
};
use std::cell::RefCell;
use std::rc::Rc;

struct Kitchen {
    potion: ItemKind,
    knife: ItemKind,
    milk: ItemKind,
    flour: ItemKind,
}

fn kitchen() -> Kitchen {
    let mut catalog = ItemCatalog::new();
    let mut register = |spec| catalog.register(spec).expect("unique item");
    Kitchen {
        potion: register(ItemSpec::new("Potion", ItemCategory::General).with_stacking(true, 10)),
        knife: register(ItemSpec::new(
            "Knife",
            ItemCategory::Tool(ToolData::new(ToolFunction::Cutting, None)),
        )),
        milk: register(ItemSpec::new(
            "Milk",
            ItemCategory::Ingredient(IngredientData::refrigerated()),
        )),
        flour: register(ItemSpec::new(
            "Flour",
            ItemCategory::Ingredient(IngredientData::shelf_stable()),
        )),
    }
}

fn quantity(container: &impl ItemContainer, index: usize) -> u32 {
    container.slot(index).map_or(0, |slot| slot.quantity())
}

fn holds(container: &impl ItemContainer, index: usize, kind: &ItemKind) -> bool {
    container.slot(index).is_some_and(|slot| slot.holds(kind))
}

/// Overflowing a single slot keeps the stack limit and reports failure.
#[test]
fn overflow_fills_to_stack_limit() {
    let items = kitchen();
    let mut container = Container::new("Satchel", ContainerKind::Generic, 1);

    assert!(!container.can_add_item(&items.potion, 12));
    assert!(!container.add_item(&items.potion, 12));
    assert_eq!(quantity(&container, 0), 10);
    assert!(holds(&container, 0, &items.potion));
}

/// A partial stack is topped up before the next empty slot is used.
#[test]
fn partial_stack_then_empty_slot() {
    let items = kitchen();
    let mut container = Container::new("Satchel", ContainerKind::Generic, 2);
    assert!(container.add_item(&items.potion, 5));

    assert!(container.can_add_item(&items.potion, 8));
    assert!(container.add_item(&items.potion, 8));
    assert_eq!(quantity(&container, 0), 10);
    assert_eq!(quantity(&container, 1), 3);
}

/// The fridge refuses shelf-stable food no matter how much room it has.
#[test]
fn fridge_rejects_shelf_stable_food() {
    let items = kitchen();
    let fridge = Storage::fridge(6);

    assert!(!fridge.can_add_item(&items.flour, 1));
    assert!(fridge.can_add_item(&items.milk, 1));
    assert!(fridge.slots().iter().all(|slot| slot.is_empty()));
}

/// Dropping a tool onto a different item in another container swaps them.
#[test]
fn transfer_between_different_kinds_swaps() {
    let items = kitchen();
    let mut source = Container::new("Inventory", ContainerKind::PlayerInventory, 2);
    let mut target = Container::new("Crate", ContainerKind::Generic, 2);
    source.add_item(&items.knife, 1);
    target.add_item(&items.potion, 3);

    assert!(source.transfer_item_to(&mut target, 0, 0));

    assert!(holds(&source, 0, &items.potion));
    assert_eq!(quantity(&source, 0), 3);
    assert!(holds(&target, 0, &items.knife));
    assert_eq!(quantity(&target, 0), 1);
}

/// A short kitchen session across every container variant.
///
/// 1. The player picks up a knife and groceries (knife is auto-equipped)
/// 2. Groceries are stored in the fridge and pantry according to policy
/// 3. Panels observe every change through the aggregate notification
#[test]
fn kitchen_session() {
    let items = kitchen();

    // ================================================================
    // PHASE 1: Pick up
    // ================================================================
    let mut kit = PlayerKit::from_config(&InventoryConfig::default());
    assert!(kit.pick_up(&items.knife));
    assert!(kit.inventory.add_item(&items.milk, 4));
    assert!(kit.inventory.add_item(&items.flour, 20));

    assert!(holds(&kit.toolbar, 0, &items.knife));
    assert_eq!(quantity(&kit.inventory, 0), 4);
    assert_eq!(quantity(&kit.inventory, 1), 12);
    assert_eq!(quantity(&kit.inventory, 2), 8);

    // ================================================================
    // PHASE 2: Store groceries
    // ================================================================
    let mut fridge = Storage::fridge(6);
    let mut pantry = Storage::pantry(12);

    let fridge_changes = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&fridge_changes);
    fridge
        .container_mut()
        .subscribe(move |change| {
            assert_eq!(change.kind, ContainerKind::Fridge);
            *counter.borrow_mut() += 1;
        });

    fridge.open();
    for (index, storage) in [(0, &mut fridge as &mut dyn ItemContainer), (1, &mut pantry)] {
        let kind = kit.inventory.slot(index).and_then(|s| s.item()).cloned();
        let kind = kind.expect("grocery present");
        if storage.can_add_item(&kind, quantity(&kit.inventory, index)) {
            assert!(kit.inventory.transfer_item_to(storage, index, 0));
        }
    }

    assert_eq!(quantity(&fridge, 0), 4);
    assert_eq!(quantity(&pantry, 0), 12);
    assert!(kit.inventory.slot(0).is_some_and(|s| s.is_empty()));
    assert_eq!(*fridge_changes.borrow(), 1);

    // ================================================================
    // PHASE 3: Consolidate the leftover flour into the pantry
    // ================================================================
    assert!(kit.inventory.transfer_item_to(&mut pantry, 2, 1));
    assert_eq!(quantity(&pantry, 1), 8);
    assert!(kit.inventory.slots().iter().all(|slot| slot.is_empty()));
}

/// A custom policy can express rules the built-in variants don't.
#[test]
fn custom_policy_container() {
    let items = kitchen();
    let knife_block = Container::new("Knife block", ContainerKind::Generic, 4).with_policy(
        AcceptancePolicy::custom(|item, _| {
            item.tool()
                .is_some_and(|tool| tool.function == ToolFunction::Cutting)
        }),
    );

    assert!(knife_block.can_add_item(&items.knife, 4));
    assert!(!knife_block.can_add_item(&items.potion, 1));
}
