use std::io::Cursor;

use inventory_content::ItemLoader;
use inventory_core::InventoryConfig;
use kitchen_client::{Kitchen, app};

const ITEMS: &str = r#"(
    items: [
        (name: "Milk", category: Ingredient((requires_refrigeration: true))),
        (name: "Flour", category: Ingredient((requires_refrigeration: false))),
        (name: "Whisk", category: Tool((function: Whipping, max_durability: Some(3)))),
    ],
)"#;

fn play(script: &str) -> String {
    let catalog = ItemLoader::parse(ITEMS).unwrap();
    let mut kitchen = Kitchen::new(catalog, &InventoryConfig::default(), 8);
    let mut output = Vec::new();
    app::run(&mut kitchen, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Stocking the fridge through the text frontend.
///
/// 1. Pick up groceries and a whisk
/// 2. Open the fridge (inventory panel comes along)
/// 3. Drag milk in; flour is refused
/// 4. Close the fridge and quit
#[test]
fn test_stock_the_fridge() {
    let output = play(
        "give whisk\n\
         give milk 4\n\
         give flour 2\n\
         open fridge\n\
         drag inv 0 fridge 0\n\
         drag inv 1 fridge 1\n\
         close fridge\n\
         quit\n",
    );

    assert!(output.starts_with("== Toolbar (6 slots) =="));
    assert!(output.contains("* Put Whisk x1 in your toolbar"));
    assert!(output.contains("* The fridge opened"));
    assert!(output.contains("== Fridge (6 slots) ==\n [ 0] Milk x4"));
    assert!(output.contains("! The fridge does not take Flour"));
    assert!(output.contains("* The fridge closed"));
    assert!(output.trim_end().ends_with("Bye!"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let output = play("juggle\nselect 9\n\nshow inv\n");

    assert!(output.contains("! Unknown command 'juggle' (try 'help')"));
    assert!(output.contains("! toolbar has no slot 9"));
    assert!(output.contains("== Inventory (27 slots) =="));
    assert!(!output.contains("Bye!"));
}

#[test]
fn test_selection_messages() {
    let output = play("give whisk\nnext\nprev\nuse\n");

    assert!(output.contains("* Selected slot 1: nothing"));
    assert!(output.contains("* Selected slot 0: Whisk"));
    assert!(output.contains("* Used the Whisk (2 uses left)"));
}
