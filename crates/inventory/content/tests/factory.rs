use std::fs;
use std::path::PathBuf;

use inventory_content::ContentFactory;
use inventory_core::{ContainerKind, InventoryConfig, ItemContainer, PlayerKit, Storage};
use tempfile::TempDir;

fn setup(items: &str, config: Option<&str>) -> (TempDir, ContentFactory) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("items.ron"), items).unwrap();
    if let Some(config) = config {
        fs::write(temp_dir.path().join("config.toml"), config).unwrap();
    }
    let factory = ContentFactory::new(temp_dir.path());
    (temp_dir, factory)
}

#[test]
fn test_load_from_directory() {
    let (_temp, factory) = setup(
        r#"(items: [(name: "Milk", category: Ingredient((requires_refrigeration: true)))])"#,
        Some("fridge_slots = 2\n"),
    );

    let config = factory.load_config().unwrap();
    let catalog = factory.load_items().unwrap();
    assert_eq!(config.fridge_slots, 2);

    let milk = catalog.find("Milk").unwrap();
    let mut fridge = Storage::fridge(config.fridge_slots);
    assert!(fridge.add_item(milk, 24));
    assert!(!fridge.can_add_item(milk, 1));
    assert_eq!(fridge.kind(), ContainerKind::Fridge);
}

#[test]
fn test_missing_config_uses_defaults() {
    let (_temp, factory) = setup("(items: [])", None);
    assert_eq!(factory.load_config().unwrap(), InventoryConfig::default());
    assert!(factory.load_items().unwrap().is_empty());
}

#[test]
fn test_missing_items_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(temp_dir.path());

    let err = factory.load_items().unwrap_err().to_string();
    assert!(err.starts_with("Failed to read file"));
    assert!(err.contains("items.ron"));
}

#[test]
fn test_invalid_config_reports_path() {
    let (_temp, factory) = setup("(items: [])", Some("pantry_slots = 0\n"));
    let err = factory.load_config().unwrap_err().to_string();
    assert!(err.contains("config.toml"));
    assert!(err.contains("pantry must have at least one slot"));
}

/// The shipped data directory loads cleanly and fits the default containers.
#[test]
fn test_bundled_data() {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let factory = ContentFactory::new(data_dir);

    let config = factory.load_config().unwrap();
    let catalog = factory.load_items().unwrap();
    assert!(!catalog.is_empty());

    let mut kit = PlayerKit::from_config(&config);
    let mut fridge = Storage::fridge(config.fridge_slots);
    let mut pantry = Storage::pantry(config.pantry_slots);

    for kind in catalog.iter() {
        match kind.requires_refrigeration() {
            Some(true) => assert!(fridge.can_add_item(kind, 1), "{kind} belongs in the fridge"),
            Some(false) => assert!(pantry.can_add_item(kind, 1), "{kind} belongs in the pantry"),
            None => assert!(!fridge.can_add_item(kind, 1) && !pantry.can_add_item(kind, 1)),
        }
        assert!(kit.pick_up(kind));
    }
    assert!(fridge.add_item(catalog.find("egg").unwrap(), 6));
    assert!(pantry.add_item(catalog.find("salt").unwrap(), 24));
}
