//! Slot-based inventory engine for a kitchen game.
//!
//! `inventory-core` defines items, stacking rules, containers and the
//! merge-or-swap transfer engine as engine-independent data types. All slot
//! mutation flows through [`Container`], which notifies its observers after
//! every change; variants ([`PlayerInventory`], [`Toolbar`], [`Storage`])
//! wrap a container and share its operations through [`ItemContainer`].
//!
//! Item kinds come from an [`ItemCatalog`]; data-file loading lives in the
//! `inventory-content` crate.
pub mod catalog;
pub mod config;
pub mod container;
pub mod drag;
pub mod error;
pub mod event;
pub mod item;
pub mod player;
pub mod slot;
pub mod snapshot;
pub mod storage;
pub mod tool;
pub mod toolbar;
pub mod transfer;

pub use catalog::{CatalogError, ItemCatalog};
pub use config::{ConfigError, InventoryConfig};
pub use container::{AcceptancePolicy, Container, ContainerKind, ItemContainer};
pub use drag::{DragController, DragState, DropAction, SlotRef};
pub use error::{ErrorSeverity, InventoryError};
pub use event::{
    ContainerChanged, LidChanged, Observers, SelectionChanged, SlotChanged, SubscriptionId,
};
pub use item::{
    IngredientData, ItemCategory, ItemDefinition, ItemHandle, ItemKind, ItemSpec, ToolData,
    ToolFunction,
};
pub use player::{PlayerInventory, PlayerKit};
pub use slot::Slot;
pub use snapshot::{ContainerSnapshot, SlotSnapshot};
pub use storage::{LidState, Storage};
pub use tool::{ToolUse, ToolWear};
pub use toolbar::Toolbar;
pub use transfer::TransferPlan;
