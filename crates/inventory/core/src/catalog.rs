//! Catalog of item kinds.
//!
//! The catalog is the only place that creates [`ItemKind`]s. Every distinct
//! kind is registered once and handed out by reference afterwards. Handles
//! are positions in this catalog only; kinds compare by shared instance.

use crate::error::{ErrorSeverity, InventoryError};
use crate::item::{ItemDefinition, ItemHandle, ItemKind, ItemSpec};

/// Read-only registry of item kinds, indexed by handle.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    kinds: Vec<ItemKind>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from specs in order; handles follow list position.
    pub fn from_specs(specs: impl IntoIterator<Item = ItemSpec>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.register(spec)?;
        }
        Ok(catalog)
    }

    /// Registers a new item kind and returns its shared handle.
    pub fn register(&mut self, spec: ItemSpec) -> Result<ItemKind, CatalogError> {
        if self.find(&spec.name).is_some() {
            return Err(CatalogError::DuplicateName { name: spec.name });
        }

        let (stackable, max_stack_size) = spec.resolved_stacking();
        if max_stack_size == 0 {
            return Err(CatalogError::ZeroMaxStack { name: spec.name });
        }

        let handle = ItemHandle(self.kinds.len() as u32);
        let kind = ItemKind::new(ItemDefinition {
            handle,
            name: spec.name,
            stackable,
            max_stack_size,
            category: spec.category,
        });
        tracing::debug!("Registered item {} as {}", kind.name, handle);

        self.kinds.push(kind.clone());
        Ok(kind)
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemKind> {
        self.kinds.get(handle.0 as usize)
    }

    /// Like [`ItemCatalog::get`], for callers that treat a miss as an error.
    pub fn require(&self, handle: ItemHandle) -> Result<&ItemKind, CatalogError> {
        self.get(handle).ok_or(CatalogError::UnknownHandle { handle })
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&ItemKind> {
        self.kinds
            .iter()
            .find(|kind| kind.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Errors raised while building an [`ItemCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Item '{name}' is already registered")]
    DuplicateName { name: String },

    #[error("Item '{name}' has a max stack size of zero")]
    ZeroMaxStack { name: String },

    #[error("No item registered under handle {handle}")]
    UnknownHandle { handle: ItemHandle },
}

impl InventoryError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateName { .. } | Self::ZeroMaxStack { .. } => ErrorSeverity::Validation,
            Self::UnknownHandle { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
            Self::ZeroMaxStack { .. } => "CATALOG_ZERO_MAX_STACK",
            Self::UnknownHandle { .. } => "CATALOG_UNKNOWN_HANDLE",
        }
    }
}
