//! Container sizing configuration.

use crate::error::{ErrorSeverity, InventoryError};
use crate::ContainerKind;

/// Slot counts for every container the player interacts with.
///
/// Slot counts are fixed for the lifetime of a container, so these values are
/// read once when the containers are built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// General-purpose backpack (3x9 grid).
    pub player_inventory_slots: usize,
    /// Hotbar shown at the bottom of the screen.
    pub toolbar_slots: usize,
    pub fridge_slots: usize,
    pub pantry_slots: usize,
}

impl InventoryConfig {
    pub const DEFAULT_PLAYER_INVENTORY_SLOTS: usize = 27;
    pub const DEFAULT_TOOLBAR_SLOTS: usize = 6;
    pub const DEFAULT_FRIDGE_SLOTS: usize = 6;
    pub const DEFAULT_PANTRY_SLOTS: usize = 12;

    pub fn new() -> Self {
        Self {
            player_inventory_slots: Self::DEFAULT_PLAYER_INVENTORY_SLOTS,
            toolbar_slots: Self::DEFAULT_TOOLBAR_SLOTS,
            fridge_slots: Self::DEFAULT_FRIDGE_SLOTS,
            pantry_slots: Self::DEFAULT_PANTRY_SLOTS,
        }
    }

    /// Returns the configured slot count for a container kind.
    ///
    /// Generic containers have no configured size.
    pub fn slots_for(&self, kind: ContainerKind) -> Option<usize> {
        match kind {
            ContainerKind::PlayerInventory => Some(self.player_inventory_slots),
            ContainerKind::Toolbar => Some(self.toolbar_slots),
            ContainerKind::Fridge => Some(self.fridge_slots),
            ContainerKind::Pantry => Some(self.pantry_slots),
            ContainerKind::Generic => None,
        }
    }

    /// Rejects configurations that would build an unusable container.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in [
            ContainerKind::PlayerInventory,
            ContainerKind::Toolbar,
            ContainerKind::Fridge,
            ContainerKind::Pantry,
        ] {
            if self.slots_for(kind) == Some(0) {
                return Err(ConfigError::ZeroSlots { kind });
            }
        }
        Ok(())
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised while validating [`InventoryConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A container was configured without any slots.
    #[error("{kind} must have at least one slot")]
    ZeroSlots { kind: ContainerKind },
}

impl InventoryError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZeroSlots { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroSlots { .. } => "CONFIG_ZERO_SLOTS",
        }
    }
}
