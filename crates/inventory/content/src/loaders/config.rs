//! Container sizing loader.

use std::path::Path;

use inventory_core::InventoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for inventory configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Missing keys fall back to the defaults in [`InventoryConfig`].
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<InventoryConfig> {
        let config: InventoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("fridge_slots = 9\n").unwrap();
        assert_eq!(config.fridge_slots, 9);
        assert_eq!(config.pantry_slots, InventoryConfig::DEFAULT_PANTRY_SLOTS);
        assert_eq!(config.toolbar_slots, InventoryConfig::DEFAULT_TOOLBAR_SLOTS);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), InventoryConfig::default());
    }

    #[test]
    fn zero_slots_fail_validation() {
        let err = ConfigLoader::parse("toolbar_slots = 0\n").unwrap_err();
        assert_eq!(err.to_string(), "toolbar must have at least one slot");
    }

    #[test]
    fn wrong_types_fail_to_parse() {
        let err = ConfigLoader::parse("pantry_slots = \"many\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }
}
