//! Item kinds and their category-specific data.
//!
//! # Design: Base + Category Pattern
//!
//! - [`ItemDefinition`] holds the fields every item shares (name, stacking)
//! - [`ItemCategory`] holds the capability bundle for ingredients and tools
//! - [`ItemKind`] is the shared, immutable handle slots store
//!
//! Two slots hold "the same item" only when their kinds are the same shared
//! instance. [`ItemHandle`]s index a single [`ItemCatalog`](crate::ItemCatalog)
//! and are not an identity across catalogs; equality never compares names,
//! attributes or handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Catalog-issued identity of an item kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Authoring-time description of an item, before the catalog assigns a handle.
///
/// Stacking fields are optional so data files can rely on category defaults:
/// tools are single items, everything else stacks up to
/// [`ItemSpec::DEFAULT_MAX_STACK`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: Option<bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_stack_size: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ItemCategory,
}

impl ItemSpec {
    pub const DEFAULT_MAX_STACK: u32 = 12;

    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            stackable: None,
            max_stack_size: None,
            category,
        }
    }

    /// Overrides the category default stacking.
    pub fn with_stacking(mut self, stackable: bool, max_stack_size: u32) -> Self {
        self.stackable = Some(stackable);
        self.max_stack_size = Some(max_stack_size);
        self
    }

    pub(crate) fn resolved_stacking(&self) -> (bool, u32) {
        let tool = matches!(self.category, ItemCategory::Tool(_));
        let stackable = self.stackable.unwrap_or(!tool);
        let default_max = if stackable { Self::DEFAULT_MAX_STACK } else { 1 };
        (stackable, self.max_stack_size.unwrap_or(default_max))
    }
}

/// Immutable description of an item kind.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub stackable: bool,
    /// Only meaningful when `stackable`; see [`ItemDefinition::stack_limit`].
    pub max_stack_size: u32,
    pub category: ItemCategory,
}

impl ItemDefinition {
    /// Largest quantity a single slot may hold.
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack_size
        } else {
            1
        }
    }

    pub fn ingredient(&self) -> Option<&IngredientData> {
        match &self.category {
            ItemCategory::Ingredient(data) => Some(data),
            _ => None,
        }
    }

    pub fn tool(&self) -> Option<&ToolData> {
        match &self.category {
            ItemCategory::Tool(data) => Some(data),
            _ => None,
        }
    }

    /// `None` for items without the ingredient capability.
    pub fn requires_refrigeration(&self) -> Option<bool> {
        self.ingredient().map(|data| data.requires_refrigeration)
    }
}

/// Category discriminant with its capability bundle.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    /// Anything without category-specific behavior.
    #[default]
    General,

    /// Cooking ingredient.
    Ingredient(IngredientData),

    /// Kitchen tool.
    Tool(ToolData),
}

/// Ingredient-specific data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IngredientData {
    pub requires_refrigeration: bool,
    pub nutritional_value: f32,
    pub can_be_cooked: bool,
    /// Seconds on the stove.
    pub cooking_time: f32,
}

impl IngredientData {
    pub fn refrigerated() -> Self {
        Self {
            requires_refrigeration: true,
            ..Self::default()
        }
    }

    pub fn shelf_stable() -> Self {
        Self::default()
    }
}

impl Default for IngredientData {
    fn default() -> Self {
        Self {
            requires_refrigeration: false,
            nutritional_value: 1.0,
            can_be_cooked: true,
            cooking_time: 1.0,
        }
    }
}

/// Tool-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolData {
    pub function: ToolFunction,
    /// `None` for tools that never wear out.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_durability: Option<u32>,
}

impl ToolData {
    pub fn new(function: ToolFunction, max_durability: Option<u32>) -> Self {
        Self {
            function,
            max_durability,
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToolFunction {
    #[default]
    Mixing,
    Cutting,
    Baking,
    Whipping,
    Measuring,
}

/// Shared reference to an item kind, compared by instance.
///
/// Cloning is a reference-count bump; slots and events carry these freely.
#[derive(Clone)]
pub struct ItemKind(Arc<ItemDefinition>);

impl ItemKind {
    pub(crate) fn new(definition: ItemDefinition) -> Self {
        Self(Arc::new(definition))
    }

    pub fn handle(&self) -> ItemHandle {
        self.0.handle
    }

    pub fn definition(&self) -> &ItemDefinition {
        &self.0
    }
}

impl Deref for ItemKind {
    type Target = ItemDefinition;

    fn deref(&self) -> &ItemDefinition {
        &self.0
    }
}

impl PartialEq for ItemKind {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ItemKind {}

impl Hash for ItemKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKind({} {})", self.0.name, self.0.handle)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}
