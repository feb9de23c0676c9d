//! Tool durability.
//!
//! Wear belongs to the tool kind, not to an individual slot: two knives of
//! the same kind share one counter. A tool that breaks has its counter reset,
//! so a replacement picked up later starts fresh.

use std::collections::HashMap;

use crate::item::ItemKind;

/// Outcome of using whatever is in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolUse {
    /// Nothing selected.
    Idle,
    NotATool,
    /// `remaining` is `None` for tools that never wear out.
    Used { remaining: Option<u32> },
    Broke,
}

#[derive(Clone, Debug, Default)]
pub struct ToolWear {
    remaining: HashMap<ItemKind, u32>,
}

impl ToolWear {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_tool(&mut self, kind: &ItemKind) -> ToolUse {
        let Some(tool) = kind.tool() else {
            return ToolUse::NotATool;
        };
        let Some(max) = tool.max_durability else {
            return ToolUse::Used { remaining: None };
        };

        let left = self.remaining.entry(kind.clone()).or_insert(max);
        *left = left.saturating_sub(1);
        if *left == 0 {
            self.remaining.remove(kind);
            tracing::info!("{} broke", kind.name);
            return ToolUse::Broke;
        }
        ToolUse::Used {
            remaining: Some(*left),
        }
    }

    /// Remaining durability; `None` for non-tools and unbreakable tools.
    pub fn remaining(&self, kind: &ItemKind) -> Option<u32> {
        let max = kind.tool()?.max_durability?;
        Some(self.remaining.get(kind).copied().unwrap_or(max))
    }

    pub fn durability_fraction(&self, kind: &ItemKind) -> f32 {
        match (self.remaining(kind), kind.tool().and_then(|tool| tool.max_durability)) {
            (Some(left), Some(max)) if max > 0 => left as f32 / max as f32,
            _ => 1.0,
        }
    }

    pub fn is_broken(&self, kind: &ItemKind) -> bool {
        self.remaining(kind) == Some(0)
    }
}
