//! Plain-text rendering of panels and the item list.

use std::fmt::Write;

use inventory_core::{ItemCatalog, ItemCategory, ItemContainer, ToolWear};

/// One line per slot; the selected slot (toolbar only) is marked with `>`.
pub fn container(container: &dyn ItemContainer, wear: &ToolWear, selected: Option<usize>) -> String {
    let mut out = format!("== {} ({} slots) ==\n", container.name(), container.slot_count());

    for (index, slot) in container.slots().iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        let _ = write!(out, "{marker}[{index:>2}] ");

        match slot.item() {
            None => out.push('-'),
            Some(kind) => {
                let _ = write!(out, "{}", kind.name);
                if slot.quantity() > 1 || kind.stackable {
                    let _ = write!(out, " x{}", slot.quantity());
                }
                if let Some(left) = wear.remaining(kind) {
                    let percent = (wear.durability_fraction(kind) * 100.0).round();
                    let _ = write!(out, " ({left} uses, {percent}%)");
                }
            }
        }
        out.push('\n');
    }
    out
}

pub fn catalog(catalog: &ItemCatalog) -> String {
    let mut out = String::new();
    for kind in catalog.iter() {
        let detail = match &kind.category {
            ItemCategory::General => "item".to_owned(),
            ItemCategory::Ingredient(data) if data.requires_refrigeration => {
                "ingredient, keep cold".to_owned()
            }
            ItemCategory::Ingredient(_) => "ingredient, shelf-stable".to_owned(),
            ItemCategory::Tool(tool) => match tool.max_durability {
                Some(uses) => format!("{} tool, {} uses", tool.function, uses),
                None => format!("{} tool", tool.function),
            },
        };
        let _ = writeln!(
            out,
            "{:<14} stack {:>2}  {}",
            kind.name,
            kind.stack_limit(),
            detail
        );
    }
    out
}
