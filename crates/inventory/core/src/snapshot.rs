//! Plain-data views of a container, for diagnostics dumps.

use crate::container::{Container, ContainerKind};
use crate::item::ItemHandle;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSnapshot {
    pub index: usize,
    pub item: Option<String>,
    pub handle: Option<ItemHandle>,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerSnapshot {
    pub name: String,
    pub kind: ContainerKind,
    pub slots: Vec<SlotSnapshot>,
}

impl ContainerSnapshot {
    pub(crate) fn capture(container: &Container) -> Self {
        let slots = container
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotSnapshot {
                index,
                item: slot.item().map(|kind| kind.name.clone()),
                handle: slot.item().map(|kind| kind.handle()),
                quantity: slot.quantity(),
            })
            .collect();

        Self {
            name: container.name().to_owned(),
            kind: container.kind(),
            slots,
        }
    }

    pub fn occupied(&self) -> impl Iterator<Item = &SlotSnapshot> {
        self.slots.iter().filter(|slot| slot.item.is_some())
    }

    pub fn total_quantity(&self) -> u32 {
        self.slots.iter().map(|slot| slot.quantity).sum()
    }
}
