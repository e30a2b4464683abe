//! Equipment system
//!
//! Tracks which item occupies which slot. Slot compatibility is not
//! checked here; callers decide what may go where.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::item::{EquipSlot, Item};

/// State transitions dispatched by the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentAction {
    /// Empty every slot
    Reset,
    /// Overwrite one slot; `None` empties it
    ChangeItem { slot: EquipSlot, item: Option<Item> },
}

/// Equipped items by slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Items in each slot
    slots: HashMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        log::info!("Equipment reset ({} slots cleared)", self.slots.len());
        self.slots.clear();
    }

    /// Replace the contents of one slot
    pub fn change_item(&mut self, slot: EquipSlot, item: Option<Item>) {
        match item {
            Some(item) => {
                log::trace!("{} <- {} (#{})", slot.name(), item.name, item.id);
                self.slots.insert(slot, item);
            }
            None => {
                log::trace!("{} emptied", slot.name());
                self.slots.remove(&slot);
            }
        }
    }

    pub fn apply(&mut self, action: EquipmentAction) {
        match action {
            EquipmentAction::Reset => self.reset(),
            EquipmentAction::ChangeItem { slot, item } => self.change_item(slot, item),
        }
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Occupied slots in display order
    pub fn occupied(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        EquipSlot::all()
            .iter()
            .filter_map(|slot| self.slots.get(slot).map(|item| (*slot, item)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.len()
    }
}

/// Equipment shared between threads.
///
/// Writes are serialized by the lock; readers take a consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct SharedEquipment {
    inner: Arc<RwLock<Equipment>>,
}

impl SharedEquipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, action: EquipmentAction) {
        self.inner.write().apply(action);
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn change_item(&self, slot: EquipSlot, item: Option<Item>) {
        self.inner.write().change_item(slot, item);
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Equipment {
        self.inner.read().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&Equipment) -> R) -> R {
        f(&self.inner.read())
    }
}
