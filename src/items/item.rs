//! Item definitions
//!
//! Concrete items, the slots they can occupy, and building an item's
//! properties from a unique item row.

use serde::{Deserialize, Serialize};

use crate::properties::{ItemProperty, Property, PropertyCatalog};
use super::unique::{RowError, UniqueItemData};

/// Unique item ID for tracking
pub type ItemId = u64;

/// Equipment slot identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Helm,
    Amulet,
    Armor,
    RightHand,
    LeftHand,
    RightRing,
    LeftRing,
    Belt,
    Boots,
    Gloves,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Helm => "Helm",
            EquipSlot::Amulet => "Amulet",
            EquipSlot::Armor => "Armor",
            EquipSlot::RightHand => "Right Hand",
            EquipSlot::LeftHand => "Left Hand",
            EquipSlot::RightRing => "Right Ring",
            EquipSlot::LeftRing => "Left Ring",
            EquipSlot::Belt => "Belt",
            EquipSlot::Boots => "Boots",
            EquipSlot::Gloves => "Gloves",
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Helm,
            EquipSlot::Amulet,
            EquipSlot::Armor,
            EquipSlot::RightHand,
            EquipSlot::LeftHand,
            EquipSlot::RightRing,
            EquipSlot::LeftRing,
            EquipSlot::Belt,
            EquipSlot::Boots,
            EquipSlot::Gloves,
        ]
    }
}

/// An item with its instantiated properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Base item code, e.g. `hax`
    pub code: String,
    pub level_requirement: u32,
    pub properties: Vec<ItemProperty>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            level_requirement: 0,
            properties: Vec::new(),
        }
    }

    /// Builder: attach an instantiated property
    pub fn with_property(mut self, property: ItemProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Build a unique item from its table row.
    ///
    /// Property codes missing from the catalog are treated as stat-less
    /// properties so they still render (as `Unknown (<code>)` if no
    /// template exists).
    pub fn from_unique(
        id: ItemId,
        row: &UniqueItemData,
        catalog: &PropertyCatalog,
    ) -> Result<Self, RowError> {
        let mut item = Item::new(id, row.index.clone(), row.code.clone());
        item.level_requirement = row.level_requirement();

        for slot in row.property_slots()? {
            let item_property = match catalog.get(slot.code) {
                Some(property) => {
                    let function = property.stats.first().map(|s| s.function).unwrap_or(0);
                    ItemProperty::new(property, function, slot.min, slot.max, slot.parameter)
                }
                None => {
                    log::debug!("Property {:?} not in catalog (column {})", slot.code, slot.column);
                    let property = Property::special(slot.code);
                    ItemProperty::new(&property, 0, slot.min, slot.max, slot.parameter)
                }
            };
            item.properties.push(item_property);
        }

        Ok(item)
    }

    /// Number of description lines that will be shown
    pub fn visible_description_count(&self) -> usize {
        self.properties
            .iter()
            .map(|p| p.visible_descriptions().count())
            .sum()
    }
}
