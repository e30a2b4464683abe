//! Item system

pub mod item;
pub mod equipment;
pub mod unique;
pub mod tooltip;

pub use item::{Item, ItemId, EquipSlot};
pub use equipment::{Equipment, EquipmentAction, SharedEquipment};
pub use unique::{UniqueItemData, PropertySlot, RowError, PROPERTY_COLUMNS};
pub use tooltip::tooltip_lines;
