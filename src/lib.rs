//! Itemdesc - item property descriptions for legacy ARPG content
//!
//! Renders the description lines of item properties the way the legacy
//! client does, and tracks which item sits in which equipment slot.

pub mod properties;
pub mod items;
pub mod config;

// Re-export commonly used types
pub use properties::{Property, Stat, ItemProperty, ItemPropertyDescription, PropertyCatalog};
pub use items::{Item, EquipSlot, Equipment, EquipmentAction};
pub use config::DisplaySettings;
