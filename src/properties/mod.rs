//! Property description system

pub mod types;
pub mod number;
pub mod priority;
pub mod special;
pub mod stat_text;
pub mod builder;
pub mod catalog;

pub use types::{
    ItemProperty, ItemPropertyDescription, Property, PropertyCode, SpecialProperty, Stat,
};
pub use number::display_number;
pub use priority::{resolve_priority, special_priority};
pub use special::format_special_description;
pub use stat_text::{
    format_event_description, format_stat_description, StatLine, WordOrder, PER_LEVEL_FUNCTION,
};
pub use builder::build_description;
pub use catalog::PropertyCatalog;
