//! Description ordering
//!
//! Min is 0, max is 255. The higher the number, the higher up in the
//! item's description list it is displayed.

use super::types::SpecialProperty;

/// Priority of a property with no backing stat
pub fn special_priority(code: &str) -> u8 {
    match SpecialProperty::from_code(code) {
        Some(SpecialProperty::EnhancedDamage) => 135,
        Some(
            SpecialProperty::PlusMinimumDamage
            | SpecialProperty::PlusMaximumDamage
            | SpecialProperty::Ethereal
            | SpecialProperty::GettingHitFearsEnemy
            | SpecialProperty::Indestructible,
        ) => 255,
        // item_numsockets, item_tinkerflag2 and anything uncatalogued
        None => 0,
    }
}

/// Resolve the display priority of a description.
///
/// A stat-backed description uses the stat's own priority verbatim.
pub fn resolve_priority(code: &str, stat_priority: Option<u8>) -> u8 {
    match stat_priority {
        Some(priority) => priority,
        None => special_priority(code),
    }
}
