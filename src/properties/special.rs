//! Special property text
//!
//! Properties without a backing stat render from fixed templates.

use super::types::SpecialProperty;

/// Legacy socket-count property
pub const SOCKETS_CODE: &str = "item_numsockets";
/// Legacy flag property that never shows a description
pub const TINKER_FLAG_CODE: &str = "item_tinkerflag2";

/// Render the description of a special property.
///
/// Returns `None` for descriptions that must be suppressed. Codes that are
/// not catalogued render as `Unknown (<code>)` so they stay visible.
pub fn format_special_description(code: &str, min: i32, max: i32) -> Option<String> {
    if let Some(special) = SpecialProperty::from_code(code) {
        let text = match special {
            // Only enhanced damage collapses a degenerate range
            SpecialProperty::EnhancedDamage if min == max => format!("+{}% Enhanced Damage", max),
            SpecialProperty::EnhancedDamage => format!("+{}-{}% Enhanced Damage", min, max),
            SpecialProperty::PlusMinimumDamage => format!("+{}-{} to Minimum Damage", min, max),
            SpecialProperty::PlusMaximumDamage => format!("+{}-{} to Maximum Damage", min, max),
            SpecialProperty::Ethereal => "Ethereal (Cannot Be Repaired)".to_string(),
            SpecialProperty::GettingHitFearsEnemy => {
                "Getting Hit Causes Monster to Flee".to_string()
            }
            SpecialProperty::Indestructible => "Indestructible".to_string(),
        };
        return Some(text);
    }

    match code {
        SOCKETS_CODE => Some(format!("Gem Socket ({})", max)),
        TINKER_FLAG_CODE => None,
        _ => {
            log::debug!("No description template for property {:?}", code);
            Some(format!("Unknown ({})", code))
        }
    }
}
