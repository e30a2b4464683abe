//! Tooltip ordering
//!
//! Flattens an item's rendered descriptions into display lines: highest
//! priority first, suppressed descriptions dropped.

use crate::config::DisplaySettings;
use super::item::Item;

/// Description lines for an item, in display order
pub fn tooltip_lines(item: &Item, settings: &DisplaySettings) -> Vec<String> {
    let mut entries: Vec<(u8, &str)> = item
        .properties
        .iter()
        .flat_map(|p| p.visible_descriptions())
        .collect();

    // Stable, so equal priorities keep table order
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    if let Some(max) = settings.max_lines {
        entries.truncate(max);
    }

    entries
        .into_iter()
        .map(|(priority, text)| {
            if settings.show_priority {
                format!("[{:>3}] {}", priority, text)
            } else {
                text.to_string()
            }
        })
        .collect()
}
