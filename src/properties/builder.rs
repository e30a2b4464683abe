//! Property description building
//!
//! Chooses between stat-backed and special-backed formatting and attaches
//! the resolved priority.

use super::priority::resolve_priority;
use super::special::format_special_description;
use super::stat_text::StatLine;
use super::types::{ItemProperty, ItemPropertyDescription, Property, Stat};

/// Build one description for a property, optionally through one of its stats
pub fn build_description(
    property: &Property,
    stat: Option<&Stat>,
    min: i32,
    max: i32,
    parameter: &str,
) -> ItemPropertyDescription {
    match stat {
        Some(stat) => ItemPropertyDescription {
            priority: resolve_priority(&stat.code, Some(stat.description_priority)),
            text: StatLine::from_stat(stat, min, max, parameter).format(),
        },
        None => ItemPropertyDescription {
            priority: resolve_priority(&property.code, None),
            text: format_special_description(&property.code, min, max),
        },
    }
}

impl ItemProperty {
    /// Instantiate a property on an item, rendering one description per stat
    /// (or a single special description when the property has no stats).
    pub fn new(
        property: &Property,
        function: i32,
        min: i32,
        max: i32,
        parameter: impl Into<String>,
    ) -> Self {
        let parameter = parameter.into();

        let descriptions = if property.stats.is_empty() {
            vec![build_description(property, None, min, max, &parameter)]
        } else {
            property
                .stats
                .iter()
                .map(|stat| build_description(property, Some(stat), min, max, &parameter))
                .collect()
        };

        Self {
            code: property.code.clone(),
            function,
            min,
            max,
            stat_codes: property.stats.iter().map(|s| s.code.clone()).collect(),
            parameter,
            descriptions,
        }
    }

    /// Descriptions that should be shown, in stored order
    pub fn visible_descriptions(&self) -> impl Iterator<Item = (u8, &str)> {
        self.descriptions
            .iter()
            .filter_map(|d| d.text.as_deref().map(|text| (d.priority, text)))
    }
}
