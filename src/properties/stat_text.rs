//! Stat description templates
//!
//! Replicates the legacy client's text generation for stat-backed
//! properties. A stat picks one of the numbered templates
//! (`description_function`) and a word order (`description_value`). The
//! three word orders share most templates; where they diverge the
//! divergence is part of the content contract, including the templates
//! the legacy client gets wrong (22) or never implemented (19, 25, 26).

use serde::{Deserialize, Serialize};

use super::number::{display_number, parse_parameter, parse_parameter_strict};
use super::special::format_special_description;
use super::types::Stat;

/// Stat function that switches templates 6 and 8 to per-level scaling
pub const PER_LEVEL_FUNCTION: i32 = 17;

/// Where the value sits relative to the description text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordOrder {
    /// `description_value` 0
    ValueFirst,
    /// `description_value` 1
    ValuePrefixed,
    /// `description_value` 2
    ValueSuffixed,
}

impl WordOrder {
    /// Map the table's `description_value` column; anything else shows nothing
    pub fn from_description_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(WordOrder::ValueFirst),
            1 => Some(WordOrder::ValuePrefixed),
            2 => Some(WordOrder::ValueSuffixed),
            _ => None,
        }
    }
}

/// Everything a stat template may draw on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine<'a> {
    /// Used only when the template id is unmapped
    pub stat_code: &'a str,
    pub description_function: i32,
    pub description_value: i32,
    pub description1: &'a str,
    pub description2: &'a str,
    pub stat_function: i32,
    pub min: i32,
    pub max: i32,
    pub parameter: &'a str,
}

impl<'a> StatLine<'a> {
    pub fn from_stat(stat: &'a Stat, min: i32, max: i32, parameter: &'a str) -> Self {
        Self {
            stat_code: &stat.code,
            description_function: stat.description_function,
            description_value: stat.description_value,
            description1: &stat.description1,
            description2: &stat.description2,
            stat_function: stat.function,
            min,
            max,
            parameter,
        }
    }

    pub fn format(&self) -> Option<String> {
        format_stat_description(self)
    }
}

/// Value stored on the legacy 128 scale, shown as a percentage
fn scaled_percent(min: i32) -> String {
    display_number(f64::from(min) * 100.0 / 128.0)
}

/// `(<rate>/clvl) +<low>-<high>` for per-level stats
fn per_level_range(parameter: &str, percent: bool) -> String {
    let rate = parse_parameter(parameter) / 8.0;
    format!(
        "({}/clvl) +{}-{}{}",
        display_number(rate),
        display_number(rate.floor()),
        display_number((rate * 100.0).floor()),
        if percent { "%" } else { "" },
    )
}

/// Fill an event template such as `%d%% CTC Lvl %d %s on Striking`.
///
/// Only the first occurrence of each token is replaced, in this order.
pub fn format_event_description(template: &str, min: i32, max: i32, parameter: &str) -> String {
    template
        .replacen("%d%", &min.to_string(), 1)
        .replacen("%d", &max.to_string(), 1)
        .replacen("%s", parameter, 1)
}

/// Render a stat-backed description.
///
/// Returns `None` when the word order is outside 0..=2. Template ids
/// outside 1..=28 fall back to the special-property templates keyed on
/// the stat code.
pub fn format_stat_description(line: &StatLine<'_>) -> Option<String> {
    use WordOrder::*;

    let order = WordOrder::from_description_value(line.description_value)?;
    let StatLine {
        description1: d1,
        description2: d2,
        min,
        max,
        parameter,
        ..
    } = *line;
    let func = line.description_function;
    let per_level = line.stat_function == PER_LEVEL_FUNCTION;

    let text = match (func, order) {
        (1 | 12, ValueSuffixed) => format!("{} +{}", d1, min),
        (1 | 12, _) => format!("+{} {}", min, d1),

        (2, ValueSuffixed) => format!("{} {}%", d1, min),
        (2, _) => format!("{}% {}", min, d1),

        (3, ValueFirst) => d1.to_string(),
        (3, ValuePrefixed) => format!("{} {}", min, d1),
        (3, ValueSuffixed) => format!("{} {}", d1, min),

        (4, ValueSuffixed) => format!("{} +{}%", d1, min),
        (4, _) => format!("+{}% {}", min, d1),

        (5, ValueSuffixed) => format!("{} {}%", d1, scaled_percent(min)),
        (5, _) => format!("{}% {}", scaled_percent(min), d1),

        (6 | 8, ValueSuffixed) if per_level => {
            format!("{} {}", d1, per_level_range(parameter, func == 8))
        }
        (6 | 8, _) if per_level => format!("{} {}", per_level_range(parameter, func == 8), d1),

        (6, ValueSuffixed) => format!("{} +{} {}", d1, min, d2),
        (6, _) => format!("+{} {} {}", min, d1, d2),

        (7, ValuePrefixed) => {
            let rate = parse_parameter_strict(parameter) / 8.0;
            format!(
                "({}/clvl) +0-{}% {} {}",
                display_number(rate),
                display_number((rate * 100.0).floor()),
                d1,
                d2
            )
        }
        (7, ValueSuffixed) => format!("{} {}% {}", d1, min, d2),
        (7, ValueFirst) => format!("{}% {} {}", min, d1, d2),

        (8, ValueSuffixed) => format!("{} +{}% {}", d1, min, d2),
        (8, _) => format!("+{}% {} {}", min, d1, d2),

        // Suffixed 9 ignores min and renders the per-level spread unfloored
        (9, ValueSuffixed) => {
            let rate = parse_parameter_strict(parameter) / 8.0;
            format!(
                "({}/clvl) {} {}-{}",
                display_number(rate),
                d1,
                display_number(rate),
                display_number(rate * 100.0)
            )
        }
        (9, _) => format!("{} {} {}", min, d1, d2),

        (10, ValueSuffixed) => format!("{} {}% {}", d1, scaled_percent(min), d2),
        (10, _) => format!("{}% {} {}", scaled_percent(min), d1, d2),

        // min of 0 prints Infinity
        (11, _) => format!(
            "Repairs 1 Durability In {} Seconds",
            display_number(100.0 / f64::from(min))
        ),

        (13, ValueSuffixed) => format!("+{} to {} Skill Levels", min, max),
        (13, _) => format!("+{} to {}", min, d1),

        (14, ValueSuffixed) => format!("+{} to {} Skill Levels ({} Only)", min, max, parameter),
        (14, _) => format!("+{} to {} Skill Levels ({} Only)", min, d1, d2),

        (15, _) => format_event_description(d1, min, max, parameter),

        (16, _) => format!("Level {}-{} {} Aura When Equipped", min, max, parameter),

        (17, _) => format!("{} {} (Increases near {})", min, d1, max),
        (18, _) => format!("{}% {} (Increases near {})", min, d1, max),

        // Passed through the client's own sprintf; not rendered here
        (19 | 25 | 26, _) => format!("descfunc{}", func),

        (20, ValueSuffixed) => format!("{} {}%", d1, -i64::from(min)),
        (20, _) => format!("{}% {}", -i64::from(min), d1),

        (21, ValueSuffixed) => format!("{} {}", d1, -i64::from(min)),
        (21, _) => format!("{} {}", -i64::from(min), d1),

        // 22 is broken in the legacy client and kept identical to 23
        (22 | 23, ValueSuffixed) => format!("{} {}% {}", d1, min, max),
        (22 | 23, _) => format!("{}% {} {}", min, d1, max),

        // Charges
        (24, _) => format!("Level {} {} ({} Charges)", max, parameter, min),

        (27, ValueSuffixed) => format!("+{} to {} ({} Only)", min, max, parameter),
        (27, _) => format!("+{}-{} to {} ({} Only)", min, max, parameter, d1),

        (28, ValueSuffixed) => format!("+{} to {}", min, max),
        (28, _) if min == max => format!("+{} to {}", max, parameter),
        (28, _) => format!("+{}-{} to {}", min, max, parameter),

        _ => return format_special_description(line.stat_code, min, max),
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(
        func: i32,
        value: i32,
        d1: &'a str,
        d2: &'a str,
        min: i32,
        max: i32,
        parameter: &'a str,
    ) -> StatLine<'a> {
        StatLine {
            stat_code: "teststat",
            description_function: func,
            description_value: value,
            description1: d1,
            description2: d2,
            stat_function: 0,
            min,
            max,
            parameter,
        }
    }

    fn render(
        func: i32,
        value: i32,
        d1: &str,
        d2: &str,
        min: i32,
        max: i32,
        parameter: &str,
    ) -> Option<String> {
        format_stat_description(&line(func, value, d1, d2, min, max, parameter))
    }

    #[test]
    fn test_word_order_for_flat_bonus() {
        assert_eq!(render(1, 0, "to Life", "", 10, 10, "").as_deref(), Some("+10 to Life"));
        assert_eq!(render(1, 1, "to Life", "", 10, 10, "").as_deref(), Some("+10 to Life"));
        assert_eq!(render(1, 2, "to Life", "", 10, 10, "").as_deref(), Some("to Life +10"));
        assert_eq!(render(12, 2, "to Life", "", 10, 10, "").as_deref(), Some("to Life +10"));
    }

    #[test]
    fn test_invalid_word_order_suppresses_everything() {
        for func in 0..=30 {
            assert_eq!(render(func, 3, "x", "y", 1, 2, "3"), None);
            assert_eq!(render(func, -1, "x", "y", 1, 2, "3"), None);
        }
    }

    #[test]
    fn test_percent_templates() {
        let expected_plain = ["7% d1", "7% d1", "d1 7%"];
        let expected_signed = ["+7% d1", "+7% d1", "d1 +7%"];
        for value in 0..=2 {
            let i = value as usize;
            assert_eq!(render(2, value, "d1", "d2", 7, 9, "").as_deref(), Some(expected_plain[i]));
            assert_eq!(render(4, value, "d1", "d2", 7, 9, "").as_deref(), Some(expected_signed[i]));
        }
    }

    #[test]
    fn test_template_three_diverges_by_order() {
        assert_eq!(
            render(3, 0, "Cannot Be Frozen", "", 1, 1, "").as_deref(),
            Some("Cannot Be Frozen")
        );
        assert_eq!(render(3, 1, "Light Radius", "", 2, 2, "").as_deref(), Some("2 Light Radius"));
        assert_eq!(render(3, 2, "Light Radius", "", 2, 2, "").as_deref(), Some("Light Radius 2"));
    }

    #[test]
    fn test_scaled_percent() {
        assert_eq!(
            render(5, 0, "Hit Causes Monster to Flee", "", 64, 64, "").as_deref(),
            Some("50% Hit Causes Monster to Flee")
        );
        assert_eq!(render(5, 2, "Flee", "", 10, 10, "").as_deref(), Some("Flee 7.8125%"));
        assert_eq!(render(10, 1, "a", "b", 32, 32, "").as_deref(), Some("25% a b"));
        assert_eq!(render(10, 2, "d1", "d2", 64, 64, "").as_deref(), Some("d1 50% d2"));
    }

    #[test]
    fn test_per_level_scaling() {
        let mut l = line(6, 1, "to Life", "(Based on Character Level)", 0, 0, "80");
        l.stat_function = PER_LEVEL_FUNCTION;
        let text = format_stat_description(&l).unwrap();
        assert!(text.contains("(10/clvl) +10-1000"), "{}", text);
        assert_eq!(text, "(10/clvl) +10-1000 to Life");

        l.description_function = 8;
        assert_eq!(
            format_stat_description(&l).as_deref(),
            Some("(10/clvl) +10-1000% to Life")
        );

        l.description_value = 2;
        assert_eq!(
            format_stat_description(&l).as_deref(),
            Some("to Life (10/clvl) +10-1000%")
        );

        l.parameter = "3";
        l.description_function = 6;
        assert_eq!(
            format_stat_description(&l).as_deref(),
            Some("to Life (0.375/clvl) +0-37")
        );
    }

    #[test]
    fn test_per_level_needs_function_17() {
        assert_eq!(
            render(6, 0, "to Life", "(Based on Character Level)", 5, 5, "80").as_deref(),
            Some("+5 to Life (Based on Character Level)")
        );
        assert_eq!(render(6, 2, "d1", "d2", 7, 7, "").as_deref(), Some("d1 +7 d2"));
        assert_eq!(
            render(8, 2, "Defense", "per level", 5, 5, "80").as_deref(),
            Some("Defense +5% per level")
        );
    }

    #[test]
    fn test_template_seven() {
        assert_eq!(render(7, 0, "a", "b", 4, 4, "16").as_deref(), Some("4% a b"));
        assert_eq!(render(7, 1, "a", "b", 4, 4, "16").as_deref(), Some("(2/clvl) +0-200% a b"));
        assert_eq!(render(7, 2, "a", "b", 4, 4, "16").as_deref(), Some("a 4% b"));
    }

    #[test]
    fn test_template_nine_suffixed_uses_parameter() {
        assert_eq!(
            render(9, 0, "Attacker Takes Damage of", "", 3, 3, "24").as_deref(),
            Some("3 Attacker Takes Damage of ")
        );
        assert_eq!(
            render(9, 2, "Attacker Takes Damage of", "", 3, 3, "24").as_deref(),
            Some("(3/clvl) Attacker Takes Damage of 3-300")
        );
    }

    #[test]
    fn test_unreadable_parameter_shows_nan() {
        assert_eq!(
            render(7, 1, "d1", "d2", 4, 4, "lots").as_deref(),
            Some("(NaN/clvl) +0-NaN% d1 d2")
        );
        assert_eq!(
            render(9, 2, "d1", "", 3, 3, "lots").as_deref(),
            Some("(NaN/clvl) d1 NaN-NaN")
        );
        // Blank still reads as 0
        assert_eq!(render(7, 1, "d1", "d2", 4, 4, "").as_deref(), Some("(0/clvl) +0-0% d1 d2"));

        // Per-level 6 and 8 keep the garbage-to-0 reading
        let mut l = line(6, 0, "to Life", "", 0, 0, "lots");
        l.stat_function = PER_LEVEL_FUNCTION;
        assert_eq!(format_stat_description(&l).as_deref(), Some("(0/clvl) +0-0 to Life"));
    }

    #[test]
    fn test_repair_rate() {
        assert_eq!(
            render(11, 0, "", "", 20, 20, "").as_deref(),
            Some("Repairs 1 Durability In 5 Seconds")
        );
        assert_eq!(
            render(11, 1, "", "", 3, 3, "").as_deref(),
            Some("Repairs 1 Durability In 33.333333333333336 Seconds")
        );
        assert_eq!(
            render(11, 2, "", "", 0, 0, "").as_deref(),
            Some("Repairs 1 Durability In Infinity Seconds")
        );
    }

    #[test]
    fn test_skill_templates() {
        assert_eq!(
            render(13, 0, "Sorceress Skill Levels", "", 2, 2, "").as_deref(),
            Some("+2 to Sorceress Skill Levels")
        );
        assert_eq!(render(13, 2, "ignored", "", 1, 3, "").as_deref(), Some("+1 to 3 Skill Levels"));
        assert_eq!(
            render(14, 1, "Fire", "Sorceress", 2, 2, "").as_deref(),
            Some("+2 to Fire Skill Levels (Sorceress Only)")
        );
        assert_eq!(
            render(14, 2, "Fire", "Sorceress", 2, 5, "Druid").as_deref(),
            Some("+2 to 5 Skill Levels (Druid Only)")
        );
    }

    #[test]
    fn test_event_substitution_order() {
        assert_eq!(
            render(15, 0, "%d%% CTC Lvl %d %s on Striking", "", 25, 6, "Holy Bolt").as_deref(),
            Some("25% CTC Lvl 6 Holy Bolt on Striking")
        );
        // Only first occurrences are replaced
        assert_eq!(format_event_description("%d %d %s %s", 1, 2, "x"), "2 %d x %s");
        assert_eq!(format_event_description("no tokens", 1, 2, "x"), "no tokens");
    }

    #[test]
    fn test_aura_and_charges() {
        assert_eq!(
            render(16, 2, "", "", 3, 5, "Might").as_deref(),
            Some("Level 3-5 Might Aura When Equipped")
        );
        assert_eq!(
            render(24, 0, "", "", 12, 7, "Teleport").as_deref(),
            Some("Level 7 Teleport (12 Charges)")
        );
    }

    #[test]
    fn test_time_based() {
        assert_eq!(
            render(17, 0, "to Strength", "", 5, 20, "").as_deref(),
            Some("5 to Strength (Increases near 20)")
        );
        assert_eq!(
            render(18, 1, "Damage", "", 5, 20, "").as_deref(),
            Some("5% Damage (Increases near 20)")
        );
    }

    #[test]
    fn test_placeholder_stubs() {
        for value in 0..=2 {
            assert_eq!(
                render(19, value, "%+d to Maximum", "", 5, 5, "").as_deref(),
                Some("descfunc19")
            );
            assert_eq!(render(25, value, "a", "b", 5, 5, "").as_deref(), Some("descfunc25"));
            assert_eq!(render(26, value, "a", "b", 5, 5, "").as_deref(), Some("descfunc26"));
        }
    }

    #[test]
    fn test_negated_values() {
        assert_eq!(
            render(20, 0, "Target Defense", "", 25, 25, "").as_deref(),
            Some("-25% Target Defense")
        );
        assert_eq!(
            render(20, 2, "Target Defense", "", -25, -25, "").as_deref(),
            Some("Target Defense 25%")
        );
        assert_eq!(render(21, 1, "Requirements", "", 0, 0, "").as_deref(), Some("0 Requirements"));
        assert_eq!(render(21, 2, "d1", "", 7, 7, "").as_deref(), Some("d1 -7"));
    }

    #[test]
    fn test_twenty_two_matches_twenty_three() {
        for value in 0..=2 {
            assert_eq!(
                render(22, value, "vs", "", 5, 9, ""),
                render(23, value, "vs", "", 5, 9, "")
            );
        }
        assert_eq!(render(23, 2, "Damage to", "", 5, 9, "").as_deref(), Some("Damage to 5% 9"));
    }

    #[test]
    fn test_class_skill_ranges() {
        assert_eq!(
            render(27, 0, "Paladin", "", 1, 3, "Zeal").as_deref(),
            Some("+1-3 to Zeal (Paladin Only)")
        );
        assert_eq!(
            render(27, 2, "Paladin", "", 1, 3, "Zeal").as_deref(),
            Some("+1 to 3 (Zeal Only)")
        );
        assert_eq!(render(28, 0, "", "", 2, 2, "Teleport").as_deref(), Some("+2 to Teleport"));
        assert_eq!(render(28, 1, "", "", 1, 2, "Teleport").as_deref(), Some("+1-2 to Teleport"));
        assert_eq!(render(28, 2, "", "", 2, 2, "Teleport").as_deref(), Some("+2 to 2"));
    }

    #[test]
    fn test_unmapped_template_borrows_special_text() {
        let mut l = line(0, 1, "", "", 15, 15, "");
        l.stat_code = "dmg%";
        assert_eq!(format_stat_description(&l).as_deref(), Some("+15% Enhanced Damage"));

        l.description_function = 29;
        l.stat_code = "item_tinkerflag2";
        assert_eq!(format_stat_description(&l), None);

        l.stat_code = "secondary_mindamage";
        assert_eq!(
            format_stat_description(&l).as_deref(),
            Some("Unknown (secondary_mindamage)")
        );
    }

    #[test]
    fn test_from_stat() {
        let stat = Stat {
            code: "maxhp".to_string(),
            description_function: 1,
            description_value: 2,
            description1: "to Life".to_string(),
            ..Stat::default()
        };
        assert_eq!(
            StatLine::from_stat(&stat, 10, 10, "").format().as_deref(),
            Some("to Life +10")
        );
    }
}
