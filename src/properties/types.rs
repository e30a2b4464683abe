//! Property records
//!
//! Row-shaped records mirroring the property and stat cost tables, plus the
//! rendered descriptions attached to an item.

use serde::{Deserialize, Serialize};

/// Well-known stat-backed property codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCode {
    AllStats,
    Strength,
    Dexterity,
    Vitality,
    Energy,
    Life,
    LifePercent,
    Mana,
    ManaPercent,
    Defense,
    DefenseVsMissile,
    DefensePercent,
    DamageResist,
    DamageReduction,
    MagicDamageReduction,
}

impl PropertyCode {
    /// Code as it appears in the properties table
    pub fn code(&self) -> &'static str {
        match self {
            PropertyCode::AllStats => "all-stats",
            PropertyCode::Strength => "str",
            PropertyCode::Dexterity => "dex",
            PropertyCode::Vitality => "vit",
            PropertyCode::Energy => "enr",
            PropertyCode::Life => "hp",
            PropertyCode::LifePercent => "hp%",
            PropertyCode::Mana => "mana",
            PropertyCode::ManaPercent => "mana%",
            PropertyCode::Defense => "ac",
            PropertyCode::DefenseVsMissile => "ac-miss",
            PropertyCode::DefensePercent => "ac%",
            PropertyCode::DamageResist => "red-dmg%",
            PropertyCode::DamageReduction => "red-dmg",
            PropertyCode::MagicDamageReduction => "red-mag",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.code() == code)
    }

    pub fn all() -> &'static [PropertyCode] {
        &[
            PropertyCode::AllStats,
            PropertyCode::Strength,
            PropertyCode::Dexterity,
            PropertyCode::Vitality,
            PropertyCode::Energy,
            PropertyCode::Life,
            PropertyCode::LifePercent,
            PropertyCode::Mana,
            PropertyCode::ManaPercent,
            PropertyCode::Defense,
            PropertyCode::DefenseVsMissile,
            PropertyCode::DefensePercent,
            PropertyCode::DamageResist,
            PropertyCode::DamageReduction,
            PropertyCode::MagicDamageReduction,
        ]
    }
}

/// Properties that have no backing stat and render from a fixed template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialProperty {
    Ethereal,
    Indestructible,
    EnhancedDamage,
    PlusMinimumDamage,
    PlusMaximumDamage,
    GettingHitFearsEnemy,
}

impl SpecialProperty {
    pub fn code(&self) -> &'static str {
        match self {
            SpecialProperty::Ethereal => "ethereal",
            SpecialProperty::Indestructible => "indestruct",
            SpecialProperty::EnhancedDamage => "dmg%",
            SpecialProperty::PlusMinimumDamage => "dmg-min",
            SpecialProperty::PlusMaximumDamage => "dmg-max",
            SpecialProperty::GettingHitFearsEnemy => "fear",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ethereal" => Some(SpecialProperty::Ethereal),
            "indestruct" => Some(SpecialProperty::Indestructible),
            "dmg%" => Some(SpecialProperty::EnhancedDamage),
            "dmg-min" => Some(SpecialProperty::PlusMinimumDamage),
            "dmg-max" => Some(SpecialProperty::PlusMaximumDamage),
            "fear" => Some(SpecialProperty::GettingHitFearsEnemy),
            _ => None,
        }
    }
}

/// One numeric attribute definition (a row of the stat cost table)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stat {
    pub code: String,
    /// Template selector, 1..=28 for the legacy templates
    pub description_function: i32,
    /// Word order selector, 0..=2
    pub description_value: i32,
    pub description1: String,
    pub description2: String,
    /// Ordering weight in [0, 255], higher is shown first
    pub description_priority: u8,
    /// Secondary behavior selector; 17 means per-level scaling
    pub function: i32,
    pub set: String,
    pub value: String,
}

/// A named effect bundle drawing on zero or more stats
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Property {
    pub code: String,
    pub is_active: bool,
    pub description: String,
    pub description_parameter: String,
    pub description_min: String,
    pub description_max: String,
    pub notes: String,
    pub stats: Vec<Stat>,
}

impl Property {
    /// Property with no backing stats
    pub fn special(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_active: true,
            ..Self::default()
        }
    }

    /// Property backed by the given stats, in order
    pub fn with_stats(code: impl Into<String>, stats: Vec<Stat>) -> Self {
        Self {
            code: code.into(),
            is_active: true,
            stats,
            ..Self::default()
        }
    }
}

/// A rendered description line. `None` text means suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPropertyDescription {
    pub priority: u8,
    pub text: Option<String>,
}

/// An effect instantiated on a concrete item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperty {
    /// `Property::code` this was built from
    pub code: String,
    pub function: i32,
    pub min: i32,
    pub max: i32,
    pub parameter: String,
    pub stat_codes: Vec<String>,
    pub descriptions: Vec<ItemPropertyDescription>,
}
