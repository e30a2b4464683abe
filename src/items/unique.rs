//! Unique item table rows
//!
//! Flat row schema of the unique items table. The description system only
//! reads the `prop`/`par`/`min`/`max` quadruples.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of property columns on a unique item row
pub const PROPERTY_COLUMNS: usize = 12;

/// Errors reading typed values out of a row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("column {column} is not a number: {value:?}")]
    InvalidNumber { column: String, value: String },
}

/// One `prop`/`par`/`min`/`max` column group with a property code set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySlot<'a> {
    /// 1-based column group index
    pub column: usize,
    pub code: &'a str,
    pub parameter: &'a str,
    pub min: i32,
    pub max: i32,
}

/// A row of the unique items table, columns kept as text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniqueItemData {
    pub index: String,
    pub version: String,
    pub enabled: String,
    pub ladder: String,
    pub rarity: String,
    pub nolimit: String,
    pub lvl: String,
    #[serde(rename = "lvl req")]
    pub lvl_req: String,
    pub code: String,
    #[serde(rename = "*type")]
    pub item_type: String,
    #[serde(rename = "*uber")]
    pub uber: String,
    pub carry1: String,
    #[serde(rename = "cost mult")]
    pub cost_mult: String,
    #[serde(rename = "cost add")]
    pub cost_add: String,
    pub chrtransform: String,
    pub invtransform: String,
    pub flippyfile: String,
    pub invfile: String,
    pub dropsound: String,
    pub dropsfxframe: String,
    pub usesound: String,
    pub prop1: String,
    pub par1: String,
    pub min1: String,
    pub max1: String,
    pub prop2: String,
    pub par2: String,
    pub min2: String,
    pub max2: String,
    pub prop3: String,
    pub par3: String,
    pub min3: String,
    pub max3: String,
    pub prop4: String,
    pub par4: String,
    pub min4: String,
    pub max4: String,
    pub prop5: String,
    pub par5: String,
    pub min5: String,
    pub max5: String,
    pub prop6: String,
    pub par6: String,
    pub min6: String,
    pub max6: String,
    pub prop7: String,
    pub par7: String,
    pub min7: String,
    pub max7: String,
    pub prop8: String,
    pub par8: String,
    pub min8: String,
    pub max8: String,
    pub prop9: String,
    pub par9: String,
    pub min9: String,
    pub max9: String,
    pub prop10: String,
    pub par10: String,
    pub min10: String,
    pub max10: String,
    pub prop11: String,
    pub par11: String,
    pub min11: String,
    pub max11: String,
    pub prop12: String,
    pub par12: String,
    pub min12: String,
    pub max12: String,
    #[serde(rename = "*eol")]
    pub eol: String,
}

fn parse_column(column: String, value: &str) -> Result<i32, RowError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

impl UniqueItemData {
    fn raw_slots(&self) -> [(&String, &String, &String, &String); PROPERTY_COLUMNS] {
        [
            (&self.prop1, &self.par1, &self.min1, &self.max1),
            (&self.prop2, &self.par2, &self.min2, &self.max2),
            (&self.prop3, &self.par3, &self.min3, &self.max3),
            (&self.prop4, &self.par4, &self.min4, &self.max4),
            (&self.prop5, &self.par5, &self.min5, &self.max5),
            (&self.prop6, &self.par6, &self.min6, &self.max6),
            (&self.prop7, &self.par7, &self.min7, &self.max7),
            (&self.prop8, &self.par8, &self.min8, &self.max8),
            (&self.prop9, &self.par9, &self.min9, &self.max9),
            (&self.prop10, &self.par10, &self.min10, &self.max10),
            (&self.prop11, &self.par11, &self.min11, &self.max11),
            (&self.prop12, &self.par12, &self.min12, &self.max12),
        ]
    }

    /// Property column groups that name a property, in column order
    pub fn property_slots(&self) -> Result<Vec<PropertySlot<'_>>, RowError> {
        let mut slots = Vec::new();
        for (i, (prop, par, min, max)) in self.raw_slots().into_iter().enumerate() {
            let column = i + 1;
            if prop.trim().is_empty() {
                continue;
            }
            slots.push(PropertySlot {
                column,
                code: prop.trim(),
                parameter: par.as_str(),
                min: parse_column(format!("min{}", column), min)?,
                max: parse_column(format!("max{}", column), max)?,
            });
        }
        Ok(slots)
    }

    /// Required character level, 0 when blank or unreadable
    pub fn level_requirement(&self) -> u32 {
        self.lvl_req.trim().parse().unwrap_or(0)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.trim() == "1"
    }
}
