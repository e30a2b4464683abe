//! In-memory property lookup
//!
//! Filled by whatever loads the property tables; the description system
//! only reads from it.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use super::types::Property;

/// Properties keyed by code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyCatalog {
    properties: HashMap<String, Property>,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, returning the one it replaced if any
    pub fn insert(&mut self, property: Property) -> Option<Property> {
        self.properties.insert(property.code.clone(), property)
    }

    pub fn get(&self, code: &str) -> Option<&Property> {
        self.properties.get(code)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<Property> for PropertyCatalog {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for property in iter {
            catalog.insert(property);
        }
        catalog
    }
}
