// registry.rs - Table registry for managing available substitution tables

use std::collections::HashMap;

use super::traits::SubstitutionTable;
use super::{Blosum62Table, GranthamTable};

/// Registry for available substitution tables
pub struct TableRegistry {
    tables: HashMap<String, Box<dyn SubstitutionTable>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            tables: HashMap::new(),
        };

        // Register built-in tables
        registry.register_table("grantham", Box::new(GranthamTable));
        registry.register_table("blosum62", Box::new(Blosum62Table));

        registry
    }

    /// Register a new table
    pub fn register_table(&mut self, name: &str, table: Box<dyn SubstitutionTable>) {
        self.tables.insert(name.to_string(), table);
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Option<&dyn SubstitutionTable> {
        self.tables.get(name).map(|t| t.as_ref())
    }

    /// Check if a table exists
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// List all available tables
    pub fn list_tables(&self) -> Vec<(&str, &str)> {
        self.tables
            .values()
            .map(|t| (t.name(), t.description()))
            .collect()
    }

    /// Get all table names
    pub fn get_table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
