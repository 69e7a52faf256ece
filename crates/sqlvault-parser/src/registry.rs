//! Case-insensitive registry of parsed SQL statements.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// One named statement extracted from a tagged block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSql {
    /// Tag name, with the casing of its start marker.
    pub name: String,
    /// Statement body: trimmed, non-blank block lines joined by newline.
    pub body: String,
}

/// The statements of one successful parse run.
///
/// Lookups compare case-insensitively; iteration yields the original
/// casing. Built by [`crate::parse_sources`] only when the run produced no
/// diagnostics, and immutable afterwards. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlRegistry {
    statements: HashMap<String, ParsedSql>,
}

impl SqlRegistry {
    /// First occurrence wins. The tracker already guarantees uniqueness;
    /// this is a second line of defense, not the enforcement point.
    pub(crate) fn try_insert(&mut self, statement: ParsedSql) -> bool {
        use std::collections::hash_map::Entry;
        match self.statements.entry(statement.name.to_lowercase()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(statement);
                true
            }
        }
    }

    /// Look up a statement body, failing when the tag is absent.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.try_get(name).ok_or_else(|| Error::TagNotFound {
            tag: name.to_string(),
        })
    }

    /// Look up a statement body; `None` on a miss.
    pub fn try_get(&self, name: &str) -> Option<&str> {
        self.statements
            .get(&name.to_lowercase())
            .map(|statement| statement.body.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.statements.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over all statements, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedSql> {
        self.statements.values()
    }
}
