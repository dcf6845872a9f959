//! Schema extraction from variables.

use crate::variable::{Key, Variable};
use std::collections::HashSet;

/// Collects the keys declared by a set of variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyExtractor;

impl KeyExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Every key declared by `variables`, tables expanded through their columns.
    pub fn extract_keys<'a>(&self, variables: impl IntoIterator<Item = &'a Variable>) -> HashSet<Key> {
        let mut keys = HashSet::new();
        for variable in variables {
            match variable {
                Variable::Table(table) => keys.extend(table.keys()),
                Variable::Text(v) => {
                    keys.insert(v.key());
                }
                Variable::Image(v) => {
                    keys.insert(v.key());
                }
                Variable::BulletList(v) => {
                    keys.insert(v.key());
                }
                Variable::Object(v) => {
                    keys.insert(v.key());
                }
            }
        }
        keys
    }
}
