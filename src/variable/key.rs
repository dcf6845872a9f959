//! Variable identity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind tag of a bindable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// Plain text
    Text,
    /// Image bytes or reference
    Image,
    /// Bulleted list of strings
    BulletList,
    /// Named group of fields
    Object,
    /// Column-major table of variables
    Table,
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableType::Text => write!(f, "text"),
            VariableType::Image => write!(f, "image"),
            VariableType::BulletList => write!(f, "bullet_list"),
            VariableType::Object => write!(f, "object"),
            VariableType::Table => write!(f, "table"),
        }
    }
}

/// Identity of a bindable slot: a name and a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    name: String,
    kind: VariableType,
}

impl Key {
    /// Create a new key.
    pub fn new(name: impl Into<String>, kind: VariableType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Placeholder name of the key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the key.
    pub fn kind(&self) -> VariableType {
        self.kind
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Declared key set used to validate placeholder names.
#[derive(Debug, Clone, Default)]
pub struct KeysHolder {
    keys: HashSet<Key>,
    names: HashSet<String>,
}

impl KeysHolder {
    /// Create a holder from any collection of keys.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        let keys: HashSet<Key> = keys.into_iter().collect();
        let names = keys.iter().map(|key| key.name.clone()).collect();
        Self { keys, names }
    }

    /// True if any held key has this name, whatever its kind.
    pub fn contains_key_by_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True if this exact key is held.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no keys are held.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the held keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Held keys sorted by name, then kind.
    pub fn sorted(&self) -> Vec<&Key> {
        let mut keys: Vec<&Key> = self.keys.iter().collect();
        keys.sort();
        keys
    }
}

impl FromIterator<Key> for KeysHolder {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::new(iter)
    }
}
