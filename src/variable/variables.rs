//! Top-level variable collection.

use super::{
    BulletListVariable, ImageSource, ImageVariable, Key, ObjectVariable, TableVariable,
    TextVariable, Variable,
};
use serde::Deserialize;

/// The variables bound to one document, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    variables: Vec<Variable>,
}

impl Variables {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any variable.
    pub fn push(&mut self, variable: impl Into<Variable>) {
        self.variables.push(variable.into());
    }

    /// Add a text variable.
    pub fn add_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(TextVariable::new(key, value));
    }

    /// Add an image variable.
    pub fn add_image(&mut self, key: impl Into<String>, source: ImageSource) {
        self.push(ImageVariable::new(key, source));
    }

    /// Add a bullet list variable.
    pub fn add_bullet_list<S: Into<String>>(
        &mut self,
        key: impl Into<String>,
        items: impl IntoIterator<Item = S>,
    ) {
        self.push(BulletListVariable::new(key, items));
    }

    /// Add an object variable.
    pub fn add_object(&mut self, object: ObjectVariable) {
        self.push(object);
    }

    /// Add a table variable.
    pub fn add_table(&mut self, table: TableVariable) {
        self.push(table);
    }

    /// Number of top-level variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over top-level variables.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Find the variable declared under `key`.
    ///
    /// Top-level variables match directly; tables answer with their first row.
    pub fn find(&self, key: &Key) -> Option<&Variable> {
        self.variables.iter().find_map(|variable| match variable {
            Variable::Table(table) => table.get_variable(key, 0),
            other if other.key().as_ref() == Some(key) => Some(other),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl FromIterator<Variable> for Variables {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}
