//! Bindable variables.
//!
//! A [`Variable`] is one of five kinds: text, image, bullet list, object or
//! table. Every kind except table carries a [`Key`]; a table's keys are those
//! of its columns.

mod image;
mod key;
mod object;
mod table;
mod variables;
pub(crate) mod walk;

pub use image::{ImageSource, ImageVariable};
pub use key::{Key, KeysHolder, VariableType};
pub use object::ObjectVariable;
pub use table::{FieldSchema, ObjectSchema, TableVariable};
pub use variables::Variables;

use serde::Deserialize;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Variable {
    /// Plain text
    Text(TextVariable),
    /// Image
    Image(ImageVariable),
    /// Bulleted list
    BulletList(BulletListVariable),
    /// Object with fields
    Object(ObjectVariable),
    /// Table of variables
    Table(TableVariable),
}

impl Variable {
    /// Kind of the variable.
    pub fn variable_type(&self) -> VariableType {
        match self {
            Variable::Text(_) => VariableType::Text,
            Variable::Image(_) => VariableType::Image,
            Variable::BulletList(_) => VariableType::BulletList,
            Variable::Object(_) => VariableType::Object,
            Variable::Table(_) => VariableType::Table,
        }
    }

    /// Key of the variable; tables have none.
    pub fn key(&self) -> Option<Key> {
        match self {
            Variable::Text(v) => Some(v.key()),
            Variable::Image(v) => Some(v.key()),
            Variable::BulletList(v) => Some(v.key()),
            Variable::Object(v) => Some(v.key()),
            Variable::Table(_) => None,
        }
    }

    /// Placeholder name of the variable; tables have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Variable::Text(v) => Some(v.name()),
            Variable::Image(v) => Some(v.name()),
            Variable::BulletList(v) => Some(v.name()),
            Variable::Object(v) => Some(v.name()),
            Variable::Table(_) => None,
        }
    }

    /// Text value, for text variables.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Variable::Text(v) => Some(v.value()),
            _ => None,
        }
    }

    /// Object, for object variables.
    pub fn as_object(&self) -> Option<&ObjectVariable> {
        match self {
            Variable::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Table, for table variables.
    pub fn as_table(&self) -> Option<&TableVariable> {
        match self {
            Variable::Table(v) => Some(v),
            _ => None,
        }
    }
}

impl From<TextVariable> for Variable {
    fn from(v: TextVariable) -> Self {
        Variable::Text(v)
    }
}

impl From<ImageVariable> for Variable {
    fn from(v: ImageVariable) -> Self {
        Variable::Image(v)
    }
}

impl From<BulletListVariable> for Variable {
    fn from(v: BulletListVariable) -> Self {
        Variable::BulletList(v)
    }
}

impl From<ObjectVariable> for Variable {
    fn from(v: ObjectVariable) -> Self {
        Variable::Object(v)
    }
}

impl From<TableVariable> for Variable {
    fn from(v: TableVariable) -> Self {
        Variable::Table(v)
    }
}

/// Plain text bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextVariable {
    key: String,
    value: String,
}

impl TextVariable {
    /// Create a text variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key of the variable.
    pub fn key(&self) -> Key {
        Key::new(self.key.clone(), VariableType::Text)
    }

    /// Placeholder name.
    pub fn name(&self) -> &str {
        &self.key
    }

    /// Bound text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered list items bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulletListVariable {
    key: String,
    items: Vec<String>,
}

impl BulletListVariable {
    /// Create a bullet list variable.
    pub fn new<S: Into<String>>(key: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            key: key.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Key of the variable.
    pub fn key(&self) -> Key {
        Key::new(self.key.clone(), VariableType::BulletList)
    }

    /// Placeholder name.
    pub fn name(&self) -> &str {
        &self.key
    }

    /// List items in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variable_kinds() {
        let text: Variable = TextVariable::new("name", "Ann").into();
        assert_eq!(text.variable_type(), VariableType::Text);
        assert_eq!(text.key(), Some(Key::new("name", VariableType::Text)));
        assert_eq!(text.as_text(), Some("Ann"));

        let list: Variable = BulletListVariable::new("skills", ["rust", "sql"]).into();
        assert_eq!(list.name(), Some("skills"));
        assert!(list.as_text().is_none());

        let table: Variable = TableVariable::new().into();
        assert_eq!(table.variable_type(), VariableType::Table);
        assert!(table.key().is_none());
        assert!(table.name().is_none());
        assert!(table.as_table().is_some());
    }

    #[test]
    fn test_deserialize_tagged() {
        let variable: Variable = serde_json::from_value(json!({
            "type": "bullet_list",
            "key": "skills",
            "items": ["rust", "sql"]
        }))
        .unwrap();
        match variable {
            Variable::BulletList(list) => assert_eq!(list.items(), ["rust", "sql"]),
            other => panic!("unexpected variable: {:?}", other),
        }

        let object: Variable = serde_json::from_value(json!({
            "type": "object",
            "key": "person",
            "value": {"name": "Ann"}
        }))
        .unwrap();
        assert_eq!(
            object.as_object().and_then(|o| o.field("name")).map(|f| f.text()),
            Some("Ann".to_string())
        );

        let image: Variable = serde_json::from_value(json!({
            "type": "image",
            "key": "logo",
            "source": {"file": "logo.png"}
        }))
        .unwrap();
        assert_eq!(image.key(), Some(Key::new("logo", VariableType::Image)));
    }
}
