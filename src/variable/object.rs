//! Object variables: a named value made of named fields.

use super::{Key, VariableType};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named group of child fields.
///
/// Every field is itself an `ObjectVariable`, so the fields form a tree of
/// arbitrary depth. Field names are unique among the direct children of one
/// object; [`ObjectVariable::with_field`] replaces a same-named child instead
/// of adding a second one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ObjectSpec")]
pub struct ObjectVariable {
    key: String,
    value: Value,
    fields: Vec<ObjectVariable>,
}

#[derive(Deserialize)]
struct ObjectSpec {
    key: String,
    #[serde(default)]
    value: Value,
}

impl From<ObjectSpec> for ObjectVariable {
    fn from(spec: ObjectSpec) -> Self {
        ObjectVariable::from_json(spec.key, &spec.value)
    }
}

impl ObjectVariable {
    /// Create an object from its fields. The object's own value is the map
    /// of its fields' values.
    pub fn new(key: impl Into<String>, fields: impl IntoIterator<Item = ObjectVariable>) -> Self {
        let object = Self {
            key: key.into(),
            value: Value::Null,
            fields: Vec::new(),
        };
        let mut object = fields.into_iter().fold(object, Self::with_field);
        object.value = object.fields_value();
        object
    }

    /// Create a field-less object holding a single value.
    pub fn leaf(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            fields: Vec::new(),
        }
    }

    /// Build an object tree from a JSON value.
    ///
    /// JSON objects become fields (in document order); every other value is a leaf.
    pub fn from_json(key: impl Into<String>, value: &Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .iter()
                .map(|(name, child)| Self::from_json(name.as_str(), child))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            key: key.into(),
            value: value.clone(),
            fields,
        }
    }

    /// Build an object tree from any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        Ok(Self::from_json(key, &value))
    }

    /// Add a field, replacing a direct child with the same name.
    pub fn with_field(mut self, field: ObjectVariable) -> Self {
        match self.fields.iter_mut().find(|f| f.key == field.key) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        if let Value::Object(_) = self.value {
            self.value = self.fields_value();
        }
        self
    }

    fn fields_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|f| (f.key.clone(), f.value.clone()))
                .collect(),
        )
    }

    /// Key of the object.
    pub fn key(&self) -> Key {
        Key::new(self.key.clone(), VariableType::Object)
    }

    /// Placeholder name of the object.
    pub fn name(&self) -> &str {
        &self.key
    }

    /// The object's own value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Direct child fields.
    pub fn fields(&self) -> &[ObjectVariable] {
        &self.fields
    }

    /// Direct child field by name.
    pub fn field(&self, name: &str) -> Option<&ObjectVariable> {
        self.fields.iter().find(|f| f.key == name)
    }

    /// Every descendant field, depth first, parents before their children.
    pub fn field_variables_tree(&self) -> Vec<&ObjectVariable> {
        fn collect<'a>(fields: &'a [ObjectVariable], out: &mut Vec<&'a ObjectVariable>) {
            for field in fields {
                out.push(field);
                collect(&field.fields, out);
            }
        }
        let mut tree = Vec::new();
        collect(&self.fields, &mut tree);
        tree
    }

    /// Text to substitute for this object's placeholder.
    pub fn text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Lower-case the first character of a name that starts upper-case.
    ///
    /// Names that are empty or already start with a non-upper-case character
    /// come back unchanged.
    pub fn fix_invalid_field_name(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
            _ => name.to_string(),
        }
    }
}
