//! Table variables: column-major storage with object field expansion.
//!
//! Each call to [`TableVariable::add_row`] takes the values of one placeholder
//! across every table row and stores them as one column. When those values are
//! objects, the table also derives one synthetic column per field so each field
//! can be rendered without walking object trees again. The field list is taken
//! from the first object of the first call for that object key and is fixed
//! from then on.

use super::walk::walk_columns;
use super::{Key, ObjectVariable, Variable};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

/// A column-major table of variables: `columns()[c][r]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "TableRows")]
pub struct TableVariable {
    columns: Vec<Vec<Variable>>,
    number_of_rows: usize,
    schemas: Vec<ObjectSchema>,
}

/// Wire shape of a table: the sequence of `add_row` inputs.
#[derive(Deserialize)]
struct TableRows {
    rows: Vec<Vec<Variable>>,
}

impl TryFrom<TableRows> for TableVariable {
    type Error = Error;

    fn try_from(spec: TableRows) -> Result<Self> {
        let mut table = TableVariable::new();
        for row in spec.rows {
            table.add_row(row)?;
        }
        Ok(table)
    }
}

/// Field columns discovered for one object key.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    key: String,
    raw_column: usize,
    fields: Vec<String>,
    column_by_name: HashMap<String, usize>,
}

impl ObjectSchema {
    /// Capture the field tree of `sample`, whose raw column sits at `raw_column`.
    fn discover(sample: &ObjectVariable, raw_column: usize) -> Self {
        let fields: Vec<String> = sample
            .field_variables_tree()
            .iter()
            .map(|field| field.name().to_string())
            .collect();

        let mut column_by_name = HashMap::with_capacity(fields.len() + 1);
        column_by_name.insert(sample.name().to_string(), raw_column);
        for (i, name) in fields.iter().enumerate() {
            // A field named like the object overwrites the object's own entry.
            column_by_name.insert(name.clone(), raw_column + 1 + i);
        }

        Self {
            key: sample.name().to_string(),
            raw_column,
            fields,
            column_by_name,
        }
    }

    /// Object key the schema belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Index of the column holding the objects themselves.
    pub fn raw_column(&self) -> usize {
        self.raw_column
    }

    /// Field names in tree order, one synthetic column each.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Column index a name resolves to.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_by_name.get(name).copied()
    }
}

/// Field schema state of one object key inside a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSchema<'a> {
    /// No object row with this key has been added yet
    Undetermined,
    /// Fields captured from the first object row
    Fixed(&'a ObjectSchema),
}

impl TableVariable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, fixed by the first non-empty `add_row`.
    pub fn number_of_rows(&self) -> usize {
        self.number_of_rows
    }

    /// All columns, raw and synthetic.
    pub fn columns(&self) -> &[Vec<Variable>] {
        &self.columns
    }

    /// Check if no row was added.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Add one column of values, one value per table row.
    ///
    /// Empty input is ignored. The first non-empty input fixes the row count;
    /// later inputs of a different length fail with
    /// [`Error::IncorrectNumberOfRows`]. All values must share the kind and
    /// the key name of the first one. Nothing is stored when the call fails.
    ///
    /// Object fields are expanded once per object key: the first call that
    /// adds objects under a key captures the field tree of its first object
    /// and spreads every object's fields over new columns. Later calls with
    /// the same key store the objects in a raw column only. Fields present
    /// in later objects but absent from the captured tree are dropped
    /// without error.
    pub fn add_row(&mut self, row: Vec<Variable>) -> Result<()> {
        let Some(first) = row.first() else {
            return Ok(());
        };
        if self.number_of_rows != 0 && row.len() != self.number_of_rows {
            return Err(Error::IncorrectNumberOfRows {
                expected: self.number_of_rows,
                actual: row.len(),
            });
        }
        check_homogeneous(first, &row)?;

        if self.number_of_rows == 0 {
            self.number_of_rows = row.len();
        }

        let raw_column = self.columns.len();
        let schema = match first {
            Variable::Object(object) => match self.field_schema(object.name()) {
                FieldSchema::Undetermined => Some(ObjectSchema::discover(object, raw_column)),
                FieldSchema::Fixed(existing) => {
                    log::warn!(
                        "Fields of '{}' already expanded at column {}, storing objects only",
                        existing.key(),
                        existing.raw_column()
                    );
                    None
                }
            },
            Variable::Text(_) | Variable::Image(_) | Variable::BulletList(_) | Variable::Table(_) => {
                None
            }
        };

        let Some(schema) = schema else {
            self.columns.push(row);
            return Ok(());
        };

        let field_columns = transpose_fields(&schema, &row);
        log::debug!(
            "Expanded '{}' into {} field columns over {} rows",
            schema.key(),
            field_columns.len(),
            row.len()
        );
        self.columns.push(row);
        self.columns.extend(field_columns);
        self.schemas.push(schema);
        Ok(())
    }

    /// Schema state for an object key.
    pub fn field_schema(&self, object_key: &str) -> FieldSchema<'_> {
        self.schemas
            .iter()
            .find(|schema| schema.key == object_key)
            .map_or(FieldSchema::Undetermined, FieldSchema::Fixed)
    }

    /// Synthetic column of one field of an object key.
    pub fn field_column(&self, object_key: &str, field: &str) -> Option<&[Variable]> {
        match self.field_schema(object_key) {
            FieldSchema::Fixed(schema) => schema
                .column_index(field)
                .filter(|&index| index != schema.raw_column)
                .and_then(|index| self.columns.get(index))
                .map(Vec::as_slice),
            FieldSchema::Undetermined => None,
        }
    }

    /// Every key declared by the table, nested tables included.
    pub fn keys(&self) -> HashSet<Key> {
        let mut keys = HashSet::new();
        let _: ControlFlow<()> = walk_columns(&self.columns, &mut |key, _| {
            keys.insert(key);
            ControlFlow::Continue(())
        });
        keys
    }

    /// True if any reachable column has a key with this name.
    pub fn contains_key(&self, name: &str) -> bool {
        walk_columns(&self.columns, &mut |key, _| {
            if key.name() == name {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Value of `key` at `row`.
    ///
    /// Columns too short for `row` are skipped, so a later column with the
    /// same key can still answer.
    pub fn get_variable(&self, key: &Key, row: usize) -> Option<&Variable> {
        let found = walk_columns(&self.columns, &mut |column_key, column| {
            match column.get(row) {
                Some(variable) if column_key == *key => ControlFlow::Break(variable),
                _ => ControlFlow::Continue(()),
            }
        });
        match found {
            ControlFlow::Break(variable) => Some(variable),
            ControlFlow::Continue(()) => None,
        }
    }
}

/// Every value of a row must match the first one's kind and key name.
fn check_homogeneous(first: &Variable, row: &[Variable]) -> Result<()> {
    for variable in row {
        if variable.variable_type() != first.variable_type() {
            return Err(Error::VariableTypeMismatch {
                expected: first.variable_type().to_string(),
                actual: variable.variable_type().to_string(),
            });
        }
        if variable.name() != first.name() {
            return Err(Error::VariableKeyMismatch {
                expected: first.name().unwrap_or_default().to_string(),
                actual: variable.name().unwrap_or_default().to_string(),
            });
        }
    }
    Ok(())
}

/// Spread each object's fields over the schema's synthetic columns.
fn transpose_fields(schema: &ObjectSchema, row: &[Variable]) -> Vec<Vec<Variable>> {
    let mut field_columns: Vec<Vec<Variable>> = (0..schema.fields.len())
        .map(|_| Vec::with_capacity(row.len()))
        .collect();

    for variable in row {
        let Variable::Object(object) = variable else {
            continue;
        };
        for field in object.field_variables_tree() {
            match schema.column_index(field.name()) {
                Some(index) if index > schema.raw_column => {
                    field_columns[index - schema.raw_column - 1].push(Variable::Object(field.clone()));
                }
                // Unknown to the first object, or resolving to the raw column.
                _ => log::trace!("Dropping field '{}' of '{}'", field.name(), object.name()),
            }
        }
    }
    field_columns
}
