//! Shared traversal over column-major variable storage.

use super::{Key, Variable};
use std::ops::ControlFlow;

/// Visit every keyed column reachable from `columns`.
///
/// A column's key is the key of its first entry. Columns whose first entry is
/// a table are replaced by that table's own columns, recursively. The first
/// empty column ends the walk of the list it belongs to. `visit` receives the
/// key and the whole column and may stop the walk with `ControlFlow::Break`.
pub(crate) fn walk_columns<'a, B, F>(columns: &'a [Vec<Variable>], visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(Key, &'a [Variable]) -> ControlFlow<B>,
{
    for column in columns {
        let Some(first) = column.first() else {
            break;
        };
        let key = match first {
            Variable::Table(table) => {
                walk_columns(table.columns(), visit)?;
                continue;
            }
            Variable::Text(v) => v.key(),
            Variable::Image(v) => v.key(),
            Variable::BulletList(v) => v.key(),
            Variable::Object(v) => v.key(),
        };
        visit(key, column.as_slice())?;
    }
    ControlFlow::Continue(())
}
