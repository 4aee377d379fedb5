//! Row projection: data records to rendered cell values.

use crate::column::Column;
use crate::path::{display_value, resolve_path};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One rendered cell of a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Accessor path of the leaf column this cell belongs to
    pub accessor: String,
    /// Resolved display value; null when the accessor path is missing
    pub value: Value,
}

impl Cell {
    /// Get display text for the cell.
    #[must_use]
    pub fn display(&self) -> String {
        display_value(&self.value)
    }
}

/// One derived data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Stable identifier within one derivation (the record index)
    pub id: String,
    /// Index of the source record in the (paginated) input
    pub index: usize,
    /// Cells in leaf-column order
    pub cells: Vec<Cell>,
}

/// Project records through the leaf columns into rows.
///
/// For each record, each leaf accessor is resolved against the record; a
/// missing path yields a null value rather than an error. The column's
/// transform is applied to the resolved value, and sequences are joined
/// into a single comma-and-space string. Record order is preserved.
#[must_use]
pub fn project_rows(records: &[Value], leaves: &[Column]) -> Vec<Row> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Row {
            id: index.to_string(),
            index,
            cells: leaves.iter().map(|leaf| project_cell(record, leaf)).collect(),
        })
        .collect()
}

fn project_cell(record: &Value, leaf: &Column) -> Cell {
    let accessor = leaf.accessor.clone().unwrap_or_default();
    let resolved = resolve_path(record, &accessor)
        .cloned()
        .unwrap_or(Value::Null);
    let transformed = match &leaf.get_fn {
        Some(f) => f(&resolved),
        None => resolved,
    };
    let value = match transformed {
        Value::Array(items) => Value::String(
            items
                .iter()
                .map(display_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => other,
    };
    Cell { accessor, value }
}
