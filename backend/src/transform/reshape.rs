//! Row to record reshaping.
//!
//! ```text
//! CSV row (flat)                          Record (nested)
//! ┌──────────────────────────────┐       ┌───────────────────────────┐
//! │ 0..7   sku, name, ...        │  →    │ sku, name, ...            │
//! │ 8..11  image, 3d_model_iges  │  →    │ images:     { image, ... }│
//! │ 12..31 eu_rohs_y, ...        │  →    │ attributes: { ... }       │
//! │ 32..   brand, ...            │  →    │ brand, ...                │
//! └──────────────────────────────┘       └───────────────────────────┘
//! ```
//!
//! Empty cells are omitted: the key is absent, never `null` or `""`.

use serde_json::Value;
use tracing::trace;

use crate::layout::{ColumnGroup, HeaderLayout, ATTRIBUTES_KEY, IMAGES_KEY};
use crate::models::{Document, Record};
use crate::parser::{Row, Table};

/// Reshape every row of a table, preserving order.
pub fn reshape_table(table: &Table) -> Document {
    let layout = HeaderLayout::from_headers(&table.headers);
    table
        .rows
        .iter()
        .map(|row| reshape_row(&table.headers, &layout, row))
        .collect()
}

/// Reshape one row into a [`Record`].
pub fn reshape_row(headers: &[String], layout: &HeaderLayout, row: &Row) -> Record {
    let mut record = Record::new();

    for (index, name, value) in row.cells_with(headers) {
        if value.is_empty() {
            continue;
        }

        let target = match layout.group_of(index) {
            ColumnGroup::Images => &mut record.images,
            ColumnGroup::Attributes => &mut record.attributes,
            ColumnGroup::Core if name == IMAGES_KEY || name == ATTRIBUTES_KEY => {
                trace!(line = row.line, column = name, "core cell shadowed by sub-document");
                continue;
            }
            ColumnGroup::Core => &mut record.core,
        };
        target.insert(name.to_string(), Value::String(value.to_string()));
    }

    record
}
