//! Output data model.
//!
//! - [`Record`] - one reshaped JSON object per CSV data row
//! - [`Document`] - all records of one run, in source order
//!
//! A serialized record looks like:
//!
//! ```json
//! {
//!   "sku": "10061122131120HLF",
//!   "name": "...",
//!   "images": { "image": "http://..." },
//!   "attributes": { "voltage_rating": "30V" }
//! }
//! ```
//!
//! Core fields come first in header order, then `images`, then `attributes`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Record
// =============================================================================

/// One reshaped row.
///
/// `images` and `attributes` are always serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Top-level fields keyed by header name.
    #[serde(flatten)]
    pub core: Map<String, Value>,
    /// Cells of the images columns keyed by header name.
    pub images: Map<String, Value>,
    /// Cells of the attributes columns keyed by header name.
    pub attributes: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a core field as a string.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.core.get(name).and_then(Value::as_str)
    }

    /// Get an image entry as a string.
    pub fn image(&self, name: &str) -> Option<&str> {
        self.images.get(name).and_then(Value::as_str)
    }

    /// Get an attribute as a string.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

// =============================================================================
// Document
// =============================================================================

/// Ordered records of one transform run.
pub type Document = Vec<Record>;
