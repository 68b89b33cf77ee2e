//! Column layout contract.
//!
//! Which group a column belongs to depends only on its zero-based ordinal,
//! never on its name:
//!
//! ```text
//!  ordinal:  0 ..... 7 | 8 .... 11 | 12 ........ 31 | 32 ...
//!  group:    core      | images    | attributes     | core
//! ```
//!
//! The ranges are fixed. Downstream consumers of the JSON rely on them.

use serde::Serialize;

/// First ordinal of the images group.
pub const IMAGES_START: i64 = 8;
/// Last ordinal (inclusive) of the images group.
pub const IMAGES_END: i64 = 11;
/// First ordinal of the attributes group.
pub const ATTRS_START: i64 = 12;
/// Last ordinal (inclusive) of the attributes group.
pub const ATTRS_END: i64 = 31;

/// Key of the nested images sub-document.
pub const IMAGES_KEY: &str = "images";
/// Key of the nested attributes sub-document.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Group a column is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnGroup {
    /// Top-level field of the record.
    Core,
    /// Entry of the `images` sub-document.
    Images,
    /// Entry of the `attributes` sub-document.
    Attributes,
}

impl ColumnGroup {
    /// Nested key for this group, `None` for core fields.
    pub fn key(self) -> Option<&'static str> {
        match self {
            ColumnGroup::Core => None,
            ColumnGroup::Images => Some(IMAGES_KEY),
            ColumnGroup::Attributes => Some(ATTRIBUTES_KEY),
        }
    }

    /// Whether `ordinal` falls into this group.
    pub fn contains(self, ordinal: i64) -> bool {
        classify_column(ordinal) == self
    }
}

impl std::fmt::Display for ColumnGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnGroup::Core => "core",
            ColumnGroup::Images => IMAGES_KEY,
            ColumnGroup::Attributes => ATTRIBUTES_KEY,
        };
        f.pad(name)
    }
}

/// Classify a column by its zero-based ordinal.
///
/// Negative ordinals never occur when reading a file but are accepted and
/// classified as core.
///
/// # Example
/// ```
/// use recordshape::{classify_column, ColumnGroup};
///
/// assert_eq!(classify_column(7), ColumnGroup::Core);
/// assert_eq!(classify_column(8), ColumnGroup::Images);
/// assert_eq!(classify_column(31), ColumnGroup::Attributes);
/// assert_eq!(classify_column(32), ColumnGroup::Core);
/// ```
pub fn classify_column(ordinal: i64) -> ColumnGroup {
    if (IMAGES_START..=IMAGES_END).contains(&ordinal) {
        ColumnGroup::Images
    } else if (ATTRS_START..=ATTRS_END).contains(&ordinal) {
        ColumnGroup::Attributes
    } else {
        ColumnGroup::Core
    }
}

/// Classify a column by its `usize` index within a row.
pub fn classify_index(index: usize) -> ColumnGroup {
    i64::try_from(index).map_or(ColumnGroup::Core, classify_column)
}

/// Header names split by group, each in ordinal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderLayout {
    /// Group of every header, indexed by ordinal.
    #[serde(skip)]
    groups: Vec<ColumnGroup>,
    pub core: Vec<String>,
    pub images: Vec<String>,
    pub attributes: Vec<String>,
}

impl HeaderLayout {
    /// Build the layout for a header row.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut layout = Self::default();
        for (index, name) in headers.iter().enumerate() {
            let group = classify_index(index);
            layout.groups.push(group);
            match group {
                ColumnGroup::Core => layout.core.push(name.clone()),
                ColumnGroup::Images => layout.images.push(name.clone()),
                ColumnGroup::Attributes => layout.attributes.push(name.clone()),
            }
        }
        layout
    }

    /// Group of the column at `index`.
    pub fn group_of(&self, index: usize) -> ColumnGroup {
        self.groups
            .get(index)
            .copied()
            .unwrap_or_else(|| classify_index(index))
    }

    /// Number of columns in the header.
    pub fn width(&self) -> usize {
        self.groups.len()
    }

    /// Core headers that collide with a synthesized sub-document key.
    pub fn shadowed_core(&self) -> Vec<&str> {
        self.core
            .iter()
            .map(String::as_str)
            .filter(|name| *name == IMAGES_KEY || *name == ATTRIBUTES_KEY)
            .collect()
    }
}
