//! # recordshape - positional CSV to nested JSON reshaping
//!
//! Turns flat part-data CSV exports into JSON documents. Every column is
//! assigned to a group by its position in the header, and each row becomes a
//! record with its core fields plus `images` and `attributes` sub-documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│   Reshape   │────▶│  JSON file  │
//! │   (UTF-8)   │     │   (Table)   │     │  (layout)   │     │  (atomic)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recordshape::RecordTransformer;
//!
//! let count = RecordTransformer::with_output("parts.json")
//!     .transform("sample-part-data.csv")
//!     .unwrap();
//! println!("Transformed {count} records");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Layered error types
//! - [`layout`] - Fixed column layout and classification
//! - [`models`] - Record and document model
//! - [`parser`] - CSV reading
//! - [`transform`] - Reshaping and the file-to-file pipeline
//! - [`output`] - Atomic JSON writer
//! - [`logs`] - Logging setup and helpers

// Core modules
pub mod error;
pub mod layout;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError, CsvResult, ErrorKind, OutputError, OutputResult, TransformError, TransformResult,
};

// =============================================================================
// Re-exports - Layout
// =============================================================================

pub use layout::{
    classify_column, classify_index, ColumnGroup, HeaderLayout, ATTRIBUTES_KEY, ATTRS_END,
    ATTRS_START, IMAGES_END, IMAGES_KEY, IMAGES_START,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Document, Record};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{csv_to_table, parse_table, read_table, Row, Table};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    reshape_row, reshape_table, RecordTransformer, TransformOptions, TransformReport,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{write_document, DEFAULT_OUTPUT_PATH};
