//! Transformation module.
//!
//! - Reshape: flat CSV rows to nested records
//! - Pipeline: file-to-file transform driven by [`RecordTransformer`]

pub mod pipeline;
pub mod reshape;

pub use pipeline::{RecordTransformer, TransformOptions, TransformReport};
pub use reshape::{reshape_row, reshape_table};
