//! High-level transform API: CSV file in, JSON document file out.
//!
//! # Example
//!
//! ```rust,no_run
//! use recordshape::RecordTransformer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let count = RecordTransformer::new().transform("sample-part-data.csv")?;
//!     println!("Transformed {count} records into out.json");
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::reshape::reshape_table;
use crate::error::TransformResult;
use crate::layout::HeaderLayout;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Document;
use crate::output::{write_document, DEFAULT_OUTPUT_PATH};
use crate::parser::read_table;

/// Options for the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Where the JSON document is written.
    pub output_path: PathBuf,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    /// Number of data rows processed (header excluded).
    pub record_count: usize,
    /// Header row of the source.
    pub headers: Vec<String>,
    /// Header names per group.
    pub layout: HeaderLayout,
    /// File the document was written to.
    pub output_path: PathBuf,
}

/// Reads a part-data CSV, reshapes every row and writes the JSON document.
///
/// Each call is independent; running twice on the same input produces the
/// same output file.
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer {
    options: TransformOptions,
}

impl RecordTransformer {
    /// Transformer writing to `out.json` in the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Transformer writing to `path`.
    pub fn with_output(path: impl Into<PathBuf>) -> Self {
        Self::with_options(TransformOptions {
            output_path: path.into(),
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.options.output_path
    }

    /// Transform `source` and return the number of records written.
    pub fn transform<P: AsRef<Path>>(&self, source: P) -> TransformResult<usize> {
        self.run(source).map(|report| report.record_count)
    }

    /// Transform `source` and return a full report.
    ///
    /// Nothing is written unless the whole source parsed cleanly.
    pub fn run<P: AsRef<Path>>(&self, source: P) -> TransformResult<TransformReport> {
        let source = source.as_ref();
        log_info(format!("📖 Reading {}", source.display()));

        let (document, headers, layout) = self.read(source)?;

        write_document(&document, self.output_path())?;
        log_success(format!(
            "Wrote {} records to {}",
            document.len(),
            self.output_path().display()
        ));

        Ok(TransformReport {
            record_count: document.len(),
            headers,
            layout,
            output_path: self.output_path().to_path_buf(),
        })
    }

    /// Read and reshape `source` without writing anything.
    pub fn reshape_file<P: AsRef<Path>>(&self, source: P) -> TransformResult<Document> {
        self.read(source.as_ref()).map(|(document, _, _)| document)
    }

    fn read(&self, source: &Path) -> TransformResult<(Document, Vec<String>, HeaderLayout)> {
        let table = read_table(source)?;
        log_success(format!(
            "Read {} rows, {} columns",
            table.len(),
            table.headers.len()
        ));

        let layout = HeaderLayout::from_headers(&table.headers);
        log_info_indent(format!("core: {} columns", layout.core.len()), 1);
        log_info_indent(format!("images: {} columns", layout.images.len()), 1);
        log_info_indent(format!("attributes: {} columns", layout.attributes.len()), 1);

        for name in layout.shadowed_core() {
            log_warning(format!(
                "Core column '{name}' is replaced by the synthesized '{name}' sub-document"
            ));
        }

        let document = reshape_table(&table);
        Ok((document, table.headers, layout))
    }
}
