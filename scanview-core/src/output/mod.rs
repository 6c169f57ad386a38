//! Export and display of stored results
//!
//! # Formats
//!
//! - **JSON** - the whole store, pretty-printed
//! - **CSV** - one quoted row per port
//! - **Text** - the results view printed by the CLI
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use scanview_core::output::{export_csv, export_filename, ExportFormat};
//! use scanview_core::store::ResultStore;
//!
//! let store = ResultStore::new();
//! let bytes = export_csv(&store);
//! let name = export_filename(ExportFormat::Csv, Utc::now());
//! assert!(name.starts_with("nmap_results_") && name.ends_with(".csv"));
//! assert!(!bytes.is_empty());
//! ```

pub mod common;
pub mod csv;
pub mod json;
pub mod text;

pub use common::{export_filename, file_timestamp, ExportFormat, OutputWriter};
pub use csv::export_csv;
pub use json::{export_json, import_json};
pub use text::render_view;

use crate::error::Result;
use crate::store::ResultStore;

/// Encodes the store in `format`
pub fn export(store: &ResultStore, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => export_json(store),
        ExportFormat::Csv => Ok(export_csv(store)),
    }
}
