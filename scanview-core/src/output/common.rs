//! Common utilities for exports

use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Prefix shared by all export file names
pub const EXPORT_PREFIX: &str = "nmap_results";

/// Export encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the whole store
    Json,
    /// One row per port
    Csv,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// MIME type of the encoded bytes
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// Output writer that can write to stdout or a file
pub struct OutputWriter {
    file: Option<std::fs::File>,
    destination: String,
}

impl OutputWriter {
    /// Create a new OutputWriter for stdout
    pub fn stdout() -> Self {
        Self {
            file: None,
            destination: "-".to_string(),
        }
    }

    /// Create a new OutputWriter for a file, replacing any existing content
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            file: Some(file),
            destination: path_str,
        })
    }

    /// Writer for `path`, where "-" means stdout
    pub fn for_path(path: impl AsRef<Path>) -> io::Result<Self> {
        if path.as_ref().to_str() == Some("-") {
            Ok(Self::stdout())
        } else {
            Self::file(path)
        }
    }

    /// Write a string to the output
    pub fn write(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Write raw bytes to the output
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(ref mut f) = self.file {
            f.write_all(bytes)
        } else {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()
        }
    }

    /// Get the destination (file path or "-" for stdout)
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// ISO-8601 UTC timestamp with `:` and `.` replaced by `-`
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scanview_core::output::common::file_timestamp;
///
/// let t = Utc.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap();
/// assert_eq!(file_timestamp(t), "2024-05-01T09-03-07-000Z");
/// ```
pub fn file_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-")
}

/// File name for an export taken at `time`, e.g. `nmap_results_<ts>.json`
pub fn export_filename(format: ExportFormat, time: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_PREFIX,
        file_timestamp(time),
        format.extension()
    )
}
