//! Error types for scanview-core
//!
//! Provides a unified error type for all operations in the library.

/// Result type alias for scanview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for scanview operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML document could not be parsed
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// JSON serialization or parsing error
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file whose format cannot be determined
    #[error("Unknown input format: {0}")]
    UnknownFormat(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test".to_string());
        assert_eq!(err.to_string(), "Invalid input: test");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().contains("JSON parsing failed"));
    }

    #[test]
    fn test_error_from_xml() {
        let xml_err = roxmltree::Document::parse("<nmaprun><host>").unwrap_err();
        let err = Error::from(xml_err);
        assert!(err.to_string().starts_with("XML parsing failed"));
    }

    #[test]
    fn test_unknown_format_error() {
        let err = Error::UnknownFormat("scan.pdf".to_string());
        assert_eq!(err.to_string(), "Unknown input format: scan.pdf");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
