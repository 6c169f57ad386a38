//! Input parsers for Nmap scan reports
//!
//! # Formats
//!
//! - **XML** - Nmap `-oX` reports, see [`xml`]
//! - **Text** - Nmap normal/grepable reports, see [`grep`]
//!
//! Both produce the same [`Host`] sequence. Neither fails on bad input:
//! malformed XML yields no hosts and unrecognised text lines are skipped.
//! Raw bytes go through [`decode_report`] first, so a report that is not
//! valid UTF-8 still parses.
//!
//! # Examples
//!
//! ```
//! use scanview_core::input;
//! use scanview_core::types::FormatKey;
//!
//! let hosts = input::parse("Nmap scan report for 10.0.0.1\n80/tcp open http\n", FormatKey::LineOriented);
//! assert_eq!(hosts.len(), 1);
//! ```

pub mod grep;
pub mod xml;

pub use grep::GrepParser;

use crate::types::{FormatKey, Host};
use std::borrow::Cow;
use tracing::warn;

/// Decodes report bytes as UTF-8, replacing invalid sequences with U+FFFD
pub fn decode_report(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!("report is not valid UTF-8; invalid bytes replaced with U+FFFD");
    }
    text
}

/// Parses report text with the parser for `key`
pub fn parse(text: &str, key: FormatKey) -> Vec<Host> {
    match key {
        FormatKey::Structured => xml::parse(text),
        FormatKey::LineOriented => grep::parse(text),
    }
}
