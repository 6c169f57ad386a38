//! Core data types for normalized scan results
//!
//! Both input parsers produce the same shape: a sequence of [`Host`] records,
//! each holding the [`Port`] records found for it in source order.
//!
//! # Examples
//!
//! ```
//! use scanview_core::types::{Host, Port};
//!
//! let mut host = Host::new("10.0.0.1");
//! host.add_port(Port::open("80/tcp", "http"));
//!
//! assert_eq!(host.port_count(), 1);
//! assert!(host.ports[0].is_open());
//! assert_eq!(host.ports[0].script, "");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Placeholder used when a service name or host address is missing
pub const UNKNOWN: &str = "Unknown";

/// The state value that marks a port as open
pub const STATE_OPEN: &str = "open";

/// Ordered hosts produced by one parse of one input format
pub type ResultSet = Vec<Host>;

/// A scanned network endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    /// Scanned target (IP address or hostname), "Unknown" when absent
    pub address: String,

    /// Ports in discovery order, duplicates kept
    #[serde(default)]
    pub ports: Vec<Port>,
}

impl Host {
    /// Creates a host with no ports
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ports: Vec::new(),
        }
    }

    /// Appends a port, keeping discovery order
    pub fn add_port(&mut self, port: Port) {
        self.ports.push(port);
    }

    /// Returns the number of ports recorded for this host
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Returns true if any recorded port is open
    pub fn has_open_ports(&self) -> bool {
        self.ports.iter().any(Port::is_open)
    }
}

/// One discovered port on a host
///
/// `port_id` keeps the source representation: a bare number from XML
/// reports, `<number>/<protocol>` from text reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    /// Port identifier as found in the source; `null` in JSON when missing
    #[serde(default)]
    pub port_id: Option<String>,

    /// Protocol name, only known for XML reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Port state ("open", "closed", "filtered", ...); `null` in JSON when missing
    #[serde(default)]
    pub state: Option<String>,

    /// Service name, "Unknown" when absent
    pub service: String,

    /// Script output. XML ports always carry one (empty when absent);
    /// text report ports have none and omit the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Port {
    /// Creates an open port as reported by a text scan report
    ///
    /// # Examples
    ///
    /// ```
    /// use scanview_core::types::Port;
    ///
    /// let port = Port::open("443/tcp", "https");
    /// assert_eq!(port.port_id.as_deref(), Some("443/tcp"));
    /// assert_eq!(port.protocol, None);
    /// ```
    pub fn open(port_id: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            port_id: Some(port_id.into()),
            protocol: None,
            state: Some(STATE_OPEN.to_string()),
            service: service.into(),
            script: None,
        }
    }

    /// Returns true if the state is exactly "open"
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some(STATE_OPEN)
    }

    /// Returns the port identifier or an empty string
    pub fn port_id_str(&self) -> &str {
        self.port_id.as_deref().unwrap_or("")
    }

    /// Returns the script output or an empty string
    pub fn script_str(&self) -> &str {
        self.script.as_deref().unwrap_or("")
    }
}

/// Which parser produced a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    /// Nmap XML report (`-oX`)
    Structured,
    /// Nmap normal or grepable text report (`-oN` / `-oG`)
    LineOriented,
}

impl FormatKey {
    /// Both keys, in export order
    pub const ALL: [FormatKey; 2] = [FormatKey::Structured, FormatKey::LineOriented];

    /// Short identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::Structured => "structured",
            FormatKey::LineOriented => "lineOriented",
        }
    }

    /// Field name of this result set in the JSON export
    pub fn json_key(&self) -> &'static str {
        match self {
            FormatKey::Structured => "xmlResults",
            FormatKey::LineOriented => "grepResults",
        }
    }

    /// Section heading used by the results view
    pub fn title(&self) -> &'static str {
        match self {
            FormatKey::Structured => "XML Results",
            FormatKey::LineOriented => "Grepable Results",
        }
    }

    /// Detects the input format from a file extension
    ///
    /// `.xml` is structured; `.nmap`, `.gnmap` and `.txt` are line-oriented.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanview_core::types::FormatKey;
    ///
    /// assert_eq!(FormatKey::from_path("scan.xml").unwrap(), FormatKey::Structured);
    /// assert_eq!(FormatKey::from_path("scan.gnmap").unwrap(), FormatKey::LineOriented);
    /// assert!(FormatKey::from_path("scan.pdf").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xml") => Ok(FormatKey::Structured),
            Some("nmap") | Some("gnmap") | Some("txt") => Ok(FormatKey::LineOriented),
            _ => Err(Error::UnknownFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
