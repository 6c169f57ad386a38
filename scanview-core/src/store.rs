//! In-memory result store
//!
//! Holds at most one [`ResultSet`] per [`FormatKey`]. Recording a result
//! replaces the slot for that key and leaves the other slot alone. The store
//! is owned by the caller; nothing here is global.
//!
//! # Examples
//!
//! ```
//! use scanview_core::input;
//! use scanview_core::store::ResultStore;
//! use scanview_core::types::FormatKey;
//!
//! let mut store = ResultStore::new();
//! let text = "Nmap scan report for 10.0.0.1\n80/tcp open http\n";
//! store.record_result(FormatKey::LineOriented, input::parse(text, FormatKey::LineOriented));
//!
//! assert_eq!(store.results(FormatKey::LineOriented).len(), 1);
//! assert!(store.get(FormatKey::Structured).is_none());
//! ```

use crate::filter::filter_by_port_or_service;
use crate::types::{FormatKey, Host, ResultSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parse results keyed by input format
///
/// Serializes as `{ "xmlResults": [...], "grepResults": [...] }`, leaving out
/// empty slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xml_results: Option<ResultSet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    grep_results: Option<ResultSet>,
}

impl ResultStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: FormatKey) -> &Option<ResultSet> {
        match key {
            FormatKey::Structured => &self.xml_results,
            FormatKey::LineOriented => &self.grep_results,
        }
    }

    fn slot_mut(&mut self, key: FormatKey) -> &mut Option<ResultSet> {
        match key {
            FormatKey::Structured => &mut self.xml_results,
            FormatKey::LineOriented => &mut self.grep_results,
        }
    }

    /// Replaces the result set stored for `key`
    pub fn record_result(&mut self, key: FormatKey, hosts: ResultSet) {
        let previous = self.slot_mut(key).replace(hosts);
        debug!(
            key = key.as_str(),
            replaced = previous.is_some(),
            "recorded result set"
        );
    }

    /// Result set for `key`, if one has been recorded
    pub fn get(&self, key: FormatKey) -> Option<&[Host]> {
        self.slot(key).as_deref()
    }

    /// Result set for `key`, empty if none has been recorded
    pub fn results(&self, key: FormatKey) -> &[Host] {
        self.get(key).unwrap_or(&[])
    }

    /// Filtered view of the result set for `key`
    pub fn filtered(&self, key: FormatKey, filter: &str) -> Vec<Host> {
        filter_by_port_or_service(self.results(key), filter)
    }

    /// New store holding the filtered view of every populated slot
    pub fn filtered_store(&self, filter: &str) -> ResultStore {
        let mut store = ResultStore::new();
        for key in FormatKey::ALL {
            if let Some(hosts) = self.get(key) {
                *store.slot_mut(key) = Some(filter_by_port_or_service(hosts, filter));
            }
        }
        store
    }

    /// Returns true if no result set has been recorded
    pub fn is_empty(&self) -> bool {
        self.xml_results.is_none() && self.grep_results.is_none()
    }

    /// Number of hosts across both result sets
    pub fn host_count(&self) -> usize {
        FormatKey::ALL.iter().map(|k| self.results(*k).len()).sum()
    }

    /// Number of ports across both result sets
    pub fn port_count(&self) -> usize {
        FormatKey::ALL
            .iter()
            .flat_map(|k| self.results(*k))
            .map(Host::port_count)
            .sum()
    }
}
