//! Scanview Core Library
//!
//! This library turns Nmap scan reports into a normalized list of hosts and
//! their ports, filters them by port or service, and exports them as JSON or
//! CSV. It never runs a scan itself.
//!
//! # Modules
//!
//! - [`args`] - CLI argument parsing and validation
//! - [`input`] - Report parsers (Nmap XML and text output)
//! - [`store`] - Per-format result storage
//! - [`filter`] - Port/service filtering
//! - [`output`] - JSON/CSV exports and the text results view
//! - [`types`] - Core data structures for hosts and ports
//!
//! # Example
//!
//! ```
//! use scanview_core::{filter::filter_by_port_or_service, input, store::ResultStore};
//! use scanview_core::output::export_csv;
//! use scanview_core::types::FormatKey;
//!
//! let report = "Nmap scan report for 10.0.0.1\n80/tcp   open  http\n443/tcp  open  https\n";
//! let mut store = ResultStore::new();
//! store.record_result(FormatKey::LineOriented, input::parse(report, FormatKey::LineOriented));
//!
//! let web = filter_by_port_or_service(store.results(FormatKey::LineOriented), "http");
//! assert_eq!(web[0].ports.len(), 2);
//!
//! let csv = export_csv(&store);
//! assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 3);
//! ```

pub mod args;
pub mod error;
pub mod filter;
pub mod input;
pub mod output;
pub mod store;
pub mod types;

pub use error::{Error, Result};
