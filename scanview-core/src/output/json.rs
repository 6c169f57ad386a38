//! JSON export

use crate::error::Result;
use crate::store::ResultStore;

/// Serializes the whole store as pretty-printed JSON
///
/// The document is the store itself: an object with an `xmlResults` and/or
/// `grepResults` array for each populated slot, indented by two spaces.
///
/// # Examples
///
/// ```
/// use scanview_core::output::json::export_json;
/// use scanview_core::store::ResultStore;
/// use scanview_core::types::{FormatKey, Host};
///
/// let mut store = ResultStore::new();
/// store.record_result(FormatKey::LineOriented, vec![Host::new("10.0.0.1")]);
///
/// let bytes = export_json(&store).unwrap();
/// assert!(String::from_utf8(bytes).unwrap().starts_with("{\n  \"grepResults\""));
/// ```
pub fn export_json(store: &ResultStore) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(store)?)
}

/// Reads a store back from an [`export_json`] document
pub fn import_json(bytes: &[u8]) -> Result<ResultStore> {
    Ok(serde_json::from_slice(bytes)?)
}
