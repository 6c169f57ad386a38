//! CSV export
//!
//! One header row, then one row per port: XML results first, then text
//! results, each in host order and port order. Every field is wrapped in
//! double quotes. Rows are separated by `\n` with no trailing newline.
//! XML fields missing from the source (port id, protocol, state) are
//! written as empty strings.

use crate::store::ResultStore;
use crate::types::{FormatKey, Host, Port};

/// Fixed header row
pub const HEADER: [&str; 6] = ["Host", "Port", "Protocol", "State", "Service", "Script"];

/// Placeholder for columns a text report never carries
pub const PLACEHOLDER: &str = "-";

/// Encodes every port in the store as CSV
///
/// # Examples
///
/// ```
/// use scanview_core::output::csv::export_csv;
/// use scanview_core::store::ResultStore;
/// use scanview_core::types::{FormatKey, Host, Port};
///
/// let mut host = Host::new("10.0.0.1");
/// host.add_port(Port::open("80/tcp", "http"));
/// let mut store = ResultStore::new();
/// store.record_result(FormatKey::LineOriented, vec![host]);
///
/// let csv = String::from_utf8(export_csv(&store)).unwrap();
/// assert_eq!(
///     csv,
///     "\"Host\",\"Port\",\"Protocol\",\"State\",\"Service\",\"Script\"\n\
///      \"10.0.0.1\",\"80/tcp\",\"-\",\"open\",\"http\",\"-\""
/// );
/// ```
pub fn export_csv(store: &ResultStore) -> Vec<u8> {
    let mut rows = vec![format_row(&HEADER)];

    for host in store.results(FormatKey::Structured) {
        for port in &host.ports {
            rows.push(format_row(&structured_row(host, port)));
        }
    }

    for host in store.results(FormatKey::LineOriented) {
        for port in &host.ports {
            rows.push(format_row(&line_oriented_row(host, port)));
        }
    }

    rows.join("\n").into_bytes()
}

fn structured_row<'a>(host: &'a Host, port: &'a Port) -> [std::borrow::Cow<'a, str>; 6] {
    [
        host.address.as_str().into(),
        port.port_id_str().into(),
        port.protocol.as_deref().unwrap_or("").into(),
        port.state.as_deref().unwrap_or("").into(),
        port.service.as_str().into(),
        port.script_str().replace('\n', " ").into(),
    ]
}

fn line_oriented_row<'a>(host: &'a Host, port: &'a Port) -> [std::borrow::Cow<'a, str>; 6] {
    [
        host.address.as_str().into(),
        port.port_id_str().into(),
        PLACEHOLDER.into(),
        port.state.as_deref().unwrap_or("").into(),
        port.service.as_str().into(),
        PLACEHOLDER.into(),
    ]
}

fn format_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps a field in quotes, doubling any embedded quote
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_ROW: &str = r#""Host","Port","Protocol","State","Service","Script""#;

    fn xml_port(id: &str, service: &str, script: &str) -> Port {
        Port {
            port_id: Some(id.to_string()),
            protocol: Some("tcp".to_string()),
            state: Some("open".to_string()),
            service: service.to_string(),
            script: Some(script.to_string()),
        }
    }

    fn to_string(store: &ResultStore) -> String {
        String::from_utf8(export_csv(store)).unwrap()
    }

    #[test]
    fn test_empty_store_is_header_only() {
        assert_eq!(to_string(&ResultStore::new()), HEADER_ROW);
    }

    #[test]
    fn test_structured_rows() {
        let mut host = Host::new("10.0.0.1");
        host.add_port(xml_port("80", "http", "VULNERABLE:\nSlowloris\n"));
        let mut store = ResultStore::new();
        store.record_result(FormatKey::Structured, vec![host]);

        let csv = to_string(&store);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#""10.0.0.1","80","tcp","open","http","VULNERABLE: Slowloris ""#
        );
    }

    #[test]
    fn test_structured_rows_before_line_oriented_rows() {
        let mut grep_host = Host::new("g");
        grep_host.add_port(Port::open("22/tcp", "ssh"));
        let mut xml_host = Host::new("x");
        xml_host.add_port(xml_port("443", "https", ""));
        xml_host.add_port(xml_port("80", "http", ""));

        let mut store = ResultStore::new();
        store.record_result(FormatKey::LineOriented, vec![grep_host]);
        store.record_result(FormatKey::Structured, vec![xml_host]);

        let csv = to_string(&store);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                HEADER_ROW,
                r#""x","443","tcp","open","https","""#,
                r#""x","80","tcp","open","http","""#,
                r#""g","22/tcp","-","open","ssh","-""#,
            ]
        );
    }

    #[test]
    fn test_missing_structured_fields_are_empty() {
        let mut host = Host::new("h");
        host.add_port(Port {
            port_id: None,
            protocol: None,
            state: None,
            service: "Unknown".to_string(),
            script: None,
        });
        let mut store = ResultStore::new();
        store.record_result(FormatKey::Structured, vec![host]);

        assert!(to_string(&store).ends_with(r#""h","","","","Unknown","""#));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut host = Host::new("h");
        host.add_port(xml_port("80", "http", r#"title: "Admin""#));
        let mut store = ResultStore::new();
        store.record_result(FormatKey::Structured, vec![host]);

        assert!(to_string(&store).ends_with(r#""title: ""Admin""""#));
    }

    #[test]
    fn test_row_count_matches_port_count() {
        let mut a = Host::new("a");
        a.add_port(xml_port("1", "x", ""));
        a.add_port(xml_port("2", "y", ""));
        let mut b = Host::new("b");
        b.add_port(Port::open("3/tcp", "z"));

        let mut store = ResultStore::new();
        store.record_result(FormatKey::Structured, vec![a, Host::new("empty")]);
        store.record_result(FormatKey::LineOriented, vec![b]);

        let csv = to_string(&store);
        assert_eq!(csv.split('\n').count(), store.port_count() + 1);
    }
}
