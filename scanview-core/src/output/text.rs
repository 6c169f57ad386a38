//! Human-readable results view

use crate::store::ResultStore;
use crate::types::{FormatKey, Host};
use std::fmt::Write;

/// Renders both result sets, each filtered by `filter`
///
/// ```text
/// XML Results
/// Host: 10.0.0.1
///   - Port 80/tcp - open - http
///       Vuln: VULNERABLE: Slowloris
///
/// Grepable Results
/// Host: 10.0.0.2
///   - Port 22/tcp - open - ssh
/// ```
pub fn render_view(store: &ResultStore, filter: &str) -> String {
    let mut out = String::new();
    for (i, key) in FormatKey::ALL.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let hosts = store.filtered(*key, filter);
        render_section(&mut out, *key, &hosts);
    }
    out
}

/// Renders one section with its heading
pub fn render_section(out: &mut String, key: FormatKey, hosts: &[Host]) {
    let _ = writeln!(out, "{}", key.title());
    if hosts.is_empty() {
        out.push_str("  (no results)\n");
        return;
    }

    for host in hosts {
        let _ = writeln!(out, "Host: {}", host.address);
        for port in &host.ports {
            let state = port.state.as_deref().unwrap_or("");
            match key {
                FormatKey::Structured => {
                    let protocol = port.protocol.as_deref().unwrap_or("");
                    let _ = writeln!(
                        out,
                        "  - Port {}/{} - {} - {}",
                        port.port_id_str(),
                        protocol,
                        state,
                        port.service
                    );
                    if !port.script_str().is_empty() {
                        let _ = writeln!(out, "      Vuln: {}", port.script_str());
                    }
                }
                FormatKey::LineOriented => {
                    let _ = writeln!(
                        out,
                        "  - Port {} - {} - {}",
                        port.port_id_str(),
                        state,
                        port.service
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;

    fn store() -> ResultStore {
        let mut xml_host = Host::new("10.0.0.1");
        xml_host.add_port(Port {
            port_id: Some("80".to_string()),
            protocol: Some("tcp".to_string()),
            state: Some("open".to_string()),
            service: "http".to_string(),
            script: Some("VULNERABLE: Slowloris".to_string()),
        });
        xml_host.add_port(Port {
            port_id: Some("22".to_string()),
            protocol: Some("tcp".to_string()),
            state: Some("open".to_string()),
            service: "ssh".to_string(),
            script: Some(String::new()),
        });

        let mut grep_host = Host::new("10.0.0.2");
        grep_host.add_port(Port::open("22/tcp", "ssh"));

        let mut store = ResultStore::new();
        store.record_result(FormatKey::Structured, vec![xml_host]);
        store.record_result(FormatKey::LineOriented, vec![grep_host]);
        store
    }

    #[test]
    fn test_render_full_view() {
        let view = render_view(&store(), "");
        assert_eq!(
            view,
            "XML Results\n\
             Host: 10.0.0.1\n\
             \x20 - Port 80/tcp - open - http\n\
             \x20     Vuln: VULNERABLE: Slowloris\n\
             \x20 - Port 22/tcp - open - ssh\n\
             \n\
             Grepable Results\n\
             Host: 10.0.0.2\n\
             \x20 - Port 22/tcp - open - ssh\n"
        );
    }

    #[test]
    fn test_render_filtered_view() {
        let view = render_view(&store(), "http");
        assert!(view.contains("Port 80/tcp"));
        assert!(!view.contains("ssh"));
        assert!(view.contains("Grepable Results\n  (no results)\n"));
    }

    #[test]
    fn test_render_empty_store() {
        let view = render_view(&ResultStore::new(), "");
        assert_eq!(
            view,
            "XML Results\n  (no results)\n\nGrepable Results\n  (no results)\n"
        );
    }
}
