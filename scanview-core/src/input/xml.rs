//! Nmap XML (`-oX`) report parser
//!
//! Every `host` element becomes a [`Host`]; every `port` element below it
//! becomes a [`Port`]. Lookups search all descendants and take the first
//! match in document order, so reports with extra wrapper elements still
//! parse.

use crate::error::Result;
use crate::types::{Host, Port, UNKNOWN};
use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, warn};

/// Parses an XML report, failing on malformed markup
///
/// # Examples
///
/// ```
/// use scanview_core::input::xml::try_parse;
///
/// let hosts = try_parse(r#"<nmaprun><host><address addr="10.0.0.1"/></host></nmaprun>"#).unwrap();
/// assert_eq!(hosts[0].address, "10.0.0.1");
/// assert!(try_parse("<nmaprun><host>").is_err());
/// ```
pub fn try_parse(text: &str) -> Result<Vec<Host>> {
    // Nmap writes `<!DOCTYPE nmaprun>`, which roxmltree rejects by default.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;

    let hosts: Vec<Host> = doc
        .descendants()
        .filter(|n| is_element(n, "host"))
        .map(host_from_node)
        .collect();

    debug!(hosts = hosts.len(), "parsed XML report");
    Ok(hosts)
}

/// Parses an XML report, yielding no hosts for malformed markup
pub fn parse(text: &str) -> Vec<Host> {
    match try_parse(text) {
        Ok(hosts) => hosts,
        Err(e) => {
            warn!("ignoring malformed XML report: {}", e);
            Vec::new()
        }
    }
}

fn host_from_node(host: Node<'_, '_>) -> Host {
    let address = first_descendant(host, "address")
        .and_then(|n| attribute(n, "addr"))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let ports = host
        .descendants()
        .filter(|n| is_element(n, "port"))
        .map(port_from_node)
        .collect();

    Host { address, ports }
}

fn port_from_node(port: Node<'_, '_>) -> Port {
    Port {
        port_id: port.attribute("portid").map(str::to_string),
        protocol: port.attribute("protocol").map(str::to_string),
        state: first_descendant(port, "state")
            .and_then(|n| n.attribute("state"))
            .map(str::to_string),
        service: first_descendant(port, "service")
            .and_then(|n| attribute(n, "name"))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        script: Some(
            first_descendant(port, "script")
                .and_then(|n| attribute(n, "output"))
                .unwrap_or_default(),
        ),
    }
}

fn is_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// First element named `name` below `node`, in document order
fn first_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| is_element(n, name))
}

/// Attribute value, treating an empty value as missing
fn attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
