//! Port/service filtering
//!
//! The filter is a pure projection: stored hosts are never modified, a new
//! sequence is built on every call.

use crate::types::{Host, Port};

/// Keeps open ports whose service or port id matches `filter`
///
/// An empty filter returns the hosts unchanged. Otherwise a port is kept when
/// its state is exactly "open" and either its service name contains the
/// filter (case-insensitive) or its port id contains the filter
/// (case-sensitive). Hosts left with no ports are dropped.
///
/// # Examples
///
/// ```
/// use scanview_core::filter::filter_by_port_or_service;
/// use scanview_core::types::{Host, Port};
///
/// let mut host = Host::new("10.0.0.1");
/// host.add_port(Port::open("80/tcp", "http"));
/// host.add_port(Port::open("22/tcp", "ssh"));
///
/// let filtered = filter_by_port_or_service(&[host], "HTTP");
/// assert_eq!(filtered[0].ports.len(), 1);
/// ```
pub fn filter_by_port_or_service(hosts: &[Host], filter: &str) -> Vec<Host> {
    if filter.is_empty() {
        return hosts.to_vec();
    }

    let needle = filter.to_lowercase();
    hosts
        .iter()
        .filter_map(|host| {
            let ports: Vec<Port> = host
                .ports
                .iter()
                .filter(|port| port_matches(port, filter, &needle))
                .cloned()
                .collect();

            if ports.is_empty() {
                None
            } else {
                Some(Host {
                    address: host.address.clone(),
                    ports,
                })
            }
        })
        .collect()
}

fn port_matches(port: &Port, filter: &str, lowered: &str) -> bool {
    port.is_open()
        && (port.service.to_lowercase().contains(lowered)
            || port.port_id.as_deref().is_some_and(|id| id.contains(filter)))
}
