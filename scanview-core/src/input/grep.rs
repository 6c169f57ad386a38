//! Nmap text report parser
//!
//! Reads normal (`-oN`) style output line by line. A
//! `Nmap scan report for <name>` line starts a new host; a
//! `<number>/<proto>  open  <service>` line adds a port to the current
//! host. Only ports in state `open` are recognised; every other line is
//! skipped.

use crate::types::{Host, Port};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// The name stops at any line terminator, so CRLF input yields clean addresses.
static HOST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Nmap scan report for ([^\r\n\x{2028}\x{2029}]+)")
        .expect("host line pattern is valid")
});

static OPEN_PORT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+/[A-Za-z0-9_]+)\s+(open)\s+(\S+)").expect("port line pattern is valid")
});

/// Parser state between lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No host line seen yet
    #[default]
    Idle,
    /// Collecting ports for the most recent host line
    BuildingHost(Host),
}

/// Line-at-a-time accumulator for text reports
///
/// # Examples
///
/// ```
/// use scanview_core::input::grep::GrepParser;
///
/// let mut parser = GrepParser::new();
/// parser.feed_line("Nmap scan report for 10.0.0.1");
/// parser.feed_line("80/tcp   open  http");
/// let hosts = parser.finish();
///
/// assert_eq!(hosts.len(), 1);
/// assert_eq!(hosts[0].ports[0].port_id.as_deref(), Some("80/tcp"));
/// ```
#[derive(Debug, Default)]
pub struct GrepParser {
    state: ParserState,
    hosts: Vec<Host>,
}

impl GrepParser {
    /// Creates a parser in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Consumes one line (without its trailing `\n`)
    pub fn feed_line(&mut self, line: &str) {
        // Both patterns are checked on every line, host first.
        if let Some(caps) = HOST_LINE.captures(line) {
            let host = Host::new(&caps[1]);
            if let ParserState::BuildingHost(done) =
                std::mem::replace(&mut self.state, ParserState::BuildingHost(host))
            {
                self.hosts.push(done);
            }
        }

        if let ParserState::BuildingHost(ref mut host) = self.state {
            if let Some(caps) = OPEN_PORT_LINE.captures(line) {
                let mut port = Port::open(&caps[1], &caps[3]);
                port.state = Some(caps[2].to_string());
                host.add_port(port);
            }
        }
    }

    /// Flushes any host still being built and returns all hosts
    pub fn finish(mut self) -> Vec<Host> {
        if let ParserState::BuildingHost(host) = std::mem::take(&mut self.state) {
            self.hosts.push(host);
        }
        self.hosts
    }
}

/// Parses a text report into hosts
///
/// Lines are split on `\n`; a `\r` left by CRLF input ends the host name
/// like any other line terminator.
pub fn parse(text: &str) -> Vec<Host> {
    let mut parser = GrepParser::new();
    for line in text.split('\n') {
        parser.feed_line(line);
    }
    let hosts = parser.finish();
    debug!(hosts = hosts.len(), "parsed text report");
    hosts
}
