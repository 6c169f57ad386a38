//! Example: Parsing both report formats and exporting them
//!
//! This example parses a small XML report and a pasted text report, prints
//! the results view, and writes both exports to stdout.

use scanview_core::input;
use scanview_core::output::{export_csv, export_filename, export_json, render_view, ExportFormat};
use scanview_core::store::ResultStore;
use scanview_core::types::FormatKey;

const XML_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -sV --script vuln 192.168.1.100">
<host><status state="up"/>
<address addr="192.168.1.100" addrtype="ipv4"/>
<ports>
<port protocol="tcp" portid="22"><state state="open"/><service name="ssh" product="OpenSSH"/></port>
<port protocol="tcp" portid="80"><state state="open"/><service name="http"/><script id="http-csrf" output="Couldn&apos;t find any CSRF vulnerabilities."/></port>
</ports>
</host>
</nmaprun>
"#;

const PASTED_REPORT: &str = "Nmap scan report for server2.example.com (192.168.1.101)
Host is up (0.00050s latency).
PORT    STATE  SERVICE
443/tcp open   https
25/tcp  closed smtp
";

fn main() {
    let mut store = ResultStore::new();
    store.record_result(
        FormatKey::Structured,
        input::parse(XML_REPORT, FormatKey::Structured),
    );
    store.record_result(
        FormatKey::LineOriented,
        input::parse(PASTED_REPORT, FormatKey::LineOriented),
    );

    println!("=== VIEW ===\n");
    print!("{}", render_view(&store, ""));

    println!("\n=== VIEW (filter: http) ===\n");
    print!("{}", render_view(&store, "http"));

    let now = chrono::Utc::now();

    println!("\n=== {} ===\n", export_filename(ExportFormat::Json, now));
    match export_json(&store) {
        Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        Err(e) => eprintln!("JSON export failed: {}", e),
    }

    println!("\n=== {} ===\n", export_filename(ExportFormat::Csv, now));
    println!("{}", String::from_utf8_lossy(&export_csv(&store)));
}
