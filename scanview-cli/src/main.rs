//! Scanview - Nmap scan result viewer CLI
//!
//! Loads Nmap XML and text reports, prints the hosts and open ports found in
//! them (optionally filtered by port or service), and exports the results as
//! JSON or CSV.

use anyhow::Context;
use chrono::Utc;
use scanview_core::{
    args::{InputSource, InputSpec, ViewerArgs},
    input,
    output::{export, export_filename, render_view, ExportFormat, OutputWriter},
    store::ResultStore,
    types::FormatKey,
};
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match ViewerArgs::from_iter_safe(env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging(&args);

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` takes precedence over -v/-d
fn init_logging(args: &ViewerArgs) {
    let default_level = if args.debug {
        "trace"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: ViewerArgs) -> anyhow::Result<()> {
    if args.help {
        print_help();
        return Ok(());
    }

    if args.version {
        println!("Scanview {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    args.validate()?;

    let store = load_inputs(&args.inputs).await?;
    info!(
        hosts = store.host_count(),
        ports = store.port_count(),
        "loaded scan results"
    );

    let export_to_stdout = [args.output_json.as_deref(), args.output_csv.as_deref()]
        .into_iter()
        .flatten()
        .any(|p| p.to_str() == Some("-"));

    if !args.quiet && !export_to_stdout {
        print!("{}", render_view(&store, &args.filter));
    }

    if args.wants_export() {
        write_exports(&args, &store)?;
    }

    Ok(())
}

/// Reads every input concurrently and records each one as it completes
///
/// When two inputs share a format, whichever finishes reading last wins.
async fn load_inputs(inputs: &[InputSpec]) -> anyhow::Result<ResultStore> {
    let mut tasks = JoinSet::new();

    for spec in inputs {
        let key = spec.resolve_format()?;
        let source = spec.source.clone();
        tasks.spawn(async move {
            let bytes = read_source(&source).await;
            (key, source, bytes)
        });
    }

    let mut store = ResultStore::new();
    while let Some(joined) = tasks.join_next().await {
        let (key, source, bytes) = joined.context("input task failed")?;
        let bytes = bytes.with_context(|| format!("failed to read {}", describe(&source)))?;

        let hosts = input::parse(&input::decode_report(&bytes), key);
        debug!(
            source = %describe(&source),
            key = key.as_str(),
            hosts = hosts.len(),
            "parsed input"
        );
        store.record_result(key, hosts);
    }

    Ok(store)
}

/// Reads raw bytes; decoding is left to the parser side
async fn read_source(source: &InputSource) -> std::io::Result<Vec<u8>> {
    match source {
        InputSource::File(path) => tokio::fs::read(path).await,
        InputSource::Stdin => {
            let mut bytes = Vec::new();
            tokio::io::stdin().read_to_end(&mut bytes).await?;
            Ok(bytes)
        }
    }
}

fn describe(source: &InputSource) -> String {
    match source {
        InputSource::File(path) => path.display().to_string(),
        InputSource::Stdin => "stdin".to_string(),
    }
}

/// Writes the requested exports, all stamped with the same time
fn write_exports(args: &ViewerArgs, store: &ResultStore) -> anyhow::Result<()> {
    let filtered;
    let store = if args.export_filter().is_empty() {
        store
    } else {
        filtered = store.filtered_store(args.export_filter());
        &filtered
    };

    let now = Utc::now();
    let mut targets: Vec<(ExportFormat, PathBuf)> = Vec::new();

    if let Some(ref dir) = args.output_all {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for format in [ExportFormat::Json, ExportFormat::Csv] {
            targets.push((format, dir.join(export_filename(format, now))));
        }
    }
    if let Some(ref path) = args.output_json {
        targets.push((ExportFormat::Json, path.clone()));
    }
    if let Some(ref path) = args.output_csv {
        targets.push((ExportFormat::Csv, path.clone()));
    }

    for (format, path) in targets {
        write_export(store, format, &path)?;
    }
    Ok(())
}

fn write_export(store: &ResultStore, format: ExportFormat, path: &Path) -> anyhow::Result<()> {
    let bytes = export(store, format)?;
    let mut writer = OutputWriter::for_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writer
        .write_bytes(&bytes)
        .with_context(|| format!("failed to write {}", writer.destination()))?;

    if writer.destination() != "-" {
        info!(
            format = format.extension(),
            destination = writer.destination(),
            bytes = bytes.len(),
            "wrote export"
        );
    }
    Ok(())
}

/// Print help message
fn print_help() {
    let sections: Vec<String> = FormatKey::ALL
        .iter()
        .map(|k| format!("{} ({})", k.title(), k.json_key()))
        .collect();

    println!(
        r#"Scanview - Nmap scan result viewer v{}

USAGE:
    scanview [OPTIONS] -iX <file.xml> | -iG <file.nmap> | -i <file>

INPUT:
    -iX <file>              Nmap XML report (-oX); "-" reads stdin
    -iG <file>              Nmap text report (-oN/-oG); "-" reads pasted output from stdin
    -i <file>               Detect format from extension (.xml, .nmap, .gnmap, .txt)

FILTER:
    -f, --filter <text>     Show open ports whose service or port id contains <text>
    --filter-exports        Apply the filter to exports too

OUTPUT:
    -oJ <file>              JSON export ("-" for stdout)
    -oC <file>              CSV export ("-" for stdout)
    -oA <dir>               Both exports into <dir> as nmap_results_<timestamp>.json/.csv
    -q, --quiet             Do not print the results view

MISC:
    -v                      Debug logging (RUST_LOG overrides)
    -d                      Trace logging
    -V, --version           Print version
    -h, --help              Print this help

Results view sections: {}
"#,
        env!("CARGO_PKG_VERSION"),
        sections.join(", ")
    );
}
