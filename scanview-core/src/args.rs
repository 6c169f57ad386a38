//! CLI argument parsing and validation
//!
//! Options follow Nmap's spelling where one exists (`-iL`-style input flags,
//! `-oX`-style output flags).
//!
//! # Examples
//!
//! ```
//! use scanview_core::args::ViewerArgs;
//!
//! let args = ViewerArgs::from_iter_safe(["scanview", "-iX", "scan.xml", "--filter", "http"]).unwrap();
//! assert_eq!(args.filter, "http");
//! assert!(args.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use crate::types::FormatKey;
use std::path::PathBuf;

/// Where an input report comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input (a pasted report)
    Stdin,
}

impl InputSource {
    fn from_arg(value: String) -> Self {
        if value == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(value))
        }
    }
}

/// One report to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    /// Parser to use, `None` to detect from the file extension
    pub format: Option<FormatKey>,
    /// Where to read the report from
    pub source: InputSource,
}

impl InputSpec {
    /// Parser to use for this input
    pub fn resolve_format(&self) -> Result<FormatKey> {
        match (self.format, &self.source) {
            (Some(key), _) => Ok(key),
            (None, InputSource::File(path)) => FormatKey::from_path(path),
            (None, InputSource::Stdin) => Err(Error::UnknownFormat(
                "stdin needs an explicit format (-iX - or -iG -)".to_string(),
            )),
        }
    }
}

/// Parsed and validated command-line arguments
#[derive(Debug, Clone, Default)]
pub struct ViewerArgs {
    // ===== INPUT =====
    /// Reports to load, in command-line order (-iX, -iG, -i)
    pub inputs: Vec<InputSpec>,

    // ===== FILTER =====
    /// Port/service filter text (-f, --filter)
    pub filter: String,
    /// Apply the filter to exports as well as the view (--filter-exports)
    pub filter_exports: bool,

    // ===== OUTPUT =====
    /// JSON export path (-oJ)
    pub output_json: Option<PathBuf>,
    /// CSV export path (-oC)
    pub output_csv: Option<PathBuf>,
    /// Directory for timestamped JSON and CSV exports (-oA)
    pub output_all: Option<PathBuf>,
    /// Do not print the results view (-q, --quiet)
    pub quiet: bool,

    // ===== VERBOSITY =====
    /// Debug logging (-v)
    pub verbose: bool,
    /// Trace logging (-d)
    pub debug: bool,

    // ===== HELP/VERSION =====
    /// Print version number (-V, --version)
    pub version: bool,
    /// Print help summary (-h, --help)
    pub help: bool,
}

impl ViewerArgs {
    /// Parse arguments from command-line iterator
    ///
    /// The first item is the program name and is skipped.
    pub fn from_iter_safe<I, S>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = iter.into_iter().map(|s| s.as_ref().to_string()).collect();
        if args.is_empty() {
            return Ok(Self::default());
        }
        Self::parse_args(&args[1..])
    }

    fn parse_args(tokens: &[String]) -> Result<Self> {
        let mut args = ViewerArgs::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];

            if !token.starts_with('-') || token == "-" {
                return Err(Error::InvalidInput(format!(
                    "Unexpected argument: {} (use -i <file>)",
                    token
                )));
            }

            // key=value form, e.g. --filter=http
            if let Some((key, value)) = token.split_once('=') {
                let key = key.trim_start_matches('-');
                if !Self::is_valid_arg(key) {
                    return Err(Error::InvalidInput(format!("Unknown argument: {}", key)));
                }
                Self::set_arg_value(&mut args, key, Some(value.to_string()))?;
                i += 1;
                continue;
            }

            let cleaned = token.trim_start_matches('-');
            if !Self::is_valid_arg(cleaned) {
                return Err(Error::InvalidInput(format!(
                    "Unknown argument: {}",
                    cleaned
                )));
            }

            if Self::arg_needs_value(cleaned) {
                // "-" is a valid value (stdin/stdout)
                match tokens.get(i + 1) {
                    Some(next) if next == "-" || !next.starts_with('-') => {
                        Self::set_arg_value(&mut args, cleaned, Some(next.clone()))?;
                        i += 1;
                    }
                    _ => {
                        return Err(Error::InvalidInput(format!(
                            "Argument -{} requires a value",
                            cleaned
                        )))
                    }
                }
            } else {
                Self::set_arg_value(&mut args, cleaned, None)?;
            }

            i += 1;
        }

        Ok(args)
    }

    fn arg_needs_value(arg: &str) -> bool {
        matches!(
            arg,
            "iX" | "iG" | "i" | "f" | "filter" | "oJ" | "oC" | "oA"
        )
    }

    fn is_valid_arg(arg: &str) -> bool {
        matches!(
            arg,
            // Input
            "iX" | "iG" | "i" |
            // Filter
            "f" | "filter" | "filter-exports" |
            // Output
            "oJ" | "oC" | "oA" | "q" | "quiet" |
            // Verbosity
            "v" | "d" |
            // Help/version
            "V" | "version" | "h" | "help"
        )
    }

    fn set_arg_value(args: &mut ViewerArgs, name: &str, value: Option<String>) -> Result<()> {
        let required = |value: Option<String>| {
            value.ok_or_else(|| Error::InvalidInput(format!("Argument -{} requires a value", name)))
        };

        match name {
            "iX" => args.inputs.push(InputSpec {
                format: Some(FormatKey::Structured),
                source: InputSource::from_arg(required(value)?),
            }),
            "iG" => args.inputs.push(InputSpec {
                format: Some(FormatKey::LineOriented),
                source: InputSource::from_arg(required(value)?),
            }),
            "i" => args.inputs.push(InputSpec {
                format: None,
                source: InputSource::from_arg(required(value)?),
            }),

            "f" | "filter" => args.filter = required(value)?,
            "filter-exports" => args.filter_exports = true,

            "oJ" => args.output_json = Some(PathBuf::from(required(value)?)),
            "oC" => args.output_csv = Some(PathBuf::from(required(value)?)),
            "oA" => args.output_all = Some(PathBuf::from(required(value)?)),
            "q" | "quiet" => args.quiet = true,

            "v" => args.verbose = true,
            "d" => args.debug = true,

            "V" | "version" => args.version = true,
            "h" | "help" => args.help = true,

            _ => {
                return Err(Error::InvalidInput(format!("Unknown argument: {}", name)));
            }
        }
        Ok(())
    }

    /// Validates the arguments
    ///
    /// # Examples
    ///
    /// ```
    /// use scanview_core::args::ViewerArgs;
    ///
    /// let args = ViewerArgs::from_iter_safe(["scanview"]).unwrap();
    /// assert!(args.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.help || self.version {
            return Ok(());
        }

        if self.inputs.is_empty() {
            return Err(Error::InvalidInput("No input reports specified".to_string()));
        }

        for input in &self.inputs {
            input.resolve_format()?;
        }

        let stdin_inputs = self
            .inputs
            .iter()
            .filter(|i| i.source == InputSource::Stdin)
            .count();
        if stdin_inputs > 1 {
            return Err(Error::InvalidInput(
                "Only one input can be read from stdin".to_string(),
            ));
        }

        if let Some(ref dir) = self.output_all {
            if dir.to_str() == Some("-") {
                return Err(Error::InvalidInput(
                    "Cannot write multiple export types to stdout".to_string(),
                ));
            }
        }

        let stdout_exports = [self.output_json.as_deref(), self.output_csv.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| p.to_str() == Some("-"))
            .count();
        if stdout_exports > 1 {
            return Err(Error::InvalidInput(
                "Cannot write multiple export types to stdout".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true if any export was requested
    pub fn wants_export(&self) -> bool {
        self.output_json.is_some() || self.output_csv.is_some() || self.output_all.is_some()
    }

    /// Filter text to apply to exports
    pub fn export_filter(&self) -> &str {
        if self.filter_exports {
            &self.filter
        } else {
            ""
        }
    }
}
