//! Run configuration and fixed layout constants.
//!
//! Values are read from the environment (a `.env` file is loaded by `main`).

use std::error::Error;
use std::path::PathBuf;

/// Separator between the three segments of a text fact.
pub const TRIPLE_SEPARATOR: &str = " --> ";

/// Character written over masked positions in demo mode.
pub const MASK_GLYPH: char = 'x';

/// Width of the console divider line.
pub const DIVIDER_WIDTH: usize = 80;

/// Minimum width of the CIDR column in the console summary.
pub const CIDR_COLUMN_WIDTH: usize = 18;

/// Minimum width of the occurrence count column in the console summary.
pub const COUNT_COLUMN_WIDTH: usize = 4;

/// Default file name stem when no target is configured.
pub const DEFAULT_TARGET: &str = "report";

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stem of the report file name, `<target>_<date>.txt`.
    pub target: String,
    /// Mask names, addresses and netblocks in every output.
    pub demo: bool,
    /// Colorize console output.
    pub color: bool,
    /// Directory the report file is written to.
    pub output_dir: PathBuf,
    /// Text facts, one `A --> B --> C` line each.
    pub records_file: Option<PathBuf>,
    /// JSON array of discovered names with their addresses.
    pub names_file: Option<PathBuf>,
    /// Keep IPv4 addresses in per-name lines.
    pub ipv4: bool,
    /// Keep IPv6 addresses in per-name lines.
    pub ipv6: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: DEFAULT_TARGET.to_string(),
            demo: false,
            color: true,
            output_dir: PathBuf::from("."),
            records_file: None,
            names_file: None,
            ipv4: true,
            ipv6: true,
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// Unset keys keep their [`Default`] value, blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Config::default();

        if let Some(target) = get("SUMMARY_TARGET") {
            config.target = target;
        }
        if let Some(value) = get("SUMMARY_DEMO") {
            config.demo = parse_bool("SUMMARY_DEMO", &value)?;
        }
        if let Some(value) = get("SUMMARY_COLOR") {
            config.color = parse_bool("SUMMARY_COLOR", &value)?;
        }
        if let Some(dir) = get("SUMMARY_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        config.records_file = get("SUMMARY_RECORDS").map(PathBuf::from);
        config.names_file = get("SUMMARY_NAMES").map(PathBuf::from);
        if let Some(value) = get("SUMMARY_IPV4") {
            config.ipv4 = parse_bool("SUMMARY_IPV4", &value)?;
        }
        if let Some(value) = get("SUMMARY_IPV6") {
            config.ipv6 = parse_bool("SUMMARY_IPV6", &value)?;
        }

        log::debug!("config loaded: {:?}", config);
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid boolean for {key}: '{other}'").into()),
    }
}
