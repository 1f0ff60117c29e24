//! Command line interface for the mtex table generator
//!
//! Handles parsing command line arguments and merging them with the user
//! settings file `~/.config/mtex/settings.json`. That file only holds the
//! fields of [`ConfigFile`], the oracle and its interpreter plus the two
//! output directories. When both set a value, the command line wins.

use crate::core::config_file::ConfigFile;
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Where measurements come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleKind {
    /// The embedded DejaVu Sans fonts, measured in process
    #[default]
    Font,
    /// matplotlib's mathtext, run through a Python interpreter
    Matplotlib,
}

/// mtex CLI arguments
///
/// Examples:
///   mtex                              # Regenerate tables from the embedded fonts
///   mtex --check                      # Fail if the committed tables are stale
///   mtex --from-json                  # Rebuild tables from testdata/*.json
///   mtex --oracle matplotlib          # Measure with matplotlib instead
///   mtex --out-dir /tmp/gen -v        # Write elsewhere with debug logging
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "mtex",
    version,
    about = "Generate the glyph metrics tables of the mtex fake backend",
    long_about = "mtex measures every planned symbol, font and size with an oracle, checks that the result covers the plan exactly, and writes the static Rust tables served by the fake backend together with their JSON interchange files."
)]
pub struct CliArgs {
    #[clap(
        long = "oracle",
        value_enum,
        help = "Oracle to measure with",
        long_help = "Oracle to measure with. `font` measures the embedded DejaVu Sans fonts in process (default), `matplotlib` runs matplotlib's mathtext in a Python subprocess."
    )]
    pub oracle: Option<OracleKind>,

    #[clap(
        long = "python",
        help = "Python interpreter for the matplotlib oracle",
        long_help = "Python interpreter used by the matplotlib oracle. It must be able to import matplotlib. Defaults to `python`."
    )]
    pub python: Option<String>,

    /// Skip the oracle and rebuild the tables from persisted records
    #[clap(
        long = "from-json",
        conflicts_with = "oracle",
        help = "Rebuild tables from the JSON interchange files",
        long_help = "Skip measuring and rebuild the Rust tables from the JSON interchange files of an earlier run, read from the testdata directory."
    )]
    pub from_json: bool,

    #[clap(
        long = "out-dir",
        help = "Directory receiving fonts_gen.rs and kerns_gen.rs",
        long_help = "Directory receiving the generated fonts_gen.rs and kerns_gen.rs. Defaults to src/fakebackend."
    )]
    pub out_dir: Option<PathBuf>,

    #[clap(
        long = "testdata-dir",
        help = "Directory of the JSON interchange files",
        long_help = "Directory the JSON interchange files are written to, and read from with --from-json. Defaults to testdata."
    )]
    pub testdata_dir: Option<PathBuf>,

    #[clap(
        long = "no-testdata",
        help = "Do not write the JSON interchange files"
    )]
    pub no_testdata: bool,

    /// Compare instead of writing
    #[clap(
        long = "check",
        help = "Fail if any generated file is out of date",
        long_help = "Render every output and compare it with the file on disk. Nothing is written; the run fails if any file differs or is missing."
    )]
    pub check: bool,

    #[clap(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v debug, -vv trace)"
    )]
    pub verbose: u8,

    #[clap(
        long = "log-file",
        help = "Also write logs to ~/.config/mtex/logs/"
    )]
    pub log_file: bool,

    /// Initialize user configuration directory with settings
    ///
    /// This creates the ~/.config/mtex directory with:
    /// - settings.json: defaults for every option above
    /// - logs/: where --log-file writes
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/mtex directory with a settings.json file holding the default of every option, and a logs directory."
    )]
    pub new_config: bool,
}

/// Options of one generator run after merging CLI, settings file and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub oracle: OracleKind,
    pub python: String,
    pub from_json: bool,
    pub out_dir: PathBuf,
    pub testdata_dir: PathBuf,
    pub write_testdata: bool,
    pub check: bool,
}

pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_OUT_DIR: &str = "src/fakebackend";
pub const DEFAULT_TESTDATA_DIR: &str = "testdata";

impl CliArgs {
    /// Merge the arguments with `config`.
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/mtex/settings.json)
    /// 3. Built-in default
    pub fn settings(&self, config: Option<&ConfigFile>) -> Settings {
        let oracle = self
            .oracle
            .or_else(|| config.and_then(|c| c.oracle))
            .unwrap_or_default();
        let python = self
            .python
            .clone()
            .or_else(|| config.and_then(|c| c.python.clone()))
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
        let out_dir = self
            .out_dir
            .clone()
            .or_else(|| config.and_then(|c| c.out_dir.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
        let testdata_dir = self
            .testdata_dir
            .clone()
            .or_else(|| config.and_then(|c| c.testdata_dir.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TESTDATA_DIR));

        debug!("Using {:?} oracle, writing to {}", oracle, out_dir.display());
        Settings {
            oracle,
            python,
            from_json: self.from_json,
            out_dir,
            testdata_dir,
            write_testdata: !self.no_testdata,
            check: self.check,
        }
    }
}

impl Settings {
    /// Validate the merged settings before anything runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.from_json && !self.testdata_dir.is_dir() {
            return Err(format!(
                "Testdata directory does not exist: {}\n--from-json reads the interchange files of an earlier run from there.",
                self.testdata_dir.display()
            ));
        }

        if self.out_dir.is_file() {
            return Err(format!(
                "Output path is a file: {}\nExpected a directory for fonts_gen.rs and kerns_gen.rs.",
                self.out_dir.display()
            ));
        }

        if self.python.trim().is_empty() {
            return Err("Python interpreter name is empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["mtex"]);
        let settings = args.settings(None);
        assert_eq!(settings.oracle, OracleKind::Font);
        assert_eq!(settings.python, "python");
        assert_eq!(settings.out_dir, PathBuf::from("src/fakebackend"));
        assert_eq!(settings.testdata_dir, PathBuf::from("testdata"));
        assert!(settings.write_testdata);
        assert!(!settings.check);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let config = ConfigFile {
            oracle: Some(OracleKind::Matplotlib),
            python: Some("python3".to_string()),
            out_dir: Some(PathBuf::from("/from/config")),
            testdata_dir: None,
        };

        let settings = CliArgs::parse_from(["mtex", "--oracle", "font"]).settings(Some(&config));
        assert_eq!(settings.oracle, OracleKind::Font);
        assert_eq!(settings.python, "python3");
        assert_eq!(settings.out_dir, PathBuf::from("/from/config"));
        assert_eq!(settings.testdata_dir, PathBuf::from("testdata"));
    }

    #[test]
    fn test_flags_parse() {
        let args = CliArgs::parse_from(["mtex", "--from-json", "--no-testdata", "--check", "-vv"]);
        assert!(args.from_json && args.no_testdata && args.check);
        assert_eq!(args.verbose, 2);
        assert!(CliArgs::try_parse_from(["mtex", "--from-json", "--oracle", "font"]).is_err());
        assert!(CliArgs::try_parse_from(["mtex", "--oracle", "fontforge"]).is_err());
    }

    #[test]
    fn test_validate_from_json_needs_testdata() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = CliArgs::parse_from(["mtex", "--from-json"]).settings(None);
        settings.testdata_dir = dir.path().join("missing");
        assert!(settings.validate().is_err());

        settings.testdata_dir = dir.path().to_path_buf();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_config_file_sets_only_its_own_fields() {
        let config: ConfigFile = serde_json::from_str(
            r#"{"oracle": "matplotlib", "python": "python3", "testdata_dir": "/cfg/testdata", "check": true}"#,
        )
        .unwrap();

        let settings = CliArgs::parse_from(["mtex"]).settings(Some(&config));
        assert_eq!(settings.oracle, OracleKind::Matplotlib);
        assert_eq!(settings.python, "python3");
        assert_eq!(settings.out_dir, PathBuf::from("src/fakebackend"));
        assert_eq!(settings.testdata_dir, PathBuf::from("/cfg/testdata"));
        assert!(!settings.check);
        assert!(!settings.from_json);
        assert!(settings.write_testdata);
    }
}
