//! Application runner logic
//!
//! Handles the different ways to run the generator

use crate::core::cli::{CliArgs, OracleKind, Settings};
use crate::core::config_file::ConfigFile;
use crate::generator::oracle::{FontOracle, MatplotlibOracle, Oracle};
use crate::generator::plan::Plan;
use crate::generator::{self, emit, Destination};
use crate::logging;
use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;
use tracing::info;

/// Run the generator with the given CLI arguments.
/// Handles special CLI flags and delegates to [`generate`].
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    let _guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    let settings = cli_args.settings(ConfigFile::load().as_ref());
    settings.validate().map_err(|e| anyhow!(e))?;

    generate(&Plan::dejavu_sans(), &settings)?;
    Ok(())
}

/// Produce every output of `base` and write it, or in check mode compare
/// it with what is on disk. The control words measured are the ones the
/// oracle knows. Returns the paths written or checked.
pub fn generate(base: &Plan, settings: &Settings) -> Result<Vec<PathBuf>> {
    let records = if settings.from_json {
        generator::load_testdata(base, &settings.testdata_dir)?
    } else {
        let oracle: Box<dyn Oracle> = match settings.oracle {
            OracleKind::Font => Box::new(FontOracle::new()?),
            OracleKind::Matplotlib => Box::new(MatplotlibOracle::new(&settings.python)),
        };
        let plan = generator::plan_for(oracle.as_ref(), base)?;
        generator::measure(oracle.as_ref(), &plan)?
    };

    let dest = Destination {
        out_dir: settings.out_dir.clone(),
        // Re-emitting from JSON must not rewrite its own input.
        testdata_dir: (settings.write_testdata && !settings.from_json)
            .then(|| settings.testdata_dir.clone()),
    };
    let outputs = generator::render(&records, &dest)?;
    let paths: Vec<PathBuf> = outputs.iter().map(|o| o.path.clone()).collect();

    if settings.check {
        let stale = emit::stale(&outputs);
        if !stale.is_empty() {
            let list: Vec<String> = stale.iter().map(|p| p.display().to_string()).collect();
            bail!(
                "{} generated files are out of date: {}",
                stale.len(),
                list.join(", ")
            );
        }
        info!("All {} generated files are up to date", outputs.len());
    } else {
        emit::write_all(&outputs)?;
    }
    Ok(paths)
}
