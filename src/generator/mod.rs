//! Offline generator for the fake backend tables
//!
//! A run asks an [`Oracle`](oracle::Oracle) for every entry of a
//! [`Plan`](plan::Plan), checks that the answer covers the plan exactly, and
//! renders the static tables compiled into
//! [`fakebackend`](crate::fakebackend) along with the JSON interchange files
//! kept under `testdata/`.

pub mod emit;
pub mod oracle;
pub mod plan;
pub mod record;

use anyhow::{bail, ensure, Context, Result};
use emit::Output;
use oracle::Oracle;
use plan::Plan;
use record::{KernRecord, MetricRecord, Records};
use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where a run writes to.
#[derive(Debug, Clone)]
pub struct Destination {
    /// Directory receiving `fonts_gen.rs` and `kerns_gen.rs`.
    pub out_dir: PathBuf,
    /// Directory receiving the JSON interchange files, if they are kept.
    pub testdata_dir: Option<PathBuf>,
}

/// `base` with its control words replaced by the ones `oracle` can
/// measure.
pub fn plan_for(oracle: &dyn Oracle, base: &Plan) -> Result<Plan> {
    let words = oracle
        .control_words()
        .with_context(|| format!("The {} oracle could not list its symbols", oracle.name()))?;
    info!(
        "The {} oracle knows {} control words, the built-in table {}",
        oracle.name(),
        words.len(),
        base.control_words().count()
    );
    Ok(base.clone().with_control_words(words))
}

/// Measures `plan` with `oracle` and returns the validated records in plan
/// order.
pub fn measure(oracle: &dyn Oracle, plan: &Plan) -> Result<Records> {
    info!(
        "Measuring {} symbols in {} fonts with the {} oracle",
        plan.symbols.len(),
        plan.fonts.len(),
        oracle.name()
    );
    let records = oracle
        .measure(plan)
        .with_context(|| format!("The {} oracle failed", oracle.name()))?;
    validate(plan, records)
}

/// Loads records persisted by an earlier run and validates them against
/// `base`. The control words are the ones the records hold, so files
/// written by any oracle can be loaded.
pub fn load_testdata(base: &Plan, dir: &Path) -> Result<Records> {
    let records = Records {
        metrics: emit::read_json(&dir.join(emit::METRICS_JSON_FILE))?,
        kerns: emit::read_json(&dir.join(emit::KERNS_JSON_FILE))?,
    };
    info!(
        "Loaded {} metrics and {} kerning records from {}",
        records.metrics.len(),
        records.kerns.len(),
        dir.display()
    );

    let plan = base.clone().with_control_words(records.control_words());
    validate(&plan, records)
}

/// Checks that `records` hold exactly one well-formed entry for every key
/// of `plan`, and puts them in plan order.
pub fn validate(plan: &Plan, records: Records) -> Result<Records> {
    for r in &records.metrics {
        ensure!(
            r.metrics.is_finite(),
            "non-finite metrics for {:?} in font {}",
            r.symbol,
            r.font()
        );
        ensure!(
            r.metrics.has_valid_ink_box(),
            "inverted ink box for {:?} in font {}",
            r.symbol,
            r.font()
        );
    }
    for r in &records.kerns {
        ensure!(
            r.kern.is_finite(),
            "non-finite kerning for {:?} {:?} in font {}",
            r.sym1,
            r.sym2,
            r.font()
        );
    }

    let metrics = in_plan_order(plan.metric_keys(), records.metrics, MetricRecord::key)
        .context("Metrics do not cover the plan")?;
    let kerns = in_plan_order(plan.kern_keys(), records.kerns, KernRecord::key)
        .context("Kerning does not cover the plan")?;

    info!(
        "Coverage complete: {} metrics, {} kerning pairs",
        metrics.len(),
        kerns.len()
    );
    Ok(Records { metrics, kerns })
}

fn in_plan_order<K, R>(planned: Vec<K>, records: Vec<R>, key: fn(&R) -> K) -> Result<Vec<R>>
where
    K: Eq + Hash + std::fmt::Debug,
{
    let mut by_key = HashMap::with_capacity(records.len());
    for record in records {
        let k = key(&record);
        if by_key.contains_key(&k) {
            bail!("duplicate record for {k:?}");
        }
        by_key.insert(k, record);
    }

    let mut ordered = Vec::with_capacity(planned.len());
    for k in &planned {
        match by_key.remove(k) {
            Some(record) => ordered.push(record),
            None => bail!("missing record for {k:?}"),
        }
    }

    if let Some(extra) = by_key.keys().next() {
        warn!("{} records are not part of the plan", by_key.len());
        bail!("unexpected record for {extra:?}");
    }
    Ok(ordered)
}

/// Renders every output of `records` for `dest`.
pub fn render(records: &Records, dest: &Destination) -> Result<Vec<Output>> {
    let mut outputs = vec![
        Output {
            path: dest.out_dir.join(emit::FONTS_GEN_FILE),
            contents: emit::render_fonts_gen(&records.metrics),
        },
        Output {
            path: dest.out_dir.join(emit::KERNS_GEN_FILE),
            contents: emit::render_kerns_gen(&records.kerns),
        },
    ];

    if let Some(dir) = &dest.testdata_dir {
        outputs.push(Output {
            path: dir.join(emit::METRICS_JSON_FILE),
            contents: emit::render_json(&records.metrics)?,
        });
        outputs.push(Output {
            path: dir.join(emit::KERNS_JSON_FILE),
            contents: emit::render_json(&records.kerns)?,
        });
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::oracle::FontOracle;
    use crate::tex::Metrics;

    struct CannedOracle(Records);

    impl Oracle for CannedOracle {
        fn name(&self) -> &str {
            "canned"
        }

        fn control_words(&self) -> Result<Vec<String>> {
            Ok(self.0.control_words())
        }

        fn measure(&self, _plan: &Plan) -> Result<Records> {
            Ok(self.0.clone())
        }
    }

    fn tiny_plan() -> Plan {
        let mut plan = Plan::dejavu_sans();
        plan.symbols = vec!["A".into(), "é".into()];
        plan.kern_pairs = vec![("A".into(), "é".into())];
        plan
    }

    fn dest(dir: &Path) -> Destination {
        Destination {
            out_dir: dir.join("src"),
            testdata_dir: Some(dir.join("testdata")),
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let plan = tiny_plan();
        let oracle = FontOracle::new().unwrap();
        let first = measure(&oracle, &plan).unwrap();
        let second = measure(&oracle, &plan).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let a = render(&first, &dest(dir.path())).unwrap();
        let b = render(&second, &dest(dir.path())).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_records_are_put_in_plan_order() {
        let plan = tiny_plan();
        let mut records = FontOracle::new().unwrap().measure(&plan).unwrap();
        let expected = records.clone();
        records.metrics.reverse();
        records.kerns.reverse();

        let validated = validate(&plan, records).unwrap();
        assert_eq!(validated, expected);
    }

    #[test]
    fn test_missing_record_fails() {
        let plan = tiny_plan();
        let mut records = FontOracle::new().unwrap().measure(&plan).unwrap();
        records.metrics.pop();
        let err = measure(&CannedOracle(records), &plan).unwrap_err();
        assert!(format!("{err:#}").contains("missing record"));
    }

    #[test]
    fn test_duplicate_and_extra_records_fail() {
        let plan = tiny_plan();
        let records = FontOracle::new().unwrap().measure(&plan).unwrap();

        let mut duplicated = records.clone();
        duplicated.kerns.push(duplicated.kerns[0].clone());
        let err = validate(&plan, duplicated).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate record"));

        let mut extra = records;
        let mut stray = extra.metrics[0].clone();
        stray.symbol = "Z".into();
        extra.metrics.push(stray);
        let err = validate(&plan, extra).unwrap_err();
        assert!(format!("{err:#}").contains("unexpected record"));
    }

    #[test]
    fn test_malformed_values_fail() {
        let plan = tiny_plan();
        let records = FontOracle::new().unwrap().measure(&plan).unwrap();

        let mut inverted = records.clone();
        inverted.metrics[0].metrics = Metrics {
            xmin: 2.0,
            xmax: 1.0,
            ..inverted.metrics[0].metrics
        };
        assert!(validate(&plan, inverted).is_err());

        let mut nan = records;
        nan.kerns[0].kern = f64::NAN;
        assert!(validate(&plan, nan).is_err());
    }

    #[test]
    fn test_malformed_json_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let testdata = dir.path().join("testdata");
        std::fs::create_dir_all(&testdata).unwrap();
        std::fs::write(testdata.join(emit::METRICS_JSON_FILE), "[{\"font_name\": 1}]").unwrap();
        std::fs::write(testdata.join(emit::KERNS_JSON_FILE), "[]").unwrap();

        let err = load_testdata(&tiny_plan(), &testdata).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_testdata_round_trip() {
        let plan = tiny_plan();
        let records = measure(&FontOracle::new().unwrap(), &plan).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let dest = dest(dir.path());
        let outputs = render(&records, &dest).unwrap();
        emit::write_all(&outputs).unwrap();

        let testdata = dest.testdata_dir.as_deref().unwrap();
        let reloaded = load_testdata(&plan, testdata).unwrap();
        assert_eq!(reloaded, records);
        assert_eq!(render(&reloaded, &dest).unwrap(), outputs);
    }

    #[test]
    fn test_plan_follows_the_oracle_inventory() {
        let mut small = tiny_plan();
        small.symbols = vec!["A".into(), "\\int".into(), "é".into()];
        let records = FontOracle::new().unwrap().measure(&small).unwrap();

        // The canned oracle only knows `\int`, whatever the base plan lists.
        let plan = plan_for(&CannedOracle(records.clone()), &Plan::dejavu_sans()).unwrap();
        assert_eq!(plan.control_words().collect::<Vec<_>>(), ["\\int"]);
        assert_eq!(plan.symbols.len(), 52 + 1 + 2);

        let mut base = small.clone();
        base.symbols = vec!["A".into(), "\\sum".into(), "é".into()];
        let plan = plan_for(&CannedOracle(records.clone()), &base).unwrap();
        assert_eq!(plan, small);
        assert_eq!(measure(&CannedOracle(records.clone()), &plan).unwrap(), records);
    }

    #[test]
    fn test_testdata_keeps_its_own_control_words() {
        let mut small = tiny_plan();
        small.symbols = vec!["A".into(), "\\oiint".into(), "é".into()];
        let records = measure(&FontOracle::new().unwrap(), &small).unwrap();

        let dir = tempfile::tempdir().unwrap();
        emit::write_all(&render(&records, &dest(dir.path())).unwrap()).unwrap();

        let mut base = small.clone();
        base.symbols = vec!["A".into(), "\\sum".into(), "\\int".into(), "é".into()];
        let reloaded = load_testdata(&base, &dir.path().join("testdata")).unwrap();
        assert_eq!(reloaded, records);
    }
}
