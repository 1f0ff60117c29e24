//! Sources of reference measurements

use super::plan::Plan;
use super::record::{KernRecord, MetricRecord, Records};
use crate::fonts::Fonts;
use crate::symbols;
use crate::tex::Backend;
use crate::ttf::{Canvas, FontBackend};
use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Something that can measure every entry of a [`Plan`].
pub trait Oracle {
    fn name(&self) -> &str;

    /// The TeX control words this oracle can measure, backslash included.
    /// A run plans exactly these.
    fn control_words(&self) -> Result<Vec<String>>;

    fn measure(&self, plan: &Plan) -> Result<Records>;
}

/// Measures the embedded DejaVu Sans faces in process.
pub struct FontOracle {
    backend: FontBackend<Canvas>,
}

impl FontOracle {
    pub fn new() -> Result<Self> {
        let fonts = Fonts::dejavu_sans().context("Failed to load embedded DejaVu Sans")?;
        Ok(Self {
            backend: FontBackend::new(fonts, Canvas::new()),
        })
    }
}

impl Oracle for FontOracle {
    fn name(&self) -> &str {
        "font"
    }

    fn control_words(&self) -> Result<Vec<String>> {
        Ok(symbols::control_words().collect())
    }

    fn measure(&self, plan: &Plan) -> Result<Records> {
        let mut records = Records::default();

        for key in plan.metric_keys() {
            let metrics = self
                .backend
                .metrics(&key.symbol, &key.font, plan.dpi, key.math)
                .with_context(|| format!("Failed to measure {:?} in {}", key.symbol, key.font))?;
            records.metrics.push(MetricRecord {
                font_name: key.font.name,
                font_type: key.font.kind,
                math: key.math,
                size: key.font.size,
                symbol: key.symbol,
                metrics,
            });
        }

        for key in plan.kern_keys() {
            let kern = self
                .backend
                .kern(&key.font, &key.sym1, &key.font, &key.sym2, plan.dpi)
                .with_context(|| {
                    format!("Failed to kern {:?} {:?} in {}", key.sym1, key.sym2, key.font)
                })?;
            records.kerns.push(KernRecord {
                font_name: key.font.name,
                font_type: key.font.kind,
                size: key.font.size,
                sym1: key.sym1,
                sym2: key.sym2,
                kern,
            });
        }

        debug!(
            "Font oracle measured {} glyphs and {} pairs",
            records.metrics.len(),
            records.kerns.len()
        );
        Ok(records)
    }
}

/// Runs matplotlib's mathtext DejaVu Sans metrics in a Python subprocess.
///
/// The plan goes to the script as a JSON file and the records come back the
/// same way, so nothing depends on what the script prints.
pub struct MatplotlibOracle {
    python: String,
}

impl MatplotlibOracle {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    fn run(&self, script: &str, args: &[&Path]) -> Result<()> {
        info!("Running matplotlib oracle with {}", self.python);
        let output = Command::new(&self.python)
            .arg("-c")
            .arg(script)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {}", self.python))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "matplotlib oracle failed with status {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        Ok(())
    }
}

impl Oracle for MatplotlibOracle {
    fn name(&self) -> &str {
        "matplotlib"
    }

    fn control_words(&self) -> Result<Vec<String>> {
        let out_file = NamedTempFile::new()
            .context("Failed to create temporary file for the symbol inventory")?;
        self.run(SYMBOLS_SCRIPT, &[out_file.path()])?;

        let json = std::fs::read_to_string(out_file.path())
            .context("Failed to read matplotlib symbol inventory")?;
        let words: Vec<String> = serde_json::from_str(&json)
            .context("Failed to parse matplotlib symbol inventory")?;
        debug!("matplotlib knows {} control words", words.len());
        Ok(words)
    }

    fn measure(&self, plan: &Plan) -> Result<Records> {
        let mut plan_file =
            NamedTempFile::new().context("Failed to create temporary file for the plan")?;
        serde_json::to_writer(&mut plan_file, plan).context("Failed to serialize the plan")?;
        plan_file.flush().context("Failed to write the plan")?;

        let out_file =
            NamedTempFile::new().context("Failed to create temporary file for oracle output")?;
        self.run(MATHTEXT_SCRIPT, &[plan_file.path(), out_file.path()])?;

        let json = std::fs::read_to_string(out_file.path())
            .context("Failed to read matplotlib oracle output")?;
        serde_json::from_str(&json).context("Failed to parse matplotlib oracle output")
    }
}

/// Writes the keys of matplotlib's `tex2uni` that DejaVu Sans can draw.
/// Letters also need a glyph in the oblique face, since italic requests
/// for them go there.
const SYMBOLS_SCRIPT: &str = r#"
import json
import sys

from matplotlib._mathtext_data import tex2uni
from matplotlib.font_manager import FontProperties, findfont
from matplotlib.ft2font import FT2Font

upright = FT2Font(findfont(FontProperties(family="DejaVu Sans")))
oblique = FT2Font(findfont(FontProperties(family="DejaVu Sans", style="oblique")))

def italicizes(cp):
    return chr(cp).isalpha() and not 0x391 <= cp <= 0x3A9

words = []
for name, cp in tex2uni.items():
    if not name.isalpha() or not upright.get_char_index(cp):
        continue
    if italicizes(cp) and not oblique.get_char_index(cp):
        continue
    words.append("\\" + name)

with open(sys.argv[1], "w") as f:
    json.dump(words, f)
"#;

const MATHTEXT_SCRIPT: &str = r#"
import inspect
import json
import sys

from matplotlib.font_manager import FontProperties

try:
    from matplotlib._mathtext import DejaVuSansFonts
    from matplotlib.ft2font import LOAD_NO_HINTING
    fonts = DejaVuSansFonts(FontProperties(), LOAD_NO_HINTING)
except ImportError:
    import matplotlib.mathtext as mathtext
    fonts = mathtext.DejaVuSansFonts(FontProperties(), mathtext.MathtextBackendPdf())

with open(sys.argv[1]) as f:
    plan = json.load(f)

takes_math = "math" in inspect.signature(fonts.get_metrics).parameters
dpi = plan["dpi"]

metrics = []
for math in (True, False):
    for font in plan["fonts"]:
        name, kind = font["font_name"], font["font_type"]
        for size in plan["metric_sizes"]:
            for sym in plan["symbols"]:
                if takes_math:
                    m = fonts.get_metrics(name, kind, sym, size, dpi, math)
                else:
                    m = fonts.get_metrics(name, kind, sym, size, dpi)
                metrics.append({
                    "font_name": name, "font_type": kind,
                    "math": math, "size": size, "symbol": sym,
                    "metrics": {
                        "advance": float(m.advance), "height": float(m.height),
                        "width": float(m.width),
                        "xmin": float(m.xmin), "xmax": float(m.xmax),
                        "ymin": float(m.ymin), "ymax": float(m.ymax),
                        "iceberg": float(m.iceberg), "slanted": bool(m.slanted),
                    },
                })

kerns = []
for font in plan["fonts"]:
    name, kind = font["font_name"], font["font_type"]
    for size in plan["kern_sizes"]:
        for a, b in plan["kern_pairs"]:
            orders = [(a, b)] if a == b else [(a, b), (b, a)]
            for s1, s2 in orders:
                k = fonts.get_kern(name, kind, s1, size, name, kind, s2, size, dpi)
                kerns.append({
                    "font_name": name, "font_type": kind, "size": size,
                    "sym1": s1, "sym2": s2, "kern": float(k),
                })

with open(sys.argv[2], "w") as f:
    json.dump({"metrics": metrics, "kerns": kerns}, f)
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn small_plan() -> Plan {
        let mut plan = Plan::dejavu_sans();
        plan.symbols = vec!["A".into(), "V".into(), "\\int".into()];
        plan.kern_pairs = vec![("A".into(), "V".into())];
        plan
    }

    #[test]
    fn test_font_oracle_follows_plan_order() {
        let plan = small_plan();
        let records = FontOracle::new().unwrap().measure(&plan).unwrap();

        let keys: Vec<_> = records.metrics.iter().map(MetricRecord::key).collect();
        assert_eq!(keys, plan.metric_keys());
        let keys: Vec<_> = records.kerns.iter().map(KernRecord::key).collect();
        assert_eq!(keys, plan.kern_keys());
        assert_eq!(records.kerns[0].kern, -1.0);
    }

    #[test]
    fn test_font_oracle_reports_unknown_symbols() {
        let mut plan = small_plan();
        plan.symbols.push("\\nosuchsymbol".into());
        let err = FontOracle::new().unwrap().measure(&plan).unwrap_err();
        assert!(format!("{err:#}").contains("nosuchsymbol"));
    }

    #[test]
    fn test_missing_interpreter_is_an_error() {
        let oracle = MatplotlibOracle::new("/nonexistent/python-for-mtex");
        let err = oracle.measure(&small_plan()).unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_interpreter_reports_its_status() {
        let oracle = MatplotlibOracle::new("false");
        let err = oracle.measure(&small_plan()).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("matplotlib oracle failed with status"));

        let err = oracle.control_words().unwrap_err();
        assert!(err.to_string().contains("failed with status"));
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_interpreter_is_a_parse_error() {
        let oracle = MatplotlibOracle::new("true");
        let err = oracle.measure(&small_plan()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse matplotlib oracle output");

        let err = oracle.control_words().unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse matplotlib symbol inventory");
    }

    #[test]
    fn test_font_oracle_knows_the_symbol_table() {
        let words = FontOracle::new().unwrap().control_words().unwrap();
        assert_eq!(words.len(), symbols::TEX_SYMBOLS.len());
        for word in ["\\alpha", "\\leftharpoondown", "\\oiint", "\\varnothing"] {
            assert!(words.iter().any(|w| w == word), "{word} is not measured");
        }
    }
}
