//! Interchange records exchanged with oracles and persisted under `testdata/`

use crate::tex::{Font, FontMetricKey, KernKey, Metrics};
use super::plan::is_control_word;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Metrics of one symbol, as written by an oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub font_name: String,
    pub font_type: String,
    pub math: bool,
    pub size: f64,
    pub symbol: String,
    pub metrics: Metrics,
}

impl MetricRecord {
    pub fn font(&self) -> Font {
        Font::new(&self.font_name, self.size, &self.font_type)
    }

    pub fn key(&self) -> FontMetricKey {
        FontMetricKey::new(&self.symbol, self.math, self.font())
    }
}

/// Kerning of one ordered symbol pair, as written by an oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernRecord {
    pub font_name: String,
    pub font_type: String,
    pub size: f64,
    pub sym1: String,
    pub sym2: String,
    pub kern: f64,
}

impl KernRecord {
    pub fn font(&self) -> Font {
        Font::new(&self.font_name, self.size, &self.font_type)
    }

    pub fn key(&self) -> KernKey {
        KernKey::new(self.font(), &self.sym1, &self.sym2)
    }
}

/// Everything one oracle run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    pub metrics: Vec<MetricRecord>,
    pub kerns: Vec<KernRecord>,
}

impl Records {
    /// Control words measured in these records, in first-seen order.
    pub fn control_words(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.metrics
            .iter()
            .map(|r| r.symbol.as_str())
            .filter(|s| is_control_word(s) && seen.insert(*s))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_record_decodes() {
        let json = r#"{
            "font_name": "default",
            "font_type": "rm",
            "math": false,
            "size": 12.0,
            "symbol": "A",
            "metrics": {
                "advance": 8.208984375, "height": 8.75, "width": 8.015625,
                "xmin": 0.09375, "xmax": 8.109375, "ymin": 0.0, "ymax": 8.75,
                "iceberg": 8.75, "slanted": false
            }
        }"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.key(),
            FontMetricKey::new("A", false, Font::new("default", 12.0, "rm"))
        );
        assert_eq!(record.metrics.advance, 8.208984375);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"font_name": "default", "font_type": "rm", "size": 12.0,
                       "sym1": "A", "sym2": "V"}"#;
        let err = serde_json::from_str::<KernRecord>(json).unwrap_err();
        assert!(err.to_string().contains("kern"));
    }

    #[test]
    fn test_missing_metric_field_is_rejected() {
        let json = r#"{"font_name": "default", "font_type": "rm", "math": true,
                       "size": 12.0, "symbol": "A",
                       "metrics": {"advance": 1.0, "height": 1.0, "width": 1.0,
                                   "xmin": 0.0, "xmax": 1.0, "ymin": 0.0, "ymax": 1.0,
                                   "iceberg": 1.0}}"#;
        let err = serde_json::from_str::<MetricRecord>(json).unwrap_err();
        assert!(err.to_string().contains("slanted"));
    }

    #[test]
    fn test_control_words_in_first_seen_order() {
        let record = |symbol: &str| MetricRecord {
            font_name: "default".into(),
            font_type: "rm".into(),
            math: true,
            size: 10.0,
            symbol: symbol.into(),
            metrics: Metrics::new(1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, false),
        };
        let records = Records {
            metrics: ["A", "\\sum", "\\", "\\int", "\\sum", "é"]
                .map(record)
                .to_vec(),
            kerns: Vec::new(),
        };
        assert_eq!(records.control_words(), ["\\sum", "\\int"]);
    }
}
