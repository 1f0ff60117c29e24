//! What the generator measures

use crate::symbols;
use crate::tex::{Font, FontMetricKey, KernKey};
use serde::{Deserialize, Serialize};

/// A font role and style class pair, measured at every planned size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub font_name: String,
    pub font_type: String,
}

impl FontSpec {
    pub fn new(font_name: &str, font_type: &str) -> Self {
        Self {
            font_name: font_name.to_string(),
            font_type: font_type.to_string(),
        }
    }

    pub fn at(&self, size: f64) -> Font {
        Font::new(&self.font_name, size, &self.font_type)
    }
}

/// The full set of measurements one generation run asks an oracle for.
///
/// The plan is also handed to external oracles as JSON, so it has to be
/// self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub fonts: Vec<FontSpec>,
    pub metric_sizes: Vec<f64>,
    pub kern_sizes: Vec<f64>,
    pub dpi: f64,
    pub symbols: Vec<String>,
    pub kern_pairs: Vec<(String, String)>,
}

impl Plan {
    /// The table the fake backend ships with.
    pub fn dejavu_sans() -> Self {
        Self::dejavu_sans_with(symbols::control_words())
    }

    /// The shipped matrix with `control_words` in place of the built-in
    /// symbol table.
    pub fn dejavu_sans_with(control_words: impl IntoIterator<Item = String>) -> Self {
        let mut symbols: Vec<String> = ('a'..='z').chain('A'..='Z').map(String::from).collect();
        symbols.extend(control_words);
        symbols.push("é".to_string());
        symbols.push(" ".to_string());

        let kern_pairs = [
            ("A", "V"),
            ("A", "é"),
            ("V", "é"),
            ("é", "é"),
            ("f", "i"),
            ("A", "\\sigma"),
            ("a", "\\sigma"),
            ("é", "\\sigma"),
            ("\\sum", "\\sigma"),
        ]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

        Self {
            fonts: vec![
                FontSpec::new("default", "regular"),
                FontSpec::new("default", "rm"),
                FontSpec::new("it", "it"),
            ],
            metric_sizes: vec![10.0, 12.0],
            kern_sizes: vec![12.0],
            dpi: 72.0,
            symbols,
            kern_pairs,
        }
    }

    /// Replaces the control words of the plan with `words`. Plain
    /// characters keep their place: those planned before the first control
    /// word stay in front, the others follow `words`.
    pub fn with_control_words(mut self, words: Vec<String>) -> Self {
        let first = self
            .symbols
            .iter()
            .position(|s| is_control_word(s))
            .unwrap_or(self.symbols.len());
        let rest: Vec<String> = self
            .symbols
            .split_off(first)
            .into_iter()
            .filter(|s| !is_control_word(s))
            .collect();
        self.symbols.extend(words);
        self.symbols.extend(rest);
        self
    }

    /// The planned control words, in plan order.
    pub fn control_words(&self) -> impl Iterator<Item = &str> {
        self.symbols
            .iter()
            .map(String::as_str)
            .filter(|s| is_control_word(s))
    }

    /// Every metrics key, math variants first, then by font, size and symbol.
    pub fn metric_keys(&self) -> Vec<FontMetricKey> {
        let mut keys = Vec::new();
        for math in [true, false] {
            for font in &self.fonts {
                for &size in &self.metric_sizes {
                    for symbol in &self.symbols {
                        keys.push(FontMetricKey::new(symbol, math, font.at(size)));
                    }
                }
            }
        }
        keys
    }

    /// Every kerning key. Each pair is planned in both orders, except a pair
    /// of identical symbols which is its own reverse.
    pub fn kern_keys(&self) -> Vec<KernKey> {
        let mut keys = Vec::new();
        for font in &self.fonts {
            for &size in &self.kern_sizes {
                for (a, b) in &self.kern_pairs {
                    let key = KernKey::new(font.at(size), a, b);
                    if a != b {
                        let reversed = key.reversed();
                        keys.push(key);
                        keys.push(reversed);
                    } else {
                        keys.push(key);
                    }
                }
            }
        }
        keys
    }
}

/// Whether `symbol` is a control word such as `\alpha` rather than a single
/// character. A lone backslash is a character.
pub fn is_control_word(symbol: &str) -> bool {
    symbol.len() > 1 && symbol.starts_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dejavu_sans_plan_size() {
        let plan = Plan::dejavu_sans();
        assert_eq!(plan.symbols.len(), 52 + symbols::TEX_SYMBOLS.len() + 2);
        assert_eq!(plan.symbols[0], "a");
        assert_eq!(plan.symbols[26], "A");
        assert_eq!(plan.symbols.last().map(String::as_str), Some(" "));

        let metric_keys = plan.metric_keys();
        assert_eq!(metric_keys.len(), 2 * 3 * 2 * plan.symbols.len());
        let unique: HashSet<_> = metric_keys.iter().collect();
        assert_eq!(unique.len(), metric_keys.len());
    }

    #[test]
    fn test_kern_keys_cover_both_orders() {
        let plan = Plan::dejavu_sans();
        let keys = plan.kern_keys();
        // Nine pairs, one of them doubled, for three fonts.
        assert_eq!(keys.len(), 3 * 17);

        let font = Font::new("default", 12.0, "regular");
        assert_eq!(keys[0], KernKey::new(font.clone(), "A", "V"));
        assert_eq!(keys[1], KernKey::new(font.clone(), "V", "A"));
        assert_eq!(keys[6], KernKey::new(font, "é", "é"));

        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_plan_json_round_trips() {
        let plan = Plan::dejavu_sans();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains(r#"["\\sum","\\sigma"]"#));
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_control_words_are_swapped_in_place() {
        let plan = Plan::dejavu_sans()
            .with_control_words(vec!["\\leftharpoondown".into(), "\\varnothing".into()]);
        assert_eq!(plan.symbols.len(), 52 + 2 + 2);
        assert_eq!(plan.symbols[51], "Z");
        assert_eq!(plan.symbols[52], "\\leftharpoondown");
        assert_eq!(plan.symbols[54], "é");
        assert_eq!(plan.symbols[55], " ");
        assert_eq!(
            plan.control_words().collect::<Vec<_>>(),
            ["\\leftharpoondown", "\\varnothing"]
        );
        let bare = Plan::dejavu_sans_with(Vec::new());
        assert_eq!(bare.clone().with_control_words(Vec::new()), bare);
        assert_eq!(bare.symbols.len(), 54);
    }

    #[test]
    fn test_shipped_plan_uses_the_symbol_table() {
        let plan = Plan::dejavu_sans();
        let words: Vec<String> = plan.control_words().map(String::from).collect();
        assert_eq!(words, symbols::control_words().collect::<Vec<_>>());
        assert_eq!(Plan::dejavu_sans().with_control_words(words), plan);
        assert!(is_control_word("\\oiint"));
        assert!(!is_control_word("\\"));
        assert!(!is_control_word("é"));
    }
}
