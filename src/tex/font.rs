//! Font identity and the lookup keys built from it

use std::fmt;
use std::hash::{Hash, Hasher};

/// A font variant at a given point size.
///
/// `name` selects the font role ("default", "rm", "it", ...), `kind` is the
/// style class the layout engine asked for ("regular", "rm", "it", ...).
/// Equality and hashing are structural over all three fields.
#[derive(Debug, Clone)]
pub struct Font {
    pub name: String,
    pub size: f64,
    pub kind: String,
}

impl Font {
    pub fn new(name: impl Into<String>, size: f64, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            kind: kind.into(),
        }
    }

    /// Bit pattern of the size, with `-0.0` folded into `0.0` so that
    /// `Eq` and `Hash` agree.
    fn size_bits(&self) -> u64 {
        if self.size == 0.0 {
            0.0f64.to_bits()
        } else {
            self.size.to_bits()
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.size_bits() == other.size_bits()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size_bits().hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.name, self.kind, self.size)
    }
}

/// Key of one [`Metrics`](super::Metrics) entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontMetricKey {
    pub symbol: String,
    pub math: bool,
    pub font: Font,
}

impl FontMetricKey {
    pub fn new(symbol: impl Into<String>, math: bool, font: Font) -> Self {
        Self {
            symbol: symbol.into(),
            math,
            font,
        }
    }
}

/// Key of one kerning entry: `sym1` immediately followed by `sym2`.
///
/// Kerning is direction-sensitive, `(A, V)` and `(V, A)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernKey {
    pub font: Font,
    pub sym1: String,
    pub sym2: String,
}

impl KernKey {
    pub fn new(font: Font, sym1: impl Into<String>, sym2: impl Into<String>) -> Self {
        Self {
            font,
            sym1: sym1.into(),
            sym2: sym2.into(),
        }
    }

    /// The same pair in the opposite order.
    pub fn reversed(&self) -> Self {
        Self {
            font: self.font.clone(),
            sym1: self.sym2.clone(),
            sym2: self.sym1.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_font_equality_is_structural() {
        let a = Font::new("default", 12.0, "rm");
        let b = Font::new(String::from("default"), 12.0, String::from("rm"));
        assert_eq!(a, b);
        assert_ne!(a, Font::new("default", 10.0, "rm"));
        assert_ne!(a, Font::new("default", 12.0, "regular"));
        assert_ne!(a, Font::new("it", 12.0, "rm"));
    }

    #[test]
    fn test_negative_zero_size_hashes_like_zero() {
        let mut set = HashSet::new();
        set.insert(Font::new("default", 0.0, "rm"));
        assert!(set.contains(&Font::new("default", -0.0, "rm")));
    }

    #[test]
    fn test_kern_key_is_ordered() {
        let font = Font::new("default", 12.0, "rm");
        let av = KernKey::new(font.clone(), "A", "V");
        let va = KernKey::new(font, "V", "A");
        assert_ne!(av, va);
        assert_eq!(av.reversed(), va);
    }

    #[test]
    fn test_font_display() {
        assert_eq!(Font::new("it", 12.0, "it").to_string(), "it/it@12");
    }
}
