//! TeX symbol names and their Unicode code points
//!
//! Symbols reach a backend either as a single character (`"A"`, `"é"`) or as
//! a TeX control word (`"\\alpha"`). Every entry of [`TEX_SYMBOLS`] has a
//! glyph in the embedded DejaVu Sans faces.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Symbols that are drawn slanted whatever the requested style.
pub const SLANTED_SYMBOLS: &[&str] = &["\\int", "\\oint"];

/// Known TeX control words, without the leading backslash.
pub static TEX_SYMBOLS: &[(&str, char)] = &[
    // Greek lowercase
    ("alpha", '\u{03B1}'),
    ("beta", '\u{03B2}'),
    ("gamma", '\u{03B3}'),
    ("delta", '\u{03B4}'),
    ("epsilon", '\u{03F5}'),
    ("varepsilon", '\u{03B5}'),
    ("zeta", '\u{03B6}'),
    ("eta", '\u{03B7}'),
    ("theta", '\u{03B8}'),
    ("vartheta", '\u{03D1}'),
    ("iota", '\u{03B9}'),
    ("kappa", '\u{03BA}'),
    ("lambda", '\u{03BB}'),
    ("mu", '\u{03BC}'),
    ("nu", '\u{03BD}'),
    ("xi", '\u{03BE}'),
    ("pi", '\u{03C0}'),
    ("varpi", '\u{03D6}'),
    ("rho", '\u{03C1}'),
    ("varrho", '\u{03F1}'),
    ("sigma", '\u{03C3}'),
    ("varsigma", '\u{03C2}'),
    ("tau", '\u{03C4}'),
    ("upsilon", '\u{03C5}'),
    ("phi", '\u{03D5}'),
    ("varphi", '\u{03C6}'),
    ("chi", '\u{03C7}'),
    ("psi", '\u{03C8}'),
    ("omega", '\u{03C9}'),
    // Greek uppercase
    ("Gamma", '\u{0393}'),
    ("Delta", '\u{0394}'),
    ("Theta", '\u{0398}'),
    ("Lambda", '\u{039B}'),
    ("Xi", '\u{039E}'),
    ("Pi", '\u{03A0}'),
    ("Sigma", '\u{03A3}'),
    ("Upsilon", '\u{03A5}'),
    ("Phi", '\u{03A6}'),
    ("Psi", '\u{03A8}'),
    ("Omega", '\u{03A9}'),
    // Large operators
    ("sum", '\u{2211}'),
    ("prod", '\u{220F}'),
    ("coprod", '\u{2210}'),
    ("int", '\u{222B}'),
    ("oint", '\u{222E}'),
    ("iint", '\u{222C}'),
    ("iiint", '\u{222D}'),
    ("bigcap", '\u{22C2}'),
    ("bigcup", '\u{22C3}'),
    ("bigvee", '\u{22C1}'),
    ("bigwedge", '\u{22C0}'),
    ("bigoplus", '\u{2A01}'),
    ("bigotimes", '\u{2A02}'),
    // Binary operators
    ("pm", '\u{00B1}'),
    ("mp", '\u{2213}'),
    ("times", '\u{00D7}'),
    ("div", '\u{00F7}'),
    ("cdot", '\u{22C5}'),
    ("ast", '\u{2217}'),
    ("star", '\u{22C6}'),
    ("circ", '\u{2218}'),
    ("bullet", '\u{2219}'),
    ("cap", '\u{2229}'),
    ("cup", '\u{222A}'),
    ("uplus", '\u{228E}'),
    ("sqcap", '\u{2293}'),
    ("sqcup", '\u{2294}'),
    ("vee", '\u{2228}'),
    ("wedge", '\u{2227}'),
    ("setminus", '\u{2216}'),
    ("wr", '\u{2240}'),
    ("diamond", '\u{22C4}'),
    ("oplus", '\u{2295}'),
    ("ominus", '\u{2296}'),
    ("otimes", '\u{2297}'),
    ("oslash", '\u{2298}'),
    ("odot", '\u{2299}'),
    ("bigcirc", '\u{25CB}'),
    ("dagger", '\u{2020}'),
    ("ddagger", '\u{2021}'),
    // Relations
    ("leq", '\u{2264}'),
    ("geq", '\u{2265}'),
    ("neq", '\u{2260}'),
    ("equiv", '\u{2261}'),
    ("sim", '\u{223C}'),
    ("simeq", '\u{2243}'),
    ("approx", '\u{2248}'),
    ("cong", '\u{2245}'),
    ("propto", '\u{221D}'),
    ("subset", '\u{2282}'),
    ("supset", '\u{2283}'),
    ("subseteq", '\u{2286}'),
    ("supseteq", '\u{2287}'),
    ("in", '\u{2208}'),
    ("ni", '\u{220B}'),
    ("notin", '\u{2209}'),
    ("ll", '\u{226A}'),
    ("gg", '\u{226B}'),
    ("prec", '\u{227A}'),
    ("succ", '\u{227B}'),
    ("mid", '\u{2223}'),
    ("parallel", '\u{2225}'),
    ("vdash", '\u{22A2}'),
    ("dashv", '\u{22A3}'),
    ("models", '\u{22A7}'),
    ("asymp", '\u{224D}'),
    ("doteq", '\u{2250}'),
    ("bowtie", '\u{22C8}'),
    // Arrows
    ("leftarrow", '\u{2190}'),
    ("rightarrow", '\u{2192}'),
    ("uparrow", '\u{2191}'),
    ("downarrow", '\u{2193}'),
    ("leftrightarrow", '\u{2194}'),
    ("updownarrow", '\u{2195}'),
    ("Leftarrow", '\u{21D0}'),
    ("Rightarrow", '\u{21D2}'),
    ("Uparrow", '\u{21D1}'),
    ("Downarrow", '\u{21D3}'),
    ("Leftrightarrow", '\u{21D4}'),
    ("Updownarrow", '\u{21D5}'),
    ("mapsto", '\u{21A6}'),
    ("longleftarrow", '\u{27F5}'),
    ("longrightarrow", '\u{27F6}'),
    ("hookleftarrow", '\u{21A9}'),
    ("hookrightarrow", '\u{21AA}'),
    ("nearrow", '\u{2197}'),
    ("searrow", '\u{2198}'),
    ("swarrow", '\u{2199}'),
    ("nwarrow", '\u{2196}'),
    ("leftharpoonup", '\u{21BC}'),
    ("rightharpoonup", '\u{21C0}'),
    ("rightleftharpoons", '\u{21CC}'),
    // Miscellaneous symbols and delimiters
    ("infty", '\u{221E}'),
    ("partial", '\u{2202}'),
    ("nabla", '\u{2207}'),
    ("forall", '\u{2200}'),
    ("exists", '\u{2203}'),
    ("neg", '\u{00AC}'),
    ("emptyset", '\u{2205}'),
    ("aleph", '\u{2135}'),
    ("hbar", '\u{0127}'),
    ("ell", '\u{2113}'),
    ("wp", '\u{2118}'),
    ("Re", '\u{211C}'),
    ("Im", '\u{2111}'),
    ("prime", '\u{2032}'),
    ("angle", '\u{2220}'),
    ("triangle", '\u{25B3}'),
    ("surd", '\u{221A}'),
    ("top", '\u{22A4}'),
    ("bot", '\u{22A5}'),
    ("flat", '\u{266D}'),
    ("natural", '\u{266E}'),
    ("sharp", '\u{266F}'),
    ("clubsuit", '\u{2663}'),
    ("diamondsuit", '\u{2662}'),
    ("heartsuit", '\u{2661}'),
    ("spadesuit", '\u{2660}'),
    ("ldots", '\u{2026}'),
    ("cdots", '\u{22EF}'),
    ("vdots", '\u{22EE}'),
    ("ddots", '\u{22F1}'),
    ("langle", '\u{27E8}'),
    ("rangle", '\u{27E9}'),
    ("lfloor", '\u{230A}'),
    ("rfloor", '\u{230B}'),
    ("lceil", '\u{2308}'),
    ("rceil", '\u{2309}'),
    ("lbrace", '\u{007B}'),
    ("rbrace", '\u{007D}'),
    ("vert", '\u{007C}'),
    ("Vert", '\u{2016}'),
    ("backslash", '\u{005C}'),
    ("S", '\u{00A7}'),
    ("P", '\u{00B6}'),
    ("copyright", '\u{00A9}'),
    ("degree", '\u{00B0}'),
    ("imath", '\u{0131}'),
    ("jmath", '\u{0237}'),
    // More arrows
    ("nleftarrow", '\u{219A}'),
    ("nrightarrow", '\u{219B}'),
    ("twoheadleftarrow", '\u{219E}'),
    ("twoheadrightarrow", '\u{21A0}'),
    ("leftarrowtail", '\u{21A2}'),
    ("rightarrowtail", '\u{21A3}'),
    ("mapsfrom", '\u{21A4}'),
    ("mapsup", '\u{21A5}'),
    ("mapsdown", '\u{21A7}'),
    ("looparrowleft", '\u{21AB}'),
    ("looparrowright", '\u{21AC}'),
    ("leftrightsquigarrow", '\u{21AD}'),
    ("nleftrightarrow", '\u{21AE}'),
    ("Lsh", '\u{21B0}'),
    ("Rsh", '\u{21B1}'),
    ("curvearrowleft", '\u{21B6}'),
    ("curvearrowright", '\u{21B7}'),
    ("circlearrowleft", '\u{21BA}'),
    ("circlearrowright", '\u{21BB}'),
    ("leftharpoondown", '\u{21BD}'),
    ("upharpoonright", '\u{21BE}'),
    ("upharpoonleft", '\u{21BF}'),
    ("rightharpoondown", '\u{21C1}'),
    ("downharpoonright", '\u{21C2}'),
    ("downharpoonleft", '\u{21C3}'),
    ("rightleftarrows", '\u{21C4}'),
    ("leftrightarrows", '\u{21C6}'),
    ("leftleftarrows", '\u{21C7}'),
    ("upuparrows", '\u{21C8}'),
    ("rightrightarrows", '\u{21C9}'),
    ("downdownarrows", '\u{21CA}'),
    ("leftrightharpoons", '\u{21CB}'),
    ("nLeftarrow", '\u{21CD}'),
    ("nLeftrightarrow", '\u{21CE}'),
    ("nRightarrow", '\u{21CF}'),
    ("Lleftarrow", '\u{21DA}'),
    ("Rrightarrow", '\u{21DB}'),
    ("leftsquigarrow", '\u{21DC}'),
    ("rightsquigarrow", '\u{21DD}'),
    ("longleftrightarrow", '\u{27F7}'),
    ("Longleftarrow", '\u{27F8}'),
    ("Longrightarrow", '\u{27F9}'),
    ("Longleftrightarrow", '\u{27FA}'),
    ("longmapsto", '\u{27FC}'),
    // More relations
    ("nmid", '\u{2224}'),
    ("nparallel", '\u{2226}'),
    ("backsim", '\u{223D}'),
    ("nsim", '\u{2241}'),
    ("eqsim", '\u{2242}'),
    ("ncong", '\u{2247}'),
    ("napprox", '\u{2249}'),
    ("approxeq", '\u{224A}'),
    ("allequal", '\u{224C}'),
    ("Bumpeq", '\u{224E}'),
    ("bumpeq", '\u{224F}'),
    ("Doteq", '\u{2251}'),
    ("fallingdotseq", '\u{2252}'),
    ("risingdotseq", '\u{2253}'),
    ("coloneq", '\u{2254}'),
    ("eqcolon", '\u{2255}'),
    ("eqcirc", '\u{2256}'),
    ("circeq", '\u{2257}'),
    ("wedgeq", '\u{2259}'),
    ("veeeq", '\u{225A}'),
    ("stareq", '\u{225B}'),
    ("triangleq", '\u{225C}'),
    ("nequiv", '\u{2262}'),
    ("leqq", '\u{2266}'),
    ("geqq", '\u{2267}'),
    ("lneqq", '\u{2268}'),
    ("gneqq", '\u{2269}'),
    ("between", '\u{226C}'),
    ("nless", '\u{226E}'),
    ("ngtr", '\u{226F}'),
    ("nleq", '\u{2270}'),
    ("ngeq", '\u{2271}'),
    ("lesssim", '\u{2272}'),
    ("gtrsim", '\u{2273}'),
    ("lessgtr", '\u{2276}'),
    ("gtrless", '\u{2277}'),
    ("preccurlyeq", '\u{227C}'),
    ("succcurlyeq", '\u{227D}'),
    ("precsim", '\u{227E}'),
    ("succsim", '\u{227F}'),
    ("nprec", '\u{2280}'),
    ("nsucc", '\u{2281}'),
    ("nsubset", '\u{2284}'),
    ("nsupset", '\u{2285}'),
    ("nsubseteq", '\u{2288}'),
    ("nsupseteq", '\u{2289}'),
    ("subsetneq", '\u{228A}'),
    ("supsetneq", '\u{228B}'),
    ("sqsubset", '\u{228F}'),
    ("sqsupset", '\u{2290}'),
    ("sqsubseteq", '\u{2291}'),
    ("sqsupseteq", '\u{2292}'),
    ("vDash", '\u{22A8}'),
    ("Vdash", '\u{22A9}'),
    ("Vvdash", '\u{22AA}'),
    ("VDash", '\u{22AB}'),
    ("nvdash", '\u{22AC}'),
    ("nvDash", '\u{22AD}'),
    ("nVdash", '\u{22AE}'),
    ("nVDash", '\u{22AF}'),
    ("vartriangleleft", '\u{22B2}'),
    ("vartriangleright", '\u{22B3}'),
    ("trianglelefteq", '\u{22B4}'),
    ("trianglerighteq", '\u{22B5}'),
    ("multimap", '\u{22B8}'),
    ("backsimeq", '\u{22CD}'),
    ("Subset", '\u{22D0}'),
    ("Supset", '\u{22D1}'),
    ("pitchfork", '\u{22D4}'),
    ("lessdot", '\u{22D6}'),
    ("gtrdot", '\u{22D7}'),
    ("lll", '\u{22D8}'),
    ("ggg", '\u{22D9}'),
    ("lesseqgtr", '\u{22DA}'),
    ("gtreqless", '\u{22DB}'),
    ("curlyeqprec", '\u{22DE}'),
    ("curlyeqsucc", '\u{22DF}'),
    ("npreccurlyeq", '\u{22E0}'),
    ("nsucccurlyeq", '\u{22E1}'),
    ("nsqsubseteq", '\u{22E2}'),
    ("nsqsupseteq", '\u{22E3}'),
    ("lnsim", '\u{22E6}'),
    ("gnsim", '\u{22E7}'),
    ("precnsim", '\u{22E8}'),
    ("succnsim", '\u{22E9}'),
    ("ntriangleleft", '\u{22EA}'),
    ("ntriangleright", '\u{22EB}'),
    ("ntrianglelefteq", '\u{22EC}'),
    ("ntrianglerighteq", '\u{22ED}'),
    ("leqslant", '\u{2A7D}'),
    ("geqslant", '\u{2A7E}'),
    ("lessapprox", '\u{2A85}'),
    ("gtrapprox", '\u{2A86}'),
    ("lneq", '\u{2A87}'),
    ("gneq", '\u{2A88}'),
    ("lnapprox", '\u{2A89}'),
    ("gnapprox", '\u{2A8A}'),
    ("lesseqqgtr", '\u{2A8B}'),
    ("gtreqqless", '\u{2A8C}'),
    ("eqslantless", '\u{2A95}'),
    ("eqslantgtr", '\u{2A96}'),
    ("preceq", '\u{2AAF}'),
    ("succeq", '\u{2AB0}'),
    ("precneqq", '\u{2AB5}'),
    ("succneqq", '\u{2AB6}'),
    ("precapprox", '\u{2AB7}'),
    ("succapprox", '\u{2AB8}'),
    ("precnapprox", '\u{2AB9}'),
    ("succnapprox", '\u{2ABA}'),
    // More operators
    ("dotplus", '\u{2214}'),
    ("smallsetminus", '\u{2216}'),
    ("dotminus", '\u{2238}'),
    ("cupdot", '\u{228D}'),
    ("circledcirc", '\u{229A}'),
    ("circledast", '\u{229B}'),
    ("circleddash", '\u{229D}'),
    ("boxplus", '\u{229E}'),
    ("boxminus", '\u{229F}'),
    ("boxtimes", '\u{22A0}'),
    ("boxdot", '\u{22A1}'),
    ("intercal", '\u{22BA}'),
    ("veebar", '\u{22BB}'),
    ("barwedge", '\u{22BC}'),
    ("barvee", '\u{22BD}'),
    ("divideontimes", '\u{22C7}'),
    ("ltimes", '\u{22C9}'),
    ("rtimes", '\u{22CA}'),
    ("leftthreetimes", '\u{22CB}'),
    ("rightthreetimes", '\u{22CC}'),
    ("curlyvee", '\u{22CE}'),
    ("curlywedge", '\u{22CF}'),
    ("Cap", '\u{22D2}'),
    ("Cup", '\u{22D3}'),
    ("doublebarwedge", '\u{2306}'),
    ("bigodot", '\u{2A00}'),
    ("oiint", '\u{222F}'),
    ("oiiint", '\u{2230}'),
    ("iiiint", '\u{2A0C}'),
    ("minus", '\u{2212}'),
    ("cdotp", '\u{00B7}'),
    // Letter-like symbols
    ("hslash", '\u{210F}'),
    ("beth", '\u{2136}'),
    ("gimel", '\u{2137}'),
    ("daleth", '\u{2138}'),
    ("mho", '\u{2127}'),
    ("eth", '\u{00F0}'),
    ("Finv", '\u{2132}'),
    ("Game", '\u{2141}'),
    ("digamma", '\u{03DD}'),
    ("varkappa", '\u{03F0}'),
    ("backepsilon", '\u{03F6}'),
    ("AA", '\u{00C5}'),
    ("ae", '\u{00E6}'),
    ("AE", '\u{00C6}'),
    ("oe", '\u{0153}'),
    ("OE", '\u{0152}'),
    ("o", '\u{00F8}'),
    ("O", '\u{00D8}'),
    ("ss", '\u{00DF}'),
    ("l", '\u{0142}'),
    ("L", '\u{0141}'),
    // Logic and sets
    ("complement", '\u{2201}'),
    ("nexists", '\u{2204}'),
    ("varnothing", '\u{2205}'),
    ("smallin", '\u{220A}'),
    ("QED", '\u{220E}'),
    ("measuredangle", '\u{2221}'),
    ("sphericalangle", '\u{2222}'),
    ("rightangle", '\u{221F}'),
    ("therefore", '\u{2234}'),
    ("because", '\u{2235}'),
    ("Colon", '\u{2237}'),
    ("lnot", '\u{00AC}'),
    ("sqrt", '\u{221A}'),
    // Dots
    ("dots", '\u{2026}'),
    ("adots", '\u{22F0}'),
    // Delimiters
    ("ulcorner", '\u{231C}'),
    ("urcorner", '\u{231D}'),
    ("llcorner", '\u{231E}'),
    ("lrcorner", '\u{231F}'),
    ("lbrack", '\u{005B}'),
    ("rbrack", '\u{005D}'),
    ("leftparen", '\u{0028}'),
    ("rightparen", '\u{0029}'),
    // Shapes
    ("bigtriangleup", '\u{25B3}'),
    ("vartriangle", '\u{25B5}'),
    ("blacktriangle", '\u{25B4}'),
    ("triangleright", '\u{25B9}'),
    ("blacktriangleright", '\u{25B8}'),
    ("bigtriangledown", '\u{25BD}'),
    ("triangledown", '\u{25BF}'),
    ("blacktriangledown", '\u{25BE}'),
    ("triangleleft", '\u{25C3}'),
    ("blacktriangleleft", '\u{25C2}'),
    ("lozenge", '\u{25CA}'),
    ("blacksquare", '\u{25A0}'),
    ("square", '\u{25A1}'),
    ("Box", '\u{25A1}'),
    ("bigstar", '\u{2605}'),
    ("diagup", '\u{2571}'),
    ("diagdown", '\u{2572}'),
    ("varspadesuit", '\u{2664}'),
    ("varheartsuit", '\u{2665}'),
    ("vardiamondsuit", '\u{2666}'),
    ("varclubsuit", '\u{2667}'),
    ("checkmark", '\u{2713}'),
    ("maltese", '\u{2720}'),
    ("sun", '\u{263C}'),
    ("mercury", '\u{263F}'),
    ("venus", '\u{2640}'),
    ("earth", '\u{2641}'),
    ("mars", '\u{2642}'),
    ("jupiter", '\u{2643}'),
    ("saturn", '\u{2644}'),
    ("uranus", '\u{2645}'),
    ("neptune", '\u{2646}'),
    ("pluto", '\u{2647}'),
    ("male", '\u{2642}'),
    ("female", '\u{2640}'),
    // Text symbols
    ("circledR", '\u{00AE}'),
    ("yen", '\u{00A5}'),
    ("sterling", '\u{00A3}'),
    ("cent", '\u{00A2}'),
    ("backprime", '\u{2035}'),
    ("dag", '\u{2020}'),
    ("ddag", '\u{2021}'),
];

static BY_NAME: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| TEX_SYMBOLS.iter().copied().collect());

/// Maps a symbol to the character a font should be asked for.
///
/// In math mode `-` is the minus sign rather than the hyphen.
pub fn unicode_for(symbol: &str, math: bool) -> Option<char> {
    if let Some(name) = symbol.strip_prefix('\\') {
        if !name.is_empty() {
            return BY_NAME.get(name).copied();
        }
    }

    let mut chars = symbol.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if math && ch == '-' {
        return Some('\u{2212}');
    }
    Some(ch)
}

/// Whether `symbol` is always drawn slanted.
pub fn is_slanted_symbol(symbol: &str) -> bool {
    SLANTED_SYMBOLS.contains(&symbol)
}

/// Whether an italic request for `ch` should be served by the italic face.
///
/// Only letters are italicized, and Greek capitals stay upright as in TeX.
pub fn italicizes(ch: char) -> bool {
    ch.is_alphabetic() && !('\u{0391}'..='\u{03A9}').contains(&ch)
}

/// TeX control words of [`TEX_SYMBOLS`] with their leading backslash, in
/// table order.
pub fn control_words() -> impl Iterator<Item = String> {
    TEX_SYMBOLS.iter().map(|(name, _)| format!("\\{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_control_words_resolve() {
        assert_eq!(unicode_for("\\alpha", false), Some('α'));
        assert_eq!(unicode_for("\\sum", true), Some('∑'));
        assert_eq!(unicode_for("\\nosuchsymbol", false), None);
    }

    #[test]
    fn test_single_characters_resolve() {
        assert_eq!(unicode_for("A", false), Some('A'));
        assert_eq!(unicode_for("é", true), Some('é'));
        assert_eq!(unicode_for(" ", false), Some(' '));
        assert_eq!(unicode_for("\\", false), Some('\\'));
        assert_eq!(unicode_for("AV", false), None);
        assert_eq!(unicode_for("", false), None);
    }

    #[test]
    fn test_math_minus() {
        assert_eq!(unicode_for("-", true), Some('\u{2212}'));
        assert_eq!(unicode_for("-", false), Some('-'));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = TEX_SYMBOLS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), TEX_SYMBOLS.len());
    }

    #[test]
    fn test_italic_rules() {
        assert!(italicizes('a'));
        assert!(italicizes('σ'));
        assert!(italicizes('é'));
        assert!(!italicizes('Σ'));
        assert!(!italicizes('∑'));
        assert!(!italicizes(' '));
        assert!(is_slanted_symbol("\\int"));
        assert!(!is_slanted_symbol("\\sum"));
    }
}
