//! Inflection synthesis.
//!
//! Many senses arrive without a full set of inflections: regular plurals the
//! source never listed, verbs built directly on a bare head template, or alt
//! forms that inherited a countable/comparable parent. For those we guess the
//! missing forms with plain English spelling rules and append a copy tagged
//! `AUTOGEN`, so curators can reject the occasional nonsense later. Original
//! senses are never touched.

use crate::decode::{headword_key, is_alpha};
use crate::sense::{Headwords, Sense, ALLOW_ADJ_AUTOGEN, AUTOGEN};

// ───────────────────────────────────────────────────────────────────────
// Exception tables
// ───────────────────────────────────────────────────────────────────────

const MAN_EXCEPTIONS: [&str; 18] = [
    "BIRMAN", "BRACHMAN", "BRAMAN", "DISCMAN", "FLEHMAN", "HESSEMAN", "IMMELMAN", "KERMAN", "KUMAN",
    "KUNSTLEROMAN", "KURMAN", "LYERMAN", "OSMAN", "OTHMAN", "ROMAN", "YALMAN", "YELMAN", "ZAMAN",
];

const FOOT_EXCEPTIONS: [&str; 4] = ["ICEFOOT", "SALTFOOT", "SOWFOOT", "SWIFTFOOT"];

// Plural in -ES regardless of ending
const ES_PLURALS: [&str; 14] = [
    "ARCH", "ARCSECH", "ARRACACH", "ARRACH", "ARSECH", "CESAREVICH", "KNOLYCH", "KNOWLECH", "KNOWLYCH",
    "MAIZESTARCH", "SANDWHICH", "SPINNACH", "TUCH", "WICH",
];

const VERB_DOUBLING_EXCEPTIONS: [&str; 5] = ["COMISERAT", "DIAGNOSIS", "LYK", "MANET", "TACET"];

const ADJ_DOUBLING_EXCEPTIONS: [&str; 8] = [
    "BUCKSOM", "EEEVIL", "HOLESOM", "NICKEL", "NOBEL", "OL", "SUBTIL", "YALLAR",
];

const SIBILANT_DIGRAPHS: [&str; 2] = ["SH", "ZH"];
const SIBILANT_TRIGRAPHS: [&str; 3] = ["NCH", "SCH", "TCH"];
const SIBILANT_TETRAGRAPHS: [&str; 5] = ["EACH", "EECH", "OACH", "OOCH", "OUCH"];

const DOUBLING_CONSONANTS: &[u8] = b"BCDFGKLMNPRSTV";

// ───────────────────────────────────────────────────────────────────────
// Spelling helpers
// ───────────────────────────────────────────────────────────────────────

/// Byte `n` places from the end (1 = last).
fn back(h: &str, n: usize) -> Option<u8> {
    h.len().checked_sub(n).map(|i| h.as_bytes()[i])
}

fn back_in(h: &str, n: usize, set: &[u8]) -> bool {
    back(h, n).is_some_and(|b| set.contains(&b))
}

fn stem(h: &str, n: usize) -> &str {
    &h[..h.len().saturating_sub(n)]
}

fn ends_with_any(h: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| h.ends_with(s))
}

fn ends_in_consonant_y(h: &str) -> bool {
    back(h, 1) == Some(b'Y') && h.len() >= 2 && !back_in(h, 2, b"AEIOUY")
}

fn ends_in_sibilant_cluster(h: &str) -> bool {
    ends_with_any(h, &SIBILANT_DIGRAPHS)
        || ends_with_any(h, &SIBILANT_TRIGRAPHS)
        || ends_with_any(h, &SIBILANT_TETRAGRAPHS)
}

/// Silent final E, unless the spelled word ends in an accented é.
fn ends_in_silent_e(h: &str, word: &str) -> bool {
    back(h, 1) == Some(b'E') && !word.ends_with('é')
}

/// Whether a list of forms shows a comparative (-ER) and a superlative (-EST).
pub fn comparison_forms(forms: &[String]) -> (bool, bool) {
    let mut er = false;
    let mut est = false;
    for form in forms {
        let key = headword_key(form);
        if is_alpha(&key) && key.len() >= 3 {
            er |= key.ends_with("ER");
            est |= key.ends_with("EST");
        }
    }
    (er, est)
}

// ───────────────────────────────────────────────────────────────────────
// Rules
// ───────────────────────────────────────────────────────────────────────

/// Regular plural of an upper-case headword.
pub fn plural(h: &str) -> String {
    if h.ends_with("MAN") && !MAN_EXCEPTIONS.contains(&h) {
        format!("{}MEN", stem(h, 3))
    } else if h.ends_with("FOOT") && !FOOT_EXCEPTIONS.contains(&h) {
        format!("{}EET", stem(h, 3))
    } else if h.ends_with("LOAF") {
        format!("{}VES", stem(h, 1))
    } else if h.ends_with("TOOTH") {
        format!("{}EETH", stem(h, 4))
    } else if h.ends_with("PERSON") {
        format!("{}OPLE", stem(h, 4))
    } else if ends_in_consonant_y(h) {
        format!("{}IES", stem(h, 1))
    } else if h.ends_with("SIS") || (h.len() >= 6 && h.ends_with("XIS")) {
        format!("{}ES", stem(h, 2))
    } else if (back_in(h, 1, b"JSXZ") && !h.ends_with("OUX"))
        || ends_in_sibilant_cluster(h)
        || ES_PLURALS.contains(&h)
    {
        format!("{}ES", h)
    } else {
        format!("{}S", h)
    }
}

fn verb_doubles(h: &str) -> bool {
    let (Some(last), Some(prev)) = (back(h, 1), back(h, 2)) else {
        return false;
    };
    DOUBLING_CONSONANTS.contains(&last)
        && b"AEIOUY".contains(&prev)
        && last != prev
        && !h.ends_with("EN")
        && (h.len() == 2 || (back(h, 3) != Some(prev) && !back_in(h, 3, b"AEIOU")))
        && (h.len() < 4 || !h.ends_with("ER"))
        && !VERB_DOUBLING_EXCEPTIONS.contains(&h)
}

/// Third-person singular, present participle and past forms.
pub fn conjugate(h: &str, word: &str) -> Option<[String; 3]> {
    let last = back(h, 1)?;

    let forms = if ends_in_consonant_y(h) {
        [format!("{}IES", stem(h, 1)), format!("{}ING", h), format!("{}IED", stem(h, 1))]
    } else if ends_in_silent_e(h, word) {
        let ing = if h.len() >= 2 && !back_in(h, 2, b"AEIO") {
            format!("{}ING", stem(h, 1))
        } else {
            format!("{}ING", h)
        };
        [format!("{}S", h), ing, format!("{}D", h)]
    } else if verb_doubles(h) {
        let s = if last == b'S' { format!("{}SES", h) } else { format!("{}S", h) };
        let last = last as char;
        [s, format!("{}{}ING", h, last), format!("{}{}ED", h, last)]
    } else if back_in(h, 1, b"JXZ") || ends_in_sibilant_cluster(h) {
        [format!("{}ES", h), format!("{}ING", h), format!("{}ED", h)]
    } else {
        let s = if last == b'S' { format!("{}ES", h) } else { format!("{}S", h) };
        [s, format!("{}ING", h), format!("{}ED", h)]
    };
    Some(forms)
}

fn adjective_doubles(h: &str) -> bool {
    let (Some(last), Some(prev)) = (back(h, 1), back(h, 2)) else {
        return false;
    };
    let baaad = h == "BAAAD";
    DOUBLING_CONSONANTS.contains(&last)
        && (h.len() < 4 || !ends_with_any(h, &["AL", "AN", "EN", "ER", "IC", "ID", "IN", "ON"]))
        && !ends_with_any(h, &["AYN", "EAT", "LES", "LUT", "OUS"])
        && (h.len() < 5 || !h.ends_with("ED"))
        && b"AEIOUY".contains(&prev)
        && (!back_in(h, 3, b"AEIOU") || baaad)
        && last != prev
        && (h.len() == 2 || back(h, 3) != Some(prev) || baaad)
        && !ADJ_DOUBLING_EXCEPTIONS.contains(&h)
}

/// Comparative and superlative forms.
pub fn compare(h: &str, word: &str, alt: Option<&str>) -> Option<[String; 2]> {
    let last = back(h, 1)?;

    let forms = if alt == Some("far") {
        [format!("{}THER", h), format!("{}THEST", h)]
    } else if h.ends_with("EY") && !h.ends_with("IEY") {
        [format!("{}IER", stem(h, 2)), format!("{}IEST", stem(h, 2))]
    } else if ends_in_consonant_y(h) {
        [format!("{}IER", stem(h, 1)), format!("{}IEST", stem(h, 1))]
    } else if ends_in_silent_e(h, word) {
        [format!("{}R", h), format!("{}ST", h)]
    } else if adjective_doubles(h) {
        let last = last as char;
        [format!("{}{}ER", h, last), format!("{}{}EST", h, last)]
    } else {
        [format!("{}ER", h), format!("{}EST", h)]
    };
    Some(forms)
}

fn wants_plural(sense: &Sense) -> bool {
    matches!(sense.pos.as_str(), "noun" | "num")
        && sense.forms.is_empty()
        && (sense.has_tag("countable")
            || (!sense.has_tag("uncountable")
                && !sense.has_tag("singular-only")
                && !sense.has_tag("form-of")
                && !sense.has_tag("plural"))
            || sense.has_tag("no-plural"))
        && !sense.gloss.contains("plural")
}

fn wants_conjugation(sense: &Sense) -> bool {
    sense.pos == "verb" && sense.forms.len() <= 2 && !sense.has_tag("form-of")
}

fn wants_comparison(sense: &Sense) -> bool {
    let shown = comparison_forms(&sense.forms);
    (sense.has_tag(ALLOW_ADJ_AUTOGEN) || (sense.pos == "adj" && shown != (false, false)))
        && shown != (true, true)
        && !sense.has_tag("form-of")
}

fn autogen_copy(sense: &Sense, forms: impl IntoIterator<Item = String>) -> Sense {
    let mut copy = sense.clone();
    copy.forms.extend(forms);
    copy.tags.push(AUTOGEN.to_string());
    copy
}

// ───────────────────────────────────────────────────────────────────────
// Synthesis
// ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisStats {
    pub inherited: usize,
    pub plurals: usize,
    pub conjugations: usize,
    pub comparisons: usize,
}

impl SynthesisStats {
    pub fn total(&self) -> usize {
        self.inherited + self.plurals + self.conjugations + self.comparisons
    }
}

/// Derived `AUTOGEN` copies for one sense of `headword`.
pub fn synthesize_sense(headword: &str, sense: &Sense, stats: &mut SynthesisStats) -> Vec<Sense> {
    let mut copies = Vec::new();

    if !sense.inherited_suffixes.is_empty() {
        let forms = sense
            .inherited_suffixes
            .iter()
            .filter(|rule| headword.len() >= rule.removal.len() && headword.ends_with(&rule.removal))
            .map(|rule| format!("{}{}", stem(headword, rule.removal.len()), rule.addition));
        copies.push(autogen_copy(sense, forms.collect::<Vec<_>>()));
        stats.inherited += 1;
    }

    if wants_plural(sense) && !headword.is_empty() {
        copies.push(autogen_copy(sense, [plural(headword)]));
        stats.plurals += 1;
    }

    if wants_conjugation(sense) {
        if let Some(forms) = conjugate(headword, &sense.word) {
            copies.push(autogen_copy(sense, forms));
            stats.conjugations += 1;
        }
    }

    if wants_comparison(sense) {
        if let Some(forms) = compare(headword, &sense.word, sense.alt.as_deref()) {
            copies.push(autogen_copy(sense, forms));
            stats.comparisons += 1;
        }
    }

    copies
}

/// Append synthesized inflections to every headword. Only the senses present
/// before the call are considered.
pub fn synthesize(headwords: &mut Headwords) -> SynthesisStats {
    let mut stats = SynthesisStats::default();

    for (headword, senses) in headwords.iter_mut() {
        let original = senses.len();
        for i in 0..original {
            let copies = synthesize_sense(headword, &senses[i], &mut stats);
            senses.extend(copies);
        }
    }

    tracing::debug!(?stats, "synthesized inflections");
    stats
}
