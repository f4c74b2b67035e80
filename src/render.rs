//! Canonical one-line definitions.
//!
//! `def` is what curators read and what the digest is computed from, so the
//! same tags, gloss, part of speech and forms must always render the same
//! bytes.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::decode::{headword_key, is_alpha};
use crate::sense::{Headwords, Sense};

lazy_static! {
    // Grammatical and structural tags already conveyed by the part of speech,
    // the forms list, or nothing a reader needs
    static ref EXCLUDED_TAGS: HashSet<&'static str> = [
        "abbreviation",
        "acronym",
        "adjective",
        "adverb",
        "adverbial",
        "agent",
        "agent noun",
        "ALLOW ADJ AUTOGEN",
        "also attributive",
        "also attributively",
        "also in plural form",
        "also intransitive",
        "also reflexive",
        "also used attributively",
        "alt-of",
        "alternative",
        "ambitransitive",
        "Anglicised",
        "anterior",
        "apocopic",
        "as a collective noun",
        "aspect",
        "attested in the past participle only",
        "attributive",
        "attributively",
        "AUTOGEN",
        "auxiliary",
        "capitalized",
        "catenative",
        "causative",
        "character",
        "chiefly as past participle",
        "chiefly attributive",
        "chiefly attributive or in the plural",
        "chiefly attributively",
        "chiefly countable",
        "chiefly in past participle form",
        "chiefly in the plural",
        "chiefly in the singular",
        "chiefly in the superlative",
        "chiefly plural",
        "chiefly not comparable",
        "chiefly transitive",
        "chiefly uncountable",
        "clipping",
        "collective",
        "collective noun",
        "commonly in plural",
        "comparable",
        "comparative",
        "comparative-only",
        "conjunctive",
        "contracted",
        "contraction",
        "copulative",
        "countable",
        "countable and uncountable",
        "countable or uncountable",
        "dative",
        "defective",
        "definite",
        "definition",
        "deliberate",
        "demonstrative",
        "degree",
        "demonym",
        "determiner",
        "direct",
        "distal",
        "ditransitive",
        "duration",
        "ellipsis",
        "empty-gloss",
        "ergative",
        "error-lua-exec",
        "error-misspelling",
        "especially but not exclusively attributive",
        "especially in plural",
        "especially in the plural",
        "excessive",
        "familiar",
        "feminine",
        "first-person",
        "focus",
        "form-of",
        "frequency",
        "frequently attributive",
        "g-person",
        "generic",
        "genitive",
        "gerund",
        "hard",
        "heading",
        "imperative-only",
        "imperfect",
        "impersonal",
        "in-compounds",
        "in-plural",
        "indeclinable",
        "indefinite",
        "indicative",
        "indirect",
        "initialism",
        "intensifier",
        "interrogative",
        "in past participle form",
        "in singular or plural",
        "in the plural",
        "in the singular",
        "in the superlative",
        "intransitive",
        "intransitive and transitive",
        "intransitive except in archaic usage",
        "intransitive or reflexive",
        "intransitive or transitive",
        "intransitive preposition",
        "intransitive (usually with of or for)",
        "invariable",
        "irregular",
        "letter",
        "location",
        "lowercase",
        "manner",
        "masculine",
        "mass noun",
        "medial",
        "misconstruction",
        "misspelling",
        "modal",
        "morpheme",
        "mostly in plural",
        "mostly plural",
        "negative",
        "neologism",
        "neuter",
        "never attributive",
        "no-comparative",
        "no-gloss",
        "no-past",
        "no-past-participle",
        "no-plural",
        "no-present-participle",
        "nominalization",
        "nominative",
        "normally used attributively",
        "not attributive",
        "not countable",
        "not comparable",
        "not-comparable",
        "noun-from-verb",
        "now only in plural",
        "now usually in the plural",
        "objective",
        "oblique",
        "often attributive",
        "often attributively",
        "often impersonal",
        "often in plural",
        "often in the plural",
        "often passive voice or reflexive",
        "often plural",
        "often transitive",
        "often used attributively",
        "often used attributively to modify other nouns",
        "often used in the past participle",
        "often reflexive",
        "only in plural",
        "only plural form attested",
        "originally intransitive",
        "participial adjective",
        "participle",
        "passive",
        "past",
        "perfect",
        "perfective",
        "personal",
        "phoneme",
        "phrase",
        "place",
        "plural",
        "plural-normally",
        "plural only",
        "plural-only",
        "plural taken as singular",
        "positive",
        "possessive",
        "predicative",
        "present",
        "pronoun",
        "pronunciation-spelling",
        "proper-noun",
        "proximal",
        "rarely transitive",
        "rarely used in the singular",
        "reciprocal",
        "reduplication",
        "reflexive",
        "reflexive pronoun",
        "relative",
        "romanization",
        "second-person",
        "sequence",
        "singular",
        "singular only",
        "singular-only",
        "singular or in plural",
        "singular or plural",
        "singular or plural in construction",
        "sometimes attributive",
        "sometimes intransitive",
        "sometimes reflexive",
        "sometimes transitive",
        "sometimes used attributively",
        "stative",
        "strict-sense",
        "subjective",
        "subjunctive",
        "substantive",
        "superlative",
        "third-person",
        "time",
        "transitive",
        "transitive and intransitive",
        "transitive and reflexive",
        "transitive or ditransitive",
        "transitive or impersonal",
        "transitive or intransitive",
        "transitive or intransitive or ditransitive",
        "transitive or intransitive or ergative",
        "transitive or stative",
        "transitive or with a subjunctive clause",
        "TRANSLINGUAL",
        "typically in plural",
        "uncountable",
        "uncountable or countable",
        "universal",
        "uppercase",
        "used with a singular or plural verb",
        "usually a mass noun",
        "usually attributively",
        "usually countable",
        "usually ditransitive",
        "usually in singular",
        "usually in the past participle",
        "usually in the plural",
        "usually intransitive",
        "usually not comparable",
        "usually plural",
        "usually pluralized",
        "usually plural only",
        "usually singular",
        "usually reflexive",
        "usually transitive",
        "usually uncountable",
        "variant",
        "verb",
        "vocative",
        "with-infinitive",
        "with singular verb",
    ]
    .into_iter()
    .collect();
}

/// Tags that only hedge another tag and mean nothing on their own.
const HEDGE_TAGS: [&str; 6] = ["also", "especially", "often", "sometimes", "specifically", "usually"];

/// Region codes that are only dropped when contained case-sensitively.
const CASE_SENSITIVE_TAGS: [&str; 2] = ["UK", "US"];

/// Short part-of-speech label used in `def`.
pub fn pos_abbr(pos: &str) -> &str {
    match pos {
        "contraction" => "contr",
        "intj" => "interj",
        "name" | "noun" | "num" => "n",
        "prep_phrase" => "prep phrase",
        "verb" => "v",
        other => other,
    }
}

fn is_substring_of(tag: &str, other: &str) -> bool {
    if tag == other {
        return false;
    }
    let contained = other.to_lowercase().contains(&tag.to_lowercase())
        && (!CASE_SENSITIVE_TAGS.contains(&tag) || other.contains(tag));
    let figurative = tag == "figuratively" && other.contains("figurative") && other != "figurative";
    contained || figurative
}

/// Tags shown in the parenthetical prefix, in order.
pub fn visible_tags(tags: &[String]) -> Vec<String> {
    let mut visible: Vec<String> = Vec::new();
    for tag in tags {
        if EXCLUDED_TAGS.contains(tag.as_str()) {
            continue;
        }
        let shown = tag.replace('-', " ");
        if !visible.contains(&shown) {
            visible.push(shown);
        }
    }

    if visible.iter().all(|tag| HEDGE_TAGS.contains(&tag.as_str())) {
        return Vec::new();
    }

    visible
        .iter()
        .filter(|tag| !visible.iter().any(|other| is_substring_of(tag, other)))
        .cloned()
        .collect()
}

/// Forms shown in the suffix: decoded, upper-cased, alphabetic, unique.
pub fn visible_forms(forms: &[String]) -> Vec<String> {
    let mut visible: Vec<String> = Vec::new();
    for form in forms {
        let key = headword_key(form);
        if is_alpha(&key) && !visible.contains(&key) {
            visible.push(key);
        }
    }
    visible
}

/// Render `(tags) gloss [pos FORMS]`.
pub fn render_def(sense: &Sense) -> String {
    let mut def = String::new();

    let tags = visible_tags(&sense.tags);
    if !tags.is_empty() {
        def.push('(');
        def.push_str(&tags.join(", "));
        def.push_str(") ");
    }

    def.push_str(&sense.gloss);
    def.push_str(" [");
    def.push_str(pos_abbr(&sense.pos));

    let forms = visible_forms(&sense.forms);
    if !forms.is_empty() {
        def.push(' ');
        def.push_str(&forms.join(", "));
    }
    def.push(']');
    def
}

/// Assign `def` to every sense.
pub fn render_all(headwords: &mut Headwords) {
    for sense in headwords.values_mut().flatten() {
        sense.def = render_def(sense);
    }
}
