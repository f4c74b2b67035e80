//! Alternative-form resolution.
//!
//! A sense whose gloss reads "plural of cat", "Alternative spelling of colour"
//! and so on refers to another headword. For every sense of that headword with
//! the same spelling and part of speech, a copy of the referring sense is added
//! with the parent's gloss spliced in: "plural of cat (A small feline.)".
//!
//! References form a directed graph that may contain cycles. Headwords are
//! resolved depth-first from an explicit stack so that a parent is complete
//! before its children copy from it; a headword is marked in-progress before
//! anything below it is visited and is never entered twice.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::decode::{decode, headword_key, is_alpha};
use crate::inflect::comparison_forms;
use crate::render::pos_abbr;
use crate::sense::{Headwords, Sense, SuffixRule, ALLOW_ADJ_AUTOGEN};

/// Tags copied from a parent onto every derived sense.
const INHERITED_TAGS: [&str; 4] = ["vulgar", "derogatory", "offensive", "slur"];

/// References that are almost always a title rather than a lemma.
const IGNORED_REFERENCES: [&str; 2] = ["Saint", "St"];

/// Gloss templates in priority order. Group 1 captures the reference.
const ALT_PATTERNS: &[&str] = &[
    r"([^\s]*?)\.?$",
    r"Abbreviation of (.*?)\.?$",
    r"abstract noun of (.*?)\.?$",
    r"Acronym of (.*?)\.?$",
    r"active participle of (.*?)\.?$",
    r"agent noun of (.*?)\.?$",
    r"Alternative letter-case form of (.*?)\.?$",
    r"Alternative form of (.*?)\.?$",
    r"plural of .*? \(alternative form of (.*?)\)\.?$",
    r"Alternative reconstruction of (.*?)\.?$",
    r"Alternative spelling of (.*?)\.?$",
    r"alternative typography of (.*?)\.?$",
    r"Aphetic form of (.*?)\.?$",
    r"Apocopic form of (.*?)\.?$",
    r"Archaic form of (.*?)\.?$",
    r"Archaic spelling of (.*?)\.?$",
    r"Aspirate mutation of (.*?)\.?$",
    r"attributive form of (.*?)\.?$",
    r"Augmentative of (.*?)\.?$",
    r"broad form of (.*?)\.?$",
    r"causative of (.*?)\.?$",
    r"Clipping of (.*?)\.?$",
    r"Combining form of (.*?)\.?$",
    r"comparative degree of (.*?)\.?$",
    r"comparative form of (.*?)\.?$",
    r"construed with (.*?)\.?$",
    r"Contraction of (.*?)\.?$",
    r"Dated form of (.*?)\.?$",
    r"Dated spelling of (.*?)\.?$",
    r"Deliberate misspelling of (.*?)\.?$",
    r"diminutive of (.*?)\.?$",
    r"Eclipsed form of (.*?)\.?$",
    r"Eggcorn of (.*?)\.?$",
    r"Ellipsis of (.*?)\.?$",
    r"Elongated form of (.*?)\.?$",
    r"endearing diminutive of (.*?)\.?$",
    r"endearing form of (.*?)\.?$",
    r"Euphemistic form of (.*?)\.?$",
    r"Eye dialect spelling of (.*?)\.?$",
    r"female equivalent of (.*?)\.?$",
    r"feminine of (.*?)\.?$",
    r"feminine plural of (.*?)\.?$",
    r"feminine plural of the past participle of (.*?)\.?$",
    r"feminine singular of (.*?)\.?$",
    r"feminine singular of the past participle of (.*?)\.?$",
    r"first-person simple past of (.*?)\.?$",
    r"Former name of (.*?)\.?$",
    r"frequentative of (.*?)\.?$",
    r"gerund of (.*?)\.?$",
    r"h-prothesized form of (.*?)\.?$",
    r"Hard mutation of (.*?)\.?$",
    r"harmonic variant of (.*?)\.?$",
    r"Honorific alternative letter-case form of (.*?), sometimes used when referring to God or another important figure who is understood from context\.?$",
    r"imperfective form of (.*?)\.?$",
    r"Informal form of (.*?)\.?$",
    r"Informal spelling of (.*?)\.?$",
    r"Initialism of (.*?)\.?$",
    r"iterative of (.*?)\.?$",
    r"Lenited form of (.*?)\.?$",
    r"literary form of (.*?)\.?$",
    r"masculine equivalent of (.*?)\.?$",
    r"masculine of (.*?)\.?$",
    r"masculine plural of (.*?)\.?$",
    r"masculine plural of the past participle of (.*?)\.?$",
    r"medieval spelling of (.*?)\.?$",
    r"men's speech form of (.*?)\.?$",
    r"Misconstruction of (.*?)\.?$",
    r"Misromanization of (.*?)\.?$",
    r"Misspelling of (.*?)\.?$",
    r"Mixed mutation of (.*?)\.?$",
    r"Nasal mutation of (.*?)\.?$",
    r"negative form of (.*?)\.?$",
    r"neuter plural of (.*?)\.?$",
    r"neuter singular of (.*?)\.?$",
    r"neuter singular of the past participle of (.*?)\.?$",
    r"Nomen sacrum form of (.*?)\.?$",
    r"nominalization of (.*?)\.?$",
    r"Nonstandard form of (.*?)\.?$",
    r"Nonstandard spelling of (.*?)\.?$",
    r"nuqtaless form of (.*?)\.?$",
    r"Obsolete form of (.*?)\.?$",
    r"Obsolete spelling of (.*?)\.?$",
    r"obsolete typography of (.*?)\.?$",
    r"participle of (.*?)\.?$",
    r"\(deprecated template usage\) passive of (.*?)\.?$",
    r"passive participle of (.*?)\.?$",
    r"of the past participle of (.*?)\.?$",
    r"past of (.*?)\.?$",
    r"past participle of (.*?)\.?$",
    r"Pejorative of (.*?)\.?$",
    r"perfective form of (.*?)\.?$",
    r"plural of (.*?)\.?$",
    r"present participle and gerund of (.*?)\.?$",
    r"present participle of (.*?)\.?$",
    r"Pronunciation spelling of (.*?)\.?$",
    r"Pronunciation variant of (.*?)\.?$",
    r"Rare form of (.*?)\.?$",
    r"Rare spelling of (.*?)\.?$",
    r"reflexive of (.*?)\.?$",
    r"Romanization of (.*?)\.?$",
    r"Scribal abbreviation of (.*?)\.?$",
    r"second-person singular simple past indicative of (.*?)\.?$",
    r"second-person singular simple present indicative of (.*?)\.?$",
    r"Short for (.*?)\.?$",
    r"simple past and past participle of (.*?)\.?$",
    r"simple past of (.*?)\.?$",
    r"singular of (.*?)\.?$",
    r"slender form of (.*?)\.?$",
    r"Soft mutation of (.*?)\.?$",
    r"Standard form of (.*?)\.?$",
    r"Standard spelling of (.*?)\.?$",
    r"superlative degree of (.*?)\.?$",
    r"superlative form of (.*?)\.?$",
    r"Superseded spelling of (.*?)\.?$",
    r"Syncopic form of (.*?)\.?$",
    r"Synonym of (.*?)\.?$",
    r"t-prothesized form of (.*?)\.?$",
    r"third-person simple past of (.*?)\.?$",
    r"third-person singular simple present indicative of (.*?)\.?$",
    r"Uncommon form of (.*?)\.?$",
    r"Uncommon spelling of (.*?)\.?$",
    r"verbal noun of (.*?)\.?$",
    r".*? spelling of (.*?)\.?$",
];

/// A compiled gloss template.
pub struct AltTemplate {
    pub pattern: &'static str,
    pub regex: Regex,
    /// The bare single-word template refers to the lower-case word.
    pub lowercase: bool,
}

lazy_static! {
    pub static ref ALT_TEMPLATES: Vec<AltTemplate> = ALT_PATTERNS
        .iter()
        .enumerate()
        .map(|(i, &pattern)| AltTemplate {
            pattern,
            regex: Regex::new(&format!("(?i)^(?:{})", pattern)).unwrap(),
            lowercase: i == 0,
        })
        .collect();

    // Over-capture ends at the first parenthetical or punctuation mark
    static ref REFERENCE_END: Regex = Regex::new(r"^(.*?)(?: \(|[.;:,!?]|$)").unwrap();
}

/// The reference found in a gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltMatch {
    pub pattern: &'static str,
    /// Text captured by the template, replaced in the derived gloss.
    pub captured: String,
    /// Captured text cut at the first delimiter.
    pub trimmed: String,
    /// Word the sense refers to.
    pub reference: String,
}

/// Match `gloss` against the template table, first match wins.
pub fn match_template(gloss: &str) -> Option<AltMatch> {
    let (template, captured) = ALT_TEMPLATES.iter().find_map(|template| {
        template
            .regex
            .captures(gloss)
            .and_then(|cap| cap.get(1))
            .map(|m| (template, m.as_str()))
    })?;

    let trimmed = REFERENCE_END
        .captures(captured)
        .and_then(|cap| cap.get(1))
        .map_or(captured, |m| m.as_str());

    let reference = if template.lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    };

    if reference.is_empty() || IGNORED_REFERENCES.contains(&reference.as_str()) {
        return None;
    }

    Some(AltMatch {
        pattern: template.pattern,
        captured: captured.to_string(),
        trimmed: trimmed.to_string(),
        reference,
    })
}

/// Irregular suffix rules between a parent headword and its forms, e.g.
/// MOUSE with MICE gives `OUSE/ICE`.
pub fn suffix_rules(parent_key: &str, forms: &[String]) -> Vec<SuffixRule> {
    let mut rules = Vec::new();
    for form in forms {
        let form_key = headword_key(form);
        let common = parent_key
            .bytes()
            .zip(form_key.bytes())
            .take_while(|(a, b)| a == b)
            .count();

        let removal = &parent_key[common..];
        let addition = &form_key[common..];
        let plain = |s: &str| s.is_empty() || is_alpha(s);
        if plain(removal) && plain(addition) {
            rules.push(SuffixRule {
                removal: removal.to_string(),
                addition: addition.to_string(),
            });
        }
    }
    rules
}

fn is_uncountable_noun(parent: &Sense) -> bool {
    parent.is_noun_like()
        && (parent.has_tag("uncountable")
            || parent.has_tag("plural-normally")
            || parent.has_tag("plural-only")
            || (parent.has_tag("plural") && parent.forms.is_empty()))
        && !parent.has_tag("countable")
        && !parent.has_tag("usually")
}

fn is_countable_noun(parent: &Sense) -> bool {
    parent.is_noun_like()
        && ((!parent.has_tag("uncountable")
            && !parent.has_tag("plural")
            && !parent.has_tag("plural-only"))
            || parent.has_tag("countable")
            || parent.has_tag("usually"))
}

fn is_incomparable(parent: &Sense) -> bool {
    matches!(parent.pos.as_str(), "adj" | "adv")
        && parent.has_tag("not-comparable")
        && !parent.has_tag("comparable")
        && !parent.has_tag("usually")
}

/// Copy of `child` defined through `parent`.
pub fn derive_sense(child: &Sense, found: &AltMatch, parent: &Sense, parent_key: &str) -> Sense {
    let mut copy = child.clone();
    copy.gloss = child
        .gloss
        .replace(&found.captured, &format!("{} ({})", found.trimmed, parent.gloss));
    copy.inherited_suffixes = suffix_rules(parent_key, &parent.forms);

    // Countability and comparability follow the parent
    if is_uncountable_noun(parent) && (!copy.has_tag("uncountable") || copy.has_tag("countable")) {
        copy.tags.push("uncountable".to_string());
        copy.remove_tag("countable");
        copy.forms.clear();
    }
    if is_countable_noun(parent) && !copy.has_tag("countable") && copy.has_tag("uncountable") {
        copy.remove_tag("uncountable");
    }
    if is_incomparable(parent) && (!copy.has_tag("not-comparable") || copy.has_tag("comparable")) {
        copy.tags.push("not-comparable".to_string());
        copy.remove_tag("comparable");
        copy.forms.clear();
    }

    if matches!(parent.pos.as_str(), "adj" | "adv") && comparison_forms(&parent.forms) == (true, true) {
        copy.tags.push(ALLOW_ADJ_AUTOGEN.to_string());
    }

    for tag in INHERITED_TAGS {
        if parent.has_tag(tag) {
            copy.add_tag(tag);
        }
    }

    // Point straight at the grandparent so chains stay one hop deep
    if let Some(grandparent) = &parent.alt {
        if is_alpha(&decode(grandparent)) {
            copy.alt = Some(grandparent.clone());
        }
    }

    copy
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    InProgress,
    Done,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveStats {
    pub references: usize,
    pub derived: usize,
    pub unresolved: usize,
}

struct Frame {
    headword: String,
    next: usize,
    copies: Vec<Sense>,
}

impl Frame {
    fn new(headword: String) -> Self {
        Self { headword, next: 0, copies: Vec::new() }
    }
}

enum Step {
    Finish,
    Skip,
    Descend(String),
    Derive(AltMatch, String),
}

/// Resolves alt-form references across a headword map.
pub struct Resolver<'a> {
    headwords: &'a mut Headwords,
    visits: HashMap<String, VisitState>,
    orphans: Option<&'a mut Vec<String>>,
    stats: ResolveStats,
}

impl<'a> Resolver<'a> {
    pub fn new(headwords: &'a mut Headwords) -> Self {
        Self {
            headwords,
            visits: HashMap::new(),
            orphans: None,
            stats: ResolveStats::default(),
        }
    }

    /// Record unresolved references as `HEADWORD (parent ALT)` lines.
    pub fn with_orphans(mut self, orphans: &'a mut Vec<String>) -> Self {
        self.orphans = Some(orphans);
        self
    }

    pub fn visit_state(&self, headword: &str) -> Option<VisitState> {
        self.visits.get(headword).copied()
    }

    /// Resolve every headword in the map.
    pub fn resolve_all(mut self) -> ResolveStats {
        let keys: Vec<String> = self.headwords.keys().cloned().collect();
        for key in keys {
            self.resolve(&key);
        }
        tracing::debug!(stats = ?self.stats, "resolved alternative forms");
        self.stats
    }

    /// Resolve `root` and everything it refers to.
    pub fn resolve(&mut self, root: &str) {
        if self.visits.contains_key(root) || !self.headwords.contains_key(root) {
            return;
        }
        self.visits.insert(root.to_string(), VisitState::InProgress);
        let mut stack = vec![Frame::new(root.to_string())];

        while let Some(top) = stack.len().checked_sub(1) {
            match self.next_step(&stack[top]) {
                Step::Finish => {
                    if let Some(frame) = stack.pop() {
                        if let Some(senses) = self.headwords.get_mut(&frame.headword) {
                            senses.extend(frame.copies);
                        }
                        self.visits.insert(frame.headword, VisitState::Done);
                    }
                }
                Step::Skip => stack[top].next += 1,
                Step::Descend(parent) => {
                    self.visits.insert(parent.clone(), VisitState::InProgress);
                    stack.push(Frame::new(parent));
                }
                Step::Derive(found, parent) => {
                    let frame = &mut stack[top];
                    let copies = self.derive(&frame.headword, frame.next, &found, &parent);
                    frame.copies.extend(copies);
                    frame.next += 1;
                }
            }
        }
    }

    fn next_step(&self, frame: &Frame) -> Step {
        let Some(sense) = self
            .headwords
            .get(&frame.headword)
            .and_then(|senses| senses.get(frame.next))
        else {
            return Step::Finish;
        };

        let Some(found) = match_template(&sense.gloss) else {
            return Step::Skip;
        };

        let parent = headword_key(&found.reference);
        if parent != frame.headword
            && self.headwords.contains_key(&parent)
            && !self.visits.contains_key(&parent)
        {
            Step::Descend(parent)
        } else {
            Step::Derive(found, parent)
        }
    }

    fn derive(&mut self, headword: &str, index: usize, found: &AltMatch, parent_key: &str) -> Vec<Sense> {
        let Some(sense) = self
            .headwords
            .get_mut(headword)
            .and_then(|senses| senses.get_mut(index))
        else {
            return Vec::new();
        };
        sense.alt = Some(found.reference.clone());
        let child = sense.clone();

        if parent_key == headword {
            return Vec::new();
        }
        self.stats.references += 1;

        let copies: Vec<Sense> = self
            .headwords
            .get(parent_key)
            .into_iter()
            .flatten()
            .filter(|parent| parent.word == found.reference && pos_abbr(&parent.pos) == pos_abbr(&child.pos))
            .map(|parent| derive_sense(&child, found, parent, parent_key))
            .collect();

        if copies.is_empty() {
            self.stats.unresolved += 1;
            tracing::debug!(headword, reference = %found.reference, "unresolved alternative form");
            if let Some(orphans) = self.orphans.as_deref_mut() {
                if is_alpha(headword) && is_alpha(parent_key) {
                    orphans.push(format!("{} (parent {})", headword, parent_key));
                }
            }
        }
        self.stats.derived += copies.len();
        copies
    }
}

/// Resolve all alt-form references in `headwords`.
pub fn resolve_alt_forms(headwords: &mut Headwords, orphans: Option<&mut Vec<String>>) -> ResolveStats {
    match orphans {
        Some(orphans) => Resolver::new(headwords).with_orphans(orphans).resolve_all(),
        None => Resolver::new(headwords).resolve_all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(word: &str, gloss: &str, pos: &str) -> Sense {
        Sense::new(word, gloss, pos)
    }

    fn map(entries: Vec<(&str, Vec<Sense>)>) -> Headwords {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn templates_compile_in_order() {
        assert_eq!(ALT_TEMPLATES.len(), ALT_PATTERNS.len());
        assert!(ALT_TEMPLATES[0].lowercase);
        assert!(!ALT_TEMPLATES[1].lowercase);
    }

    #[test]
    fn first_template_wins() {
        let found = match_template("Alternative spelling of colour").unwrap();
        assert_eq!(found.pattern, r"Alternative spelling of (.*?)\.?$");
        assert_eq!(found.reference, "colour");
    }

    #[test]
    fn reference_is_trimmed() {
        let found = match_template("plural of cat (the animal); rarely used.").unwrap();
        assert_eq!(found.captured, "cat (the animal); rarely used");
        assert_eq!(found.trimmed, "cat");
        assert_eq!(found.reference, "cat");

        let found = match_template("Abbreviation of United Nations, an organization").unwrap();
        assert_eq!(found.reference, "United Nations");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let found = match_template("ALTERNATIVE FORM OF gray").unwrap();
        assert_eq!(found.reference, "gray");
    }

    #[test]
    fn single_word_gloss_is_lowercased() {
        let found = match_template("Feline.").unwrap();
        assert_eq!(found.reference, "feline");
        assert!(match_template("A small feline.").is_none());
    }

    #[test]
    fn catch_all_spelling_template() {
        let found = match_template("Scots spelling of house").unwrap();
        assert_eq!(found.pattern, r".*? spelling of (.*?)\.?$");
        assert_eq!(found.reference, "house");
    }

    #[test]
    fn deprecated_usage_prefix_is_literal() {
        let found = match_template("(deprecated template usage) passive of amo").unwrap();
        assert_eq!(found.pattern, r"\(deprecated template usage\) passive of (.*?)\.?$");
        assert_eq!(found.reference, "amo");
        assert!(match_template("deprecated template usage passive of amo").is_none());
    }

    #[test]
    fn saint_and_empty_references_ignored() {
        assert!(match_template("Abbreviation of Saint.").is_none());
        assert!(match_template("").is_none());
    }

    #[test]
    fn suffix_rules_from_common_prefix() {
        let rules = suffix_rules("MOUSE", &["mice".to_string(), "mouse-like".to_string()]);
        assert_eq!(rules, vec![SuffixRule { removal: "OUSE".into(), addition: "ICE".into() }]);
    }

    #[test]
    fn plural_resolves_to_parent_gloss() {
        let mut headwords = map(vec![
            ("CAT", vec![sense("cat", "a small domesticated feline", "noun")]),
            ("CATS", vec![sense("cats", "plural of cat", "noun")]),
        ]);
        let stats = resolve_alt_forms(&mut headwords, None);
        let cats = &headwords["CATS"];
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].alt.as_deref(), Some("cat"));
        assert_eq!(cats[1].gloss, "plural of cat (a small domesticated feline)");
        assert!(cats[1].tags.is_empty());
        assert_eq!(stats.derived, 1);
    }

    #[test]
    fn spelling_and_pos_class_must_match() {
        let mut headwords = map(vec![
            ("CAT", vec![
                sense("cat", "a feline", "noun"),
                sense("cat", "to vomit", "verb"),
                sense("CAT", "a scan", "noun"),
            ]),
            ("CATS", vec![sense("cats", "plural of cat", "name")]),
        ]);
        resolve_alt_forms(&mut headwords, None);
        let cats = &headwords["CATS"];
        // name and noun share the abbreviation "n"
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].gloss, "plural of cat (a feline)");
    }

    #[test]
    fn unresolved_reference_is_an_orphan() {
        let mut headwords = map(vec![("COLOR", vec![sense("color", "Alternative spelling of colour", "noun")])]);
        let mut orphans = Vec::new();
        let stats = resolve_alt_forms(&mut headwords, Some(&mut orphans));
        assert_eq!(headwords["COLOR"].len(), 1);
        assert_eq!(headwords["COLOR"][0].alt.as_deref(), Some("colour"));
        assert_eq!(orphans, vec!["COLOR (parent COLOUR)"]);
        assert_eq!(stats.unresolved, 1);
    }

    #[test]
    fn empty_gloss_gets_no_alt() {
        let mut headwords = map(vec![("HMM", vec![sense("hmm", "", "intj")])]);
        let stats = resolve_alt_forms(&mut headwords, None);
        assert_eq!(headwords["HMM"][0].alt, None);
        assert_eq!(stats.references, 0);
    }

    #[test]
    fn parent_is_resolved_before_child() {
        // ZZ -> AA -> MM: AA sorts first but must wait for MM
        let mut headwords = map(vec![
            ("AA", vec![sense("aa", "Alternative form of mm", "noun")]),
            ("MM", vec![sense("mm", "a sound", "noun")]),
            ("ZZ", vec![sense("zz", "Alternative form of aa", "noun")]),
        ]);
        resolve_alt_forms(&mut headwords, None);
        let zz = &headwords["ZZ"];
        assert_eq!(zz.len(), 3);
        assert_eq!(zz[2].gloss, "Alternative form of aa (Alternative form of mm (a sound))");
        // flattened onto the grandparent
        assert_eq!(zz[2].alt.as_deref(), Some("mm"));
    }

    #[test]
    fn cycles_terminate() {
        let mut headwords = map(vec![
            ("AB", vec![sense("ab", "Alternative form of ba", "noun")]),
            ("BA", vec![sense("ba", "Alternative form of ab", "noun")]),
        ]);
        let mut resolver = Resolver::new(&mut headwords);
        resolver.resolve("AB");
        assert_eq!(resolver.visit_state("AB"), Some(VisitState::Done));
        assert_eq!(resolver.visit_state("BA"), Some(VisitState::Done));

        // BA copies AB's original sense; AB copies both of BA's senses
        assert_eq!(headwords["BA"].len(), 2);
        assert_eq!(headwords["AB"].len(), 3);
        assert_eq!(headwords["BA"][1].gloss, "Alternative form of ab (Alternative form of ba)");
    }

    #[test]
    fn self_reference_is_skipped() {
        let mut headwords = map(vec![("COLOR", vec![sense("Color", "Alternative letter-case form of color", "noun")])]);
        resolve_alt_forms(&mut headwords, None);
        assert_eq!(headwords["COLOR"].len(), 1);
        assert_eq!(headwords["COLOR"][0].alt.as_deref(), Some("color"));
    }

    #[test]
    fn propagates_register_and_countability() {
        let mut parent = sense("mud", "wet earth", "noun");
        parent.tags = vec!["uncountable".into(), "vulgar".into()];
        let mut child = sense("mudd", "Obsolete spelling of mud", "noun");
        child.forms = vec!["mudds".into()];
        child.tags = vec!["countable".into()];

        let mut headwords = map(vec![("MUD", vec![parent]), ("MUDD", vec![child])]);
        resolve_alt_forms(&mut headwords, None);
        let copy = &headwords["MUDD"][1];
        assert_eq!(copy.tags, vec!["uncountable", "vulgar"]);
        assert!(copy.forms.is_empty());
    }

    #[test]
    fn countable_parent_clears_uncountable() {
        let mut child = sense("dogg", "Misspelling of dog", "noun");
        child.tags = vec!["uncountable".into()];
        let mut headwords = map(vec![
            ("DOG", vec![sense("dog", "a canine", "noun")]),
            ("DOGG", vec![child]),
        ]);
        resolve_alt_forms(&mut headwords, None);
        assert!(headwords["DOGG"][1].tags.is_empty());
    }

    #[test]
    fn comparable_parent_allows_synthesis_and_passes_suffixes() {
        let mut parent = sense("good", "of high quality", "adj");
        parent.forms = vec!["better".into(), "best".into()];
        let child = sense("gud", "Pronunciation spelling of good", "adj");

        let mut headwords = map(vec![("GOOD", vec![parent]), ("GUD", vec![child])]);
        resolve_alt_forms(&mut headwords, None);
        let copy = &headwords["GUD"][1];
        assert!(copy.has_tag(ALLOW_ADJ_AUTOGEN));
        assert_eq!(copy.inherited_suffixes, vec![
            SuffixRule { removal: "GOOD".into(), addition: "BETTER".into() },
            SuffixRule { removal: "GOOD".into(), addition: "BEST".into() },
        ]);
    }

    #[test]
    fn incomparable_parent_clears_forms() {
        let mut parent = sense("utter", "complete", "adj");
        parent.tags = vec!["not-comparable".into()];
        let mut child = sense("uttre", "Obsolete form of utter", "adj");
        child.forms = vec!["uttrer".into()];
        child.tags = vec!["comparable".into()];

        let mut headwords = map(vec![("UTTER", vec![parent]), ("UTTRE", vec![child])]);
        resolve_alt_forms(&mut headwords, None);
        let copy = &headwords["UTTRE"][1];
        assert_eq!(copy.tags, vec!["not-comparable"]);
        assert!(copy.forms.is_empty());
    }
}
