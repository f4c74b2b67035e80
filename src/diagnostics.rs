//! Bonus reports: words the corpus mentions but has no entry for.
//!
//! None of these feed the database. They are worklists for editors, so every
//! line reads `KEY ("spelling" from "source entry")` and lists are unique and
//! sorted shortest key first.

use std::collections::{BTreeSet, HashSet};

use crate::decode::{decode, headword_key, is_alpha};
use crate::entry::RawEntry;

/// All bonus lists of one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Tokens of multi-word entries with no entry of their own.
    pub multiword: Vec<String>,
    /// Hyphenated entries whose hyphen-less spelling has no entry.
    pub hyphenated: Vec<String>,
    /// Two-word entries whose concatenation has no entry.
    pub twowords: Vec<String>,
    /// Link targets with no entry.
    pub redlinks: Vec<String>,
    /// Alt-form references to headwords that never resolved.
    pub orphans: Vec<String>,
}

impl Diagnostics {
    /// Scan the language-filtered corpus. Orphans come from alt resolution
    /// and are attached with [`Diagnostics::with_orphans`].
    pub fn collect(entries: &[RawEntry]) -> Self {
        let words: HashSet<&str> = entries.iter().map(|e| e.word.as_str()).collect();

        let mut multiword = Vec::new();
        let mut hyphenated = Vec::new();
        let mut twowords = Vec::new();
        for word in &words {
            multiword.extend(multiword_lines(word, &words));
            hyphenated.extend(hyphenated_line(word, &words));
            twowords.extend(twowords_line(word, &words));
        }

        let redlinks = entries.iter().flat_map(|e| redlink_lines(e, &words)).collect();

        let diagnostics = Self {
            multiword: sort_lines(multiword),
            hyphenated: sort_lines(hyphenated),
            twowords: sort_lines(twowords),
            redlinks: sort_lines(redlinks),
            orphans: Vec::new(),
        };
        tracing::debug!(
            multiword = diagnostics.multiword.len(),
            hyphenated = diagnostics.hyphenated.len(),
            twowords = diagnostics.twowords.len(),
            redlinks = diagnostics.redlinks.len(),
            "collected bonus lists"
        );
        diagnostics
    }

    pub fn with_orphans(mut self, orphans: Vec<String>) -> Self {
        self.orphans = sort_lines(orphans);
        self
    }
}

/// Unique lines ordered by length of the first token, then text.
pub fn sort_lines(lines: Vec<String>) -> Vec<String> {
    let unique: BTreeSet<String> = lines.into_iter().collect();
    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_by(|a, b| {
        let key = |line: &str| line.split(' ').next().map_or(0, str::len);
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    });
    sorted
}

fn line(spelling: &str, source: &str) -> String {
    format!("{} (\"{}\" from \"{}\")", headword_key(spelling), spelling, source)
}

fn multiword_lines(word: &str, words: &HashSet<&str>) -> Vec<String> {
    word.split(' ')
        .filter(|token| !words.contains(token) && is_alpha(&decode(token)))
        .map(|token| line(token, word))
        .collect()
}

fn hyphenated_line(word: &str, words: &HashSet<&str>) -> Option<String> {
    if word.is_empty() || word.starts_with('-') || word.ends_with('-') {
        return None;
    }
    let joined = word.replace('-', "");
    (!words.contains(joined.as_str()) && is_alpha(&decode(&joined))).then(|| line(&joined, word))
}

fn is_lower_alpha(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(char::is_alphabetic)
        && token.chars().any(char::is_lowercase)
        && !token.chars().any(char::is_uppercase)
}

fn twowords_line(word: &str, words: &HashSet<&str>) -> Option<String> {
    let tokens: Vec<&str> = word.split(' ').collect();
    if tokens.len() != 2 || !tokens.iter().all(|t| is_lower_alpha(t)) {
        return None;
    }
    let joined = tokens.concat();
    (!words.contains(joined.as_str())).then(|| line(&joined, word))
}

fn is_redlink(target: &str, words: &HashSet<&str>) -> bool {
    !words.contains(target) && is_alpha(&decode(target).replace('-', ""))
}

fn redlink_lines(entry: &RawEntry, words: &HashSet<&str>) -> Vec<String> {
    let linkages = entry.linkages().map(|l| l.word.as_str());

    let alternatives = entry
        .forms
        .iter()
        .flatten()
        .filter(|form| form.has_tag("alternative"))
        .map(|form| form.form.as_str());

    let sense_links = entry
        .senses
        .iter()
        .flatten()
        .flat_map(|sense| sense.links.iter().flatten())
        .filter_map(|link| link.get(1))
        .map(|target| target.split('#').next().unwrap_or_default());

    linkages
        .chain(alternatives)
        .chain(sense_links)
        .filter(|target| is_redlink(target, words))
        .map(|target| line(target, &entry.word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{RawForm, RawSense};

    fn entry(word: &str) -> RawEntry {
        RawEntry::builder(word, "English").pos("noun").build()
    }

    #[test]
    fn lines_sorted_by_key_length_then_text() {
        let lines = vec![
            "ABC (\"abc\" from \"x\")".to_string(),
            "AB (\"ab\" from \"y\")".to_string(),
            "ABC (\"abc\" from \"x\")".to_string(),
            "AA (\"aa\" from \"z\")".to_string(),
        ];
        assert_eq!(
            sort_lines(lines),
            vec!["AA (\"aa\" from \"z\")", "AB (\"ab\" from \"y\")", "ABC (\"abc\" from \"x\")"]
        );
    }

    #[test]
    fn multiword_tokens_without_entries() {
        let corpus = vec![entry("home ec"), entry("home")];
        let report = Diagnostics::collect(&corpus);
        assert_eq!(report.multiword, vec!["EC (\"ec\" from \"home ec\")"]);
    }

    #[test]
    fn hyphenated_entries_without_joined_form() {
        let corpus = vec![entry("e-mail"), entry("-ish"), entry("co-op"), entry("coop")];
        let report = Diagnostics::collect(&corpus);
        assert_eq!(report.hyphenated, vec!["EMAIL (\"email\" from \"e-mail\")"]);
    }

    #[test]
    fn twowords_need_lowercase_tokens() {
        let corpus = vec![entry("ice cream"), entry("New York"), entry("air port"), entry("airport")];
        let report = Diagnostics::collect(&corpus);
        assert_eq!(report.twowords, vec!["ICECREAM (\"icecream\" from \"ice cream\")"]);
    }

    #[test]
    fn redlinks_from_linkages_forms_and_sense_links() {
        let cat = RawEntry::builder("cat", "English")
            .pos("noun")
            .synonym("moggy")
            .synonym("dog")
            .form(RawForm::tagged("catte", ["alternative"]))
            .form(RawForm::tagged("cats", ["plural"]))
            .sense(RawSense::gloss("A feline.").link("feline", "feline#English").link("pet", "pet"))
            .build();
        let corpus = vec![cat, entry("dog"), entry("pet")];
        let report = Diagnostics::collect(&corpus);
        assert_eq!(
            report.redlinks,
            vec![
                "CATTE (\"catte\" from \"cat\")",
                "MOGGY (\"moggy\" from \"cat\")",
                "FELINE (\"feline\" from \"cat\")",
            ]
        );
    }

    #[test]
    fn orphans_are_sorted_and_unique() {
        let report = Diagnostics::default().with_orphans(vec![
            "COLOURS (parent COLORS)".to_string(),
            "TEH (parent THE)".to_string(),
            "TEH (parent THE)".to_string(),
        ]);
        assert_eq!(report.orphans, vec!["TEH (parent THE)", "COLOURS (parent COLORS)"]);
    }
}
