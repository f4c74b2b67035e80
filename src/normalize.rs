//! Raw entries to sense records.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Config;
use crate::decode::headword_key;
use crate::entry::{RawEntry, RawForm, RawSense};
use crate::sense::{Headwords, Sense, TRANSLINGUAL};

lazy_static! {
    // "(informal, chiefly UK) To ..." -> "informal, chiefly UK"
    static ref LEADING_PARENTHETICAL: Regex = Regex::new(r"^\((.*?)\)").unwrap();
}

/// Form tags that mark a form as something other than an inflection.
const EXCLUDED_FORM_TAGS: [&str; 4] = ["abbreviation", "alternative", "symbol", "no-infinitive"];

/// Table-header junk that wiktextract sometimes emits as forms.
const PLACEHOLDER_FORMS: [&str; 4] = ["dubious", "glossary", "no-table-tags", "strong"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    pub entries_accepted: usize,
    pub entries_rejected: usize,
    pub gloss_groups_skipped: usize,
    pub senses_added: usize,
    pub senses_duplicate: usize,
}

/// Whether `form` counts as an inflection of `word`.
pub fn keep_form(word: &str, form: &RawForm) -> bool {
    if form.tags.is_some() {
        if EXCLUDED_FORM_TAGS.iter().any(|tag| form.has_tag(tag)) {
            return false;
        }
        if form.has_tag("infinitive") && form.form == word {
            return false;
        }
    }

    let text = form.form.as_str();
    if PLACEHOLDER_FORMS.contains(&text) {
        return false;
    }
    if matches!(text, "more" | "most") && !matches!(word, "many" | "much") {
        return false;
    }
    if matches!(text, "farther" | "farthest") && word != "far" {
        return false;
    }
    if text == "dated" && word != "date" {
        return false;
    }

    // "UPS" -> "UPSs"
    !(word.ends_with('S') && text.ends_with('s'))
}

fn collect_tags(raw: &RawSense, tags: &mut Vec<String>) {
    if let Some(qualifier) = &raw.qualifier {
        // wiktextract repeats the qualifier around semicolons
        let mut parts: Vec<&str> = Vec::new();
        for part in qualifier.split("; ") {
            if !parts.contains(&part) {
                parts.push(part);
            }
        }
        tags.push(parts.join("; "));
    }

    if let Some(sense_tags) = &raw.tags {
        tags.extend(sense_tags.iter().cloned());
    }
    if let Some(raw_tags) = &raw.raw_tags {
        tags.extend(raw_tags.iter().cloned());
    }

    for raw_gloss in raw.raw_glosses.iter().flatten() {
        if let Some(cap) = LEADING_PARENTHETICAL.captures(raw_gloss) {
            for tag in cap[1].split(", ") {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
    }
}

fn clears_forms(sense: &Sense) -> bool {
    let uncountable_noun = sense.is_noun_like()
        && (sense.has_tag("uncountable") || sense.has_tag("singular-only"))
        && !sense.has_tag("countable");
    let incomparable_adj = sense.pos == "adj"
        && sense.has_tag("not-comparable")
        && !sense.has_tag("comparable");
    (uncountable_noun || incomparable_adj) && !sense.has_tag("usually")
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}

/// Build one sense for a single gloss line of `raw`.
fn build_sense(entry: &RawEntry, pos: &str, raw: &RawSense, gloss: &str, config: &Config) -> Sense {
    let mut sense = Sense::new(entry.word.as_str(), gloss.replace('\n', " "), pos);

    sense.forms = entry
        .forms
        .iter()
        .flatten()
        .filter(|form| keep_form(&entry.word, form))
        .map(|form| form.form.clone())
        .collect();

    collect_tags(raw, &mut sense.tags);

    if sense.has_tag("uncountable") && sense.gloss.contains("(countable)") {
        sense.remove_tag("uncountable");
    }

    if entry.lang.as_deref() == Some(config.translingual.as_str()) {
        sense.tags.push(TRANSLINGUAL.to_string());
    }

    if clears_forms(&sense) {
        sense.forms.clear();
    }

    dedup_in_order(&mut sense.forms);
    sense
}

/// Add the senses of one entry to `headwords`.
pub fn normalize_entry(
    entry: &RawEntry,
    config: &Config,
    headwords: &mut Headwords,
    stats: &mut NormalizeStats,
) {
    let (Some(pos), Some(raw_senses)) = (entry.pos.as_deref(), entry.senses.as_ref()) else {
        stats.entries_rejected += 1;
        return;
    };
    if !entry.is_lang(&config.languages) {
        stats.entries_rejected += 1;
        return;
    }

    let headword = headword_key(&entry.word);
    if headword.is_empty() {
        stats.entries_rejected += 1;
        return;
    }
    stats.entries_accepted += 1;

    let senses = headwords.entry(headword).or_default();

    for raw in raw_senses {
        let glosses: Vec<&str> = match raw.glosses.as_deref() {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ => vec![""],
        };

        // A term list swallowed as a definition
        if glosses[0].contains('\n') {
            stats.gloss_groups_skipped += 1;
            continue;
        }

        for gloss in glosses {
            let sense = build_sense(entry, pos, raw, gloss, config);
            if senses.contains(&sense) {
                stats.senses_duplicate += 1;
            } else {
                senses.push(sense);
                stats.senses_added += 1;
            }
        }
    }
}

pub fn normalize_entries<'a>(
    entries: impl IntoIterator<Item = &'a RawEntry>,
    config: &Config,
    headwords: &mut Headwords,
) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    for entry in entries {
        normalize_entry(entry, config, headwords, &mut stats);
    }
    tracing::debug!(?stats, headwords = headwords.len(), "normalized entries");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(entries: &[RawEntry]) -> Headwords {
        let mut headwords = Headwords::new();
        normalize_entries(entries, &Config::default(), &mut headwords);
        headwords
    }

    #[test]
    fn one_sense_per_gloss_level() {
        let entry = RawEntry::builder("bank", "English")
            .pos("noun")
            .sense(RawSense::glosses(["A financial institution.", "A branch office of one."]))
            .build();
        let headwords = run(&[entry]);
        let senses = &headwords["BANK"];
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[1].gloss, "A branch office of one.");
    }

    #[test]
    fn subsense_repeats_parent_gloss_once() {
        let entry = RawEntry::builder("bank", "English")
            .pos("noun")
            .sense(RawSense::glosses(["A financial institution."]))
            .sense(RawSense::glosses(["A financial institution.", "A branch office."]))
            .build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["BANK"].len(), 2);
    }

    #[test]
    fn multiline_first_gloss_skips_group() {
        let entry = RawEntry::builder("list", "English")
            .pos("noun")
            .sense(RawSense::glosses(["alpha\nbeta\ngamma", "other"]))
            .sense(RawSense::gloss("A series of items.\nwritten down"))
            .build();
        let headwords = run(&[entry]);
        assert!(headwords["LIST"].is_empty());
    }

    #[test]
    fn missing_glosses_give_empty_gloss() {
        let entry = RawEntry::builder("hmm", "English")
            .pos("intj")
            .sense(RawSense::default())
            .build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["HMM"][0].gloss, "");
    }

    #[test]
    fn rejects_disallowed_or_incomplete_entries() {
        let french = RawEntry::builder("chat", "French")
            .pos("noun")
            .sense(RawSense::gloss("cat"))
            .build();
        let no_pos = RawEntry::builder("cat", "English").sense(RawSense::gloss("feline")).build();
        let no_senses = RawEntry::builder("dog", "English").pos("noun").build();
        let no_key = RawEntry::builder("\u{301}\u{302}", "English").pos("noun").sense(RawSense::gloss("cat")).build();
        let headwords = run(&[french, no_pos, no_senses, no_key]);
        assert!(headwords.is_empty());
    }

    #[test]
    fn non_latin_words_are_transliterated() {
        let entry = RawEntry::builder("Москва", "English")
            .pos("name")
            .sense(RawSense::gloss("Moscow"))
            .build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["MOSKVA"][0].word, "Москва");
    }

    #[test]
    fn headword_is_registered_even_without_senses() {
        let entry = RawEntry::builder("Zzz", "English").pos("intj").no_senses().build();
        let headwords = run(&[entry]);
        assert!(headwords["ZZZ"].is_empty());
    }

    #[test]
    fn form_filters() {
        assert!(!keep_form("cat", &RawForm::tagged("kitty", ["alternative"])));
        assert!(!keep_form("cat", &RawForm::tagged("c.", ["abbreviation"])));
        assert!(!keep_form("run", &RawForm::tagged("run", ["infinitive"])));
        assert!(keep_form("run", &RawForm::tagged("ran", ["past"])));
        assert!(!keep_form("cat", &RawForm::new("strong")));
        assert!(!keep_form("happy", &RawForm::new("more")));
        assert!(keep_form("many", &RawForm::new("more")));
        assert!(!keep_form("distant", &RawForm::new("farther")));
        assert!(keep_form("far", &RawForm::new("farthest")));
        assert!(!keep_form("old", &RawForm::new("dated")));
        assert!(keep_form("date", &RawForm::new("dated")));
        assert!(!keep_form("UPS", &RawForm::new("UPSs")));
        assert!(keep_form("ups", &RawForm::new("upss")));
    }

    #[test]
    fn tags_from_qualifier_tags_and_raw_glosses() {
        let sense = RawSense::gloss("Wonderful.")
            .qualifier("dated; dated")
            .tags(["slang"])
            .raw_tags(["Cockney"])
            .raw_glosses(["(slang, Britain) Wonderful."]);
        let entry = RawEntry::builder("ace", "English").pos("adj").sense(sense).build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["ACE"][0].tags, vec!["dated", "slang", "Cockney", "Britain"]);
    }

    #[test]
    fn countable_gloss_drops_uncountable_tag() {
        let sense = RawSense::gloss("(countable) A kind of cheese.").tags(["uncountable", "countable"]);
        let entry = RawEntry::builder("cheese", "English")
            .pos("noun")
            .forms(["cheeses"])
            .sense(sense)
            .build();
        let headwords = run(&[entry]);
        let sense = &headwords["CHEESE"][0];
        assert_eq!(sense.tags, vec!["countable"]);
        assert_eq!(sense.forms, vec!["cheeses"]);
    }

    #[test]
    fn uncountable_sense_loses_forms_unless_hedged() {
        let plain = RawEntry::builder("rice", "English")
            .pos("noun")
            .forms(["rices"])
            .sense(RawSense::gloss("A cereal grain.").tags(["uncountable"]))
            .sense(RawSense::gloss("A variety of it.").tags(["uncountable", "usually"]))
            .build();
        let headwords = run(&[plain]);
        assert!(headwords["RICE"][0].forms.is_empty());
        assert_eq!(headwords["RICE"][1].forms, vec!["rices"]);
    }

    #[test]
    fn not_comparable_adjective_loses_forms() {
        let entry = RawEntry::builder("dead", "English")
            .pos("adj")
            .forms(["deader", "deadest"])
            .sense(RawSense::gloss("No longer living.").tags(["not-comparable"]))
            .build();
        let headwords = run(&[entry]);
        assert!(headwords["DEAD"][0].forms.is_empty());
    }

    #[test]
    fn translingual_senses_are_tagged() {
        let entry = RawEntry::builder("Homo", "Translingual")
            .pos("name")
            .sense(RawSense::gloss("A taxonomic genus."))
            .build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["HOMO"][0].tags, vec![TRANSLINGUAL]);
    }

    #[test]
    fn forms_deduplicated_in_order() {
        let entry = RawEntry::builder("put", "English")
            .pos("verb")
            .forms(["puts", "putting", "put", "put"])
            .sense(RawSense::gloss("To place."))
            .build();
        let headwords = run(&[entry]);
        assert_eq!(headwords["PUT"][0].forms, vec!["puts", "putting", "put"]);
    }
}
