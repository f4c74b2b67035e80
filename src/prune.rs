//! Removal of redundant inflection senses and unusable headwords.

use std::collections::{BTreeMap, BTreeSet};

use crate::decode::{headword_key, is_alpha};
use crate::sense::Headwords;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneStats {
    pub inflection_senses: usize,
    pub headwords: usize,
}

/// Drop `form-of` senses that merely restate an inflection another entry
/// already lists, e.g. "plural of cat" under CATS when CAT lists `cats`.
pub fn prune_inflections(headwords: &mut Headwords) -> usize {
    // word -> every form listed under it, across all headwords
    let mut inflections: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for sense in headwords.values().flatten() {
        inflections
            .entry(sense.word.clone())
            .or_default()
            .extend(sense.forms.iter().cloned());
    }

    for (word, forms) in &inflections {
        for form in forms {
            let Some(senses) = headwords.get_mut(&headword_key(form)) else {
                continue;
            };
            for sense in senses.iter_mut() {
                if sense.has_tag("form-of") && sense.gloss.contains(word.as_str()) {
                    sense.delete = true;
                }
            }
        }
    }

    let mut removed = 0;
    for senses in headwords.values_mut() {
        let before = senses.len();
        senses.retain(|sense| !sense.delete);
        removed += before - senses.len();
    }
    removed
}

/// Drop headwords that are empty or contain anything but ASCII letters.
pub fn purge_headwords(headwords: &mut Headwords) -> usize {
    let before = headwords.len();
    headwords.retain(|key, senses| is_alpha(key) && !senses.is_empty());
    before - headwords.len()
}

pub fn prune(headwords: &mut Headwords) -> PruneStats {
    let stats = PruneStats {
        inflection_senses: prune_inflections(headwords),
        headwords: purge_headwords(headwords),
    };
    tracing::debug!(?stats, "pruned headwords");
    stats
}
