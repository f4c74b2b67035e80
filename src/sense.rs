use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Irregular suffix substitution inherited from a resolved parent:
/// strip `removal` from the end of the headword, append `addition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub removal: String,
    pub addition: String,
}

/// One definition unit of a headword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    /// Original spelling, with case and diacritics.
    pub word: String,
    pub gloss: String,
    pub pos: String,
    pub forms: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default)]
    pub def: String,
    #[serde(default)]
    pub digest: String,

    #[serde(skip)]
    pub inherited_suffixes: Vec<SuffixRule>,
    #[serde(skip)]
    pub delete: bool,
}

impl Sense {
    pub fn new(word: impl Into<String>, gloss: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            gloss: gloss.into(),
            pos: pos.into(),
            ..Self::default()
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Push `tag` unless already present.
    pub fn add_tag(&mut self, tag: &str) {
        if !self.has_tag(tag) {
            self.tags.push(tag.to_string());
        }
    }

    /// Remove the first occurrence of `tag`.
    pub fn remove_tag(&mut self, tag: &str) {
        if let Some(i) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(i);
        }
    }

    pub fn is_noun_like(&self) -> bool {
        self.pos == "noun" || self.pos == "name"
    }
}

/// Headword key to its senses, iterated in key order.
pub type Headwords = BTreeMap<String, Vec<Sense>>;

/// Synthesized inflection marker.
pub const AUTOGEN: &str = "AUTOGEN";
/// Set on alt-form copies whose parent shows both comparative and superlative forms.
pub const ALLOW_ADJ_AUTOGEN: &str = "ALLOW ADJ AUTOGEN";
pub const TRANSLINGUAL: &str = "TRANSLINGUAL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_tag_only_drops_first() {
        let mut sense = Sense::new("x", "", "noun");
        sense.tags = vec!["uncountable".into(), "slang".into(), "uncountable".into()];
        sense.remove_tag("uncountable");
        assert_eq!(sense.tags, vec!["slang", "uncountable"]);
    }

    #[test]
    fn serializes_database_shape() {
        let mut sense = Sense::new("cat", "A feline.", "noun");
        sense.forms = vec!["cats".into()];
        sense.def = "A feline. [n CATS]".into();
        sense.digest = "00".into();
        sense.inherited_suffixes.push(SuffixRule { removal: "".into(), addition: "S".into() });
        let json = serde_json::to_value(&sense).unwrap();
        assert_eq!(json["def"], "A feline. [n CATS]");
        assert!(json.get("alt").is_none());
        assert!(json.get("inherited_suffixes").is_none());
        assert!(json.get("delete").is_none());
    }
}
