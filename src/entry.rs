//! Raw wiktextract records.
//!
//! Only the fields the pipeline reads are modelled; everything else in a
//! record is ignored by serde. Every field except `word` is optional in the
//! source data, so absence is kept distinct from emptiness where the
//! normalizer cares about the difference (`pos`, `senses`, `glosses`).

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForm {
    pub form: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl RawForm {
    pub fn new(form: impl Into<String>) -> Self {
        Self { form: form.into(), tags: None }
    }

    pub fn tagged<I, S>(form: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            form: form.into(),
            tags: Some(tags.into_iter().map(Into::into).collect()),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Linkage {
    pub word: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSense {
    #[serde(default)]
    pub glosses: Option<Vec<String>>,
    #[serde(default)]
    pub raw_glosses: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub raw_tags: Option<Vec<String>>,
    #[serde(default)]
    pub qualifier: Option<String>,
    /// `[display, target]` pairs.
    #[serde(default)]
    pub links: Option<Vec<Vec<String>>>,
}

fn strings<I, S>(items: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(items.into_iter().map(Into::into).collect())
}

impl RawSense {
    /// A sense with a single gloss line.
    pub fn gloss(gloss: impl Into<String>) -> Self {
        Self {
            glosses: Some(vec![gloss.into()]),
            ..Self::default()
        }
    }

    /// A sense with several gloss levels, outermost first.
    pub fn glosses<I, S>(glosses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glosses: strings(glosses),
            ..Self::default()
        }
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = strings(tags);
        self
    }

    pub fn raw_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_tags = strings(tags);
        self
    }

    pub fn raw_glosses<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_glosses = strings(raw);
        self
    }

    pub fn qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn link(mut self, display: impl Into<String>, target: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(Vec::new)
            .push(vec![display.into(), target.into()]);
        self
    }
}

/// One line of the corpus.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub word: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub senses: Option<Vec<RawSense>>,
    #[serde(default)]
    pub forms: Option<Vec<RawForm>>,

    // Linkages, read only by the redlink diagnostic
    #[serde(default)]
    pub synonyms: Option<Vec<Linkage>>,
    #[serde(default)]
    pub antonyms: Option<Vec<Linkage>>,
    #[serde(default)]
    pub hypernyms: Option<Vec<Linkage>>,
    #[serde(default)]
    pub holonyms: Option<Vec<Linkage>>,
    #[serde(default)]
    pub meronyms: Option<Vec<Linkage>>,
    #[serde(default)]
    pub derived: Option<Vec<Linkage>>,
    #[serde(default)]
    pub related: Option<Vec<Linkage>>,
    #[serde(default)]
    pub coordinate_terms: Option<Vec<Linkage>>,
}

impl RawEntry {
    pub fn builder(word: impl Into<String>, lang: impl Into<String>) -> RawEntryBuilder {
        RawEntryBuilder {
            entry: RawEntry {
                word: word.into(),
                lang: Some(lang.into()),
                ..RawEntry::default()
            },
        }
    }

    pub fn is_lang(&self, languages: &[String]) -> bool {
        self.lang
            .as_deref()
            .is_some_and(|lang| languages.iter().any(|l| l == lang))
    }

    /// All linkage lists in a fixed order.
    pub fn linkages(&self) -> impl Iterator<Item = &Linkage> {
        [
            &self.synonyms,
            &self.antonyms,
            &self.hypernyms,
            &self.derived,
            &self.holonyms,
            &self.meronyms,
            &self.related,
            &self.coordinate_terms,
        ]
        .into_iter()
        .flatten()
        .flatten()
    }
}

/// Builds a [`RawEntry`] in code, field by optional field.
#[derive(Debug, Clone)]
pub struct RawEntryBuilder {
    entry: RawEntry,
}

impl RawEntryBuilder {
    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.entry.pos = Some(pos.into());
        self
    }

    pub fn sense(mut self, sense: RawSense) -> Self {
        self.entry.senses.get_or_insert_with(Vec::new).push(sense);
        self
    }

    /// Marks the entry as carrying a (possibly empty) senses list.
    pub fn no_senses(mut self) -> Self {
        self.entry.senses.get_or_insert_with(Vec::new);
        self
    }

    pub fn form(mut self, form: RawForm) -> Self {
        self.entry.forms.get_or_insert_with(Vec::new).push(form);
        self
    }

    pub fn forms<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.entry.forms.get_or_insert_with(Vec::new);
        list.extend(forms.into_iter().map(RawForm::new));
        self
    }

    pub fn synonym(mut self, word: impl Into<String>) -> Self {
        self.entry
            .synonyms
            .get_or_insert_with(Vec::new)
            .push(Linkage { word: word.into() });
        self
    }

    pub fn build(self) -> RawEntry {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wiktextract_line() {
        let line = r#"{"word":"cat","lang":"English","pos":"noun",
            "forms":[{"form":"cats","tags":["plural"]}],
            "senses":[{"glosses":["A small domesticated feline."],"tags":["countable"],
                       "links":[["feline","feline#English"]]}],
            "synonyms":[{"word":"puss"}],
            "etymology_text":"ignored"}"#;
        let entry: RawEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.pos.as_deref(), Some("noun"));
        assert!(entry.forms.as_ref().unwrap()[0].has_tag("plural"));
        let sense = &entry.senses.as_ref().unwrap()[0];
        assert_eq!(sense.links.as_ref().unwrap()[0][1], "feline#English");
        assert_eq!(entry.linkages().map(|l| l.word.as_str()).collect::<Vec<_>>(), vec!["puss"]);
    }

    #[test]
    fn missing_word_is_a_data_error() {
        let err = serde_json::from_str::<RawEntry>(r#"{"lang":"English"}"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let entry = RawEntry::builder("run", "English")
            .pos("verb")
            .forms(["runs", "running", "ran"])
            .sense(RawSense::gloss("To move quickly.").tags(["intransitive"]))
            .build();
        assert_eq!(entry.forms.as_ref().unwrap().len(), 3);
        assert_eq!(entry.senses.as_ref().unwrap().len(), 1);
        assert!(entry.is_lang(&["English".to_string()]));
        assert!(!entry.is_lang(&["French".to_string()]));
    }
}
