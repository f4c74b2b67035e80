//! Stage sequencing over a single mutable context.

use std::fmt;

use crate::altform::{resolve_alt_forms, ResolveStats};
use crate::config::Config;
use crate::dedup::{dedup, seed_statuses, DedupStats, DigestRegistry, Status};
use crate::diagnostics::Diagnostics;
use crate::entry::RawEntry;
use crate::inflect::{synthesize, SynthesisStats};
use crate::normalize::{normalize_entries, NormalizeStats};
use crate::prune::{prune, PruneStats};
use crate::render::render_all;
use crate::sense::Headwords;

/// Graph stages run after normalization, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Prune,
    Synthesize,
    Render,
    Dedup,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Resolve,
        Stage::Prune,
        Stage::Synthesize,
        Stage::Render,
        Stage::Dedup,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Resolve => "Resolving alternative forms",
            Stage::Prune => "Purging redundant inflections and non-alphabetical headwords",
            Stage::Synthesize => "Automatically adding inflections",
            Stage::Render => "Rendering senses",
            Stage::Dedup => "Deleting duplicate definitions",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub normalize: NormalizeStats,
    pub resolve: ResolveStats,
    pub prune: PruneStats,
    pub synthesis: SynthesisStats,
    pub dedup: DedupStats,
}

/// Everything one run produces.
#[derive(Debug)]
pub struct Build {
    pub headwords: Headwords,
    pub registry: DigestRegistry,
    pub statuses: Vec<(String, Status)>,
    pub diagnostics: Option<Diagnostics>,
    pub stats: PipelineStats,
}

/// Owns the headword map and per-run state while stages mutate it.
pub struct Context<'a> {
    config: &'a Config,
    headwords: Headwords,
    registry: DigestRegistry,
    orphans: Option<Vec<String>>,
    diagnostics: Option<Diagnostics>,
    stats: PipelineStats,
}

impl<'a> Context<'a> {
    /// Normalize `entries` into a fresh context. With `bonus`, the corpus
    /// scans are collected too and orphans are recorded during resolution.
    pub fn new(config: &'a Config, entries: &[RawEntry], bonus: bool) -> Self {
        let mut headwords = Headwords::new();
        let normalize = normalize_entries(entries, config, &mut headwords);

        Self {
            config,
            headwords,
            registry: DigestRegistry::new(),
            orphans: bonus.then(Vec::new),
            diagnostics: bonus.then(|| Diagnostics::collect(entries)),
            stats: PipelineStats { normalize, ..PipelineStats::default() },
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn headwords(&self) -> &Headwords {
        &self.headwords
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn run_stage(&mut self, stage: Stage) {
        tracing::debug!(%stage, headwords = self.headwords.len(), "running stage");
        match stage {
            Stage::Resolve => {
                self.stats.resolve = resolve_alt_forms(&mut self.headwords, self.orphans.as_mut());
            }
            Stage::Prune => self.stats.prune = prune(&mut self.headwords),
            Stage::Synthesize => self.stats.synthesis = synthesize(&mut self.headwords),
            Stage::Render => render_all(&mut self.headwords),
            Stage::Dedup => {
                let (registry, stats) = dedup(&mut self.headwords);
                self.registry = registry;
                self.stats.dedup = stats;
            }
        }
    }

    /// Run every remaining stage in order.
    pub fn run_all(&mut self) {
        for stage in Stage::ALL {
            self.run_stage(stage);
        }
    }

    pub fn finish(self) -> Build {
        let statuses = seed_statuses(&self.headwords);
        let diagnostics = match (self.diagnostics, self.orphans) {
            (Some(diagnostics), Some(orphans)) => Some(diagnostics.with_orphans(orphans)),
            (diagnostics, _) => diagnostics,
        };
        Build {
            headwords: self.headwords,
            registry: self.registry,
            statuses,
            diagnostics,
            stats: self.stats,
        }
    }
}

/// Run the whole pipeline over an in-memory corpus.
pub fn build(config: &Config, entries: &[RawEntry], bonus: bool) -> Build {
    let mut context = Context::new(config, entries, bonus);
    context.run_all();
    context.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RawSense;

    #[test]
    fn stages_run_in_order() {
        let config = Config::default();
        let entries = vec![
            RawEntry::builder("cat", "English")
                .pos("noun")
                .forms(["cats"])
                .sense(RawSense::gloss("A feline.").tags(["countable"]))
                .build(),
            RawEntry::builder("ice cream", "English")
                .pos("noun")
                .sense(RawSense::gloss("A frozen dessert."))
                .build(),
        ];
        let build = build(&config, &entries, false);

        assert_eq!(build.headwords.keys().collect::<Vec<_>>(), vec!["CAT"]);
        let cat = &build.headwords["CAT"][0];
        assert_eq!(cat.def, "A feline. [n CATS]");
        assert_eq!(cat.digest.len(), 32);
        assert!(build.registry.contains(&cat.digest));
        assert_eq!(build.stats.prune.headwords, 1);
        assert!(build.diagnostics.is_none());
    }

    #[test]
    fn bonus_collects_orphans() {
        let config = Config::default();
        let entries = vec![RawEntry::builder("teh", "English")
            .pos("noun")
            .sense(RawSense::gloss("Misspelling of the."))
            .build()];
        let build = build(&config, &entries, true);

        let diagnostics = build.diagnostics.unwrap();
        assert_eq!(diagnostics.orphans, vec!["TEH (parent THE)"]);
    }

    #[test]
    fn stage_labels() {
        assert_eq!(Stage::Render.to_string(), "Rendering senses");
        assert_eq!(Stage::ALL.len(), 5);
    }
}
