//! Builds a curated headword database from a wiktextract JSONL dump.
//!
//! Entries in the allowed languages are normalized into senses keyed by an
//! upper-case ASCII headword, alternative-form references are resolved
//! against their parents, missing inflections are synthesized, and each
//! sense gets a canonical one-line definition and a digest that curation
//! statuses are keyed by.

pub mod altform;
pub mod config;
pub mod corpus;
pub mod decode;
pub mod dedup;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod inflect;
pub mod normalize;
pub mod output;
pub mod parallel;
pub mod pipeline;
pub mod prune;
pub mod render;
pub mod sense;

pub use config::Config;
pub use corpus::{open_input, CorpusReader, ReadStats};
pub use dedup::{digest, Status};
pub use entry::{RawEntry, RawForm, RawSense};
pub use error::{Error, Result};
pub use parallel::{ParallelConfig, Strategy};
pub use pipeline::{build, Build, Context, Stage};
pub use sense::{Headwords, Sense};
