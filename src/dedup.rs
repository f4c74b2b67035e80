//! Content digests, duplicate removal and initial curation statuses.

use std::collections::HashMap;
use std::fmt;

use sha2::{Digest, Sha256};

use crate::sense::Headwords;

/// Hex characters in a digest.
pub const DIGEST_LEN: usize = 32;

/// Stable identity of a sense: SHA-256 over the length-prefixed word followed
/// by the rendered definition, truncated to 16 bytes of hex.
pub fn digest(word: &str, def: &str) -> String {
    let mut hasher = Sha256::new();
    // Length prefix keeps ("ab", "c") and ("a", "bc") apart
    hasher.update((word.len() as u64).to_le_bytes());
    hasher.update(word.as_bytes());
    hasher.update(def.as_bytes());
    let hash = hasher.finalize();
    hash[..DIGEST_LEN / 2].iter().map(|b| format!("{:02x}", b)).collect()
}

/// Where the canonical sense for a digest lives in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub headword: String,
    pub index: usize,
}

/// Digests already claimed, each mapped to its canonical sense, in
/// registration order.
#[derive(Debug, Default, Clone)]
pub struct DigestRegistry {
    seen: HashMap<String, Location>,
    order: Vec<String>,
}

impl DigestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `digest` at `location`; returns false, leaving the registry
    /// unchanged, if it was already present.
    pub fn insert(&mut self, digest: &str, location: Location) -> bool {
        if self.seen.contains_key(digest) {
            return false;
        }
        self.seen.insert(digest.to_string(), location);
        self.order.push(digest.to_string());
        true
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.seen.contains_key(digest)
    }

    /// Canonical sense registered for `digest`.
    pub fn get(&self, digest: &str) -> Option<&Location> {
        self.seen.get(digest)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    pub kept: usize,
    pub dropped: usize,
}

/// Assign digests and drop every sense whose digest was seen earlier, in
/// headword order then sense order.
pub fn dedup(headwords: &mut Headwords) -> (DigestRegistry, DedupStats) {
    let mut registry = DigestRegistry::new();
    let mut stats = DedupStats::default();

    for (headword, senses) in headwords.iter_mut() {
        let mut index = 0;
        senses.retain_mut(|sense| {
            let digest = digest(&sense.word, &sense.def);
            let location = Location { headword: headword.clone(), index };
            if registry.insert(&digest, location) {
                sense.digest = digest;
                stats.kept += 1;
                index += 1;
                true
            } else {
                stats.dropped += 1;
                false
            }
        });
    }

    tracing::debug!(?stats, "deduplicated senses");
    (registry, stats)
}

/// Curation state of a sense, keyed by digest in the status file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    Unsure,
    Accepted,
    Rejected,
}

impl Status {
    pub fn as_char(self) -> char {
        match self {
            Status::Pending => '.',
            Status::Unsure => '?',
            Status::Accepted => '+',
            Status::Rejected => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Status::Pending),
            '?' => Some(Status::Unsure),
            '+' => Some(Status::Accepted),
            '-' => Some(Status::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Statuses decided without a curator: proper names and slurs are rejected.
pub fn seed_statuses(headwords: &Headwords) -> Vec<(String, Status)> {
    headwords
        .values()
        .flatten()
        .filter(|sense| sense.pos == "name" || sense.has_tag("slur"))
        .map(|sense| (sense.digest.clone(), Status::Rejected))
        .collect()
}
