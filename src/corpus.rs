//! Reading the wiktextract JSONL corpus.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use bzip2::read::BzDecoder;

use crate::entry::RawEntry;
use crate::error::{Error, Result};
use crate::parallel::{process_batch_threaded, ParallelConfig, Strategy};

/// Open `path` for line reading, decompressing `.bz2` on the fly.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let reader: Box<dyn BufRead + Send> = if path.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };
    Ok(reader)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    pub lines_read: usize,
    pub entries_kept: usize,
    pub other_language: usize,
    pub malformed: usize,
    pub blank: usize,
}

/// Outcome of decoding one corpus line.
#[derive(Debug)]
pub enum Line {
    Entry(RawEntry),
    OtherLanguage,
    /// Valid JSON that does not fit the entry shape
    Malformed,
    Blank,
}

/// Decode one line. Text that is not JSON at all is fatal; JSON of the wrong
/// shape is reported as [`Line::Malformed`].
pub fn parse_line(line_no: usize, text: &str, languages: &[String]) -> Result<Line> {
    if text.trim().is_empty() {
        return Ok(Line::Blank);
    }

    match serde_json::from_str::<RawEntry>(text) {
        Ok(entry) if entry.is_lang(languages) => Ok(Line::Entry(entry)),
        Ok(_) => Ok(Line::OtherLanguage),
        Err(e) if e.is_data() => {
            tracing::debug!(line = line_no, error = %e, "skipping malformed record");
            Ok(Line::Malformed)
        }
        Err(source) => Err(Error::Json { line: line_no, source }),
    }
}

fn tally(line: Line, entries: &mut Vec<RawEntry>, stats: &mut ReadStats) {
    match line {
        Line::Entry(entry) => {
            entries.push(entry);
            stats.entries_kept += 1;
        }
        Line::OtherLanguage => stats.other_language += 1,
        Line::Malformed => stats.malformed += 1,
        Line::Blank => stats.blank += 1,
    }
}

/// Reads allowed-language entries from a JSONL stream.
pub struct CorpusReader<'a> {
    languages: &'a [String],
    strategy: Strategy,
    config: ParallelConfig,
    limit: Option<usize>,
}

impl<'a> CorpusReader<'a> {
    pub fn new(languages: &'a [String]) -> Self {
        Self {
            languages,
            strategy: Strategy::Sequential,
            config: ParallelConfig::default(),
            limit: None,
        }
    }

    pub fn strategy(mut self, strategy: Strategy, config: ParallelConfig) -> Self {
        self.strategy = strategy;
        self.config = config;
        self
    }

    /// Stop after `limit` lines.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Read the whole stream. `progress` is called with running totals every
    /// batch of lines.
    pub fn read(
        &self,
        reader: impl BufRead,
        mut progress: impl FnMut(&ReadStats),
    ) -> Result<(Vec<RawEntry>, ReadStats)> {
        let mut entries = Vec::new();
        let mut stats = ReadStats::default();
        let languages: Arc<Vec<String>> = Arc::new(self.languages.to_vec());
        let mut batch: Vec<(usize, String)> = Vec::with_capacity(self.config.batch_size);

        let lines = reader.lines().take(self.limit.unwrap_or(usize::MAX));
        for (i, text) in lines.enumerate() {
            let line_no = i + 1;
            let text = text?;
            stats.lines_read += 1;

            match self.strategy {
                Strategy::Sequential => {
                    tally(parse_line(line_no, &text, self.languages)?, &mut entries, &mut stats);
                    if stats.lines_read % self.config.batch_size.max(1) == 0 {
                        progress(&stats);
                    }
                }
                Strategy::BatchParallel => {
                    batch.push((line_no, text));
                    if batch.len() >= self.config.batch_size {
                        self.flush(&mut batch, &languages, &mut entries, &mut stats)?;
                        progress(&stats);
                    }
                }
            }
        }

        // Process remaining batch
        self.flush(&mut batch, &languages, &mut entries, &mut stats)?;
        progress(&stats);

        tracing::debug!(?stats, "read corpus");
        Ok((entries, stats))
    }

    fn flush(
        &self,
        batch: &mut Vec<(usize, String)>,
        languages: &Arc<Vec<String>>,
        entries: &mut Vec<RawEntry>,
        stats: &mut ReadStats,
    ) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let languages = Arc::clone(languages);
        let results = process_batch_threaded(std::mem::take(batch), self.config.num_threads, move |(line_no, text)| {
            parse_line(line_no, &text, &languages)
        });
        for line in results {
            tally(line?, entries, stats);
        }
        Ok(())
    }
}
