//! Parallel processing strategies for corpus deserialization.
//!
//! Only the per-line work (JSON decoding and language filtering) is spread
//! across threads. Batches are split into contiguous chunks and results are
//! concatenated chunk by chunk, so output order always matches input order.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use clap::ValueEnum;

/// Processing strategy for reading the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// One line at a time on the calling thread
    #[default]
    Sequential,
    /// Batches of lines decoded on a pool of std threads
    BatchParallel,
}

/// Configuration for parallel processing
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of threads to use
    pub num_threads: usize,
    /// Lines per batch
    pub batch_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        let cpus = thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4);
        Self {
            num_threads: cpus,
            batch_size: 1000,
        }
    }
}

impl ParallelConfig {
    /// `threads == 0` keeps the detected CPU count.
    pub fn new(threads: usize, batch_size: usize) -> Self {
        let mut config = Self::default();
        if threads > 0 {
            config.num_threads = threads;
        }
        config.batch_size = batch_size.max(1);
        config
    }
}

/// Apply `f` to every item of `batch` using up to `num_threads` threads,
/// returning results in input order.
pub fn process_batch_threaded<T, R, F>(batch: Vec<T>, num_threads: usize, f: F) -> Vec<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
{
    if batch.is_empty() {
        return vec![];
    }

    let total = batch.len();
    let num_threads = num_threads.min(total).max(1);
    let chunk_size = (total + num_threads - 1) / num_threads;

    // Split batch into owned chunks, one per thread
    let mut items = batch.into_iter();
    let mut chunks: Vec<Vec<T>> = Vec::with_capacity(num_threads);
    loop {
        let chunk: Vec<T> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    let f = Arc::new(f);
    let handles: Vec<JoinHandle<Vec<R>>> = chunks
        .into_iter()
        .map(|chunk| {
            let f = Arc::clone(&f);
            thread::spawn(move || chunk.into_iter().map(|item| f(item)).collect())
        })
        .collect();

    // Collect results preserving order
    let mut results = Vec::with_capacity(total);
    for handle in handles {
        match handle.join() {
            Ok(chunk_results) => results.extend(chunk_results),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    results
}
