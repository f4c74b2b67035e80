use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context as _, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use wiktionary_headwords::output::{overwrite_warning, write_build};
use wiktionary_headwords::{open_input, Config, Context, CorpusReader, ParallelConfig, Stage, Strategy};

#[derive(Parser)]
#[command(name = "wiktionary-headwords")]
#[command(about = "Build a curated headword database from wiktextract JSONL")]
struct Args {
    /// Input JSONL file (.jsonl or .jsonl.bz2)
    input: PathBuf,

    /// Directory for headwords.json, statuses.txt and bonus lists
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// YAML config (languages, output file names)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write bonus lists of possibly missing words
    #[arg(long)]
    bonus: bool,

    /// Processing strategy for reading the corpus
    #[arg(short, long, value_enum, default_value_t = Strategy::Sequential)]
    strategy: Strategy,

    /// Number of threads (0 = auto-detect)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Lines per batch for batch-parallel strategy
    #[arg(long, default_value_t = 1000)]
    batch_size: usize,

    /// Limit number of input lines to read (for testing)
    #[arg(long)]
    limit: Option<usize>,

    /// Append seeded statuses instead of overwriting the status file
    #[arg(long)]
    append_statuses: bool,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("failed to load config")?;
    let parallel = ParallelConfig::new(args.threads, args.batch_size);

    if !args.quiet {
        println!("Parsing: {}", args.input.display());
        println!("Output: {}", args.output_dir.display());
        println!("Languages: {}", config.languages.join(", "));
        println!("Strategy: {:?}", args.strategy);
        if args.strategy != Strategy::Sequential {
            println!("Threads: {}", parallel.num_threads);
        }
        if let Some(limit) = args.limit {
            println!("Limit: {} lines", limit);
        }
        if args.bonus {
            println!("Bonus lists: on");
        }
        println!("{}", overwrite_warning(&config.outputs, args.append_statuses));
        println!();
    }

    let start_time = Instant::now();

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);

    let reader = open_input(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let (entries, read_stats) = CorpusReader::new(&config.languages)
        .strategy(args.strategy, parallel)
        .limit(args.limit)
        .read(reader, |stats| {
            let elapsed = start_time.elapsed().as_secs_f64();
            pb.set_message(format!(
                "Lines: {} | Entries: {} | Rate: {:.0} lines/s",
                stats.lines_read,
                stats.entries_kept,
                stats.lines_read as f64 / elapsed.max(f64::EPSILON)
            ));
            pb.tick();
        })
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    pb.finish_and_clear();

    let say = |message: &str| {
        if !args.quiet {
            println!("{}", message);
        }
    };

    say(&format!("Done. {} lines parsed, {} entries kept.", read_stats.lines_read, read_stats.entries_kept));
    say("Extracting and organizing data from entries...");
    let mut context = Context::new(&config, &entries, args.bonus);
    say("Done.");

    for stage in Stage::ALL {
        say(&format!("{}...", stage));
        context.run_stage(stage);
        say("Done.");
    }

    let build = context.finish();
    let written = write_build(&args.output_dir, &config.outputs, &build, args.append_statuses)
        .with_context(|| format!("failed to write outputs to {}", args.output_dir.display()))?;

    if args.quiet {
        return Ok(());
    }

    let stats = &build.stats;
    let elapsed = start_time.elapsed();
    println!();
    println!("============================================================");
    println!("Lines read: {}", read_stats.lines_read);
    println!("Entries kept: {}", read_stats.entries_kept);
    println!("Other languages: {}", read_stats.other_language);
    println!("Malformed records: {}", read_stats.malformed);
    println!("Entries rejected: {}", stats.normalize.entries_rejected);
    println!("Senses normalized: {}", stats.normalize.senses_added);
    println!("Alt references: {}", stats.resolve.references);
    println!("Alt senses derived: {}", stats.resolve.derived);
    println!("Alt references unresolved: {}", stats.resolve.unresolved);
    println!("Inflection senses pruned: {}", stats.prune.inflection_senses);
    println!("Headwords purged: {}", stats.prune.headwords);
    println!("Inflections synthesized: {}", stats.synthesis.total());
    println!("Duplicate senses dropped: {}", stats.dedup.dropped);
    println!("Headwords written: {}", build.headwords.len());
    println!("Senses written: {}", stats.dedup.kept);
    println!("Statuses seeded: {}", build.statuses.len());
    println!("Database: {}", written.headwords.display());
    println!("Statuses: {}", written.statuses.display());
    for path in &written.bonus {
        println!("Bonus: {}", path.display());
    }
    println!("Time: {}m {}s", elapsed.as_secs() / 60, elapsed.as_secs() % 60);
    println!("============================================================");

    Ok(())
}
