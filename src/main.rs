//! Q-less Grid - CLI
//!
//! Solve rolls, enumerate grids, run batches and curate the template library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qless_grid::{
    commands::{
        BatchConfig, BatchMode, LookupConfig, SolveConfig, curation_candidates, rank_templates,
        ranked_library, run_batch, run_lookup, solve_roll,
    },
    core::{Roll, Score},
    output::{
        print_batch_statistics, print_curation, print_enumeration, print_lookup_reports,
        print_solve_result, print_template_ranks,
    },
    rolls::{DiceSet, load_rolls},
    solver::{SearchLimits, SharedCache, SolutionCache},
    templates::{
        TemplateLibrary,
        loader::{load_templates, save_templates},
    },
    wordlists::{
        Dictionary,
        loader::{load_ratings, load_unrated, load_word_set},
    },
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "qless_grid",
    about = "Crossword grid solver and template curation for twelve-dice word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word ratings file (`word,score` per line)
    #[arg(short = 'w', long, global = true, default_value = "data/ratings.csv")]
    words: PathBuf,

    /// Plain word list; words missing from the ratings get the review score
    #[arg(short = 'd', long, global = true)]
    definitions: Option<PathBuf>,

    /// Score given to words nobody has rated yet
    #[arg(long, global = true, default_value = "5")]
    review_score: Score,

    /// Template library (JSON)
    #[arg(short = 't', long, global = true, default_value = "data/templates.json")]
    templates: PathBuf,

    /// Minimum word score
    #[arg(long, global = true, default_value = "5")]
    threshold: Score,

    /// Give up on a template after this many solver attempts
    #[arg(long, global = true)]
    max_attempts: Option<u64>,
}

#[derive(clap::Args)]
struct RollArgs {
    /// File of rolls, one per line (default: throw the dice)
    #[arg(short, long)]
    rolls: Option<PathBuf>,

    /// Number of rolls to throw
    #[arg(short = 'n', long, default_value = "100")]
    count: usize,

    /// Random seed for dice and template shuffling
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the first grid for a roll
    Solve {
        /// The twelve letters
        roll: String,

        /// Relax the threshold down to this score
        #[arg(long)]
        end_threshold: Option<Score>,

        /// Only try the first N templates
        #[arg(long)]
        check_first: Option<usize>,

        /// Show every template search
        #[arg(short, long)]
        verbose: bool,
    },

    /// List grids for a roll, resuming from the cache
    Enumerate {
        roll: String,

        /// Stop after this many grids
        #[arg(long, default_value = "10")]
        stop_after: usize,

        /// Cache file to resume from and update
        #[arg(long)]
        cache: Option<PathBuf>,
    },

    /// Solve many rolls and report statistics
    Batch {
        #[command(flatten)]
        rolls: RollArgs,

        /// Relax the threshold down to this score
        #[arg(long)]
        end_threshold: Option<Score>,

        /// Keep searching each roll until this many grids are found
        #[arg(long)]
        stop_after: Option<usize>,

        /// Only try the first N templates
        #[arg(long)]
        check_first: Option<usize>,

        /// Try templates in random order
        #[arg(long)]
        shuffle: bool,

        /// Approved words; unapproved words in grids are listed for review
        #[arg(long)]
        approved: Option<PathBuf>,

        /// Rows shown per listing
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Rank templates over a batch and optionally write the reordered library
    Rank {
        #[command(flatten)]
        rolls: RollArgs,

        /// Where to write the ranked library
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rows shown
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Extend a cache file for many rolls
    Lookup {
        #[command(flatten)]
        rolls: RollArgs,

        /// Cache file
        #[arg(long)]
        cache: PathBuf,

        /// Grids wanted per roll
        #[arg(long, default_value = "10")]
        stop_after: usize,
    },
}

#[allow(clippy::too_many_lines)] // One arm per subcommand
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli)?;
    let library = load_templates(&cli.templates)
        .with_context(|| format!("loading templates from {}", cli.templates.display()))?;
    let limits = SearchLimits {
        max_solutions: None,
        max_attempts: cli.max_attempts,
    };
    log::info!("{} words, {} templates", dictionary.len(), library.len());

    match cli.command {
        Commands::Solve {
            roll,
            end_threshold,
            check_first,
            verbose,
        } => {
            let config = SolveConfig {
                threshold: cli.threshold,
                end_threshold: end_threshold.unwrap_or(cli.threshold),
                check_first,
                limits,
            };
            run_solve_command(&roll, &dictionary, &library, config, verbose)
        }
        Commands::Enumerate {
            roll,
            stop_after,
            cache,
        } => run_enumerate_command(
            &roll,
            &dictionary,
            &library,
            cli.threshold,
            stop_after,
            limits,
            cache.as_deref(),
        ),
        Commands::Batch {
            rolls,
            end_threshold,
            stop_after,
            check_first,
            shuffle,
            approved,
            top,
        } => {
            let mode = stop_after.map_or(BatchMode::FirstSuccess, |stop_after| {
                BatchMode::Exhaustive { stop_after }
            });
            let config = BatchConfig {
                end_threshold: end_threshold.unwrap_or(cli.threshold),
                check_first,
                shuffle_seed: shuffle.then(|| rolls.seed.unwrap_or_else(|| rand::rng().random())),
                limits,
                show_progress: true,
                ..BatchConfig::new(mode, cli.threshold)
            };
            run_batch_command(
                &rolls,
                &dictionary,
                &library,
                config,
                approved.as_deref(),
                cli.review_score,
                top,
            )
        }
        Commands::Rank { rolls, output, top } => {
            let config = BatchConfig {
                limits,
                show_progress: true,
                ..BatchConfig::new(BatchMode::FirstSuccess, cli.threshold)
            };
            run_rank_command(&rolls, &dictionary, &library, config, output.as_deref(), top)
        }
        Commands::Lookup {
            rolls,
            cache,
            stop_after,
        } => {
            let config = LookupConfig {
                limits,
                show_progress: true,
                ..LookupConfig::new(cli.threshold, stop_after)
            };
            run_lookup_command(&rolls, &dictionary, &library, &cache, config)
        }
    }
}

/// Ratings first, then unrated definitions at the review score
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let mut dictionary = load_ratings(&cli.words)
        .with_context(|| format!("loading ratings from {}", cli.words.display()))?;
    if let Some(path) = &cli.definitions {
        let added = load_unrated(&mut dictionary, path, cli.review_score)
            .with_context(|| format!("loading word list from {}", path.display()))?;
        log::debug!("{added} unrated words added");
    }
    Ok(dictionary)
}

fn gather_rolls(args: &RollArgs) -> Result<Vec<Roll>> {
    if let Some(path) = &args.rolls {
        return load_rolls(path).with_context(|| format!("loading rolls from {}", path.display()));
    }
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Ok(DiceSet::standard().roll_many(&mut rng, args.count)?)
}

fn run_solve_command(
    roll: &str,
    dictionary: &Dictionary,
    library: &TemplateLibrary,
    config: SolveConfig,
    verbose: bool,
) -> Result<()> {
    let roll = Roll::new(roll)?;
    let result = solve_roll(&roll, dictionary, library, config)?;
    print_solve_result(&result, library, verbose);
    Ok(())
}

fn run_enumerate_command(
    roll: &str,
    dictionary: &Dictionary,
    library: &TemplateLibrary,
    threshold: Score,
    stop_after: usize,
    limits: SearchLimits,
    cache_path: Option<&Path>,
) -> Result<()> {
    let roll = Roll::new(roll)?;
    library.check_roll(&roll)?;

    let mut cache = match cache_path {
        Some(path) => SolutionCache::load(path)
            .with_context(|| format!("loading cache from {}", path.display()))?,
        None => SolutionCache::new(),
    };
    let lookup = cache.lookup_or_extend(&roll, dictionary, library, threshold, stop_after, limits);
    print_enumeration(&roll, &lookup, library);

    if let Some(path) = cache_path {
        cache
            .save(path)
            .with_context(|| format!("saving cache to {}", path.display()))?;
    }
    Ok(())
}

fn run_batch_command(
    rolls: &RollArgs,
    dictionary: &Dictionary,
    library: &TemplateLibrary,
    config: BatchConfig,
    approved: Option<&Path>,
    review_score: Score,
    top: usize,
) -> Result<()> {
    let rolls = gather_rolls(rolls)?;
    println!("🎲 Solving {} rolls against {} templates...", rolls.len(), library.len());

    let stats = run_batch(&rolls, dictionary, library, config);
    print_batch_statistics(&stats, top);

    if let Some(path) = approved {
        let approved = load_word_set(path)
            .with_context(|| format!("loading approved words from {}", path.display()))?;
        let candidates = curation_candidates(&stats, dictionary, &approved, review_score, top);
        print_curation(&candidates);
    }
    Ok(())
}

fn run_rank_command(
    rolls: &RollArgs,
    dictionary: &Dictionary,
    library: &TemplateLibrary,
    config: BatchConfig,
    output: Option<&Path>,
    top: usize,
) -> Result<()> {
    let rolls = gather_rolls(rolls)?;
    println!("🎲 Ranking {} templates over {} rolls...", library.len(), rolls.len());

    let stats = run_batch(&rolls, dictionary, library, config);
    let ranks = rank_templates(&stats);
    print_template_ranks(&ranks, top);

    if let Some(path) = output {
        save_templates(&ranked_library(library, &ranks), path)
            .with_context(|| format!("writing ranked templates to {}", path.display()))?;
        println!("\nRanked library written to {}", path.display());
    }
    Ok(())
}

fn run_lookup_command(
    rolls: &RollArgs,
    dictionary: &Dictionary,
    library: &TemplateLibrary,
    cache_path: &Path,
    config: LookupConfig,
) -> Result<()> {
    let rolls = gather_rolls(rolls)?;
    let cache = SharedCache::new(
        SolutionCache::load(cache_path)
            .with_context(|| format!("loading cache from {}", cache_path.display()))?,
    );

    let reports = run_lookup(&rolls, dictionary, library, &cache, config)?;
    print_lookup_reports(&reports, library);

    cache
        .into_inner()
        .save(cache_path)
        .with_context(|| format!("saving cache to {}", cache_path.display()))?;
    Ok(())
}
