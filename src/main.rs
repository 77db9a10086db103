//! Wordle Sieve - CLI
//!
//! Clue filter and letter-frequency guess ranker with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_sieve::{
    commands::{
        BenchmarkConfig, DEFAULT_MAX_RESULTS, QueryConfig, analyze_word, analyze_word_list,
        run_benchmark, run_openers, run_query,
    },
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_openers, print_query_result,
        print_word_analysis,
    },
    session::Session,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Filter a Wordle word list by clues and rank guesses by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 2285 words) or path to a one-word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log level when RUST_LOG is unset: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Show at most this many matches before reporting "too many results"
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive clue grid (default)
    Play,

    /// Filter the word list by clues and rank the matches
    Query {
        /// Known letters by position, e.g. a___e
        #[arg(short, long)]
        known: Option<String>,

        /// Letters in the word but not at the given slot, e.g. _r__t (repeatable)
        #[arg(short, long)]
        misplaced: Vec<String>,

        /// Letters not in the word, e.g. sxz
        #[arg(short, long)]
        excluded: Option<String>,

        /// Played guess with its feedback, e.g. crane=g-y-- (repeatable)
        #[arg(short, long)]
        feedback: Vec<String>,

        /// Number of suggestions to show
        #[arg(short = 'n', long, default_value = "20", allow_negative_numbers = true)]
        limit: i64,

        /// Keep word list order instead of ranking
        #[arg(long)]
        no_rank: bool,

        /// Show candidate counts after each filter pass
        #[arg(short, long)]
        verbose: bool,
    },

    /// Best opening guesses for the word list
    Openers {
        /// Number of openers to show
        #[arg(short = 'n', long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,
    },

    /// Letter frequency table, or the score of one word
    Analyze {
        /// Word to score instead of printing the table
        word: Option<String>,
    },

    /// Measure filtering on random secrets and guesses
    Benchmark {
        /// Number of random secrets
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Random guesses played against each secret
        #[arg(short, long, default_value = "2")]
        guesses: usize,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list based on the -w flag
///
/// - "embedded": the list compiled into the binary
/// - "<path>": a one-word-per-line file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'"))?,
    };

    info!(source = wordlist_mode, words = words.len(), "word list ready");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let words = load_wordlist(&cli.wordlist)?;
    let session = Session::new(&words).context("Word list has no valid five-letter words")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session, cli.max_results),
        Commands::Query {
            known,
            misplaced,
            excluded,
            feedback,
            limit,
            no_rank,
            verbose,
        } => {
            let config = QueryConfig {
                known,
                misplaced,
                excluded,
                feedback,
                limit,
                ranked: !no_rank,
                max_results: cli.max_results,
            };
            let result = run_query(&config, &session)?;
            print_query_result(&result, verbose);
            Ok(())
        }
        Commands::Openers { limit } => {
            let openers = run_openers(&session, limit)?;
            print_openers(&openers);
            Ok(())
        }
        Commands::Analyze { word } => {
            if let Some(word) = word {
                print_word_analysis(&analyze_word(&word, &session)?);
            } else {
                print_analysis_result(&analyze_word_list(&session));
            }
            Ok(())
        }
        Commands::Benchmark {
            count,
            guesses,
            seed,
        } => {
            println!("Running benchmark on {count} random secrets with {guesses} guesses each...");
            let mut config = BenchmarkConfig::new(count).with_guesses(guesses);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = run_benchmark(&session, &config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(session: Session, max_results: usize) -> Result<()> {
    use wordle_sieve::interactive::{App, run_tui};

    let app = App::new(session, max_results);
    run_tui(app)
}
