//! Benchmark command
//!
//! Plays random secrets against random guesses, turns the feedback into clues
//! and measures how hard the filter narrows the word list.

use crate::core::{Clues, Feedback};
use crate::filter::satisfies;
use crate::ranker::Limit;
use crate::session::Session;
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of random secrets
    pub rounds: usize,
    /// Random guesses played against each secret
    pub guesses_per_round: usize,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(rounds: usize) -> Self {
        Self {
            rounds,
            guesses_per_round: 1,
            seed: None,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_guesses(mut self, guesses_per_round: usize) -> Self {
        self.guesses_per_round = guesses_per_round;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub rounds: usize,
    pub corpus_size: usize,
    pub average_survivors: f64,
    /// Mean of corpus size divided by survivors
    pub average_reduction: f64,
    pub fewest_survivors: usize,
    pub most_survivors: usize,
    /// Rounds whose secret was still a candidate after its own clues
    pub secrets_survived: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of rounds in which the secret survived; 1.0 for a sound filter
    #[must_use]
    pub fn survival_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 1.0;
        }
        self.secrets_survived as f64 / self.rounds as f64
    }
}

struct RoundOutcome {
    survivors: usize,
    secret_survived: bool,
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Run random filter and rank queries in parallel
///
/// Secrets and guesses are drawn up front from one generator, so a seeded
/// run is reproducible whatever the thread count.
///
/// # Errors
///
/// Returns an error if the session has no words to draw from.
pub fn run_benchmark(session: &Session, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let corpus = session.corpus();
    if corpus.is_empty() {
        bail!("Cannot benchmark an empty word list");
    }
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let plan: Vec<(usize, Vec<usize>)> = (0..config.rounds)
        .map(|_| {
            let secret = rng.random_range(0..corpus.len());
            let guesses = (0..config.guesses_per_round)
                .map(|_| rng.random_range(0..corpus.len()))
                .collect();
            (secret, guesses)
        })
        .collect();

    info!(
        rounds = config.rounds,
        guesses = config.guesses_per_round,
        corpus = corpus.len(),
        "starting benchmark"
    );

    let pb = progress_bar(plan.len(), config.show_progress)?;
    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = plan
        .par_iter()
        .map(|(secret_idx, guess_indices)| {
            let secret = &corpus[*secret_idx];
            let mut clues = Clues::default();
            for &guess_idx in guess_indices {
                let guess = &corpus[guess_idx];
                clues.record(guess, Feedback::calculate(guess, secret));
            }

            let ranking = session.rank(&clues, Limit::new(10));
            let secret_survived = satisfies(secret, &clues);
            pb.inc(1);

            RoundOutcome {
                survivors: ranking.total_matches,
                secret_survived,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let rounds = outcomes.len();
    let secrets_survived = outcomes.iter().filter(|o| o.secret_survived).count();
    if secrets_survived < rounds {
        warn!(
            lost = rounds - secrets_survived,
            "secrets eliminated by their own clues"
        );
    }

    let (average_survivors, average_reduction) = if rounds > 0 {
        let survivors: usize = outcomes.iter().map(|o| o.survivors).sum();
        let reduction: f64 = outcomes
            .iter()
            .map(|o| corpus.len() as f64 / o.survivors.max(1) as f64)
            .sum();
        (survivors as f64 / rounds as f64, reduction / rounds as f64)
    } else {
        (0.0, 0.0)
    };

    Ok(BenchmarkResult {
        rounds,
        corpus_size: corpus.len(),
        average_survivors,
        average_reduction,
        fewest_survivors: outcomes.iter().map(|o| o.survivors).min().unwrap_or(0),
        most_survivors: outcomes.iter().map(|o| o.survivors).max().unwrap_or(0),
        secrets_survived,
        duration,
        queries_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
