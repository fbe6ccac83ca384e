//! Benchmark command
//!
//! Plays the codebreaker against many secrets in parallel and aggregates the
//! number of guesses it needs.

use super::solve::solve_code;
use crate::core::{Code, GameParams};
use crate::game::GameError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub params: GameParams,
    pub total_games: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of games per guess count
    pub distribution: FxHashMap<usize, usize>,
    /// The secret that took the most guesses
    pub hardest: Option<(Code, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Pick the secrets to benchmark against
///
/// `None` for `count` takes every code in ascending order. Otherwise `count`
/// secrets are drawn uniformly, with replacement, from an RNG seeded by `seed`.
#[must_use]
pub fn select_secrets(params: GameParams, count: Option<usize>, seed: u64) -> Vec<Code> {
    let space = params.search_space();
    match count {
        None => (0..space)
            .map(|index| Code::from_index(index, params))
            .collect(),
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|_| Code::from_index(rng.random_range(0..space), params))
                .collect()
        }
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the codebreaker against every secret in `secrets`
///
/// Games run in parallel. A progress bar is drawn on stderr when
/// `show_progress` is set.
///
/// # Errors
/// Returns the first `GameError` any game produces.
pub fn run_benchmark(
    params: GameParams,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();
    let pb = progress_bar(secrets.len(), show_progress);

    let counts = secrets
        .par_iter()
        .map(|secret| {
            let result = solve_code(secret.clone(), params, false);
            pb.inc(1);
            result.map(|solved| (secret, solved.guess_count()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &(_, guesses) in &counts {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_games = counts.len();
    let total_guesses: usize = counts.iter().map(|&(_, guesses)| guesses).sum();
    let min_guesses = counts.iter().map(|&(_, guesses)| guesses).min().unwrap_or(0);
    let hardest = counts
        .iter()
        .max_by_key(|&&(secret, guesses)| (guesses, std::cmp::Reverse(secret)))
        .map(|&(secret, guesses)| (secret.clone(), guesses));
    let max_guesses = hardest.as_ref().map_or(0, |&(_, guesses)| guesses);

    log::debug!(
        "benchmark of {total_games} games for {params} finished in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        params,
        total_games,
        total_guesses,
        average_guesses: if total_games == 0 {
            0.0
        } else {
            total_guesses as f64 / total_games as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(colors: u16, length: usize) -> GameParams {
        GameParams::new(colors, length).unwrap()
    }

    #[test]
    fn selecting_all_secrets_covers_space() {
        let p = params(3, 3);
        let secrets = select_secrets(p, None, 0);
        assert_eq!(secrets.len(), 27);
        assert!(secrets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let p = params(6, 4);
        let first = select_secrets(p, Some(20), 42);
        let second = select_secrets(p, Some(20), 42);
        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn benchmark_over_whole_space() {
        let p = params(3, 3);
        let secrets = select_secrets(p, None, 0);
        let result = run_benchmark(p, &secrets, false).unwrap();

        assert_eq!(result.total_games, 27);
        assert_eq!(result.min_guesses, 1);
        assert!(result.max_guesses <= 27);
        assert!(result.average_guesses >= 1.0);
        assert!(result.average_guesses <= result.max_guesses as f64);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_games);
        // Only the all-zero secret is found on the first guess
        assert_eq!(result.distribution.get(&1), Some(&1));

        let (hardest, guesses) = result.hardest.unwrap();
        assert_eq!(guesses, result.max_guesses);
        assert_eq!(solve_code(hardest, p, false).unwrap().guess_count(), guesses);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let p = params(6, 4);
        let result = run_benchmark(p, &[], false).unwrap();
        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.hardest.is_none());
        assert!(result.distribution.is_empty());
    }
}
