//! Mastermind - CLI
//!
//! Plays either role of Mastermind over a line protocol on stdin/stdout, plus
//! self-play, benchmark and TUI modes.

use anyhow::{Context, Result, bail};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SessionOutcome, run_benchmark, run_breaker, run_maker, select_secrets, solve_code},
    core::{Code, GameParams},
    output::{print_benchmark_result, print_solve_result},
    protocol::parse_small_number,
};
use rand::Rng;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind codemaker and codebreaker over a line protocol",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// `K N` plays the codebreaker, `K C1 .. Cn` plays the codemaker
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hold a secret and answer guesses read from stdin
    Maker {
        /// Number of colors (K)
        #[arg(value_parser = small_number)]
        colors: u16,

        /// The secret, one symbol per argument
        #[arg(required = true, num_args = 1.., value_parser = small_number)]
        code: Vec<u16>,
    },

    /// Guess a secret, reading feedback from stdin
    Breaker {
        /// Number of colors (K)
        #[arg(value_parser = small_number)]
        colors: u16,

        /// Code length (N)
        #[arg(value_parser = small_number)]
        length: u16,
    },

    /// Solve a given secret by self-play
    Solve {
        /// Number of colors (K)
        #[arg(value_parser = small_number)]
        colors: u16,

        /// The secret, one symbol per argument
        #[arg(required = true, num_args = 1.., value_parser = small_number)]
        code: Vec<u16>,

        /// Show examined and remaining code counts per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the codebreaker over many secrets
    Bench {
        /// Number of colors (K)
        #[arg(value_parser = small_number)]
        colors: u16,

        /// Code length (N)
        #[arg(value_parser = small_number)]
        length: u16,

        /// Number of random secrets to play
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,

        /// Seed for secret selection (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play every secret in the code space instead of a random sample
        #[arg(short, long, conflicts_with_all = ["count", "seed"])]
        all: bool,
    },

    /// Interactive TUI: you hold the secret, the computer guesses
    Play {
        /// Number of colors (K)
        #[arg(value_parser = small_number)]
        colors: u16,

        /// Code length (N)
        #[arg(value_parser = small_number)]
        length: u16,
    },
}

fn small_number(token: &str) -> Result<u16, String> {
    parse_small_number(token).map_err(|e| e.to_string())
}

fn game_params(colors: u16, length: u16) -> Result<GameParams> {
    GameParams::new(colors, usize::from(length)).context("invalid game parameters")
}

fn secret_code(colors: u16, code: &[u16]) -> Result<(Code, GameParams)> {
    let length = u16::try_from(code.len()).context("secret is too long")?;
    let params = game_params(colors, length)?;
    let secret = Code::new(code, params).context("invalid secret")?;
    Ok((secret, params))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                err.exit();
            }
            log::debug!("{err}");
            eprintln!("ERROR");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:#}");
            eprintln!("ERROR");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Maker { colors, code }) => maker_command(colors, &code),
        Some(Commands::Breaker { colors, length }) => breaker_command(game_params(colors, length)?),
        Some(Commands::Solve {
            colors,
            code,
            verbose,
        }) => solve_command(colors, &code, verbose),
        Some(Commands::Bench {
            colors,
            length,
            count,
            seed,
            all,
        }) => bench_command(game_params(colors, length)?, (!all).then_some(count), seed),
        Some(Commands::Play { colors, length }) => play_command(game_params(colors, length)?),
        None => positional_command(&cli.args),
    }
}

/// The bare positional form: two arguments select the codebreaker, more select
/// the codemaker
fn positional_command(args: &[String]) -> Result<()> {
    let numbers = args
        .iter()
        .map(|arg| small_number(arg).map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()
        .context("invalid argument")?;

    match numbers.as_slice() {
        [colors, length] => breaker_command(game_params(*colors, *length)?),
        [colors, code @ ..] if code.len() >= 2 => maker_command(*colors, code),
        _ => bail!("expected `K N` or `K C1 .. Cn`, got {} arguments", args.len()),
    }
}

fn maker_command(colors: u16, code: &[u16]) -> Result<()> {
    let (secret, params) = secret_code(colors, code)?;
    let outcome = run_maker(secret, params, io::stdin().lock(), io::stdout().lock())
        .context("codemaker session failed")?;
    log_outcome(outcome);
    Ok(())
}

fn breaker_command(params: GameParams) -> Result<()> {
    let outcome = run_breaker(params, io::stdin().lock(), io::stdout().lock())
        .context("codebreaker session failed")?;
    log_outcome(outcome);
    Ok(())
}

fn log_outcome(outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::Solved { guesses } => log::info!("solved after {guesses} guesses"),
        SessionOutcome::InputClosed => log::info!("input closed before the game finished"),
    }
}

fn solve_command(colors: u16, code: &[u16], verbose: bool) -> Result<()> {
    let (secret, params) = secret_code(colors, code)?;
    let result = solve_code(secret, params, verbose).context("self-play failed")?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn bench_command(params: GameParams, count: Option<usize>, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let secrets = select_secrets(params, count, seed);

    match count {
        Some(count) => println!("Running benchmark on {count} random secrets (seed {seed})..."),
        None => println!("Running benchmark on all {} secrets...", secrets.len()),
    }

    let result = run_benchmark(params, &secrets, true).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}

fn play_command(params: GameParams) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    run_tui(App::new(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_parse() {
        let cli = Cli::try_parse_from(["mastermind", "6", "4"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.args, ["6", "4"]);
    }

    #[test]
    fn subcommand_parses() {
        let cli = Cli::try_parse_from(["mastermind", "maker", "6", "0", "1", "2", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Maker { colors: 6, ref code }) if code == &[0, 1, 2, 3]
        ));
    }

    #[test]
    fn small_number_rule_applies_to_arguments() {
        assert!(Cli::try_parse_from(["mastermind", "breaker", "06", "4"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "breaker", "1000", "4"]).is_err());
    }

    #[test]
    fn bench_all_conflicts_with_count() {
        assert!(Cli::try_parse_from(["mastermind", "bench", "6", "4", "--all", "-c", "5"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "bench", "6", "4", "--all"]).is_ok());
    }

    #[test]
    fn positional_argument_errors() {
        assert!(positional_command(&[]).is_err());
        assert!(positional_command(&["6".to_string()]).is_err());
        assert!(positional_command(&["6".to_string(), "04".to_string()]).is_err());
        assert!(positional_command(&["1".to_string(), "4".to_string()]).is_err());
    }
}
