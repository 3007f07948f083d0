//! Interactive code-breaking game in the terminal.
//!
//! Usage:
//!   cargo run --bin codebreaker -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin codebreaker                        # 4 letters from ABCDEFGH
//!   cargo run --bin codebreaker -- -d master --runes   # Master preset with rune glyphs
//!   cargo run --bin codebreaker -- --seed 42 --json    # Reproducible, JSON transcript

use codebreaker::build_info;
use codebreaker::{rng_from_seed, Difficulty, GameConfig, GameSession, Score};
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Everything printed by `--json` when the game ends.
#[derive(Serialize)]
struct Transcript<'a> {
    config: &'a GameConfig,
    secret: String,
    solved: bool,
    guesses: &'a [Score],
}

enum Outcome {
    Solved,
    OutOfGuesses,
    Quit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, emit_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let mut rng = rng_from_seed(config.seed);
    let mut game = match GameSession::from_config(&config, &mut rng) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "could not start game");
            eprintln!("{}", err);
            process::exit(2);
        }
    };
    info!(seed = ?config.seed, "game started");

    println!(
        "Guess the {}-character code drawn from \"{}\".",
        game.length(),
        game.pool()
    );
    println!("Commands: :history  :restart  :quit");

    let outcome = match play(&mut game, config.max_guesses) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Input error: {}", err);
            process::exit(1);
        }
    };

    match outcome {
        Outcome::Solved => println!("Solved in {} guesses!", game.guess_count()),
        Outcome::OutOfGuesses => println!("Out of guesses. The code was {}.", game.code()),
        Outcome::Quit => println!("The code was {}.", game.code()),
    }

    if emit_json {
        let transcript = Transcript {
            config: &config,
            secret: game.code().to_string(),
            solved: matches!(outcome, Outcome::Solved),
            guesses: game.guesses(),
        };
        match serde_json::to_string_pretty(&transcript) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Could not write transcript: {}", err),
        }
    }
}

fn play(game: &mut GameSession, max_guesses: Option<usize>) -> io::Result<Outcome> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("[{}] > ", game.guess_count() + 1);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(Outcome::Quit);
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":q" => return Ok(Outcome::Quit),
            ":restart" => {
                game.restart();
                println!("History cleared. Same code, fresh start.");
                continue;
            }
            ":history" => {
                for (i, score) in game.guesses().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, render(score));
                }
                continue;
            }
            _ => {}
        }

        match game.guess(input) {
            Ok(score) => {
                println!("     {}", render(&score));
                if score.is_solved() {
                    return Ok(Outcome::Solved);
                }
                if max_guesses.is_some_and(|max| game.guess_count() >= max) {
                    return Ok(Outcome::OutOfGuesses);
                }
            }
            Err(err) => println!("     {}", err),
        }
    }
}

fn render(score: &Score) -> String {
    format!(
        "{}  correct: {}  close: {}",
        score.text(),
        score.correct(),
        score.close()
    )
}

fn parse_args(args: &[String]) -> Result<(GameConfig, bool), String> {
    let mut config = GameConfig::default();
    let mut emit_json = false;
    let mut runes = false;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-p" | "--pool" => {
                config.pool = value.ok_or("--pool needs a value")?.clone();
                i += 1;
            }
            "-l" | "--length" => {
                config.length = parse_number(value, "--length")?;
                i += 1;
            }
            "-m" | "--max-guesses" => {
                config.max_guesses = Some(parse_number(value, "--max-guesses")?);
                i += 1;
            }
            "--unlimited" => {
                config.max_guesses = None;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_number(value, "--seed")?);
                i += 1;
            }
            "-d" | "--difficulty" => {
                let name = value.ok_or("--difficulty needs a value")?;
                let difficulty = Difficulty::from_name(name)
                    .ok_or_else(|| format!("Unknown difficulty: {}", name))?;
                config = GameConfig {
                    seed: config.seed,
                    ..GameConfig::from_difficulty(difficulty)
                };
                i += 1;
            }
            "--runes" => {
                runes = true;
            }
            "-c" | "--config" => {
                let path = value.ok_or("--config needs a value")?;
                config = GameConfig::load(path).map_err(|e| e.to_string())?;
                i += 1;
            }
            "--json" => {
                emit_json = true;
            }
            "-v" | "--version" => {
                println!("{}", build_info::version_line());
                process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {} (try --help)", other)),
        }
        i += 1;
    }

    if runes {
        config = config.with_rune_pool().map_err(|e| e.to_string())?;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok((config, emit_json))
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got {}", flag, value))
}

fn print_help() {
    println!("Codebreaker");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin codebreaker -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -p, --pool <CHARS>       Characters the code is drawn from (default: ABCDEFGH)");
    println!("    -l, --length <N>         Code length (default: 4)");
    println!("    -m, --max-guesses <N>    Guesses before the game is lost (default: 10)");
    println!("    --unlimited              No guess limit");
    println!("    -s, --seed <S>           Random seed for reproducibility");
    println!("    -d, --difficulty <NAME>  Preset: novice, apprentice, journeyman, master");
    println!("    --runes                  Swap each pool character for a rune glyph (at most 8 distinct)");
    println!("    -c, --config <FILE>      Load settings from a JSON file");
    println!("    --json                   Print a JSON transcript at the end");
    println!("    -v, --version            Show version");
    println!("    -h, --help               Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace guesses on stderr.");
}
