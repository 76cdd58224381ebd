//! Hexagonal torus covering tool.
//!
//! Searches for a 128-cell toroidal hexagonal grid holding each of the 128
//! possible 7-hexagon neighborhoods exactly once, verifies candidate
//! tilings written as flat 0/1 grids, and reprints such grids in the
//! rotated hexagon orientation.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexcover::{text, Outcome, Search};

/// Explores full-coverage tilings of a toroidal hexagonal grid.
#[derive(Parser)]
#[command(name = "hexcover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a torus holding all 128 patterns exactly once.
    Search {
        /// Torus width in hexagons.
        #[arg(long, default_value_t = 32)]
        width: i32,
        /// Torus height in hexagons; must be even.
        #[arg(long, default_value_t = 4)]
        height: i32,
        /// RNG seed; runs without one print the seed they picked.
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many search steps.
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Count pattern occurrences in a 0/1 torus read from a file or stdin.
    Verify {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Reprint a 0/1 torus in the rotated hexagon orientation.
    Transpose {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexcover=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Search {
            width,
            height,
            seed,
            max_steps,
        }) => run_search(width, height, seed, max_steps),
        Some(Command::Verify { file }) => run_verify(file),
        Some(Command::Transpose { file }) => run_transpose(file),
        None => run_search(32, 4, None, None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Runs the backtracking search and prints whatever it finds.
fn run_search(width: i32, height: i32, seed: Option<u64>, max_steps: Option<u64>) -> CliResult {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Random seed: {seed}");

    let mut search = Search::new(width, height, seed)?;
    if let Some(max) = max_steps {
        search = search.with_max_steps(max);
    }

    match search.run() {
        Outcome::Solved => {
            println!("Found the torus ({} steps):", search.steps());
            println!("{}", search.torus());
        }
        Outcome::Exhausted => {
            println!(
                "Search space exhausted after {} steps; best coverage {} of 128.",
                search.steps(),
                search.best()
            );
        }
        Outcome::OutOfBudget => {
            println!(
                "No full placement within {} steps; best coverage {} of 128.",
                search.steps(),
                search.best()
            );
            println!("{}", search.torus());
        }
    }
    Ok(())
}

/// Reads a 0/1 torus and reports how many times each pattern occurs.
fn run_verify(file: Option<PathBuf>) -> CliResult {
    let torus = text::parse(&read_input(file)?)?;
    println!("Read a {} × {} ⬢ torus.", torus.width(), torus.height());

    let counts = torus.verify()?;
    if counts.len() == 128 {
        println!("The torus is fully populated.");
    }

    let mut duplicates: Vec<_> = counts
        .iter()
        .filter(|&(_, &count)| count != 1)
        .map(|(&code, &count)| (code, count))
        .collect();
    if duplicates.is_empty() {
        println!("Each pattern appears exactly once.");
    } else {
        duplicates.sort();
        println!("The torus is invalid, these patterns appear more than once:");
        for (code, count) in duplicates {
            println!("{count} times:\n{code}");
        }
    }
    Ok(())
}

/// Reads a 0/1 torus and reprints it in the other orientation.
fn run_transpose(file: Option<PathBuf>) -> CliResult {
    let torus = text::parse(&read_input(file)?)?;
    println!("Read a {} × {} ⬢ torus.", torus.width(), torus.height());
    println!();
    println!("As a ⬣ torus:");
    print!("{}", text::transpose(&torus));
    Ok(())
}

fn read_input(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
}
