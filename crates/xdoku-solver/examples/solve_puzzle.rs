//! Example demonstrating the solver facade from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//! ```
//!
//! Solve as a diagonal sudoku:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --variant diagonal "<81 characters>"
//! ```
//!
//! Print propagation and search statistics:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --stats "<81 characters>"
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use xdoku_solver::{SolveStats, Solver, Variant};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Diagonal,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => Variant::Standard,
            VariantArg::Diagonal => Variant::Diagonal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle in row-major order; `.` for blanks, `1`-`9` for
    /// givens.
    puzzle: String,

    /// Rule variant to solve under.
    #[arg(long, value_name = "VARIANT", default_value = "standard")]
    variant: VariantArg,

    /// Print propagation and search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let args = Args::parse();
    let variant = Variant::from(args.variant);
    let solver = Solver::new(variant);

    let (solution, stats) = match solver.solve_with_stats(&args.puzzle) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Variant:");
    println!("  {variant}");
    println!();
    println!("Solution:");
    for line in solution.to_grid_string().lines() {
        println!("  {line}");
    }

    if args.stats {
        println!();
        print_stats(&stats);
    }
}

fn print_stats(stats: &SolveStats) {
    println!("Stats:");
    let mut applications: Vec<_> = stats.propagation.applications.iter().collect();
    applications.sort_unstable();
    for (name, count) in applications {
        println!("  {name}: {count}");
    }
    println!("  passes: {}", stats.propagation.passes);
    println!("  search nodes: {}", stats.search.nodes);
    println!("  search branches: {}", stats.search.branches);
}
