//! listkit 데모 (listkit demo)
//!
//! 실행 방법 (How to run):
//!   cargo run --bin listkit-demo -- primes 100
//!   cargo run --bin listkit-demo -- find --above 100 25 50 100 150 200
//!   RUST_LOG=listkit=debug cargo run --release --bin listkit-demo -- --workers 4 fib-map --from 20 --to 35

use std::time::Instant;

use clap::{Parser, Subcommand};
use listkit::parallel::{MapperConfig, ParallelMapper};
use listkit::{find_first, fib_tree, primes_up_to};
use tracing_subscriber::EnvFilter;

/// Functional list-processing toolkit demo
#[derive(Parser)]
#[command(name = "listkit-demo")]
#[command(version)]
#[command(about = "Prime sieve, predicate search and parallel map from the command line")]
struct Cli {
    /// Worker count for parallel commands; falls back to LISTKIT_MAX_WORKERS, then the host CPU count
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every prime up to N
    Primes {
        /// Inclusive upper bound
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Print the first value strictly greater than a threshold
    Find {
        /// Threshold to compare against
        #[arg(long, allow_negative_numbers = true)]
        above: i64,
        /// Values scanned left to right
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Compute tree-recursive Fibonacci over [FROM, TO] in parallel
    FibMap {
        #[arg(long, default_value_t = 20)]
        from: u64,
        #[arg(long, default_value_t = 30)]
        to: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Primes { n } => {
            let primes = primes_up_to(n)?;
            println!("{} prime(s) <= {}: {:?}", primes.len(), n, primes);
        }
        Commands::Find { above, values } => match find_first(|v| *v > above, values) {
            Some(v) => println!("found {v}"),
            None => println!("not found"),
        },
        Commands::FibMap { from, to } => {
            if from > to {
                anyhow::bail!("--from ({from}) must not exceed --to ({to})");
            }
            let config = match cli.workers {
                Some(n) => MapperConfig::with_max_workers(n),
                None => MapperConfig::from_env()?,
            };
            let mapper = ParallelMapper::new(config)?;
            let input: Vec<u64> = (from..=to).collect();

            let start = Instant::now();
            let results = mapper.map(|&n| fib_tree(n), &input)?;
            let elapsed = start.elapsed();

            for (n, value) in input.iter().zip(&results) {
                println!("fib({n}) = {value}");
            }
            println!(
                "{} element(s) on up to {} worker(s) in {:.2?}",
                input.len(),
                mapper.max_workers(),
                elapsed
            );
        }
    }

    Ok(())
}
