//! Command-line front end for the sorting benchmark harness.
//!
//! Reads a preprocessed CSV (or a raw export with `--preprocess`, or a
//! seeded synthetic dataset), then benchmarks the selected algorithms on the
//! chosen sort field across the best/average/worst cases.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sortbench::{
    datagen, preprocess, Algorithm, BenchConfig, BenchmarkRunner, CsvData, KeyDomain,
    PipelineConfig, Record, SortKey,
};

#[derive(Parser)]
#[command(name = "bench-cli")]
#[command(about = "Benchmark sorting algorithms over tabular match data", long_about = None)]
struct Cli {
    /// Input CSV file with a header line
    #[arg(short, long, conflicts_with = "synthetic")]
    input: Option<PathBuf>,

    /// Generate a synthetic dataset with this many records instead
    #[arg(long)]
    synthetic: Option<usize>,

    /// Seed for the synthetic generator
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Run the raw-export preprocessing pipeline (projection, full_date
    /// derivation, league and attendance filters) before benchmarking
    #[arg(long)]
    preprocess: bool,

    /// Field index to sort by
    #[arg(short, long)]
    field: usize,

    /// Key domain of the sort field
    #[arg(short, long, value_enum)]
    domain: DomainArg,

    /// Comma-separated algorithms to run (default: all)
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    /// Persist case inputs and sorted outputs to this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Disable memory sampling
    #[arg(long)]
    no_memory: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DomainArg {
    Integer,
    Text,
    Date,
}

impl From<DomainArg> for KeyDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Integer => KeyDomain::Integer,
            DomainArg::Text => KeyDomain::Text,
            DomainArg::Date => KeyDomain::Date,
        }
    }
}

fn load_dataset(cli: &Cli) -> Result<(Record, Vec<Record>), String> {
    if let Some(n) = cli.synthetic {
        return Ok((datagen::header(), datagen::synthetic_matches(n, cli.seed)));
    }

    let path = cli
        .input
        .as_ref()
        .ok_or_else(|| "either --input or --synthetic is required".to_string())?;
    let data = sortbench::csv::read_records(path)?;

    if cli.preprocess {
        let output = preprocess(&data, &PipelineConfig::default())?;
        println!("Preprocessing: {}", output.stats);
        Ok((output.header, output.rows))
    } else {
        let CsvData { header, rows } = data;
        Ok((header, rows))
    }
}

fn main() {
    let cli = Cli::parse();

    let (header, records) = match load_dataset(&cli) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let key = SortKey::new(cli.field, KeyDomain::from(cli.domain));
    let algorithms = cli.algorithms.clone().unwrap_or_else(Algorithm::all);
    let runner = BenchmarkRunner::new(BenchConfig {
        output_dir: cli.output_dir.clone(),
        sample_memory: !cli.no_memory,
    });

    println!(
        "Benchmarking {} records, {} on {} algorithms\n",
        records.len(),
        key,
        algorithms.len()
    );

    let mut failures = 0usize;
    for (algorithm, result) in runner.run_matrix(&algorithms, key, &header, &records) {
        match result {
            Ok(report) => {
                if !report.succeeded() {
                    failures += 1;
                }
                print!("{}", report);
            }
            Err(e) => {
                failures += 1;
                println!(
                    "  {:<14} {}: configuration error: {}",
                    algorithm.name(),
                    key,
                    e
                );
            }
        }
    }

    if failures > 0 {
        eprintln!("\n{} combination(s) reported failures", failures);
        process::exit(1);
    }
}
