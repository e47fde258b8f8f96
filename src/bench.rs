//! Benchmark orchestration.
//!
//! For one (algorithm, key) pair the runner generates the three cases, sorts
//! each on a fresh copy, and captures elapsed wall-clock time plus an
//! optional memory snapshot. Runs are strictly sequential; the clock is read
//! immediately around the sort call with no intervening I/O. A failure while
//! materializing a case is fatal to that case only, never to the harness.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::algorithms::Algorithm;
use crate::cases::{build_case, CaseKind};
use crate::csv;
use crate::key::SortKey;
use crate::mem;
use crate::record::Record;

/// Runner configuration, passed in explicitly instead of the path constants
/// the original harness hard-coded.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// When set, case inputs and sorted outputs are persisted here as CSV.
    pub output_dir: Option<PathBuf>,
    /// Sample max RSS after each sort.
    pub sample_memory: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            sample_memory: true,
        }
    }
}

/// One completed measurement. Immutable once created.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub key: SortKey,
    pub case: CaseKind,
    pub elapsed: Duration,
    pub memory_bytes: Option<u64>,
    pub entries: usize,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:<8} {}: {} entries in {} ms",
            self.algorithm.name(),
            self.case.name(),
            self.key,
            self.entries,
            self.elapsed.as_millis()
        )?;
        if let Some(bytes) = self.memory_bytes {
            write!(f, ", max rss {:.1} MB", bytes as f64 / (1024.0 * 1024.0))?;
        }
        Ok(())
    }
}

/// Outcome of one case run: a measurement or a reported failure, so every
/// requested case is accounted for.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case: CaseKind,
    pub outcome: Result<BenchmarkResult, String>,
}

/// All three case outcomes for one (algorithm, key) pair.
#[derive(Debug, Clone)]
pub struct CombinationReport {
    pub algorithm: Algorithm,
    pub key: SortKey,
    pub cases: Vec<CaseOutcome>,
}

impl CombinationReport {
    pub fn succeeded(&self) -> bool {
        self.cases.iter().all(|c| c.outcome.is_ok())
    }
}

impl fmt::Display for CombinationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            match &case.outcome {
                Ok(result) => writeln!(f, "  {}", result)?,
                Err(e) => writeln!(
                    f,
                    "  {:<14} {:<8} {}: FAILED: {}",
                    self.algorithm.name(),
                    case.case.name(),
                    self.key,
                    e
                )?,
            }
        }
        Ok(())
    }
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(BenchConfig::default())
    }

    /// Runs the three cases for one (algorithm, key) pair.
    ///
    /// Configuration problems (bad field index, unsupported domain) surface
    /// here, before any case runs. Per-case failures are reported in the
    /// returned outcomes instead.
    pub fn run_combination(
        &self,
        algorithm: Algorithm,
        key: SortKey,
        header: &Record,
        records: &[Record],
    ) -> Result<CombinationReport, String> {
        key.validate(records)?;
        if !algorithm.supports(key.domain) {
            return Err(format!(
                "{} sort does not support the {} domain",
                algorithm, key.domain
            ));
        }

        let mut cases = Vec::new();
        for kind in CaseKind::all() {
            let outcome = self.run_case(algorithm, key, kind, header, records);
            cases.push(CaseOutcome {
                case: kind,
                outcome,
            });
        }
        Ok(CombinationReport {
            algorithm,
            key,
            cases,
        })
    }

    /// Runs every algorithm in `algorithms` against one key. A failing
    /// combination is reported and does not stop the rest.
    pub fn run_matrix(
        &self,
        algorithms: &[Algorithm],
        key: SortKey,
        header: &Record,
        records: &[Record],
    ) -> Vec<(Algorithm, Result<CombinationReport, String>)> {
        algorithms
            .iter()
            .map(|&algorithm| {
                (
                    algorithm,
                    self.run_combination(algorithm, key, header, records),
                )
            })
            .collect()
    }

    fn run_case(
        &self,
        algorithm: Algorithm,
        key: SortKey,
        kind: CaseKind,
        header: &Record,
        records: &[Record],
    ) -> Result<BenchmarkResult, String> {
        // Fresh copy per run; earlier permutations never leak in.
        let mut case_data = build_case(kind, records, &key);

        if let Some(dir) = &self.config.output_dir {
            fs::create_dir_all(dir)
                .map_err(|e| format!("failed to create {}: {}", dir.display(), e))?;
            let path = dir.join(file_name(algorithm, &key, kind, "input"));
            csv::write_records(&path, header, &case_data)?;
        }

        let start = Instant::now();
        algorithm.run(&mut case_data, &key)?;
        let elapsed = start.elapsed();

        let memory_bytes = if self.config.sample_memory {
            mem::max_rss_bytes()
        } else {
            None
        };

        if let Some(dir) = &self.config.output_dir {
            let path = dir.join(file_name(algorithm, &key, kind, "sorted"));
            csv::write_records(&path, header, &case_data)?;
        }

        Ok(BenchmarkResult {
            algorithm,
            key,
            case: kind,
            elapsed,
            memory_bytes,
            entries: case_data.len(),
        })
    }
}

fn file_name(algorithm: Algorithm, key: &SortKey, kind: CaseKind, stage: &str) -> String {
    format!(
        "field{}_{}_{}_{}_{}.csv",
        key.field,
        key.domain,
        algorithm.name(),
        kind.name(),
        stage
    )
}
