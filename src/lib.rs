// Sorting Algorithm Benchmark Harness
//
// Measures seven sorting algorithms against tabular record datasets under
// three constructed input orderings (best, average, worst) and reports
// elapsed time and a best-effort memory snapshot per combination.

pub mod algorithms;
pub mod bench;
pub mod cases;
pub mod csv;
pub mod datagen;
pub mod key;
pub mod mem;
pub mod pipeline;
pub mod record;

pub use algorithms::Algorithm;
pub use bench::{BenchConfig, BenchmarkResult, BenchmarkRunner, CaseOutcome, CombinationReport};
pub use cases::{build_case, CaseKind};
pub use csv::CsvData;
pub use key::{KeyDomain, KeyValue, SortKey};
pub use pipeline::{preprocess, PipelineConfig, PipelineOutput};
pub use record::Record;
