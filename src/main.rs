use sortbench::{datagen, Algorithm, BenchmarkRunner, KeyDomain, SortKey};

fn main() {
    println!("=== Sorting Benchmark ===\n");

    let header = datagen::header();
    let records = datagen::synthetic_matches(5_000, 42);
    println!("Benchmarking {} synthetic match records...\n", records.len());

    let runner = BenchmarkRunner::with_defaults();
    let key = SortKey::new(datagen::ATTENDANCE_FIELD, KeyDomain::Integer);

    for (algorithm, result) in runner.run_matrix(&Algorithm::all(), key, &header, &records) {
        match result {
            Ok(report) => print!("{}", report),
            Err(e) => println!("  {}: skipped: {}", algorithm, e),
        }
    }
}
