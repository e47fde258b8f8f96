//! Benchmark runner behavior: full case coverage, failure isolation,
//! configuration errors, and case/output persistence.

use sortbench::{
    csv, Algorithm, BenchConfig, BenchmarkRunner, CaseKind, KeyDomain, SortKey,
};

mod common;
use common::{fixture_header, fixture_rows, is_sorted_by_key, ATTENDANCE, VENUE};

#[test]
fn test_matrix_accounts_for_every_combination() {
    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::with_defaults();
    let key = SortKey::new(ATTENDANCE, KeyDomain::Integer);

    let results = runner.run_matrix(&Algorithm::all(), key, &header, &rows);
    assert_eq!(results.len(), Algorithm::all().len());
    for (algorithm, result) in results {
        let report = result.unwrap_or_else(|e| panic!("{} failed: {}", algorithm, e));
        assert_eq!(report.cases.len(), 3);
        assert!(report.succeeded());
    }
}

#[test]
fn test_unsupported_combination_does_not_stop_the_matrix() {
    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::with_defaults();
    let key = SortKey::new(VENUE, KeyDomain::Text);

    let results = runner.run_matrix(&Algorithm::all(), key, &header, &rows);
    let mut failures = 0;
    let mut successes = 0;
    for (algorithm, result) in results {
        match result {
            Ok(_) => successes += 1,
            Err(_) => {
                assert_eq!(algorithm, Algorithm::Counting);
                failures += 1;
            }
        }
    }
    assert_eq!(failures, 1);
    assert_eq!(successes, Algorithm::all().len() - 1);
}

#[test]
fn test_results_carry_timing_and_entries() {
    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::with_defaults();
    let key = SortKey::new(ATTENDANCE, KeyDomain::Integer);

    let report = runner
        .run_combination(Algorithm::Quick, key, &header, &rows)
        .unwrap();
    for case in &report.cases {
        let result = case.outcome.as_ref().unwrap();
        assert_eq!(result.entries, rows.len());
        assert_eq!(result.algorithm, Algorithm::Quick);
        assert_eq!(result.case, case.case);
    }
}

#[test]
fn test_persists_case_inputs_and_sorted_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::new(BenchConfig {
        output_dir: Some(dir.path().to_path_buf()),
        sample_memory: false,
    });
    let key = SortKey::new(ATTENDANCE, KeyDomain::Integer);

    let report = runner
        .run_combination(Algorithm::Merge, key, &header, &rows)
        .unwrap();
    assert!(report.succeeded());

    for kind in CaseKind::all() {
        let input_path = dir
            .path()
            .join(format!("field2_integer_merge_{}_input.csv", kind));
        let sorted_path = dir
            .path()
            .join(format!("field2_integer_merge_{}_sorted.csv", kind));

        let input = csv::read_records(&input_path).unwrap();
        assert_eq!(input.rows.len(), rows.len());
        assert_eq!(input.header, header);

        let sorted = csv::read_records(&sorted_path).unwrap();
        assert_eq!(sorted.rows.len(), rows.len());
        assert!(is_sorted_by_key(&sorted.rows, &key));
    }
}

#[test]
fn test_worst_case_file_is_descending() {
    let dir = tempfile::tempdir().unwrap();
    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::new(BenchConfig {
        output_dir: Some(dir.path().to_path_buf()),
        sample_memory: false,
    });
    let key = SortKey::new(ATTENDANCE, KeyDomain::Integer);

    runner
        .run_combination(Algorithm::Insertion, key, &header, &rows)
        .unwrap();

    let best = csv::read_records(dir.path().join("field2_integer_insertion_best_input.csv"))
        .unwrap()
        .rows;
    let worst = csv::read_records(dir.path().join("field2_integer_insertion_worst_input.csv"))
        .unwrap()
        .rows;
    let mut reversed = best;
    reversed.reverse();
    assert_eq!(worst, reversed);
}

#[test]
fn test_io_failure_is_isolated_to_the_case() {
    // Point output at a path that cannot be a directory.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"file, not a directory").unwrap();

    let header = fixture_header();
    let rows = fixture_rows();
    let runner = BenchmarkRunner::new(BenchConfig {
        output_dir: Some(blocker),
        sample_memory: false,
    });
    let key = SortKey::new(ATTENDANCE, KeyDomain::Integer);

    let report = runner
        .run_combination(Algorithm::Heap, key, &header, &rows)
        .unwrap();
    // Every case is accounted for, each with an explicit failure.
    assert_eq!(report.cases.len(), 3);
    for case in &report.cases {
        assert!(case.outcome.is_err());
    }
}
