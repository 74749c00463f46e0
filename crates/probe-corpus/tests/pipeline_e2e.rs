//! End-to-end pipeline scenarios over a real temp filesystem

use probe_corpus::marker::{end_delimiter, start_delimiter};
use probe_corpus::{run_pipeline, CaseRecord, PipelineConfig};
use std::fs;
use std::path::Path;

fn config_in(root: &Path) -> PipelineConfig {
    PipelineConfig {
        fixture_dir: root.join("response_test_files"),
        inject_dir: root.join("response_test_files_with_patterns"),
        batch_dir: root.join("batched_test_files"),
        ..PipelineConfig::default()
    }
}

#[test]
fn single_size_single_pattern_no_batching() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        sizes_kb: vec![10],
        edit_counts: vec![5],
        batch: None,
        ..config_in(dir.path())
    };

    let records = run_pipeline(&config).unwrap();

    assert_eq!(records.len(), 1);
    let CaseRecord::Test(case) = &records[0] else {
        panic!("expected a plain test case");
    };
    assert_eq!(case.num_edits, 5);
    assert_eq!(case.file_size_kb, 10);
    assert_eq!(case.pattern_name, "pattern_5_edits");

    // One fixture, one injected file, and the manifest on disk.
    assert!(config.fixture_dir.join("test_file_10kb.md").exists());
    let content = fs::read_to_string(&case.filename).unwrap();
    for id in 0..5 {
        assert_eq!(content.matches(&start_delimiter(id)).count(), 1);
        assert_eq!(content.matches(&end_delimiter(id)).count(), 1);
    }

    let manifest = fs::read_to_string(config.inject_dir.join("test_cases.md")).unwrap();
    let rows: Vec<&str> = manifest
        .lines()
        .filter(|line| line.starts_with("| test_file"))
        .collect();
    assert_eq!(rows, [format!("| {} | 10 | 5 | pattern_5_edits |", case.basename())]);
}

#[test]
fn batching_splits_only_oversized_cases() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        sizes_kb: vec![10],
        edit_counts: vec![2, 10],
        batch: Some(3),
        ..config_in(dir.path())
    };

    let records = run_pipeline(&config).unwrap();

    // 2 injected cases + 4 batches of the 10-edit case.
    assert_eq!(records.len(), 6);
    let batched: Vec<_> = records
        .iter()
        .filter_map(|record| match record {
            CaseRecord::Batched(batch) => Some(batch),
            CaseRecord::Test(_) => None,
        })
        .collect();
    assert_eq!(batched.len(), 4);

    let counts: Vec<usize> = batched.iter().map(|batch| batch.num_edits).collect();
    assert_eq!(counts, [3, 3, 3, 1]);
    for (index, batch) in batched.iter().enumerate() {
        assert_eq!(batch.pattern_name, format!("pattern_10_edits_batch{}", index + 1));
        assert!(batch.filename.exists());
    }

    // The 2-edit case stays under the threshold: no batch file for it.
    let batch_names: Vec<String> = fs::read_dir(&config.batch_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(batch_names.iter().all(|name| name.contains("pattern_10_edits")));
}

#[test]
fn fixed_seed_reproduces_the_corpus() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let make = |root: &Path| PipelineConfig {
        sizes_kb: vec![10],
        edit_counts: vec![5],
        seed: 7,
        ..config_in(root)
    };

    run_pipeline(&make(first_dir.path())).unwrap();
    run_pipeline(&make(second_dir.path())).unwrap();

    let first = fs::read_to_string(first_dir.path().join("response_test_files/test_file_10kb.md"))
        .unwrap();
    let second =
        fs::read_to_string(second_dir.path().join("response_test_files/test_file_10kb.md"))
            .unwrap();
    assert_eq!(first, second);
}
