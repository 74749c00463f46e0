//! End-to-end corpus pipeline
//!
//! Fixture and pattern construction feed the injector's cross
//! product; injected test cases optionally feed the batch splitter.
//! Strictly sequential, in dependency order, with configuration
//! validated before any file I/O.

use crate::batch::BatchSplitter;
use crate::content::MarkdownGenerator;
use crate::error::{CorpusError, Result};
use crate::fixture::FixtureBuilder;
use crate::inject::Injector;
use crate::pattern::build_edit_patterns;
use crate::types::CaseRecord;
use std::path::PathBuf;

/// Default fixture sizes in KB
pub const DEFAULT_SIZES_KB: &[u32] = &[10, 50, 100, 200, 500, 1000];
/// Default edit counts
pub const DEFAULT_EDIT_COUNTS: &[usize] = &[1, 2, 5, 10, 20];
/// Default maximum edits per batch
pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Fixture sizes in KB, duplicates and order preserved
    pub sizes_kb: Vec<u32>,
    /// Edit counts to build patterns for
    pub edit_counts: Vec<usize>,
    /// Maximum edits per batch; `None` disables batching
    pub batch: Option<usize>,
    /// Seed for the content generator
    pub seed: u64,
    /// Directory for pristine fixtures
    pub fixture_dir: PathBuf,
    /// Directory for injected test cases and the manifest
    pub inject_dir: PathBuf,
    /// Directory for batched test files
    pub batch_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sizes_kb: DEFAULT_SIZES_KB.to_vec(),
            edit_counts: DEFAULT_EDIT_COUNTS.to_vec(),
            batch: None,
            seed: 42,
            fixture_dir: PathBuf::from("response_test_files"),
            inject_dir: PathBuf::from("response_test_files_with_patterns"),
            batch_dir: PathBuf::from("batched_test_files"),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration before any file I/O
    ///
    /// Empty size or edit-count lists and a batch size of 0 are
    /// rejected. Individual sizes of 0 KB are allowed here (the
    /// fixture builder skips them) and an edit count of 0 is valid.
    ///
    /// # Errors
    /// Returns [`CorpusError::InvalidConfig`] describing the first
    /// problem found.
    pub fn validate(&self) -> Result<()> {
        if self.sizes_kb.is_empty() {
            return Err(CorpusError::InvalidConfig("empty size list".to_string()));
        }
        if self.edit_counts.is_empty() {
            return Err(CorpusError::InvalidConfig("empty edit-count list".to_string()));
        }
        if self.batch == Some(0) {
            return Err(CorpusError::InvalidConfig(
                "max edits per batch must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Run the full pipeline: fixtures, patterns, injection, batching
///
/// Returns all injected test cases in manifest order, followed by
/// every batched derivative in production order. Pass-through cases
/// (at or under the batch threshold) are not re-emitted.
///
/// # Errors
/// Invalid configuration is rejected up front; any I/O failure aborts
/// the stage it occurred in.
pub fn run_pipeline(config: &PipelineConfig) -> Result<Vec<CaseRecord>> {
    config.validate()?;

    tracing::debug!(seed = config.seed, "building fixtures");
    let generator = MarkdownGenerator::new(config.seed);
    let files = FixtureBuilder::new(generator, &config.fixture_dir).build(&config.sizes_kb)?;

    let patterns = build_edit_patterns(&config.edit_counts);

    tracing::debug!(files = files.len(), patterns = patterns.len(), "injecting patterns");
    let cases = Injector::new(&config.inject_dir).inject(&files, &patterns)?;

    let mut records: Vec<CaseRecord> = cases.iter().cloned().map(CaseRecord::Test).collect();

    if let Some(max_edits_per_batch) = config.batch {
        let splitter = BatchSplitter::new(&config.batch_dir, max_edits_per_batch)?;
        for case in &cases {
            if case.num_edits > max_edits_per_batch {
                tracing::debug!(
                    case = %case.filename.display(),
                    edits = case.num_edits,
                    "splitting into batches"
                );
                records.extend(splitter.split(case)?);
            }
        }
    }

    Ok(records)
}
