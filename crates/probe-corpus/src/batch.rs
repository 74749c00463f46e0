//! Batch splitting
//!
//! Partitions a test case's markers into fixed-size groups and emits
//! one reduced file per group, each retaining only that group's
//! markers. Used to probe whether splitting a large edit set into
//! smaller requests avoids assistant timeouts.

use crate::error::{CorpusError, Result};
use crate::marker::{extract_marker_ids, remove_marker};
use crate::types::{BatchedTestCase, CaseRecord, TestCase};
use std::fs;
use std::path::PathBuf;

/// Splits test cases into fixed-size marker batches
#[derive(Debug)]
pub struct BatchSplitter {
    output_dir: PathBuf,
    max_edits_per_batch: usize,
}

impl BatchSplitter {
    /// Create a splitter writing into `output_dir`
    ///
    /// # Errors
    /// Rejects a batch size of 0 before any file I/O.
    pub fn new(output_dir: impl Into<PathBuf>, max_edits_per_batch: usize) -> Result<Self> {
        if max_edits_per_batch == 0 {
            return Err(CorpusError::InvalidConfig(
                "max edits per batch must be positive".to_string(),
            ));
        }
        Ok(Self {
            output_dir: output_dir.into(),
            max_edits_per_batch,
        })
    }

    /// Split one test case into marker batches
    ///
    /// When the file holds at most `max_edits_per_batch` distinct
    /// markers the case passes through unchanged as a single record
    /// and no file is written. Otherwise the sorted marker ids are
    /// partitioned into consecutive groups (last group may be short)
    /// and each group gets its own file with every other marker's
    /// span removed, separators included.
    ///
    /// # Errors
    /// Read/write failures propagate; orphan delimiters surface as
    /// [`CorpusError::MarkerViolation`].
    pub fn split(&self, case: &TestCase) -> Result<Vec<CaseRecord>> {
        let content = fs::read_to_string(&case.filename)
            .map_err(|source| CorpusError::io("read", &case.filename, source))?;
        let markers = extract_marker_ids(&content)?;

        if markers.len() <= self.max_edits_per_batch {
            return Ok(vec![CaseRecord::Test(case.clone())]);
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|source| CorpusError::io("create dir", &self.output_dir, source))?;

        let stem = case
            .filename
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut batches = Vec::new();
        for (index, group) in markers.chunks(self.max_edits_per_batch).enumerate() {
            let batch_index = index + 1;
            let batch_path = self.output_dir.join(format!("{stem}_batch{batch_index}.md"));

            let mut batch_content = content.clone();
            for &id in markers.iter().filter(|&&id| !group.contains(&id)) {
                batch_content = remove_marker(&batch_content, id)?;
            }

            fs::write(&batch_path, &batch_content)
                .map_err(|source| CorpusError::io("write", &batch_path, source))?;
            tracing::info!(
                path = %batch_path.display(),
                edits = group.len(),
                "created batched test file"
            );

            batches.push(CaseRecord::Batched(BatchedTestCase {
                filename: batch_path,
                file_size_kb: case.file_size_kb,
                num_edits: group.len(),
                pattern_name: format!("{}_batch{batch_index}", case.pattern_name),
                original_test_case: case.filename.clone(),
                batch_markers: group.to_vec(),
            }));
        }
        Ok(batches)
    }
}
