//! Corpus entity types
//!
//! Everything here is a write-once artifact: created by one pipeline
//! stage, never mutated afterwards. Fixtures are identified by path,
//! patterns by name, test cases by output filename.

use std::path::{Path, PathBuf};

/// A generated fixture file of a requested size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedFile {
    /// Path the fixture was written to
    pub path: PathBuf,
    /// Requested size in KB
    pub size_kb: u32,
}

/// One original/replacement text pair, addressed by marker id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Marker id, unique and contiguous from 0 within a pattern
    pub marker_id: usize,
    /// Delimited snippet spliced into the fixture
    pub original: String,
    /// Delimited snippet the assistant is asked to produce
    pub replacement: String,
}

/// A named, ordered set of marker-identified replacements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPattern {
    /// Pattern name, `pattern_{n}_edits`
    pub name: String,
    /// Replacements in marker-id order
    pub replacements: Vec<Replacement>,
}

impl EditPattern {
    /// Number of edits this pattern requests
    #[inline]
    #[must_use]
    pub fn num_edits(&self) -> usize {
        self.replacements.len()
    }
}

/// One (fixture x pattern) injection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Path of the injected output file
    pub filename: PathBuf,
    /// Size of the underlying fixture in KB
    pub file_size_kb: u32,
    /// Number of delimiter pairs physically present in the file
    pub num_edits: usize,
    /// Name of the injected pattern
    pub pattern_name: String,
}

impl TestCase {
    /// Basename of the output file, as recorded in the manifest
    #[must_use]
    pub fn basename(&self) -> String {
        self.filename
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A test case derived by keeping only a subset of a parent's markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchedTestCase {
    /// Path of the batched output file
    pub filename: PathBuf,
    /// Size of the underlying fixture in KB
    pub file_size_kb: u32,
    /// Number of markers retained in this batch
    pub num_edits: usize,
    /// Parent pattern name suffixed `_batch{n}`
    pub pattern_name: String,
    /// Filename of the parent test case
    pub original_test_case: PathBuf,
    /// Marker ids retained in this batch, ascending
    pub batch_markers: Vec<usize>,
}

/// A pipeline output record: either a plain or a batched test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseRecord {
    /// Direct injection result (also the batch splitter's pass-through)
    Test(TestCase),
    /// Reduced-marker derivative of a test case
    Batched(BatchedTestCase),
}

impl CaseRecord {
    /// Path of the record's output file
    #[inline]
    #[must_use]
    pub fn filename(&self) -> &Path {
        match self {
            Self::Test(case) => &case.filename,
            Self::Batched(case) => &case.filename,
        }
    }

    /// Number of edits the record carries
    #[inline]
    #[must_use]
    pub fn num_edits(&self) -> usize {
        match self {
            Self::Test(case) => case.num_edits,
            Self::Batched(case) => case.num_edits,
        }
    }
}
