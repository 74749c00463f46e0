//! Probe Corpus - edit-response fixture generation
//!
//! Generates synthetic Markdown documents of controlled size, injects
//! a controlled number of uniquely-delimited edit markers into them,
//! and produces a labeled corpus of test fixtures for probing how an
//! AI coding assistant behaves across (document size x edit count)
//! combinations. Large edit sets can optionally be split into smaller
//! batches of markers over the same base document.
//!
//! # Example
//!
//! ```rust,ignore
//! use probe_corpus::{run_pipeline, PipelineConfig};
//!
//! let config = PipelineConfig {
//!     sizes_kb: vec![10, 100],
//!     edit_counts: vec![1, 5, 20],
//!     batch: Some(3),
//!     ..PipelineConfig::default()
//! };
//! let records = run_pipeline(&config)?;
//! println!("created {} test cases", records.len());
//! # Ok::<(), probe_corpus::CorpusError>(())
//! ```

// Core modules
pub mod batch;
pub mod content;
pub mod error;
pub mod fixture;
pub mod inject;
pub mod marker;
pub mod pattern;
pub mod pipeline;
pub mod types;

// Re-exports for convenience
pub use batch::BatchSplitter;
pub use content::{ContentProducer, MarkdownGenerator};
pub use error::{CorpusError, Result};
pub use fixture::FixtureBuilder;
pub use inject::Injector;
pub use pattern::build_edit_patterns;
pub use pipeline::{run_pipeline, PipelineConfig, DEFAULT_BATCH_SIZE, DEFAULT_EDIT_COUNTS, DEFAULT_SIZES_KB};
pub use types::{BatchedTestCase, CaseRecord, EditPattern, Replacement, SizedFile, TestCase};
