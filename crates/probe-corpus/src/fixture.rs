//! Fixture file materialization
//!
//! Writes one Markdown fixture per requested size into a base
//! directory. Write failures propagate immediately; there is no
//! partial-success bookkeeping and no cleanup of already-written
//! files.

use crate::content::ContentProducer;
use crate::error::{CorpusError, Result};
use crate::types::SizedFile;
use std::fs;
use std::path::PathBuf;

/// Builds sized fixture files from a content producer
#[derive(Debug)]
pub struct FixtureBuilder<P> {
    producer: P,
    base_dir: PathBuf,
}

impl<P: ContentProducer> FixtureBuilder<P> {
    /// Create a builder writing into `base_dir`
    #[inline]
    pub fn new(producer: P, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            producer,
            base_dir: base_dir.into(),
        }
    }

    /// Write one fixture per requested size, duplicates and order preserved
    ///
    /// Creates the base directory if absent. Sizes of 0 KB are skipped
    /// with a warning rather than producing an empty file.
    ///
    /// # Errors
    /// Any directory-create or file-write failure aborts the build.
    pub fn build(&mut self, sizes_kb: &[u32]) -> Result<Vec<SizedFile>> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|source| CorpusError::io("create dir", &self.base_dir, source))?;

        let mut files = Vec::with_capacity(sizes_kb.len());
        for &size_kb in sizes_kb {
            if size_kb == 0 {
                tracing::warn!("skipping requested 0 KB fixture");
                continue;
            }
            let path = self.base_dir.join(format!("test_file_{size_kb}kb.md"));
            let content = self.producer.produce(size_kb);
            fs::write(&path, &content)
                .map_err(|source| CorpusError::io("write", &path, source))?;
            tracing::info!(path = %path.display(), size_kb, "created test file");
            files.push(SizedFile { path, size_kb });
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownGenerator;

    /// Fixed-content producer for deterministic filesystem tests
    struct StaticProducer(&'static str);

    impl ContentProducer for StaticProducer {
        fn produce(&mut self, _size_kb: u32) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn writes_one_file_per_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = FixtureBuilder::new(MarkdownGenerator::new(42), dir.path());

        let files = builder.build(&[1, 2]).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, dir.path().join("test_file_1kb.md"));
        assert_eq!(files[1].path, dir.path().join("test_file_2kb.md"));
        assert_eq!(fs::read_to_string(&files[0].path).unwrap().len(), 1024);
        assert_eq!(fs::read_to_string(&files[1].path).unwrap().len(), 2048);
    }

    #[test]
    fn duplicates_and_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = FixtureBuilder::new(StaticProducer("content"), dir.path());

        let files = builder.build(&[5, 3, 5]).unwrap();

        let sizes: Vec<u32> = files.iter().map(|file| file.size_kb).collect();
        assert_eq!(sizes, [5, 3, 5]);
    }

    #[test]
    fn zero_size_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = FixtureBuilder::new(StaticProducer("content"), dir.path());

        let files = builder.build(&[0, 1]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size_kb, 1);
        assert!(!dir.path().join("test_file_0kb.md").exists());
    }

    #[test]
    fn creates_missing_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep/nested");
        let mut builder = FixtureBuilder::new(StaticProducer("content"), &nested);

        let files = builder.build(&[1]).unwrap();

        assert!(files[0].path.starts_with(&nested));
        assert!(files[0].path.exists());
    }
}
