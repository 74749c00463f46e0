//! Pattern injection
//!
//! Splices each pattern's original snippets into each fixture at
//! evenly spaced offsets and writes one output file per (fixture x
//! pattern) pair, plus a Markdown manifest of every test case.
//!
//! Offsets follow the sequential-drift rule: insertion `i` lands at
//! `(i+1) * chunk` measured against the document as already grown by
//! insertions `0..i`. Rather than repeatedly rebuilding the string,
//! the offsets are translated up front into pristine-document
//! coordinates and the output is assembled in one append-only pass;
//! the result is byte-identical to the naive sequential splice.

use crate::error::{CorpusError, Result};
use crate::marker::BLOCK_SEPARATOR;
use crate::types::{EditPattern, SizedFile, TestCase};
use std::fs;
use std::path::PathBuf;

/// Header row of the test-case manifest (fixed format)
const MANIFEST_HEADER: &str = "| Filename | File Size (KB) | Number of Edits | Pattern Name |";
const MANIFEST_DIVIDER: &str = "|----------|---------------|----------------|-------------|";

/// Pristine-coordinate insertion offsets for the sequential-drift rule
///
/// `chunk = content_len / (n + 1)`; insertion `i` targets grown
/// position `(i+1) * chunk`, which maps back to pristine offset
/// `(i+1) * chunk - (bytes inserted so far)`. Offsets are clamped
/// monotone non-decreasing and floored to char boundaries so the
/// builder pass can slice the pristine content directly.
fn insertion_offsets(content: &str, block_lens: &[usize]) -> Vec<usize> {
    let num_blocks = block_lens.len();
    if num_blocks == 0 {
        return Vec::new();
    }
    let chunk = content.len() / (num_blocks + 1);

    let mut offsets = Vec::with_capacity(num_blocks);
    let mut inserted = 0;
    let mut previous = 0;
    for (index, &len) in block_lens.iter().enumerate() {
        let target = (index + 1) * chunk;
        let mut offset = target.saturating_sub(inserted).clamp(previous, content.len());
        while !content.is_char_boundary(offset) {
            offset -= 1;
        }
        offsets.push(offset);
        previous = offset;
        inserted += len;
    }
    offsets
}

/// Splice `blocks` into `content` per the drift-rule offset plan
fn splice_blocks(content: &str, blocks: &[String]) -> String {
    let block_lens: Vec<usize> = blocks.iter().map(String::len).collect();
    let offsets = insertion_offsets(content, &block_lens);

    let total: usize = block_lens.iter().sum();
    let mut out = String::with_capacity(content.len() + total);
    let mut cursor = 0;
    for (&offset, block) in offsets.iter().zip(blocks) {
        out.push_str(&content[cursor..offset]);
        out.push_str(block);
        cursor = offset;
    }
    out.push_str(&content[cursor..]);
    out
}

/// Injects edit patterns into fixture files
#[derive(Debug)]
pub struct Injector {
    output_dir: PathBuf,
}

impl Injector {
    /// Create an injector writing into `output_dir`
    #[inline]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Inject every pattern into every file (files outer, patterns inner)
    ///
    /// The nesting order fixes manifest row order and must not change.
    /// Each fixture is read once; a pattern with zero replacements
    /// writes the fixture content untouched. After all pairs are
    /// processed a `test_cases.md` manifest is written alongside the
    /// output files.
    ///
    /// # Errors
    /// Any read or write failure aborts the whole operation.
    pub fn inject(&self, files: &[SizedFile], patterns: &[EditPattern]) -> Result<Vec<TestCase>> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|source| CorpusError::io("create dir", &self.output_dir, source))?;

        let mut cases = Vec::with_capacity(files.len() * patterns.len());
        for file in files {
            let content = fs::read_to_string(&file.path)
                .map_err(|source| CorpusError::io("read", &file.path, source))?;

            for pattern in patterns {
                let stem = file
                    .path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let out_path = self.output_dir.join(format!("{stem}_{}.md", pattern.name));

                let blocks: Vec<String> = pattern
                    .replacements
                    .iter()
                    .map(|replacement| {
                        format!("{BLOCK_SEPARATOR}{}{BLOCK_SEPARATOR}", replacement.original)
                    })
                    .collect();
                let modified = splice_blocks(&content, &blocks);

                fs::write(&out_path, &modified)
                    .map_err(|source| CorpusError::io("write", &out_path, source))?;
                tracing::info!(path = %out_path.display(), "created test case");

                cases.push(TestCase {
                    filename: out_path,
                    file_size_kb: file.size_kb,
                    num_edits: pattern.num_edits(),
                    pattern_name: pattern.name.clone(),
                });
            }
        }

        self.write_manifest(&cases)?;
        Ok(cases)
    }

    /// Write the `test_cases.md` manifest, one row per case in order
    fn write_manifest(&self, cases: &[TestCase]) -> Result<()> {
        let mut manifest = String::from("# Test Cases for Assistant Response Testing\n\n");
        manifest.push_str(MANIFEST_HEADER);
        manifest.push('\n');
        manifest.push_str(MANIFEST_DIVIDER);
        manifest.push('\n');
        for case in cases {
            manifest.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                case.basename(),
                case.file_size_kb,
                case.num_edits,
                case.pattern_name,
            ));
        }

        let path = self.output_dir.join("test_cases.md");
        fs::write(&path, manifest).map_err(|source| CorpusError::io("write", &path, source))
    }
}
