//! Random Markdown content generation
//!
//! Produces documents that look like real Markdown (headings,
//! paragraphs, fenced code blocks, tables) at an exact byte size.
//! Randomness is threaded through an explicit seedable RNG so a fixed
//! seed reproduces a corpus byte-for-byte.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of fixture content at a requested size
///
/// The pipeline only needs "a string of approximately `size_kb` KB
/// containing recognizable Markdown constructs"; the trait seam lets
/// tests substitute fixed content.
pub trait ContentProducer {
    /// Produce content of `size_kb * 1024` bytes
    fn produce(&mut self, size_kb: u32) -> String;
}

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default [`ContentProducer`]: randomized Markdown sections
///
/// Section shape is heading, paragraphs, fenced code block, table,
/// repeated until the target size is covered, then truncated to the
/// exact byte count. Output is pure ASCII, so byte truncation never
/// splits a character. Section piece sizes are bounded so that even a
/// 1 KB document retains a heading, a code fence, and a table row
/// within its first kilobyte.
#[derive(Debug)]
pub struct MarkdownGenerator {
    rng: StdRng,
}

impl MarkdownGenerator {
    /// Deterministic generator from a seed
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    #[inline]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    fn word(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())] as char)
            .collect()
    }

    fn heading(&mut self) -> String {
        let level = self.rng.random_range(1..=3);
        let len = self.rng.random_range(5..=12);
        let title = self.word(LETTERS, len);
        format!("{} {title}", "#".repeat(level))
    }

    fn paragraph(&mut self) -> String {
        let num_words = self.rng.random_range(10..=30);
        let words: Vec<String> = (0..num_words)
            .map(|_| {
                let len = self.rng.random_range(3..=8);
                self.word(LOWERCASE, len)
            })
            .collect();
        words.join(" ")
    }

    fn code_block(&mut self) -> String {
        let mut block = String::from("```python\n");
        for _ in 0..self.rng.random_range(3..=5) {
            let name = self.word(LOWERCASE, 5);
            let value = self.word(LOWERCASE, 8);
            block.push_str(&format!("def function_{name}():\n    return {value}\n"));
        }
        block.push_str("```\n");
        block
    }

    fn table(&mut self) -> String {
        let headers: Vec<String> = (1..=5).map(|i| format!("Header{i}")).collect();
        let mut table = format!("| {} |\n", headers.join(" | "));
        table.push_str("| --- | --- | --- | --- | --- |\n");
        for _ in 0..self.rng.random_range(3..=6) {
            let cells: Vec<String> = (0..5)
                .map(|_| {
                    let len = self.rng.random_range(5..=9);
                    self.word(LOWERCASE, len)
                })
                .collect();
            table.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        table
    }

    fn section(&mut self) -> String {
        let num_paragraphs = self.rng.random_range(1..=2);
        let paragraphs: Vec<String> = (0..num_paragraphs).map(|_| self.paragraph()).collect();
        format!(
            "{}\n\n{}\n\n{}\n{}\n\n",
            self.heading(),
            paragraphs.join("\n\n"),
            self.code_block(),
            self.table(),
        )
    }
}

impl ContentProducer for MarkdownGenerator {
    fn produce(&mut self, size_kb: u32) -> String {
        let target = size_kb as usize * 1024;
        let mut content = String::with_capacity(target + 1024);
        while content.len() < target {
            content.push_str(&self.section());
        }
        content.truncate(target);
        content
    }
}
