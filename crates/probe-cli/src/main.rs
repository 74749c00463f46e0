//! Edit-probe CLI
//!
//! Generates a labeled corpus of Markdown test fixtures for probing
//! AI coding assistant edit-response limits, then prints a short
//! usage guide for running the manual evaluation.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use probe_corpus::{run_pipeline, CaseRecord, PipelineConfig};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("edit-probe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assistant edit-response limit tester: generates sized Markdown fixtures with marker-delimited edit patterns")
        .arg(
            Arg::new("sizes")
                .long("sizes")
                .num_args(1..)
                .value_parser(value_parser!(u32))
                .default_values(["10", "50", "100", "200", "500", "1000"])
                .help("File sizes in KB to generate"),
        )
        .arg(
            Arg::new("edits")
                .long("edits")
                .num_args(1..)
                .value_parser(value_parser!(usize))
                .default_values(["1", "2", "5", "10", "20"])
                .help("Edit counts to generate patterns for"),
        )
        .arg(
            Arg::new("batch")
                .long("batch")
                .action(ArgAction::SetTrue)
                .help("Create batched versions of test files with many edits"),
        )
        .arg(
            Arg::new("batch-size")
                .long("batch-size")
                .default_value("3")
                .value_parser(value_parser!(usize))
                .help("Maximum number of edits per batch"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .default_value("42")
                .value_parser(value_parser!(u64))
                .help("Random seed for reproducible content"),
        )
        .arg(
            Arg::new("fixture-dir")
                .long("fixture-dir")
                .default_value("response_test_files")
                .value_parser(value_parser!(PathBuf))
                .help("Directory for pristine fixture files"),
        )
        .arg(
            Arg::new("inject-dir")
                .long("inject-dir")
                .default_value("response_test_files_with_patterns")
                .value_parser(value_parser!(PathBuf))
                .help("Directory for injected test cases and the manifest"),
        )
        .arg(
            Arg::new("batch-dir")
                .long("batch-dir")
                .default_value("batched_test_files")
                .value_parser(value_parser!(PathBuf))
                .help("Directory for batched test files"),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let matches = cli().get_matches();

    let batch_enabled = matches.get_flag("batch");
    let batch_size = *matches.get_one::<usize>("batch-size").unwrap();
    let config = PipelineConfig {
        sizes_kb: matches.get_many::<u32>("sizes").unwrap().copied().collect(),
        edit_counts: matches.get_many::<usize>("edits").unwrap().copied().collect(),
        batch: batch_enabled.then_some(batch_size),
        seed: *matches.get_one::<u64>("seed").unwrap(),
        fixture_dir: matches.get_one::<PathBuf>("fixture-dir").unwrap().clone(),
        inject_dir: matches.get_one::<PathBuf>("inject-dir").unwrap().clone(),
        batch_dir: matches.get_one::<PathBuf>("batch-dir").unwrap().clone(),
    };

    let records = run_pipeline(&config).context("corpus generation failed")?;

    let num_cases = records
        .iter()
        .filter(|record| matches!(record, CaseRecord::Test(_)))
        .count();
    let num_batched = records.len() - num_cases;

    println!();
    println!("Created {num_cases} test cases to help identify assistant response limits.");
    if num_batched > 0 {
        println!("Created {num_batched} batched test files for the larger edit counts.");
        println!("These files contain the same content but with fewer markers per file.");
    }
    println!("To use these tests:");
    println!("1. Open a test file from {} in your editor", config.inject_dir.display());
    println!("2. Ask the assistant to make all the replacements marked by UNIQUE_MARKER comments");
    println!("3. Observe whether the response completes or hits timeout/size limits");
    println!("4. Record which size x edit-count combinations cause issues");
    if batch_enabled {
        println!();
        println!(
            "Batched versions with at most {batch_size} edits per file are in {}",
            config.batch_dir.display()
        );
        println!("Try these to see if splitting edits into smaller batches helps avoid timeouts");
    }

    Ok(())
}
