//! The `demo` command: every operation against the configured sample data,
//! followed by the empty-input and invalid-size edge cases.

use anyhow::Result;
use serde_json::json;

use super::operations::{
    average_record, chunk_record, dedup_record, interleave_record, max_record, median_record,
    min_record, most_frequent_record,
};
use super::output::{OperationRecord, OutputContext};
use crate::array::{average, chunk, find_max};
use crate::cli::OutputFormat;
use crate::config::DemoConfig;
use crate::formatting::emoji_or_fallback;

const RULE_WIDTH: usize = 60;

/// Records for the numeric section, in display order.
pub fn number_records(demo: &DemoConfig) -> Result<Vec<OperationRecord>> {
    let numbers = &demo.numbers;
    let as_floats: Vec<f64> = numbers.iter().map(|&n| n as f64).collect();
    let (odds, evens): (Vec<i64>, Vec<i64>) = numbers.iter().partition(|&&n| n % 2 != 0);

    Ok(vec![
        max_record(numbers),
        min_record(numbers),
        average_record(&as_floats),
        median_record(&as_floats),
        dedup_record(numbers),
        most_frequent_record(numbers),
        chunk_record(numbers, demo.chunk_size)?,
        interleave_record(&odds, &evens),
    ])
}

/// Records for the text section.
pub fn word_records(demo: &DemoConfig) -> Vec<OperationRecord> {
    let words = &demo.words;
    vec![
        max_record(words),
        min_record(words),
        dedup_record(words),
        most_frequent_record(words),
    ]
}

/// Outcome of one edge case check.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCase {
    pub passed: bool,
    pub message: String,
    pub record: OperationRecord,
}

/// The empty-input conventions and the rejected zero chunk size.
pub fn edge_cases() -> Vec<EdgeCase> {
    let empty: [i64; 0] = [];
    let sample = [1_i64, 2, 3];

    let empty_max = EdgeCase {
        passed: find_max(&empty).is_none(),
        message: "Empty array handled correctly (returns none)".to_string(),
        record: max_record(&empty),
    };

    let empty_average = EdgeCase {
        passed: average(&[]) == 0.0,
        message: "Empty average defaults to 0".to_string(),
        record: average_record(&[]),
    };

    let invalid_chunk = match chunk(&sample, 0) {
        Err(err) => EdgeCase {
            passed: true,
            message: format!("Invalid chunk size rejected: {}", err),
            record: OperationRecord::failed("chunk", json!(sample), &err).with_chunk_size(0),
        },
        Ok(chunks) => EdgeCase {
            passed: false,
            message: "Invalid chunk size was accepted".to_string(),
            record: OperationRecord::new(
                "chunk",
                "Chunked (size 0)",
                json!(sample),
                json!(chunks),
                None,
            )
            .with_chunk_size(0),
        },
    };

    vec![empty_max, empty_average, invalid_chunk]
}

pub fn run_demo(demo: &DemoConfig, ctx: &OutputContext) -> Result<()> {
    log::info!(
        "Running demo on {} numbers and {} words",
        demo.numbers.len(),
        demo.words.len()
    );

    let numbers = number_records(demo)?;
    let words = word_records(demo);
    let checks = edge_cases();

    for check in checks.iter().filter(|c| !c.passed) {
        log::warn!("Edge case failed: {}", check.message);
    }

    match ctx.format {
        OutputFormat::Json => {
            let all: Vec<&OperationRecord> = numbers
                .iter()
                .chain(&words)
                .chain(checks.iter().map(|c| &c.record))
                .collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        OutputFormat::Terminal => print_terminal(demo, &numbers, &words, &checks, ctx),
    }

    Ok(())
}

fn print_terminal(
    demo: &DemoConfig,
    numbers: &[OperationRecord],
    words: &[OperationRecord],
    checks: &[EdgeCase],
    ctx: &OutputContext,
) {
    let fmt = ctx.formatter();

    print_separator(&fmt.header("Array Utilities Demonstration"));

    println!("\n{}", fmt.warning(&format!("Original array: {:?}", demo.numbers)));
    for record in numbers {
        println!("{}", ctx.render_line(record));
    }

    println!("\n{}", fmt.header("String Array Test:"));
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("{}", fmt.warning(&format!("Original: {:?}", demo.words)));
    for record in words {
        println!("{}", ctx.render_line(record));
    }

    println!("\n{}", fmt.header("Error Handling Test:"));
    println!("{}", "-".repeat(RULE_WIDTH));
    for check in checks {
        let line = if check.passed {
            let (symbol, fallback) = emoji_or_fallback("✓");
            fmt.success(&format!("{} {}", fmt.emoji(symbol, fallback), check.message))
        } else {
            let (symbol, fallback) = emoji_or_fallback("✗");
            fmt.error(&format!("{} {}", fmt.emoji(symbol, fallback), check.message))
        };
        println!("{}", line);
    }

    println!();
    print_separator(&fmt.success("Demo executed successfully!"));
}

fn print_separator(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    if !title.is_empty() {
        println!("{}", title);
        println!("{}", "=".repeat(RULE_WIDTH));
    }
}
