//! One handler per single-operation subcommand, plus the record builders
//! they share with the demo.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use super::output::{OperationRecord, OutputContext};
use crate::array::{
    average, chunk, chunk_size_from, find_max, find_min, interleave, median, most_frequent,
    remove_duplicates,
};
use crate::cli::Sample;
use crate::errors::Error;
use crate::with_sample;

// Sequences print with Debug so text elements stay quoted inside brackets.
fn show_seq<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

fn show_scalar<T: Display>(value: &T) -> String {
    value.to_string()
}

/// Fails when any input is NaN or infinite.
pub fn ensure_finite(numbers: &[f64]) -> Result<()> {
    if let Some(bad) = numbers.iter().find(|n| !n.is_finite()) {
        anyhow::bail!("average needs finite numbers, got {}", bad);
    }
    Ok(())
}

pub fn max_record<T: Ord + Serialize + Display>(items: &[T]) -> OperationRecord {
    let max = find_max(items);
    OperationRecord::new(
        "findMax",
        "Maximum value",
        json!(items),
        json!(max),
        max.map(show_scalar),
    )
}

pub fn min_record<T: Ord + Serialize + Display>(items: &[T]) -> OperationRecord {
    let min = find_min(items);
    OperationRecord::new(
        "findMin",
        "Minimum value",
        json!(items),
        json!(min),
        min.map(show_scalar),
    )
}

pub fn average_record(numbers: &[f64]) -> OperationRecord {
    let avg = average(numbers);
    OperationRecord::new(
        "average",
        "Average",
        json!(numbers),
        json!(avg),
        Some(format!("{:.2}", avg)),
    )
}

pub fn median_record(numbers: &[f64]) -> OperationRecord {
    let mid = median(numbers);
    OperationRecord::new(
        "median",
        "Median",
        json!(numbers),
        json!(mid),
        mid.map(|m| format!("{:.2}", m)),
    )
}

pub fn dedup_record<T>(items: &[T]) -> OperationRecord
where
    T: Eq + Hash + Clone + Serialize + Debug,
{
    let unique = remove_duplicates(items);
    let display = show_seq(&unique);
    OperationRecord::new(
        "removeDuplicates",
        "Without duplicates",
        json!(items),
        json!(unique),
        Some(display),
    )
}

pub fn most_frequent_record<T>(items: &[T]) -> OperationRecord
where
    T: Eq + Hash + Serialize + Display,
{
    let top = most_frequent(items);
    OperationRecord::new(
        "mostFrequent",
        "Most frequent",
        json!(items),
        json!(top),
        top.map(show_scalar),
    )
}

pub fn chunk_record<T>(items: &[T], size: usize) -> std::result::Result<OperationRecord, Error>
where
    T: Clone + Serialize + Debug,
{
    let chunks = chunk(items, size)?;
    let display = show_seq(&chunks);
    Ok(OperationRecord::new(
        "chunk",
        format!("Chunked (size {})", size),
        json!(items),
        json!(chunks),
        Some(display),
    )
    .with_chunk_size(size))
}

pub fn interleave_record<T>(left: &[T], right: &[T]) -> OperationRecord
where
    T: Clone + Serialize + Debug,
{
    let merged = interleave(left, right);
    let display = show_seq(&merged);
    OperationRecord::new(
        "interleave",
        "Interleaved",
        json!({ "left": left, "right": right }),
        json!(merged),
        Some(display),
    )
}

pub fn handle_max(values: &[String], ctx: &OutputContext) -> Result<()> {
    let sample = Sample::parse(values);
    log::debug!("findMax over {} {}", sample.len(), sample.kind());
    ctx.emit(&with_sample!(&sample, items => max_record(items)))
}

pub fn handle_min(values: &[String], ctx: &OutputContext) -> Result<()> {
    let sample = Sample::parse(values);
    log::debug!("findMin over {} {}", sample.len(), sample.kind());
    ctx.emit(&with_sample!(&sample, items => min_record(items)))
}

pub fn handle_average(numbers: &[f64], ctx: &OutputContext) -> Result<()> {
    ensure_finite(numbers)?;
    log::debug!("average over {} numbers", numbers.len());
    ctx.emit_all(&[average_record(numbers), median_record(numbers)])
}

pub fn handle_dedup(values: &[String], ctx: &OutputContext) -> Result<()> {
    let sample = Sample::parse(values);
    log::debug!("removeDuplicates over {} {}", sample.len(), sample.kind());
    ctx.emit(&with_sample!(&sample, items => dedup_record(items)))
}

pub fn handle_most_frequent(values: &[String], ctx: &OutputContext) -> Result<()> {
    let sample = Sample::parse(values);
    log::debug!("mostFrequent over {} {}", sample.len(), sample.kind());
    ctx.emit(&with_sample!(&sample, items => most_frequent_record(items)))
}

/// Fails with `InvalidArgument` when `size` is below 1.
pub fn handle_chunk(size: i64, values: &[String], ctx: &OutputContext) -> Result<()> {
    let size = chunk_size_from(size)?;
    let sample = Sample::parse(values);
    log::debug!("chunk of size {} over {} {}", size, sample.len(), sample.kind());
    let record = with_sample!(&sample, items => chunk_record(items, size))?;
    ctx.emit(&record)
}

pub fn handle_interleave(left: &[String], right: &[String], ctx: &OutputContext) -> Result<()> {
    // Parse both sides together so they share one element type.
    let joined: Vec<String> = left.iter().chain(right).cloned().collect();
    let sample = Sample::parse(&joined);
    log::debug!(
        "interleave {} + {} {}",
        left.len(),
        right.len(),
        sample.kind()
    );
    let record = with_sample!(&sample, all => {
        let (l, r) = all.split_at(left.len());
        interleave_record(l, r)
    });
    ctx.emit(&record)
}
