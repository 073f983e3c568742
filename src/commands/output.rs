//! Rendering of operation results for the terminal and as JSON.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::errors::Error;
use crate::formatting::{create_formatter, FormattingConfig, OutputFormatter};

/// Outcome of one operation, ready to print either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    pub operation: &'static str,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorRecord>,
    /// Terminal label, e.g. "Maximum value"
    #[serde(skip)]
    pub label: String,
    /// Terminal rendering of `result`; `None` means absent
    #[serde(skip)]
    pub display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub category: &'static str,
    pub message: String,
}

impl From<&Error> for ErrorRecord {
    fn from(err: &Error) -> Self {
        Self {
            category: err.category(),
            message: err.to_string(),
        }
    }
}

impl OperationRecord {
    pub fn new(
        operation: &'static str,
        label: impl Into<String>,
        input: Value,
        result: Value,
        display: Option<String>,
    ) -> Self {
        Self {
            operation,
            input,
            chunk_size: None,
            result,
            error: None,
            label: label.into(),
            display,
        }
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn failed(operation: &'static str, input: Value, err: &Error) -> Self {
        Self {
            operation,
            input,
            chunk_size: None,
            result: Value::Null,
            error: Some(ErrorRecord::from(err)),
            label: operation.to_string(),
            display: None,
        }
    }
}

/// Where and how results are written.
pub struct OutputContext {
    pub format: OutputFormat,
    formatter: Box<dyn OutputFormatter>,
}

impl OutputContext {
    pub fn new(format: OutputFormat, formatting: FormattingConfig) -> Self {
        Self {
            format,
            formatter: create_formatter(formatting),
        }
    }

    pub fn formatter(&self) -> &dyn OutputFormatter {
        self.formatter.as_ref()
    }

    /// `label: value` line for the terminal; absent values print as `(none)`.
    pub fn render_line(&self, record: &OperationRecord) -> String {
        let value = match &record.display {
            Some(text) => self.formatter.info(text),
            None => self.formatter.dim("(none)"),
        };
        format!("{}: {}", self.formatter.info(&record.label), value)
    }

    /// Print a single operation result in the selected format.
    pub fn emit(&self, record: &OperationRecord) -> Result<()> {
        match self.format {
            OutputFormat::Terminal => println!("{}", self.render_line(record)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        }
        Ok(())
    }

    /// Print several results: one line each, or a single JSON array.
    pub fn emit_all(&self, records: &[OperationRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Terminal => {
                for record in records {
                    println!("{}", self.render_line(record));
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        }
        Ok(())
    }
}
