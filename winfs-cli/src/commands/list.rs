//! List command implementation.
//!
//! This module implements the `list` command, which displays the entries of
//! a directory in name or date order, in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{filesystem, format_timestamp, load_configuration, to_fs_path, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use winfs::config::ListOrder;
use winfs::{DirectoryEntry, DirectoryLister};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 4] = ["name", "size", "modified", "kind"];

/// List directory entries.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list
    pub dir: PathBuf,

    /// Regular expression matched against entry names
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Sort order (defaults to the configured order)
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Sort order for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by name
    Name,
    /// Most recently modified first
    Date,
}

impl From<SortOrder> for ListOrder {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Name => ListOrder::Name,
            SortOrder::Date => ListOrder::Date,
        }
    }
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let pattern = self
            .pattern
            .as_deref()
            .unwrap_or_else(|| config.list_pattern());
        let order = self.order.map_or_else(|| config.list_order(), ListOrder::from);

        let lister = DirectoryLister::new(filesystem());
        let dir = to_fs_path(&self.dir);
        let entries = match order {
            ListOrder::Name => lister.by_name(&dir, pattern)?,
            ListOrder::Date => lister.by_date(&dir, pattern)?,
        };

        match self.format {
            OutputFormat::Table => format_as_table(&entries)?,
            OutputFormat::Json => format_as_json(&entries)?,
            OutputFormat::Csv => format_as_csv(&entries)?,
        }

        Ok(())
    }
}

fn kind(entry: &DirectoryEntry) -> &'static str {
    if entry.is_dir {
        "dir"
    } else {
        "file"
    }
}

/// Format entries as a human-readable table.
fn format_as_table(entries: &[DirectoryEntry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for entry in entries {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            entry.name,
            entry.size,
            format_timestamp(entry.modified),
            kind(entry),
        )?;
    }

    Ok(())
}

/// Format entries as JSON.
fn format_as_json(entries: &[DirectoryEntry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "size": e.size,
                "modified": format_timestamp(e.modified),
                "kind": kind(e),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format entries as CSV.
fn format_as_csv(entries: &[DirectoryEntry]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for entry in entries {
        writer
            .write_record([
                entry.name.clone(),
                entry.size.to_string(),
                format_timestamp(entry.modified),
                kind(entry).to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
