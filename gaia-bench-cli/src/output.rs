//! Output formatting for CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use gaia_bench_metrics::{AccuracyRow, UnsolvableRow};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Output writer that handles different formats
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a titled table of rows; JSON mode prints nothing here
    pub fn write_table<T: TableDisplay>(&self, title: &str, items: &[T], empty_message: &str) {
        if self.format != OutputFormat::Table {
            return;
        }

        print_section(title);

        if items.is_empty() {
            println!("{}", empty_message.dimmed());
            return;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);

        let header_cells: Vec<Cell> = T::headers()
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect();
        table.set_header(header_cells);

        for item in items {
            table.add_row(item.to_row());
        }

        println!("{table}");
    }

    /// Write a value as pretty JSON; table mode prints nothing here
    pub fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(())
    }

    /// Write a success message
    pub fn success(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", "✓".green(), message);
        } else {
            eprintln!("{}", message);
        }
    }

    /// Write an error message
    pub fn error(&self, message: &str) {
        if self.format == OutputFormat::Table {
            eprintln!("{} {}", "✗".red(), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Write an info message
    pub fn info(&self, message: &str) {
        if self.format == OutputFormat::Table {
            println!("{} {}", "ℹ".blue(), message);
        } else {
            eprintln!("{}", message);
        }
    }

    /// Create a progress bar
    pub fn progress_bar(&self, total: u64, message: &str) -> Option<ProgressBar> {
        if self.format != OutputFormat::Table {
            return None;
        }

        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_message(message.to_string());
        Some(pb)
    }
}

/// Trait for displaying items in a table
pub trait TableDisplay {
    /// Column headers
    fn headers() -> &'static [&'static str];

    /// Convert item to a table row
    fn to_row(&self) -> Vec<Cell>;
}

impl TableDisplay for AccuracyRow {
    fn headers() -> &'static [&'static str] {
        &["Model", "Judged Accuracy", "Judged Solvable"]
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.model.as_str()),
            Cell::new(&self.judged_accuracy),
            Cell::new(&self.judged_solvable),
        ]
    }
}

impl TableDisplay for UnsolvableRow {
    fn headers() -> &'static [&'static str] {
        &["Unsolvable Reason", "Count"]
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![Cell::new(&self.reason), Cell::new(self.count)]
    }
}

/// Print a key-value pair in detail format
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Format a timestamp for display
pub fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
