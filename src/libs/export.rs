//! Payroll report export.
//!
//! Writes the per-day rows of a period either as CSV for spreadsheets or as
//! JSON for other programs.
//!
//! ## CSV layout
//!
//! - UTF-8 with a byte-order mark so spreadsheet applications pick the right
//!   encoding;
//! - comma separated, fields quoted only when they contain a comma, a quote
//!   or a line break, with inner quotes doubled;
//! - one row per employee and day, a `Subtotal` row after each employee and a
//!   `TOTAL` row at the end.
//!
//! Default file names embed the period, e.g. `ponto_report_2024-03-01_2024-03-31.csv`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::libs::export::{ExportFormat, Exporter};
//! use ponto::libs::period::Period;
//! use chrono::NaiveDate;
//!
//! let period = Period::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
//! let exporter = Exporter::new(ExportFormat::Csv, None, period);
//! exporter.export(&[], &Default::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::{format_currency, format_ms, format_time_on};
use crate::libs::period::{DailyRow, DailyRowKind, Period, PeriodSummary};
use crate::libs::work::WorkStatus;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const BOM: &str = "\u{FEFF}";

pub const CSV_HEADERS: [&str; 11] = [
    "Employee",
    "Date",
    "Entry",
    "Break start",
    "Break end",
    "Exit",
    "Normal hours",
    "Extra hours",
    "Total hours",
    "Payment",
    "Status",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    period: &'a Period,
    summary: &'a PeriodSummary,
    rows: &'a [DailyRow],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
    period: Period,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, period: Period) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_file_name(&period, format)));
        Self { format, output_path, period }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, rows: &[DailyRow], summary: &PeriodSummary) -> Result<()> {
        let content = match self.format {
            ExportFormat::Csv => csv_string(rows)?,
            ExportFormat::Json => serde_json::to_string_pretty(&JsonReport {
                period: &self.period,
                summary,
                rows,
            })?,
        };
        File::create(&self.output_path)?.write_all(content.as_bytes())?;
        tracing::debug!(path = %self.output_path.display(), rows = rows.len(), "report exported");
        Ok(())
    }
}

pub fn default_file_name(period: &Period, format: ExportFormat) -> String {
    format!(
        "ponto_report_{}_{}.{}",
        period.start.format("%Y-%m-%d"),
        period.end.format("%Y-%m-%d"),
        format.extension()
    )
}

/// The CSV document for `rows`, BOM included.
pub fn csv_string(rows: &[DailyRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record(csv_record(row))?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let mut content = String::from(BOM);
    content.push_str(&String::from_utf8(bytes)?);
    Ok(content)
}

fn csv_record(row: &DailyRow) -> Vec<String> {
    let (employee, date) = match row.kind {
        DailyRowKind::Day => (row.employee_name.clone(), row.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()),
        DailyRowKind::Subtotal => (row.employee_name.clone(), "Subtotal".to_string()),
        DailyRowKind::GrandTotal => ("TOTAL".to_string(), String::new()),
    };
    let time = |t: &Option<chrono::NaiveDateTime>| match (t, row.date) {
        (Some(t), Some(day)) => format_time_on(t, day),
        _ => String::new(),
    };

    // a day without any complete shift shows only its status
    let amount = |value: String| match row.status {
        Some(status) if status != WorkStatus::Complete => String::new(),
        _ => value,
    };

    vec![
        employee,
        date,
        time(&row.entry),
        time(&row.break_start),
        time(&row.break_end),
        time(&row.exit),
        amount(format_ms(row.normal_ms)),
        amount(format_ms(row.extra_ms)),
        amount(format_ms(row.total_ms)),
        amount(format_currency(row.payment)),
        row.status.map(|s| s.to_string()).unwrap_or_default(),
    ]
}
