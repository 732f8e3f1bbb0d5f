//! Bulk employee import from CSV.
//!
//! Expected headers: `name,pin,phone` and optionally `tax_id,role,payment_key`.
//! Rows are validated and inserted one by one; a bad row is reported and
//! skipped without stopping the import.

use crate::db::employees::Employees;
use crate::libs::employee::{Employee, NewEmployee};
use anyhow::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ImportRow {
    name: String,
    pin: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    tax_id: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    payment_key: Option<String>,
}

impl From<ImportRow> for NewEmployee {
    fn from(row: ImportRow) -> Self {
        NewEmployee {
            name: row.name,
            pin: row.pin,
            phone: row.phone,
            tax_id: row.tax_id,
            role: row.role,
            payment_key: row.payment_key,
        }
        .normalized()
    }
}

/// A row that was not imported. `line` is the 1-based line in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<Employee>,
    pub skipped: Vec<ImportIssue>,
}

/// Parses employee rows; unparseable rows become issues.
pub fn parse_employees<R: Read>(reader: R) -> Result<(Vec<(u64, NewEmployee)>, Vec<ImportIssue>)> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).flexible(true).from_reader(reader);

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    for (index, record) in csv_reader.deserialize::<ImportRow>().enumerate() {
        // header is line 1
        let line = index as u64 + 2;
        match record {
            Ok(row) => rows.push((line, NewEmployee::from(row))),
            Err(e) => issues.push(ImportIssue { line, reason: e.to_string() }),
        }
    }
    Ok((rows, issues))
}

pub fn import_employees<R: Read>(employees: &mut Employees, reader: R) -> Result<ImportReport> {
    let (rows, skipped) = parse_employees(reader)?;
    let mut report = ImportReport { skipped, ..Default::default() };

    for (line, employee) in rows {
        match employees.insert(&employee) {
            Ok(created) => report.imported.push(created),
            Err(e) => {
                tracing::warn!(line, error = %e, "employee row skipped");
                report.skipped.push(ImportIssue { line, reason: e.to_string() });
            }
        }
    }
    report.skipped.sort_by_key(|issue| issue.line);
    Ok(report)
}

pub fn import_employees_file(employees: &mut Employees, path: &Path) -> Result<ImportReport> {
    import_employees(employees, File::open(path)?)
}
