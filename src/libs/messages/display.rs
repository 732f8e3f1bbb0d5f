//! User-facing text for every [`Message`].
//!
//! All wording lives here so commands only pick a variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModulePay => "Pay policy".to_string(),
            Message::ConfigModuleKiosk => "Kiosk".to_string(),
            Message::ConfigModuleShift => "Shift reconstruction".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeCreated(name) => format!("Employee '{}' created", name),
            Message::EmployeeUpdated(name) => format!("Employee '{}' updated", name),
            Message::EmployeeDeleted(name, events) => format!("Employee '{}' deleted together with {} punch(es)", name, events),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found", id),
            Message::EmployeesHeader => "Employees:".to_string(),
            Message::NoEmployees => "No employees registered yet.".to_string(),
            Message::ConfirmDeleteEmployee(name) => format!("Delete '{}' and all of their punches?", name),
            Message::ImportCompleted(imported, skipped) => format!("Import finished: {} imported, {} skipped", imported, skipped),
            Message::ImportRowSkipped(line, reason) => format!("Line {} skipped: {}", line, reason),

            // === PUNCH MESSAGES ===
            Message::PinNotRecognized => "PIN not recognized".to_string(),
            Message::AdminPinCannotPunch => "The administrator PIN cannot be used to punch".to_string(),
            Message::PunchRecorded { name, event_type, time } => format!("{}: {} recorded at {}", name, event_type, time),
            Message::PunchOutOfSequence { event_type, previous } => match previous {
                Some(previous) => format!("Unusual punch: {} right after {}. Recorded anyway.", event_type, previous),
                None => format!("Unusual punch: {} without a previous Entry. Recorded anyway.", event_type),
            },

            // === EVENT MESSAGES ===
            Message::EventUpdated(id) => format!("Punch {} updated", id),
            Message::EventDeleted(id) => format!("Punch {} deleted", id),
            Message::EventNotFound(id) => format!("Punch with ID {} not found", id),
            Message::ConfirmDeleteEvent(id) => format!("Delete punch {}?", id),
            Message::NoEventsInPeriod => "No punches found for the selected period.".to_string(),
            Message::InvalidTimestamp(value) => format!("Invalid timestamp '{}', expected YYYY-MM-DD HH:MM[:SS]", value),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value),
            Message::InvalidPeriod(start, end) => format!("Period start {} is after its end {}", start, end),

            // === REPORT MESSAGES ===
            Message::ReportHeader(start, end) => format!("Report from {} to {}", start, end),
            Message::ShiftsHeader => "Shifts:".to_string(),
            Message::SummaryHeader => "Summary:".to_string(),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === BACKUP MESSAGES ===
            Message::BackupCreated(path) => format!("Backup written to {}", path),
            Message::RestoreCompleted { employees, events } => format!("Restored {} employee(s) and {} punch(es)", employees, events),
            Message::ConfirmRestore(path) => format!("Replace ALL current data with the contents of {}?", path),

            // === WATCH MESSAGES ===
            Message::WatchStarted(interval) => format!("Watching punches, refreshing every {} s (Ctrl+C to stop)", interval),
            Message::WatchRefreshed(time) => format!("Refreshed at {}", time),
            Message::NobodyOnShift => "Nobody is on shift.".to_string(),
            Message::OnShiftHeader => "On shift:".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptNormalRate => "Normal hourly rate".to_string(),
            Message::PromptExtraRate => "Overtime hourly rate".to_string(),
            Message::PromptNormalHours => "Normal hours per shift".to_string(),
            Message::PromptAdminPin => "Administrator PIN".to_string(),
            Message::PromptPollInterval => "Refresh interval (seconds)".to_string(),
            Message::PromptEntryPolicy => "Repeated Entry while a shift is open".to_string(),
            Message::PromptPin => "PIN".to_string(),
            Message::PromptEventType => "Punch type".to_string(),
            Message::PromptEmployeeName => "Name".to_string(),
            Message::PromptEmployeePin => "PIN (4 digits)".to_string(),
            Message::PromptEmployeePhone => "Phone".to_string(),
            Message::PromptEmployeeTaxId => "Tax ID (optional)".to_string(),
            Message::PromptEmployeeRole => "Job title (optional)".to_string(),
            Message::PromptEmployeePaymentKey => "Payment key (optional)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
