pub mod backup;
pub mod employee;
pub mod events;
pub mod export;
pub mod init;
pub mod migrations;
pub mod punch;
pub mod report;
pub mod watch;

use crate::libs::messages::Message;
use crate::libs::period::{EmployeeFilter, Period};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure pay policy, kiosk and shift rules")]
    Init,
    #[command(about = "Record a punch with an employee PIN")]
    Punch(punch::PunchArgs),
    #[command(about = "Manage employees", arg_required_else_help = true)]
    Employee(employee::EmployeeArgs),
    #[command(about = "Review and edit punches", arg_required_else_help = true)]
    Events(events::EventsArgs),
    #[command(about = "Show shifts, hours and payment for a period")]
    Report(report::ReportArgs),
    #[command(about = "Export the payroll report for a period")]
    Export(export::ExportArgs),
    #[command(about = "Write a backup of all employees and punches")]
    Backup(backup::BackupArgs),
    #[command(about = "Replace all data with a backup")]
    Restore(backup::RestoreArgs),
    #[command(about = "Refresh periodically and show who is on shift")]
    Watch,
    #[command(about = "Database migration status", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Punch(args) => punch::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Events(args) => events::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Backup(args) => backup::backup_cmd(args),
            Commands::Restore(args) => backup::restore_cmd(args),
            Commands::Watch => watch::cmd().await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Date range and employee selection shared by `report`, `export` and `events list`.
#[derive(Debug, Args)]
pub struct PeriodArgs {
    #[arg(long, help = "First day (YYYY-MM-DD or 'today'), defaults to the first day of this month")]
    from: Option<String>,

    #[arg(long, help = "Last day (YYYY-MM-DD or 'today'), defaults to today")]
    to: Option<String>,

    #[arg(short, long, help = "Only this employee ID")]
    employee: Option<i64>,
}

impl PeriodArgs {
    pub fn period(&self) -> Result<Period> {
        let today = Local::now().date_naive();
        let start = match &self.from {
            Some(value) => parse_date(value)?,
            None => today.with_day(1).unwrap_or(today),
        };
        let end = match &self.to {
            Some(value) => parse_date(value)?,
            None => today,
        };
        if start > end {
            return Err(msg_error_anyhow!(Message::InvalidPeriod(start.to_string(), end.to_string())));
        }
        Ok(Period::new(start, end))
    }

    pub fn filter(&self) -> EmployeeFilter {
        EmployeeFilter::from(self.employee)
    }
}

pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|_| msg_error_anyhow!(Message::InvalidTimestamp(value.to_string())))
}
