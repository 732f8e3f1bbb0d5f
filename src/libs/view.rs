use crate::db::snapshot::Presence;
use crate::libs::employee::Employee;
use crate::libs::formatter::{format_currency, format_hours, format_ms, format_timestamp};
use crate::libs::period::{PeriodSummary, ReportRow, ShiftReport};
use crate::libs::work::ms_to_hours;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PIN", "PHONE", "TAX ID", "ROLE", "PAYMENT KEY"]);
        for e in employees {
            table.add_row(row![
                e.id,
                e.name,
                e.pin,
                e.phone,
                e.tax_id.as_deref().unwrap_or("-"),
                e.role.as_deref().unwrap_or("-"),
                e.payment_key.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn events(rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "TYPE", "TIME"]);
        for r in rows {
            table.add_row(row![r.event_id, r.employee_name, r.event_type, format_timestamp(&r.timestamp)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn shifts(shifts: &[ShiftReport]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "START", "END", "PUNCHES", "NORMAL", "EXTRA", "TOTAL", "PAYMENT", "STATUS"]);
        for s in shifts {
            let start = s.events.first().map(|e| format_timestamp(&e.timestamp)).unwrap_or_default();
            let end = s.events.last().map(|e| format_timestamp(&e.timestamp)).unwrap_or_default();
            table.add_row(row![
                s.employee_name,
                start,
                end,
                s.events.len(),
                format_ms(s.details.normal_ms),
                format_ms(s.details.extra_ms),
                format_ms(s.details.total_ms),
                format_currency(s.details.payment),
                s.details.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &PeriodSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "TIME", "HOURS", "PAYMENT"]);
        table.add_row(row!["Normal", format_ms(summary.normal_ms), format_hours(ms_to_hours(summary.normal_ms)), format_currency(summary.normal_pay)]);
        table.add_row(row!["Extra", format_ms(summary.extra_ms), format_hours(ms_to_hours(summary.extra_ms)), format_currency(summary.extra_pay)]);
        table.add_row(row!["Total", format_ms(summary.total_ms()), format_hours(ms_to_hours(summary.total_ms())), format_currency(summary.payment)]);
        table.printstd();

        println!(
            "{} employee(s), {} shift(s), {} complete",
            summary.employees, summary.shifts, summary.complete_shifts
        );

        Ok(())
    }

    pub fn presence(presence: &[Presence]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "STATE", "SINCE"]);
        for p in presence {
            let state = if p.on_break() { "On break" } else { "Working" };
            table.add_row(row![p.employee_name, state, format_timestamp(&p.last.timestamp)]);
        }
        table.printstd();

        Ok(())
    }
}
