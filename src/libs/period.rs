//! Period aggregation and report rows.
//!
//! Selects the punches of a date range (and optionally one employee), runs
//! shift reconstruction and the work-hours calculator per employee, and sums
//! the complete shifts into a [`PeriodSummary`]. The same pipeline feeds the
//! flat event table ([`build_report_rows`]) and the per-day CSV rows
//! ([`build_daily_rows`]).
//!
//! The range is inclusive on both ends: from the first instant of `start`
//! to the last instant of `end`. Punches are filtered before shifts are
//! rebuilt, so a shift crossing a range boundary is cut at the boundary and
//! usually shows up as incomplete or `no_entry`.
//!
//! Employees are listed alphabetically by the name cached on their most
//! recent punch in the range, ties broken by id.
//!
//! Everything here is a pure function of its inputs.

use crate::libs::config::{Config, PayConfig};
use crate::libs::event::{ClockEvent, EventType};
use crate::libs::shift::{group_into_shifts_with, EntryPolicy, ShiftEvents};
use crate::libs::work::{calculate_work_details, WorkDetails, WorkStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeFilter {
    #[default]
    All,
    Employee(i64),
}

impl EmployeeFilter {
    pub fn matches(&self, employee_id: i64) -> bool {
        match self {
            EmployeeFilter::All => true,
            EmployeeFilter::Employee(id) => *id == employee_id,
        }
    }
}

impl From<Option<i64>> for EmployeeFilter {
    fn from(id: Option<i64>) -> Self {
        id.map(EmployeeFilter::Employee).unwrap_or_default()
    }
}

/// Pay and shift policy applied by the aggregator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportOptions {
    pub pay: PayConfig,
    pub entry_policy: EntryPolicy,
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            pay: config.pay(),
            entry_policy: config.entry_policy(),
        }
    }
}

/// Totals over the complete shifts of a period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub normal_ms: i64,
    pub extra_ms: i64,
    pub normal_pay: f64,
    pub extra_pay: f64,
    pub payment: f64,
    /// All reconstructed shifts, whatever their status.
    pub shifts: usize,
    pub complete_shifts: usize,
    pub employees: usize,
}

impl PeriodSummary {
    pub fn total_ms(&self) -> i64 {
        self.normal_ms + self.extra_ms
    }

    /// Adds one shift. Only complete shifts contribute hours and payment.
    pub fn add(&mut self, details: &WorkDetails) {
        self.shifts += 1;
        if details.is_complete() {
            self.complete_shifts += 1;
            self.normal_ms += details.normal_ms;
            self.extra_ms += details.extra_ms;
            self.normal_pay += details.normal_pay;
            self.extra_pay += details.extra_pay;
            self.payment += details.payment;
        }
    }
}

/// One reconstructed shift with its computed details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftReport {
    pub employee_id: i64,
    pub employee_name: String,
    pub events: Vec<ClockEvent>,
    pub details: WorkDetails,
}

impl ShiftReport {
    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.events.first().map(|e| e.timestamp)
    }

    /// Calendar day the shift is reported under: the day of its first punch.
    pub fn day(&self) -> Option<NaiveDate> {
        self.started_at().map(|t| t.date())
    }
}

/// One punch in the flat table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub event_id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub event_type: EventType,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyRowKind {
    Day,
    Subtotal,
    GrandTotal,
}

/// One line of the CSV export: a day of one employee, an employee subtotal
/// or the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub kind: DailyRowKind,
    pub employee_id: Option<i64>,
    pub employee_name: String,
    pub date: Option<NaiveDate>,
    pub entry: Option<NaiveDateTime>,
    pub break_start: Option<NaiveDateTime>,
    pub break_end: Option<NaiveDateTime>,
    pub exit: Option<NaiveDateTime>,
    pub normal_ms: i64,
    pub extra_ms: i64,
    pub total_ms: i64,
    pub payment: f64,
    /// Day status; `None` on subtotal and grand-total rows.
    pub status: Option<WorkStatus>,
}

impl DailyRow {
    fn total(kind: DailyRowKind, employee_id: Option<i64>, employee_name: String, summary: &PeriodSummary) -> Self {
        Self {
            kind,
            employee_id,
            employee_name,
            date: None,
            entry: None,
            break_start: None,
            break_end: None,
            exit: None,
            normal_ms: summary.normal_ms,
            extra_ms: summary.extra_ms,
            total_ms: summary.total_ms(),
            payment: summary.payment,
            status: None,
        }
    }
}

/// Punches inside `period` that match `filter`, in timestamp order.
pub fn select_events(all_events: &[ClockEvent], period: &Period, filter: EmployeeFilter) -> Vec<ClockEvent> {
    let mut selected: Vec<ClockEvent> = all_events
        .iter()
        .filter(|e| period.contains(&e.timestamp) && filter.matches(e.employee_id))
        .cloned()
        .collect();
    selected.sort_by_key(|e| (e.timestamp, e.id));
    selected
}

/// Selected punches grouped per employee, employees in report order.
fn group_by_employee(events: Vec<ClockEvent>) -> Vec<(i64, String, Vec<ClockEvent>)> {
    let mut groups: BTreeMap<i64, Vec<ClockEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(event.employee_id).or_default().push(event);
    }

    let mut groups: Vec<(i64, String, Vec<ClockEvent>)> = groups
        .into_iter()
        .map(|(id, events)| {
            let name = events.last().map(|e| e.employee_name.clone()).unwrap_or_default();
            (id, name, events)
        })
        .collect();
    groups.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()).then(a.0.cmp(&b.0)));
    groups
}

/// Rebuilds and evaluates every shift in the period.
///
/// Shifts are ordered by employee (report order), then by start time.
pub fn analyze_period(all_events: &[ClockEvent], period: &Period, filter: EmployeeFilter, options: &ReportOptions) -> Vec<ShiftReport> {
    let selected = select_events(all_events, period, filter);

    group_by_employee(selected)
        .into_iter()
        .flat_map(|(employee_id, employee_name, events)| {
            group_into_shifts_with(&events, options.entry_policy)
                .into_iter()
                .map(|shift| ShiftReport {
                    employee_id,
                    employee_name: employee_name.clone(),
                    details: calculate_work_details(&shift, &options.pay),
                    events: shift,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn summarize_shifts(shifts: &[ShiftReport]) -> PeriodSummary {
    let mut summary = PeriodSummary::default();
    let mut last_employee = None;
    for shift in shifts {
        if last_employee != Some(shift.employee_id) {
            summary.employees += 1;
            last_employee = Some(shift.employee_id);
        }
        summary.add(&shift.details);
    }
    summary
}

pub fn summarize_period(all_events: &[ClockEvent], period: &Period, filter: EmployeeFilter, options: &ReportOptions) -> PeriodSummary {
    summarize_shifts(&analyze_period(all_events, period, filter, options))
}

/// Flat table: one row per selected punch, in timestamp order.
pub fn build_report_rows(all_events: &[ClockEvent], period: &Period, filter: EmployeeFilter) -> Vec<ReportRow> {
    select_events(all_events, period, filter)
        .into_iter()
        .map(|e| ReportRow {
            event_id: e.id,
            employee_id: e.employee_id,
            employee_name: e.employee_name,
            event_type: e.event_type,
            timestamp: e.timestamp,
        })
        .collect()
}

/// Per-day rows for the CSV export.
///
/// For each employee: one row per day (ascending), then a subtotal row.
/// A grand-total row closes the list. Nothing is emitted for an empty selection.
pub fn build_daily_rows(all_events: &[ClockEvent], period: &Period, filter: EmployeeFilter, options: &ReportOptions) -> Vec<DailyRow> {
    let shifts = analyze_period(all_events, period, filter, options);
    if shifts.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut grand_total = PeriodSummary::default();

    let mut start = 0;
    while start < shifts.len() {
        let employee_id = shifts[start].employee_id;
        let end = shifts[start..].iter().position(|s| s.employee_id != employee_id).map_or(shifts.len(), |offset| start + offset);
        let employee_shifts = &shifts[start..end];
        let employee_name = employee_shifts[0].employee_name.clone();

        let mut days: BTreeMap<NaiveDate, Vec<&ShiftReport>> = BTreeMap::new();
        for shift in employee_shifts {
            if let Some(day) = shift.day() {
                days.entry(day).or_default().push(shift);
            }
        }

        let mut subtotal = PeriodSummary::default();
        for (date, day_shifts) in days {
            let mut day_summary = PeriodSummary::default();
            for shift in &day_shifts {
                day_summary.add(&shift.details);
                subtotal.add(&shift.details);
                grand_total.add(&shift.details);
            }

            let day_events: Vec<ClockEvent> = day_shifts.iter().flat_map(|s| s.events.iter().cloned()).collect();
            let status = if day_summary.complete_shifts > 0 {
                WorkStatus::Complete
            } else {
                day_shifts[0].details.status
            };

            rows.push(DailyRow {
                kind: DailyRowKind::Day,
                employee_id: Some(employee_id),
                employee_name: employee_name.clone(),
                date: Some(date),
                entry: day_events.first_of(EventType::Entry).map(|e| e.timestamp),
                break_start: day_events.first_of(EventType::BreakStart).map(|e| e.timestamp),
                break_end: day_events.first_of(EventType::BreakEnd).map(|e| e.timestamp),
                exit: day_events.first_of(EventType::Exit).map(|e| e.timestamp),
                normal_ms: day_summary.normal_ms,
                extra_ms: day_summary.extra_ms,
                total_ms: day_summary.total_ms(),
                payment: day_summary.payment,
                status: Some(status),
            });
        }

        rows.push(DailyRow::total(DailyRowKind::Subtotal, Some(employee_id), employee_name, &subtotal));
        start = end;
    }

    rows.push(DailyRow::total(DailyRowKind::GrandTotal, None, String::new(), &grand_total));
    rows
}
