use super::{parse_timestamp, PeriodArgs};
use crate::{
    db::{employees::Employees, events::Events},
    libs::{
        event::{ClockEvent, EventType, NewClockEvent},
        formatter::format_timestamp,
        messages::Message,
        period::build_report_rows,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    command: EventsCommand,
}

#[derive(Debug, Subcommand)]
enum EventsCommand {
    /// List punches in a period
    List(PeriodArgs),
    /// Record a punch on behalf of an employee
    Add {
        /// Employee ID
        employee: i64,
        #[arg(value_enum)]
        event_type: EventType,
        /// Timestamp (YYYY-MM-DD HH:MM[:SS])
        at: String,
    },
    /// Correct the type or time of a punch
    Edit {
        /// Punch ID
        id: i64,
        #[arg(short = 't', long = "type", value_enum)]
        event_type: Option<EventType>,
        /// New timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(short, long)]
        at: Option<String>,
    },
    /// Delete a punch
    Delete {
        /// Punch ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: EventsArgs) -> Result<()> {
    match args.command {
        EventsCommand::List(period_args) => handle_list(period_args),
        EventsCommand::Add { employee, event_type, at } => handle_add(employee, event_type, &at),
        EventsCommand::Edit { id, event_type, at } => handle_edit(id, event_type, at),
        EventsCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn handle_list(period_args: PeriodArgs) -> Result<()> {
    let period = period_args.period()?;
    let all_events = Events::new()?.fetch_all()?;
    let rows = build_report_rows(&all_events, &period, period_args.filter());

    if rows.is_empty() {
        msg_info!(Message::NoEventsInPeriod);
        return Ok(());
    }

    msg_print!(Message::ReportHeader(period.start.to_string(), period.end.to_string()), true);
    View::events(&rows)?;
    Ok(())
}

fn handle_add(employee_id: i64, event_type: EventType, at: &str) -> Result<()> {
    let recorded = add_punch(&Employees::new()?, &mut Events::new()?, employee_id, event_type, at)?;
    msg_success!(Message::PunchRecorded {
        name: recorded.employee_name,
        event_type: recorded.event_type.to_string(),
        time: format_timestamp(&recorded.timestamp),
    });
    Ok(())
}

fn handle_edit(id: i64, event_type: Option<EventType>, at: Option<String>) -> Result<()> {
    edit_punch(&mut Events::new()?, id, event_type, at.as_deref())?;
    msg_success!(Message::EventUpdated(id));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    if delete_punch(&mut Events::new()?, id, yes)? {
        msg_success!(Message::EventDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn add_punch(employees: &Employees, events: &mut Events, employee_id: i64, event_type: EventType, at: &str) -> Result<ClockEvent> {
    let timestamp = parse_timestamp(at)?;
    let employee = match employees.fetch_by_id(employee_id)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(employee_id)),
    };

    events.insert(&NewClockEvent::new(employee.id, &employee.name, event_type, timestamp))
}

fn edit_punch(events: &mut Events, id: i64, event_type: Option<EventType>, at: Option<&str>) -> Result<ClockEvent> {
    let current = match events.fetch_by_id(id)? {
        Some(event) => event,
        None => msg_bail_anyhow!(Message::EventNotFound(id)),
    };

    let timestamp = match at {
        Some(value) => parse_timestamp(value)?,
        None => current.timestamp,
    };
    events.update(id, event_type.unwrap_or(current.event_type), timestamp)
}

/// Returns whether the punch was deleted; `false` when the user declined.
fn delete_punch(events: &mut Events, id: i64, yes: bool) -> Result<bool> {
    if events.fetch_by_id(id)?.is_none() {
        msg_bail_anyhow!(Message::EventNotFound(id));
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEvent(id).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        events.delete(id)?;
    }
    Ok(confirmed)
}
