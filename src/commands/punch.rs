use crate::{
    db::{employees::Employees, events::Events},
    libs::{
        config::Config,
        event::{wall_clock_now, EventType, NewClockEvent},
        formatter::format_timestamp,
        messages::Message,
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password, Select};

#[derive(Debug, Args)]
pub struct PunchArgs {
    /// Punch type, asked for when omitted
    #[arg(value_enum)]
    event_type: Option<EventType>,

    /// Employee PIN, asked for (hidden) when omitted
    #[arg(short, long)]
    pin: Option<String>,
}

pub fn cmd(args: PunchArgs) -> Result<()> {
    let admin_pin = Config::read()?.kiosk().admin_pin;

    let pin = match args.pin {
        Some(pin) => pin,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPin.to_string())
            .interact()?,
    };
    let pin = pin.trim().to_string();

    if pin == admin_pin {
        msg_bail_anyhow!(Message::AdminPinCannotPunch);
    }

    let employee = match Employees::new()?.fetch_by_pin(&pin)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::PinNotRecognized),
    };

    let mut events = Events::new()?;
    let previous = events.last_for_employee(employee.id)?.map(|event| event.event_type);

    let event_type = match args.event_type {
        Some(event_type) => event_type,
        None => prompt_event_type(previous)?,
    };

    if !event_type.follows(previous) {
        msg_warning!(Message::PunchOutOfSequence {
            event_type: event_type.to_string(),
            previous: previous.map(|p| p.to_string()),
        });
    }

    let recorded = events.insert(&NewClockEvent::new(employee.id, &employee.name, event_type, wall_clock_now()))?;
    tracing::info!(employee_id = employee.id, event_type = recorded.event_type.as_str(), "punch recorded");

    msg_success!(Message::PunchRecorded {
        name: recorded.employee_name,
        event_type: recorded.event_type.to_string(),
        time: format_timestamp(&recorded.timestamp),
    });
    Ok(())
}

/// Offers the four punch types, preselecting the one that naturally comes next.
fn prompt_event_type(previous: Option<EventType>) -> Result<EventType> {
    let labels: Vec<String> = EventType::ALL.iter().map(|t| t.to_string()).collect();
    let suggested = EventType::ALL.iter().position(|t| t.follows(previous)).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEventType.to_string())
        .items(&labels)
        .default(suggested)
        .interact()?;

    Ok(EventType::ALL[selection])
}
