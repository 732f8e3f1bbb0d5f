use crate::{
    db::employees::Employees,
    libs::{employee::NewEmployee, import::import_employees_file, messages::Message, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Register a new employee
    Add {
        #[arg(short, long)]
        name: Option<String>,
        /// Four-digit PIN
        #[arg(short, long)]
        pin: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        tax_id: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Key used to pay the employee
        #[arg(long)]
        payment_key: Option<String>,
    },
    /// List all employees
    List,
    /// Edit an employee
    Edit {
        /// Employee ID
        id: i64,
    },
    /// Delete an employee and their punches
    Delete {
        /// Employee ID
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Import employees from a CSV file (name,pin,phone[,tax_id,role,payment_key])
    Import {
        file: PathBuf,
    },
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    match args.command {
        EmployeeCommand::Add {
            name,
            pin,
            phone,
            tax_id,
            role,
            payment_key,
        } => {
            let employee = NewEmployee {
                name: value_or_prompt(name, Message::PromptEmployeeName)?,
                pin: value_or_prompt(pin, Message::PromptEmployeePin)?,
                phone: value_or_prompt(phone, Message::PromptEmployeePhone)?,
                tax_id,
                role,
                payment_key,
            };
            handle_add(employee)
        }
        EmployeeCommand::List => handle_list(),
        EmployeeCommand::Edit { id } => handle_edit(id),
        EmployeeCommand::Delete { id, yes } => handle_delete(id, yes),
        EmployeeCommand::Import { file } => handle_import(file),
    }
}

fn value_or_prompt(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default()).with_prompt(prompt.to_string()).interact_text()?),
    }
}

fn optional_input(prompt: Message, current: Option<String>) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

fn handle_add(employee: NewEmployee) -> Result<()> {
    let created = Employees::new()?.insert(&employee)?;
    msg_success!(Message::EmployeeCreated(created.name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let employees = Employees::new()?.fetch_all()?;

    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&employees)?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut employees = Employees::new()?;
    let employee = match employees.fetch_by_id(id)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(id)),
    };

    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeeName.to_string())
        .default(employee.name.clone())
        .interact_text()?;
    let pin: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeePin.to_string())
        .default(employee.pin.clone())
        .interact_text()?;
    let phone: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeePhone.to_string())
        .default(employee.phone.clone())
        .interact_text()?;

    let changes = NewEmployee {
        name,
        pin,
        phone,
        tax_id: optional_input(Message::PromptEmployeeTaxId, employee.tax_id)?,
        role: optional_input(Message::PromptEmployeeRole, employee.role)?,
        payment_key: optional_input(Message::PromptEmployeePaymentKey, employee.payment_key)?,
    };

    let updated = employees.update(id, &changes)?;
    msg_success!(Message::EmployeeUpdated(updated.name));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let mut employees = Employees::new()?;
    let employee = match employees.fetch_by_id(id)? {
        Some(employee) => employee,
        None => msg_bail_anyhow!(Message::EmployeeNotFound(id)),
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEmployee(employee.name.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        let removed = employees.delete(id)?;
        msg_success!(Message::EmployeeDeleted(employee.name, removed));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_import(file: PathBuf) -> Result<()> {
    let mut employees = Employees::new()?;
    let report = import_employees_file(&mut employees, &file)?;

    for issue in &report.skipped {
        msg_warning!(Message::ImportRowSkipped(issue.line, issue.reason.clone()));
    }
    msg_success!(Message::ImportCompleted(report.imported.len(), report.skipped.len()));
    Ok(())
}
