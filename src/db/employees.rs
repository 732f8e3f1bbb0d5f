//! Employee records.
//!
//! PINs are unique across employees and may never equal the administrator
//! PIN. Deleting an employee removes their punches as well.

use super::db::Db;
use super::error::StoreError;
use crate::libs::config::DEFAULT_ADMIN_PIN;
use crate::libs::employee::{Employee, NewEmployee};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, pin, phone, tax_id, role, payment_key) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET name = ?2, pin = ?3, phone = ?4, tax_id = ?5, role = ?6, payment_key = ?7 WHERE id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
pub(crate) const SELECT_COLUMNS: &str = "SELECT id, name, pin, phone, tax_id, role, payment_key FROM employees";
pub(crate) const ORDER_BY_NAME: &str = "ORDER BY name COLLATE NOCASE, id";
const SELECT_PIN_OWNER: &str = "SELECT id FROM employees WHERE pin = ?1";
const COUNT_EVENTS: &str = "SELECT COUNT(*) FROM events WHERE employee_id = ?1";

pub struct Employees {
    conn: Connection,
    admin_pin: String,
}

impl Employees {
    pub fn new() -> Result<Self> {
        let admin_pin = crate::libs::config::Config::read()?.kiosk().admin_pin;
        Ok(Self::with(Db::new()?).admin_pin(&admin_pin))
    }

    pub fn with(db: Db) -> Self {
        Self {
            conn: db.conn,
            admin_pin: DEFAULT_ADMIN_PIN.to_string(),
        }
    }

    /// Sets the reserved administrator PIN checked on insert and update.
    pub fn admin_pin(mut self, pin: &str) -> Self {
        self.admin_pin = pin.to_string();
        self
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            pin: row.get(2)?,
            phone: row.get(3)?,
            tax_id: row.get(4)?,
            role: row.get(5)?,
            payment_key: row.get(6)?,
        })
    }

    fn check(&self, employee: &NewEmployee, own_id: Option<i64>) -> Result<(), StoreError> {
        employee.validate(&self.admin_pin)?;
        let owner: Option<i64> = self.conn.query_row(SELECT_PIN_OWNER, params![employee.pin], |row| row.get(0)).optional()?;
        match owner {
            Some(id) if Some(id) != own_id => Err(StoreError::PinTaken),
            _ => Ok(()),
        }
    }

    pub fn insert(&mut self, employee: &NewEmployee) -> Result<Employee> {
        let employee = employee.clone().normalized();
        self.check(&employee, None)?;

        self.conn.execute(
            INSERT_EMPLOYEE,
            params![employee.name, employee.pin, employee.phone, employee.tax_id, employee.role, employee.payment_key],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name = %employee.name, "employee created");

        self.fetch_by_id(id)?.ok_or_else(|| StoreError::EmployeeNotFound(id).into())
    }

    /// Replaces every field of employee `id`. Cached names on past punches are kept.
    pub fn update(&mut self, id: i64, employee: &NewEmployee) -> Result<Employee> {
        let employee = employee.clone().normalized();
        if self.fetch_by_id(id)?.is_none() {
            return Err(StoreError::EmployeeNotFound(id).into());
        }
        self.check(&employee, Some(id))?;

        self.conn.execute(
            UPDATE_EMPLOYEE,
            params![id, employee.name, employee.pin, employee.phone, employee.tax_id, employee.role, employee.payment_key],
        )?;
        tracing::debug!(id, "employee updated");

        self.fetch_by_id(id)?.ok_or_else(|| StoreError::EmployeeNotFound(id).into())
    }

    /// Deletes the employee and their punches; returns how many punches went with them.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let events: i64 = tx.query_row(COUNT_EVENTS, params![id], |row| row.get(0))?;
        let affected = tx.execute(DELETE_EMPLOYEE, params![id])?;
        if affected == 0 {
            return Err(StoreError::EmployeeNotFound(id).into());
        }
        tx.commit()?;
        tracing::debug!(id, events, "employee deleted");
        Ok(events as usize)
    }

    /// All employees ordered by name.
    pub fn fetch_all(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_COLUMNS, ORDER_BY_NAME))?;
        let employees = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    pub fn fetch_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], Self::from_row)
            .optional()?;
        Ok(employee)
    }

    pub fn fetch_by_pin(&self, pin: &str) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(&format!("{} WHERE pin = ?1", SELECT_COLUMNS), params![pin], Self::from_row)
            .optional()?;
        Ok(employee)
    }
}
