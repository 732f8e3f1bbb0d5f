//! Employee records and their validation rules.

use crate::db::error::StoreError;
use serde::{Deserialize, Serialize};

pub const PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub pin: String,
    pub phone: String,
    pub tax_id: Option<String>,
    pub role: Option<String>,
    pub payment_key: Option<String>,
}

/// Employee fields as entered by the administrator, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub pin: String,
    pub phone: String,
    pub tax_id: Option<String>,
    pub role: Option<String>,
    pub payment_key: Option<String>,
}

impl NewEmployee {
    pub fn new(name: &str, pin: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            pin: pin.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    /// Trims text fields and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        fn opt(value: Option<String>) -> Option<String> {
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            pin: self.pin.trim().to_string(),
            phone: self.phone.trim().to_string(),
            tax_id: opt(self.tax_id),
            role: opt(self.role),
            payment_key: opt(self.payment_key),
        }
    }

    /// Checks the fields that do not need the store: name present, PIN shape,
    /// PIN not reserved.
    pub fn validate(&self, admin_pin: &str) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        validate_pin(&self.pin)?;
        if self.pin == admin_pin {
            return Err(StoreError::ReservedPin);
        }
        Ok(())
    }
}

impl From<&Employee> for NewEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            pin: employee.pin.clone(),
            phone: employee.phone.clone(),
            tax_id: employee.tax_id.clone(),
            role: employee.role.clone(),
            payment_key: employee.payment_key.clone(),
        }
    }
}

pub fn validate_pin(pin: &str) -> Result<(), StoreError> {
    if pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(StoreError::InvalidPin)
    }
}
