//! Configuration management for the ponto application.
//!
//! Holds the pay policy (hourly rates and the daily normal-hours threshold),
//! kiosk settings (administrator PIN, polling interval) and the shift
//! reconstruction policy. The configuration is a JSON file in the platform
//! data directory; when the file is missing every module falls back to its
//! documented defaults.
//!
//! ## Defaults
//!
//! | Setting | Default |
//! |---|---|
//! | `pay.normal_rate` | 8.15 per hour |
//! | `pay.extra_rate` | 16.30 per hour |
//! | `pay.normal_hours` | 8 hours |
//! | `kiosk.admin_pin` | `0000` |
//! | `kiosk.poll_interval` | 30 seconds |
//! | `shift.entry_policy` | `merge` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::libs::config::Config;
//!
//! let config = Config::read()?;
//! let pay = config.pay.unwrap_or_default();
//! println!("Overtime rate: {}", pay.extra_rate);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::shift::EntryPolicy;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_NORMAL_RATE: f64 = 8.15;
pub const DEFAULT_EXTRA_RATE: f64 = 16.30;
pub const DEFAULT_NORMAL_HOURS: f64 = 8.0;
pub const DEFAULT_ADMIN_PIN: &str = "0000";

pub const MS_PER_HOUR: i64 = 3_600_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid pay.{field}: {value} (must be a finite number, zero or more)")]
    InvalidPayValue { field: &'static str, value: f64 },
}

/// Rates and the normal-hours threshold must be finite and not negative.
pub fn check_pay_value(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPayValue { field, value })
    }
}

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Hourly rates and the per-shift threshold separating normal from overtime hours.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PayConfig {
    /// Currency units paid per normal hour.
    pub normal_rate: f64,

    /// Currency units paid per overtime hour.
    pub extra_rate: f64,

    /// Hours per shift paid at the normal rate.
    pub normal_hours: f64,
}

impl PayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pay_value("normal_rate", self.normal_rate)?;
        check_pay_value("extra_rate", self.extra_rate)?;
        check_pay_value("normal_hours", self.normal_hours)
    }

    /// The normal-hours threshold in milliseconds.
    pub fn normal_threshold_ms(&self) -> i64 {
        (self.normal_hours * MS_PER_HOUR as f64).round() as i64
    }
}

impl Default for PayConfig {
    fn default() -> Self {
        PayConfig {
            normal_rate: DEFAULT_NORMAL_RATE,
            extra_rate: DEFAULT_EXTRA_RATE,
            normal_hours: DEFAULT_NORMAL_HOURS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KioskConfig {
    /// PIN that unlocks administration. No employee may use it.
    pub admin_pin: String,

    /// Seconds between snapshot refreshes in `watch`.
    pub poll_interval: u64,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            admin_pin: DEFAULT_ADMIN_PIN.to_string(),
            poll_interval: 30,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ShiftConfig {
    pub entry_policy: EntryPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<PayConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kiosk: Option<KioskConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        if let Some(pay) = &config.pay {
            pay.validate()?;
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!("configuration saved");
        Ok(())
    }

    pub fn pay(&self) -> PayConfig {
        self.pay.clone().unwrap_or_default()
    }

    pub fn kiosk(&self) -> KioskConfig {
        self.kiosk.clone().unwrap_or_default()
    }

    pub fn entry_policy(&self) -> EntryPolicy {
        self.shift.as_ref().map(|s| s.entry_policy).unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "pay".to_string(),
                name: "Pay policy".to_string(),
            },
            ConfigModule {
                key: "kiosk".to_string(),
                name: "Kiosk".to_string(),
            },
            ConfigModule {
                key: "shift".to_string(),
                name: "Shift reconstruction".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "pay" => {
                    let default = config.pay();
                    msg_print!(Message::ConfigModulePay);
                    config.pay = Some(PayConfig {
                        normal_rate: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNormalRate.to_string())
                            .default(default.normal_rate)
                            .validate_with(|value: &f64| check_pay_value("normal_rate", *value).map_err(|e| e.to_string()))
                            .interact_text()?,
                        extra_rate: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptExtraRate.to_string())
                            .default(default.extra_rate)
                            .validate_with(|value: &f64| check_pay_value("extra_rate", *value).map_err(|e| e.to_string()))
                            .interact_text()?,
                        normal_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNormalHours.to_string())
                            .default(default.normal_hours)
                            .validate_with(|value: &f64| check_pay_value("normal_hours", *value).map_err(|e| e.to_string()))
                            .interact_text()?,
                    });
                }
                "kiosk" => {
                    let default = config.kiosk();
                    msg_print!(Message::ConfigModuleKiosk);
                    config.kiosk = Some(KioskConfig {
                        admin_pin: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAdminPin.to_string())
                            .default(default.admin_pin)
                            .validate_with(|pin: &String| crate::libs::employee::validate_pin(pin).map_err(|e| e.to_string()))
                            .interact_text()?,
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                    });
                }
                "shift" => {
                    msg_print!(Message::ConfigModuleShift);
                    let policies = [EntryPolicy::Merge, EntryPolicy::Split];
                    let current = policies.iter().position(|p| *p == config.entry_policy()).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEntryPolicy.to_string())
                        .items(&policies.iter().map(|p| p.description()).collect::<Vec<_>>())
                        .default(current)
                        .interact()?;
                    config.shift = Some(ShiftConfig {
                        entry_policy: policies[choice],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
