//! Environment overrides.
//!
//! | variable | field |
//! |---|---|
//! | `PROBILL_SETTINGS_FILE` | JSON file applied before the variables below |
//! | `PROBILL_COMPANY_NAME` | `company.name` |
//! | `PROBILL_INVOICE_PREFIX` | `invoice.prefix` |
//! | `PROBILL_NEXT_INVOICE_NUMBER` | `invoice.next_number` |
//! | `PROBILL_INVOICE_TERMS_DAYS` | `invoice.terms_days` |
//! | `PROBILL_DEFAULT_TAX_RATE` | `tax.default_rate` |

use core::str::FromStr;

use crate::error::{SettingsError, SettingsResult};
use crate::settings::Settings;

pub const SETTINGS_FILE: &str = "PROBILL_SETTINGS_FILE";
pub const COMPANY_NAME: &str = "PROBILL_COMPANY_NAME";
pub const INVOICE_PREFIX: &str = "PROBILL_INVOICE_PREFIX";
pub const NEXT_INVOICE_NUMBER: &str = "PROBILL_NEXT_INVOICE_NUMBER";
pub const INVOICE_TERMS_DAYS: &str = "PROBILL_INVOICE_TERMS_DAYS";
pub const DEFAULT_TAX_RATE: &str = "PROBILL_DEFAULT_TAX_RATE";

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> SettingsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> SettingsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(SETTINGS_FILE) {
            Some(path) => {
                let json = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(%path, "settings file read");
                serde_json::from_str(&json)?
            }
            None => Settings::default(),
        };

        if let Some(name) = lookup(COMPANY_NAME) {
            settings.company.name = name;
        }
        if let Some(prefix) = lookup(INVOICE_PREFIX) {
            settings.invoice.prefix = prefix;
        }
        if let Some(next) = parse_var(&lookup, NEXT_INVOICE_NUMBER)? {
            settings.invoice.next_number = next;
        }
        if let Some(days) = parse_var(&lookup, INVOICE_TERMS_DAYS)? {
            settings.invoice.terms_days = days;
        }
        if let Some(rate) = parse_var(&lookup, DEFAULT_TAX_RATE)? {
            settings.tax.default_rate = rate;
        }

        settings.validate()?;
        tracing::info!(
            company = %settings.company.name,
            next_invoice = %settings.numbering().peek(),
            "settings loaded"
        );
        Ok(settings)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> SettingsResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(SettingsError::InvalidValue { key, value: raw }),
        },
        None => {
            tracing::debug!(key, "not set; keeping default");
            Ok(None)
        }
    }
}
