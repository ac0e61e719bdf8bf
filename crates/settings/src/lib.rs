//! Business settings: company profile, invoice numbering, tax defaults and
//! alert switches.
//!
//! Settings come from built-in defaults, optionally overlaid by a JSON file and
//! `PROBILL_*` environment variables (see [`env`]).

pub mod env;
pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{AlertSettings, CompanyProfile, InvoiceSettings, Settings, TaxSettings, TaxType};
