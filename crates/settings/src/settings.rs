use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use probill_core::{DomainError, DomainResult};
use probill_invoicing::InvoiceNumbering;

use crate::error::SettingsResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub gstin: String,
    pub pan: String,
    /// ISO 4217 code.
    pub currency: String,
    /// Month (1-12) the financial year starts in.
    pub financial_year_start_month: u32,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "ABC Enterprises".to_string(),
            address: "123, Main Street, Business District".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pin_code: "400001".to_string(),
            country: "India".to_string(),
            phone: "+91 22 1234 5678".to_string(),
            email: "contact@abcenterprises.com".to_string(),
            gstin: "27AABCU9603R1ZV".to_string(),
            pan: "AABCU9603R".to_string(),
            currency: "INR".to_string(),
            financial_year_start_month: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    pub prefix: String,
    pub next_number: u64,
    /// Payment terms in days.
    pub terms_days: u32,
    pub footer: String,
    pub show_hsn: bool,
    pub show_discount: bool,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            prefix: "INV-".to_string(),
            next_number: 1025,
            terms_days: 30,
            footer: "Thank you for your business".to_string(),
            show_hsn: true,
            show_discount: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxType {
    #[default]
    Gst,
    Vat,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxSettings {
    pub tax_type: TaxType,
    /// Rate pre-filled on new invoice lines, in percent.
    pub default_rate: Decimal,
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            tax_type: TaxType::Gst,
            default_rate: Decimal::from(18),
        }
    }
}

impl TaxSettings {
    /// Tax rate for a new line item; zero when no tax is charged.
    pub fn line_default(&self) -> Decimal {
        match self.tax_type {
            TaxType::None => Decimal::ZERO,
            TaxType::Gst | TaxType::Vat => self.default_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    pub low_stock_alerts: bool,
    pub payment_reminders: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            low_stock_alerts: true,
            payment_reminders: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub company: CompanyProfile,
    pub invoice: InvoiceSettings,
    pub tax: TaxSettings,
    pub alerts: AlertSettings,
}

impl Settings {
    /// Parse settings JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.invoice.prefix.trim().is_empty() {
            return Err(DomainError::validation("invoice prefix must not be empty"));
        }
        if self.tax.default_rate < Decimal::ZERO || self.tax.default_rate > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(
                "default tax rate must be between 0 and 100",
            ));
        }
        if !(1..=12).contains(&self.company.financial_year_start_month) {
            return Err(DomainError::validation(
                "financial year start month must be between 1 and 12",
            ));
        }
        Ok(())
    }

    /// Invoice number sequence starting at the configured next number.
    pub fn numbering(&self) -> InvoiceNumbering {
        InvoiceNumbering::new(self.invoice.prefix.clone(), self.invoice.next_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_business_profile() {
        let settings = Settings::default();
        assert_eq!(settings.company.name, "ABC Enterprises");
        assert_eq!(settings.numbering().peek(), "INV-1025");
        assert_eq!(settings.invoice.terms_days, 30);
        assert_eq!(settings.tax.line_default(), dec!(18));
        assert!(settings.alerts.low_stock_alerts);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json_str(
            r#"{
                "invoice": { "prefix": "BILL/", "next_number": 7 },
                "tax": { "tax_type": "none" }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.numbering().peek(), "BILL/7");
        assert_eq!(settings.invoice.terms_days, 30);
        assert_eq!(settings.tax.line_default(), Decimal::ZERO);
        assert_eq!(settings.company.city, "Mumbai");
    }

    #[test]
    fn out_of_range_tax_rate_is_rejected() {
        let err = Settings::from_json_str(r#"{ "tax": { "default_rate": "120" } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Settings::from_json_str("{ invoice: }").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
