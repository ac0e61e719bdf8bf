use rust_decimal::Decimal;
use serde::Serialize;

use probill_core::RecordSource;
use probill_inventory::{ProductRecord, StockValuation, low_stock};
use probill_invoicing::{InvoiceKind, InvoiceRecord, InvoiceStatus, RegisterSummary, recent};
use probill_parties::{PartyBalanceSummary, PartyRecord, summarize_balances};
use probill_reports::StockReport;
use probill_settings::Settings;

/// Number of invoices listed under "recent invoices".
pub const RECENT_INVOICE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockItem {
    pub code: String,
    pub name: String,
    pub stock: Decimal,
    pub reorder_level: Decimal,
}

impl From<&ProductRecord> for LowStockItem {
    fn from(product: &ProductRecord) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            stock: product.stock,
            reorder_level: product.reorder_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub value: Decimal,
    pub share_percent: Option<Decimal>,
}

/// Everything the dashboard screen shows, computed in one pass over fresh
/// snapshots of the sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub company: String,
    pub next_invoice_number: String,
    pub register: RegisterSummary,
    pub balances: PartyBalanceSummary,
    pub stock: StockValuation,
    /// Empty when low-stock alerts are switched off.
    pub low_stock: Vec<LowStockItem>,
    /// Overdue sales invoices; empty when payment reminders are switched off.
    pub payment_reminders: Vec<InvoiceRecord>,
    pub recent_invoices: Vec<InvoiceRecord>,
    pub categories: Vec<CategoryShare>,
}

impl DashboardSnapshot {
    pub fn build<I, P, S>(invoices: &I, parties: &P, products: &S, settings: &Settings) -> Self
    where
        I: RecordSource<InvoiceRecord> + ?Sized,
        P: RecordSource<PartyRecord> + ?Sized,
        S: RecordSource<ProductRecord> + ?Sized,
    {
        let invoices = invoices.list();
        let parties = parties.list();
        let products = products.list();

        let low_stock_items: Vec<LowStockItem> = if settings.alerts.low_stock_alerts {
            low_stock(&products).into_iter().map(LowStockItem::from).collect()
        } else {
            Vec::new()
        };

        let payment_reminders: Vec<InvoiceRecord> = if settings.alerts.payment_reminders {
            invoices
                .iter()
                .filter(|r| r.kind == InvoiceKind::Sales && r.status == InvoiceStatus::Overdue)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let stock_report = StockReport::from_products(&products);
        let categories = stock_report
            .rows()
            .iter()
            .map(|row| CategoryShare {
                category: row.category.clone(),
                value: row.value,
                share_percent: stock_report.share_percent(row),
            })
            .collect();

        let snapshot = Self {
            company: settings.company.name.clone(),
            next_invoice_number: settings.numbering().peek(),
            register: RegisterSummary::compute(&invoices),
            balances: summarize_balances(&parties),
            stock: StockValuation::compute(&products),
            low_stock: low_stock_items,
            payment_reminders,
            recent_invoices: recent(&invoices, RECENT_INVOICE_COUNT)
                .into_iter()
                .cloned()
                .collect(),
            categories,
        };

        tracing::info!(
            invoices = invoices.len(),
            parties = parties.len(),
            products = products.len(),
            low_stock = snapshot.low_stock.len(),
            "dashboard snapshot built"
        );
        snapshot
    }
}
