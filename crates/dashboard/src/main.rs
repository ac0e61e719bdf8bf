use anyhow::Context;

use probill_dashboard::DashboardSnapshot;
use probill_inventory::fixtures::sample_products;
use probill_invoicing::fixtures::sample_invoices;
use probill_parties::fixtures::sample_parties;
use probill_settings::Settings;

fn main() -> anyhow::Result<()> {
    probill_observability::init();

    let settings = Settings::from_env().context("failed to load settings")?;

    let invoices = sample_invoices().context("failed to load sample invoices")?;
    let parties = sample_parties().context("failed to load sample parties")?;
    let products = sample_products().context("failed to load sample products")?;

    let snapshot = DashboardSnapshot::build(&invoices, &parties, &products, &settings);
    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");

    Ok(())
}
