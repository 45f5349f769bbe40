//! The checkout/abandon walk-through printed by the `storefront` binary.

use anyhow::{Context, bail};
use tracing::info;

use storefront_core::{DomainError, Printer};
use storefront_inventory::{Good, Warehouse};
use storefront_invoicing::{Invoice, WebInvoiceGenerator};
use storefront_sales::Shop;

use crate::config::Config;

/// Runs the scenario, printing to `printer`, and returns the issued invoices.
///
/// 1. Stock 10 apples and 5 pears.
/// 2. First cart reserves 4 apples, is refused 7 more, and orders.
/// 3. Second cart orders 2 pears.
/// 4. Third cart reserves 3 apples and a pear, then is abandoned.
pub fn run<P: Printer + ?Sized>(config: &Config, printer: &mut P) -> anyhow::Result<Vec<Invoice>> {
    let apple = Good::new("apple", "Apple")?;
    let pear = Good::new("pear", "Pear")?;

    let warehouse = Warehouse::new();
    warehouse.deliver(&apple, 10)?;
    warehouse.deliver(&pear, 5)?;
    warehouse.print(printer);

    let generator = WebInvoiceGenerator::new(config.invoice_host.as_str())
        .context("invalid invoice host")?;
    let shop = Shop::new(&warehouse, generator);
    let mut invoices = Vec::new();

    let mut cart = shop.cart();
    cart.add(&apple, 4).context("reserving apples")?;
    cart.print(printer);
    match cart.add(&apple, 7) {
        Err(err @ DomainError::InsufficientStock { .. }) => {
            printer.print(&format!("Rejected: {err}"));
        }
        Err(err) => return Err(err).context("reserving extra apples"),
        Ok(()) => bail!("reserving 7 more apples should have exceeded stock"),
    }
    invoices.push(cart.order().context("ordering first cart")?);

    let mut cart = shop.cart();
    cart.add(&pear, 2).context("reserving pears")?;
    invoices.push(cart.order().context("ordering second cart")?);

    for invoice in &invoices {
        printer.print(&format!("Invoice: {invoice}"));
    }

    let mut abandoned = shop.cart();
    abandoned.add(&apple, 3).context("reserving apples for abandoned cart")?;
    abandoned.add(&pear, 1).context("reserving pears for abandoned cart")?;
    abandoned.release().context("releasing abandoned cart")?;
    drop(abandoned);

    warehouse.print(printer);
    info!(invoices = invoices.len(), "scenario complete");

    Ok(invoices)
}
