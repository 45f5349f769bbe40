use anyhow::Context;

use storefront_core::ConsolePrinter;

fn main() -> anyhow::Result<()> {
    let config = storefront_cli::Config::from_env().context("failed to load configuration")?;
    storefront_observability::init(config.log_format);

    tracing::info!(invoice_host = %config.invoice_host, "starting storefront demo");

    let invoices = storefront_cli::demo::run(&config, &mut ConsolePrinter)
        .context("demo scenario failed")?;

    tracing::info!(invoices = invoices.len(), "demo finished");
    Ok(())
}
