use storefront_inventory::Warehouse;
use storefront_invoicing::{InvoiceGenerator, WebInvoiceGenerator};

use crate::cart::Cart;

/// Hands out carts bound to one warehouse and one invoice sequence.
#[derive(Debug)]
pub struct Shop<'w, G = WebInvoiceGenerator>
where
    G: InvoiceGenerator,
{
    warehouse: &'w Warehouse,
    invoices: G,
}

impl<'w, G: InvoiceGenerator> Shop<'w, G> {
    pub fn new(warehouse: &'w Warehouse, invoices: G) -> Self {
        Self {
            warehouse,
            invoices,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        self.warehouse
    }

    pub fn invoices(&self) -> &G {
        &self.invoices
    }

    pub fn cart(&self) -> Cart<'_, Warehouse, G> {
        Cart::new(self.warehouse, &self.invoices)
    }
}
