//! Invoicing domain module.
//!
//! Issues payment-link invoices for completed orders. Each generator owns its
//! own sequence; there is no process-wide counter.

pub mod generator;
pub mod invoice;

pub use generator::{DEFAULT_PAYMENT_HOST, InvoiceGenerator, WebInvoiceGenerator};
pub use invoice::Invoice;
