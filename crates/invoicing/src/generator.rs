use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::debug;

use storefront_core::{DomainError, DomainResult};

use crate::invoice::Invoice;

/// Payment host used when none is configured.
pub const DEFAULT_PAYMENT_HOST: &str = "prodam.garazh";

/// Issues invoices with strictly increasing numbers.
pub trait InvoiceGenerator {
    fn create(&self) -> Invoice;
}

impl<T: InvoiceGenerator + ?Sized> InvoiceGenerator for &T {
    fn create(&self) -> Invoice {
        (**self).create()
    }
}

/// Generates `http://<host>/pay?id=<N>` links, numbering from 1.
#[derive(Debug)]
pub struct WebInvoiceGenerator {
    host: String,
    next_number: AtomicU64,
}

impl WebInvoiceGenerator {
    pub fn new(host: impl Into<String>) -> DomainResult<Self> {
        let host = host.into();
        let trimmed = host.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("payment host cannot be empty"));
        }
        if trimmed.contains(['/', '?', ' ']) {
            return Err(DomainError::validation(format!(
                "payment host must be a bare host name, got {trimmed:?}"
            )));
        }
        Ok(Self {
            host: trimmed.to_owned(),
            next_number: AtomicU64::new(1),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Number the next invoice will carry.
    pub fn peek_next(&self) -> u64 {
        self.next_number.load(Ordering::SeqCst)
    }
}

impl Default for WebInvoiceGenerator {
    fn default() -> Self {
        Self {
            host: DEFAULT_PAYMENT_HOST.to_owned(),
            next_number: AtomicU64::new(1),
        }
    }
}

impl InvoiceGenerator for WebInvoiceGenerator {
    fn create(&self) -> Invoice {
        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        let link = format!("http://{}/pay?id={number}", self.host);
        debug!(number, link = %link, "invoice generated");
        Invoice::new(number, link, Utc::now())
    }
}
