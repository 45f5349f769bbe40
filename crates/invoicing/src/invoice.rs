use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Payment link issued for one completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    number: u64,
    payment_link: String,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(number: u64, payment_link: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            number,
            payment_link: payment_link.into(),
            issued_at,
        }
    }

    /// Sequence number, unique per generator.
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn payment_link(&self) -> &str {
        &self.payment_link
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl ValueObject for Invoice {}

impl core::fmt::Display for Invoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.payment_link)
    }
}
