use storefront_core::DomainResult;

use crate::container::GoodContainer;
use crate::good::Good;

/// Stock source a cart reserves from.
///
/// Methods take `&self`, so implementors serialize their own mutations and a
/// single provider can back many carts.
pub trait GoodsProvider {
    /// Quantity currently available for new reservations.
    fn good_amount(&self, good: &Good) -> i64;

    /// Removes every listed quantity, or nothing at all.
    fn take(&self, goods: &[GoodContainer]) -> DomainResult<()>;

    /// Puts a quantity (back) into stock.
    fn deliver(&self, good: &Good, amount: i64) -> DomainResult<()>;
}
