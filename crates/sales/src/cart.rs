use tracing::{info, warn};

use storefront_core::{CartId, DomainError, DomainResult, Entity, Printer};
use storefront_inventory::{Good, GoodCollection, GoodContainer, GoodsProvider};
use storefront_invoicing::{Invoice, InvoiceGenerator};

/// One customer session's reservation.
///
/// Stock is deducted from the provider when goods are added, so the provider's
/// amount is always what is still free for other carts. Whatever is still
/// reserved when the cart is released or dropped goes back to the provider.
pub struct Cart<'a, P, G>
where
    P: GoodsProvider + ?Sized,
    G: InvoiceGenerator + ?Sized,
{
    id: CartId,
    provider: &'a P,
    invoices: &'a G,
    reserved: GoodCollection,
}

impl<'a, P, G> Cart<'a, P, G>
where
    P: GoodsProvider + ?Sized,
    G: InvoiceGenerator + ?Sized,
{
    pub fn new(provider: &'a P, invoices: &'a G) -> Self {
        Self::with_id(CartId::new(), provider, invoices)
    }

    pub fn with_id(id: CartId, provider: &'a P, invoices: &'a G) -> Self {
        Self {
            id,
            provider,
            invoices,
            reserved: GoodCollection::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn reserved(&self) -> &GoodCollection {
        &self.reserved
    }

    pub fn reserved_amount(&self, good: &Good) -> i64 {
        self.reserved.good_amount(good)
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }

    /// Reserves `amount` units, deducting them from the provider.
    ///
    /// A zero amount succeeds and records nothing.
    pub fn add(&mut self, good: &Good, amount: i64) -> DomainResult<()> {
        DomainError::ensure_non_negative(amount, "amount")?;
        if amount == 0 {
            return Ok(());
        }

        let available = self.provider.good_amount(good);
        if amount > available {
            warn!(
                cart_id = %self.id,
                good_id = %good.id(),
                requested = amount,
                available,
                "reservation rejected"
            );
            return Err(DomainError::insufficient_stock(
                good.id().clone(),
                amount,
                available,
            ));
        }

        let container = GoodContainer::new(good.clone(), amount)?;
        self.provider.take(std::slice::from_ref(&container))?;

        if let Err(err) = self.reserved.add(container) {
            if let Err(return_err) = self.provider.deliver(good, amount) {
                warn!(
                    cart_id = %self.id,
                    good_id = %good.id(),
                    amount,
                    error = %return_err,
                    "failed to return goods after rejected reservation"
                );
            }
            return Err(err);
        }

        info!(
            cart_id = %self.id,
            good_id = %good.id(),
            amount,
            reserved = self.reserved.good_amount(good),
            "goods reserved"
        );
        Ok(())
    }

    /// Finalizes the reservation into a sale and issues an invoice.
    ///
    /// The reserved stock already left the provider in [`Cart::add`]; ordering
    /// drops the reservation so it is never returned.
    pub fn order(&mut self) -> DomainResult<Invoice> {
        if self.reserved.is_empty() {
            return Err(DomainError::invalid_state("cart is empty"));
        }

        let units = self.reserved.total_amount();
        let lines = self.reserved.len();
        self.reserved.clear();

        let invoice = self.invoices.create();
        info!(
            cart_id = %self.id,
            lines,
            units,
            invoice = %invoice,
            "order placed"
        );
        Ok(invoice)
    }

    /// Returns every reserved unit to the provider and empties the cart.
    ///
    /// Keeps going past a failed return so the rest of the stock still goes
    /// back; the first error is reported.
    pub fn release(&mut self) -> DomainResult<()> {
        let reserved = std::mem::take(&mut self.reserved);
        if reserved.is_empty() {
            return Ok(());
        }

        let mut first_error = None;
        for container in reserved.goods() {
            if let Err(err) = self.provider.deliver(container.good(), container.amount()) {
                warn!(
                    cart_id = %self.id,
                    good_id = %container.good().id(),
                    amount = container.amount(),
                    error = %err,
                    "failed to return reserved goods"
                );
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        info!(
            cart_id = %self.id,
            lines = reserved.len(),
            units = reserved.total_amount(),
            "reservation released"
        );

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn print<Pr: Printer + ?Sized>(&self, printer: &mut Pr) {
        printer.print("Goods in cart:");
        self.reserved.print(printer);
    }
}

impl<P, G> Drop for Cart<'_, P, G>
where
    P: GoodsProvider + ?Sized,
    G: InvoiceGenerator + ?Sized,
{
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(cart_id = %self.id, error = %err, "cart dropped with unreturned goods");
        }
    }
}

impl<P, G> core::fmt::Debug for Cart<'_, P, G>
where
    P: GoodsProvider + ?Sized,
    G: InvoiceGenerator + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cart")
            .field("id", &self.id)
            .field("reserved", &self.reserved)
            .finish_non_exhaustive()
    }
}
