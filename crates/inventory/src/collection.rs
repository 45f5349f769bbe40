use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use storefront_core::{DomainError, DomainResult, Entity, GoodId, Printer};

use crate::container::GoodContainer;
use crate::good::Good;

/// Quantities keyed by good id.
///
/// Absence of a key means zero. Entries taken down to zero stay in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoodCollection {
    containers: BTreeMap<GoodId, GoodContainer>,
}

impl GoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges into an existing entry for the same good, or inserts a new one.
    pub fn add(&mut self, container: GoodContainer) -> DomainResult<()> {
        match self.containers.entry(container.good().id().clone()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(&container),
            Entry::Vacant(slot) => {
                slot.insert(container);
                Ok(())
            }
        }
    }

    pub fn take(&mut self, good: &Good, amount: i64) -> DomainResult<()> {
        DomainError::ensure_non_negative(amount, "amount")?;

        let container = self
            .containers
            .get_mut(good.id())
            .ok_or_else(|| DomainError::not_found(good.id().clone()))?;
        container.take(amount)
    }

    pub fn good_amount(&self, good: &Good) -> i64 {
        self.amount_of(good.id())
    }

    pub fn amount_of(&self, id: &GoodId) -> i64 {
        self.containers.get(id).map_or(0, GoodContainer::amount)
    }

    pub fn clear(&mut self) {
        self.containers.clear();
    }

    /// Containers ordered by good id.
    pub fn goods(&self) -> impl Iterator<Item = &GoodContainer> {
        self.containers.values()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Sum over all goods. Widened so any number of full containers fits.
    pub fn total_amount(&self) -> i128 {
        self.goods().map(|c| i128::from(c.amount())).sum()
    }

    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P) {
        for container in self.goods() {
            printer.print(&format!(
                "{} - {}",
                container.good().name(),
                container.amount()
            ));
        }
    }
}
