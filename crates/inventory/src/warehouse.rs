use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use storefront_core::{DomainError, DomainResult, Entity, GoodId, Printer};

use crate::collection::GoodCollection;
use crate::container::GoodContainer;
use crate::good::Good;
use crate::provider::GoodsProvider;

/// Authoritative stock.
///
/// One mutex guards the whole collection, so a bulk take checks and deducts
/// under a single lock acquisition.
#[derive(Debug, Default)]
pub struct Warehouse {
    goods: Mutex<GoodCollection>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliver(&self, good: &Good, amount: i64) -> DomainResult<()> {
        let container = GoodContainer::new(good.clone(), amount)?;
        let mut goods = self.lock();
        goods.add(container)?;
        debug!(
            good_id = %good.id(),
            amount,
            stock = goods.good_amount(good),
            "goods delivered"
        );
        Ok(())
    }

    /// All-or-nothing bulk take.
    ///
    /// Quantities for the same good are summed, every good is checked against
    /// stock, and only then is anything deducted.
    pub fn take(&self, goods: &[GoodContainer]) -> DomainResult<()> {
        let mut requested: BTreeMap<&GoodId, (&Good, i64)> = BTreeMap::new();
        for container in goods {
            let entry = requested
                .entry(container.good().id())
                .or_insert((container.good(), 0));
            entry.1 = entry
                .1
                .checked_add(container.amount())
                .ok_or_else(|| DomainError::invariant("requested amount overflow"))?;
        }

        let mut stock = self.lock();

        for (id, (_, amount)) in &requested {
            let available = stock.amount_of(id);
            if *amount > available {
                debug!(good_id = %id, requested = *amount, available, "take rejected");
                return Err(DomainError::insufficient_stock(
                    (*id).clone(),
                    *amount,
                    available,
                ));
            }
        }

        for (good, amount) in requested.into_values() {
            if amount == 0 {
                continue;
            }
            stock.take(good, amount)?;
            debug!(
                good_id = %good.id(),
                amount,
                stock = stock.good_amount(good),
                "goods taken"
            );
        }

        Ok(())
    }

    pub fn take_good(&self, good: &Good, amount: i64) -> DomainResult<()> {
        let container = GoodContainer::new(good.clone(), amount)?;
        self.take(std::slice::from_ref(&container))
    }

    pub fn good_amount(&self, good: &Good) -> i64 {
        self.lock().good_amount(good)
    }

    /// Copy of the current stock.
    pub fn snapshot(&self) -> GoodCollection {
        self.lock().clone()
    }

    pub fn print<P: Printer + ?Sized>(&self, printer: &mut P) {
        printer.print("Goods in warehouse:");
        self.lock().print(printer);
    }

    // Every mutation validates before touching the collection, so a poisoned
    // guard still holds consistent stock.
    fn lock(&self) -> MutexGuard<'_, GoodCollection> {
        self.goods.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GoodsProvider for Warehouse {
    fn good_amount(&self, good: &Good) -> i64 {
        Warehouse::good_amount(self, good)
    }

    fn take(&self, goods: &[GoodContainer]) -> DomainResult<()> {
        Warehouse::take(self, goods)
    }

    fn deliver(&self, good: &Good, amount: i64) -> DomainResult<()> {
        Warehouse::deliver(self, good, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::BufferPrinter;

    fn apple() -> Good {
        Good::new("apple", "Apple").unwrap()
    }

    fn pear() -> Good {
        Good::new("pear", "Pear").unwrap()
    }

    fn container(good: &Good, amount: i64) -> GoodContainer {
        GoodContainer::new(good.clone(), amount).unwrap()
    }

    fn stocked_warehouse() -> Warehouse {
        let warehouse = Warehouse::new();
        warehouse.deliver(&apple(), 10).unwrap();
        warehouse.deliver(&pear(), 3).unwrap();
        warehouse
    }

    #[test]
    fn new_warehouse_is_empty() {
        let warehouse = Warehouse::new();
        assert_eq!(warehouse.good_amount(&apple()), 0);
        assert!(warehouse.snapshot().is_empty());
    }

    #[test]
    fn deliver_accumulates_stock() {
        let warehouse = stocked_warehouse();
        warehouse.deliver(&apple(), 5).unwrap();
        assert_eq!(warehouse.good_amount(&apple()), 15);
    }

    #[test]
    fn deliver_negative_is_rejected() {
        let warehouse = stocked_warehouse();
        assert!(matches!(
            warehouse.deliver(&apple(), -1),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(warehouse.good_amount(&apple()), 10);
    }

    #[test]
    fn bulk_take_deducts_every_line() {
        let warehouse = stocked_warehouse();
        warehouse
            .take(&[container(&apple(), 4), container(&pear(), 3)])
            .unwrap();
        assert_eq!(warehouse.good_amount(&apple()), 6);
        assert_eq!(warehouse.good_amount(&pear()), 0);
    }

    #[test]
    fn bulk_take_is_all_or_nothing() {
        let warehouse = stocked_warehouse();
        let before = warehouse.snapshot();

        let err = warehouse
            .take(&[container(&apple(), 4), container(&pear(), 4)])
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::insufficient_stock(pear().id().clone(), 4, 3)
        );
        assert_eq!(warehouse.snapshot(), before);
    }

    #[test]
    fn bulk_take_sums_repeated_goods() {
        let warehouse = stocked_warehouse();
        let err = warehouse
            .take(&[container(&apple(), 6), container(&apple(), 5)])
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientStock { requested: 11, available: 10, .. }
        ));
        assert_eq!(warehouse.good_amount(&apple()), 10);
    }

    #[test]
    fn take_of_unknown_good_reports_zero_available() {
        let warehouse = stocked_warehouse();
        let plum = Good::new("plum", "Plum").unwrap();
        assert_eq!(
            warehouse.take_good(&plum, 1),
            Err(DomainError::insufficient_stock(plum.id().clone(), 1, 0))
        );
    }

    #[test]
    fn zero_take_of_unknown_good_is_a_no_op() {
        let warehouse = stocked_warehouse();
        let plum = Good::new("plum", "Plum").unwrap();
        warehouse.take_good(&plum, 0).unwrap();
        assert_eq!(warehouse.snapshot().len(), 2);
    }

    #[test]
    fn print_writes_header_then_goods() {
        let warehouse = stocked_warehouse();
        let mut printer = BufferPrinter::new();
        warehouse.print(&mut printer);
        assert_eq!(
            printer.lines(),
            ["Goods in warehouse:", "Apple - 10", "Pear - 3"]
        );
    }

    #[test]
    fn warehouse_is_shareable_across_threads() {
        let warehouse = std::sync::Arc::new(stocked_warehouse());
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let warehouse = std::sync::Arc::clone(&warehouse);
                std::thread::spawn(move || warehouse.take_good(&apple(), 1).is_ok())
            })
            .collect();
        let taken = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(taken, 10);
        assert_eq!(warehouse.good_amount(&apple()), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Deliver(usize, i64),
            Take(Vec<(usize, i64)>),
        }

        fn goods() -> [Good; 3] {
            [
                apple(),
                pear(),
                Good::new("plum", "Plum").unwrap(),
            ]
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0usize..3, 0i64..20).prop_map(|(g, n)| Op::Deliver(g, n)),
                prop::collection::vec((0usize..3, 0i64..25), 1..4).prop_map(Op::Take),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: stock never goes negative, and a rejected take leaves
            /// stock exactly as it was.
            #[test]
            fn stock_never_negative_and_takes_are_atomic(
                ops in prop::collection::vec(op(), 1..40)
            ) {
                let goods = goods();
                let warehouse = Warehouse::new();

                for op in ops {
                    match op {
                        Op::Deliver(g, n) => warehouse.deliver(&goods[g], n).unwrap(),
                        Op::Take(lines) => {
                            let before = warehouse.snapshot();
                            let batch: Vec<GoodContainer> = lines
                                .iter()
                                .map(|(g, n)| container(&goods[*g], *n))
                                .collect();
                            if warehouse.take(&batch).is_err() {
                                prop_assert_eq!(warehouse.snapshot(), before);
                            }
                        }
                    }

                    for good in &goods {
                        prop_assert!(warehouse.good_amount(good) >= 0);
                    }
                }
            }
        }
    }
}
