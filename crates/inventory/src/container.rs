use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity};

use crate::good::Good;

/// A non-negative quantity of one good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoodContainer {
    good: Good,
    amount: i64,
}

impl GoodContainer {
    pub fn new(good: Good, amount: i64) -> DomainResult<Self> {
        DomainError::ensure_non_negative(amount, "amount")?;
        Ok(Self { good, amount })
    }

    pub fn good(&self) -> &Good {
        &self.good
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Adds `other`'s quantity into this container.
    ///
    /// Both containers must hold the same good. On error neither is changed.
    pub fn merge(&mut self, other: &GoodContainer) -> DomainResult<()> {
        DomainError::ensure_non_negative(other.amount, "merged amount")?;

        if !self.good.same_identity(&other.good) {
            return Err(DomainError::IdentityMismatch {
                expected: self.good.id().clone(),
                actual: other.good.id().clone(),
            });
        }

        self.amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invariant("good amount overflow"))?;
        Ok(())
    }

    pub fn take(&mut self, amount: i64) -> DomainResult<()> {
        DomainError::ensure_non_negative(amount, "amount")?;

        if amount > self.amount {
            return Err(DomainError::insufficient_stock(
                self.good.id().clone(),
                amount,
                self.amount,
            ));
        }

        self.amount -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_good(id: &str) -> Good {
        Good::new(id, id.to_uppercase()).unwrap()
    }

    #[test]
    fn negative_amount_is_rejected_at_construction() {
        let err = GoodContainer::new(test_good("apple"), -1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn merge_adds_amounts_for_same_good() {
        let mut a = GoodContainer::new(test_good("apple"), 3).unwrap();
        let b = GoodContainer::new(test_good("apple"), 4).unwrap();
        a.merge(&b).unwrap();
        assert_eq!(a.amount(), 7);
        assert_eq!(b.amount(), 4);
    }

    #[test]
    fn merge_of_different_goods_fails_and_leaves_both_unchanged() {
        let mut apples = GoodContainer::new(test_good("apple"), 3).unwrap();
        let pears = GoodContainer::new(test_good("pear"), 4).unwrap();
        let before = (apples.clone(), pears.clone());

        let err = apples.merge(&pears).unwrap_err();
        match err {
            DomainError::IdentityMismatch { expected, actual } => {
                assert_eq!(expected.as_str(), "apple");
                assert_eq!(actual.as_str(), "pear");
            }
            other => panic!("Expected IdentityMismatch, got {other:?}"),
        }
        assert_eq!((apples, pears), before);
    }

    #[test]
    fn merge_overflow_is_an_invariant_violation() {
        let mut a = GoodContainer::new(test_good("apple"), i64::MAX).unwrap();
        let b = GoodContainer::new(test_good("apple"), 1).unwrap();
        assert!(matches!(
            a.merge(&b),
            Err(DomainError::InvariantViolation(_))
        ));
        assert_eq!(a.amount(), i64::MAX);
    }

    #[test]
    fn take_more_than_held_fails_without_change() {
        let mut a = GoodContainer::new(test_good("apple"), 3).unwrap();
        let err = a.take(4).unwrap_err();
        assert_eq!(
            err,
            DomainError::insufficient_stock(test_good("apple").id().clone(), 4, 3)
        );
        assert_eq!(a.amount(), 3);
    }

    #[test]
    fn take_negative_is_rejected() {
        let mut a = GoodContainer::new(test_good("apple"), 3).unwrap();
        assert!(matches!(a.take(-1), Err(DomainError::Validation(_))));
        assert_eq!(a.amount(), 3);
    }

    #[test]
    fn take_everything_leaves_zero() {
        let mut a = GoodContainer::new(test_good("apple"), 3).unwrap();
        a.take(3).unwrap();
        assert_eq!(a.amount(), 0);
    }
}
