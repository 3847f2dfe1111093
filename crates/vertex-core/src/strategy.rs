//! # Strategy Module
//!
//! The injection seam for pricing rules.
//!
//! ## Why Strategies?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Strategy Injection                               │
//! │                                                                     │
//! │  The core orchestrates aggregation; it does NOT define pricing.     │
//! │                                                                     │
//! │     ┌──────────────────┐          ┌──────────────────┐              │
//! │     │ RevenueStrategy  │          │  BonusStrategy   │              │
//! │     │ (item, product?) │          │ (rank, total,    │              │
//! │     │     -> f64       │          │  ledger) -> f64  │              │
//! │     └────────┬─────────┘          └────────┬─────────┘              │
//! │              │ called per item             │ called per seller      │
//! │              ▼                             ▼                        │
//! │     ┌─────────────────────────────────────────────┐                 │
//! │     │            Aggregation Engine               │                 │
//! │     │   coerces non-finite results to 0,          │                 │
//! │     │   propagates strategy errors unchanged      │                 │
//! │     └─────────────────────────────────────────────┘                 │
//! │                                                                     │
//! │  The engine must be correct for ANY conforming strategy, not just   │
//! │  the reference implementations shipped below.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain closures implement both traits, so tests and callers can inject
//! one-off formulas without declaring a type.

use crate::error::StrategyError;
use crate::ledger::SellerLedger;
use crate::numeric::coerce;
use crate::types::{Product, PurchaseItem};

// =============================================================================
// Strategy Traits
// =============================================================================

/// Computes the revenue contribution of a single line item.
///
/// `product` is `None` when the item's SKU is not in the catalog; the item
/// is still processed (cost falls back to 0, quantity still counts).
///
/// An `Err` aborts the whole analysis run.
pub trait RevenueStrategy {
    /// Returns the revenue for one item.
    fn revenue(&self, item: &PurchaseItem, product: Option<&Product>)
        -> Result<f64, StrategyError>;
}

/// Computes the bonus for a seller given their profit rank.
///
/// `rank` is zero-based after sorting by profit descending; `total` is the
/// number of sellers in the run. The ledger snapshot reflects the fully
/// accumulated state (bonus and top products not yet assigned).
///
/// An `Err` aborts the whole analysis run.
pub trait BonusStrategy {
    /// Returns the bonus amount for the seller at `rank` of `total`.
    fn bonus(&self, rank: usize, total: usize, ledger: &SellerLedger)
        -> Result<f64, StrategyError>;
}

impl core::fmt::Debug for dyn RevenueStrategy + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dyn RevenueStrategy")
    }
}

impl core::fmt::Debug for dyn BonusStrategy + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dyn BonusStrategy")
    }
}

/// Closures are revenue strategies.
impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseItem, Option<&Product>) -> Result<f64, StrategyError>,
{
    fn revenue(
        &self,
        item: &PurchaseItem,
        product: Option<&Product>,
    ) -> Result<f64, StrategyError> {
        self(item, product)
    }
}

/// Closures are bonus strategies.
impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerLedger) -> Result<f64, StrategyError>,
{
    fn bonus(
        &self,
        rank: usize,
        total: usize,
        ledger: &SellerLedger,
    ) -> Result<f64, StrategyError> {
        self(rank, total, ledger)
    }
}

// =============================================================================
// Reference Revenue Strategy
// =============================================================================

/// The reference revenue formula: `sale_price * quantity * (1 - discount)`.
///
/// All three fields coerce to 0 when missing or non-finite, so a bare item
/// simply contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceRevenue;

impl RevenueStrategy for ReferenceRevenue {
    fn revenue(
        &self,
        item: &PurchaseItem,
        _product: Option<&Product>,
    ) -> Result<f64, StrategyError> {
        let price = coerce(item.sale_price);
        let quantity = coerce(item.quantity);
        let discount_factor = 1.0 - coerce(item.discount);
        Ok(price * quantity * discount_factor)
    }
}

// =============================================================================
// Reference Bonus Strategy
// =============================================================================

/// The reference tiered bonus policy.
///
/// ## Tiers
/// ```text
/// rank 0          → 15% of profit
/// ranks 1-2       → 10% of profit
/// last rank (n-1) →  0%            (bottom seller gets nothing)
/// everyone else   →  5% of profit
/// ```
///
/// The checks are evaluated top to bottom: with a single seller, rank 0 is
/// also the last rank, and the rank-0 tier wins. This precedence is part of
/// the policy's contract and must not be "simplified".
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceBonus;

impl BonusStrategy for ReferenceBonus {
    fn bonus(
        &self,
        rank: usize,
        total: usize,
        ledger: &SellerLedger,
    ) -> Result<f64, StrategyError> {
        let profit = ledger.profit();
        let amount = if rank == 0 {
            profit * 0.15
        } else if rank == 1 || rank == 2 {
            profit * 0.10
        } else if rank + 1 == total {
            0.0
        } else {
            profit * 0.05
        };
        Ok(amount)
    }
}

// =============================================================================
// Analyze Options
// =============================================================================

/// Strategy bundle for one analysis run.
///
/// Both strategies are mandatory; validation rejects options with either
/// slot unfilled before any aggregation begins.
///
/// ## Example
/// ```rust
/// use vertex_core::strategy::AnalyzeOptions;
///
/// let options = AnalyzeOptions::reference();
/// ```
#[derive(Default)]
pub struct AnalyzeOptions {
    /// Revenue strategy, invoked once per line item.
    pub(crate) revenue: Option<Box<dyn RevenueStrategy>>,
    /// Bonus strategy, invoked once per seller after ranking.
    pub(crate) bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalyzeOptions {
    /// Creates empty options. Both strategies must be supplied before use.
    pub fn new() -> Self {
        AnalyzeOptions {
            revenue: None,
            bonus: None,
        }
    }

    /// Options wired with the reference revenue and bonus strategies.
    pub fn reference() -> Self {
        AnalyzeOptions::new()
            .with_revenue(ReferenceRevenue)
            .with_bonus(ReferenceBonus)
    }

    /// Sets the revenue strategy.
    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(strategy));
        self
    }

    /// Sets the bonus strategy.
    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(strategy));
        self
    }
}

impl std::fmt::Debug for AnalyzeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeOptions")
            .field("revenue", &self.revenue.as_ref().map(|_| "<strategy>"))
            .field("bonus", &self.bonus.as_ref().map(|_| "<strategy>"))
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;

    fn item(quantity: f64, sale_price: f64, discount: f64) -> PurchaseItem {
        PurchaseItem {
            sku: "p1".to_string(),
            quantity: Some(quantity),
            sale_price: Some(sale_price),
            discount: Some(discount),
            extra: Default::default(),
        }
    }

    fn ledger_with_profit(profit: f64) -> SellerLedger {
        let seller = Seller {
            id: "s1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };
        let mut ledger = SellerLedger::new(&seller);
        ledger.add_profit(profit);
        ledger
    }

    #[test]
    fn test_reference_revenue_basic() {
        let revenue = ReferenceRevenue.revenue(&item(2.0, 20.0, 0.0), None).unwrap();
        assert_eq!(revenue, 40.0);
    }

    #[test]
    fn test_reference_revenue_applies_discount() {
        let revenue = ReferenceRevenue.revenue(&item(4.0, 10.0, 0.25), None).unwrap();
        assert_eq!(revenue, 30.0);
    }

    #[test]
    fn test_reference_revenue_missing_fields_contribute_nothing() {
        let bare = PurchaseItem {
            sku: "p1".to_string(),
            quantity: None,
            sale_price: None,
            discount: None,
            extra: Default::default(),
        };
        assert_eq!(ReferenceRevenue.revenue(&bare, None).unwrap(), 0.0);
    }

    #[test]
    fn test_reference_bonus_tiers() {
        let ledger = ledger_with_profit(100.0);

        assert_eq!(ReferenceBonus.bonus(0, 5, &ledger).unwrap(), 15.0);
        assert_eq!(ReferenceBonus.bonus(1, 5, &ledger).unwrap(), 10.0);
        assert_eq!(ReferenceBonus.bonus(2, 5, &ledger).unwrap(), 10.0);
        assert_eq!(ReferenceBonus.bonus(3, 5, &ledger).unwrap(), 5.0);
        assert_eq!(ReferenceBonus.bonus(4, 5, &ledger).unwrap(), 0.0);
    }

    /// With exactly one seller, rank 0 is also the last rank. The rank-0
    /// tier is checked first and wins.
    #[test]
    fn test_reference_bonus_single_seller_gets_top_tier() {
        let ledger = ledger_with_profit(20.0);
        assert_eq!(ReferenceBonus.bonus(0, 1, &ledger).unwrap(), 3.0);
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let flat = |_: &PurchaseItem, _: Option<&Product>| -> Result<f64, StrategyError> {
            Ok(7.0)
        };
        let revenue = flat.revenue(&item(1.0, 99.0, 0.0), None).unwrap();
        assert_eq!(revenue, 7.0);
    }
}
