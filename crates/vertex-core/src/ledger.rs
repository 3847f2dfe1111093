//! # Seller Ledger Module
//!
//! The mutable per-seller accumulator used during one analysis run.
//!
//! ## Ledger Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Ledger Lifecycle                              │
//! │                                                                     │
//! │  1. CREATE (one batch, before any record is processed)              │
//! │     └── SellerLedger::new(seller)  - name derived once              │
//! │                                                                     │
//! │  2. ACCUMULATE (record-processing phase only)                       │
//! │     └── record_sale()      - sales_count += 1                       │
//! │     └── add_revenue(v)     - monotonic increase                     │
//! │     └── add_profit(v)      - signed, may go negative                │
//! │     └── add_quantity(sku)  - per-SKU counter, entries never removed │
//! │                                                                     │
//! │  3. FREEZE (ranking phase)                                          │
//! │     └── assign_bonus(v)         - written exactly once              │
//! │     └── finalize_top_products() - written exactly once              │
//! │                                                                     │
//! │  4. PROJECT into an immutable SellerReport                          │
//! │                                                                     │
//! │  Ledgers are private to one run. There is no cross-run state.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::numeric::round2;
use crate::types::{Seller, SellerReport, TopProduct};

// =============================================================================
// SKU Counter
// =============================================================================

/// Per-SKU quantity counter that remembers first-insertion order.
///
/// Top-product ranking breaks quantity ties by the order in which SKUs were
/// first seen, so a plain `HashMap` (arbitrary iteration order) cannot back
/// it. Quantities live in the map; `order` records first insertion.
#[derive(Debug, Clone, Default)]
pub(crate) struct SkuCounter {
    /// SKUs in first-insertion order.
    order: Vec<String>,
    /// Cumulative quantity per SKU. Entries are never removed.
    counts: HashMap<String, i64>,
}

impl SkuCounter {
    /// Adds `quantity` units to `sku`, inserting the SKU on first sight.
    ///
    /// A zero quantity still creates the entry: the SKU was sold, the feed
    /// just failed to say how many units.
    pub(crate) fn add(&mut self, sku: &str, quantity: i64) {
        match self.counts.get_mut(sku) {
            Some(total) => *total += quantity,
            None => {
                self.order.push(sku.to_string());
                self.counts.insert(sku.to_string(), quantity);
            }
        }
    }

    /// Returns the `limit` highest-quantity SKUs.
    ///
    /// Stable sort over insertion order: equal quantities rank in the order
    /// the SKUs were first seen.
    pub(crate) fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .order
            .iter()
            .map(|sku| TopProduct {
                sku: sku.clone(),
                quantity: self.counts[sku],
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }

    /// True when no SKU has ever been recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// Seller Ledger
// =============================================================================

/// Mutable per-seller accumulator for one analysis run.
///
/// Mutation is crate-internal; injected bonus strategies receive a shared
/// reference and read the accumulated state through the accessor methods.
#[derive(Debug, Clone)]
pub struct SellerLedger {
    /// Seller id, as supplied in the input.
    id: String,
    /// Display name, derived once at creation.
    name: String,
    /// Total revenue. Monotonically increased, never decreased.
    revenue: f64,
    /// Total profit. Signed; may go negative.
    profit: f64,
    /// Number of purchase records matched to this seller.
    sales_count: u64,
    /// Cumulative quantity per SKU sold.
    products_sold: SkuCounter,
    /// Bonus, written exactly once during ranking. `None` until then.
    bonus: Option<f64>,
    /// Top products, written exactly once during ranking.
    top_products: Vec<TopProduct>,
}

impl SellerLedger {
    /// Creates a fresh ledger for `seller` with all accumulators at zero.
    pub(crate) fn new(seller: &Seller) -> Self {
        SellerLedger {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: SkuCounter::default(),
            bonus: None,
            top_products: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors (what bonus strategies see)
    // -------------------------------------------------------------------------

    /// Seller id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name derived from the seller's first and last name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Revenue accumulated so far.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Profit accumulated so far.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Number of matched purchase records.
    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// Cumulative quantity sold for `sku`, 0 if never sold.
    pub fn quantity_sold(&self, sku: &str) -> i64 {
        self.products_sold.counts.get(sku).copied().unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Accumulation (engine only)
    // -------------------------------------------------------------------------

    /// Counts one matched purchase record.
    pub(crate) fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Adds a record's revenue contribution.
    pub(crate) fn add_revenue(&mut self, amount: f64) {
        self.revenue += amount;
    }

    /// Adds a record's profit contribution.
    pub(crate) fn add_profit(&mut self, amount: f64) {
        self.profit += amount;
    }

    /// Adds sold units of `sku` to the per-SKU counter.
    pub(crate) fn add_quantity(&mut self, sku: &str, quantity: i64) {
        self.products_sold.add(sku, quantity);
    }

    // -------------------------------------------------------------------------
    // Freeze (ranking phase only)
    // -------------------------------------------------------------------------

    /// Stores the assigned bonus. Called exactly once per run.
    pub(crate) fn assign_bonus(&mut self, amount: f64) {
        self.bonus = Some(amount);
    }

    /// Computes and stores the top products. Called exactly once per run.
    pub(crate) fn finalize_top_products(&mut self, limit: usize) {
        self.top_products = if self.products_sold.is_empty() {
            Vec::new()
        } else {
            self.products_sold.top(limit)
        };
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    /// Projects the frozen ledger into the public output shape.
    ///
    /// Monetary fields are rounded here, at the boundary; an unassigned
    /// bonus defaults to 0.
    pub(crate) fn into_report(self) -> SellerReport {
        SellerReport {
            seller_id: self.id,
            name: self.name,
            revenue: round2(self.revenue),
            profit: round2(self.profit),
            sales_count: self.sales_count,
            top_products: self.top_products,
            bonus: round2(self.bonus.unwrap_or(0.0)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Seller {
        Seller {
            id: "s1".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        }
    }

    #[test]
    fn test_new_ledger_is_zeroed() {
        let ledger = SellerLedger::new(&seller());
        assert_eq!(ledger.id(), "s1");
        assert_eq!(ledger.name(), "Grace Hopper");
        assert_eq!(ledger.revenue(), 0.0);
        assert_eq!(ledger.profit(), 0.0);
        assert_eq!(ledger.sales_count(), 0);
    }

    #[test]
    fn test_accumulation() {
        let mut ledger = SellerLedger::new(&seller());
        ledger.record_sale();
        ledger.record_sale();
        ledger.add_revenue(40.0);
        ledger.add_profit(-5.0);
        ledger.add_quantity("p1", 2);
        ledger.add_quantity("p1", 3);

        assert_eq!(ledger.sales_count(), 2);
        assert_eq!(ledger.revenue(), 40.0);
        assert_eq!(ledger.profit(), -5.0);
        assert_eq!(ledger.quantity_sold("p1"), 5);
        assert_eq!(ledger.quantity_sold("other"), 0);
    }

    #[test]
    fn test_sku_counter_ranks_by_quantity_descending() {
        let mut counter = SkuCounter::default();
        counter.add("a", 1);
        counter.add("b", 5);
        counter.add("c", 3);

        let top = counter.top(10);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sku_counter_breaks_ties_by_insertion_order() {
        let mut counter = SkuCounter::default();
        counter.add("late", 2);
        counter.add("early", 2);
        counter.add("late", 0); // re-touching does not reorder

        let top = counter.top(10);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["late", "early"]);
    }

    #[test]
    fn test_sku_counter_truncates_to_limit() {
        let mut counter = SkuCounter::default();
        for i in 0..15 {
            counter.add(&format!("sku-{i}"), i);
        }

        let top = counter.top(10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].quantity, 14);
        assert_eq!(top[9].quantity, 5);
    }

    #[test]
    fn test_zero_quantity_still_creates_entry() {
        let mut counter = SkuCounter::default();
        counter.add("p1", 0);
        assert!(!counter.is_empty());
        assert_eq!(counter.top(10), vec![TopProduct { sku: "p1".to_string(), quantity: 0 }]);
    }

    #[test]
    fn test_into_report_rounds_and_defaults_bonus() {
        let mut ledger = SellerLedger::new(&seller());
        ledger.add_revenue(10.0 / 3.0);
        ledger.add_profit(1.0 / 3.0);
        ledger.finalize_top_products(10);

        let report = ledger.into_report();
        assert_eq!(report.revenue, 3.33);
        assert_eq!(report.profit, 0.33);
        assert_eq!(report.bonus, 0.0);
        assert!(report.top_products.is_empty());
    }
}
