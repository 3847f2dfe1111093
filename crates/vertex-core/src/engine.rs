//! # Aggregation Engine
//!
//! The analytics pipeline behind [`analyze_sales_data`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    analyze_sales_data(data, options)                │
//! │                                                                     │
//! │  1. VALIDATE                                                        │
//! │     └── three non-empty collections, both strategies supplied       │
//! │                                                                     │
//! │  2. INDEX                                                           │
//! │     └── seller id → ledger, SKU → product (last-wins on dupes)      │
//! │                                                                     │
//! │  3. ACCUMULATE (per record, in input order)                         │
//! │     └── unknown seller → skip record silently                       │
//! │     └── per item: revenue = strategy(item, product?)                │
//! │                   cost    = purchase_price × quantity               │
//! │     └── revenue: total_amount if present, else item subtotal        │
//! │     └── profit:  always item-derived, never total_amount            │
//! │                                                                     │
//! │  4. RANK + BONUS                                                    │
//! │     └── stable sort by profit descending                            │
//! │     └── bonus = strategy(rank, total, ledger), rounded to 2dp       │
//! │                                                                     │
//! │  5. TOP PRODUCTS                                                    │
//! │     └── 10 highest-quantity SKUs, ties by first-insertion order     │
//! │                                                                     │
//! │  6. PROJECT                                                         │
//! │     └── one SellerReport per seller, monetary fields rounded        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is a fresh, independent computation: ledgers are created in
//! one batch at the start of the run and never survive it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::AnalyticsResult;
use crate::ledger::SellerLedger;
use crate::numeric::{coerce, coerce_finite, coerce_quantity, round2};
use crate::strategy::{AnalyzeOptions, BonusStrategy, RevenueStrategy};
use crate::types::{Product, PurchaseRecord, SalesData, Seller, SellerReport};
use crate::validation;
use crate::TOP_PRODUCTS_LIMIT;

// =============================================================================
// Entry Point
// =============================================================================

/// Computes per-seller sales analytics for one dataset.
///
/// Returns one [`SellerReport`] per input seller, ordered by profit
/// descending, or a fatal error per the taxonomy in [`crate::error`].
///
/// ## Example
/// ```rust
/// use vertex_core::{analyze_sales_data, AnalyzeOptions};
/// use vertex_core::types::{Product, PurchaseItem, PurchaseRecord, SalesData, Seller};
///
/// let data = SalesData {
///     sellers: vec![Seller {
///         id: "s1".into(),
///         first_name: "A".into(),
///         last_name: "B".into(),
///     }],
///     products: vec![Product {
///         sku: "p1".into(),
///         name: None,
///         purchase_price: Some(10.0),
///         extra: Default::default(),
///     }],
///     purchase_records: vec![PurchaseRecord {
///         seller_id: "s1".into(),
///         total_amount: None,
///         items: vec![PurchaseItem {
///             sku: "p1".into(),
///             quantity: Some(2.0),
///             sale_price: Some(20.0),
///             discount: Some(0.0),
///             extra: Default::default(),
///         }],
///     }],
/// };
///
/// let reports = analyze_sales_data(&data, &AnalyzeOptions::reference()).unwrap();
/// assert_eq!(reports[0].revenue, 40.0);
/// assert_eq!(reports[0].profit, 20.0);
/// ```
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalyzeOptions,
) -> AnalyticsResult<Vec<SellerReport>> {
    validation::validate_dataset(data)?;
    let (revenue_strategy, bonus_strategy) = validation::validate_options(options)?;

    let (mut ledgers, seller_index) = build_ledgers(&data.sellers);
    let product_index = index_products(&data.products);

    accumulate(
        &mut ledgers,
        &seller_index,
        &product_index,
        &data.purchase_records,
        revenue_strategy,
    )?;
    rank_and_assign_bonuses(&mut ledgers, bonus_strategy)?;
    select_top_products(&mut ledgers);

    debug!(
        sellers = ledgers.len(),
        records = data.purchase_records.len(),
        "analysis complete"
    );

    Ok(ledgers.into_iter().map(SellerLedger::into_report).collect())
}

// =============================================================================
// Indexing
// =============================================================================

/// Creates one ledger per seller plus an id → ledger-position index.
///
/// Duplicate ids follow keyed-map construction semantics: the last seller
/// wins the entry, the first occurrence keeps the position.
fn build_ledgers(sellers: &[Seller]) -> (Vec<SellerLedger>, HashMap<&str, usize>) {
    let mut ledgers = Vec::with_capacity(sellers.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(sellers.len());

    for seller in sellers {
        match index.get(seller.id.as_str()) {
            Some(&position) => ledgers[position] = SellerLedger::new(seller),
            None => {
                index.insert(seller.id.as_str(), ledgers.len());
                ledgers.push(SellerLedger::new(seller));
            }
        }
    }

    (ledgers, index)
}

/// Indexes the catalog by SKU. Duplicate SKUs: last wins.
fn index_products(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        index.insert(product.sku.as_str(), product);
    }
    index
}

// =============================================================================
// Accumulation
// =============================================================================

/// Folds every purchase record into the ledgers, in input order.
fn accumulate(
    ledgers: &mut [SellerLedger],
    seller_index: &HashMap<&str, usize>,
    product_index: &HashMap<&str, &Product>,
    records: &[PurchaseRecord],
    revenue_strategy: &dyn RevenueStrategy,
) -> AnalyticsResult<()> {
    for record in records {
        let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
            // Tolerant-skip: the record touches no ledger at all.
            debug!(seller_id = %record.seller_id, "skipping record for unknown seller");
            continue;
        };
        let ledger = &mut ledgers[position];
        ledger.record_sale();

        let mut item_revenue_subtotal = 0.0;
        let mut item_profit_subtotal = 0.0;

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).copied();
            if product.is_none() {
                trace!(sku = %item.sku, "unknown SKU, cost defaults to 0");
            }

            let cost = coerce(product.and_then(|p| p.purchase_price)) * coerce(item.quantity);
            let item_revenue = coerce_finite(revenue_strategy.revenue(item, product)?);

            item_revenue_subtotal += item_revenue;
            item_profit_subtotal += item_revenue - cost;
            ledger.add_quantity(&item.sku, coerce_quantity(item.quantity));
        }

        // A receipt-level total overrides the item subtotal for revenue,
        // per record. Profit is always item-derived.
        match record.total_amount {
            Some(total) if total.is_finite() => ledger.add_revenue(total),
            _ => ledger.add_revenue(item_revenue_subtotal),
        }
        ledger.add_profit(item_profit_subtotal);
    }

    Ok(())
}

// =============================================================================
// Ranking & Bonus Assignment
// =============================================================================

/// Sorts ledgers by profit descending and assigns each seller's bonus.
///
/// The sort is stable: equal-profit sellers keep their original input
/// order. Bonus tiers depend on rank, so this ordering is load-bearing.
fn rank_and_assign_bonuses(
    ledgers: &mut [SellerLedger],
    bonus_strategy: &dyn BonusStrategy,
) -> AnalyticsResult<()> {
    ledgers.sort_by(|a, b| b.profit().total_cmp(&a.profit()));

    let total = ledgers.len();
    for (rank, ledger) in ledgers.iter_mut().enumerate() {
        let raw = bonus_strategy.bonus(rank, total, ledger)?;
        ledger.assign_bonus(round2(coerce_finite(raw)));
    }

    Ok(())
}

// =============================================================================
// Top Product Selection
// =============================================================================

/// Freezes each ledger's top products.
fn select_top_products(ledgers: &mut [SellerLedger]) {
    for ledger in ledgers.iter_mut() {
        ledger.finalize_top_products(TOP_PRODUCTS_LIMIT);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
