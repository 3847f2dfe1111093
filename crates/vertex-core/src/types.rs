//! # Domain Types
//!
//! Input and output types for the Vertex analytics pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  INPUT (immutable, supplied externally)                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────────┐         │
//! │  │   Seller     │  │   Product    │  │  PurchaseRecord    │         │
//! │  │ ──────────── │  │ ──────────── │  │ ────────────────── │         │
//! │  │ id           │  │ sku          │  │ seller_id          │         │
//! │  │ first_name   │  │ name         │  │ total_amount?      │         │
//! │  │ last_name    │  │ purchase_    │  │ items: [           │         │
//! │  └──────────────┘  │   price?     │  │   PurchaseItem ]   │         │
//! │                    └──────────────┘  └────────────────────┘         │
//! │                                                                     │
//! │  OUTPUT (one per seller, profit-descending order)                   │
//! │  ┌────────────────────────────────────────────────┐                 │
//! │  │  SellerReport                                  │                 │
//! │  │  seller_id, name, revenue, profit,             │                 │
//! │  │  sales_count, top_products, bonus              │                 │
//! │  └────────────────────────────────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Opaque Fields Pattern
//! Item and product shapes vary by upstream feed. Fields the core does not
//! interpret are captured in a flattened `extra` map so injected revenue
//! strategies can still read them. The core itself touches only `sku`,
//! `quantity`, and `purchase_price`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

// =============================================================================
// Seller
// =============================================================================

/// A seller whose performance is being analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    /// Unique seller identifier.
    pub id: String,

    /// Seller's first name.
    pub first_name: String,

    /// Seller's last name.
    pub last_name: String,
}

impl Seller {
    /// Returns the display name, derived as `first_name + " " + last_name`.
    ///
    /// Derived once when the ledger is created and never recomputed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, keyed by SKU.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - the unique product identifier.
    pub sku: String,

    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Unit cost to the business. Missing price is treated as 0.
    #[serde(default)]
    pub purchase_price: Option<f64>,

    /// Feed-specific fields the core does not interpret.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One purchase transaction attributed to a seller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    /// Seller the purchase is attributed to.
    ///
    /// A record whose seller is unknown is skipped whole, silently.
    pub seller_id: String,

    /// Receipt-level total, when the feed provides one.
    ///
    /// When present and finite it overrides the per-item revenue sum for
    /// this record's revenue contribution (never for profit).
    #[serde(default)]
    pub total_amount: Option<f64>,

    /// Line items of the purchase. Missing deserializes to empty.
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

/// One line item of a purchase.
///
/// Beyond `sku` and `quantity` the shape is opaque to the core: pricing
/// fields are read only by the injected revenue strategy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseItem {
    /// SKU of the product sold.
    pub sku: String,

    /// Units sold. Missing or non-finite coerces to 0.
    #[serde(default)]
    pub quantity: Option<f64>,

    /// Unit sale price, as interpreted by the revenue strategy.
    #[serde(default)]
    pub sale_price: Option<f64>,

    /// Fractional discount (0.1 = 10% off), as interpreted by the revenue
    /// strategy.
    #[serde(default)]
    pub discount: Option<f64>,

    /// Feed-specific fields the core does not interpret.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Sales Dataset
// =============================================================================

/// The three input collections consumed by one analysis run.
///
/// All three must be non-empty; validation rejects the dataset otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesData {
    /// Sellers to report on. One output record is produced per seller.
    pub sellers: Vec<Seller>,

    /// Product catalog, used to resolve item cost by SKU.
    pub products: Vec<Product>,

    /// Purchase transactions to aggregate.
    pub purchase_records: Vec<PurchaseRecord>,
}

// =============================================================================
// Output Types
// =============================================================================

/// A SKU with its cumulative quantity sold, as ranked in `top_products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    /// SKU of the product.
    pub sku: String,

    /// Cumulative units sold by this seller.
    pub quantity: i64,
}

/// The per-seller analysis result.
///
/// Monetary fields (`revenue`, `profit`, `bonus`) are rounded to 2 decimal
/// places at projection; everything upstream keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SellerReport {
    /// Seller identifier, as supplied in the input.
    pub seller_id: String,

    /// Display name derived from the seller's first and last name.
    pub name: String,

    /// Total revenue attributed to the seller.
    pub revenue: f64,

    /// Total profit (revenue minus item cost). May be negative.
    pub profit: f64,

    /// Number of purchase records matched to this seller.
    pub sales_count: u64,

    /// Up to 10 products, ranked by quantity sold descending.
    pub top_products: Vec<TopProduct>,

    /// Performance bonus assigned during ranking.
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let seller = Seller {
            id: "s1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(seller.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_product_deserializes_with_missing_price() {
        let product: Product = serde_json::from_str(r#"{"sku":"p1"}"#).unwrap();
        assert_eq!(product.sku, "p1");
        assert!(product.purchase_price.is_none());
        assert!(product.extra.is_empty());
    }

    #[test]
    fn test_item_preserves_unknown_fields() {
        let raw = r#"{"sku":"p1","quantity":2,"sale_price":20,"warehouse":"EAST"}"#;
        let item: PurchaseItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.quantity, Some(2.0));
        assert_eq!(item.extra["warehouse"], "EAST");
    }

    #[test]
    fn test_record_defaults_missing_items_to_empty() {
        let record: PurchaseRecord = serde_json::from_str(r#"{"seller_id":"s1"}"#).unwrap();
        assert!(record.items.is_empty());
        assert!(record.total_amount.is_none());
    }
}
