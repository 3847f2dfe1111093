//! # vertex-core: Pure Sales Analytics for Vertex
//!
//! This crate is the **heart** of Vertex Analytics. It computes per-seller
//! performance reports from in-memory sales data as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vertex Analytics Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Embedding Application                          │   │
//! │  │    feeds sellers/products/records, renders SellerReports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vertex-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  numeric  │  │  ledger   │  │  engine   │  │   │
//! │  │   │  Seller   │  │  coerce   │  │  Seller   │  │ analyze_  │  │   │
//! │  │   │  Product  │  │  round2   │  │  Ledger   │  │ sales_data│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ strategy  │  │ validation│                                 │   │
//! │  │   │  Revenue  │  │ fail-fast │                                 │   │
//! │  │   │  Bonus    │  │  checks   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Seller, Product, PurchaseRecord, SellerReport)
//! - [`numeric`] - Tolerant numeric coercion and 2-decimal rounding
//! - [`error`] - Analytics error taxonomy
//! - [`strategy`] - Injected revenue/bonus strategies and the options bundle
//! - [`validation`] - Fail-fast input validation
//! - [`ledger`] - The per-seller accumulator
//! - [`engine`] - The aggregation pipeline
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same inputs and strategies = same output, every run
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Injected Pricing**: Revenue and bonus formulas are supplied by the
//!    caller; the core orchestrates them, it never defines them
//! 4. **Tolerant Inputs**: Malformed fields coerce to 0, unknown sellers and
//!    SKUs are skipped; only missing collections and strategies are fatal
//!
//! ## Example Usage
//!
//! ```rust
//! use vertex_core::{analyze_sales_data, AnalyzeOptions};
//! use vertex_core::types::SalesData;
//!
//! let data: SalesData = serde_json::from_str(r#"{
//!     "sellers": [{"id": "s1", "first_name": "A", "last_name": "B"}],
//!     "products": [{"sku": "p1", "purchase_price": 10}],
//!     "purchase_records": [{
//!         "seller_id": "s1",
//!         "items": [{"sku": "p1", "quantity": 2, "sale_price": 20, "discount": 0}]
//!     }]
//! }"#).unwrap();
//!
//! let reports = analyze_sales_data(&data, &AnalyzeOptions::reference()).unwrap();
//! assert_eq!(reports[0].name, "A B");
//! assert_eq!(reports[0].bonus, 3.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod ledger;
pub mod numeric;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vertex_core::AnalyzeOptions` instead of
// `use vertex_core::strategy::AnalyzeOptions`

pub use engine::analyze_sales_data;
pub use error::{AnalyticsError, AnalyticsResult, StrategyError};
pub use ledger::SellerLedger;
pub use strategy::{AnalyzeOptions, BonusStrategy, RevenueStrategy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of products listed in a seller's `top_products`.
///
/// ## Business Reason
/// Reports are rendered as compact leaderboards; ten entries is the agreed
/// cut-off across every Vertex surface. The full per-SKU quantity map never
/// leaves the engine.
pub const TOP_PRODUCTS_LIMIT: usize = 10;
