//! # Validation Module
//!
//! Fail-fast validation of the dataset and the strategy options.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Validation Boundary                              │
//! │                                                                     │
//! │  analyze_sales_data(data, options)                                  │
//! │       │                                                             │
//! │       ├── validate_dataset(data)      - three collection checks     │
//! │       ├── validate_options(options)   - both strategy slots filled  │
//! │       │                                                             │
//! │       └── ONLY THEN does aggregation begin                          │
//! │                                                                     │
//! │  Fail-fast, no side effects on failure: a rejected run never        │
//! │  creates a ledger, never calls a strategy, never produces partial   │
//! │  output.                                                            │
//! │                                                                     │
//! │  Note what validation does NOT do: individual records and items     │
//! │  are never validated. Malformed fields coerce to 0 downstream;      │
//! │  unknown sellers and SKUs are skipped silently.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::strategy::{AnalyzeOptions, BonusStrategy, RevenueStrategy};
use crate::types::SalesData;

// =============================================================================
// Dataset Validation
// =============================================================================

/// Checks that all three input collections are present and non-empty.
///
/// ## Rules
/// - `sellers` must be non-empty
/// - `products` must be non-empty
/// - `purchase_records` must be non-empty
pub fn validate_dataset(data: &SalesData) -> AnalyticsResult<()> {
    if data.sellers.is_empty() {
        return Err(AnalyticsError::InvalidInput { field: "sellers" });
    }

    if data.products.is_empty() {
        return Err(AnalyticsError::InvalidInput { field: "products" });
    }

    if data.purchase_records.is_empty() {
        return Err(AnalyticsError::InvalidInput {
            field: "purchase_records",
        });
    }

    Ok(())
}

// =============================================================================
// Options Validation
// =============================================================================

/// Checks that both strategies are supplied and hands them to the engine.
///
/// Returning the borrowed trait objects keeps the engine free of a second
/// unwrap: a validated options bundle is a usable one.
pub(crate) fn validate_options(
    options: &AnalyzeOptions,
) -> AnalyticsResult<(&dyn RevenueStrategy, &dyn BonusStrategy)> {
    let revenue = options
        .revenue
        .as_deref()
        .ok_or(AnalyticsError::MissingStrategy { name: "revenue" })?;

    let bonus = options
        .bonus
        .as_deref()
        .ok_or(AnalyticsError::MissingStrategy { name: "bonus" })?;

    Ok((revenue, bonus))
}

// =============================================================================
// Unit Tests
// =============================================================================
