//! # Error Types
//!
//! Domain-specific error types for vertex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  AnalyticsError   - fatal pipeline errors                           │
//! │  ├── InvalidInput    - a required collection is missing or empty    │
//! │  ├── MissingStrategy - a strategy was not supplied in the options   │
//! │  └── Strategy        - an injected strategy failed mid-run          │
//! │                                                                     │
//! │  StrategyError    - raised inside a strategy implementation and     │
//! │                     propagated unchanged through the pipeline       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fatal errors are the *only* errors the pipeline produces. Malformed
//! records, unknown sellers, and unknown SKUs are tolerated silently by
//! design; see the engine module for the tolerant-skip policy.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, strategy name)
//! 3. Errors are enum variants, never String
//! 4. No partial results: a fatal error means nothing was produced

use thiserror::Error;

// =============================================================================
// Analytics Error
// =============================================================================

/// Fatal analytics pipeline errors.
///
/// Raised either during up-front validation (before any record is touched)
/// or when an injected strategy fails mid-run. In both cases the run produces
/// no output at all.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A required input collection is missing or empty.
    ///
    /// ## When This Occurs
    /// - `sellers`, `products`, or `purchase_records` is an empty sequence
    /// - The dataset was assembled upstream with a collection left out
    #[error("invalid input: {field} must be a non-empty collection")]
    InvalidInput { field: &'static str },

    /// A required strategy was not supplied in the options.
    ///
    /// Both the revenue and the bonus strategy are mandatory; the core has
    /// no built-in fallback formula.
    #[error("missing strategy: options.{name} is required")]
    MissingStrategy { name: &'static str },

    /// An injected strategy failed while the run was in progress.
    ///
    /// The core never catches strategy failures: the whole run aborts and
    /// the error is propagated to the caller unchanged.
    #[error("strategy execution failed: {0}")]
    Strategy(#[from] StrategyError),
}

// =============================================================================
// Strategy Error
// =============================================================================

/// An error raised inside an injected strategy implementation.
///
/// Strategies are treated as external collaborators: the core invokes them
/// and propagates whatever they raise, attaching no interpretation of its
/// own beyond the strategy name.
#[derive(Debug, Error)]
#[error("{strategy}: {message}")]
pub struct StrategyError {
    /// Which strategy failed (`"revenue"` or `"bonus"` for the built-ins).
    pub strategy: &'static str,
    /// Human-readable failure description supplied by the strategy.
    pub message: String,
}

impl StrategyError {
    /// Creates a strategy error with the given origin and message.
    pub fn new(strategy: &'static str, message: impl Into<String>) -> Self {
        StrategyError {
            strategy,
            message: message.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalyticsError.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

// =============================================================================
// Unit Tests
// =============================================================================
