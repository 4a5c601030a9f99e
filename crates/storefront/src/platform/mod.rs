//! Capability traits for the hosted store platform.
//!
//! # Architecture
//!
//! - The platform is the source of truth - NO local sync, direct calls
//! - This crate owns the trait seams; concrete adapters (HTTP clients,
//!   SDK bindings) live with the host application
//! - Replies must not be assumed cache-coherent between calls
//!
//! # Capabilities
//!
//! ## Availability Oracle
//! - One query per option combination
//! - Reports whether that combination is purchasable right now
//!
//! ## Cart Store
//! - Accepts line items, returns current cart contents
//! - Assigns its own line IDs; this layer discards them on display
//!
//! # Example
//!
//! ```rust,ignore
//! use driftwood_storefront::platform::{AvailabilityOracle, CartStore};
//!
//! let report = oracle.check_availability(&product.id, &combination).await?;
//! if report.available_for_purchase {
//!     store.add_line_items(vec![line]).await?;
//! }
//! ```

pub mod types;

use async_trait::async_trait;
use driftwood_core::ProductId;
use thiserror::Error;

use crate::types::{CartLineItem, OptionCombination};

pub use types::{CurrentCart, Money, OptionsAvailability, RawLineItem};

/// Errors surfaced by the platform capabilities.
///
/// Adapters put whatever diagnostic the platform gave them into the
/// message; this layer adds nothing beyond which operation failed.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The availability oracle failed to answer a query.
    #[error("Availability oracle failure: {0}")]
    Oracle(String),

    /// The cart store rejected or failed an operation.
    #[error("Cart store failure: {0}")]
    CartStore(String),
}

/// Reports whether a specific option combination is currently purchasable.
#[async_trait]
pub trait AvailabilityOracle: Send + Sync {
    /// Check one combination of `product_id` against live inventory.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when the query cannot be answered.
    async fn check_availability(
        &self,
        product_id: &ProductId,
        combination: &OptionCombination,
    ) -> Result<OptionsAvailability, PlatformError>;
}

/// Persists and returns the shopper's cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Add line items to the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when the store rejects the items.
    async fn add_line_items(&self, items: Vec<CartLineItem>) -> Result<(), PlatformError>;

    /// Fetch the current cart contents.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when the cart cannot be read.
    async fn current_cart(&self) -> Result<CurrentCart, PlatformError>;
}
