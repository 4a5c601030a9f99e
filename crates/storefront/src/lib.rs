//! Storefront helper library for the Driftwood shop.
//!
//! Driftwood runs on a hosted store platform; that platform is the source
//! of truth for inventory, pricing, cart persistence, and checkout. This
//! crate computes the derived views a product page needs - per-dimension
//! option lists, the cross-product of option choices, which combinations
//! are currently purchasable - and carries the shopper's selection up to
//! the point where a configured line item lands in the platform cart.
//!
//! # Architecture
//!
//! - The platform is reached through the [`platform`] capability traits
//!   ([`AvailabilityOracle`], [`CartStore`]); concrete adapters live with
//!   the host application.
//! - Data flows one way: raw product -> [`catalog`] -> [`availability`] ->
//!   [`selection`] -> [`cart`] -> platform cart store.
//! - Availability is recomputed on every call. Nothing is cached here and
//!   the oracle must not be assumed cache-coherent between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use driftwood_storefront::{
//!     CartOrchestrator, OptionRole, SelectionState, in_stock_combinations,
//! };
//!
//! let mut state = SelectionState::new(&product);
//! state.assign_role(OptionRole::Color, &["Color", "Colour"]);
//! state.assign_role(OptionRole::Size, &["Size"]);
//!
//! let combinations = in_stock_combinations(&oracle, &product).await?;
//! state.set_in_stock_combinations(combinations);
//!
//! state.select_color("Red");
//! state.select_size("M");
//!
//! let cart = CartOrchestrator::new(store);
//! cart.add_to_cart(&mut state, 1).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod availability;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod platform;
pub mod selection;
pub mod types;

pub use availability::{in_stock_combinations, resolve_availability};
pub use cart::CartOrchestrator;
pub use catalog::{catalog_by_dimension, cross_product, dimension_view};
pub use error::{PreconditionError, Result, StorefrontError};
pub use platform::{AvailabilityOracle, CartStore, PlatformError};
pub use selection::{OptionRole, SelectionState};
