//! Cart assembly and retrieval against the platform cart store.
//!
//! Assembles one line item from the session's current selection, enforces
//! the completeness guards, and delegates to the store. There is no
//! rollback: a store failure propagates unchanged and leaves the session
//! state as it was recorded.

use tracing::{debug, instrument};

use crate::error::{PreconditionError, Result};
use crate::platform::CartStore;
use crate::selection::SelectionState;
use crate::types::{CartLineItem, CartMetadata, CartSnapshot, DisplayLineItem};

/// Orchestrates cart operations over a [`CartStore`] handle.
#[derive(Debug, Clone)]
pub struct CartOrchestrator<S> {
    store: S,
}

impl<S: CartStore> CartOrchestrator<S> {
    /// Wrap a cart store handle.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Submit the session's current selection as one cart line.
    ///
    /// Guards run in order, before any store call:
    /// 1. the quantity must be greater than zero;
    /// 2. at least one option must be selected;
    /// 3. when both the color and size roles are bound, a single pick is a
    ///    half-configured product and is rejected.
    ///
    /// On success the quantity is recorded on the session state and the
    /// store receives exactly one line item.
    ///
    /// # Errors
    ///
    /// [`PreconditionError`] for the guards above; store failures
    /// propagate unchanged.
    #[instrument(skip(self, state), fields(product = %state.product_id(), quantity))]
    pub async fn add_to_cart(&self, state: &mut SelectionState, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(PreconditionError::InvalidQuantity.into());
        }

        let selected = state.selection().len();
        if selected == 0 {
            return Err(PreconditionError::NoOptionSelected.into());
        }
        if state.color_dimension().is_some() && state.size_dimension().is_some() && selected == 1 {
            return Err(PreconditionError::MoreOptionsRequired.into());
        }

        state.set_quantity(quantity);
        let line = CartLineItem {
            product_id: state.product_id().clone(),
            quantity,
            options: state.selection().clone(),
        };
        self.store.add_line_items(vec![line]).await?;
        debug!("Line item submitted");
        Ok(())
    }

    /// The current cart, reshaped for display.
    ///
    /// Returns `None` when the store reports no line items - an empty cart
    /// has no snapshot, not an empty list with metadata. Otherwise the
    /// store metadata is carried through and every line is re-identified
    /// with a fresh display identifier.
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged.
    #[instrument(skip(self))]
    pub async fn cart_snapshot(&self) -> Result<Option<CartSnapshot>> {
        let cart = self.store.current_cart().await?;
        if cart.line_items.is_empty() {
            return Ok(None);
        }

        Ok(Some(CartSnapshot {
            metadata: CartMetadata {
                cart_id: cart.id,
                checkout_url: cart.checkout_url,
                note: cart.note,
            },
            line_items: cart
                .line_items
                .into_iter()
                .map(DisplayLineItem::from_raw)
                .collect(),
        }))
    }

    /// Total quantity across all cart lines; 0 for an empty cart.
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged.
    #[instrument(skip(self))]
    pub async fn cart_quantity(&self) -> Result<u32> {
        let cart = self.store.current_cart().await?;
        Ok(cart
            .line_items
            .iter()
            .map(|line| line.quantity)
            .sum())
    }
}
