//! Raw payload types exchanged with the platform capabilities.

use driftwood_core::{CartId, LineItemId, ProductId};
use serde::{Deserialize, Serialize};

use crate::types::OptionCombination;

/// Monetary amount with currency code.
///
/// Carried opaquely for display; this layer never computes on prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// The availability oracle's reply for one combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsAvailability {
    /// Whether the queried combination can be purchased right now.
    pub available_for_purchase: bool,
}

/// A cart line as the store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLineItem {
    /// Store-assigned line ID. Discarded when reshaping for display.
    pub id: LineItemId,
    /// Product on this line.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Quantity on this line.
    pub quantity: u32,
    /// Line price, when the store reports one.
    pub price: Option<Money>,
    /// Chosen options on this line.
    pub options: OptionCombination,
}

/// The cart store's view of the current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCart {
    /// Platform cart ID.
    pub id: CartId,
    /// Checkout URL, when the platform provides one.
    pub checkout_url: Option<String>,
    /// Cart note.
    pub note: Option<String>,
    /// Lines currently in the cart, in store order.
    pub line_items: Vec<RawLineItem>,
}
