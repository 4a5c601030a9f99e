//! Domain types for the storefront helpers.
//!
//! These types provide a clean, ergonomic view of the platform's product
//! catalog, separate from the raw payloads the platform adapters deal in.
//! Product snapshots are read-only; everything derived from them is
//! recomputed on demand.

use driftwood_core::ProductId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::platform::types::{Money, RawLineItem};

// =============================================================================
// Product Types
// =============================================================================

/// A configurable choice within a product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Display description (e.g., "Red").
    pub description: String,
    /// Machine value (e.g., "red").
    pub value: String,
    /// Platform-reported stock flag. May be stale; the availability oracle
    /// is the authority at purchase time.
    pub in_stock: bool,
    /// Platform-assigned choice ID, when the platform provides one.
    pub id: Option<String>,
}

/// A named axis of product configuration (e.g., "Color", "Size").
///
/// Options are ordered; every tie-break in this crate that scans "the
/// product's dimensions in order" means the order of [`Product::options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Color").
    pub name: String,
    /// Ordered choices within this option.
    pub choices: Vec<OptionChoice>,
}

/// A product snapshot fetched from the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Platform product ID.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Configurable options, in the platform's order.
    pub options: Vec<ProductOption>,
}

// =============================================================================
// Combination Types
// =============================================================================

/// One chosen value on one named dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenOption {
    /// Dimension name (e.g., "Color").
    pub name: String,
    /// Chosen value, by choice description (e.g., "Red").
    pub value: String,
}

/// An assignment of one value to each covered dimension.
///
/// Entries keep the order in which dimensions were assigned; re-assigning a
/// dimension overwrites the value in place without moving the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCombination(Vec<ChosenOption>);

impl OptionCombination {
    /// Create an empty combination.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Assign `value` to the dimension `name`.
    ///
    /// Overwrites in place when the dimension is already covered.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.0.iter_mut().find(|entry| entry.name == name) {
            entry.value = value.to_string();
        } else {
            self.0.push(ChosenOption {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// The value assigned to the dimension `name`, if covered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    /// The covered dimensions, in assignment order.
    #[must_use]
    pub fn entries(&self) -> &[ChosenOption] {
        &self.0
    }

    /// Number of covered dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no dimension is covered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A combination the availability oracle confirmed purchasable.
///
/// Only ever produced by the availability resolver, and only for
/// combinations the oracle marked purchasable at query time. The ID is
/// freshly generated per resolution; combinations have no stable
/// client-side identity across resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableCombination {
    /// Freshly generated identifier for this resolution.
    pub id: Uuid,
    /// The purchasable combination.
    pub options: OptionCombination,
}

// =============================================================================
// Catalog View Types
// =============================================================================

/// A UI-facing row for one choice of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceView {
    /// Freshly generated display identifier.
    pub id: Uuid,
    /// Display name (the choice description).
    pub name: String,
    /// Machine value.
    pub value: String,
}

/// A catalog row for one choice, keeping the platform's stock flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogChoice {
    /// Freshly generated display identifier.
    pub id: Uuid,
    /// Display name (the choice description).
    pub name: String,
    /// Machine value.
    pub value: String,
    /// Platform-reported stock flag at snapshot time.
    pub in_stock: bool,
}

/// All choices of one dimension, as snapshotted from the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionCatalog {
    /// Dimension name.
    pub dimension: String,
    /// Catalog rows, in the product's choice order.
    pub choices: Vec<CatalogChoice>,
}

// =============================================================================
// Cart Types
// =============================================================================

/// A line item submitted to the platform cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product being added.
    pub product_id: ProductId,
    /// Quantity to add; always greater than zero.
    pub quantity: u32,
    /// The chosen options; never empty.
    pub options: OptionCombination,
}

/// Opaque cart metadata returned by the platform alongside line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartMetadata {
    /// Platform cart ID.
    pub cart_id: driftwood_core::CartId,
    /// Checkout URL, when the platform provides one.
    pub checkout_url: Option<String>,
    /// Cart note.
    pub note: Option<String>,
}

/// A cart line reshaped for display.
///
/// Carries the store line unchanged except for the identifier: the
/// store-assigned line ID is discarded and replaced with a fresh display
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLineItem {
    /// Freshly generated display identifier.
    pub id: Uuid,
    /// Product on this line.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Quantity on this line.
    pub quantity: u32,
    /// Line price, as reported by the store.
    pub price: Option<Money>,
    /// Chosen options on this line.
    pub options: OptionCombination,
}

impl DisplayLineItem {
    /// Re-identify a store line for display, discarding the store's own
    /// line ID.
    #[must_use]
    pub fn from_raw(line: RawLineItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: line.product_id,
            name: line.name,
            quantity: line.quantity,
            price: line.price,
            options: line.options,
        }
    }
}

/// The current cart contents, reshaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Store metadata carried through unchanged.
    pub metadata: CartMetadata,
    /// Re-identified line items, in store order.
    pub line_items: Vec<DisplayLineItem>,
}
