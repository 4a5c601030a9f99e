//! Per-session selection state.
//!
//! Tracks which product dimensions play the "color" and "size" roles for
//! the current page, the shopper's picks, and the derived "valid sizes for
//! the chosen color" list. One instance per shopper session; the caller
//! owns it exclusively and mutates it through the setters. Nothing here is
//! persisted - the state dies with the session.

use driftwood_core::ProductId;
use uuid::Uuid;

use crate::catalog::catalog_by_dimension;
use crate::types::{
    AvailableCombination, CatalogChoice, ChoiceView, DimensionCatalog, OptionCombination, Product,
};

/// The two selection roles a product dimension can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRole {
    /// The dimension the shopper picks first (e.g., "Color").
    Color,
    /// The dimension whose candidates depend on the color pick.
    Size,
}

/// A dimension bound to a role, with its purchasable choices snapshot.
#[derive(Debug, Clone)]
struct RoleBinding {
    dimension: String,
    choices: Vec<CatalogChoice>,
}

/// The shopper's current configuration of one product.
///
/// Created per session from a product snapshot; every mutation happens
/// through an explicit setter on the exclusively-owned value.
#[derive(Debug, Clone)]
pub struct SelectionState {
    product_id: ProductId,
    dimension_count: usize,
    catalog: Vec<DimensionCatalog>,
    color: Option<RoleBinding>,
    size: Option<RoleBinding>,
    in_stock_combinations: Vec<AvailableCombination>,
    selection: OptionCombination,
    size_candidates: Vec<ChoiceView>,
    quantity: u32,
}

impl SelectionState {
    /// Create session state for `product`, snapshotting its catalog.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            dimension_count: product.options.len(),
            catalog: catalog_by_dimension(&product.options),
            color: None,
            size: None,
            in_stock_combinations: Vec::new(),
            selection: OptionCombination::new(),
            size_candidates: Vec::new(),
            quantity: 0,
        }
    }

    /// Bind `role` to the first catalog dimension named in `candidates`.
    ///
    /// The catalog's dimensions are scanned in their enumeration order and
    /// the first whose name appears in `candidates` wins; `candidates`
    /// order does not matter. The dimension's in-stock choices are
    /// snapshotted as the role's available-choices list. Binds nothing
    /// when no name matches.
    pub fn assign_role(&mut self, role: OptionRole, candidates: &[&str]) {
        let Some(entry) = self
            .catalog
            .iter()
            .find(|dimension| candidates.contains(&dimension.dimension.as_str()))
        else {
            return;
        };

        let binding = RoleBinding {
            dimension: entry.dimension.clone(),
            choices: entry
                .choices
                .iter()
                .filter(|choice| choice.in_stock)
                .cloned()
                .collect(),
        };
        match role {
            OptionRole::Color => self.color = Some(binding),
            OptionRole::Size => self.size = Some(binding),
        }
    }

    /// Install the last availability resolution for this product.
    ///
    /// [`Self::select_color`] derives its size candidates from this list.
    pub fn set_in_stock_combinations(&mut self, combinations: Vec<AvailableCombination>) {
        self.in_stock_combinations = combinations;
    }

    /// Record the color pick and recompute the size candidates.
    ///
    /// Candidates are the size-role values of every in-stock combination
    /// whose color-role value equals `value`, each projected to a display
    /// row with a fresh identifier. Repeated size values are kept as-is;
    /// the rows are distinguished by identifier only. No-op when the color
    /// role is unbound; candidates come out empty when the size role is
    /// unbound or no resolution has been installed yet.
    pub fn select_color(&mut self, value: &str) {
        let Some(color) = &self.color else { return };
        self.selection.set(&color.dimension, value);

        self.size_candidates = self.size.as_ref().map_or_else(Vec::new, |size| {
            self.in_stock_combinations
                .iter()
                .filter(|entry| entry.options.get(&color.dimension) == Some(value))
                .filter_map(|entry| entry.options.get(&size.dimension))
                .map(|candidate| ChoiceView {
                    id: Uuid::new_v4(),
                    name: candidate.to_string(),
                    value: candidate.to_string(),
                })
                .collect()
        });
    }

    /// Record the size pick. No-op when the size role is unbound.
    pub fn select_size(&mut self, value: &str) {
        let Some(size) = &self.size else { return };
        self.selection.set(&size.dimension, value);
    }

    /// Record the quantity the shopper asked for.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// The current dimension-name to value mapping. Possibly empty.
    #[must_use]
    pub const fn selection(&self) -> &OptionCombination {
        &self.selection
    }

    /// Number of dimensions on the product, not of picks made.
    #[must_use]
    pub const fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    /// The product this session configures.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// The chosen quantity. Zero until a cart submission records one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The color role's dimension name, when bound.
    #[must_use]
    pub fn color_dimension(&self) -> Option<&str> {
        self.color.as_ref().map(|binding| binding.dimension.as_str())
    }

    /// The size role's dimension name, when bound.
    #[must_use]
    pub fn size_dimension(&self) -> Option<&str> {
        self.size.as_ref().map(|binding| binding.dimension.as_str())
    }

    /// The color role's in-stock choices, as snapshotted at binding time.
    #[must_use]
    pub fn color_choices(&self) -> Option<&[CatalogChoice]> {
        self.color.as_ref().map(|binding| binding.choices.as_slice())
    }

    /// The size role's in-stock choices, as snapshotted at binding time.
    #[must_use]
    pub fn size_choices(&self) -> Option<&[CatalogChoice]> {
        self.size.as_ref().map(|binding| binding.choices.as_slice())
    }

    /// Size candidates valid for the chosen color, from the last pick.
    #[must_use]
    pub fn size_candidates(&self) -> &[ChoiceView] {
        &self.size_candidates
    }
}
