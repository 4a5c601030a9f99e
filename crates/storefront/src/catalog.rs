//! Derived views of a product's configurable options.
//!
//! The platform hands us a product snapshot with ordered options; these
//! functions flatten it into the shapes the rest of the crate consumes:
//! the cross-product of choices for availability checking, and
//! per-dimension choice lists for the UI.

use uuid::Uuid;

use crate::types::{
    CatalogChoice, ChoiceView, DimensionCatalog, OptionCombination, ProductOption,
};

/// Build every combination of one choice per option.
///
/// The product's option order is significant: each successive option wraps
/// the combinations accumulated so far, so earlier options vary fastest.
/// For options A then B the output is (a1,b1), (a2,b1), ..., (a1,b2), ...,
/// with A's choice recorded under A's name. Combination values are the
/// choice descriptions.
///
/// A product with no options yields no combinations, as does any option
/// with no choices.
#[must_use]
pub fn cross_product(options: &[ProductOption]) -> Vec<OptionCombination> {
    if options.is_empty() {
        return Vec::new();
    }

    let mut combinations = vec![OptionCombination::new()];
    for option in options {
        let mut wrapped = Vec::with_capacity(combinations.len() * option.choices.len());
        for choice in &option.choices {
            for prefix in &combinations {
                wrapped.push(prefix.clone().with(&option.name, &choice.description));
            }
        }
        combinations = wrapped;
    }
    combinations
}

/// In-stock choices of the first requested dimension that exists.
///
/// `requested` is scanned in the caller's order and the first name that
/// matches one of the product's options wins; the rest are ignored. The
/// matched option's choices are filtered to those the platform marked
/// in stock and projected to display rows. Returns an empty list when no
/// requested name matches.
#[must_use]
pub fn dimension_view(options: &[ProductOption], requested: &[&str]) -> Vec<ChoiceView> {
    let Some(option) = requested
        .iter()
        .find_map(|key| options.iter().find(|option| option.name == *key))
    else {
        return Vec::new();
    };

    option
        .choices
        .iter()
        .filter(|choice| choice.in_stock)
        .map(|choice| ChoiceView {
            id: Uuid::new_v4(),
            name: choice.description.clone(),
            value: choice.value.clone(),
        })
        .collect()
}

/// Snapshot every dimension's choices, keeping the platform stock flag.
///
/// Each row gets a fresh display identifier. This is the catalog the
/// selection state is seeded with.
#[must_use]
pub fn catalog_by_dimension(options: &[ProductOption]) -> Vec<DimensionCatalog> {
    options
        .iter()
        .map(|option| DimensionCatalog {
            dimension: option.name.clone(),
            choices: option
                .choices
                .iter()
                .map(|choice| CatalogChoice {
                    id: Uuid::new_v4(),
                    name: choice.description.clone(),
                    value: choice.value.clone(),
                    in_stock: choice.in_stock,
                })
                .collect(),
        })
        .collect()
}
