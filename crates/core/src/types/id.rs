//! Newtype IDs for type-safe entity references.
//!
//! The hosted store platform hands out opaque string identifiers for
//! products, carts, and cart lines. Use the `define_id!` macro to create
//! type-safe ID wrappers that prevent accidentally mixing IDs from
//! different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `is_empty()`
/// - `From<String>`, `From<&str>`, and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use driftwood_core::define_id;
/// define_id!(ProductId);
/// define_id!(CartId);
///
/// let product_id = ProductId::new("prod-1");
/// let cart_id = CartId::new("cart-1");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = cart_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the ID carries no value.
            ///
            /// The platform never assigns empty IDs; an empty ID marks a
            /// reference that was never populated.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CartId);
define_id!(LineItemId);
