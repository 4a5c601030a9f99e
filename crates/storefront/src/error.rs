//! Unified error handling for the storefront helpers.
//!
//! Two failure families exist: precondition violations raised synchronously
//! before any platform call, and platform failures surfaced by the
//! availability oracle or cart store. Callers are expected to turn
//! precondition violations into user-facing prompts; platform failures are
//! propagated verbatim, identified only by the operation that raised them.

use thiserror::Error;

use crate::platform::PlatformError;

/// Input guards checked before any platform call is issued.
///
/// Always recoverable by the caller correcting its input.
#[derive(Debug, Error)]
pub enum PreconditionError {
    /// No product reference was supplied.
    #[error("Product is required")]
    MissingProduct,

    /// The requested quantity is zero.
    #[error("Quantity has to be bigger than 0")]
    InvalidQuantity,

    /// The shopper has not picked any option yet.
    #[error("No option selected")]
    NoOptionSelected,

    /// Both option roles are configured but only one has been picked.
    #[error("More options required")]
    MoreOptionsRequired,
}

/// Top-level error type for the storefront helpers.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An input guard failed before any platform call.
    #[error("Invalid input: {0}")]
    Precondition(#[from] PreconditionError),

    /// The platform reported a failure; propagated unchanged.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
