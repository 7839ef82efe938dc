//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, business-level rejection. A command that
/// fails with any of these leaves the ledger untouched; storage problems live
/// in the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Input failed validation (missing, zero, negative or non-numeric).
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced product is not in the catalog.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    /// A caller-supplied product id is already taken.
    #[error("a product with id {0} already exists")]
    DuplicateId(ProductId),

    /// `u64::MAX` is already in the catalog, so `max + 1` has no value left.
    #[error("no product ids left to assign")]
    IdsExhausted,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn insufficient_stock(product_id: ProductId, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            product_id,
            requested,
            available,
        }
    }

    /// True for every flavour of invalid input (the "re-prompt the user" case).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidId(_))
    }
}

/// Precise reason an input was rejected.
///
/// Zero and negative quantities share the `Validation` kind but keep distinct
/// reasons so callers can word their messages differently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("{0} is mandatory")]
    MissingField(&'static str),

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("zero is not accepted as a quantity")]
    ZeroQuantity,

    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("{field} must be greater than zero")]
    NonPositivePrice { field: &'static str },

    #[error("{field} must be a finite number")]
    NonFinitePrice { field: &'static str },

    #[error("{field} cannot be negative")]
    NegativePrice { field: &'static str },

    #[error("resulting quantity is too large")]
    QuantityOverflow,
}

impl ValidationError {
    pub fn not_a_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::NotANumber {
            field,
            value: value.into(),
        }
    }
}
