//! Inventory store errors

use super::BackpackError;

/// Creates a store full error
pub fn store_full(capacity: usize) -> BackpackError {
    BackpackError::StoreFull { capacity }
}

/// Creates an invalid quantity error
pub fn invalid_quantity(input: impl Into<String>) -> BackpackError {
    BackpackError::InvalidQuantity {
        input: input.into(),
    }
}

/// Creates an item not found error
pub fn not_found(name: impl Into<String>) -> BackpackError {
    BackpackError::NotFound { name: name.into() }
}

/// Creates an empty name error
pub fn empty_name() -> BackpackError {
    BackpackError::EmptyName
}

/// Creates a quantity overflow error
pub fn quantity_overflow(name: impl Into<String>) -> BackpackError {
    BackpackError::QuantityOverflow { name: name.into() }
}
