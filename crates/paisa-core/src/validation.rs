//! # Validation Module
//!
//! Input validation for form-entered values. Validation happens at
//! construction boundaries (cart add, CSV import, setup form) rather than at
//! read time, so every stored value is already known-good.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_LINE_QUANTITY;

/// Validates a quantity value.
///
/// ## Rules
/// - Must be a positive integer (> 0)
/// - Must not exceed [`MAX_LINE_QUANTITY`], which also keeps the
///   `unit_price × quantity` subtotal safely inside i64
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty <= 0 {
        return Err(CoreError::invalid_input(
            "quantity",
            "must be a positive integer",
        ));
    }
    if qty > MAX_LINE_QUANTITY {
        return Err(CoreError::invalid_input(
            "quantity",
            format!("must not exceed {}", MAX_LINE_QUANTITY),
        ));
    }
    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_unit_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::invalid_input("price", "must not be negative"));
    }
    Ok(())
}

/// Parses a form-entered quantity string.
///
/// ## Example
/// ```rust
/// use paisa_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
/// assert!(parse_quantity("3.5").is_err());
/// assert!(parse_quantity("0").is_err());
/// ```
pub fn parse_quantity(input: &str) -> CoreResult<i64> {
    let qty: i64 = input.trim().parse().map_err(|_| {
        CoreError::invalid_input("quantity", format!("'{}' is not an integer", input.trim()))
    })?;
    validate_quantity(qty)?;
    Ok(qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
        assert!(validate_quantity(10_000_000_000_000_000).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_paise(1250)).is_ok());
        assert!(validate_unit_price(Money::from_paise(-1)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("three").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("-2").is_err());
    }
}
