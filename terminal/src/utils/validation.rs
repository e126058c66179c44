/// Validation utilities for user input

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a wallet address (base58-encoded public key)
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    if Pubkey::from_str(address).is_err() {
        return ValidationResult::err("Invalid base58 address");
    }

    ValidationResult::ok()
}

/// Validate a mint quantity against the selector bounds
pub fn validate_quantity(quantity: u64, upper: u64) -> ValidationResult {
    if quantity == 0 {
        return ValidationResult::err("Quantity must be at least 1");
    }

    if quantity > upper {
        return ValidationResult::err(format!("Quantity must be at most {}", upper));
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert!(validate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL").is_valid);
        assert!(!validate_address("").is_valid);
        assert!(!validate_address("not-an-address-0OIl").is_valid);
        assert!(!validate_address("tooshort").is_valid);
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity(1, 5).is_valid);
        assert!(validate_quantity(5, 5).is_valid);
        assert!(!validate_quantity(0, 5).is_valid);
        assert!(!validate_quantity(6, 5).is_valid);
    }
}
