/// Validation utilities for user input

use lib_aztec::{AztecAddress, EthAddress, TokenId};

/// Longest accepted collection symbol
pub const MAX_SYMBOL_LEN: usize = 16;

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

    /// Convert into a `Result`, keeping the message.
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(message) if !self.is_valid => Err(message),
            _ => Ok(()),
        }
    }
}

/// Validate a token id (non-negative integer)
pub fn validate_token_id(token_id: &str) -> ValidationResult {
    if token_id.trim().is_empty() {
        return ValidationResult::err("Token ID is required");
    }

    if token_id.parse::<TokenId>().is_err() {
        return ValidationResult::err("Token ID must be a non-negative integer");
    }

    ValidationResult::ok()
}

/// Validate a listing or purchase price (integer, greater than zero)
pub fn validate_price(price: &str) -> ValidationResult {
    if price.trim().is_empty() {
        return ValidationResult::err("Price is required");
    }

    match price.trim().parse::<u128>() {
        Ok(0) => ValidationResult::err("Price must be greater than 0"),
        Ok(_) => ValidationResult::ok(),
        Err(_) => ValidationResult::err("Price must be a whole number"),
    }
}

/// Validate an account address on the rollup
pub fn validate_address(address: &str) -> ValidationResult {
    if address.trim().is_empty() {
        return ValidationResult::err("Address is required");
    }

    if address.parse::<AztecAddress>().is_err() {
        return ValidationResult::err("Invalid address format");
    }

    ValidationResult::ok()
}

/// Validate an L1 (Ethereum) address
pub fn validate_l1_address(address: &str) -> ValidationResult {
    if address.trim().is_empty() {
        return ValidationResult::err("L1 address is required");
    }

    if address.parse::<EthAddress>().is_err() {
        return ValidationResult::err("Invalid L1 address format");
    }

    ValidationResult::ok()
}

/// Validate collection name and symbol
pub fn validate_collection(name: &str, symbol: &str) -> ValidationResult {
    if name.trim().is_empty() || symbol.trim().is_empty() {
        return ValidationResult::err("Name and symbol are required");
    }

    if symbol.trim().chars().count() > MAX_SYMBOL_LEN {
        return ValidationResult::err(format!("Symbol must be at most {} characters", MAX_SYMBOL_LEN));
    }

    ValidationResult::ok()
}
