//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate a `0x`-prefixed hex string of exactly `hex_len` digits.
pub fn validate_hex_field(value: &str, hex_len: usize, field_name: &str) -> Result<(), String> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| format!("{} must start with 0x", field_name))?;

    if digits.len() != hex_len {
        return Err(format!("{} must be {} hex digits", field_name, hex_len));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{} must be hexadecimal", field_name));
    }

    Ok(())
}
