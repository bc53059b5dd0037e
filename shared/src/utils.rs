//! # Shared Utility Functions
//!
//! Common utility functions used across the API server and the terminal client.
//!
//! ## Address Formatting
//!
//! Functions for formatting account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x2a3bc8f1d9e07c4b5a6d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x2a3b...1a2b");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start (default: 4)
/// * `suffix_len` - Number of characters to show at the end (default: 4)
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x2a3bc8f1d9e07c4b5a6d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b";
/// assert_eq!(format_address(addr, 6, 4), "0x2a3b...1a2b");
/// assert_eq!(format_address(addr, 4, 6), "0x2a...0f1a2b");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();
    
    // Return early if address is too short to truncate meaningfully
    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }
    
    // Safe to slice: we've verified prefix_len and suffix_len are within bounds
    // Hex addresses are ASCII-only, byte indexing is safe
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];
    
    format!("{}...{}", prefix, suffix)
}

/// Format an account address keeping the `0x` prefix plus four hex digits on each side.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=6` and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x2a3bc8f1d9e07c4b5a6d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b";
/// assert_eq!(truncate_address(addr), "0x2a3b...1a2b");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
