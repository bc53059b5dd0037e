//! # Aztec Types
//!
//! Wire types exchanged with the network-execution service.
//!
//! ## Addresses
//!
//! Aztec addresses are field elements rendered as `0x` followed by 64 hex digits.
//! L1 (Ethereum) addresses used by the bridge are 20 bytes, `0x` + 40 hex digits.
//!
//! ## Example
//!
//! ```rust
//! use lib_aztec::types::AztecAddress;
//!
//! let addr: AztecAddress = "0x00000000000000000000000000000000000000000000000000000000000000ff"
//!     .parse()
//!     .unwrap();
//! assert_eq!(addr.to_string().len(), 66);
//! ```

use crate::error::PxeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parse `0x`-prefixed hex into a fixed-size byte array.
fn parse_hex_bytes<const N: usize>(s: &str) -> Result<[u8; N], PxeError> {
    let digits = s
        .trim()
        .strip_prefix("0x")
        .ok_or_else(|| PxeError::InvalidAddress(format!("{s:?} must start with 0x")))?;

    if digits.len() != N * 2 {
        return Err(PxeError::InvalidAddress(format!(
            "{s:?} must be {} hex digits, got {}",
            N * 2,
            digits.len()
        )));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|e| PxeError::InvalidAddress(format!("{s:?}: {e}")))?;
    Ok(out)
}

/// Aztec account or contract address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AztecAddress([u8; 32]);

impl AztecAddress {
    pub const ZERO: AztecAddress = AztecAddress([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Address whose low eight bytes hold `n`. Handy for fixtures.
    pub fn from_low_u64(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }
}

impl fmt::Display for AztecAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AztecAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AztecAddress({self})")
    }
}

impl FromStr for AztecAddress {
    type Err = PxeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_bytes::<32>(s).map(Self)
    }
}

impl Serialize for AztecAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AztecAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// L1 (Ethereum) address, the destination of a bridge-out.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthAddress([u8; 20]);

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthAddress({self})")
    }
}

impl FromStr for EthAddress {
    type Err = PxeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_bytes::<20>(s).map(Self)
    }
}

impl Serialize for EthAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// NFT token identifier.
///
/// Travels as a decimal string so that JSON numbers never lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u128);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = PxeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u128>()
            .map(TokenId)
            .map_err(|_| PxeError::Decode(format!("token id {s:?} is not a non-negative integer")))
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of `pxe_getNodeInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    #[serde(default)]
    pub node_version: String,
    pub l1_chain_id: u64,
    #[serde(default)]
    pub rollup_version: Option<u64>,
    #[serde(default)]
    pub protocol_contract_tree_root: Option<String>,
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Success,
    Pending,
    Dropped,
    AppLogicReverted,
    TeardownReverted,
    BothReverted,
    #[serde(other)]
    Unknown,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "success",
            TxStatus::Pending => "pending",
            TxStatus::Dropped => "dropped",
            TxStatus::AppLogicReverted => "app_logic_reverted",
            TxStatus::TeardownReverted => "teardown_reverted",
            TxStatus::BothReverted => "both_reverted",
            TxStatus::Unknown => "unknown",
        }
    }
}

/// Receipt returned once a sent transaction has been waited on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub tx_hash: String,
    pub status: TxStatus,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TxReceipt {
    /// Turn anything but a successful receipt into [`PxeError::TxFailed`].
    pub fn ensure_success(self) -> Result<Self, PxeError> {
        if self.status == TxStatus::Success {
            return Ok(self);
        }
        Err(PxeError::TxFailed {
            tx_hash: self.tx_hash,
            status: self.status.as_str().to_string(),
            reason: self.error.unwrap_or_else(|| "no reason given".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_parse_and_display() {
        let s = format!("0x{}", "0a".repeat(32));
        let addr: AztecAddress = s.parse().unwrap();
        assert_eq!(addr.to_string(), s);
    }

    #[test]
    fn test_address_rejects_bad_input() {
        assert!("0a0a".parse::<AztecAddress>().is_err());
        assert!("0x0a".parse::<AztecAddress>().is_err());
        assert!(format!("0x{}", "zz".repeat(32)).parse::<AztecAddress>().is_err());
    }

    #[test]
    fn test_address_from_low_u64() {
        let addr = AztecAddress::from_low_u64(0xff);
        assert!(addr.to_string().ends_with("00ff"));
        assert_eq!(addr.as_bytes()[31], 0xff);
    }

    #[test]
    fn test_eth_address() {
        let s = format!("0x{}", "ab".repeat(20));
        let addr: EthAddress = s.parse().unwrap();
        assert_eq!(addr.to_string(), s);
        assert!(format!("0x{}", "ab".repeat(32)).parse::<EthAddress>().is_err());
    }

    #[test]
    fn test_token_id_parse() {
        assert_eq!("42".parse::<TokenId>().unwrap(), TokenId(42));
        assert!("-1".parse::<TokenId>().is_err());
        assert!("abc".parse::<TokenId>().is_err());
        assert_eq!(serde_json::to_value(TokenId(7)).unwrap(), "7");
    }

    #[test]
    fn test_node_info_decodes_camel_case() {
        let info: NodeInfo = serde_json::from_str(
            r#"{"nodeVersion":"0.76.4","l1ChainId":31337,"rollupVersion":1,"enr":null}"#,
        )
        .unwrap();
        assert_eq!(info.l1_chain_id, 31337);
        assert_eq!(info.node_version, "0.76.4");
    }

    #[test]
    fn test_receipt_status() {
        let receipt: TxReceipt =
            serde_json::from_str(r#"{"txHash":"0x01","status":"app_logic_reverted","error":"not owner"}"#)
                .unwrap();
        let err = receipt.ensure_success().unwrap_err();
        assert!(err.to_string().contains("not owner"));

        let receipt: TxReceipt =
            serde_json::from_str(r#"{"txHash":"0x02","status":"something_new"}"#).unwrap();
        assert_eq!(receipt.status, TxStatus::Unknown);
    }
}
