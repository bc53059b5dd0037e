use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collection deployment request (`POST /api/deploy-nft`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployNftRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
}

/// Collection deployment result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployNftResponse {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// Mint request (`POST /api/mint-nft`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintNftRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_private: bool,
}

/// Mint result
///
/// `token_id` is a decimal string: ids are 128-bit and do not fit a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintNftResponse {
    pub success: bool,
    pub token_id: String,
    pub recipient: String,
    pub is_private: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
