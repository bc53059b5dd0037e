//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the marketplace client (terminal) and
//! the deploy/mint API server. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::nft`]**: Collection deployment and minting DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The API speaks the camelCase JSON the marketplace pages were built against:
//! - `recipientAddress`, `isPrivate`, `tokenId` on the mint endpoint
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::nft::{DeployNftRequest, DeployNftResponse};
//! use axum::Json;
//!
//! async fn deploy(Json(request): Json<DeployNftRequest>) -> Json<DeployNftResponse> {
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```rust,ignore
//! use shared::dto::nft::{DeployNftRequest, DeployNftResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = DeployNftRequest {
//!     name: "Night Owls".to_string(),
//!     symbol: "OWL".to_string(),
//! };
//!
//! let response: DeployNftResponse = reqwest::Client::new()
//!     .post("http://localhost:3001/api/deploy-nft")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
