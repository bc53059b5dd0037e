//! # Contract Handles
//!
//! Typed wrappers over [`crate::NetworkService`] for the contracts the marketplace uses.

pub mod nft;

pub use nft::{NftAction, NftContract, NftMetadata, Visibility, DEFAULT_IMAGE_URL, NFT_ARTIFACT};
