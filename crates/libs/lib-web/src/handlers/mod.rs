//! # HTTP Request Handlers
//!
//! Axum request handlers organized by feature domain. Handlers delegate
//! business logic to services in the [`crate::services`] module.
//!
//! ## Handler Modules
//!
//! - **[`nft`]**: Collection deployment and minting
//!   - `POST /api/deploy-nft` - Deploy a new collection
//!   - `POST /api/mint-nft` - Mint on the configured collection
//!
//! ## Handler Architecture
//!
//! ```rust,ignore
//! async fn handler(
//!     State(pxe): State<Arc<dyn NetworkService>>, // Shared state
//!     body: Result<Json<RequestBody>, JsonRejection>, // Request body
//! ) -> lib_core::Result<Json<Response>> {
//!     let Json(payload) = body?;
//!     Ok(Json(response))
//! }
//! ```
//!
//! ## Error Handling
//!
//! Handlers return [`lib_core::AppError`], whose `IntoResponse` picks the status
//! and renders `{"error": "<message>"}`. Body extraction failures are taken as a
//! `Result` and converted the same way, so a malformed body is a JSON 400 too.
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS (tower-http) → request stamp → request logging → trace span
//!     ↓
//! Handler → Service → PXE
//!     ↓
//! Client Response
//! ```

pub mod nft;
