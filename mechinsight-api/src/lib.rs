//! # mechinsight-api
//!
//! Shared API types for the mechinsight telemetry service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen) applications.
//!
//! ## Features
//!
//! - Request DTOs (SignupRequest, LoginRequest)
//! - Response DTOs (TokenResponse, MachineListResponse, MachineDetailResponse)
//! - Signup field validation shared with the frontend (FieldError)
//! - Error response format (ErrorResponse)
//!
//! ## Example
//!
//! ```rust
//! use mechinsight_api::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "password123".to_string(),
//! };
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod validation;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use validation::FieldError;
