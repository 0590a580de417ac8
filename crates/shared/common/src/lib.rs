//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The infrastructure error type and its HTTP mapping
//! - The uniform response envelope
//! - Configuration structures

pub mod config;
pub mod error;
pub mod response;

pub use config::*;
pub use error::{AppError, AppResult};
pub use response::{BaseResponse, RESULT_FAILURE, RESULT_SUCCESS};
