//! Domain layer - Core account entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage, token signing and transport live in the service crate.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use password::{HashError, Password};
pub use user::{
    AuthenticatedPrincipal, AuthenticatedUser, ChangePasswordRequest, LoginRequest, NewUser,
    RegisterRequest, UpdateProfileRequest, User, UserId,
};
