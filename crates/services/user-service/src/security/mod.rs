//! Credential and token collaborators of the account service.

mod authenticator;
mod hasher;
mod token;

pub use authenticator::{Authenticator, CredentialAuthenticator};
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use token::{Claims, JwtIssuer, TokenIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use authenticator::MockAuthenticator;
#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockCredentialHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use token::MockTokenIssuer;
