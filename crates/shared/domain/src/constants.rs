//! Domain-level constants.

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Maximum JWT token lifetime in hours (one year)
pub const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

// =============================================================================
// Operation names (used in NotFound messages)
// =============================================================================

pub const OP_GET_BY_ID: &str = "Failed to retrieve user";
pub const OP_UPDATE_PROFILE: &str = "Failed to update user details";
pub const OP_CHANGE_PASSWORD: &str = "Failed to change password";
pub const OP_DELETE_USER: &str = "Failed to delete user";
