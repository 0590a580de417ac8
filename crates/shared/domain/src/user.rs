//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// Stable user identifier, assigned by the repository at creation.
pub type UserId = i64;

/// User domain entity (the persisted account record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub contact_no: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Overwrite the mutable profile fields. Username and password are untouched.
    pub fn update_profile(&mut self, name: String, email: String, contact_no: String) {
        self.name = name;
        self.email = email;
        self.contact_no = contact_no;
    }

    /// Replace the stored credential with an already hashed value.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
    }
}

/// A user that has not been stored yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub contact_no: String,
    pub password_hash: String,
}

impl NewUser {
    /// Build from a registration request and the hash of its plaintext password.
    pub fn from_request(request: RegisterRequest, password_hash: String) -> Self {
        Self {
            username: request.username,
            name: request.name,
            email: request.email,
            contact_no: request.contact_no,
            password_hash,
        }
    }

    /// Attach the repository-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            email: self.email,
            contact_no: self.contact_no,
            password_hash: self.password_hash,
        }
    }
}

/// Registration request data transfer object
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub contact_no: String,
    /// Plaintext, hashed once then dropped
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("contact_no", &self.contact_no)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login request data transfer object
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Profile update data transfer object. All three fields are always applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub contact_no: String,
}

/// Password change data transfer object
#[derive(Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Minimal identity handed to the token issuer after credential verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    pub id: UserId,
    pub username: String,
}

impl From<&User> for AuthenticatedPrincipal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Result of a successful authentication: the user plus a freshly issued token.
///
/// The token lives here rather than on `User` so it can never reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "user001".to_string(),
            name: "Old".to_string(),
            email: "old@x.com".to_string(),
            contact_no: "111".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[test]
    fn update_profile_keeps_identity_and_credential() {
        let mut user = sample_user();
        user.update_profile(
            "Changed Name".to_string(),
            "new@x.com".to_string(),
            "99998888".to_string(),
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "user001");
        assert_eq!(user.password_hash, "$argon2id$hash");
        assert_eq!(user.name, "Changed Name");
        assert_eq!(user.email, "new@x.com");
        assert_eq!(user.contact_no, "99998888");
    }

    #[test]
    fn serialized_user_omits_password_hash() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert_eq!(json["username"], "user001");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn authenticated_user_flattens_user_fields_with_token() {
        let authenticated = AuthenticatedUser {
            user: sample_user(),
            token: "testToken".to_string(),
        };
        let json = serde_json::to_value(&authenticated).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["token"], "testToken");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn register_request_debug_hides_password() {
        let request = RegisterRequest {
            username: "user001".to_string(),
            name: "Old".to_string(),
            email: "old@x.com".to_string(),
            contact_no: "111".to_string(),
            password: "plain-secret".to_string(),
        };

        assert!(!format!("{:?}", request).contains("plain-secret"));
    }

    #[test]
    fn new_user_copies_request_fields_verbatim() {
        let request = RegisterRequest {
            username: "user001".to_string(),
            name: "Old".to_string(),
            email: "old@x.com".to_string(),
            contact_no: "111".to_string(),
            password: "plain-secret".to_string(),
        };
        let user = NewUser::from_request(request, "hashed".to_string()).into_user(7);

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "user001");
        assert_eq!(user.contact_no, "111");
        assert_eq!(user.password_hash, "hashed");
    }
}
