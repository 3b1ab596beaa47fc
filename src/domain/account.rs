//! Admin and user accounts.
//!
//! Admins and users share a shape but live in separate tables and
//! separate token domains.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Which identity space an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Admin,
    User,
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Admin => write!(f, "admin"),
            AccountKind::User => write!(f, "user"),
        }
    }
}

/// Account entity (admin or user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Account as returned to clients (no password material)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Jane")]
    pub firstname: String,
    #[schema(example = "Doe")]
    pub lastname: String,
    #[schema(example = "jane")]
    pub username: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            firstname: account.firstname,
            lastname: account.lastname,
            username: account.username,
            email: account.email,
        }
    }
}

/// Data required to persist a new account; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let account = Account {
            id: Uuid::new_v4(),
            firstname: "Jane".into(),
            lastname: "Doe".into(),
            username: "jane".into(),
            email: "jane@example.com".into(),
            password_hash: "$argon2id$secret".into(),
        };

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$argon2id$secret"));

        let id = account.id;
        let response = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert!(!response.to_string().contains("$argon2id$secret"));
        assert_eq!(response["_id"], id.to_string());
        assert_eq!(response["username"], "jane");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AccountKind::Admin.to_string(), "admin");
        assert_eq!(AccountKind::User.to_string(), "user");
    }
}
