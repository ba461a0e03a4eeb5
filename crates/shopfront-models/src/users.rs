//! User documents and their public representation.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role tags stored on a user. Serialized as `USER_ROLE` / `ADMIN_ROLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    #[default]
    #[serde(rename = "USER_ROLE")]
    User,
    #[serde(rename = "ADMIN_ROLE")]
    Admin,
}

fn default_roles() -> Vec<UserRole> {
    vec![UserRole::User]
}

/// A user as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    #[serde(rename = "emailValidated", default)]
    pub email_validated: bool,
    /// bcrypt hash, never the plain password
    pub password: String,
    #[serde(default = "default_roles")]
    pub role: Vec<UserRole>,
}

impl User {
    /// New unvalidated user with the default role.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            email: email.into(),
            email_validated: false,
            password: password_hash.into(),
            role: default_roles(),
        }
    }

    pub fn with_roles(mut self, roles: Vec<UserRole>) -> Self {
        self.role = roles;
        self
    }
}

/// User as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "65f1c0ffee0000000000abcd")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "emailValidated")]
    pub email_validated: bool,
    pub role: Vec<UserRole>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            email_validated: user.email_validated,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Ada", "ada@example.com", "$2b$12$hash");
        assert!(!user.email_validated);
        assert_eq!(user.role, vec![UserRole::User]);
    }

    #[test]
    fn test_response_hides_password() {
        let user = User::new("Ada", "ada@example.com", "$2b$12$hash");
        let id = user.id.to_hex();
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["emailValidated"], false);
        assert_eq!(json["role"][0], "USER_ROLE");
        assert!(json.get("password").is_none());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_document_field_names() {
        let user = User::new("Ada", "ada@example.com", "hash").with_roles(vec![UserRole::Admin]);
        let doc = bson::to_document(&user).unwrap();

        assert!(doc.get_object_id("_id").is_ok());
        assert_eq!(doc.get_bool("emailValidated").unwrap(), false);
        assert_eq!(
            doc.get_array("role").unwrap()[0].as_str(),
            Some("ADMIN_ROLE")
        );
    }

    #[test]
    fn test_missing_role_defaults_on_read() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hash",
        };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.role, vec![UserRole::User]);
        assert!(!user.email_validated);
    }
}
