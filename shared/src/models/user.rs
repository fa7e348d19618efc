//! User Model

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Back-office user category, as carried on user records.
///
/// The server may introduce new categories before the client is
/// updated; those decode as [`UserType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Admin,
    Saler,
    Finance,
    Logistics,
    #[serde(other)]
    Unknown,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub user_type: UserType,
    pub enabled: bool,
    pub created_at: i64,
}

/// List users payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub search_page: PageRequest,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub user_type: UserType,
}

/// Modify user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyUserRequest {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_type_decodes_to_unknown() {
        let t: UserType = serde_json::from_str(r#""WAREHOUSE""#).unwrap();
        assert_eq!(t, UserType::Unknown);
    }

    #[test]
    fn user_type_uses_upper_snake_on_the_wire() {
        assert_eq!(serde_json::to_string(&UserType::Saler).unwrap(), r#""SALER""#);
        assert_eq!(serde_json::to_string(&UserType::Logistics).unwrap(), r#""LOGISTICS""#);
    }
}
