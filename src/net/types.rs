//! Serde types shared with the REST backend.

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the auth and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl User {
    /// Display name for the navigation bar: "First Last", falling back to
    /// the email address when no name is set.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_owned(),
            (None, Some(last)) => last.to_owned(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Successful response from `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body for `PUT /users/profile`; omitted fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A stored document as returned by `GET /documents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: i64,
    pub filename: String,
    pub original_filename: String,
    pub file_type: String,
    pub file_size: u64,
    pub upload_date: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub description: String,
}
