//! Wire-protocol DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Records keep unknown server fields in a flattened map so a user persisted
//! to storage and read back carries everything the server sent.

use serde::{Deserialize, Serialize};

pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Role value granting access to admin-only routes.
pub const ADMIN_ROLE: &str = "admin";

/// A decoded 2xx response: HTTP status plus typed body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

/// JSON error envelope returned by the API on failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// USER
// =============================================================================

/// Current authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Department the user belongs to: an id, or the expanded record.
    #[serde(default)]
    pub department: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .is_some_and(|r| r.eq_ignore_ascii_case(ADMIN_ROLE))
    }
}

/// Body of login and registration responses.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// Body of profile update responses.
#[derive(Clone, Debug, Deserialize)]
pub struct UserPayload {
    pub user: User,
    #[serde(default)]
    pub message: String,
}

/// Body of responses that only carry a message.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// DEPARTMENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DepartmentsPayload {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// ENTERPRISE
// =============================================================================

/// Organization record. Address fields follow the Brazilian layout (CNPJ/CPF, CEP).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub number_address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Update request: the full editable record plus the caller's password as confirmation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnterpriseUpdate {
    #[serde(flatten)]
    pub enterprise: Enterprise,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnterprisePayload {
    pub enterprise: Enterprise,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
