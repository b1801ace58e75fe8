use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVerification {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpLoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl OtpLoginResponse {
    /// The issued token, provided the backend confirmed the login. A reply
    /// carrying any other message is not a successful login.
    pub fn session_token(&self) -> Option<&str> {
        let confirmed = self
            .message
            .as_deref()
            .map_or(true, |message| message.trim() == LOGIN_SUCCESS_MESSAGE);
        self.token
            .as_deref()
            .filter(|token| confirmed && !token.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default, with = "allowed_roles")]
    pub allowed_roles: BTreeSet<String>,
}

impl Dashboard {
    pub fn roles_label(&self) -> String {
        self.allowed_roles
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body for `POST /dashboards` and `PUT /dashboards/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub title: String,
    pub url: String,
    #[serde(rename = "allowedRoles")]
    pub allowed_roles: Vec<String>,
}

/// `allowed_roles` travels as a JSON-encoded string (`"[\"user1\"]"`).
/// Blank, null or malformed values decode to the empty set.
pub mod allowed_roles {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::collections::BTreeSet;

    pub fn decode(raw: &str) -> BTreeSet<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return BTreeSet::new();
        }
        match serde_json::from_str::<Vec<String>>(trimmed) {
            Ok(roles) => roles.into_iter().collect(),
            Err(err) => {
                log::warn!("Ignoring malformed allowed_roles {:?}: {}", raw, err);
                BTreeSet::new()
            }
        }
    }

    pub fn encode(roles: &BTreeSet<String>) -> String {
        serde_json::to_string(roles).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn serialize<S>(roles: &BTreeSet<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(roles))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(raw)) => decode(&raw),
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => BTreeSet::new(),
        })
    }
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";
    pub const FORBIDDEN: &'static str = "FORBIDDEN";
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    fn with_code(code: &str, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(Self::VALIDATION_ERROR, msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(Self::UNKNOWN, msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(Self::REQUEST_FAILED, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(Self::UNAUTHORIZED, msg)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_code(Self::FORBIDDEN, msg)
    }

    pub fn is_auth_failure(&self) -> bool {
        self.code == Self::UNAUTHORIZED
    }

    /// Builds an error from a non-success response body, falling back to the status line.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ApiError>(body) {
            return parsed;
        }
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| match reason {
                Some(reason) => format!("{} {}", status, reason),
                None => format!("Request failed with status {}", status),
            });
        match status {
            401 => Self::unauthorized(message),
            403 => Self::forbidden(message),
            _ => Self::unknown(message),
        }
    }
}
