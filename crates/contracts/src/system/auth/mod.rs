use crate::shared::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

/// Answer of `/login`; `status == "valid"` marks accepted credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub user_id: Option<String>,
    #[serde(rename = "Job Title", default, deserialize_with = "wire::opt_string_lenient")]
    pub job_title: Option<String>,
}

/// Login form as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field messages shown under the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// The username is trimmed for the check; the password is not.
    pub fn validate(&self) -> LoginFieldErrors {
        LoginFieldErrors {
            username: self
                .username
                .trim()
                .is_empty()
                .then(|| "Username is required".to_string()),
            password: self
                .password
                .is_empty()
                .then(|| "Password is required".to_string()),
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            user_id: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
