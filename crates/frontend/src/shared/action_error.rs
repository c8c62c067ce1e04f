//! Failure taxonomy for every page action.

use contracts::shared::validation::Violations;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Client-side rules failed; nothing was sent.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response was not JSON or lacked the expected marker field.
    #[error("unexpected response: {0}")]
    ResponseShape(String),

    /// Non-2xx status, or a marker field holding another value.
    #[error("rejected by server: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },
}

impl ActionError {
    pub fn validation(messages: Vec<String>) -> Self {
        ActionError::Validation(messages)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ActionError::Validation(_))
    }

    /// `Ok(())` when no rule failed.
    pub fn check(violations: Violations) -> Result<(), ActionError> {
        violations.into_result().map_err(ActionError::Validation)
    }

    /// Text for the page banner. `rejected` covers answers the server gave
    /// but did not accept, `failed` covers everything that broke on the way.
    pub fn banner_text(&self, rejected: &str, failed: &str) -> String {
        match self {
            ActionError::Validation(messages) => messages.join(", "),
            ActionError::Rejected {
                reason: Some(reason),
            } if !reason.trim().is_empty() => reason.clone(),
            ActionError::Rejected { .. } | ActionError::ResponseShape(_) => rejected.to_string(),
            ActionError::Network(_) => failed.to_string(),
        }
    }
}

impl From<Violations> for ActionError {
    fn from(violations: Violations) -> Self {
        ActionError::Validation(violations.messages().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined() {
        let err = ActionError::validation(vec!["A".into(), "B".into()]);
        assert_eq!(err.banner_text("x", "y"), "A, B");
        assert_eq!(err.to_string(), "A, B");
    }

    #[test]
    fn server_reason_wins_over_generic_text() {
        let err = ActionError::Rejected {
            reason: Some("User already exists".into()),
        };
        assert_eq!(err.banner_text("Failed", "Error"), "User already exists");

        let err = ActionError::Rejected { reason: None };
        assert_eq!(err.banner_text("Failed", "Error"), "Failed");
    }

    #[test]
    fn transport_failures_use_the_failure_text() {
        let err = ActionError::Network("offline".into());
        assert_eq!(err.banner_text("Failed", "Error"), "Error");
        let err = ActionError::ResponseShape("missing `valid`".into());
        assert_eq!(err.banner_text("Failed", "Error"), "Failed");
    }
}
