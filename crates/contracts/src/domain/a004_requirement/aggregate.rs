use crate::domain::common::ResourceItem;
use crate::shared::validation::{self, Violations};
use crate::shared::wire;
use serde::{Deserialize, Serialize};

/// Status a new requirement is filed under; the add endpoint echoes it back.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// Maintenance request raised by staff or a guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub requirement_id: i64,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub status: String,
}

impl Requirement {
    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_PENDING)
    }
}

impl ResourceItem for Requirement {
    type Id = i64;

    fn id(&self) -> i64 {
        self.requirement_id
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementListResponse {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub fetched_data: Vec<Requirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRequirement {
    pub user_id: String,
    #[serde(rename = "isCustomer")]
    pub is_customer: bool,
    pub room_id: String,
    pub description: String,
}

impl NewRequirement {
    pub fn validate(&self) -> Violations {
        let mut v = Violations::new();
        v.check(!validation::is_blank(&self.user_id), "User ID is required");
        v.check(!validation::is_blank(&self.room_id), "Room ID is required");
        v.check(
            !validation::is_blank(&self.description),
            "Description is required",
        );
        v
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyRequirementRequest {
    pub requirement_id: i64,
    pub status: String,
}

impl ModifyRequirementRequest {
    pub fn completed(requirement_id: i64) -> Self {
        Self {
            requirement_id,
            status: STATUS_COMPLETED.to_string(),
        }
    }
}
