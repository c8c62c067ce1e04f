use crate::domain::common::ResourceItem;
use crate::shared::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Pending,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "pending",
            MaintenanceStatus::Completed => "completed",
        }
    }
}

/// Scheduled upkeep of a room, a restaurant or a common area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub maintenance_id: i64,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub today_maintenance_date: Option<String>,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub status: String,
    #[serde(default, deserialize_with = "wire::bool_lenient")]
    pub is_room: bool,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "wire::bool_lenient")]
    pub is_rest: bool,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub rest_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub common_area_name: Option<String>,
}

impl MaintenanceTask {
    /// "Room 101", "Restaurant 2" or the common area name.
    pub fn location_label(&self) -> String {
        if self.is_room {
            format!("Room {}", self.room_id.as_deref().unwrap_or_default())
        } else if self.is_rest {
            format!("Restaurant {}", self.rest_id.as_deref().unwrap_or_default())
        } else {
            self.common_area_name.clone().unwrap_or_default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case(MaintenanceStatus::Pending.as_str())
    }
}

impl ResourceItem for MaintenanceTask {
    type Id = i64;

    fn id(&self) -> i64 {
        self.maintenance_id
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Answer of both the pending list and the status update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingListResponse {
    #[serde(default)]
    pub pending_list: Option<Vec<MaintenanceTask>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifyMaintenanceRequest {
    pub maintenance_id: i64,
    pub status: String,
}

impl ModifyMaintenanceRequest {
    pub fn completed(maintenance_id: i64) -> Self {
        Self {
            maintenance_id,
            status: MaintenanceStatus::Completed.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_prefers_room_then_restaurant() {
        let task: MaintenanceTask = serde_json::from_value(json!({
            "maintenance_id": "4",
            "status": "pending",
            "is_room": 1,
            "room_id": 101,
            "is_rest": 1,
            "rest_id": 2
        }))
        .unwrap();
        assert_eq!(task.maintenance_id, 4);
        assert_eq!(task.location_label(), "Room 101");
        assert!(task.is_pending());

        let lobby = MaintenanceTask {
            common_area_name: Some("Lobby".into()),
            ..Default::default()
        };
        assert_eq!(lobby.location_label(), "Lobby");
    }

    #[test]
    fn missing_pending_list_stays_distinguishable() {
        let r: PendingListResponse = serde_json::from_value(json!({ "valid": true })).unwrap();
        assert!(r.pending_list.is_none());
    }
}
