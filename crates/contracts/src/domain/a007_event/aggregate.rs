use crate::domain::common::ResourceItem;
use crate::shared::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Scheduled,
    Over,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "Scheduled",
            EventStatus::Over => "Over",
        }
    }
}

/// Event held at the hotel today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "wire::i64_lenient")]
    pub event_id: i64,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub event_name: String,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_string_lenient")]
    pub insert_date: Option<String>,
    #[serde(default, deserialize_with = "wire::string_lenient")]
    pub status: String,
}

impl Event {
    pub fn is_over(&self) -> bool {
        self.status == EventStatus::Over.as_str()
    }
}

impl ResourceItem for Event {
    type Id = i64;

    fn id(&self) -> i64 {
        self.event_id
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListResponse {
    #[serde(default, deserialize_with = "wire::vec_or_null")]
    pub data: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStatusRequest {
    pub id: i64,
    pub status: String,
}

impl EventStatusRequest {
    pub fn over(id: i64) -> Self {
        Self {
            id,
            status: EventStatus::Over.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_todays_events() {
        let list: EventListResponse = serde_json::from_value(json!({
            "content": true,
            "data": [
                { "event_id": 1, "event_name": "Gala", "description": "Dinner", "status": "Scheduled" },
                { "event_id": "2", "event_name": "Yoga", "description": null, "status": "Over" }
            ]
        }))
        .unwrap();
        assert_eq!(list.data.len(), 2);
        assert!(!list.data[0].is_over());
        assert!(list.data[1].is_over());
        assert_eq!(list.data[1].description, "");
    }

    #[test]
    fn status_request_shape() {
        let value = serde_json::to_value(EventStatusRequest::over(4)).unwrap();
        assert_eq!(value, json!({ "id": 4, "status": "Over" }));
    }
}
