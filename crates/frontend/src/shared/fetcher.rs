//! Fetcher - one POST round-trip to the hotel API.
//!
//! Every endpoint speaks JSON over POST and reports success in its own way:
//! some only through the HTTP status, most through a marker field in the
//! body (`status == "Modified"`, `valid: true`, ...). A [`SuccessMarker`]
//! names that rule per call, so pages get either an accepted body or an
//! [`ActionError`].

use crate::shared::action_error::ActionError;
use crate::shared::api_utils::ApiConfig;
use async_trait::async_trait;
use contracts::shared::wire;
use gloo_net::http::Request;
use leptos::context::{provide_context, use_context};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Status line and body text of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub text: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST. No retries, no timeout.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn post_json(&self, url: &str, body: Option<&Value>) -> Result<RawResponse, ActionError>;
}

/// Browser transport over `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: Option<&Value>) -> Result<RawResponse, ActionError> {
        let builder = Request::post(url).header("Content-Type", "application/json");
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ActionError::Network(format!("Failed to build request: {e}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| ActionError::Network(format!("Failed to send request: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ActionError::Network(format!("Failed to read response: {e}")))?;
        Ok(RawResponse { status, text })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerValue {
    Text(&'static str),
    /// Any truthy JSON value (`true`, non-zero, non-empty).
    Truthy,
}

/// How an endpoint says "accepted".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessMarker {
    /// A 2xx status is enough.
    HttpOk,
    FieldEquals {
        field: &'static str,
        value: MarkerValue,
    },
    FieldIn {
        field: &'static str,
        values: &'static [&'static str],
    },
    /// The body itself is a JSON array.
    JsonArray,
}

impl SuccessMarker {
    pub const fn status(value: &'static str) -> Self {
        SuccessMarker::FieldEquals {
            field: "status",
            value: MarkerValue::Text(value),
        }
    }

    pub const fn truthy(field: &'static str) -> Self {
        SuccessMarker::FieldEquals {
            field,
            value: MarkerValue::Truthy,
        }
    }

    /// Checks a decoded body against the marker.
    pub fn check(&self, body: &Value) -> Result<(), ActionError> {
        match *self {
            SuccessMarker::HttpOk => Ok(()),
            SuccessMarker::JsonArray => {
                if body.is_array() {
                    Ok(())
                } else {
                    Err(ActionError::ResponseShape("expected a JSON array".to_string()))
                }
            }
            SuccessMarker::FieldEquals { field, value } => {
                let found = marker_field(body, field)?;
                let accepted = match value {
                    MarkerValue::Text(expected) => found.as_str() == Some(expected),
                    MarkerValue::Truthy => wire::is_truthy(found),
                };
                accepted.then_some(()).ok_or_else(|| rejection(body))
            }
            SuccessMarker::FieldIn { field, values } => {
                let found = marker_field(body, field)?;
                let accepted = found
                    .as_str()
                    .map(|s| values.iter().any(|v| *v == s))
                    .unwrap_or(false);
                accepted.then_some(()).ok_or_else(|| rejection(body))
            }
        }
    }
}

fn marker_field<'a>(body: &'a Value, field: &str) -> Result<&'a Value, ActionError> {
    body.get(field)
        .ok_or_else(|| ActionError::ResponseShape(format!("missing `{field}` in response")))
}

/// Server-supplied explanation, if the body carries one.
fn server_reason(body: &Value) -> Option<String> {
    ["message", "error", "reason"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn rejection(body: &Value) -> ActionError {
    ActionError::Rejected {
        reason: server_reason(body),
    }
}

/// Placeholder body for endpoints that take none.
pub const NO_BODY: Option<&()> = None;

/// Issues requests against one API base URL through one transport.
#[derive(Clone)]
pub struct Fetcher {
    config: ApiConfig,
    transport: Arc<dyn ApiTransport + Send + Sync>,
}

impl Fetcher {
    pub fn new(config: ApiConfig, transport: impl ApiTransport + Send + Sync + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, GlooTransport)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POSTs `body` to `path` and returns the decoded body once `marker`
    /// accepts it.
    pub async fn post<B>(
        &self,
        path: &str,
        body: Option<&B>,
        marker: SuccessMarker,
    ) -> Result<Value, ActionError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        let payload = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ActionError::Network(format!("Failed to serialize request: {e}")))?;

        log::debug!("POST {}", url);
        let raw = self.transport.post_json(&url, payload.as_ref()).await?;

        let parsed = if raw.text.trim().is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str::<Value>(&raw.text)
        };

        if !raw.is_success() {
            log::warn!("POST {} answered {}", url, raw.status);
            let reason = parsed.ok().as_ref().and_then(server_reason);
            return Err(ActionError::Rejected { reason });
        }

        let body = parsed.map_err(|e| {
            log::warn!("POST {} returned non-JSON body: {}", url, e);
            ActionError::ResponseShape(format!("invalid JSON: {e}"))
        })?;
        marker.check(&body)?;
        Ok(body)
    }

    /// Like [`post`](Fetcher::post), then decodes the accepted body as `T`.
    pub async fn post_as<B, T>(
        &self,
        path: &str,
        body: Option<&B>,
        marker: SuccessMarker,
    ) -> Result<T, ActionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.post(path, body, marker).await?;
        serde_json::from_value(value).map_err(|e| {
            log::warn!("POST {} decode failed: {}", path, e);
            ActionError::ResponseShape(e.to_string())
        })
    }
}

pub fn provide_fetcher(fetcher: Fetcher) {
    provide_context(fetcher);
}

pub fn use_fetcher() -> Fetcher {
    use_context::<Fetcher>().expect("Fetcher context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::RecordingTransport;
    use futures::executor::block_on;
    use serde_json::json;

    const DELETED: &[&str] = &["Deleted", "Modified"];

    #[test]
    fn http_ok_accepts_any_2xx_body() {
        let t = RecordingTransport::new();
        t.reply(201, json!({ "anything": 1 }));
        let fetcher = t.fetcher();
        let body = block_on(fetcher.post("/reseption/room_booking", Some(&json!({})), SuccessMarker::HttpOk));
        assert_eq!(body, Ok(json!({ "anything": 1 })));
        assert_eq!(t.calls()[0].url, "http://hotel.test/reseption/room_booking");
    }

    #[test]
    fn non_2xx_is_a_rejection_even_for_http_ok() {
        let t = RecordingTransport::new();
        t.reply(500, json!({ "message": "db down" }));
        let result = block_on(t.fetcher().post("/x", NO_BODY, SuccessMarker::HttpOk));
        assert_eq!(
            result,
            Err(ActionError::Rejected {
                reason: Some("db down".into())
            })
        );
    }

    #[test]
    fn marker_with_other_value_is_rejected() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Not Modified" }));
        let result = block_on(t.fetcher().post("/x", NO_BODY, SuccessMarker::status("Modified")));
        assert_eq!(result, Err(ActionError::Rejected { reason: None }));
    }

    #[test]
    fn missing_marker_is_a_shape_error() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "pending_list": [] }));
        let result = block_on(t.fetcher().post("/x", NO_BODY, SuccessMarker::truthy("valid")));
        assert!(matches!(result, Err(ActionError::ResponseShape(_))));
    }

    #[test]
    fn non_json_body_is_a_shape_error() {
        let t = RecordingTransport::new();
        t.reply_text(200, "<html>oops</html>");
        let result = block_on(t.fetcher().post("/x", NO_BODY, SuccessMarker::HttpOk));
        assert!(matches!(result, Err(ActionError::ResponseShape(_))));
    }

    #[test]
    fn transport_failure_is_a_network_error() {
        let t = RecordingTransport::new();
        t.fail("connection refused");
        let result = block_on(t.fetcher().post("/x", NO_BODY, SuccessMarker::HttpOk));
        assert!(matches!(result, Err(ActionError::Network(_))));
    }

    #[test]
    fn field_in_and_array_markers() {
        let deleted = SuccessMarker::FieldIn {
            field: "status",
            values: DELETED,
        };
        assert!(deleted.check(&json!({ "status": "Deleted" })).is_ok());
        assert!(deleted.check(&json!({ "status": "Nope" })).is_err());
        assert!(SuccessMarker::JsonArray.check(&json!([])).is_ok());
        assert!(SuccessMarker::JsonArray.check(&json!({})).is_err());
        assert!(SuccessMarker::truthy("content").check(&json!({ "content": false })).is_err());
    }

    #[test]
    fn sends_body_as_json() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "Deleted" }));
        let _ = block_on(t.fetcher().post(
            "/authority/delete_employee",
            Some(&json!({ "userid": "E1" })),
            SuccessMarker::status("Deleted"),
        ));
        assert_eq!(t.calls()[0].body, Some(json!({ "userid": "E1" })));
    }
}
