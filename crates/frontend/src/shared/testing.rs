//! Scripted transport for exercising API calls without a browser.

use crate::shared::action_error::ActionError;
use crate::shared::api_utils::ApiConfig;
use crate::shared::fetcher::{ApiTransport, Fetcher, RawResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub body: Option<Value>,
}

/// Answers requests from a queue and records what was sent. Clones share
/// the same queue and log.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    replies: Arc<Mutex<VecDeque<Result<RawResponse, ActionError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetcher(&self) -> Fetcher {
        Fetcher::new(ApiConfig::new("http://hotel.test"), self.clone())
    }

    pub fn reply(&self, status: u16, body: Value) -> &Self {
        self.reply_text(status, &body.to_string())
    }

    pub fn reply_text(&self, status: u16, text: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(RawResponse {
            status,
            text: text.to_string(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ActionError::Network(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl ApiTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: Option<&Value>) -> Result<RawResponse, ActionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            body: body.cloned(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ActionError::Network("no scripted reply".to_string())))
    }
}
