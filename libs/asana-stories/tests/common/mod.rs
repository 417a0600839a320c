//! Mock API client for binding tests
//!
//! Substitute implementation of `ApiRequest` that records every outbound
//! request and answers from a queue of canned replies, so the story binding
//! can be exercised without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use asana_core::{ApiError, ApiErrorDetail, ApiRequest, NextPage, RequestOptions, Result};

/// One request the mock observed
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Canned reply for one request
pub enum Reply {
    /// Payload that would arrive under the `data` key
    Data(Value),
    /// List payload plus continuation cursor
    Page(Value, Option<NextPage>),
    /// Remote service error with status and message
    Error(u16, &'static str),
}

pub struct MockClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    /// Create a mock client answering from the given replies in order
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests observed so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: &str, query: Vec<(String, String)>, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            query,
            body,
        });
    }

    fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock client ran out of canned replies")
    }
}

fn remote_error(status: u16, message: &str) -> ApiError {
    ApiError::Api {
        status,
        errors: vec![ApiErrorDetail {
            message: message.to_string(),
            help: None,
            phrase: None,
        }],
    }
}

#[async_trait]
impl ApiRequest for MockClient {
    async fn get<T>(&self, path: &str, opts: &RequestOptions) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.record("GET", path, opts.to_query(), None);
        match self.next_reply() {
            Reply::Data(data) | Reply::Page(data, _) => {
                Ok(serde_json::from_value(data).expect("mock payload shape"))
            }
            Reply::Error(status, message) => Err(remote_error(status, message)),
        }
    }

    async fn get_list<T>(
        &self,
        path: &str,
        opts: &RequestOptions,
    ) -> Result<(Vec<T>, Option<NextPage>)>
    where
        T: DeserializeOwned + Send,
    {
        self.record("GET", path, opts.to_query(), None);
        match self.next_reply() {
            Reply::Page(data, next_page) => Ok((
                serde_json::from_value(data).expect("mock list payload shape"),
                next_page,
            )),
            Reply::Data(data) => Ok((
                serde_json::from_value(data).expect("mock list payload shape"),
                None,
            )),
            Reply::Error(status, message) => Err(remote_error(status, message)),
        }
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let body = serde_json::to_value(body).expect("serializable request body");
        self.record("POST", path, Vec::new(), Some(body));
        match self.next_reply() {
            Reply::Data(data) | Reply::Page(data, _) => {
                Ok(serde_json::from_value(data).expect("mock payload shape"))
            }
            Reply::Error(status, message) => Err(remote_error(status, message)),
        }
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let body = serde_json::to_value(body).expect("serializable request body");
        self.record("PUT", path, Vec::new(), Some(body));
        match self.next_reply() {
            Reply::Data(data) | Reply::Page(data, _) => {
                Ok(serde_json::from_value(data).expect("mock payload shape"))
            }
            Reply::Error(status, message) => Err(remote_error(status, message)),
        }
    }
}
