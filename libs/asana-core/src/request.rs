//! Request and response envelope types
//!
//! Every Asana payload travels nested under a top-level `data` key; list
//! responses additionally carry an opaque `next_page` continuation cursor.

use serde::{Deserialize, Serialize};

/// Opaque continuation cursor returned with paginated list responses
///
/// Absent on the last (or only) page. Callers pass `offset` back verbatim
/// via [`RequestOptions::with_offset`] to fetch the next page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextPage {
    pub offset: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub uri: String,
}

/// Response envelope: `{"data": ..., "next_page": ...}`
#[derive(Debug, Deserialize)]
pub struct ResponseBody<T> {
    pub data: T,
    pub next_page: Option<NextPage>,
}

/// Request envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct RequestBody<T> {
    pub data: T,
}

/// Per-request query options
///
/// Translated to the `limit`, `offset`, `opt_fields` and `opt_pretty` query
/// parameters. Empty options add no parameters at all.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub limit: Option<u32>,
    pub offset: Option<String>,
    pub fields: Vec<String>,
    pub pretty: bool,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of objects to return per page
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continuation cursor from a previous page's [`NextPage::offset`]
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Extra fields to include in the response (`opt_fields`)
    ///
    /// Needed e.g. for `html_text`, which the service only returns when
    /// explicitly requested.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Ask the service for pretty-printed JSON (`opt_pretty`)
    pub fn with_pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Render the options as query parameters
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = &self.offset {
            query.push(("offset".to_string(), offset.clone()));
        }
        if !self.fields.is_empty() {
            query.push(("opt_fields".to_string(), self.fields.join(",")));
        }
        if self.pretty {
            query.push(("opt_pretty".to_string(), "true".to_string()));
        }

        query
    }
}
