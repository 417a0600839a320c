//! Story operations
//!
//! Each operation is one outbound request through the shared client; any
//! transport or service error is returned to the caller unchanged. Input
//! validity (existing task, comment-only text edits, text/html exclusivity)
//! is enforced remotely, not here.

use tracing::{debug, info};

use asana_core::{ApiRequest, NextPage, RequestOptions, Result};

use crate::models::{Story, StoryContent};

/// Story operations over a shared API client
///
/// Borrows the client; the handle itself is stateless, so callers may create
/// one per call or keep one around, and issue calls concurrently.
pub struct Stories<'a, C> {
    client: &'a C,
}

impl<'a, C: ApiRequest> Stories<'a, C> {
    /// Create a story handle over a client
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// List all stories attached to a task
    ///
    /// Returns the stories in server-defined order (typically chronological)
    /// plus the continuation cursor for the next page, if any.
    pub async fn list_for_task(
        &self,
        task_gid: &str,
        opts: &RequestOptions,
    ) -> Result<(Vec<Story>, Option<NextPage>)> {
        debug!("Listing stories for task {}", task_gid);

        self.client
            .get_list(&format!("/tasks/{}/stories", task_gid), opts)
            .await
    }

    /// Add a comment story to a task
    ///
    /// The service assigns `gid`, `created_at`, `created_by` and
    /// `type = "comment"` and returns the full new record.
    pub async fn create_comment(&self, task_gid: &str, content: &StoryContent) -> Result<Story> {
        info!("Creating comment for task {}", task_gid);

        self.client
            .post(&format!("/tasks/{}/stories", task_gid), content)
            .await
    }

    /// Update a story and return the full updated record
    ///
    /// Only comment stories can have their text updated, and only comment and
    /// attachment stories can be pinned. At most one of `text` and
    /// `html_text` may be set per request.
    pub async fn update(&self, story_gid: &str, content: &StoryContent) -> Result<Story> {
        info!("Updating story {}", story_gid);

        self.client
            .put(&format!("/stories/{}", story_gid), content)
            .await
    }
}
