//! Story resource model
//!
//! Field names and omit-if-empty semantics match the Asana wire format
//! exactly; nothing here is validated locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use asana_core::{Task, User};

/// Story type tag the service assigns to user-authored comments
pub const STORY_TYPE_COMMENT: &str = "comment";

/// Editable content fields of a story
///
/// Human-readable text for the story or comment, without the creator's name.
/// `text` is not guaranteed to be stable for a given type of system story
/// (e.g. a reassignment may not always say "assigned to ..."); the API does
/// not provide a structured way of inspecting a story's meaning.
///
/// Editable only when the owning story is a comment, and at most one of
/// `text` / `html_text` may be set on a single update. `html_text` is only
/// returned when requested via `opt_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_text: Option<String>,

    /// Whether the story is pinned on the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

impl StoryContent {
    /// Content with plain text set
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Content with HTML-formatted text set
    pub fn html(html_text: impl Into<String>) -> Self {
        Self {
            html_text: Some(html_text.into()),
            ..Self::default()
        }
    }

    /// Set the pinned state
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = Some(pinned);
        self
    }
}

/// An activity record attached to a task
///
/// Everything outside the embedded [`StoryContent`] is read-only and
/// assigned server-side. Stories are never deleted through this interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Globally unique ID of the story
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gid: String,

    #[serde(flatten)]
    pub content: StoryContent,

    /// The time at which the story was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// True if the story is hearted by the authorized user
    #[serde(default, skip_serializing_if = "is_false")]
    pub hearted: bool,

    /// Users who have hearted this story
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hearts: Vec<User>,

    /// Number of users who have hearted this story
    #[serde(default, skip_serializing_if = "is_zero")]
    pub num_hearts: i32,

    /// The user who created the story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,

    /// The object this story is attached to; currently always a task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Task>,

    /// The component of the product that triggered the story (e.g. `"web"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// The type of story (e.g. `"comment"`, `"system"`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
}

impl Story {
    /// Whether this story is a user-authored comment
    ///
    /// Only comments accept text edits; pinning also works on attachments.
    pub fn is_comment(&self) -> bool {
        self.story_type.as_deref() == Some(STORY_TYPE_COMMENT)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}
