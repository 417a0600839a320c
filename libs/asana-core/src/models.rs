//! Compact entity references shared across resource bindings
//!
//! These are the shapes Asana embeds inside other resources (`created_by`,
//! `hearts`, `target`). Fields beyond `gid` and `name` only appear when
//! requested via `opt_fields`, so everything optional stays omitted from
//! serialized payloads when empty.

use serde::{Deserialize, Serialize};

/// A user reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Globally unique ID of the user
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A task reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Globally unique ID of the task
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
