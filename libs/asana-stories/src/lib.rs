//! Asana Stories Library
//!
//! Binding for the Asana "story" resource: the activity records and comments
//! attached to tasks. Stories are generated server-side whenever users act on
//! a task (creating, assigning, moving between projects); comments are the
//! user-authored form of story.
//!
//! Stories are history, and as such effectively read-only: once created, only
//! the text and pinned state of a comment can change. Every operation here is
//! a single pass-through request via the shared [`asana_core`] client.

pub mod models;
pub mod stories;

pub use models::{Story, StoryContent};
pub use stories::Stories;
