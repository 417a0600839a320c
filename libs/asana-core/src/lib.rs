//! Asana Core Library
//!
//! Shared client plumbing for the Asana REST API bindings.
//! Provides the authenticated HTTP client, the request/response envelope,
//! pagination cursors, request options, and consistent error handling.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod request;

pub use client::{ApiRequest, Client};
pub use config::ClientConfig;
pub use errors::{ApiError, ApiErrorDetail, Result};
pub use models::{Task, User};
pub use request::{NextPage, RequestBody, RequestOptions, ResponseBody};
