//! HTTP controller endpoints for the favourite-places API.
//!
//! Controllers handle HTTP requests, validate request bodies, interact with
//! the data access layer, and return appropriate HTTP responses. Each handler
//! is annotated with utoipa for OpenAPI documentation.

pub mod like;
pub mod place;
