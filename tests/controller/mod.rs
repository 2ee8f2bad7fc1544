//! Tests for HTTP controller endpoints.
//!
//! Most tests call the handler functions directly with application state;
//! body-level validation cases (non-JSON bodies, missing fields) drive the
//! full router instead so the extractor rejection path is exercised.

mod like;
