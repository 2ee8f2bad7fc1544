//! Shared application model types.

pub mod api;
pub mod app;
