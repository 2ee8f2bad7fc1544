//! Server application core modules.
//!
//! This crate contains all functionality for the favourite-places backend:
//! HTTP routing, request controllers, database repositories, configuration,
//! and error handling. Students record favourite places with descriptive
//! metadata, and callers can like a place at most once per student.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod util;
