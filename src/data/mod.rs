//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain (favourite places and likes).

pub mod like;
pub mod place;
