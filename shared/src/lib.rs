//! Shared types and models for the Rice Production Management Platform
//!
//! This crate contains types shared between the group-formation engine,
//! the surrounding service layer, and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
