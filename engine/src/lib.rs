//! Rice Production Management Platform - Group-Formation Engine
//!
//! Partitions season-eligible land parcels into spatially coherent,
//! temporally coherent, size-bounded groups. Groups are the unit of
//! supervision, production planning and material distribution for the
//! season; parcels that cannot be grouped are returned with a diagnostic
//! reason instead of an error.
//!
//! The engine is a pure, synchronous computation over an in-memory input
//! snapshot: no I/O, no cross-run state, identical output for identical
//! input. Persistence of the resulting groups is the caller's concern.

pub mod config;
pub mod error;
pub mod geometry;
pub mod grouping;
pub mod naming;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use grouping::{GroupFormationService, GroupingOutcome};
