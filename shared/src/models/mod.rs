//! Domain models for the Rice Production Management Platform

mod group;
mod parcel;
mod season;

pub use group::*;
pub use parcel::*;
pub use season::*;
