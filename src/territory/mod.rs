//! Territory store
//!
//! Owns the fixed collection of territory records for a session.

pub mod store;
#[allow(clippy::module_inception)]
pub mod territory;

pub use store::TerritoryStore;
pub use territory::Territory;
