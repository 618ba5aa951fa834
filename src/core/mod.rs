pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{AttackError, Result, WarError};
pub use types::{ArmyColor, BoundedText, Side, TerritoryId, TerritoryName};
