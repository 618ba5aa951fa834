use thiserror::Error;

use crate::core::types::TerritoryId;

/// Reasons a single attack is rejected before any dice are rolled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    #[error("Territory {id} does not exist (valid ids: 0..{count})")]
    OutOfRange { id: TerritoryId, count: usize },

    #[error("A territory cannot attack itself")]
    SameTerritory,

    #[error("Territory {id} has {troops} troop(s); at least 2 are needed to attack")]
    InsufficientTroops { id: TerritoryId, troops: u32 },

    #[error("Both territories belong to the {color} army")]
    FriendlyFire { color: String },

    #[error("Territory {id} has no troops to fight")]
    Unoccupied { id: TerritoryId },
}

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Failed to allocate map for {count} territories: {reason}")]
    Allocation { count: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid attack: {0}")]
    InvalidAttack(#[from] AttackError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,
}

impl WarError {
    /// Errors the player can recover from by trying again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WarError::InvalidInput(_) | WarError::InvalidAttack(_))
    }
}

pub type Result<T> = std::result::Result<T, WarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_error_converts() {
        let err: WarError = AttackError::SameTerritory.into();
        assert!(matches!(err, WarError::InvalidAttack(AttackError::SameTerritory)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_fatal_errors_not_recoverable() {
        let err = WarError::Allocation { count: 5, reason: "out of memory".into() };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("5 territories"));
        assert!(!WarError::InputClosed.is_recoverable());
    }

    #[test]
    fn test_insufficient_troops_message() {
        let err = AttackError::InsufficientTroops { id: TerritoryId(2), troops: 1 };
        assert_eq!(
            err.to_string(),
            "Territory 2 has 1 troop(s); at least 2 are needed to attack"
        );
    }
}
