//! Territory record

use crate::core::error::Result;
use crate::core::types::{ArmyColor, TerritoryName};

/// A named slot held by one army with a troop count.
///
/// The default value is the unregistered slot: empty name, empty color,
/// no troops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Territory {
    pub name: TerritoryName,
    pub army_color: ArmyColor,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, army_color: &str, troops: u32) -> Result<Self> {
        Ok(Self {
            name: TerritoryName::new(name)?,
            army_color: ArmyColor::new(army_color)?,
            troops,
        })
    }

    /// Has a name, an owner and at least one troop
    pub fn is_registered(&self) -> bool {
        !self.name.is_empty() && !self.army_color.is_empty() && self.troops >= 1
    }

    pub fn is_held_by(&self, color: &str) -> bool {
        self.army_color.same_as(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unregistered() {
        let t = Territory::default();
        assert!(!t.is_registered());
        assert_eq!(t.troops, 0);
        assert!(!t.is_held_by(""));
    }

    #[test]
    fn test_new_validates_fields() {
        let t = Territory::new("Brazil", "Green", 3).unwrap();
        assert!(t.is_registered());
        assert!(t.is_held_by("green"));

        assert!(Territory::new("", "Green", 3).is_err());
        assert!(Territory::new("Brazil", &"x".repeat(20), 3).is_err());
    }

    #[test]
    fn test_zero_troops_is_unregistered() {
        let t = Territory::new("Peru", "Red", 0).unwrap();
        assert!(!t.is_registered());
    }
}
