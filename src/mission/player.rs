//! The human player as the mission system sees them

use crate::core::types::{ArmyColor, TerritoryId};
use crate::territory::TerritoryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub color: ArmyColor,
    /// Territories that already carried the player's color when
    /// registration finished. They were never conquered.
    home: Vec<TerritoryId>,
}

impl Player {
    pub fn new(color: ArmyColor) -> Self {
        Self { color, home: Vec::new() }
    }

    pub fn with_home(color: ArmyColor, home: Vec<TerritoryId>) -> Self {
        Self { color, home }
    }

    /// Snapshot the territories the player starts with
    pub fn record_home(&mut self, store: &TerritoryStore) {
        self.home = store.ids_held_by(self.color.as_str());
        tracing::debug!(color = %self.color, home = ?self.home, "home territories recorded");
    }

    pub fn home_territories(&self) -> &[TerritoryId] {
        &self.home
    }

    pub fn is_home(&self, id: TerritoryId) -> bool {
        self.home.contains(&id)
    }

    /// Territories now held by the player that were not home territories
    pub fn conquered(&self, store: &TerritoryStore) -> usize {
        store
            .iter()
            .filter(|(id, t)| t.is_held_by(self.color.as_str()) && !self.is_home(*id))
            .count()
    }
}
