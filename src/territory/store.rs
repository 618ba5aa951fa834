//! Fixed-size territory storage
//!
//! The store is sized once at startup and never grows or shrinks. It is owned
//! by the game controller; everything else borrows it for one call.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::core::error::{Result, WarError};
use crate::core::types::{ArmyColor, TerritoryId, TerritoryName};
use crate::territory::Territory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryStore {
    territories: Vec<Territory>,
}

impl TerritoryStore {
    /// Reserve exactly `count` unregistered territories.
    ///
    /// The reservation is fallible so an out-of-memory condition surfaces as
    /// an `Allocation` error instead of aborting.
    pub fn allocate(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(WarError::Allocation {
                count,
                reason: "a map needs at least one territory".into(),
            });
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|e| WarError::Allocation { count, reason: e.to_string() })?;
        territories.resize_with(count, Territory::default);

        tracing::debug!(count, "territory store allocated");
        Ok(Self { territories })
    }

    /// Build a store from already-registered territories.
    ///
    /// Entry point for scripted sessions and tests; every record must have a
    /// name, a color and at least one troop.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self> {
        if territories.is_empty() {
            return Err(WarError::Allocation {
                count: 0,
                reason: "a map needs at least one territory".into(),
            });
        }
        if let Some(index) = territories.iter().position(|t| !t.is_registered()) {
            return Err(WarError::InvalidInput(format!(
                "territory {index} needs a name, a color and at least one troop"
            )));
        }
        Ok(Self { territories })
    }

    /// Prompt for every territory's name, color and troops, in storage order.
    ///
    /// Invalid answers are reported and asked again. Slots are overwritten
    /// only once all three fields of that slot are valid.
    pub fn initialize<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        writeln!(console.out(), "\n=== TERRITORY REGISTRATION ===")?;

        for (index, slot) in self.territories.iter_mut().enumerate() {
            writeln!(console.out(), "\nTerritory {}", index + 1)?;
            let name = console.prompt_with("Name: ", TerritoryName::new)?;
            let army_color = console.prompt_with("Army color: ", ArmyColor::new)?;
            let troops = console.prompt_number("Troops: ", 1)?;

            *slot = Territory { name, army_color, troops };
            tracing::debug!(
                id = index,
                name = %slot.name,
                color = %slot.army_color,
                troops,
                "territory registered"
            );
        }

        tracing::info!(count = self.territories.len(), "registration complete");
        Ok(())
    }

    /// Give the storage back. Consuming `self` rules out a second release.
    pub fn release(self) {
        tracing::debug!(count = self.territories.len(), "territory store released");
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false for an allocated store
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.0)
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i), t))
    }

    /// Every slot has been filled in
    pub fn is_registered(&self) -> bool {
        self.territories.iter().all(Territory::is_registered)
    }

    /// Number of territories held by `color`
    pub fn count_color(&self, color: &str) -> usize {
        self.territories.iter().filter(|t| t.is_held_by(color)).count()
    }

    /// Ids of territories held by `color`
    pub fn ids_held_by(&self, color: &str) -> Vec<TerritoryId> {
        self.iter()
            .filter(|(_, t)| t.is_held_by(color))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn total_troops(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.troops)).sum()
    }

    /// Mutable access to two distinct territories at once.
    ///
    /// Callers must have checked both ids are in range and different.
    pub(crate) fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        if first == second || first.0 >= self.len() || second.0 >= self.len() {
            return None;
        }
        if first.0 < second.0 {
            let (low, high) = self.territories.split_at_mut(second.0);
            Some((&mut low[first.0], &mut high[0]))
        } else {
            let (low, high) = self.territories.split_at_mut(first.0);
            Some((&mut high[0], &mut low[second.0]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_store() -> TerritoryStore {
        TerritoryStore::from_territories(vec![
            Territory::new("Brazil", "Blue", 5).unwrap(),
            Territory::new("Peru", "Red", 2).unwrap(),
            Territory::new("Chile", "blue", 1).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_allocate_zero_initialized() {
        let store = TerritoryStore::allocate(5).unwrap();
        assert_eq!(store.len(), 5);
        assert!(store.territories().iter().all(|t| *t == Territory::default()));
        assert!(!store.is_registered());
        assert_eq!(store.total_troops(), 0);
    }

    #[test]
    fn test_allocate_zero_fails() {
        assert!(matches!(
            TerritoryStore::allocate(0),
            Err(WarError::Allocation { count: 0, .. })
        ));
    }

    #[test]
    fn test_allocate_impossible_size_fails() {
        assert!(matches!(
            TerritoryStore::allocate(usize::MAX),
            Err(WarError::Allocation { .. })
        ));
    }

    #[test]
    fn test_from_territories_rejects_unregistered_records() {
        let empty = TerritoryStore::from_territories(vec![
            Territory::new("Brazil", "Blue", 5).unwrap(),
            Territory::new("Peru", "Red", 0).unwrap(),
        ]);
        assert!(matches!(empty, Err(WarError::InvalidInput(msg)) if msg.contains("territory 1")));

        let blank = TerritoryStore::from_territories(vec![Territory::default()]);
        assert!(matches!(blank, Err(WarError::InvalidInput(_))));

        assert!(matches!(
            TerritoryStore::from_territories(Vec::new()),
            Err(WarError::Allocation { count: 0, .. })
        ));
    }

    #[test]
    fn test_initialize_fills_every_slot() {
        let input = "Brazil\nGreen\n3\nPeru\nRed\n4\n";
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut store = TerritoryStore::allocate(2).unwrap();

        store.initialize(&mut console).unwrap();

        assert!(store.is_registered());
        assert_eq!(store.get(TerritoryId(0)).unwrap().name.as_str(), "Brazil");
        assert_eq!(store.get(TerritoryId(1)).unwrap().army_color.as_str(), "Red");
        assert_eq!(store.get(TerritoryId(1)).unwrap().troops, 4);
    }

    #[test]
    fn test_initialize_reprompts_invalid_fields() {
        let long_name = "n".repeat(30);
        let input = format!("{long_name}\nBrazil\n\nGreen\nmany\n0\n3\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let mut store = TerritoryStore::allocate(1).unwrap();

        store.initialize(&mut console).unwrap();

        let t = store.get(TerritoryId(0)).unwrap();
        assert_eq!(t.name.as_str(), "Brazil");
        assert_eq!(t.army_color.as_str(), "Green");
        assert_eq!(t.troops, 3);

        let text = String::from_utf8(console.into_inner().1).unwrap();
        assert_eq!(text.matches("Name: ").count(), 2);
        assert_eq!(text.matches("Army color: ").count(), 2);
        assert_eq!(text.matches("Troops: ").count(), 3);
    }

    #[test]
    fn test_initialize_stops_on_eof() {
        let mut console = Console::new(Cursor::new("Brazil\n"), Vec::new());
        let mut store = TerritoryStore::allocate(1).unwrap();
        assert!(matches!(store.initialize(&mut console), Err(WarError::InputClosed)));
        assert_eq!(store.get(TerritoryId(0)), Some(&Territory::default()));
    }

    #[test]
    fn test_color_queries_ignore_case() {
        let store = sample_store();
        assert_eq!(store.count_color("BLUE"), 2);
        assert_eq!(store.ids_held_by("blue"), vec![TerritoryId(0), TerritoryId(2)]);
        assert_eq!(store.count_color("Yellow"), 0);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut store = sample_store();
        {
            let (a, b) = store.pair_mut(TerritoryId(2), TerritoryId(0)).unwrap();
            assert_eq!(a.name.as_str(), "Chile");
            assert_eq!(b.name.as_str(), "Brazil");
            a.troops += 1;
        }
        assert_eq!(store.get(TerritoryId(2)).unwrap().troops, 2);
        assert!(store.pair_mut(TerritoryId(1), TerritoryId(1)).is_none());
        assert!(store.pair_mut(TerritoryId(0), TerritoryId(3)).is_none());
    }
}
