//! Secret missions
//!
//! A mission is drawn by id and then bound to the current map. Only one is
//! active at a time; drawing again replaces it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::types::ArmyColor;
use crate::mission::Player;
use crate::territory::TerritoryStore;

/// Number of distinct mission ids (`1..=MISSION_COUNT`)
pub const MISSION_COUNT: u8 = 3;

/// Territories to conquer for mission 2
pub const SMALL_CONQUEST: usize = 3;

/// Territories to conquer for mission 3
pub const LARGE_CONQUEST: usize = 5;

/// Draw a mission id uniformly from `1..=MISSION_COUNT`.
///
/// The caller owns the generator and seeds it once per process.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=MISSION_COUNT)
}

/// Fixed text for a mission id
pub fn describe(mission_id: u8) -> &'static str {
    match mission_id {
        1 => "destroy the red army",
        2 => "conquer 3 enemy territories",
        3 => "conquer 5 enemy territories",
        _ => "unknown mission",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mission {
    /// Leave no territory in the hands of `color`
    DestroyArmy { color: ArmyColor },
    /// Hold at least `territories` territories that were not home territories
    Conquer { territories: usize },
}

impl Mission {
    /// Build a mission from its id with an explicit enemy for id 1
    pub fn from_id(mission_id: u8, enemy: ArmyColor) -> Option<Self> {
        match mission_id {
            1 => Some(Mission::DestroyArmy { color: enemy }),
            2 => Some(Mission::Conquer { territories: SMALL_CONQUEST }),
            3 => Some(Mission::Conquer { territories: LARGE_CONQUEST }),
            _ => None,
        }
    }

    /// Bind a drawn id to the current map.
    ///
    /// The destroy mission targets one of the enemy colors on the map, picked
    /// uniformly. With no enemy on the map, `fallback_enemy` is used.
    pub fn assign<R: Rng + ?Sized>(
        mission_id: u8,
        store: &TerritoryStore,
        player: &Player,
        fallback_enemy: &ArmyColor,
        rng: &mut R,
    ) -> Option<Self> {
        let enemy = if mission_id == 1 {
            let enemies = enemy_colors(store, player);
            enemies.choose(rng).cloned().unwrap_or_else(|| fallback_enemy.clone())
        } else {
            fallback_enemy.clone()
        };

        let mission = Self::from_id(mission_id, enemy)?;
        tracing::info!(id = mission_id, mission = %mission.describe(), "mission assigned");
        Some(mission)
    }

    /// Drawable id of this mission, or `None` for a conquest goal no id
    /// produces
    pub fn id(&self) -> Option<u8> {
        match self {
            Mission::DestroyArmy { .. } => Some(1),
            Mission::Conquer { territories: SMALL_CONQUEST } => Some(2),
            Mission::Conquer { territories: LARGE_CONQUEST } => Some(3),
            Mission::Conquer { .. } => None,
        }
    }

    /// Player-facing text, naming the bound enemy color
    pub fn describe(&self) -> String {
        match self {
            Mission::DestroyArmy { color } => {
                format!("destroy the {} army", color.as_str().to_lowercase())
            }
            Mission::Conquer { territories } => {
                format!("conquer {territories} enemy territories")
            }
        }
    }

    pub fn is_fulfilled(&self, store: &TerritoryStore, player: &Player) -> bool {
        let (done, goal) = self.progress(store, player);
        done >= goal
    }

    /// Progress as `(achieved, required)`.
    ///
    /// For the destroy mission this counts enemy territories already taken
    /// out of those still needed; it is complete once none remain.
    pub fn progress(&self, store: &TerritoryStore, player: &Player) -> (usize, usize) {
        match self {
            Mission::DestroyArmy { color } => {
                let remaining = store.count_color(color.as_str());
                if remaining == 0 {
                    (1, 1)
                } else {
                    (0, remaining)
                }
            }
            Mission::Conquer { territories } => (player.conquered(store), *territories),
        }
    }
}

/// Distinct non-empty colors on the map other than the player's, in map order
fn enemy_colors(store: &TerritoryStore, player: &Player) -> Vec<ArmyColor> {
    let mut colors: Vec<ArmyColor> = Vec::new();
    for (_, territory) in store.iter() {
        let color = &territory.army_color;
        if color.is_empty() || color.same_as(player.color.as_str()) {
            continue;
        }
        if !colors.iter().any(|c| c.same_as(color.as_str())) {
            colors.push(color.clone());
        }
    }
    colors
}
