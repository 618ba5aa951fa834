//! Attack resolution
//!
//! One attack is a single exchange: validate, roll one die per side, remove
//! one troop from the loser, and hand the target over if it was emptied.
//! Ties go to the defender.

use rand::Rng;

use crate::core::error::AttackError;
use crate::core::types::{Side, TerritoryId};
use crate::territory::TerritoryStore;

/// Default faces on a combat die
pub const DEFAULT_DIE_SIDES: u32 = 6;

/// Troops an origin needs before it may attack; one must stay behind
pub const MIN_ATTACKING_TROOPS: u32 = 2;

/// Result of one resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub origin: TerritoryId,
    pub target: TerritoryId,
    pub attacker_roll: u32,
    pub defender_roll: u32,
    /// Side that lost one troop
    pub casualty: Side,
    /// Target changed hands
    pub conquered: bool,
}

impl AttackOutcome {
    pub fn winner(&self) -> Side {
        match self.casualty {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Which side loses a troop for a pair of rolls. Ties favor the defender.
pub fn casualty_for(attacker_roll: u32, defender_roll: u32) -> Side {
    if attacker_roll > defender_roll {
        Side::Defender
    } else {
        Side::Attacker
    }
}

/// Check an attack is legal without touching the store
pub fn validate(
    store: &TerritoryStore,
    origin: TerritoryId,
    target: TerritoryId,
) -> Result<(), AttackError> {
    let count = store.len();
    let attacker = store
        .get(origin)
        .ok_or(AttackError::OutOfRange { id: origin, count })?;
    let defender = store
        .get(target)
        .ok_or(AttackError::OutOfRange { id: target, count })?;

    if origin == target {
        return Err(AttackError::SameTerritory);
    }
    if attacker.troops < MIN_ATTACKING_TROOPS {
        return Err(AttackError::InsufficientTroops { id: origin, troops: attacker.troops });
    }
    if defender.troops == 0 {
        return Err(AttackError::Unoccupied { id: target });
    }
    if attacker.army_color.same_as(defender.army_color.as_str()) {
        return Err(AttackError::FriendlyFire {
            color: attacker.army_color.as_str().to_string(),
        });
    }
    Ok(())
}

/// Roll one die with faces `1..=sides`
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> u32 {
    rng.gen_range(1..=sides.max(1))
}

/// Validate, roll and resolve an attack from `origin` on `target`
pub fn attack<R: Rng + ?Sized>(
    store: &mut TerritoryStore,
    origin: TerritoryId,
    target: TerritoryId,
    rng: &mut R,
    die_sides: u32,
) -> Result<AttackOutcome, AttackError> {
    validate(store, origin, target)?;

    let attacker_roll = roll_die(rng, die_sides);
    let defender_roll = roll_die(rng, die_sides);

    resolve(store, origin, target, attacker_roll, defender_roll)
}

/// Apply already-rolled dice to the store.
///
/// The loser drops one troop. If the defender is emptied, the target takes
/// the attacker's color and one troop moves over from the origin in the same
/// step, so no territory is left with zero troops.
pub fn resolve(
    store: &mut TerritoryStore,
    origin: TerritoryId,
    target: TerritoryId,
    attacker_roll: u32,
    defender_roll: u32,
) -> Result<AttackOutcome, AttackError> {
    validate(store, origin, target)?;
    let (attacker, defender) = store
        .pair_mut(origin, target)
        .ok_or(AttackError::SameTerritory)?;

    let casualty = casualty_for(attacker_roll, defender_roll);
    match casualty {
        Side::Attacker => attacker.troops -= 1,
        Side::Defender => defender.troops -= 1,
    }

    let conquered = defender.troops == 0;
    if conquered {
        defender.army_color = attacker.army_color.clone();
        attacker.troops -= 1;
        defender.troops = 1;
    }

    tracing::info!(
        origin = origin.0,
        target = target.0,
        attacker_roll,
        defender_roll,
        casualty = casualty.label(),
        conquered,
        "attack resolved"
    );

    Ok(AttackOutcome {
        origin,
        target,
        attacker_roll,
        defender_roll,
        casualty,
        conquered,
    })
}
