//! Combat resolver
//!
//! Mutates the territory store through attacker/defender troop exchanges.

pub mod resolution;

pub use resolution::{
    attack, casualty_for, resolve, roll_die, validate, AttackOutcome, DEFAULT_DIE_SIDES,
    MIN_ATTACKING_TROOPS,
};
