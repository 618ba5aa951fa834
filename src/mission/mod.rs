//! Mission system
//!
//! Draws a secret objective for the player and checks it against the map.

#[allow(clippy::module_inception)]
pub mod mission;
pub mod player;

pub use mission::{describe, draw, Mission, MISSION_COUNT};
pub use player::Player;
