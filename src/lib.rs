//! War Mission - territory conquest game with secret missions

pub mod combat;
pub mod console;
pub mod core;
pub mod game;
pub mod map;
pub mod mission;
pub mod territory;
