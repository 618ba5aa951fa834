//! Game controller and menu

pub mod controller;
pub mod menu;

pub use controller::{Flow, Game, GameEnd};
pub use menu::{print_menu, MenuChoice};
