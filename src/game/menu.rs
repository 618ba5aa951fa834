//! Main menu options

use std::io::{self, Write};

use crate::core::error::{Result, WarError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ShowMap,
    Attack,
    DrawMission,
    CheckVictory,
    Exit,
}

impl MenuChoice {
    /// All options in the order they are listed
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Register,
        MenuChoice::ShowMap,
        MenuChoice::Attack,
        MenuChoice::DrawMission,
        MenuChoice::CheckVictory,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Register => 1,
            MenuChoice::ShowMap => 2,
            MenuChoice::Attack => 3,
            MenuChoice::DrawMission => 4,
            MenuChoice::CheckVictory => 5,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Register => "Register territories",
            MenuChoice::ShowMap => "Show current map",
            MenuChoice::Attack => "Attack phase",
            MenuChoice::DrawMission => "Draw secret mission",
            MenuChoice::CheckVictory => "Check victory",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        Self::ALL
            .into_iter()
            .find(|choice| trimmed.parse::<u8>().ok() == Some(choice.key()))
            .ok_or_else(|| WarError::InvalidInput(format!("'{trimmed}' is not a menu option")))
    }
}

/// Print the menu, with the active mission when there is one
pub fn print_menu<W: Write>(out: &mut W, mission: Option<&str>) -> io::Result<()> {
    writeln!(out, "\n--- MAIN MENU ---")?;
    if let Some(text) = mission {
        writeln!(out, "Mission: {text}")?;
    }
    for choice in MenuChoice::ALL {
        writeln!(out, "{} - {}", choice.key(), choice.label())?;
    }
    Ok(())
}
