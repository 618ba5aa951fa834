//! Core type definitions used throughout the codebase

use std::fmt;

use crate::core::error::{Result, WarError};

/// Maximum characters in a territory name
pub const NAME_CAPACITY: usize = 29;

/// Maximum characters in an army color
pub const COLOR_CAPACITY: usize = 19;

/// Zero-based position of a territory in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerritoryId(pub usize);

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Attacker => "attacker",
            Side::Defender => "defender",
        }
    }
}

/// Text field with a fixed character capacity.
///
/// Every write is length-checked; an over-long or blank value is rejected
/// rather than truncated. The default value is empty, which is how an
/// unregistered slot looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedText<const N: usize>(String);

impl<const N: usize> BoundedText<N> {
    pub const CAPACITY: usize = N;

    /// Validate and store `value` (surrounding whitespace is trimmed).
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(WarError::InvalidInput("value cannot be empty".into()));
        }
        let len = trimmed.chars().count();
        if len > N {
            return Err(WarError::InvalidInput(format!(
                "'{trimmed}' is {len} characters long (maximum {max})",
                max = N
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison, used for army colors.
    pub fn same_as(&self, other: &str) -> bool {
        !self.0.is_empty() && self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding flags only apply through `pad`
        f.pad(&self.0)
    }
}

pub type TerritoryName = BoundedText<NAME_CAPACITY>;
pub type ArmyColor = BoundedText<COLOR_CAPACITY>;
