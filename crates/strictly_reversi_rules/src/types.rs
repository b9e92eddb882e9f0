//! Core domain types for Reversi.

use serde::{Deserialize, Serialize};

/// One of the two disk colors, and therefore one of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Disk {
    /// Dark disk (moves first in a new game).
    Dark,
    /// Light disk.
    Light,
}

impl Disk {
    /// Both sides, in index order.
    pub const SIDES: [Disk; 2] = [Disk::Dark, Disk::Light];

    /// Returns the opposite color.
    pub fn flipped(self) -> Self {
        match self {
            Disk::Dark => Disk::Light,
            Disk::Light => Disk::Dark,
        }
    }

    /// Turns this disk over in place.
    pub fn flip(&mut self) {
        *self = self.flipped();
    }

    /// Stable index used to address per-side arrays (Dark = 0, Light = 1).
    pub fn index(self) -> usize {
        match self {
            Disk::Dark => 0,
            Disk::Light => 1,
        }
    }

    /// Inverse of [`Disk::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::SIDES.get(index).copied()
    }

    /// Save-file symbol for this disk.
    pub fn symbol(self) -> char {
        match self {
            Disk::Dark => 'x',
            Disk::Light => 'o',
        }
    }

    /// Parses a save-file symbol. `-` and anything unknown are not disks.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Disk::Dark),
            'o' => Some(Disk::Light),
            _ => None,
        }
    }
}

/// Save-file symbol for an optional disk (`-` when empty).
pub fn symbol_of(disk: Option<Disk>) -> char {
    disk.map_or('-', Disk::symbol)
}

/// Who drives a side: a person at the keyboard or the scripted mover.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum PlayerControl {
    /// Moves come from user input.
    #[default]
    Manual,
    /// Moves are chosen automatically.
    Scripted,
}

impl PlayerControl {
    /// Digit used by the save format (Manual = 0, Scripted = 1).
    pub fn digit(self) -> char {
        match self {
            PlayerControl::Manual => '0',
            PlayerControl::Scripted => '1',
        }
    }

    /// Inverse of [`PlayerControl::digit`].
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(PlayerControl::Manual),
            '1' => Some(PlayerControl::Scripted),
            _ => None,
        }
    }

    /// Toggles between `Manual` and `Scripted`.
    pub fn toggled(self) -> Self {
        match self {
            PlayerControl::Manual => PlayerControl::Scripted,
            PlayerControl::Scripted => PlayerControl::Manual,
        }
    }
}

/// A single board cell: empty or holding one disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// The disk on this cell, if any.
    pub disk: Option<Disk>,
}

/// Coarse status derived from a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The given side is to move.
    Move(Disk),
    /// The game is over and the given side holds more disks.
    Won(Disk),
    /// The game is over with equal disk counts.
    Draw,
}

impl GameStatus {
    /// Returns true once the game can no longer continue.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Move(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Move(side) => write!(f, "{side} to move"),
            GameStatus::Won(side) => write!(f, "{side} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_is_involution() {
        let mut disk = Disk::Dark;
        disk.flip();
        assert_eq!(disk, Disk::Light);
        assert_eq!(disk.flipped(), Disk::Dark);
    }

    #[test]
    fn test_index_round_trips() {
        for side in Disk::SIDES {
            assert_eq!(Disk::from_index(side.index()), Some(side));
        }
        assert_eq!(Disk::from_index(2), None);
    }

    #[test]
    fn test_unknown_symbol_is_empty() {
        assert_eq!(Disk::from_symbol('#'), None);
        assert_eq!(symbol_of(None), '-');
    }

    #[test]
    fn test_control_digits() {
        assert_eq!(PlayerControl::from_digit('1'), Some(PlayerControl::Scripted));
        assert_eq!(PlayerControl::from_digit('2'), None);
        assert_eq!(PlayerControl::Manual.toggled(), PlayerControl::Scripted);
    }
}
