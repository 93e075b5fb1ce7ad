use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};

pub const BLANK: u8 = 0;
pub const SIDE: usize = 3;
pub const CELLS: usize = SIDE * SIDE;

/// Direction the blank travels; the neighbouring tile on that side slides
/// into the blank's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Enumeration order used by `State::legal_actions`.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

    fn offset(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        };
        write!(f, "{s}")
    }
}

/// A 3x3 board in row-major order. Immutable: moves produce a new `State`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    tiles: [u8; CELLS],
    // Always the index of BLANK in `tiles`, so equality stays structural.
    blank: usize,
}

impl State {
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let index = tile as usize;
            if index >= CELLS || seen[index] {
                return Err(PuzzleError::InvalidTile {
                    tiles: tiles.to_vec(),
                });
            }
            seen[index] = true;
        }

        // Every label 0..CELLS appeared exactly once, so the blank is present.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(State { tiles, blank })
    }

    /// Blank first, then 1 to 8 in reading order.
    pub fn default_goal() -> Self {
        State {
            tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
            blank: 0,
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / SIDE, self.blank % SIDE)
    }

    /// Legal moves of the blank, in `Action::ALL` order.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.slide(action).is_some())
            .collect()
    }

    /// Swaps the blank with its neighbour in `action`'s direction, or `None`
    /// when that neighbour is off the board.
    pub fn slide(&self, action: Action) -> Option<State> {
        let (row, col) = self.blank_position();
        let (d_row, d_col) = action.offset();
        let new_row = row as isize + d_row;
        let new_col = col as isize + d_col;
        if new_row < 0 || new_col < 0 || new_row >= SIDE as isize || new_col >= SIDE as isize {
            return None;
        }

        let target = new_row as usize * SIDE + new_col as usize;
        let mut tiles = self.tiles;
        tiles.swap(self.blank, target);
        Some(State {
            tiles,
            blank: target,
        })
    }
}

impl Default for State {
    fn default() -> Self {
        State::default_goal()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

/// Parses nine whitespace-separated digits in reading order, 0 being the blank.
impl FromStr for State {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELLS
            || !tokens
                .iter()
                .all(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(PuzzleError::InputFormat);
        }

        let mut tiles = [0u8; CELLS];
        for (cell, token) in tiles.iter_mut().zip(&tokens) {
            *cell = token.parse().map_err(|_| PuzzleError::InputFormat)?;
        }
        State::new(tiles)
    }
}
