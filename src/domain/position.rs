//! Seating, teams, and fixed four/two-entry records keyed by them.
//!
//! The four seats and two teams are invariants of the game, not data, so
//! they are represented as bounded enums plus fixed-size arrays rather
//! than dictionaries.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    North,
    East,
    South,
    West,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    pub fn index(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    pub fn from_index(idx: usize) -> Position {
        Position::ALL[idx % 4]
    }

    /// Next seat clockwise from this one.
    pub fn next(self) -> Position {
        Position::from_index(self.index() + 1)
    }

    pub fn team(self) -> Team {
        match self {
            Position::North | Position::South => Team::NorthSouth,
            Position::East | Position::West => Team::EastWest,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    NorthSouth,
    EastWest,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }
}

/// A fixed four-entry record keyed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats<T>(pub [T; 4]);

impl<T> Seats<T> {
    pub fn from_fn(mut f: impl FnMut(Position) -> T) -> Self {
        Seats([
            f(Position::North),
            f(Position::East),
            f(Position::South),
            f(Position::West),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL.into_iter().map(move |p| (p, &self.0[p.index()]))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut T)> {
        self.0
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Position::from_index(i), v))
    }
}

impl<T> Index<Position> for Seats<T> {
    type Output = T;
    fn index(&self, index: Position) -> &T {
        &self.0[index.index()]
    }
}

impl<T> IndexMut<Position> for Seats<T> {
    fn index_mut(&mut self, index: Position) -> &mut T {
        &mut self.0[index.index()]
    }
}

/// A fixed two-entry record keyed by [`Team`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMap<T>(pub [T; 2]);

impl<T: Copy> TeamMap<T> {
    pub fn new(value: T) -> Self {
        TeamMap([value, value])
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;
    fn index(&self, index: Team) -> &T {
        &self.0[index.index()]
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, index: Team) -> &mut T {
        &mut self.0[index.index()]
    }
}
