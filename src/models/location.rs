//! Grid locations and grid modes
//!
//! A prop ends every motion on one of eight grid points. The four cardinal
//! points make up the "diamond" grid and the four diagonal points make up
//! the "box" grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight points a motion can start or end on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

/// Grid layout a location belongs to (derived, never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Cardinal points: N, E, S, W
    Diamond,
    /// Diagonal points: NE, SE, SW, NW
    Box,
}

impl Location {
    /// All eight locations, cardinals first (clockwise from north)
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::E,
        Location::S,
        Location::W,
        Location::NE,
        Location::SE,
        Location::SW,
        Location::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::N => "n",
            Location::E => "e",
            Location::S => "s",
            Location::W => "w",
            Location::NE => "ne",
            Location::SE => "se",
            Location::SW => "sw",
            Location::NW => "nw",
        }
    }

    /// True for N, E, S, W
    pub fn is_cardinal(&self) -> bool {
        matches!(self, Location::N | Location::E | Location::S | Location::W)
    }

    pub fn grid_mode(&self) -> GridMode {
        if self.is_cardinal() {
            GridMode::Diamond
        } else {
            GridMode::Box
        }
    }

    /// The location diametrically across the grid center
    pub fn opposite(&self) -> Location {
        match self {
            Location::N => Location::S,
            Location::E => Location::W,
            Location::S => Location::N,
            Location::W => Location::E,
            Location::NE => Location::SW,
            Location::SE => Location::NW,
            Location::SW => Location::NE,
            Location::NW => Location::SE,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Location::N),
            "e" | "east" => Ok(Location::E),
            "s" | "south" => Ok(Location::S),
            "w" | "west" => Ok(Location::W),
            "ne" | "northeast" => Ok(Location::NE),
            "se" | "southeast" => Ok(Location::SE),
            "sw" | "southwest" => Ok(Location::SW),
            "nw" | "northwest" => Ok(Location::NW),
            _ => Err(format!("Invalid location: '{}'. Expected one of: n, e, s, w, ne, se, sw, nw", s)),
        }
    }
}

impl fmt::Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridMode::Diamond => write!(f, "diamond"),
            GridMode::Box => write!(f, "box"),
        }
    }
}
