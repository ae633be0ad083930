//! Prop orientations
//!
//! IN and OUT are "radial" (the prop points along the line through the grid
//! center); CLOCK and COUNTER are "non-radial".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "clock")]
    Clock,
    #[serde(rename = "counter")]
    Counter,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        }
    }

    /// True for IN and OUT
    pub fn is_radial(&self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Swap IN and OUT; CLOCK and COUNTER are returned unchanged
    pub fn switched(&self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Clock,
            Orientation::Counter => Orientation::Counter,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" => Ok(Orientation::In),
            "out" => Ok(Orientation::Out),
            "clock" | "clockwise" => Ok(Orientation::Clock),
            "counter" | "counterclockwise" | "counter_clockwise" => Ok(Orientation::Counter),
            _ => Err(format!("Invalid orientation: '{}'. Expected one of: in, out, clock, counter", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_classification() {
        assert!(Orientation::In.is_radial());
        assert!(Orientation::Out.is_radial());
        assert!(!Orientation::Clock.is_radial());
        assert!(!Orientation::Counter.is_radial());
    }

    #[test]
    fn test_switch_only_toggles_radial() {
        assert_eq!(Orientation::In.switched(), Orientation::Out);
        assert_eq!(Orientation::Out.switched(), Orientation::In);
        assert_eq!(Orientation::Clock.switched(), Orientation::Clock);
        assert_eq!(Orientation::Counter.switched(), Orientation::Counter);
    }

    #[test]
    fn test_from_str_round_trip() {
        for ori in Orientation::ALL {
            assert_eq!(ori.as_str().parse::<Orientation>().unwrap(), ori);
        }
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
