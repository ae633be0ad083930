//! Prop types and their size classes
//!
//! Every prop the editor can draw belongs to exactly one size class. The size
//! class decides how far apart two co-located props are pushed.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Size classification used by the offset resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropSizeClass {
    Large,
    Medium,
    Small,
}

impl PropSizeClass {
    pub const ALL: [PropSizeClass; 3] = [PropSizeClass::Large, PropSizeClass::Medium, PropSizeClass::Small];

    /// Size class for a prop name, tolerating names that aren't known props.
    ///
    /// Unknown names fall back to `Small`.
    pub fn from_prop_name(name: &str) -> PropSizeClass {
        match name.parse::<PropType>() {
            Ok(prop) => prop.size_class(),
            Err(_) => {
                log::debug!("Unrecognized prop type '{}', using small size class", name);
                PropSizeClass::Small
            }
        }
    }
}

impl fmt::Display for PropSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropSizeClass::Large => write!(f, "large"),
            PropSizeClass::Medium => write!(f, "medium"),
            PropSizeClass::Small => write!(f, "small"),
        }
    }
}

/// Every prop the editor knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    Hand,
    Staff,
    SimpleStaff,
    BigStaff,
    Club,
    Buugeng,
    BigBuugeng,
    Fractalgeng,
    EightRings,
    BigEightRings,
    DoubleStar,
    BigDoubleStar,
    Fan,
    Triad,
    Minihoop,
    BigHoop,
    Quiad,
    Sword,
    Guitar,
    Ukulele,
    Chicken,
    Triquetra,
}

impl Default for PropType {
    fn default() -> Self {
        PropType::Staff
    }
}

// Lowercased names and aliases -> prop type
static PROP_NAMES: Lazy<HashMap<&'static str, PropType>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, PropType> =
        PropType::ALL.iter().map(|prop| (prop.as_str(), *prop)).collect();
    table.insert("big_staff", PropType::BigStaff);
    table.insert("simple_staff", PropType::SimpleStaff);
    table.insert("big_buugeng", PropType::BigBuugeng);
    table.insert("eight_rings", PropType::EightRings);
    table.insert("big_eight_rings", PropType::BigEightRings);
    table.insert("double_star", PropType::DoubleStar);
    table.insert("big_double_star", PropType::BigDoubleStar);
    table.insert("big_hoop", PropType::BigHoop);
    table.insert("hoop", PropType::BigHoop);
    table
});

impl PropType {
    pub const ALL: [PropType; 22] = [
        PropType::Hand,
        PropType::Staff,
        PropType::SimpleStaff,
        PropType::BigStaff,
        PropType::Club,
        PropType::Buugeng,
        PropType::BigBuugeng,
        PropType::Fractalgeng,
        PropType::EightRings,
        PropType::BigEightRings,
        PropType::DoubleStar,
        PropType::BigDoubleStar,
        PropType::Fan,
        PropType::Triad,
        PropType::Minihoop,
        PropType::BigHoop,
        PropType::Quiad,
        PropType::Sword,
        PropType::Guitar,
        PropType::Ukulele,
        PropType::Chicken,
        PropType::Triquetra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropType::Hand => "hand",
            PropType::Staff => "staff",
            PropType::SimpleStaff => "simplestaff",
            PropType::BigStaff => "bigstaff",
            PropType::Club => "club",
            PropType::Buugeng => "buugeng",
            PropType::BigBuugeng => "bigbuugeng",
            PropType::Fractalgeng => "fractalgeng",
            PropType::EightRings => "eightrings",
            PropType::BigEightRings => "bigeightrings",
            PropType::DoubleStar => "doublestar",
            PropType::BigDoubleStar => "bigdoublestar",
            PropType::Fan => "fan",
            PropType::Triad => "triad",
            PropType::Minihoop => "minihoop",
            PropType::BigHoop => "bighoop",
            PropType::Quiad => "quiad",
            PropType::Sword => "sword",
            PropType::Guitar => "guitar",
            PropType::Ukulele => "ukulele",
            PropType::Chicken => "chicken",
            PropType::Triquetra => "triquetra",
        }
    }

    pub fn size_class(&self) -> PropSizeClass {
        match self {
            PropType::BigHoop
            | PropType::BigStaff
            | PropType::BigBuugeng
            | PropType::BigEightRings
            | PropType::BigDoubleStar
            | PropType::Guitar
            | PropType::Ukulele
            | PropType::Sword
            | PropType::Chicken => PropSizeClass::Large,

            PropType::Staff
            | PropType::SimpleStaff
            | PropType::Club
            | PropType::Fractalgeng
            | PropType::Triquetra
            | PropType::Quiad => PropSizeClass::Medium,

            PropType::Hand
            | PropType::Buugeng
            | PropType::EightRings
            | PropType::DoubleStar
            | PropType::Fan
            | PropType::Triad
            | PropType::Minihoop => PropSizeClass::Small,
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROP_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("Invalid prop type: '{}'", s))
    }
}

// Accepts every name `FromStr` accepts (any case, underscore aliases)
impl<'de> Deserialize<'de> for PropType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PropTypeVisitor;

        impl<'de> serde::de::Visitor<'de> for PropTypeVisitor {
            type Value = PropType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a prop type name")
            }

            fn visit_str<E>(self, value: &str) -> Result<PropType, E>
            where
                E: serde::de::Error,
            {
                value.parse::<PropType>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PropTypeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prop_has_one_class() {
        let mut counts = HashMap::new();
        for prop in PropType::ALL {
            *counts.entry(prop.size_class()).or_insert(0usize) += 1;
        }
        assert_eq!(counts.values().sum::<usize>(), PropType::ALL.len());
        assert_eq!(counts[&PropSizeClass::Large], 9);
        assert_eq!(counts[&PropSizeClass::Medium], 6);
        assert_eq!(counts[&PropSizeClass::Small], 7);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Staff".parse::<PropType>().unwrap(), PropType::Staff);
        assert_eq!("BIGHOOP".parse::<PropType>().unwrap(), PropType::BigHoop);
        assert_eq!("big_staff".parse::<PropType>().unwrap(), PropType::BigStaff);
        assert!("didgeridoo".parse::<PropType>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for prop in PropType::ALL {
            assert_eq!(prop.as_str().parse::<PropType>().unwrap(), prop);
            let json = serde_json::to_string(&prop).unwrap();
            assert_eq!(json, format!("\"{}\"", prop.as_str()));
        }
    }

    #[test]
    fn test_deserialize_accepts_from_str_names() {
        let staff: PropType = serde_json::from_str("\"Staff\"").unwrap();
        assert_eq!(staff, PropType::Staff);

        let big_staff: PropType = serde_json::from_str("\"big_staff\"").unwrap();
        assert_eq!(big_staff, PropType::BigStaff);

        let hoop: PropType = serde_yaml::from_str("HOOP").unwrap();
        assert_eq!(hoop, PropType::BigHoop);

        assert!(serde_json::from_str::<PropType>("\"didgeridoo\"").is_err());
        assert!(serde_json::from_str::<PropType>("3").is_err());
    }

    #[test]
    fn test_unknown_name_defaults_to_small() {
        assert_eq!(PropSizeClass::from_prop_name("didgeridoo"), PropSizeClass::Small);
        assert_eq!(PropSizeClass::from_prop_name("guitar"), PropSizeClass::Large);
        assert_eq!(PropSizeClass::from_prop_name("club"), PropSizeClass::Medium);
    }
}
