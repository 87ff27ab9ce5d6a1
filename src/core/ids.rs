//! Canonical room identifiers.
//!
//! Every id in the building encodes its floor. Standard rooms pack floor, side
//! and number into one string (`4N5`); special areas pack floor and a slug
//! (`5Library`). This module is the only place that builds or takes those
//! strings apart. Everything else works with [`RoomKey`].

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

pub const BASEMENT: u8 = 0;
pub const TOP_FLOOR: u8 = 8;

/// A building side, or the center cluster of a floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Side {
    North,
    South,
    East,
    West,
    Center,
}

impl Side {
    pub const ALL: [Side; 5] = [Side::North, Side::South, Side::East, Side::West, Side::Center];

    pub fn letter(self) -> char {
        match self {
            Side::North => 'N',
            Side::South => 'S',
            Side::East => 'E',
            Side::West => 'W',
            Side::Center => 'C',
        }
    }

    pub fn from_letter(c: char) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| side.letter() == c.to_ascii_uppercase())
    }

    /// Number of rooms along this side on a floor that has it.
    pub fn room_count(self) -> u8 {
        match self {
            Side::North | Side::South => 9,
            Side::East | Side::West => 24,
            Side::Center => 8,
        }
    }
}

/// The named areas that replace or sit beside ordinary rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SpecialKind {
    Pool,
    MainGym,
    Auditorium,
    LockerRoom,
    Library,
    Cafeteria,
    UpperGym,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 7] = [
        SpecialKind::Pool,
        SpecialKind::MainGym,
        SpecialKind::Auditorium,
        SpecialKind::LockerRoom,
        SpecialKind::Library,
        SpecialKind::Cafeteria,
        SpecialKind::UpperGym,
    ];

    /// Each special area exists on exactly one floor.
    pub fn floor(self) -> u8 {
        match self {
            SpecialKind::Pool => 0,
            SpecialKind::MainGym | SpecialKind::Auditorium => 1,
            SpecialKind::LockerRoom => 3,
            SpecialKind::Library => 5,
            SpecialKind::Cafeteria => 7,
            SpecialKind::UpperGym => 8,
        }
    }

    /// Id suffix after the floor digit.
    pub fn slug(self) -> &'static str {
        match self {
            SpecialKind::Pool => "Pool",
            SpecialKind::MainGym | SpecialKind::UpperGym => "Gym",
            SpecialKind::Auditorium => "Auditorium",
            SpecialKind::LockerRoom => "LockerRoom",
            SpecialKind::Library => "Library",
            SpecialKind::Cafeteria => "Cafeteria",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SpecialKind::Pool => "Pool",
            SpecialKind::MainGym => "Main Gym",
            SpecialKind::Auditorium => "Auditorium",
            SpecialKind::LockerRoom => "Locker Room",
            SpecialKind::Library => "Library",
            SpecialKind::Cafeteria => "Cafeteria",
            SpecialKind::UpperGym => "Upper Gym",
        }
    }

    /// Extra names people type for this area.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            SpecialKind::MainGym => &["Gym"],
            _ => &[],
        }
    }
}

/// Decoded form of a canonical id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomKey {
    Standard { floor: u8, side: Side, number: u8 },
    Special { area: SpecialKind },
}

impl RoomKey {
    pub fn standard(floor: u8, side: Side, number: u8) -> Self {
        RoomKey::Standard {
            floor,
            side,
            number,
        }
    }

    pub fn special(area: SpecialKind) -> Self {
        RoomKey::Special { area }
    }

    pub fn floor(&self) -> u8 {
        match self {
            RoomKey::Standard { floor, .. } => *floor,
            RoomKey::Special { area } => area.floor(),
        }
    }

    pub fn special_kind(&self) -> Option<SpecialKind> {
        match self {
            RoomKey::Special { area } => Some(*area),
            RoomKey::Standard { .. } => None,
        }
    }

    pub fn encode(&self) -> RoomId {
        match self {
            RoomKey::Standard {
                floor,
                side,
                number,
            } => RoomId(format!("{}{}{}", floor, side.letter(), number)),
            RoomKey::Special { area } => RoomId(format!("{}{}", area.floor(), area.slug())),
        }
    }

    /// Decode a canonical id, ignoring ASCII case. Returns `None` for strings
    /// that are not well-formed ids; whether the room exists on its floor is
    /// the layout's business.
    pub fn decode(raw: &str) -> Option<RoomKey> {
        if let Some(caps) = STANDARD_ID.captures(raw) {
            let floor = caps[1].parse::<u8>().ok()?;
            let side = Side::from_letter(caps[2].chars().next()?)?;
            let number = caps[3].parse::<u8>().ok()?;
            return Some(RoomKey::standard(floor, side, number));
        }
        let caps = SPECIAL_ID.captures(raw)?;
        let floor = caps[1].parse::<u8>().ok()?;
        SpecialKind::ALL
            .into_iter()
            .find(|area| area.floor() == floor && area.slug().eq_ignore_ascii_case(&caps[2]))
            .map(RoomKey::special)
    }

    pub fn display_name(&self) -> String {
        match self {
            RoomKey::Standard { .. } => format!("Room {}", self.encode()),
            RoomKey::Special { area } => {
                format!("{} (Floor {})", area.display_name(), area.floor())
            }
        }
    }
}

/// Floor digit, side letter, room number.
static STANDARD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)([0-8])([NSEWC])([1-9][0-9]?)$").unwrap());

/// Floor digit followed by a special-area slug.
static SPECIAL_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-8])([A-Za-z]+)$").unwrap());

/// Opaque canonical identifier of a room or special area.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> Option<RoomKey> {
        RoomKey::decode(&self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RoomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
