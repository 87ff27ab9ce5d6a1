//! Static building topology.
//!
//! [`Layout::generate`] lays out floors 0 through 8 once: perimeter and
//! center rooms, special areas, the staircases that serve each floor, and the
//! connector edges that tie special areas to their entrances. The result is
//! never mutated afterwards and is shared by reference with the resolver,
//! planner and renderer.
//!
//! Coordinates are floor-local grid units. Rooms on a side sit one or two units
//! apart in index order, so room `k` neighbours `k - 1` and `k + 1`.

use crate::core::error::HallwayError;
use crate::core::ids::{BASEMENT, RoomId, RoomKey, Side, SpecialKind, TOP_FLOOR};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Floor-local grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Standard,
    Special,
}

#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub key: RoomKey,
    pub floor: u8,
    pub position: Coordinate,
    pub kind: RoomKind,
}

impl Room {
    pub fn display_name(&self) -> String {
        self.key.display_name()
    }
}

/// How a special area may be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRule {
    Unrestricted,
    WestCorridorOnly,
    CornersOnly,
}

#[derive(Debug, Clone)]
pub struct SpecialArea {
    pub id: RoomId,
    pub kind: SpecialKind,
    pub display_name: &'static str,
    pub entry: EntryRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorVariant {
    /// North and west wings around the pool.
    Basement,
    /// No south wing; main gym and auditorium.
    Lobby,
    Standard,
    /// Locker room in place of the south wing.
    LockerRoom,
    /// Library in the center, entered from the west corridor.
    Library,
    /// The whole floor is the cafeteria.
    Cafeteria,
    /// Gym in the center.
    UpperGym,
}

impl FloorVariant {
    pub fn for_floor(floor: u8) -> FloorVariant {
        match floor {
            0 => FloorVariant::Basement,
            1 => FloorVariant::Lobby,
            3 => FloorVariant::LockerRoom,
            5 => FloorVariant::Library,
            7 => FloorVariant::Cafeteria,
            8 => FloorVariant::UpperGym,
            _ => FloorVariant::Standard,
        }
    }

    pub fn sides(self) -> &'static [Side] {
        use Side::*;
        match self {
            FloorVariant::Basement => &[North, West],
            FloorVariant::Lobby => &[North, East, West],
            FloorVariant::Standard => &[North, South, East, West, Center],
            FloorVariant::LockerRoom => &[North, East, West, Center],
            FloorVariant::Library | FloorVariant::UpperGym => &[North, South, East, West],
            FloorVariant::Cafeteria => &[],
        }
    }

    pub fn special_areas(self) -> &'static [SpecialKind] {
        match self {
            FloorVariant::Basement => &[SpecialKind::Pool],
            FloorVariant::Lobby => &[SpecialKind::MainGym, SpecialKind::Auditorium],
            FloorVariant::Standard => &[],
            FloorVariant::LockerRoom => &[SpecialKind::LockerRoom],
            FloorVariant::Library => &[SpecialKind::Library],
            FloorVariant::Cafeteria => &[SpecialKind::Cafeteria],
            FloorVariant::UpperGym => &[SpecialKind::UpperGym],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Floor {
    pub number: u8,
    pub variant: FloorVariant,
    pub rooms: Vec<RoomId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairKind {
    Corner,
    Middle,
}

/// Staircase positions in declaration order. Planner ties resolve toward the
/// earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StairPosition {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
    WestMiddle,
    EastMiddle,
}

impl StairPosition {
    pub const ALL: [StairPosition; 6] = [
        StairPosition::NorthWest,
        StairPosition::NorthEast,
        StairPosition::SouthEast,
        StairPosition::SouthWest,
        StairPosition::WestMiddle,
        StairPosition::EastMiddle,
    ];

    pub fn kind(self) -> StairKind {
        match self {
            StairPosition::WestMiddle | StairPosition::EastMiddle => StairKind::Middle,
            _ => StairKind::Corner,
        }
    }

    pub fn coordinate(self) -> Coordinate {
        match self {
            StairPosition::NorthWest => Coordinate::new(2, 20),
            StairPosition::NorthEast => Coordinate::new(20, 20),
            StairPosition::SouthEast => Coordinate::new(20, 5),
            StairPosition::SouthWest => Coordinate::new(2, 5),
            StairPosition::WestMiddle => Coordinate::new(2, 12),
            StairPosition::EastMiddle => Coordinate::new(20, 12),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StairPosition::NorthWest => "NW corner staircase",
            StairPosition::NorthEast => "NE corner staircase",
            StairPosition::SouthEast => "SE corner staircase",
            StairPosition::SouthWest => "SW corner staircase",
            StairPosition::WestMiddle => "west middle staircase",
            StairPosition::EastMiddle => "east middle staircase",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Staircase {
    pub position: StairPosition,
    pub kind: StairKind,
    pub coordinate: Coordinate,
}

impl Staircase {
    fn at(position: StairPosition) -> Self {
        Self {
            position,
            kind: position.kind(),
            coordinate: position.coordinate(),
        }
    }

    /// Middle staircases stop short of the cafeteria floor.
    pub fn serves(&self, floor: u8) -> bool {
        if floor > TOP_FLOOR {
            return false;
        }
        match self.kind {
            StairKind::Corner => true,
            StairKind::Middle => floor != 7,
        }
    }

    pub fn connects(&self, a: u8, b: u8) -> bool {
        self.serves(a) && self.serves(b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Room(RoomId),
    Stair(StairPosition),
}

/// A declared same-floor link between a special area and its entrance.
#[derive(Debug, Clone)]
pub struct Connector {
    pub floor: u8,
    pub a: Endpoint,
    pub b: Endpoint,
}

/// The immutable building model.
#[derive(Debug, Clone)]
pub struct Layout {
    rooms: Vec<Room>,
    index: FxHashMap<RoomId, usize>,
    floors: Vec<Floor>,
    specials: Vec<SpecialArea>,
    staircases: Vec<Staircase>,
    connectors: Vec<Connector>,
}

impl Layout {
    pub fn generate() -> Result<Layout, HallwayError> {
        let mut layout = Layout {
            rooms: Vec::new(),
            index: FxHashMap::default(),
            floors: Vec::new(),
            specials: Vec::new(),
            staircases: StairPosition::ALL.into_iter().map(Staircase::at).collect(),
            connectors: Vec::new(),
        };

        for number in BASEMENT..=TOP_FLOOR {
            let variant = FloorVariant::for_floor(number);
            layout.floors.push(Floor {
                number,
                variant,
                rooms: Vec::new(),
            });
            for &side in variant.sides() {
                for k in 1..=side.room_count() {
                    layout.add_room(RoomKey::standard(number, side, k), side_position(side, k))?;
                }
            }
            for &area in variant.special_areas() {
                layout.add_special(area)?;
            }
        }

        for connector in declared_connectors() {
            layout.check_connector(&connector)?;
            layout.connectors.push(connector);
        }

        tracing::debug!(
            rooms = layout.rooms.len(),
            specials = layout.specials.len(),
            connectors = layout.connectors.len(),
            "building layout generated"
        );
        Ok(layout)
    }

    fn add_room(&mut self, key: RoomKey, position: Coordinate) -> Result<(), HallwayError> {
        let id = key.encode();
        let floor = key.floor();
        if id.key() != Some(key) {
            return Err(HallwayError::LayoutError(format!(
                "id {} does not decode back to its key",
                id
            )));
        }
        if self.index.contains_key(&id) {
            return Err(HallwayError::LayoutError(format!("duplicate room id {}", id)));
        }
        let slot = self
            .floors
            .get_mut(usize::from(floor))
            .ok_or_else(|| HallwayError::LayoutError(format!("room {} on unknown floor", id)))?;
        slot.rooms.push(id.clone());

        let kind = match key {
            RoomKey::Standard { .. } => RoomKind::Standard,
            RoomKey::Special { .. } => RoomKind::Special,
        };
        self.index.insert(id.clone(), self.rooms.len());
        self.rooms.push(Room {
            id,
            key,
            floor,
            position,
            kind,
        });
        Ok(())
    }

    fn add_special(&mut self, area: SpecialKind) -> Result<(), HallwayError> {
        let key = RoomKey::special(area);
        self.add_room(key, special_position(area))?;
        self.specials.push(SpecialArea {
            id: key.encode(),
            kind: area,
            display_name: area.display_name(),
            entry: entry_rule(area),
        });
        Ok(())
    }

    fn check_connector(&self, connector: &Connector) -> Result<(), HallwayError> {
        for end in [&connector.a, &connector.b] {
            match end {
                Endpoint::Room(id) => {
                    let room = self.room(id).ok_or_else(|| {
                        HallwayError::LayoutError(format!("connector references missing room {}", id))
                    })?;
                    if room.floor != connector.floor {
                        return Err(HallwayError::LayoutError(format!(
                            "connector on floor {} references room {} on floor {}",
                            connector.floor, id, room.floor
                        )));
                    }
                }
                Endpoint::Stair(position) => {
                    let served = self
                        .staircase(*position)
                        .is_some_and(|stair| stair.serves(connector.floor));
                    if !served {
                        return Err(HallwayError::LayoutError(format!(
                            "connector references {} which does not serve floor {}",
                            position.label(),
                            connector.floor
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.index.get(id).map(|&i| &self.rooms[i])
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms on one floor in generation order.
    pub fn rooms_on(&self, floor: u8) -> impl Iterator<Item = &Room> {
        self.floor(floor)
            .into_iter()
            .flat_map(|f| f.rooms.iter())
            .filter_map(|id| self.room(id))
    }

    pub fn floor(&self, number: u8) -> Option<&Floor> {
        self.floors.get(usize::from(number))
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn special_areas(&self) -> &[SpecialArea] {
        &self.specials
    }

    pub fn special_area(&self, id: &RoomId) -> Option<&SpecialArea> {
        self.specials.iter().find(|area| &area.id == id)
    }

    /// All staircases in declaration order.
    pub fn staircases(&self) -> &[Staircase] {
        &self.staircases
    }

    pub fn staircase(&self, position: StairPosition) -> Option<&Staircase> {
        self.staircases.iter().find(|s| s.position == position)
    }

    pub fn staircases_on(&self, floor: u8) -> impl Iterator<Item = &Staircase> {
        self.staircases.iter().filter(move |s| s.serves(floor))
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn endpoint_position(&self, endpoint: &Endpoint) -> Option<Coordinate> {
        match endpoint {
            Endpoint::Room(id) => self.room(id).map(|room| room.position),
            Endpoint::Stair(position) => self.staircase(*position).map(|stair| stair.coordinate),
        }
    }
}

fn side_position(side: Side, k: u8) -> Coordinate {
    let k = i32::from(k);
    match side {
        Side::North => Coordinate::new(k * 2, 20),
        // S1 sits at the SE corner, S9 at the SW corner.
        Side::South => Coordinate::new(20 - (k - 1) * 2, 5),
        Side::East => Coordinate::new(20, 21 - k),
        Side::West => Coordinate::new(2, 21 - k),
        Side::Center => Coordinate::new(8 + k, 12),
    }
}

fn special_position(area: SpecialKind) -> Coordinate {
    match area {
        SpecialKind::Pool | SpecialKind::MainGym | SpecialKind::LockerRoom => Coordinate::new(15, 5),
        SpecialKind::Auditorium | SpecialKind::Library | SpecialKind::UpperGym => {
            Coordinate::new(12, 12)
        }
        SpecialKind::Cafeteria => Coordinate::new(15, 15),
    }
}

fn entry_rule(area: SpecialKind) -> EntryRule {
    match area {
        SpecialKind::Library => EntryRule::WestCorridorOnly,
        SpecialKind::Cafeteria => EntryRule::CornersOnly,
        _ => EntryRule::Unrestricted,
    }
}

/// Entrances of the special areas. These only tag edges in the navigation
/// graph: each costs the same as the plain walk between its ends, so they never
/// steer a route. Entry restrictions reach the traveller as a rendered note.
fn declared_connectors() -> Vec<Connector> {
    let room = |key: RoomKey| Endpoint::Room(key.encode());
    let gym = room(RoomKey::special(SpecialKind::MainGym));
    let library = room(RoomKey::special(SpecialKind::Library));
    let cafeteria = room(RoomKey::special(SpecialKind::Cafeteria));
    let upper_gym = room(RoomKey::special(SpecialKind::UpperGym));

    let mut connectors = vec![
        // Floor 1 has no south wing; 1E16 is the room level with the south wall.
        Connector {
            floor: 1,
            a: gym,
            b: room(RoomKey::standard(1, Side::East, 16)),
        },
        Connector {
            floor: 5,
            a: library,
            b: Endpoint::Stair(StairPosition::WestMiddle),
        },
    ];
    for corner in &StairPosition::ALL[..4] {
        connectors.push(Connector {
            floor: 7,
            a: Endpoint::Stair(*corner),
            b: cafeteria.clone(),
        });
    }
    for middle in [StairPosition::WestMiddle, StairPosition::EastMiddle] {
        connectors.push(Connector {
            floor: 8,
            a: upper_gym.clone(),
            b: Endpoint::Stair(middle),
        });
    }
    connectors
}
