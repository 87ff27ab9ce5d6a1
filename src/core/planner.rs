//! Route planning over the coordinate model.
//!
//! A trip on one floor is a straight walk. A trip between floors walks to one
//! staircase, climbs or descends, and walks on from the same staircase on the
//! destination floor. Every staircase links any two floors it serves directly,
//! so one staircase per trip is always enough; the planner picks the one with
//! the shortest combined walk.

use crate::core::config::PlannerConfig;
use crate::core::error::HallwayError;
use crate::core::ids::{RoomId, SpecialKind};
use crate::core::layout::{Coordinate, EntryRule, Layout, Room, StairPosition, Staircase};
use serde::Serialize;
use std::fmt;

/// Converts geometry into minutes. Shared by the planner and the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostModel {
    pub minutes_per_unit: f64,
    pub stair_minutes_per_floor: f64,
}

impl CostModel {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            minutes_per_unit: config.minutes_per_unit(),
            stair_minutes_per_floor: config.stair_minutes_per_floor,
        }
    }

    pub fn walk_minutes(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        from.distance_to(to) * self.minutes_per_unit
    }

    pub fn stair_minutes(&self, from_floor: u8, to_floor: u8) -> f64 {
        f64::from(from_floor.abs_diff(to_floor)) * self.stair_minutes_per_floor
    }
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel::from_config(&PlannerConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// One end of a walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub label: String,
    pub floor: u8,
    pub position: Coordinate,
}

impl Place {
    fn room(room: &Room) -> Self {
        Self {
            label: room.display_name(),
            floor: room.floor,
            position: room.position,
        }
    }

    fn stair(stair: &Staircase, floor: u8) -> Self {
        Self {
            label: format!("the {}", stair.position.label()),
            floor,
            position: stair.coordinate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Walk {
        from: Place,
        to: Place,
        minutes: f64,
    },
    Stairs {
        staircase: StairPosition,
        direction: Direction,
        floors: u8,
        to_floor: u8,
        minutes: f64,
    },
    /// Informational note about how a special area is entered. Costs nothing.
    Entry { area: SpecialKind, rule: EntryRule },
}

impl Step {
    pub fn minutes(&self) -> f64 {
        match self {
            Step::Walk { minutes, .. } | Step::Stairs { minutes, .. } => *minutes,
            Step::Entry { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: RoomId,
    pub to: RoomId,
    pub steps: Vec<Step>,
    pub total_minutes: f64,
}

impl Route {
    fn new(from: RoomId, to: RoomId, steps: Vec<Step>) -> Self {
        let total_minutes = steps.iter().map(Step::minutes).sum();
        Self {
            from,
            to,
            steps,
            total_minutes,
        }
    }

    /// Origin and destination are the same room.
    pub fn is_arrived(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn staircase(&self) -> Option<StairPosition> {
        self.steps.iter().find_map(|step| match step {
            Step::Stairs { staircase, .. } => Some(*staircase),
            _ => None,
        })
    }
}

/// Plan a trip between two canonical ids.
pub fn plan(
    layout: &Layout,
    costs: &CostModel,
    from: &RoomId,
    to: &RoomId,
) -> Result<Route, HallwayError> {
    let origin = layout
        .room(from)
        .ok_or_else(|| HallwayError::RoomNotFound(from.to_string()))?;
    let destination = layout
        .room(to)
        .ok_or_else(|| HallwayError::RoomNotFound(to.to_string()))?;

    if origin.id == destination.id {
        return Ok(Route::new(from.clone(), to.clone(), Vec::new()));
    }

    if origin.floor == destination.floor {
        let step = Step::Walk {
            from: Place::room(origin),
            to: Place::room(destination),
            minutes: costs.walk_minutes(&origin.position, &destination.position),
        };
        return Ok(Route::new(from.clone(), to.clone(), vec![step]));
    }

    let stair = best_staircase(layout, origin, destination).ok_or_else(|| {
        HallwayError::LayoutError(format!(
            "no staircase links floor {} and floor {}",
            origin.floor, destination.floor
        ))
    })?;
    tracing::debug!(
        from = %origin.id,
        to = %destination.id,
        staircase = ?stair.position,
        "staircase selected"
    );

    let floors = origin.floor.abs_diff(destination.floor);
    let direction = if destination.floor > origin.floor {
        Direction::Up
    } else {
        Direction::Down
    };
    let mut steps = vec![
        Step::Walk {
            from: Place::room(origin),
            to: Place::stair(stair, origin.floor),
            minutes: costs.walk_minutes(&origin.position, &stair.coordinate),
        },
        Step::Stairs {
            staircase: stair.position,
            direction,
            floors,
            to_floor: destination.floor,
            minutes: costs.stair_minutes(origin.floor, destination.floor),
        },
        Step::Walk {
            from: Place::stair(stair, destination.floor),
            to: Place::room(destination),
            minutes: costs.walk_minutes(&stair.coordinate, &destination.position),
        },
    ];
    if let Some(area) = layout.special_area(&destination.id) {
        if area.entry != EntryRule::Unrestricted {
            steps.push(Step::Entry {
                area: area.kind,
                rule: area.entry,
            });
        }
    }
    Ok(Route::new(from.clone(), to.clone(), steps))
}

/// Staircase serving both floors with the shortest walk in plus walk out.
/// Ties go to the staircase declared first.
pub fn best_staircase<'a>(layout: &'a Layout, origin: &Room, destination: &Room) -> Option<&'a Staircase> {
    let mut best: Option<(&Staircase, f64)> = None;
    for stair in layout
        .staircases()
        .iter()
        .filter(|s| s.connects(origin.floor, destination.floor))
    {
        let distance = origin.position.distance_to(&stair.coordinate)
            + stair.coordinate.distance_to(&destination.position);
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((stair, distance)),
        }
    }
    best.map(|(stair, _)| stair)
}
