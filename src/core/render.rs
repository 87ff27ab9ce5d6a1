//! Turns a planned route into numbered, human-readable directions.

use crate::core::graph::{EdgeKind, GraphPath, NavGraph};
use crate::core::ids::{RoomId, SpecialKind};
use crate::core::layout::{Coordinate, Layout};
use crate::core::planner::{Route, Step};
use std::fmt;

pub const ARRIVED_MESSAGE: &str = "You are already at your destination!";

#[derive(Debug, Clone, PartialEq)]
pub struct Directions {
    /// Absent when origin and destination are the same room.
    pub header: Option<String>,
    pub lines: Vec<String>,
    pub total_minutes: f64,
}

impl Directions {
    pub fn time_line(&self) -> String {
        format!("Estimated walking time: {} minutes", format_minutes(self.total_minutes))
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.header {
            Some(header) => {
                writeln!(f, "{}", header)?;
                writeln!(f)?;
                for (i, line) in self.lines.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, line)?;
                }
            }
            None => {
                for line in &self.lines {
                    writeln!(f, "{}", line)?;
                }
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.time_line())
    }
}

/// One decimal place, as shown to people.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.1}", minutes)
}

/// Compass hint for a walk, vertical part first: `head NORTH, then head WEST`.
/// `None` when both ends coincide.
pub fn heading_hint(from: &Coordinate, to: &Coordinate) -> Option<String> {
    let vertical = match to.y.cmp(&from.y) {
        std::cmp::Ordering::Greater => Some("head NORTH"),
        std::cmp::Ordering::Less => Some("head SOUTH"),
        std::cmp::Ordering::Equal => None,
    };
    let horizontal = match to.x.cmp(&from.x) {
        std::cmp::Ordering::Greater => Some("head EAST"),
        std::cmp::Ordering::Less => Some("head WEST"),
        std::cmp::Ordering::Equal => None,
    };
    match (vertical, horizontal) {
        (Some(v), Some(h)) => Some(format!("{}, then {}", v, h)),
        (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
        (None, None) => None,
    }
}

pub fn entry_instruction(area: SpecialKind) -> Option<&'static str> {
    match area {
        SpecialKind::Library => Some("Enter the Library from the center of the west hallway."),
        SpecialKind::Cafeteria => {
            Some("Enter the Cafeteria from one of the four corner entrances.")
        }
        _ => None,
    }
}

fn step_line(step: &Step) -> Option<String> {
    match step {
        Step::Walk { from, to, .. } => {
            let mut line = format!("Walk to {}", to.label);
            if let Some(hint) = heading_hint(&from.position, &to.position) {
                line.push_str(&format!(" ({})", hint));
            }
            Some(line)
        }
        Step::Stairs {
            direction,
            floors,
            to_floor,
            ..
        } => Some(format!(
            "Take the stairs {} {} {} to floor {}",
            direction,
            floors,
            if *floors == 1 { "floor" } else { "floors" },
            to_floor
        )),
        Step::Entry { area, .. } => entry_instruction(*area).map(str::to_string),
    }
}

pub fn render_route(route: &Route, layout: &Layout) -> Directions {
    if route.is_arrived() {
        return Directions {
            header: None,
            lines: vec![ARRIVED_MESSAGE.to_string()],
            total_minutes: 0.0,
        };
    }
    let name = |id: &RoomId| {
        layout
            .room(id)
            .map(|room| room.display_name())
            .unwrap_or_else(|| id.to_string())
    };
    Directions {
        header: Some(format!(
            "Navigation from {} to {}:",
            name(&route.from),
            name(&route.to)
        )),
        lines: route.steps.iter().filter_map(step_line).collect(),
        total_minutes: route.total_minutes,
    }
}

/// Node-by-node listing of a graph search result.
pub fn render_graph_path(path: &GraphPath, graph: &NavGraph) -> String {
    let mut out = String::from("DIRECTIONS:\n");
    for (i, &node) in path.nodes.iter().enumerate() {
        let via = match i.checked_sub(1).and_then(|e| path.edges.get(e)) {
            Some(EdgeKind::Stairs) => " (by stairs)",
            Some(EdgeKind::Connector) => " (through the entrance)",
            Some(EdgeKind::Walk) | None => "",
        };
        out.push_str(&format!(" - {}{}\n", graph.node(node).label, via));
    }
    out.push_str(&format!(
        "Estimated travel time: {} minutes",
        format_minutes(path.total_minutes)
    ));
    out
}
