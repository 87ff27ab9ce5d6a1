//! Explicit navigation graph over the same cost model as the planner.
//!
//! Nodes are rooms plus one landing per (staircase, served floor). Every pair
//! of nodes on a floor is joined by a walk edge, staircase landings are joined
//! across every pair of floors they serve, and the declared connectors replace
//! the walk edge between their two ends with an edge of the same cost. Because
//! all costs come from [`CostModel`], Dijkstra over this graph and
//! [`crate::core::planner::plan`] always agree on the cheapest time.

use crate::core::error::HallwayError;
use crate::core::ids::RoomId;
use crate::core::layout::{Coordinate, Endpoint, Layout, StairPosition};
use crate::core::planner::CostModel;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Room { id: RoomId },
    Landing { staircase: StairPosition },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub floor: u8,
    pub position: Coordinate,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Walk,
    Stairs,
    Connector,
}

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub to: NodeId,
    pub minutes: f64,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone)]
pub struct GraphPath {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeKind>,
    pub total_minutes: f64,
}

#[derive(Debug, Clone)]
pub struct NavGraph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
    rooms: FxHashMap<RoomId, NodeId>,
    landings: FxHashMap<(StairPosition, u8), NodeId>,
}

impl NavGraph {
    pub fn build(layout: &Layout, costs: &CostModel) -> Result<NavGraph, HallwayError> {
        let mut graph = NavGraph {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            rooms: FxHashMap::default(),
            landings: FxHashMap::default(),
        };

        let mut by_floor: Vec<Vec<NodeId>> = Vec::new();
        for floor in layout.floors() {
            let mut on_floor = Vec::new();
            for room in layout.rooms_on(floor.number) {
                let node = graph.push(Node {
                    kind: NodeKind::Room {
                        id: room.id.clone(),
                    },
                    floor: room.floor,
                    position: room.position,
                    label: room.display_name(),
                });
                graph.rooms.insert(room.id.clone(), node);
                on_floor.push(node);
            }
            for stair in layout.staircases_on(floor.number) {
                let node = graph.push(Node {
                    kind: NodeKind::Landing {
                        staircase: stair.position,
                    },
                    floor: floor.number,
                    position: stair.coordinate,
                    label: format!("{}, floor {}", stair.position.label(), floor.number),
                });
                graph.landings.insert((stair.position, floor.number), node);
                on_floor.push(node);
            }
            by_floor.push(on_floor);
        }

        let mut connectors: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        for connector in layout.connectors() {
            let a = graph.endpoint_node(&connector.a, connector.floor)?;
            let b = graph.endpoint_node(&connector.b, connector.floor)?;
            connectors.insert((a.min(b), a.max(b)));
        }

        for on_floor in &by_floor {
            for (i, &a) in on_floor.iter().enumerate() {
                for &b in &on_floor[i + 1..] {
                    let minutes =
                        costs.walk_minutes(&graph.nodes[a].position, &graph.nodes[b].position);
                    let kind = if connectors.contains(&(a.min(b), a.max(b))) {
                        EdgeKind::Connector
                    } else {
                        EdgeKind::Walk
                    };
                    graph.link(a, b, minutes, kind);
                }
            }
        }

        for stair in layout.staircases() {
            let served: Vec<(u8, NodeId)> = layout
                .floors()
                .iter()
                .filter_map(|f| {
                    graph
                        .landings
                        .get(&(stair.position, f.number))
                        .map(|&node| (f.number, node))
                })
                .collect();
            for (i, &(fa, a)) in served.iter().enumerate() {
                for &(fb, b) in &served[i + 1..] {
                    graph.link(a, b, costs.stair_minutes(fa, fb), EdgeKind::Stairs);
                }
            }
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edge_count(),
            "navigation graph built"
        );
        Ok(graph)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    fn link(&mut self, a: NodeId, b: NodeId, minutes: f64, kind: EdgeKind) {
        self.adjacency[a].push(Edge { to: b, minutes, kind });
        self.adjacency[b].push(Edge { to: a, minutes, kind });
    }

    fn endpoint_node(&self, endpoint: &Endpoint, floor: u8) -> Result<NodeId, HallwayError> {
        let found = match endpoint {
            Endpoint::Room(id) => self.rooms.get(id),
            Endpoint::Stair(position) => self.landings.get(&(*position, floor)),
        };
        found.copied().ok_or_else(|| {
            HallwayError::LayoutError(format!("connector endpoint {:?} has no graph node", endpoint))
        })
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Undirected edge count.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn room_node(&self, id: &RoomId) -> Option<NodeId> {
        self.rooms.get(id).copied()
    }

    pub fn landing_node(&self, staircase: StairPosition, floor: u8) -> Option<NodeId> {
        self.landings.get(&(staircase, floor)).copied()
    }

    /// Dijkstra from one room to another. Equal-cost frontiers settle the
    /// lower node id first.
    pub fn shortest_path(&self, from: &RoomId, to: &RoomId) -> Result<GraphPath, HallwayError> {
        let source = self
            .room_node(from)
            .ok_or_else(|| HallwayError::RoomNotFound(from.to_string()))?;
        let target = self
            .room_node(to)
            .ok_or_else(|| HallwayError::RoomNotFound(to.to_string()))?;

        let mut dist = vec![f64::INFINITY; self.nodes.len()];
        let mut prev: Vec<Option<(NodeId, EdgeKind)>> = vec![None; self.nodes.len()];
        let mut heap = BinaryHeap::new();
        let mut settled = 0usize;

        dist[source] = 0.0;
        heap.push(Reverse(Frontier {
            minutes: 0.0,
            node: source,
        }));

        while let Some(Reverse(Frontier { minutes, node })) = heap.pop() {
            if minutes > dist[node] {
                continue;
            }
            settled += 1;
            if node == target {
                break;
            }
            for edge in &self.adjacency[node] {
                let next = minutes + edge.minutes;
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    prev[edge.to] = Some((node, edge.kind));
                    heap.push(Reverse(Frontier {
                        minutes: next,
                        node: edge.to,
                    }));
                }
            }
        }
        tracing::debug!(settled, from = %from, to = %to, "dijkstra finished");

        if !dist[target].is_finite() {
            return Err(HallwayError::LayoutError(format!(
                "{} is unreachable from {}",
                to, from
            )));
        }

        let mut nodes = vec![target];
        let mut edges = Vec::new();
        let mut cursor = target;
        while let Some((before, kind)) = prev[cursor] {
            nodes.push(before);
            edges.push(kind);
            cursor = before;
        }
        nodes.reverse();
        edges.reverse();
        Ok(GraphPath {
            nodes,
            edges,
            total_minutes: dist[target],
        })
    }
}

/// Heap entry ordered by cost, then node id.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    minutes: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes
            .total_cmp(&other.minutes)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
