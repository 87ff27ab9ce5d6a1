//! The caller-held entry point.
//!
//! A [`Router`] owns the building layout, the cost model and the navigation
//! graph. All three are built once in [`Router::new`] and only read
//! afterwards, so a router can be shared freely between threads.

use crate::core::config::PlannerConfig;
use crate::core::error::{HallwayError, Role};
use crate::core::graph::{GraphPath, NavGraph};
use crate::core::ids::RoomId;
use crate::core::layout::Layout;
use crate::core::planner::{self, CostModel, Route};
use crate::core::render::{self, Directions};
use crate::core::resolver;

#[derive(Debug)]
pub struct Router {
    layout: Layout,
    costs: CostModel,
    graph: NavGraph,
}

impl Router {
    pub fn new(config: &PlannerConfig) -> Result<Router, HallwayError> {
        config.validate()?;
        let layout = Layout::generate()?;
        let costs = CostModel::from_config(config);
        let graph = NavGraph::build(&layout, &costs)?;
        Ok(Router {
            layout,
            costs,
            graph,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    pub fn resolve(&self, input: &str) -> Result<RoomId, HallwayError> {
        resolver::resolve(&self.layout, input)
    }

    pub fn plan(&self, from: &RoomId, to: &RoomId) -> Result<Route, HallwayError> {
        planner::plan(&self.layout, &self.costs, from, to)
    }

    /// Resolve both inputs, tagging a miss with the side it came from.
    pub fn resolve_pair(&self, from: &str, to: &str) -> Result<(RoomId, RoomId), HallwayError> {
        let from = self.resolve(from).map_err(|e| e.with_role(Role::Starting))?;
        let to = self.resolve(to).map_err(|e| e.with_role(Role::Destination))?;
        Ok((from, to))
    }

    /// Raw inputs in, planned route out.
    pub fn route(&self, from: &str, to: &str) -> Result<Route, HallwayError> {
        let (from, to) = self.resolve_pair(from, to)?;
        self.plan(&from, &to)
    }

    /// Raw inputs in, rendered directions out.
    pub fn directions(&self, from: &str, to: &str) -> Result<Directions, HallwayError> {
        let route = self.route(from, to)?;
        Ok(render::render_route(&route, &self.layout))
    }

    /// Node-level path from the graph search.
    pub fn graph_path(&self, from: &str, to: &str) -> Result<GraphPath, HallwayError> {
        let (from, to) = self.resolve_pair(from, to)?;
        self.graph.shortest_path(&from, &to)
    }

    /// The text shown for one request: directions, or the single error line
    /// for an unknown room.
    pub fn describe(&self, from: &str, to: &str) -> Result<String, HallwayError> {
        match self.directions(from, to) {
            Ok(directions) => Ok(directions.to_string()),
            Err(e) if e.is_not_found() => Ok(format!("Error: {}", e)),
            Err(e) => Err(e),
        }
    }
}
