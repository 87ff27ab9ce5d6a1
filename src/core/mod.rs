//! Core modules for building layout, room resolution and route planning.
//!
//! Everything the binary needs goes through [`router::Router`]; the other
//! modules are public so tests and embedders can reach the pieces directly.

pub mod config;
pub mod error;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod planner;
pub mod render;
pub mod resolver;
pub mod router;
