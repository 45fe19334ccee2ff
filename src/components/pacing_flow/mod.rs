//! Budget pacing flowchart: graph model, reachability, filters, viewport and
//! the canvas component that draws them.

mod checks;
mod component;
mod data;
mod error;
mod filter;
mod graph;
mod layout;
mod listener;
mod palette;
mod panel;
mod reach;
mod render;
mod state;
mod types;
mod viewport;

pub use checks::{Check, run_checks};
pub use component::PacingFlowchart;
pub use data::{PACING_EDGES, PACING_NODES, pacing_graph};
pub use error::{FlowError, FlowResult};
pub use filter::{FilterView, FocusPath, RoleFilter, edge_visible, node_dimmed};
pub use graph::FlowGraph;
pub use layout::{EdgeRoute, Rect, edge_route, graph_bounds, grid_to_px, node_at, node_rect};
pub use palette::Variant;
pub use reach::{ReachSet, reachable_from};
pub use state::{FlowEvent, FlowState};
pub use types::{EdgeKey, EdgeSpec, FlowEdge, FlowNode, GridPos, NodeSpec, Outcome, Role};
pub use viewport::{Point, ViewTransform, Viewport, ViewportConfig};
