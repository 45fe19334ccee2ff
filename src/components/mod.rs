/// Budget pacing flowchart component and its graph/view core.
pub mod pacing_flow;
