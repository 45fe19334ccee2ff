//! Error types for the pacing flowchart.

use thiserror::Error;

/// Result type for flowchart operations
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised while building or querying the flowchart.
///
/// The graph variants are configuration errors: the node and edge lists are
/// static, so hitting one means the page must not start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
	/// Two nodes were declared with the same identifier
	#[error("duplicate node id: {id}")]
	DuplicateNode {
		/// The repeated identifier
		id: String,
	},

	/// An edge endpoint names a node that was never declared
	#[error("edge {from}->{to} references unknown node '{missing}'")]
	UnknownEndpoint {
		/// Source of the offending edge
		from: String,
		/// Target of the offending edge
		to: String,
		/// The endpoint that did not resolve
		missing: String,
	},

	/// Lookup of an identifier absent from the graph
	#[error("node not found: {id}")]
	NodeNotFound {
		/// The identifier that was looked up
		id: String,
	},

	/// The graph has no nodes, so there is nothing to select
	#[error("flowchart has no nodes")]
	EmptyGraph,

	/// A role-filter control produced a value outside the role set
	#[error("unknown role: {value}")]
	UnknownRole {
		/// The raw control value
		value: String,
	},

	/// A focus-path control produced a value outside the category set
	#[error("unknown focus path: {value}")]
	UnknownFocus {
		/// The raw control value
		value: String,
	},
}

impl FlowError {
	/// Creates an unknown endpoint error
	pub fn unknown_endpoint(from: &str, to: &str, missing: &str) -> Self {
		Self::UnknownEndpoint {
			from: from.into(),
			to: to.into(),
			missing: missing.into(),
		}
	}

	/// Creates a node not found error
	pub fn node_not_found(id: impl Into<String>) -> Self {
		Self::NodeNotFound { id: id.into() }
	}
}
