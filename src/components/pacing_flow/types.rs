use std::fmt;
use std::str::FromStr;

use super::error::FlowError;

/// Responsible-party category of a workflow step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	Ops,
	Supervisor,
	Data,
	Campaign,
}

impl Role {
	/// Every role, in legend and filter-menu order.
	pub const ALL: [Role; 4] = [Role::Ops, Role::Supervisor, Role::Data, Role::Campaign];

	pub fn as_str(self) -> &'static str {
		match self {
			Role::Ops => "Ops",
			Role::Supervisor => "Supervisor",
			Role::Data => "Data",
			Role::Campaign => "Campaign",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = FlowError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| FlowError::UnknownRole { value: s.into() })
	}
}

/// Outcome category carried by a variance branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Spend within ±5% of budget.
	Within,
	/// More than 5% over or under.
	Minor,
	/// More than 25% over or under.
	Major,
	/// Campaign missing from the sheet or the spend reports.
	Mismatch,
}

impl Outcome {
	/// Text drawn next to the edge.
	pub fn label(self) -> &'static str {
		match self {
			Outcome::Within => "±5%",
			Outcome::Minor => ">5%",
			Outcome::Major => ">25%",
			Outcome::Mismatch => "Missing/Mismatch",
		}
	}
}

/// Position in the abstract layout grid. Rows may be fractional to offset
/// branches vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPos {
	pub col: f64,
	pub row: f64,
}

impl GridPos {
	pub const fn new(col: f64, row: f64) -> Self {
		Self { col, row }
	}
}

/// Static description of one workflow step.
#[derive(Clone, Copy, Debug)]
pub struct NodeSpec {
	pub id: &'static str,
	pub title: &'static str,
	pub subtitle: &'static str,
	pub role: Role,
	pub pos: GridPos,
	pub notes: &'static [&'static str],
}

/// Static description of one transition.
#[derive(Clone, Copy, Debug)]
pub struct EdgeSpec {
	pub from: &'static str,
	pub to: &'static str,
	pub outcome: Option<Outcome>,
}

impl EdgeSpec {
	pub const fn plain(from: &'static str, to: &'static str) -> Self {
		Self {
			from,
			to,
			outcome: None,
		}
	}

	pub const fn branch(from: &'static str, to: &'static str, outcome: Outcome) -> Self {
		Self {
			from,
			to,
			outcome: Some(outcome),
		}
	}
}

/// A workflow step as held by the graph. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
	pub id: String,
	pub title: String,
	pub subtitle: String,
	pub role: Role,
	pub pos: GridPos,
	pub notes: Vec<String>,
}

impl From<&NodeSpec> for FlowNode {
	fn from(spec: &NodeSpec) -> Self {
		Self {
			id: spec.id.into(),
			title: spec.title.into(),
			subtitle: spec.subtitle.into(),
			role: spec.role,
			pos: spec.pos,
			notes: spec.notes.iter().map(|n| (*n).into()).collect(),
		}
	}
}

/// A directed transition between two steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowEdge {
	pub from: String,
	pub to: String,
	pub outcome: Option<Outcome>,
}

impl FlowEdge {
	pub fn key(&self) -> EdgeKey {
		EdgeKey::new(&self.from, &self.to)
	}

	pub fn label(&self) -> Option<&'static str> {
		self.outcome.map(Outcome::label)
	}
}

impl From<&EdgeSpec> for FlowEdge {
	fn from(spec: &EdgeSpec) -> Self {
		Self {
			from: spec.from.into(),
			to: spec.to.into(),
			outcome: spec.outcome,
		}
	}
}

/// Identity of an edge for highlighting: the ordered endpoint pair.
/// Parallel edges between the same pair share one key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
	pub from: String,
	pub to: String,
}

impl EdgeKey {
	pub fn new(from: &str, to: &str) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}->{}", self.from, self.to)
	}
}
