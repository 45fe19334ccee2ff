//! The daily budget pacing workflow.

use super::error::FlowResult;
use super::graph::FlowGraph;
use super::types::{EdgeSpec, GridPos, NodeSpec, Outcome, Role};

const fn at(col: f64, row: f64) -> GridPos {
	GridPos::new(col, row)
}

pub const PACING_NODES: &[NodeSpec] = &[
	NodeSpec {
		id: "start",
		title: "Start of Day",
		subtitle: "Open platforms and reports",
		role: Role::Ops,
		pos: at(0.0, 0.0),
		notes: &[
			"Daily cadence for pacing checks.",
			"Scope: TFM Clients and City Cave.",
		],
	},
	NodeSpec {
		id: "pullReports",
		title: "Pull Spend Reports",
		subtitle: "DV360, Meta, Google Ads, Broadsign, Looker Studio",
		role: Role::Data,
		pos: at(1.0, 0.0),
		notes: &[
			"Filter to prior day spend.",
			"Ensure data freshness and matching campaign IDs.",
		],
	},
	NodeSpec {
		id: "updateSheet",
		title: "Update Pacing Sheet",
		subtitle: "Paste or sync into Budget Pacing Sheet",
		role: Role::Ops,
		pos: at(2.0, 0.0),
		notes: &[
			"Highlight finished campaigns in green.",
			"Highlight multi-month campaigns in yellow.",
		],
	},
	NodeSpec {
		id: "computeVariance",
		title: "Compute Variance vs Budget",
		subtitle: "Per campaign variance",
		role: Role::Data,
		pos: at(3.0, 0.0),
		notes: &[
			"Within ±5% = OK.",
			"> 5% off = Flag in daily email.",
			"> 25% off = Immediate flag.",
		],
	},
	NodeSpec {
		id: "ok",
		title: "Within ±5%",
		subtitle: "Continue monitoring",
		role: Role::Campaign,
		pos: at(4.0, -0.6),
		notes: &["No action needed beyond routine checks."],
	},
	NodeSpec {
		id: "flagDaily",
		title: "Over/Under > 5%",
		subtitle: "Add to daily email",
		role: Role::Ops,
		pos: at(4.0, 0.6),
		notes: &[
			"Subject: Date – TFM Clients – Over and Under.",
			"Attach screengrabs or % over/under by platform.",
		],
	},
	NodeSpec {
		id: "flagImmediate",
		title: "> 25% Variance",
		subtitle: "Immediate escalation",
		role: Role::Supervisor,
		pos: at(4.0, 1.8),
		notes: &["Escalate ASAP for intervention."],
	},
	NodeSpec {
		id: "missingAny",
		title: "Missing or Mismatched",
		subtitle: "In sheet but not in spend reports, or vice versa",
		role: Role::Data,
		pos: at(3.0, 1.4),
		notes: &[
			"If not in sheet but in reports → flag immediately.",
			"If in sheet but not in reports → flag immediately.",
		],
	},
	NodeSpec {
		id: "investigateCaves",
		title: "Verify Caves Budget",
		subtitle: "Mitch checks sheet vs Caves budget",
		role: Role::Data,
		pos: at(5.0, 0.2),
		notes: &[
			"If variance persists after update, verify budget source.",
			"Respond per cave with issue/solution/no issue.",
		],
	},
	NodeSpec {
		id: "investigateIMBA",
		title: "Verify IMBA Budget",
		subtitle: "Zaine checks sheet vs IMBA",
		role: Role::Data,
		pos: at(5.0, 1.0),
		notes: &[
			"If variance persists after update, verify budget source.",
			"Respond per campaign with issue/solution/no issue.",
		],
	},
	NodeSpec {
		id: "addComments",
		title: "Add Comments",
		subtitle: "Callan updates sheet annotations",
		role: Role::Ops,
		pos: at(5.0, 1.8),
		notes: &["Document outcomes and next steps in the sheet."],
	},
	NodeSpec {
		id: "supervisor",
		title: "Supervisor Review",
		subtitle: "Reuben supervision",
		role: Role::Supervisor,
		pos: at(6.0, 1.0),
		notes: &["Ensure pacing issues responded to by EOD."],
	},
	NodeSpec {
		id: "resolve",
		title: "Resolve + Communicate",
		subtitle: "Adjust budgets / fix tracking / pause where needed",
		role: Role::Campaign,
		pos: at(7.0, 1.0),
		notes: &[
			"Implement fix and confirm in sheet/email.",
			"Resume monitoring.",
		],
	},
	NodeSpec {
		id: "midMonth",
		title: "Mid-Month Budget Changes",
		subtitle: "Mitch/Zaine → Callan or self-update",
		role: Role::Data,
		pos: at(2.0, 2.2),
		notes: &[
			"Communicate changes promptly to avoid drift.",
			"Mitch handles City Cave, Zaine handles TFM clients.",
		],
	},
	NodeSpec {
		id: "newMonth",
		title: "New Month Roll-over",
		subtitle: "Add City Cave tab, roll multi-month campaigns",
		role: Role::Ops,
		pos: at(3.0, 2.2),
		notes: &[
			"First working day of new month.",
			"Update previous month spend totals.",
			"Send IMBAs to Callan or update directly.",
		],
	},
];

pub const PACING_EDGES: &[EdgeSpec] = &[
	EdgeSpec::plain("start", "pullReports"),
	EdgeSpec::plain("pullReports", "updateSheet"),
	EdgeSpec::plain("updateSheet", "computeVariance"),
	EdgeSpec::branch("computeVariance", "ok", Outcome::Within),
	EdgeSpec::branch("computeVariance", "flagDaily", Outcome::Minor),
	EdgeSpec::branch("computeVariance", "flagImmediate", Outcome::Major),
	EdgeSpec::branch("computeVariance", "missingAny", Outcome::Mismatch),
	EdgeSpec::plain("flagDaily", "investigateCaves"),
	EdgeSpec::plain("flagDaily", "investigateIMBA"),
	EdgeSpec::plain("flagImmediate", "investigateCaves"),
	EdgeSpec::plain("flagImmediate", "investigateIMBA"),
	EdgeSpec::plain("missingAny", "investigateCaves"),
	EdgeSpec::plain("missingAny", "investigateIMBA"),
	EdgeSpec::plain("investigateCaves", "addComments"),
	EdgeSpec::plain("investigateIMBA", "addComments"),
	EdgeSpec::plain("addComments", "supervisor"),
	EdgeSpec::plain("supervisor", "resolve"),
	EdgeSpec::plain("midMonth", "updateSheet"),
	EdgeSpec::plain("newMonth", "updateSheet"),
];

/// Builds the pacing workflow graph.
pub fn pacing_graph() -> FlowResult<FlowGraph> {
	FlowGraph::from_specs(PACING_NODES, PACING_EDGES)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_workflow_is_valid() {
		let graph = pacing_graph().unwrap();
		assert_eq!(graph.nodes().len(), 15);
		assert_eq!(graph.edges().len(), 19);
		assert_eq!(graph.first_node().id, "start");
	}
}
