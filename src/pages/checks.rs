use leptos::prelude::*;

use super::home::FlowchartPage;
use crate::components::pacing_flow::Variant;

/// Standalone flowchart with the self-test panel, served at `/flowchart`.
#[component]
pub fn SelfCheck() -> impl IntoView {
	view! {
		<FlowchartPage
			title="Budget Pacing Flow"
			subtitle="Workflow diagnostics are listed under the legend."
			variant=Variant::Dark
			show_checks=true
		/>
	}
}
