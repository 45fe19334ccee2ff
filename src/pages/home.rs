use std::sync::Arc;

use leptos::prelude::*;
use log::error;

use crate::components::pacing_flow::{PacingFlowchart, Variant, pacing_graph};

/// Page chrome around the pacing flowchart. A rejected workflow definition
/// surfaces through the error boundary instead of a half-built chart.
#[component]
pub fn FlowchartPage(
	#[prop(into)] title: String,
	#[prop(into)] subtitle: String,
	#[prop(default = Variant::Dark)] variant: Variant,
	#[prop(default = false)] show_checks: bool,
) -> impl IntoView {
	let graph = pacing_graph().map(Arc::new);
	if let Err(e) = &graph {
		error!("Pacing workflow rejected: {}", e);
	}

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="flow-page">
				<div class="page-overlay">
					<h1>{title}</h1>
					<p class="subtitle">{subtitle}</p>
				</div>
				{graph
					.map(|graph| {
						view! {
							<PacingFlowchart graph=graph variant=variant show_checks=show_checks />
						}
					})}
			</div>
		</ErrorBoundary>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<FlowchartPage
			title="Budget Pacing Workflow"
			subtitle="How daily spend is checked against budget, and who picks up each variance."
			variant=Variant::Light
		/>
	}
}
