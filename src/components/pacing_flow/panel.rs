use leptos::prelude::*;

use super::checks::Check;
use super::palette::role_color;
use super::state::FlowState;
use super::types::{Outcome, Role};

#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
	let color = role_color(role);
	view! {
		<span class="role-badge" style=format!("background: {color}1A; color: {color}")>
			<span class="role-dot" style=format!("background: {color}") />
			{role.as_str()}
		</span>
	}
}

/// Title, subtitle, role and notes of the active node.
#[component]
pub fn DetailsCard(state: RwSignal<FlowState>) -> impl IntoView {
	let node = Memo::new(move |_| state.with(|s| s.active_node().clone()));

	view! {
		<div class="panel-card">
			<div class="details-title">{move || node.with(|n| n.title.clone())}</div>
			<div class="details-subtitle">{move || node.with(|n| n.subtitle.clone())}</div>
			<div class="details-role">
				{move || {
					let role = node.with(|n| n.role);
					view! { <RoleBadge role=role /> }
				}}
			</div>
			<ul class="details-notes">
				{move || {
					node.with(|n| {
						n.notes
							.iter()
							.map(|note| view! { <li>{note.clone()}</li> })
							.collect_view()
					})
				}}
			</ul>
		</div>
	}
}

#[component]
pub fn Legend() -> impl IntoView {
	let rules = [
		format!("{} → OK", Outcome::Within.label()),
		"> 5% → Daily email".to_string(),
		"> 25% → Immediate escalation".to_string(),
		format!("{} → Investigate sources", Outcome::Mismatch.label()),
		"Respond to flagged issues by EOD".to_string(),
	];

	view! {
		<div class="panel-card">
			<div class="legend-title">"Legend"</div>
			<div class="legend-roles">
				{Role::ALL.into_iter().map(|role| view! { <RoleBadge role=role /> }).collect_view()}
			</div>
			<div class="legend-rules">
				{rules.into_iter().map(|rule| view! { <div>{rule}</div> }).collect_view()}
			</div>
		</div>
	}
}

#[component]
pub fn ChecksCard(checks: Vec<Check>) -> impl IntoView {
	view! {
		<div class="panel-card checks">
			<div class="checks-title">"Self-Tests"</div>
			<ul>
				{checks
					.into_iter()
					.map(|c| {
						let (class, mark) = if c.pass {
							("check-pass", "✔ ")
						} else {
							("check-fail", "✖ ")
						};
						view! {
							<li class=class>
								{mark}
								{c.name}
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}
