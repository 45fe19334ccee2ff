use super::types::Role;

/// Colour scheme of the flowchart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
	#[default]
	Dark,
	Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	pub bg: &'static str,
	pub node: &'static str,
	pub node_active: &'static str,
	pub stroke: &'static str,
	pub grid: &'static str,
	pub text: &'static str,
	pub subtext: &'static str,
	pub accent: &'static str,
}

const DARK: Palette = Palette {
	bg: "#0B0B0D",
	node: "#1A1A20",
	node_active: "#20202A",
	stroke: "#2C2C36",
	grid: "#1E1E24",
	text: "#ECECF1",
	subtext: "#B9B9C6",
	accent: "#7AA2FF",
};

const LIGHT: Palette = Palette {
	bg: "#ffffff",
	node: "#ffffff",
	node_active: "#ffffff",
	stroke: "#e5e7eb",
	grid: "#f1f5f9",
	text: "#0f172a",
	subtext: "#475569",
	accent: "#0ea5e9",
};

impl Variant {
	pub fn palette(self) -> &'static Palette {
		match self {
			Variant::Dark => &DARK,
			Variant::Light => &LIGHT,
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			Variant::Dark => "pacing-flow dark",
			Variant::Light => "pacing-flow light",
		}
	}
}

/// Role colours are shared by both variants.
pub fn role_color(role: Role) -> &'static str {
	match role {
		Role::Ops => "#7AA2FF",
		Role::Campaign => "#4CC38A",
		Role::Supervisor => "#F5A524",
		Role::Data => "#A78BFA",
	}
}
