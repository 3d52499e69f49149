//! arbor-graph: Interactive collapsible tree visualization.
//!
//! This crate provides a WASM-based tree-chart component that renders
//! hierarchical data as an SVG diagram with collapse/expand, pan/zoom, and
//! configurable layout spacing.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::tree_graph::{
	LayoutConfig, LayoutNode, LayoutResult, NodeSize, Orientation, PathStyle, RawNode,
	ScaleExtent, Separation, TreeGraph, TreeGraphState, TreeNode, TreeUpdate, ViewTransform,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("arbor-graph: logging initialized");
}

/// Load tree data from a script element with id="tree-data".
/// Expected format: a JSON array of nodes, each { name, attributes?, children? }
fn load_tree_data() -> Option<Vec<RawNode>> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("tree-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Vec<RawNode>>(&json_text) {
		Ok(data) => {
			info!("arbor-graph: loaded {} root node(s)", data.len());
			Some(data)
		}
		Err(e) => {
			warn!("arbor-graph: failed to parse tree data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads tree data from the DOM and renders the collapsible tree.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Load tree data from the DOM; missing or malformed data renders empty.
	let tree_data = load_tree_data().unwrap_or_default();
	let tree_signal = Signal::derive(move || tree_data.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Tree Visualization" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-tree">
			<TreeGraph data=tree_signal translate=(120.0, 60.0) />
			<div class="tree-overlay">
				<h1>"Tree Explorer"</h1>
				<p class="subtitle">
					"Click a node to collapse or expand it. Scroll to zoom. Drag the background to pan."
				</p>
			</div>
		</div>
	}
}
