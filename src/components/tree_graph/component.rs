//! Leptos component rendering the collapsible tree as SVG.
//!
//! The component owns the committed tree state and wires up mouse/wheel
//! handlers for panning, anchored zooming, and per-node click/hover dispatch.
//! State lives outside the reactive graph in a thread-local stored value; a
//! version counter signal triggers re-render after every committed change,
//! and layout is recomputed from the committed state on each render pass.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, WheelEvent};

use super::hierarchy::TreeNode;
use super::layout::{LayoutConfig, LayoutNode, NodeSize, Orientation, Separation};
use super::path::PathStyle;
use super::state::{TreeGraphState, TreeUpdate};
use super::types::RawNode;
use super::viewport::{PanState, ScaleExtent, ViewTransform};

/// Event position relative to the rendering surface.
fn surface_point(ev: &MouseEvent) -> (f64, f64) {
	let origin = ev
		.current_target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.map(|el| el.get_bounding_client_rect());
	match origin {
		Some(rect) => (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		),
		None => (ev.client_x() as f64, ev.client_y() as f64),
	}
}

/// Built-in node label: plain SVG text, or an HTML block inside a
/// `foreignObject` when richer markup is wanted.
fn node_label(node: &LayoutNode, allow_foreign_objects: bool) -> AnyView {
	let name = node.name.clone();
	// HashMap iteration order is arbitrary; sort for a stable display.
	let mut attrs: Vec<(String, String)> = node
		.attributes
		.iter()
		.map(|(k, v)| (k.clone(), v.clone()))
		.collect();
	attrs.sort();

	if allow_foreign_objects {
		view! {
			<foreignObject x="16" y="-12" width="180" height="90">
				<div class="tree-node__label">
					<span class="tree-node__title">{name}</span>
					{attrs
						.into_iter()
						.map(|(k, v)| {
							view! {
								<span class="tree-node__attribute">{format!("{k}: {v}")}</span>
							}
						})
						.collect::<Vec<_>>()}
				</div>
			</foreignObject>
		}
		.into_any()
	} else {
		view! {
			<text class="tree-node__title" dx="18" dy="5">{name}</text>
			{attrs
				.into_iter()
				.enumerate()
				.map(|(i, (k, v))| {
					view! {
						<text class="tree-node__attribute" dx="18" dy=format!("{}", 26 + i * 16)>
							{format!("{k}: {v}")}
						</text>
					}
				})
				.collect::<Vec<_>>()}
		}
		.into_any()
	}
}

/// Renders an interactive, collapsible tree diagram on an SVG surface.
///
/// Pass hierarchical data via the reactive `data` signal; replacing it
/// rebuilds the tree with fresh node identities. Clicking a node toggles its
/// collapsed state when `collapsible` is set; dragging the background pans
/// and the wheel zooms (anchored at the cursor) when `zoomable` is set.
/// External callbacks always receive deep copies of the affected node.
#[component]
pub fn TreeGraph(
	/// Raw hierarchical input. Required.
	#[prop(into)]
	data: Signal<Vec<RawNode>>,
	/// Which display axis represents tree depth.
	#[prop(default = Orientation::Horizontal)]
	orientation: Orientation,
	/// Initial pan translation of the surface.
	#[prop(into, default = Signal::from((0.0, 0.0)))]
	translate: Signal<(f64, f64)>,
	/// Initial zoom, clamped into `scale_extent`.
	#[prop(into, default = Signal::from(1.0))]
	zoom: Signal<f64>,
	/// Allowed range for the initial zoom value.
	#[prop(into, default = Signal::from(ScaleExtent::default()))]
	scale_extent: Signal<ScaleExtent>,
	/// Per-axis spacing reserved for each node.
	#[prop(default = NodeSize::default())]
	node_size: NodeSize,
	/// Sibling vs non-sibling spacing multipliers.
	#[prop(default = Separation::default())]
	separation: Separation,
	/// Fixed distance per depth level, overriding the node-size-based step.
	#[prop(optional)]
	depth_factor: Option<f64>,
	/// One-shot truncation: nodes at or beyond this depth start collapsed.
	#[prop(optional)]
	initial_depth: Option<usize>,
	/// Whether clicking a node toggles its collapsed state.
	#[prop(default = true)]
	collapsible: bool,
	/// Whether pan and wheel-zoom gestures are active.
	#[prop(default = true)]
	zoomable: bool,
	/// Link path style.
	#[prop(optional)]
	path_style: PathStyle,
	/// Transition duration in milliseconds, forwarded to the rendered
	/// node/link elements as a CSS transition.
	#[prop(default = 500)]
	transition_duration: u32,
	/// Render node labels inside a `foreignObject` instead of SVG text.
	#[prop(default = false)]
	allow_foreign_objects: bool,
	/// Called with a deep copy of the clicked node, after any toggle commit.
	#[prop(optional)]
	on_click: Option<Callback<(TreeNode, MouseEvent)>>,
	/// Called with a deep copy of the hovered node.
	#[prop(optional)]
	on_mouse_over: Option<Callback<(TreeNode, MouseEvent)>>,
	/// Called with a deep copy of the unhovered node.
	#[prop(optional)]
	on_mouse_out: Option<Callback<(TreeNode, MouseEvent)>>,
	/// Called after every collapse/expand commit and pan/zoom gesture.
	#[prop(optional)]
	on_update: Option<Callback<TreeUpdate>>,
) -> impl IntoView {
	let version = RwSignal::new(0u32);
	let state = StoredValue::new_local(TreeGraphState::new(
		&data.get_untracked(),
		initial_depth,
		ViewTransform::default(),
	));
	let path_style = StoredValue::new_local(path_style);
	let config = LayoutConfig {
		node_size,
		separation,
		orientation,
		depth_factor,
	};

	let refresh = move || version.update(|v| *v += 1);
	let notify_update = move || {
		if let Some(cb) = on_update {
			cb.run(state.with_value(|s| s.update_payload()));
		}
	};

	// Viewport binding. Re-runs whenever the viewport props change: any
	// in-progress gesture is dropped and the transform is rebased on the new
	// configuration, with the zoom clamped into the extent.
	Effect::new(move |_| {
		let next = ViewTransform::initial(translate.get(), zoom.get(), scale_extent.get());
		state.update_value(|s| {
			s.pan = PanState::default();
			s.transform = next;
		});
		refresh();
	});

	// Wholesale data replacement: fresh identities, committed atomically.
	// The mount pass is skipped; the initial tree was built above.
	Effect::new(move |prev: Option<()>| {
		let data = data.get();
		if prev.is_some() {
			state.update_value(|s| s.replace_data(&data));
			refresh();
		}
	});

	let on_node_click = move |id: String, ev: MouseEvent| {
		let copy = state
			.try_update_value(|s| s.handle_node_click(&id, collapsible))
			.flatten();
		if collapsible && copy.is_some() {
			refresh();
			notify_update();
		}
		if let (Some(cb), Some(node)) = (on_click, copy) {
			cb.run((node, ev));
		}
	};
	let on_node_hover = move |id: &str, ev: MouseEvent, cb: Option<Callback<(TreeNode, MouseEvent)>>| {
		let copy = state.with_value(|s| s.handle_node_hover(id));
		if let (Some(cb), Some(node)) = (cb, copy) {
			cb.run((node, ev));
		}
	};

	let on_mousedown = move |ev: MouseEvent| {
		if !zoomable {
			return;
		}
		let (x, y) = surface_point(&ev);
		state.update_value(|s| {
			s.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: s.transform.x,
				transform_start_y: s.transform.y,
			};
		});
	};
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = surface_point(&ev);
		let panned = state
			.try_update_value(|s| {
				if !s.pan.active {
					return false;
				}
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
				true
			})
			.unwrap_or(false);
		if panned {
			refresh();
			notify_update();
		}
	};
	let end_pan = move |_: MouseEvent| {
		state.update_value(|s| s.pan.active = false);
	};
	let on_wheel = move |ev: WheelEvent| {
		if !zoomable {
			return;
		}
		ev.prevent_default();
		let (x, y) = surface_point(&ev);
		// Live zoom is intentionally not clamped to the extent; only the
		// initial configuration value is.
		let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
		state.update_value(|s| s.transform.zoom_at(factor, x, y));
		refresh();
		notify_update();
	};

	let node_style = format!("transition: transform {transition_duration}ms ease;");
	let link_style = format!("transition: all {transition_duration}ms ease;");

	view! {
		<svg
			class="tree-graph"
			width="100%"
			height="100%"
			style="display: block; cursor: grab;"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=end_pan
			on:mouseleave=end_pan
			on:wheel=on_wheel
		>
			<g
				class="tree-graph__surface"
				transform=move || {
					version.track();
					state.with_value(|s| s.transform.to_svg())
				}
			>
				{move || {
					version.track();
					let result = state.with_value(|s| s.layout(&config));

					let links = result
						.links
						.iter()
						.map(|&(src, tgt)| {
							let d = path_style.with_value(|p| {
								p.draw(&result.nodes[src], &result.nodes[tgt], orientation)
							});
							view! {
								<path
									class="tree-link"
									d=d
									fill="none"
									stroke="#8ca0b4"
									style=link_style.clone()
								/>
							}
						})
						.collect::<Vec<_>>();

					let nodes = result
						.nodes
						.iter()
						.map(|n| {
							let (dx, dy) = orientation.display(n.x, n.y);
							let click_id = n.id.clone();
							let over_id = n.id.clone();
							let out_id = n.id.clone();
							let class = if !n.has_children {
								"tree-node tree-node--leaf"
							} else if n.collapsed {
								"tree-node tree-node--collapsed"
							} else {
								"tree-node tree-node--branch"
							};
							let style = format!(
								"transform: translate({dx}px, {dy}px); {node_style}"
							);
							let label = node_label(n, allow_foreign_objects);
							view! {
								<g
									class=class
									style=style
									on:click=move |ev| on_node_click(click_id.clone(), ev)
									on:mouseover=move |ev| {
										on_node_hover(&over_id, ev, on_mouse_over)
									}
									on:mouseout=move |ev| {
										on_node_hover(&out_id, ev, on_mouse_out)
									}
								>
									<circle class="tree-node__circle" r="12" />
									{label}
								</g>
							}
						})
						.collect::<Vec<_>>();

					(links, nodes)
				}}
			</g>
		</svg>
	}
}
