//! Tree layout: computes 2D positions for every visible node.
//!
//! Positions come from a Reingold–Tilford-style contour walk. Each subtree is
//! laid out in isolation, then pushed rightward of its earlier siblings by
//! the minimum shift that keeps every pair of horizontally adjacent nodes at
//! least one separation unit apart; parents are centered over their children.
//!
//! Coordinates are stored in the algorithm's native axes: `x` is the off-axis
//! (sibling spread), `y` is the depth axis. The display mapping for
//! horizontal orientation swaps the pair; see [`Orientation::display`].

use std::collections::HashMap;

use super::hierarchy::TreeNode;

/// Which display axis represents tree depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
	/// Depth grows along the display x axis (tree flows left to right).
	#[default]
	Horizontal,
	/// Depth grows along the display y axis (tree flows top to bottom).
	Vertical,
}

impl Orientation {
	/// Map native (off-axis, depth-axis) coordinates to display (x, y).
	pub fn display(self, x: f64, y: f64) -> (f64, f64) {
		match self {
			Orientation::Horizontal => (y, x),
			Orientation::Vertical => (x, y),
		}
	}
}

/// Per-axis spacing reserved for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSize {
	pub x: f64,
	pub y: f64,
}

impl Default for NodeSize {
	fn default() -> Self {
		Self { x: 140.0, y: 140.0 }
	}
}

/// Multipliers applied to the off-axis spacing between adjacent nodes.
///
/// Nodes sharing an immediate parent use `siblings`; nodes from different
/// subtrees use the larger `non_siblings` to visually separate the subtrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
	pub siblings: f64,
	pub non_siblings: f64,
}

impl Default for Separation {
	fn default() -> Self {
		Self {
			siblings: 1.0,
			non_siblings: 2.0,
		}
	}
}

/// Layout configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutConfig {
	pub node_size: NodeSize,
	pub separation: Separation,
	pub orientation: Orientation,
	/// When set, the depth-axis position becomes `depth * depth_factor`
	/// instead of `depth * <depth-axis node size>`.
	pub depth_factor: Option<f64>,
}

impl LayoutConfig {
	/// Spacing unit along the sibling-spread axis for this orientation.
	fn off_axis_size(&self) -> f64 {
		match self.orientation {
			Orientation::Horizontal => self.node_size.y,
			Orientation::Vertical => self.node_size.x,
		}
	}

	/// Distance between consecutive depth levels.
	fn depth_step(&self) -> f64 {
		self.depth_factor.unwrap_or(match self.orientation {
			Orientation::Horizontal => self.node_size.x,
			Orientation::Vertical => self.node_size.y,
		})
	}
}

/// One laid-out node: a snapshot of the tree node plus computed coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	pub id: String,
	pub name: String,
	pub attributes: HashMap<String, String>,
	pub collapsed: bool,
	/// Whether the underlying node has any children at all (collapsed ones
	/// included), so renderers can mark expandable nodes.
	pub has_children: bool,
	/// Off-axis position (native x).
	pub x: f64,
	/// Depth-axis position (native y).
	pub y: f64,
	pub depth: usize,
}

/// Result of one layout pass: visible nodes in depth-first order, and
/// parent/child links as (source, target) indices into `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
	pub nodes: Vec<LayoutNode>,
	pub links: Vec<(usize, usize)>,
}

/// Flattened visible tree used during placement.
struct Slot<'a> {
	node: &'a TreeNode,
	depth: usize,
	parent: Option<usize>,
	children: Vec<usize>,
	x: f64,
}

/// Subtree boundary at one depth level:
/// (left x, left slot index, right x, right slot index).
type ContourLevel = (f64, usize, f64, usize);

/// Compute positions and links for the visible part of the tree.
///
/// Pure: identical tree state and configuration always produce identical
/// positions. An empty tree yields an empty result.
pub fn layout(roots: &[TreeNode], config: &LayoutConfig) -> LayoutResult {
	let mut slots: Vec<Slot<'_>> = Vec::new();
	for root in roots {
		flatten(root, 0, None, &mut slots);
	}
	if slots.is_empty() {
		return LayoutResult::default();
	}

	let top: Vec<usize> = (0..slots.len())
		.filter(|&i| slots[i].parent.is_none())
		.collect();
	place_row(&top, &mut slots, config);

	let depth_step = config.depth_step();
	let nodes = slots
		.iter()
		.map(|s| LayoutNode {
			id: s.node.id.clone(),
			name: s.node.name.clone(),
			attributes: s.node.attributes.clone(),
			collapsed: s.node.collapsed,
			has_children: !s.node.is_leaf(),
			x: s.x,
			y: s.depth as f64 * depth_step,
			depth: s.depth,
		})
		.collect();
	let links = slots
		.iter()
		.enumerate()
		.filter_map(|(i, s)| s.parent.map(|p| (p, i)))
		.collect();

	LayoutResult { nodes, links }
}

/// Record the visible subtree under `node` in depth-first order.
fn flatten<'a>(
	node: &'a TreeNode,
	depth: usize,
	parent: Option<usize>,
	slots: &mut Vec<Slot<'a>>,
) -> usize {
	let idx = slots.len();
	slots.push(Slot {
		node,
		depth,
		parent,
		children: Vec::new(),
		x: 0.0,
	});
	if let Some(children) = node.visible_children() {
		for child in children {
			let child_idx = flatten(child, depth + 1, Some(idx), slots);
			slots[idx].children.push(child_idx);
		}
	}
	idx
}

/// Place one subtree; returns its contour indexed by depth below the root.
fn place(idx: usize, slots: &mut Vec<Slot<'_>>, config: &LayoutConfig) -> Vec<ContourLevel> {
	let children = slots[idx].children.clone();
	if children.is_empty() {
		slots[idx].x = 0.0;
		return vec![(0.0, idx, 0.0, idx)];
	}

	let mut merged = place_row(&children, slots, config);
	let (first, last) = (children[0], children[children.len() - 1]);
	let x = (slots[first].x + slots[last].x) / 2.0;
	slots[idx].x = x;

	let mut contour = Vec::with_capacity(merged.len() + 1);
	contour.push((x, idx, x, idx));
	contour.append(&mut merged);
	contour
}

/// Place a run of sibling subtrees left to right, shifting each one clear of
/// the merged contour of those before it. Returns the merged contour of the
/// whole run, indexed by depth below the siblings' own level.
fn place_row(
	row: &[usize],
	slots: &mut Vec<Slot<'_>>,
	config: &LayoutConfig,
) -> Vec<ContourLevel> {
	let off = config.off_axis_size();
	let mut merged: Vec<ContourLevel> = Vec::new();

	for (i, &child) in row.iter().enumerate() {
		let mut contour = place(child, slots, config);

		if i > 0 {
			// Minimum shift keeping every contour pair one separation unit
			// apart. The factor depends on whether the adjacent nodes at a
			// given depth share a parent.
			let mut shift = 0.0f64;
			for (level, &(lx, left_idx, ..)) in contour.iter().enumerate() {
				let Some(&(.., rx, right_idx)) = merged.get(level) else {
					break;
				};
				let factor = if slots[right_idx].parent == slots[left_idx].parent {
					config.separation.siblings
				} else {
					config.separation.non_siblings
				};
				shift = shift.max(rx + off * factor - lx);
			}
			if shift != 0.0 {
				shift_subtree(child, shift, slots);
				for level in &mut contour {
					level.0 += shift;
					level.2 += shift;
				}
			}
		}

		for (level, entry) in contour.into_iter().enumerate() {
			match merged.get_mut(level) {
				Some(m) => {
					if entry.0 < m.0 {
						(m.0, m.1) = (entry.0, entry.1);
					}
					if entry.2 > m.2 {
						(m.2, m.3) = (entry.2, entry.3);
					}
				}
				None => merged.push(entry),
			}
		}
	}

	merged
}

fn shift_subtree(idx: usize, shift: f64, slots: &mut Vec<Slot<'_>>) {
	slots[idx].x += shift;
	let children = slots[idx].children.clone();
	for child in children {
		shift_subtree(child, shift, slots);
	}
}
