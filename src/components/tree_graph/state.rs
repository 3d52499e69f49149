//! Committed tree state and interaction dispatch.
//!
//! The component owns one [`TreeGraphState`]. All mutation driven by
//! interaction happens on a private clone of the committed tree, which is
//! then published in a single assignment, so layout always reads a complete
//! state. External callbacks only ever receive deep copies.

use super::hierarchy::{self, TreeNode, find_node, find_node_mut};
use super::layout::{LayoutConfig, LayoutResult, layout};
use super::types::RawNode;
use super::viewport::{PanState, ViewTransform};

/// Payload for the external update callback, emitted after collapse/expand
/// commits and pan/zoom gestures.
#[derive(Clone, Debug)]
pub struct TreeUpdate {
	/// Deep copy of the most recently targeted node, if any.
	pub node: Option<TreeNode>,
	pub zoom: f64,
	pub translate: (f64, f64),
}

/// Core widget state: the committed tree plus viewport and interaction
/// tracking. Created once when the component mounts, replaced wholesale when
/// the data prop changes.
pub struct TreeGraphState {
	roots: Vec<TreeNode>,
	pub transform: ViewTransform,
	pub pan: PanState,
	target_node_id: Option<String>,
}

impl TreeGraphState {
	/// Ingest raw data and apply the one-shot initial-depth truncation: with
	/// a cutoff configured, every node at or beyond it starts collapsed (not
	/// removed, so it can be expanded later). The truncation is never
	/// re-applied on later layout passes.
	pub fn new(data: &[RawNode], initial_depth: Option<usize>, transform: ViewTransform) -> Self {
		let mut roots = hierarchy::assign(data);
		if let Some(cutoff) = initial_depth {
			collapse_at_depth(&mut roots, cutoff, 0);
		}
		Self {
			roots,
			transform,
			pan: PanState::default(),
			target_node_id: None,
		}
	}

	/// Wholesale data replacement. Identities are re-assigned from scratch
	/// (ids from the previous tree are not preserved), and the initial-depth
	/// truncation is not re-applied: it is a mount-time one-shot.
	pub fn replace_data(&mut self, data: &[RawNode]) {
		self.roots = hierarchy::assign(data);
		self.target_node_id = None;
	}

	pub fn roots(&self) -> &[TreeNode] {
		&self.roots
	}

	/// Recompute the layout from the committed tree. Pure with respect to
	/// state and configuration.
	pub fn layout(&self, config: &LayoutConfig) -> LayoutResult {
		layout(&self.roots, config)
	}

	/// Click dispatch. With collapsing enabled, toggles the target inside a
	/// clone of the committed tree, publishes the clone, and records the
	/// target for the next update notification. Returns a deep copy of the
	/// (post-toggle) node for the external click callback, or `None` for an
	/// unknown id, which is a silent no-op.
	pub fn handle_node_click(&mut self, id: &str, collapsible: bool) -> Option<TreeNode> {
		if !collapsible {
			return find_node(id, &self.roots).cloned();
		}

		let mut next = self.roots.clone();
		let copy = match find_node_mut(id, &mut next) {
			Some(node) => {
				hierarchy::toggle(node);
				node.clone()
			}
			None => return None,
		};
		self.roots = next;
		self.target_node_id = Some(id.to_owned());
		Some(copy)
	}

	/// Hover dispatch: lookup only, no state mutation. Returns a deep copy
	/// for the external callback.
	pub fn handle_node_hover(&self, id: &str) -> Option<TreeNode> {
		find_node(id, &self.roots).cloned()
	}

	/// Snapshot for the external update callback.
	pub fn update_payload(&self) -> TreeUpdate {
		TreeUpdate {
			node: self
				.target_node_id
				.as_deref()
				.and_then(|id| find_node(id, &self.roots))
				.cloned(),
			zoom: self.transform.k,
			translate: (self.transform.x, self.transform.y),
		}
	}
}

/// Mark every node at or beyond `cutoff` as collapsed.
fn collapse_at_depth(nodes: &mut [TreeNode], cutoff: usize, depth: usize) {
	for node in nodes {
		if depth >= cutoff {
			node.collapsed = true;
		}
		collapse_at_depth(&mut node.children, cutoff, depth + 1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn deep_raw() -> Vec<RawNode> {
		vec![RawNode::branch(
			"root",
			vec![
				RawNode::branch("a", vec![RawNode::branch("a1", vec![RawNode::leaf("a1x")])]),
				RawNode::leaf("b"),
			],
		)]
	}

	fn id_of(state: &TreeGraphState, name: &str) -> String {
		fn walk(nodes: &[TreeNode], name: &str) -> Option<String> {
			for n in nodes {
				if n.name == name {
					return Some(n.id.clone());
				}
				if let Some(found) = walk(&n.children, name) {
					return Some(found);
				}
			}
			None
		}
		walk(state.roots(), name).unwrap()
	}

	fn visible_names(state: &TreeGraphState) -> Vec<String> {
		state
			.layout(&LayoutConfig::default())
			.nodes
			.into_iter()
			.map(|n| n.name)
			.collect()
	}

	#[test]
	fn click_toggles_and_commits_a_new_tree() {
		let mut state = TreeGraphState::new(&deep_raw(), None, ViewTransform::default());
		let a = id_of(&state, "a");

		let copy = state.handle_node_click(&a, true).unwrap();
		assert!(copy.collapsed);
		assert!(!visible_names(&state).contains(&"a1".to_owned()));

		// Second click expands the node again; the cascade below persists.
		let copy = state.handle_node_click(&a, true).unwrap();
		assert!(!copy.collapsed);
		let names = visible_names(&state);
		assert!(names.contains(&"a1".to_owned()));
		assert!(!names.contains(&"a1x".to_owned()));
	}

	#[test]
	fn click_records_the_target_for_update_notifications() {
		let mut state = TreeGraphState::new(&deep_raw(), None, ViewTransform::default());
		let b = id_of(&state, "b");

		assert!(state.update_payload().node.is_none());
		state.handle_node_click(&b, true);
		assert_eq!(state.update_payload().node.unwrap().name, "b");
	}

	#[test]
	fn non_collapsible_click_copies_without_mutating() {
		let mut state = TreeGraphState::new(&deep_raw(), None, ViewTransform::default());
		let a = id_of(&state, "a");
		let before = visible_names(&state);

		let mut copy = state.handle_node_click(&a, false).unwrap();
		assert!(!copy.collapsed);
		// Mutating the returned copy must not reach committed state.
		copy.children.clear();
		copy.name.push('!');

		assert_eq!(visible_names(&state), before);
		assert_eq!(state.handle_node_hover(&a).unwrap().children.len(), 1);
	}

	#[test]
	fn unknown_id_is_a_silent_no_op() {
		let mut state = TreeGraphState::new(&deep_raw(), None, ViewTransform::default());
		let before = visible_names(&state);

		assert!(state.handle_node_click("missing", true).is_none());
		assert!(state.handle_node_hover("missing").is_none());
		assert_eq!(visible_names(&state), before);
	}

	#[test]
	fn initial_depth_collapses_at_and_beyond_the_cutoff() {
		let state = TreeGraphState::new(&deep_raw(), Some(1), ViewTransform::default());
		let names = visible_names(&state);
		// Depth-1 nodes are shown (collapsed); anything deeper is hidden.
		assert!(names.contains(&"root".to_owned()));
		assert!(names.contains(&"a".to_owned()));
		assert!(names.contains(&"b".to_owned()));
		assert!(!names.contains(&"a1".to_owned()));
	}

	#[test]
	fn initial_depth_is_one_shot_and_manual_expands_persist() {
		let mut state = TreeGraphState::new(&deep_raw(), Some(1), ViewTransform::default());
		let a = id_of(&state, "a");

		state.handle_node_click(&a, true);
		assert!(visible_names(&state).contains(&"a1".to_owned()));

		// Re-layouts keep the expanded state; the cutoff is never re-applied.
		for _ in 0..3 {
			assert!(visible_names(&state).contains(&"a1".to_owned()));
		}
	}

	#[test]
	fn replace_data_reassigns_all_identities() {
		let mut state = TreeGraphState::new(&deep_raw(), None, ViewTransform::default());
		let old_a = id_of(&state, "a");

		state.replace_data(&deep_raw());
		assert!(state.handle_node_hover(&old_a).is_none());
		assert_eq!(visible_names(&state).len(), 5);
	}
}
