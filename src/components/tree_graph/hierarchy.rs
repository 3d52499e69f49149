//! Tree state: identity assignment, lookup by id, and collapse/expand.
//!
//! Raw input nodes are ingested once into [`TreeNode`]s, each receiving a
//! stable random identifier. The full child list is always retained;
//! collapsing a node only hides its children from layout traversal, so a
//! later expand restores them without recomputation.

use std::collections::HashMap;

use uuid::Uuid;

use super::types::RawNode;

/// One element of the visualized tree, with identity and UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
	/// Stable identifier, unique within one tree instance. Assigned once at
	/// ingestion and never reassigned; a wholesale data replacement produces
	/// entirely new identifiers.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Arbitrary key/value attributes carried through from the raw input.
	pub attributes: HashMap<String, String>,
	/// Full child list, in input order. Never discarded, even while
	/// collapsed.
	pub children: Vec<TreeNode>,
	/// Whether this node's children are hidden from layout traversal.
	pub collapsed: bool,
}

impl TreeNode {
	/// Children visible to the layout traversal: `None` while collapsed,
	/// otherwise the full child list. The visible set is always a subset of
	/// the full child list.
	pub fn visible_children(&self) -> Option<&[TreeNode]> {
		if self.collapsed {
			None
		} else {
			Some(&self.children)
		}
	}

	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}
}

/// Ingest raw input into identified tree state.
///
/// Every node gets a fresh UUID v4 identifier and starts expanded. Children
/// are assigned before their parent's child list is fixed. Empty input yields
/// an empty tree, which is valid.
pub fn assign(raw: &[RawNode]) -> Vec<TreeNode> {
	raw.iter()
		.map(|r| TreeNode {
			id: Uuid::new_v4().to_string(),
			name: r.name.clone(),
			attributes: r.attributes.clone(),
			children: assign(&r.children),
			collapsed: false,
		})
		.collect()
}

/// Depth-first lookup by identifier.
///
/// Each node is checked before descending into its visible children, and the
/// search short-circuits on the first hit. A missing id returns `None`;
/// callers treat that as a silent no-op.
pub fn find_node<'a>(id: &str, nodes: &'a [TreeNode]) -> Option<&'a TreeNode> {
	for node in nodes {
		if node.id == id {
			return Some(node);
		}
		if let Some(children) = node.visible_children() {
			if let Some(found) = find_node(id, children) {
				return Some(found);
			}
		}
	}
	None
}

/// Mutable variant of [`find_node`], used by the collapse/expand engine to
/// edit a node inside a cloned tree in place.
pub fn find_node_mut<'a>(id: &str, nodes: &'a mut [TreeNode]) -> Option<&'a mut TreeNode> {
	for node in nodes {
		if node.id == id {
			return Some(node);
		}
		if !node.collapsed {
			if let Some(found) = find_node_mut(id, &mut node.children) {
				return Some(found);
			}
		}
	}
	None
}

/// Collapse a node and, recursively, every node in its full child list.
///
/// The cascade runs regardless of the descendants' current state, so a
/// collapsed subtree is marked collapsed all the way down.
pub fn collapse(node: &mut TreeNode) {
	node.collapsed = true;
	for child in &mut node.children {
		collapse(child);
	}
}

/// Expand a single node. Descendants keep their own state, so a
/// previously-collapsed grandchild stays collapsed when its ancestor
/// re-expands.
pub fn expand(node: &mut TreeNode) {
	node.collapsed = false;
}

/// Interaction toggle: expand a collapsed node, collapse an expanded one.
pub fn toggle(node: &mut TreeNode) {
	if node.collapsed {
		expand(node);
	} else {
		collapse(node);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn three_level_raw() -> Vec<RawNode> {
		vec![RawNode::branch(
			"root",
			vec![
				RawNode::branch("a", vec![RawNode::leaf("a1"), RawNode::leaf("a2")]),
				RawNode::leaf("b"),
			],
		)]
	}

	fn node_count(nodes: &[TreeNode]) -> usize {
		nodes.iter().map(|n| 1 + node_count(&n.children)).sum()
	}

	fn collect_ids(nodes: &[TreeNode], out: &mut Vec<String>) {
		for n in nodes {
			out.push(n.id.clone());
			collect_ids(&n.children, out);
		}
	}

	#[test]
	fn assign_gives_every_node_a_unique_id() {
		let tree = assign(&three_level_raw());
		assert_eq!(node_count(&tree), 5);

		let mut ids = Vec::new();
		collect_ids(&tree, &mut ids);
		let unique: std::collections::HashSet<_> = ids.iter().collect();
		assert_eq!(unique.len(), ids.len());
	}

	#[test]
	fn assign_starts_every_node_expanded_with_full_children_visible() {
		let tree = assign(&three_level_raw());
		let root = &tree[0];
		assert!(!root.collapsed);
		assert_eq!(root.visible_children().unwrap().len(), root.children.len());
	}

	#[test]
	fn assign_of_empty_input_is_empty() {
		assert!(assign(&[]).is_empty());
	}

	#[test]
	fn find_returns_assigned_nodes_and_none_for_unknown_ids() {
		let tree = assign(&three_level_raw());
		let mut ids = Vec::new();
		collect_ids(&tree, &mut ids);

		for id in &ids {
			assert_eq!(find_node(id, &tree).map(|n| n.id.as_str()), Some(id.as_str()));
		}
		assert!(find_node("no-such-id", &tree).is_none());
	}

	#[test]
	fn collapse_cascades_to_all_descendants() {
		let mut tree = assign(&three_level_raw());
		// Pre-expand state is irrelevant; flip one grandchild first.
		tree[0].children[0].children[1].collapsed = false;

		collapse(&mut tree[0]);

		fn all_collapsed(node: &TreeNode) -> bool {
			node.collapsed && node.children.iter().all(all_collapsed)
		}
		assert!(all_collapsed(&tree[0]));
		// Full child list survives the collapse.
		assert_eq!(tree[0].children.len(), 2);
		assert!(tree[0].visible_children().is_none());
	}

	#[test]
	fn expand_affects_only_the_target_node() {
		let mut tree = assign(&three_level_raw());
		collapse(&mut tree[0]);
		expand(&mut tree[0]);

		let root = &tree[0];
		assert!(!root.collapsed);
		// Children collapsed by the cascade stay collapsed.
		assert!(root.children.iter().all(|c| c.collapsed));
	}

	#[test]
	fn toggle_twice_restores_direct_children_but_not_deeper_descendants() {
		let mut tree = assign(&three_level_raw());
		toggle(&mut tree[0]); // collapse cascade
		toggle(&mut tree[0]); // expand root only

		let root = &tree[0];
		assert!(!root.collapsed);
		assert!(root.visible_children().is_some());
		let a = &root.children[0];
		assert!(a.collapsed);
		assert!(a.visible_children().is_none());
	}

	#[test]
	fn find_checks_a_node_before_descending_and_skips_collapsed_subtrees() {
		let mut tree = assign(&three_level_raw());
		let hidden = tree[0].children[0].children[0].id.clone();
		let a_id = tree[0].children[0].id.clone();

		collapse(find_node_mut(&a_id, &mut tree).unwrap());

		// The collapsed node itself is still reachable...
		assert!(find_node(&a_id, &tree).is_some());
		// ...but its hidden descendants are not part of the visible search.
		assert!(find_node(&hidden, &tree).is_none());
	}
}
