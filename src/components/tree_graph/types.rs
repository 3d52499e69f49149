//! Raw hierarchical input data for the tree graph component.

use std::collections::HashMap;

use serde::Deserialize;

/// One node of the raw input hierarchy, before identity assignment.
///
/// This is the shape callers hand to the component (typically parsed from
/// JSON). Nodes carry no identity of their own; stable identifiers are
/// generated when the tree is ingested.
#[derive(Clone, Debug, Deserialize)]
pub struct RawNode {
	/// Display name shown next to the node.
	pub name: String,
	/// Arbitrary key/value attributes, rendered by the node label.
	#[serde(default)]
	pub attributes: HashMap<String, String>,
	/// Child nodes. Empty for leaves.
	#[serde(default)]
	pub children: Vec<RawNode>,
}

impl RawNode {
	/// Convenience constructor for a leaf node.
	pub fn leaf(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: HashMap::new(),
			children: Vec::new(),
		}
	}

	/// Convenience constructor for a node with children.
	pub fn branch(name: impl Into<String>, children: Vec<RawNode>) -> Self {
		Self {
			name: name.into(),
			attributes: HashMap::new(),
			children,
		}
	}
}
