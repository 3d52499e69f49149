//! Interactive collapsible tree visualization component.
//!
//! Renders a hierarchical dataset as an SVG tree diagram with:
//! - Reingold–Tilford-style layout with configurable spacing and separation
//! - Node collapse/expand on click, with stable per-node identities
//! - Pan and cursor-anchored zoom interactions
//! - Pluggable link path styles (diagonal, elbow, straight, or custom)
//!
//! # Example
//!
//! ```ignore
//! use arbor_graph::{TreeGraph, RawNode};
//!
//! let data = vec![RawNode::branch(
//!     "root",
//!     vec![RawNode::leaf("a"), RawNode::leaf("b")],
//! )];
//!
//! view! { <TreeGraph data=data /> }
//! ```

mod component;
pub mod hierarchy;
pub mod layout;
pub mod path;
mod state;
mod types;
pub mod viewport;

pub use component::TreeGraph;
pub use hierarchy::TreeNode;
pub use layout::{LayoutConfig, LayoutNode, LayoutResult, NodeSize, Orientation, Separation};
pub use path::PathStyle;
pub use state::{TreeGraphState, TreeUpdate};
pub use types::RawNode;
pub use viewport::{ScaleExtent, ViewTransform};
