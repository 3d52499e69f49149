//! SVG path generation for parent/child links.

use std::fmt;
use std::rc::Rc;

use super::layout::{LayoutNode, Orientation};

/// Custom path callback: given source/target display coordinates, produce an
/// SVG path `d` string.
pub type PathFn = Rc<dyn Fn((f64, f64), (f64, f64)) -> String>;

/// How a link between a parent and child node is drawn.
///
/// Resolved once per render; no runtime type inspection.
#[derive(Clone, Default)]
pub enum PathStyle {
	/// Cubic Bézier curve with control points at the depth-axis midpoint.
	#[default]
	Diagonal,
	/// Right-angle connector: vertical segment, then horizontal segment.
	Elbow,
	/// Straight line segment.
	Straight,
	/// Caller-supplied path function, invoked with display coordinates.
	Custom(PathFn),
}

impl fmt::Debug for PathStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathStyle::Diagonal => f.write_str("Diagonal"),
			PathStyle::Elbow => f.write_str("Elbow"),
			PathStyle::Straight => f.write_str("Straight"),
			PathStyle::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

impl PathStyle {
	/// Build the `d` attribute for a link from `source` to `target`.
	///
	/// Both nodes carry native (off-axis, depth-axis) coordinates; the
	/// orientation decides the display mapping before the path is emitted.
	pub fn draw(&self, source: &LayoutNode, target: &LayoutNode, orientation: Orientation) -> String {
		let (sx, sy) = orientation.display(source.x, source.y);
		let (tx, ty) = orientation.display(target.x, target.y);

		match self {
			PathStyle::Diagonal => match orientation {
				// Control points sit halfway along the depth axis, which is
				// the display x axis in horizontal mode.
				Orientation::Horizontal => {
					let mx = (sx + tx) / 2.0;
					format!("M{sx},{sy}C{mx},{sy} {mx},{ty} {tx},{ty}")
				}
				Orientation::Vertical => {
					let my = (sy + ty) / 2.0;
					format!("M{sx},{sy}C{sx},{my} {tx},{my} {tx},{ty}")
				}
			},
			PathStyle::Elbow => format!("M{sx},{sy}V{ty}H{tx}"),
			PathStyle::Straight => format!("M{sx},{sy}L{tx},{ty}"),
			PathStyle::Custom(path_fn) => path_fn((sx, sy), (tx, ty)),
		}
	}
}
