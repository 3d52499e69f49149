//! Pan/zoom transform state for the rendering surface.
//!
//! The transform is an explicit state object owned by the component and
//! threaded through calls; there is no ambient global. Only the initial zoom
//! is clamped to the configured extent — live wheel zooming is not
//! re-clamped.

/// Pan and zoom transform applied to the entire tree view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	/// Initial transform from configuration: translation as given, zoom
	/// clamped to the extent.
	pub fn initial(translate: (f64, f64), zoom: f64, extent: ScaleExtent) -> Self {
		Self {
			x: translate.0,
			y: translate.1,
			k: clamp_initial(zoom, extent),
		}
	}

	/// Zoom by `factor` anchored at screen point `(ax, ay)`: the point under
	/// the cursor stays fixed while everything else scales around it.
	pub fn zoom_at(&mut self, factor: f64, ax: f64, ay: f64) {
		let new_k = self.k * factor;
		let ratio = new_k / self.k;
		self.x = ax - (ax - self.x) * ratio;
		self.y = ay - (ay - self.y) * ratio;
		self.k = new_k;
	}

	/// CSS/SVG transform string for the surface group.
	pub fn to_svg(&self) -> String {
		format!("translate({},{}) scale({})", self.x, self.y, self.k)
	}
}

/// Allowed zoom range for the initial configuration value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExtent {
	pub min: f64,
	pub max: f64,
}

impl Default for ScaleExtent {
	fn default() -> Self {
		Self { min: 0.1, max: 1.0 }
	}
}

/// Clamp a configured zoom value into the extent. Applied once at
/// initialization and on prop-driven viewport resets, never during live
/// interactive zooming.
pub fn clamp_initial(zoom: f64, extent: ScaleExtent) -> f64 {
	if zoom > extent.max {
		extent.max
	} else if zoom < extent.min {
		extent.min
	} else {
		zoom
	}
}

/// Tracks an in-progress background pan drag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}
