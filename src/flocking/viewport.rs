/// Render contexts that can report the size of the drawable area.
pub trait ViewportExtent {
	fn width(&self) -> f32;
	fn height(&self) -> f32;
}

/// A plain `width × height` drawable area with its origin in the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
	pub width: f32,
	pub height: f32,
}

impl Viewport {
	pub const fn new(width: f32, height: f32) -> Self {
		Self { width, height }
	}
}

impl ViewportExtent for Viewport {
	#[inline(always)]
	fn width(&self) -> f32 {
		self.width
	}

	#[inline(always)]
	fn height(&self) -> f32 {
		self.height
	}
}
