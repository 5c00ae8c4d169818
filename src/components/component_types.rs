use crate::components::component_macros::declare_components;
use crate::components::ComponentStoreView;
use nalgebra_glm::{self as glm, Vec2};
use rand::Rng;
use uuid::Builder;
use std::fmt;

/// Typed access to a single [Component] variant.
///
/// Implemented for every declared component type; it should never be implemented by hand.
pub trait ComponentData: Into<Component> {
	const KIND: ComponentKind;
	fn from_component(component: &Component) -> Option<&Self>;
	fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

declare_components!(Position, Velocity, Boid, Group, Color, Wobble);

/// Location of an entity in viewport units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f32,
	pub y: f32,
}

impl Position {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn set(&mut self, x: f32, y: f32) {
		self.x = x;
		self.y = y;
	}

	pub fn distance_to(&self, other: &Position) -> f32 {
		glm::distance(&self.as_vec(), &other.as_vec())
	}

	#[inline(always)]
	pub fn as_vec(&self) -> Vec2 {
		glm::vec2(self.x, self.y)
	}
}

/// Displacement applied to an entity's [Position] every tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Velocity {
	pub x: f32,
	pub y: f32,
}

impl Velocity {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn set(&mut self, x: f32, y: f32) {
		self.x = x;
		self.y = y;
	}

	pub fn magnitude(&self) -> f32 {
		glm::length(&self.as_vec())
	}

	#[inline(always)]
	pub fn as_vec(&self) -> Vec2 {
		glm::vec2(self.x, self.y)
	}
}

impl From<Vec2> for Velocity {
	fn from(value: Vec2) -> Self {
		Self::new(value.x, value.y)
	}
}

/// Marks an entity as a participant in the flocking rules.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Boid;

/// Opaque identifier shared by every member of a group.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct GroupId(String);

impl GroupId {
	/// Generates a random version 4 UUID.
	pub fn generate(rng: &mut impl Rng) -> Self {
		Self(Builder::from_random_bytes(rng.gen()).into_uuid().to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for GroupId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl fmt::Display for GroupId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// The group an entity currently belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
	pub id: GroupId,
}

impl Group {
	pub fn new(id: GroupId) -> Self {
		Self { id }
	}
}

/// An 8-bit RGB colour with a floating point alpha channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f32,
}

impl Rgba {
	pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
		Self { r, g, b, a }
	}

	pub fn random(rng: &mut impl Rng, alpha: f32) -> Self {
		Self::new(rng.gen(), rng.gen(), rng.gen(), alpha)
	}

	/// Linear interpolation towards `target`. RGB channels are rounded to the nearest integer.
	///
	/// `t` is clamped to `[0, 1]`; `t == 0` yields `self` and `t == 1` yields `target` exactly.
	pub fn lerp(&self, target: &Rgba, t: f32) -> Rgba {
		let t = t.clamp(0.0, 1.0);
		let channel = |from: u8, to: u8| {
			let from = f32::from(from);
			(from + (f32::from(to) - from) * t).round().clamp(0.0, 255.0) as u8
		};

		Rgba {
			r: channel(self.r, target.r),
			g: channel(self.g, target.g),
			b: channel(self.b, target.b),
			a: self.a * (1.0 - t) + target.a * t,
		}
	}
}

impl Default for Rgba {
	fn default() -> Self {
		Self::new(255, 255, 255, 1.0)
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The colour an entity is drawn with.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
	pub value: Rgba,
}

impl Color {
	pub const fn new(value: Rgba) -> Self {
		Self { value }
	}
}

/// A fixed per-entity sinusoid superimposed on the integrated motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wobble {
	pub frequency_x: f32,
	pub frequency_y: f32,
	pub amplitude: f32,
	pub phase_x: f32,
	pub phase_y: f32,
}

impl Wobble {
	/// Creates a wobble oscillating at the same frequency on both axes.
	pub const fn new(frequency: f32, amplitude: f32, phase_x: f32, phase_y: f32) -> Self {
		Self {
			frequency_x: frequency,
			frequency_y: frequency,
			amplitude,
			phase_x,
			phase_y,
		}
	}

	/// Offset to add to a [Position] at time `t` (in seconds).
	pub fn offset_at(&self, t: f32) -> (f32, f32) {
		(
			self.amplitude * (t * self.frequency_x + self.phase_x).sin(),
			self.amplitude * (t * self.frequency_y + self.phase_y).cos(),
		)
	}
}

impl Default for Wobble {
	fn default() -> Self {
		Self::new(1.0, 1.0, 0.0, 0.0)
	}
}
