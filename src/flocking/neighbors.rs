use crate::components::Position;
use crate::entities::Entity;

/// Something with an identity and a location that can take part in a neighbour search.
pub trait Located {
	fn entity(&self) -> Entity;
	fn position(&self) -> &Position;
}

impl Located for (Entity, Position) {
	#[inline(always)]
	fn entity(&self) -> Entity {
		self.0
	}

	#[inline(always)]
	fn position(&self) -> &Position {
		&self.1
	}
}

/// Every candidate other than `subject` strictly closer than `radius`, with its distance.
///
/// Brute force: O(n) per subject.
pub fn neighbors<'l, T: Located>(
	subject: &'l T, candidates: &'l [T], radius: f32,
) -> impl Iterator<Item = (&'l T, f32)> + 'l {
	let entity = subject.entity();
	let position = subject.position();

	candidates
		.iter()
		.filter(move |other| other.entity() != entity)
		.map(move |other| (other, position.distance_to(other.position())))
		.filter(move |(_, distance)| *distance < radius)
}
