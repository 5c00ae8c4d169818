/// Declares the closed set of [components](crate::components::Component) known to the ECS.
///
/// For every listed type it generates a [ComponentKind](crate::components::ComponentKind) tag,
/// a variant of [Component](crate::components::Component), the [ComponentData](crate::components::ComponentData)
/// implementation used for typed access, and a snake-case getter on
/// [ComponentStoreView](crate::components::ComponentStoreView).
macro_rules! declare_components {
	($($t: ident),* $(,)?) => {
		paste::paste! {
			/// The tag identifying a [Component] variant.
			#[repr(u8)]
			#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
			pub enum ComponentKind {
				$($t),*
			}

			impl ComponentKind {
				/// Number of distinct component kinds.
				pub const COUNT: usize = [$(ComponentKind::$t),*].len();

				/// Every kind, in declaration order.
				pub const ALL: [ComponentKind; Self::COUNT] = [$(ComponentKind::$t),*];

				#[inline(always)]
				pub const fn index(self) -> usize {
					self as usize
				}

				pub const fn name(self) -> &'static str {
					match self {
						$(ComponentKind::$t => stringify!($t)),*
					}
				}
			}

			/// A single piece of per-entity state.
			#[derive(Clone, Debug, PartialEq)]
			pub enum Component {
				$($t($t)),*
			}

			impl Component {
				pub const fn kind(&self) -> ComponentKind {
					match self {
						$(Component::$t(_) => ComponentKind::$t),*
					}
				}
			}

			$(
				impl From<$t> for Component {
					#[inline(always)]
					fn from(value: $t) -> Self {
						Component::$t(value)
					}
				}

				impl ComponentData for $t {
					const KIND: ComponentKind = ComponentKind::$t;

					#[inline(always)]
					fn from_component(component: &Component) -> Option<&Self> {
						match component {
							Component::$t(value) => Some(value),
							#[allow(unreachable_patterns)]
							_ => None,
						}
					}

					#[inline(always)]
					fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
						match component {
							Component::$t(value) => Some(value),
							#[allow(unreachable_patterns)]
							_ => None,
						}
					}
				}
			)*

			impl<'l> ComponentStoreView<'l> {
				$(
					#[doc = "Gets the [`" $t "`] component, if present."]
					#[inline(always)]
					pub fn [<$t:snake>](&self) -> Option<&'l $t> {
						self.get::<$t>()
					}
				)*
			}
		}
	};
}

pub(crate) use declare_components;
