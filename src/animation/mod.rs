//! Camera animation: easing curves and timed viewport transitions.

pub mod interpolation;
pub mod transitions;

pub use self::interpolation::{EasingFunction, Interpolation};
pub use self::transitions::{Transition, TransitionManager, TransitionState, TransitionType};
