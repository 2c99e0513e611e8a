//! Presentation pieces owned by the engine: popup markup and the country
//! filter panel model. Everything here is backend-agnostic; the embedding
//! application decides how the markup and panel entries reach the screen.

pub mod controls;
pub mod popup;

pub use self::controls::{CountryFilterPanel, FilterEntry};
pub use self::popup::{Popup, PopupRenderer};
