use crate::{
    animation::transitions::{Transition, TransitionManager, TransitionType},
    core::{
        config::{CameraAnimationConfig, PopupLayoutConfig},
        geo::{LatLng, LatLngBounds},
        viewport::{CameraPadding, Viewport},
    },
    constants,
    prelude::HashMap,
};
use once_cell::sync::Lazy;

/// The dashboard's current focus state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// World view, nothing selected
    None,
    /// A single focused country
    Country(String),
}

/// Known country display names with a hand-picked camera center and zoom.
/// `focus_on_country` only works for entries in this table; anything else
/// is silently ignored.
static COUNTRY_VIEWS: Lazy<HashMap<&'static str, (LatLng, f64)>> = Lazy::new(|| {
    let entries: [(&str, f64, f64, f64); 16] = [
        ("Kenya", 0.2, 37.9, 5.5),
        ("Ethiopia", 9.1, 40.5, 5.0),
        ("Uganda", 1.4, 32.3, 6.0),
        ("Tanzania", -6.4, 34.9, 5.2),
        ("Somalia", 5.2, 46.2, 5.0),
        ("South Sudan", 7.3, 30.2, 5.5),
        ("Sudan", 15.6, 30.2, 4.8),
        ("Nigeria", 9.1, 8.7, 5.2),
        ("Mali", 17.6, -4.0, 4.8),
        ("Niger", 17.6, 8.1, 4.8),
        ("Chad", 15.5, 18.7, 4.8),
        ("Bangladesh", 23.7, 90.4, 6.0),
        ("Afghanistan", 33.9, 67.7, 5.2),
        ("Yemen", 15.6, 48.0, 5.5),
        ("Jordan", 31.3, 36.4, 6.2),
        ("Lebanon", 33.9, 35.9, 7.0),
    ];

    entries
        .iter()
        .map(|(name, lat, lng, zoom)| (*name, (LatLng::new(*lat, *lng), *zoom)))
        .collect()
});

/// Owns the current selection and drives all camera movement. No other
/// mutation path changes the selection.
pub struct ViewController {
    viewport: Viewport,
    selection: Selection,
    transitions: TransitionManager,
    animation: CameraAnimationConfig,
    popup_layout: PopupLayoutConfig,
}

impl ViewController {
    pub fn new() -> Self {
        Self::with_config(
            CameraAnimationConfig::default(),
            PopupLayoutConfig::default(),
        )
    }

    pub fn with_config(animation: CameraAnimationConfig, popup_layout: PopupLayoutConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            selection: Selection::None,
            transitions: TransitionManager::new(),
            animation,
            popup_layout,
        }
    }

    /// Focuses the camera on a known country and records the selection.
    ///
    /// Unknown names are a silent no-op: the selection stays put and no
    /// animation starts. Returns whether the name was known.
    pub fn focus_on_country(&mut self, name: &str) -> bool {
        let Some((center, zoom)) = COUNTRY_VIEWS.get(name).copied() else {
            log::debug!("focus requested for unknown country {:?}", name);
            return false;
        };

        self.transitions.start(Transition::new(
            TransitionType::SetView { center, zoom },
            self.viewport.clone(),
            self.animation.fly_duration_ms as f64 / 1000.0,
        ));
        self.selection = Selection::Country(name.to_string());
        true
    }

    /// Animates back to the world default view and clears the selection
    pub fn reset_view(&mut self) {
        self.transitions.start(Transition::new(
            TransitionType::SetView {
                center: constants::WORLD_CENTER,
                zoom: constants::WORLD_ZOOM,
            },
            self.viewport.clone(),
            self.animation.fly_duration_ms as f64 / 1000.0,
        ));
        self.selection = Selection::None;
    }

    /// Records a clicked country and re-frames the camera around its
    /// polygon so it stays visible beside the popup panel: pans east by
    /// the configured margin and applies asymmetric left/right padding.
    pub fn select_country(&mut self, name: &str, bounds: &LatLngBounds) {
        self.transitions.start(Transition::new(
            TransitionType::FrameBounds {
                bounds: bounds.clone(),
                pan_margin: self.popup_layout.pan_margin,
                padding: CameraPadding::horizontal(
                    self.popup_layout.padding_left,
                    self.popup_layout.padding_right,
                ),
            },
            self.viewport.clone(),
            self.animation.pan_duration_ms as f64 / 1000.0,
        ));
        self.selection = Selection::Country(name.to_string());
    }

    /// Advances any running camera animation; call once per frame
    pub fn update(&mut self) {
        if let Some(viewport) = self.transitions.update() {
            self.viewport = viewport;
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Checks if a camera animation is in flight
    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    /// The camera target of the active animation, if any
    pub fn camera_target(&self) -> Option<&Viewport> {
        self.transitions.target()
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_known_country() {
        let mut view = ViewController::new();
        assert!(view.focus_on_country("Kenya"));

        assert_eq!(*view.selection(), Selection::Country("Kenya".to_string()));
        assert!(view.is_animating());
        assert_eq!(
            view.camera_target().unwrap().center,
            LatLng::new(0.2, 37.9)
        );
    }

    #[test]
    fn test_unknown_country_is_silent_noop() {
        let mut view = ViewController::new();
        assert!(!view.focus_on_country("Atlantis"));

        assert_eq!(*view.selection(), Selection::None);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_unknown_country_preserves_prior_selection() {
        let mut view = ViewController::new();
        view.focus_on_country("Kenya");
        view.focus_on_country("Atlantis");

        assert_eq!(*view.selection(), Selection::Country("Kenya".to_string()));
    }

    #[test]
    fn test_reset_restores_world_view() {
        let mut view = ViewController::new();
        view.focus_on_country("Kenya");
        view.reset_view();

        assert_eq!(*view.selection(), Selection::None);
        let target = view.camera_target().unwrap();
        assert_eq!(target.center, constants::WORLD_CENTER);
        assert_eq!(target.zoom, constants::WORLD_ZOOM);
    }

    #[test]
    fn test_select_country_pads_right_and_records_selection() {
        let mut view = ViewController::new();
        view.select_country("Kenya", &LatLngBounds::from_coords(-4.0, 34.0, 4.0, 42.0));

        assert_eq!(*view.selection(), Selection::Country("Kenya".to_string()));
        let target = view.camera_target().unwrap();
        assert!(target.padding.right > target.padding.left);
        assert!(target.center.lng > 38.0); // panned east of the box center
    }
}
