use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};

/// Manages the current camera state of the map: center, zoom, and screen size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
    /// Padding reserved at the viewport edges, e.g. for a popup panel
    pub padding: CameraPadding,
}

/// Per-edge viewport padding in pixels. Asymmetric left/right padding keeps
/// room for the popup panel beside a focused polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CameraPadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl CameraPadding {
    pub fn horizontal(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            top: 0.0,
            bottom: 0.0,
        }
    }
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
            padding: CameraPadding::default(),
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets center and zoom together
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.set_center(center);
        self.set_zoom(zoom);
    }

    /// Applies edge padding, replacing any previous padding
    pub fn set_padding(&mut self, padding: CameraPadding) {
        self.padding = padding;
    }

    /// Clears edge padding
    pub fn clear_padding(&mut self) {
        self.padding = CameraPadding::default();
    }

    /// Re-centers so `bounds` stays visible with the current padding,
    /// shifted east by `pan_margin` degrees to leave the popup panel clear.
    pub fn frame_bounds(&mut self, bounds: &LatLngBounds, pan_margin: f64) {
        let target = bounds.center().shifted_east(pan_margin);
        self.set_center(target);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::constants::WORLD_CENTER,
            crate::constants::WORLD_ZOOM,
            Point::new(1280.0, 800.0),
        )
    }
}
