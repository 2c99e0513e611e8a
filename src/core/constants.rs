//! Engine-wide defaults for the dashboard camera, popup layout, and data
//! resources. Keeping them in a single place makes it easier to tweak the
//! magic numbers.

use crate::core::geo::LatLng;

/// World-view camera center (mid-Atlantic, shows most landmasses).
pub const WORLD_CENTER: LatLng = LatLng { lat: 20.0, lng: 0.0 };

/// World-view zoom level.
pub const WORLD_ZOOM: f64 = 1.8;

/// Camera fly duration for country focus, in milliseconds.
pub const FLY_DURATION_MS: u64 = 2000;

/// Camera pan duration when re-framing for a popup, in milliseconds.
pub const PAN_DURATION_MS: u64 = 600;

/// Longitude offset (degrees) added east of a polygon's bounding box when
/// anchoring its popup.
pub const POPUP_LNG_OFFSET: f64 = 4.0;

/// Eastward camera shift (degrees) applied so the polygon stays visible
/// beside the popup panel.
pub const POPUP_PAN_MARGIN: f64 = 6.0;

/// Asymmetric viewport padding (pixels) reserving room on the right for
/// the popup panel.
pub const POPUP_PADDING_LEFT: f64 = 40.0;
pub const POPUP_PADDING_RIGHT: f64 = 320.0;

/// Coordinate a record falls back to when its own pair is out of range.
pub const FALLBACK_COORDINATE: LatLng = LatLng { lat: 0.0, lng: 0.0 };

/// Well-known path of the project feature collection.
pub const PROJECTS_RESOURCE: &str = "data/projects.geojson";

/// Well-known path of the administrative boundary collection.
pub const BOUNDARIES_RESOURCE: &str = "data/boundaries.geojson";
