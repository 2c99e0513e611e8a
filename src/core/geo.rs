use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a LatLng from a GeoJSON-ordered `[longitude, latitude]` pair
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Returns a copy shifted east by `delta_lng` degrees, wrapped to range
    pub fn shifted_east(&self, delta_lng: f64) -> LatLng {
        LatLng::new(self.lat, Self::wrap_lng(self.lng + delta_lng))
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Creates degenerate bounds containing a single point
    pub fn from_point(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Eastern edge of the bounds in degrees longitude
    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// A point on the east edge at the box's center latitude, shifted
    /// further east by `lng_offset` degrees. Popups for polygon features
    /// hang off this point so they sit beside the shape, not on top of it.
    pub fn east_anchor(&self, lng_offset: f64) -> LatLng {
        LatLng::new(self.center().lat, LatLng::wrap_lng(self.east() + lng_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(-1.2921, 36.8219);
        assert_eq!(coord.lat, -1.2921);
        assert_eq!(coord.lng, 36.8219);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_from_lng_lat_order() {
        // GeoJSON stores [lng, lat]
        let coord = LatLng::from_lng_lat([36.8219, -1.2921]);
        assert_eq!(coord.lat, -1.2921);
        assert_eq!(coord.lng, 36.8219);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(!LatLng::new(-90.5, -180.5).is_valid());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(-5.0, 33.0, 5.0, 42.0);
        let inside = LatLng::new(0.0, 37.0);
        let outside = LatLng::new(10.0, 37.0);

        assert!(bounds.contains(&inside));
        assert!(!bounds.contains(&outside));
    }

    #[test]
    fn test_east_anchor() {
        let bounds = LatLngBounds::from_coords(-4.0, 34.0, 4.0, 42.0);
        let anchor = bounds.east_anchor(4.0);

        assert_eq!(anchor.lat, 0.0);
        assert_eq!(anchor.lng, 46.0);
    }

    #[test]
    fn test_east_anchor_wraps_at_antimeridian() {
        let bounds = LatLngBounds::from_coords(-10.0, 160.0, 10.0, 179.0);
        let anchor = bounds.east_anchor(4.0);

        assert_eq!(anchor.lng, -177.0);
    }
}
