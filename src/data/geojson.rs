use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// GeoJSON geometry, restricted to the shapes this dashboard consumes:
/// project locations are points, administrative boundaries are polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// The single coordinate of a point geometry, if this is one
    pub fn as_point(&self) -> Option<LatLng> {
        match self {
            Geometry::Point { coordinates } => Some(LatLng::from_lng_lat(*coordinates)),
            _ => None,
        }
    }

    /// Outer rings of the geometry. A polygon contributes its first ring,
    /// a multi-polygon one ring per member; points contribute nothing.
    pub fn outer_rings(&self) -> Vec<&[[f64; 2]]> {
        match self {
            Geometry::Point { .. } => Vec::new(),
            Geometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| vec![ring.as_slice()])
                .unwrap_or_default(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first().map(|ring| ring.as_slice()))
                .collect(),
        }
    }

    /// Bounding box of the geometry's outer rings (or the point itself)
    pub fn bounds(&self) -> Option<LatLngBounds> {
        if let Some(point) = self.as_point() {
            return Some(LatLngBounds::from_point(point));
        }

        let mut bounds: Option<LatLngBounds> = None;
        for ring in self.outer_rings() {
            for coord in ring {
                let point = LatLng::from_lng_lat(*coord);
                match bounds {
                    Some(ref mut b) => b.extend(&point),
                    None => bounds = Some(LatLngBounds::from_point(point)),
                }
            }
        }
        bounds
    }
}

/// A GeoJSON feature with geometry and properties.
///
/// Properties are kept in an ordered map of JSON values rather than an
/// open-ended dynamic object; consumers pull out the fields they know and
/// ignore the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
}

/// Accepts `"properties": null`, which some exporters emit instead of `{}`
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let properties = Option::deserialize(deserializer)?;
    Ok(properties.unwrap_or_default())
}

impl Feature {
    /// Creates a point feature with the given properties
    pub fn point(coordinates: LatLng, properties: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            id: None,
            geometry: Some(Geometry::Point {
                coordinates: [coordinates.lng, coordinates.lat],
            }),
            properties,
        }
    }

    /// A string property by name, if present and a string
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }

    /// A numeric property by name; numeric strings are accepted too since
    /// spreadsheet exports routinely quote numbers
    pub fn number_property(&self, key: &str) -> Option<f64> {
        match self.properties.get(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().replace(',', "").parse().ok(),
            _ => None,
        }
    }
}

/// Root GeoJSON object; only feature collections appear in this pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a feature collection from raw GeoJSON text
    pub fn from_str(raw: &str) -> crate::Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(raw)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))?;
        Ok(collection)
    }

    /// Serializes the collection back to GeoJSON text
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_collection_parsing() {
        let raw = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"Country": "Kenya"},
                    "geometry": {
                        "type": "Point",
                        "coordinates": [36.8219, -1.2921]
                    }
                }
            ]
        }
        "#;

        let collection = FeatureCollection::from_str(raw).unwrap();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.string_property("Country"), Some("Kenya"));
        let point = feature.geometry.as_ref().unwrap().as_point().unwrap();
        assert_eq!(point, LatLng::new(-1.2921, 36.8219));
    }

    #[test]
    fn test_malformed_geojson_rejected() {
        assert!(FeatureCollection::from_str("{\"type\": \"Telemetry\"}").is_err());
        assert!(FeatureCollection::from_str("not json at all").is_err());
    }

    #[test]
    fn test_polygon_bounds() {
        let geometry = Geometry::Polygon {
            coordinates: vec![vec![
                [34.0, -4.0],
                [42.0, -4.0],
                [42.0, 4.0],
                [34.0, 4.0],
                [34.0, -4.0],
            ]],
        };

        let bounds = geometry.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-4.0, 34.0));
        assert_eq!(bounds.north_east, LatLng::new(4.0, 42.0));
    }

    #[test]
    fn test_multi_polygon_outer_rings_only() {
        let geometry = Geometry::MultiPolygon {
            coordinates: vec![
                vec![
                    vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 0.0]],
                    // hole, must be ignored
                    vec![[0.5, 0.5], [1.0, 0.5], [1.0, 1.0], [0.5, 0.5]],
                ],
                vec![vec![[10.0, 10.0], [12.0, 10.0], [12.0, 12.0], [10.0, 10.0]]],
            ],
        };

        assert_eq!(geometry.outer_rings().len(), 2);
    }

    #[test]
    fn test_null_properties_tolerated() {
        let raw = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
                }
            ]
        }
        "#;

        let collection = FeatureCollection::from_str(raw).unwrap();
        assert!(collection.features[0].properties.is_empty());
    }

    #[test]
    fn test_quoted_number_property() {
        let raw = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"Budget": "1,250,000"},
                    "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
                }
            ]
        }
        "#;

        let collection = FeatureCollection::from_str(raw).unwrap();
        assert_eq!(
            collection.features[0].number_property("Budget"),
            Some(1_250_000.0)
        );
    }
}
