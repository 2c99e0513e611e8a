use crate::{
    core::geo::LatLngBounds,
    data::{geojson::FeatureCollection, store::ResourceFetcher},
    DashboardError, Result,
};
use std::collections::BTreeMap;

/// Property names tried, in order, when resolving a boundary's display name
const NAME_FALLBACK_CHAIN: [&str; 3] = ["name_en", "name", "admin"];

/// A single administrative boundary polygon.
///
/// The id is synthetic, assigned sequentially at load time; it is the key
/// the external map surface echoes back in its feature events.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub id: u32,
    pub name: String,
    pub bounds: LatLngBounds,
    /// Source properties beyond the name fields, kept as a small explicit
    /// extensions map rather than an open-ended dynamic object
    pub extensions: BTreeMap<String, serde_json::Value>,
}

/// The administrative boundary collection supplied by an external
/// geographic dataset, loaded once alongside the project records
pub struct BoundaryCollection {
    features: Vec<BoundaryFeature>,
}

impl BoundaryCollection {
    /// Loads boundary polygons from the given resource, assigning ids
    /// sequentially from 0 in source order.
    ///
    /// Features without polygon geometry or without any resolvable name
    /// are dropped with a warning; the rest of the collection still loads.
    pub async fn load(fetcher: &dyn ResourceFetcher, resource: &str) -> Result<Self> {
        let raw = fetcher.fetch(resource).await?;
        let collection = FeatureCollection::from_str(&raw).map_err(|e| {
            DashboardError::DataUnavailable(format!("parsing {}: {}", resource, e))
        })?;

        Ok(Self::from_collection(&collection))
    }

    /// Builds the boundary set from an already-parsed collection
    pub fn from_collection(collection: &FeatureCollection) -> Self {
        let mut features = Vec::new();
        for (index, feature) in collection.features.iter().enumerate() {
            let name = NAME_FALLBACK_CHAIN
                .iter()
                .find_map(|key| feature.string_property(key))
                .map(str::to_string);

            let bounds = feature.geometry.as_ref().and_then(|g| {
                match g {
                    crate::data::geojson::Geometry::Point { .. } => None,
                    _ => g.bounds(),
                }
            });

            match (name, bounds) {
                (Some(name), Some(bounds)) => {
                    let extensions = feature
                        .properties
                        .iter()
                        .filter(|(key, _)| !NAME_FALLBACK_CHAIN.contains(&key.as_str()))
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();

                    features.push(BoundaryFeature {
                        id: features.len() as u32,
                        name,
                        bounds,
                        extensions,
                    });
                }
                _ => {
                    log::warn!("dropping boundary feature {}: no name or polygon", index);
                }
            }
        }

        log::info!("loaded {} boundary features", features.len());
        Self { features }
    }

    /// Looks up a boundary by its synthetic id
    pub fn get(&self, id: u32) -> Option<&BoundaryFeature> {
        self.features.get(id as usize)
    }

    /// All boundary features in id order
    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn boundary_collection(raw: &str) -> BoundaryCollection {
        BoundaryCollection::from_collection(&FeatureCollection::from_str(raw).unwrap())
    }

    const TWO_POLYGONS: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name_en": "Kenya", "name": "Kenya", "iso_a2": "KE"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[34.0, -4.0], [42.0, -4.0], [42.0, 4.0], [34.0, 4.0], [34.0, -4.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"admin": "Ethiopia"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[33.0, 3.0], [48.0, 3.0], [48.0, 15.0], [33.0, 15.0], [33.0, 3.0]]]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_sequential_ids_from_zero() {
        let boundaries = boundary_collection(TWO_POLYGONS);
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries.get(0).unwrap().name, "Kenya");
        assert_eq!(boundaries.get(1).unwrap().name, "Ethiopia");
        assert!(boundaries.get(2).is_none());
    }

    #[test]
    fn test_name_fallback_chain() {
        // second feature has neither name_en nor name, only admin
        let boundaries = boundary_collection(TWO_POLYGONS);
        assert_eq!(boundaries.get(1).unwrap().name, "Ethiopia");
    }

    #[test]
    fn test_extensions_exclude_name_fields() {
        let boundaries = boundary_collection(TWO_POLYGONS);
        let kenya = boundaries.get(0).unwrap();
        assert!(kenya.extensions.contains_key("iso_a2"));
        assert!(!kenya.extensions.contains_key("name_en"));
    }

    #[test]
    fn test_bounds_cover_outer_ring() {
        let boundaries = boundary_collection(TWO_POLYGONS);
        let kenya = boundaries.get(0).unwrap();
        assert_eq!(kenya.bounds.south_west, LatLng::new(-4.0, 34.0));
        assert_eq!(kenya.bounds.north_east, LatLng::new(4.0, 42.0));
    }

    #[test]
    fn test_nameless_feature_dropped_but_ids_stay_dense() {
        let raw = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"name": "Uganda"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[29.0, -1.0], [35.0, -1.0], [35.0, 4.0], [29.0, -1.0]]]
                    }
                }
            ]
        }
        "#;

        let boundaries = boundary_collection(raw);
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries.get(0).unwrap().name, "Uganda");
    }
}
