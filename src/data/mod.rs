//! Data loading: the GeoJSON model, project records, the feature store,
//! and the administrative boundary collection.

pub mod boundaries;
pub mod geojson;
pub mod project;
pub mod store;

pub use self::boundaries::{BoundaryCollection, BoundaryFeature};
pub use self::geojson::{Feature, FeatureCollection, Geometry};
pub use self::project::{ProjectRecord, ProjectStatus};
pub use self::store::{FileFetcher, GeoFeatureStore, HttpFetcher, ResourceFetcher};
