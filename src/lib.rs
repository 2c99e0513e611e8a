//! # Aidmap
//!
//! The data and interaction engine behind a development-aid project
//! dashboard: it loads project locations from GeoJSON, rolls them up per
//! country, and answers the hover/click events an external map surface
//! emits with highlight state, popup markup, and camera requests.
//!
//! Tile rendering and gesture handling belong to the external map surface;
//! this crate only shapes the data feeding it and reacts to its events.

pub mod aggregate;
pub mod animation;
pub mod core;
pub mod data;
pub mod input;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::{Dashboard, DashboardBuilder},
    config::DashboardConfig,
    geo::{LatLng, LatLngBounds, Point},
    view::{Selection, ViewController},
    viewport::Viewport,
};

pub use crate::aggregate::{AggregateIndex, Aggregator, CountryAggregate};

pub use crate::data::{
    boundaries::{BoundaryCollection, BoundaryFeature},
    project::{ProjectRecord, ProjectStatus},
    store::{FileFetcher, GeoFeatureStore, HttpFetcher, ResourceFetcher},
};

pub use crate::input::{
    events::{FeatureEvent, FeatureLayer},
    router::MapEventRouter,
};

pub use crate::ui::{controls::CountryFilterPanel, popup::{Popup, PopupRenderer}};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = DashboardError;
