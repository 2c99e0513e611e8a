//! Prelude module for common aidmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use aidmap::prelude::*;`

pub use crate::core::{
    builder::{Dashboard, DashboardBuilder},
    config::{CameraAnimationConfig, DashboardConfig, PopupLayoutConfig},
    constants,
    geo::{LatLng, LatLngBounds, Point},
    view::{Selection, ViewController},
    viewport::{CameraPadding, Viewport},
};

pub use crate::aggregate::{AggregateIndex, Aggregator, CountryAggregate};

pub use crate::data::{
    boundaries::{BoundaryCollection, BoundaryFeature},
    geojson::{Feature, FeatureCollection, Geometry},
    project::{ProjectRecord, ProjectStatus},
    store::{FileFetcher, GeoFeatureStore, HttpFetcher, ResourceFetcher},
};

pub use crate::input::{
    events::{event_channel, EventReceiver, EventSender, FeatureEvent, FeatureLayer},
    router::MapEventRouter,
};

pub use crate::ui::{
    controls::{CountryFilterPanel, FilterEntry},
    popup::{Popup, PopupRenderer},
};

pub use crate::animation::transitions::{Transition, TransitionManager};

pub use crate::{Error as DashboardError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
