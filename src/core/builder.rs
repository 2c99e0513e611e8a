//! Composition root for the dashboard engine.
//!
//! The builder validates configuration, runs the two startup fetches as a
//! concurrent fan-out/fan-in pair, and wires the store, aggregates,
//! boundaries, router, view controller and filter panel together. All
//! services are constructed here and passed down explicitly; nothing in
//! the engine reaches for global state.

use crate::{
    aggregate::Aggregator,
    core::{config::DashboardConfig, view::ViewController},
    data::{
        boundaries::BoundaryCollection,
        geojson::FeatureCollection,
        store::{GeoFeatureStore, HttpFetcher, ResourceFetcher},
    },
    input::{
        events::{event_channel, EventSender},
        router::MapEventRouter,
    },
    ui::controls::CountryFilterPanel,
    AggregateIndex, Result,
};
use std::sync::Arc;

/// The assembled engine: everything the embedding application needs to
/// feed the external map surface and react to its events
pub struct Dashboard {
    store: Arc<GeoFeatureStore>,
    boundaries: Arc<BoundaryCollection>,
    router: MapEventRouter,
    view: ViewController,
    filter: CountryFilterPanel,
    events: EventSender,
}

impl Dashboard {
    /// The sending half of the feature-event channel; hand a clone to the
    /// map surface adapter
    pub fn event_sender(&self) -> EventSender {
        self.events.clone()
    }

    /// Drains pending feature events and advances any camera animation.
    /// Call once per frame from the UI loop.
    pub fn pump(&mut self) {
        self.router.process_pending(&mut self.view);
        self.view.update();
    }

    /// Applies a filter panel selection to the view
    pub fn apply_filter(&mut self, index: usize) {
        let filter = self.filter.clone();
        filter.select(index, &mut self.view);
    }

    /// Serializes the aggregates as a GeoJSON feature collection, one
    /// point per country; this is the derived source the external map
    /// displays as the aggregated-point layer
    pub fn derived_point_source(&self) -> Result<String> {
        let collection = FeatureCollection {
            features: self
                .aggregates()
                .iter()
                .map(|aggregate| aggregate.to_point_feature())
                .collect(),
        };
        collection.to_json()
    }

    pub fn store(&self) -> &GeoFeatureStore {
        &self.store
    }

    pub fn boundaries(&self) -> &BoundaryCollection {
        &self.boundaries
    }

    pub fn aggregates(&self) -> &AggregateIndex {
        self.router.aggregates()
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewController {
        &mut self.view
    }

    pub fn router(&self) -> &MapEventRouter {
        &self.router
    }

    pub fn filter(&self) -> &CountryFilterPanel {
        &self.filter
    }
}

/// Builder for the dashboard engine
pub struct DashboardBuilder {
    config: DashboardConfig,
    fetcher: Option<Arc<dyn ResourceFetcher>>,
}

impl DashboardBuilder {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            fetcher: None,
        }
    }

    /// Overrides how resources are fetched; defaults to HTTP
    pub fn with_fetcher(mut self, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Validates the config, loads both startup resources concurrently,
    /// and assembles the engine.
    ///
    /// Both fetches must succeed; if either fails the whole load fails
    /// and no partial dashboard is built. There is no automatic retry.
    pub async fn build(self) -> Result<Dashboard> {
        self.config.validate()?;

        let fetcher = self
            .fetcher
            .unwrap_or_else(|| Arc::new(HttpFetcher::new()));

        let (store, boundaries) = futures::future::try_join(
            GeoFeatureStore::load(fetcher.as_ref(), &self.config.projects_resource),
            BoundaryCollection::load(fetcher.as_ref(), &self.config.boundaries_resource),
        )
        .await?;

        let store = Arc::new(store);
        let boundaries = Arc::new(boundaries);
        let aggregates = Aggregator::aggregate(store.records());
        if aggregates.is_empty() {
            log::warn!("no countries available in the loaded project collection");
        }

        let filter = CountryFilterPanel::from_aggregates(&aggregates);
        let view = ViewController::with_config(
            self.config.animation.clone(),
            self.config.popup.clone(),
        );
        let (tx, rx) = event_channel();
        let router = MapEventRouter::new(
            store.clone(),
            aggregates,
            boundaries.clone(),
            self.config.popup.clone(),
            rx,
        );

        Ok(Dashboard {
            store,
            boundaries,
            router,
            view,
            filter,
            events: tx,
        })
    }
}
