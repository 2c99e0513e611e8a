use crate::{
    aggregate::{AggregateIndex, CountryAggregate},
    core::{config::PopupLayoutConfig, view::ViewController},
    data::{boundaries::BoundaryCollection, project::ProjectRecord, store::GeoFeatureStore},
    input::events::{EventReceiver, FeatureEvent, FeatureLayer},
    ui::popup::{Popup, PopupRenderer},
    DashboardError, Result,
};
use std::sync::Arc;

/// Routes feature events from the external map surface to the engine.
///
/// Owns the hover highlight indicator and the single visible popup. Events
/// are drained synchronously from the channel, so their effects land in
/// exactly the order the surface emitted them.
pub struct MapEventRouter {
    store: Arc<GeoFeatureStore>,
    aggregates: AggregateIndex,
    boundaries: Arc<BoundaryCollection>,
    renderer: PopupRenderer,
    layout: PopupLayoutConfig,
    events: EventReceiver,
    highlighted: Option<u32>,
    active_popup: Option<Popup>,
}

impl MapEventRouter {
    pub fn new(
        store: Arc<GeoFeatureStore>,
        aggregates: AggregateIndex,
        boundaries: Arc<BoundaryCollection>,
        layout: PopupLayoutConfig,
        events: EventReceiver,
    ) -> Self {
        Self {
            store,
            aggregates,
            boundaries,
            renderer: PopupRenderer::new(),
            layout,
            events,
            highlighted: None,
            active_popup: None,
        }
    }

    /// Drains and handles every pending event. Errors escaping a handler
    /// are logged and swallowed here so a single bad interaction cannot
    /// take down the view.
    pub fn process_pending(&mut self, view: &mut ViewController) {
        let pending: Vec<FeatureEvent> = self.events.try_iter().collect();
        for event in pending {
            if let Err(e) = self.handle(event, view) {
                log::warn!("event {:?} failed: {}", event, e);
            }
        }
    }

    fn handle(&mut self, event: FeatureEvent, view: &mut ViewController) -> Result<()> {
        match event {
            FeatureEvent::Enter {
                layer: FeatureLayer::Boundaries,
                id,
            } => {
                // repeated enters overwrite; at most one highlight
                self.highlighted = Some(id);
            }
            FeatureEvent::Leave {
                layer: FeatureLayer::Boundaries,
                ..
            } => {
                // leaving always restores "no highlight", whichever
                // polygon triggered it
                self.highlighted = None;
            }
            FeatureEvent::Click {
                layer: FeatureLayer::Boundaries,
                id,
            } => {
                self.click_boundary(id, view)?;
            }
            FeatureEvent::Click {
                layer: FeatureLayer::ProjectPoints,
                id,
            } => {
                self.click_point(id)?;
            }
            FeatureEvent::Enter {
                layer: FeatureLayer::ProjectPoints,
                ..
            }
            | FeatureEvent::Leave {
                layer: FeatureLayer::ProjectPoints,
                ..
            } => {
                // hover over aggregated points is a cursor affordance on
                // the map surface; nothing to resolve here
            }
        }
        Ok(())
    }

    /// Boundary click: best-effort text match of the polygon's display
    /// name against record countries (case-insensitive substring), with
    /// statistics recomputed over exactly the matched subset. Zero matches
    /// is a silent no-op.
    fn click_boundary(&mut self, id: u32, view: &mut ViewController) -> Result<()> {
        let boundary = self
            .boundaries
            .get(id)
            .ok_or_else(|| DashboardError::ParseError(format!("unknown boundary id {}", id)))?
            .clone();

        let matched = match_records(self.store.records(), &boundary.name);
        let Some(aggregate) = CountryAggregate::over(boundary.name.as_str(), matched) else {
            log::debug!("no records match boundary {:?}", boundary.name);
            return Ok(());
        };

        self.dismiss_popup();
        let html = self
            .renderer
            .render_country_popup(&boundary.name, &aggregate);
        let anchor = boundary.bounds.east_anchor(self.layout.lng_offset);
        self.active_popup = Some(Popup::new(anchor, html));
        view.select_country(&boundary.name, &boundary.bounds);
        Ok(())
    }

    /// Aggregated-point click: the payload is already computed; anchor at
    /// the point itself, no camera motion
    fn click_point(&mut self, id: u32) -> Result<()> {
        let aggregate = self
            .aggregates
            .get_by_position(id)
            .ok_or_else(|| DashboardError::ParseError(format!("unknown point id {}", id)))?
            .clone();

        self.dismiss_popup();
        let html = self.renderer.render_point_popup(&aggregate);
        self.active_popup = Some(Popup::new(aggregate.representative_coordinate, html));
        Ok(())
    }

    /// Removes the visible popup, if any. Click handlers call this before
    /// creating a new popup, which is what keeps at most one visible.
    pub fn dismiss_popup(&mut self) {
        self.active_popup = None;
    }

    /// The currently highlighted boundary id, if any
    pub fn highlighted(&self) -> Option<u32> {
        self.highlighted
    }

    /// The currently visible popup, if any
    pub fn active_popup(&self) -> Option<&Popup> {
        self.active_popup.as_ref()
    }

    /// The precomputed per-country aggregates
    pub fn aggregates(&self) -> &AggregateIndex {
        &self.aggregates
    }
}

/// Selects every record whose country case-insensitively contains `name`
/// as a substring. A best-effort text match, not an exact-key join: a
/// boundary named "Sudan" also matches records for "South Sudan".
fn match_records<'a>(records: &'a [ProjectRecord], name: &str) -> Vec<&'a ProjectRecord> {
    let needle = name.to_lowercase();
    records
        .iter()
        .filter(|record| record.country.to_lowercase().contains(&needle))
        .collect()
}
