use serde::{Deserialize, Serialize};

/// The two interaction surfaces the engine subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureLayer {
    /// Administrative boundary polygons
    Boundaries,
    /// Aggregated per-country project points
    ProjectPoints,
}

/// Pointer events the external map surface emits on the two feature
/// layers. The id is the surface's feature identifier: the synthetic
/// sequential boundary id, or the aggregate's position for points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureEvent {
    /// Pointer entered a feature
    Enter { layer: FeatureLayer, id: u32 },
    /// Pointer left a feature
    Leave { layer: FeatureLayer, id: u32 },
    /// Feature was clicked
    Click { layer: FeatureLayer, id: u32 },
}

impl FeatureEvent {
    pub fn layer(&self) -> FeatureLayer {
        match self {
            FeatureEvent::Enter { layer, .. }
            | FeatureEvent::Leave { layer, .. }
            | FeatureEvent::Click { layer, .. } => *layer,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            FeatureEvent::Enter { id, .. }
            | FeatureEvent::Leave { id, .. }
            | FeatureEvent::Click { id, .. } => *id,
        }
    }
}

/// Sending half handed to the map surface adapter
pub type EventSender = crossbeam_channel::Sender<FeatureEvent>;

/// Receiving half owned by the router; single consumer, drained
/// synchronously so event order is exactly emission order
pub type EventReceiver = crossbeam_channel::Receiver<FeatureEvent>;

/// Creates the feature-event channel connecting the map surface to the
/// router
pub fn event_channel() -> (EventSender, EventReceiver) {
    crossbeam_channel::unbounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_emission_order() {
        let (tx, rx) = event_channel();
        tx.send(FeatureEvent::Enter {
            layer: FeatureLayer::Boundaries,
            id: 3,
        })
        .unwrap();
        tx.send(FeatureEvent::Leave {
            layer: FeatureLayer::Boundaries,
            id: 3,
        })
        .unwrap();
        tx.send(FeatureEvent::Click {
            layer: FeatureLayer::ProjectPoints,
            id: 0,
        })
        .unwrap();

        let drained: Vec<_> = rx.try_iter().collect();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].id(), 3);
        assert_eq!(drained[2].layer(), FeatureLayer::ProjectPoints);
    }
}
