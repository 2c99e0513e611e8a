//! Typed interaction events from the external map surface and the router
//! that answers them.

pub mod events;
pub mod router;

pub use self::events::{event_channel, EventReceiver, EventSender, FeatureEvent, FeatureLayer};
pub use self::router::MapEventRouter;
