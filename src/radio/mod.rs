//! The consumed radio-stack boundary. Commands go out through
//! [`RadioStack`]; confirmations come back asynchronously as
//! [`crate::gatt::radio_event::RadioEvent`]s on the backend's event channel.

pub mod channel;

use crate::gatt;
use uuid::Uuid;

pub use channel::{ChannelRadio, RadioCommand};

/// The narrow capability a radio backend implements. Every command is
/// fire-and-forget; registration and advertising-start are confirmed later
/// on the event channel, and a backend that never confirms leaves the
/// request pending indefinitely.
pub trait RadioStack {
    /// Registers one service with the advertising session. Confirmed by
    /// `RadioEvent::DidAddService`.
    fn add_service(&mut self, service: &gatt::Service);

    /// Starts broadcasting the given service identifiers. Confirmed by
    /// `RadioEvent::DidStartAdvertising`.
    fn start_advertising(&mut self, service_uuids: &[Uuid]);

    fn stop_advertising(&mut self);

    fn is_advertising(&self) -> bool;
}
