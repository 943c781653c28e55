//! Declarative BLE peripheral advertising.
//!
//! A caller describes what to expose as immutable [`Characteristic`]s
//! grouped into [`Service`]s, binds them into a [`Peripheral`] with an
//! [`Advertiser`] of their choice, and calls `advertise`. The radio-backed
//! advertiser sequences power-on, service registration and
//! advertising-start over a [`RadioStack`] backend, deferring requests
//! issued before the radio is ready and resolving each request's callback
//! pair exactly once. [`SimulatedAdvertiser`] stands in for the radio in
//! tests and completes synchronously.

pub mod advertiser;
pub mod error;
pub mod gatt;
pub mod model;
pub mod radio;
mod sdp_short_uuid;

pub use advertiser::{AdvertiseRequest, Advertiser, RadioAdvertiser, SimulatedAdvertiser, State};
pub use error::{Error, ErrorType};
pub use gatt::radio_event::{PowerState, RadioEvent};
pub use model::{Characteristic, Peripheral, Service};
pub use radio::{ChannelRadio, RadioCommand, RadioStack};
pub use sdp_short_uuid::SdpShortUuid;
