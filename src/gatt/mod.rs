//! Radio-native attribute types. The declarative model in [`crate::model`]
//! is flattened into these before it crosses the radio boundary.

pub mod characteristic;
pub mod properties;
pub mod radio_event;
pub mod service;

pub use characteristic::Characteristic;
pub use service::Service;
