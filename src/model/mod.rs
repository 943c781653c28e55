//! The declarative advertising model: immutable values grouped into
//! services, bound to one advertiser.

pub mod characteristic;
pub mod peripheral;
pub mod service;

pub use characteristic::Characteristic;
pub use peripheral::Peripheral;
pub use service::Service;
