//! The advertising capability and the single-shot completion handle carried
//! by each advertise call.

pub mod radio;
pub mod simulated;

use crate::model::Service;
use std::sync::Arc;

pub use radio::{RadioAdvertiser, State};
pub use simulated::SimulatedAdvertiser;

type Callback = Box<dyn FnOnce() + Send>;

/// The in-flight callback pair for one advertise call. Resolving consumes
/// the handle, so each request completes at most once.
pub struct AdvertiseRequest {
    success: Callback,
    failure: Option<Callback>,
}

impl AdvertiseRequest {
    pub fn new(on_success: impl FnOnce() + Send + 'static) -> Self {
        AdvertiseRequest {
            success: Box::new(on_success),
            failure: None,
        }
    }

    pub fn or_else(mut self, on_failure: impl FnOnce() + Send + 'static) -> Self {
        self.failure = Some(Box::new(on_failure));
        self
    }

    pub fn resolve_success(self) {
        (self.success)();
    }

    /// Invokes the failure callback if one was supplied.
    pub fn resolve_failure(self) {
        if let Some(failure) = self.failure {
            failure();
        }
    }
}

impl std::fmt::Debug for AdvertiseRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvertiseRequest")
            .field("has_failure", &self.failure.is_some())
            .finish()
    }
}

/// The capability that drives a radio session to register services and
/// broadcast their presence. Implemented by [`RadioAdvertiser`] in
/// production and [`SimulatedAdvertiser`] in tests.
pub trait Advertiser {
    /// Hands the advertiser a shared view of the peripheral's services.
    /// Called once, when the owning peripheral is constructed.
    fn bind(&mut self, services: Arc<Vec<Service>>);

    /// Non-blocking: resolves the request synchronously or stores it for
    /// later resolution on the radio event channel. At most one request is
    /// outstanding; further calls resolve with failure immediately.
    fn advertise(&mut self, request: AdvertiseRequest);

    fn is_advertising(&self) -> bool;

    fn stop_advertising(&mut self);
}
