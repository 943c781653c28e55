use super::{AdvertiseRequest, Advertiser};
use crate::model::Service;
use log::debug;
use std::sync::Arc;

/// Synchronous stand-in for the radio-backed advertiser. Completes every
/// request in the call itself: success when bound and not yet advertising,
/// failure otherwise. No queuing, no power-state modeling.
#[derive(Debug, Default)]
pub struct SimulatedAdvertiser {
    services: Option<Arc<Vec<Service>>>,
    advertising: bool,
}

impl SimulatedAdvertiser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Advertiser for SimulatedAdvertiser {
    fn bind(&mut self, services: Arc<Vec<Service>>) {
        self.services = Some(services);
    }

    fn advertise(&mut self, request: AdvertiseRequest) {
        if self.services.is_some() && !self.advertising {
            self.advertising = true;
            request.resolve_success();
        } else {
            debug!("simulated advertiser rejecting request (already advertising or unbound)");
            request.resolve_failure();
        }
    }

    fn is_advertising(&self) -> bool {
        self.advertising
    }

    fn stop_advertising(&mut self) {
        self.advertising = false;
    }
}
