use super::{Characteristic, Service};
use crate::advertiser::{AdvertiseRequest, Advertiser};
use crate::Error;
use std::sync::Arc;
use uuid::Uuid;

/// The advertising unit: an ordered set of services bound to exactly one
/// advertiser for the peripheral's whole lifetime. Which advertiser backs
/// it is the caller's choice, made at construction.
#[derive(Debug)]
pub struct Peripheral<A: Advertiser> {
    services: Arc<Vec<Service>>,
    advertiser: A,
}

impl<A: Advertiser> Peripheral<A> {
    pub fn for_services(services: Vec<Service>, mut advertiser: A) -> Self {
        let services = Arc::new(services);
        advertiser.bind(Arc::clone(&services));
        Peripheral {
            services,
            advertiser,
        }
    }

    /// Single primary service holding one read-only string characteristic.
    pub fn for_string_characteristic(
        text: &str,
        characteristic_uuid: Uuid,
        service_uuid: Uuid,
        advertiser: A,
    ) -> Result<Self, Error> {
        let characteristic = Characteristic::for_string(text, characteristic_uuid)?;
        let service = Service::for_characteristics(vec![characteristic], service_uuid, true);
        Ok(Self::for_services(vec![service], advertiser))
    }

    /// Builds the single-string peripheral and immediately advertises it.
    /// The returned peripheral must be kept alive for as long as the
    /// broadcast should run. An unencodable string resolves the failure
    /// callback and reports the caller-input error.
    pub fn advertise_string(
        text: &str,
        characteristic_uuid: Uuid,
        service_uuid: Uuid,
        advertiser: A,
        request: AdvertiseRequest,
    ) -> Result<Self, Error> {
        match Self::for_string_characteristic(text, characteristic_uuid, service_uuid, advertiser)
        {
            Ok(mut peripheral) => {
                peripheral.advertise(request);
                Ok(peripheral)
            }
            Err(error) => {
                request.resolve_failure();
                Err(error)
            }
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Pure delegation to the bound advertiser.
    pub fn advertise(&mut self, request: AdvertiseRequest) {
        self.advertiser.advertise(request);
    }

    pub fn is_advertising(&self) -> bool {
        self.advertiser.is_advertising()
    }

    pub fn stop_advertising(&mut self) {
        self.advertiser.stop_advertising();
    }

    pub fn advertiser(&self) -> &A {
        &self.advertiser
    }

    /// Mutable access to the bound advertiser, used by whoever pumps the
    /// radio event channel into a [`crate::advertiser::RadioAdvertiser`].
    pub fn advertiser_mut(&mut self) -> &mut A {
        &mut self.advertiser
    }
}
