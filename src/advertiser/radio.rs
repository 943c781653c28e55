use super::{AdvertiseRequest, Advertiser};
use crate::gatt;
use crate::gatt::radio_event::{PowerState, RadioEvent};
use crate::model::Service;
use crate::radio::RadioStack;
use log::{debug, trace, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Lifecycle of the advertising session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Radio power not yet confirmed; advertise calls are deferred.
    Off,
    /// Radio reported a non-usable power state. Left only on a later
    /// power-state notification.
    Unavailable,
    /// Radio ready, nothing registered with this session yet.
    Idle,
    /// Registrations issued, awaiting the last confirmation.
    RegisteringServices,
    /// Broadcast accepted and running.
    Advertising,
}

/// The production advertiser: sequences power-on, service registration and
/// advertising-start over any [`RadioStack`], holding at most one pending
/// request. All radio notifications enter through [`Self::handle_event`] on
/// a single event channel, so the state needs no internal locking; sharing
/// one instance across channels requires external synchronization.
#[derive(Debug)]
pub struct RadioAdvertiser<R: RadioStack> {
    radio: R,
    services: Option<Arc<Vec<Service>>>,
    state: State,
    pending: Option<AdvertiseRequest>,
    awaiting_registrations: usize,
}

impl<R: RadioStack> RadioAdvertiser<R> {
    pub fn new(radio: R) -> Self {
        RadioAdvertiser {
            radio,
            services: None,
            state: State::Off,
            pending: None,
            awaiting_registrations: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The single transition function. Feed every notification from the
    /// radio backend's event channel through here.
    pub fn handle_event(&mut self, event: RadioEvent) {
        match event {
            RadioEvent::DidUpdateState { state } => self.on_power_state(state),
            RadioEvent::DidAddService { service, error } => self.on_service_added(service, error),
            RadioEvent::DidStartAdvertising { error } => self.on_advertising_started(error),
        }
    }

    fn on_power_state(&mut self, power: PowerState) {
        if power.is_powered() {
            match self.state {
                State::Off | State::Unavailable => {
                    debug!("radio powered on");
                    self.state = State::Idle;
                    if let Some(request) = self.pending.take() {
                        debug!("starting deferred advertise");
                        self.advertise(request);
                    }
                }
                current => trace!("power-on notification ignored in state {:?}", current),
            }
        } else {
            debug!("radio reported power state {:?}", power);
            self.state = State::Unavailable;
            self.awaiting_registrations = 0;
            if let Some(request) = self.pending.take() {
                request.resolve_failure();
            }
        }
    }

    fn on_service_added(&mut self, service: Uuid, error: Option<String>) {
        if self.state != State::RegisteringServices {
            trace!(
                "discarding registration confirmation for {service} in state {:?}",
                self.state
            );
            return;
        }
        if let Some(error) = error {
            warn!("radio rejected service {service}: {error}");
            self.abort_attempt();
            return;
        }
        trace!("registered service {service}");
        self.awaiting_registrations = self.awaiting_registrations.saturating_sub(1);
        if self.awaiting_registrations == 0 {
            let service_uuids = self.service_uuids();
            debug!("all services registered, starting advertisement");
            self.radio.start_advertising(&service_uuids);
        }
    }

    fn on_advertising_started(&mut self, error: Option<String>) {
        if self.state != State::RegisteringServices {
            trace!(
                "discarding advertising-start confirmation in state {:?}",
                self.state
            );
            return;
        }
        match error {
            None => {
                debug!("started advertising");
                self.state = State::Advertising;
                if let Some(request) = self.pending.take() {
                    request.resolve_success();
                }
            }
            Some(error) => {
                warn!("failed to start advertising: {error}");
                self.abort_attempt();
            }
        }
    }

    /// A rejected attempt resolves the pending request with failure and
    /// returns to `Idle` so the caller can retry.
    fn abort_attempt(&mut self) {
        self.awaiting_registrations = 0;
        self.state = State::Idle;
        if let Some(request) = self.pending.take() {
            request.resolve_failure();
        }
    }

    fn service_uuids(&self) -> Vec<Uuid> {
        self.services
            .as_deref()
            .map(|services| services.iter().map(|service| service.uuid).collect())
            .unwrap_or_default()
    }
}

impl<R: RadioStack> Advertiser for RadioAdvertiser<R> {
    fn bind(&mut self, services: Arc<Vec<Service>>) {
        self.services = Some(services);
    }

    fn advertise(&mut self, request: AdvertiseRequest) {
        match self.state {
            State::Idle => {
                let Some(services) = self.services.clone() else {
                    warn!("advertise with no peripheral bound");
                    request.resolve_failure();
                    return;
                };
                if services.is_empty() {
                    warn!("advertise with an empty service set");
                    request.resolve_failure();
                    return;
                }
                debug!("adding services");
                self.pending = Some(request);
                self.awaiting_registrations = services.len();
                self.state = State::RegisteringServices;
                for service in services.iter() {
                    self.radio.add_service(&gatt::Service::from(service));
                }
            }
            State::Off => {
                // Only one request may be deferred; a second one is
                // rejected, never queued behind the first.
                if self.pending.is_some() {
                    debug!("request already deferred, rejecting");
                    request.resolve_failure();
                    return;
                }
                debug!("radio powering on, deferring advertise");
                self.pending = Some(request);
            }
            current => {
                debug!("unavailable for advertisement in state {:?}", current);
                request.resolve_failure();
            }
        }
    }

    fn is_advertising(&self) -> bool {
        self.radio.is_advertising()
    }

    /// Instructs the radio and returns to `Idle`. Does not cancel a request
    /// still mid-registration; stopping while not advertising is a no-op.
    fn stop_advertising(&mut self) {
        if self.state == State::Advertising {
            self.radio.stop_advertising();
            self.state = State::Idle;
        }
    }
}
