use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ble_advertiser::{
    AdvertiseRequest, Characteristic, ChannelRadio, Peripheral, PowerState, RadioAdvertiser,
    RadioCommand, RadioEvent, Service, SimulatedAdvertiser, State,
};
use tokio::sync::mpsc;
use uuid::Uuid;

fn radio_backed_peripheral(
    services: Vec<Service>,
) -> (
    Peripheral<RadioAdvertiser<ChannelRadio>>,
    mpsc::UnboundedReceiver<RadioCommand>,
) {
    let (radio, commands) = ChannelRadio::new();
    let peripheral = Peripheral::for_services(services, RadioAdvertiser::new(radio));
    (peripheral, commands)
}

fn counting_request(hits: &Arc<AtomicUsize>, misses: &Arc<AtomicUsize>) -> AdvertiseRequest {
    let hits = Arc::clone(hits);
    let misses = Arc::clone(misses);
    AdvertiseRequest::new(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    })
    .or_else(move || {
        misses.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn single_service_peripheral_advertises_end_to_end() {
    let service_uuid = Uuid::from_u128(0x51);
    let characteristic_uuid = Uuid::from_u128(0xC1);
    let (mut peripheral, mut commands) = radio_backed_peripheral(vec![
        Service::for_characteristics(
            vec![Characteristic::for_string("ABC-123", characteristic_uuid).unwrap()],
            service_uuid,
            true,
        ),
    ]);

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidUpdateState {
            state: PowerState::PoweredOn,
        });

    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    peripheral.advertise(counting_request(&hits, &misses));
    assert_eq!(peripheral.advertiser().state(), State::RegisteringServices);

    // The registration command carries the radio-native mapping of the
    // read-only string characteristic.
    match commands.try_recv().unwrap() {
        RadioCommand::AddService { service } => {
            assert_eq!(service.uuid, service_uuid);
            assert!(service.primary);
            assert_eq!(service.characteristics.len(), 1);
            assert_eq!(
                service.characteristics[0].value,
                Some(b"ABC-123".to_vec())
            );
        }
        other => panic!("expected AddService, got {other:?}"),
    }

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidAddService {
            service: service_uuid,
            error: None,
        });
    match commands.try_recv().unwrap() {
        RadioCommand::StartAdvertising { service_uuids } => {
            assert_eq!(service_uuids, vec![service_uuid]);
        }
        other => panic!("expected StartAdvertising, got {other:?}"),
    }

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidStartAdvertising { error: None });

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(misses.load(Ordering::SeqCst), 0);
    assert_eq!(peripheral.advertiser().state(), State::Advertising);
    assert!(peripheral.is_advertising());
}

#[test]
fn request_before_readiness_is_deferred_until_the_power_event() {
    let service_uuid = Uuid::from_u128(0x52);
    let (mut peripheral, mut commands) = radio_backed_peripheral(vec![
        Service::for_characteristics(
            vec![Characteristic::for_string("HELLO", Uuid::from_u128(0xC2)).unwrap()],
            service_uuid,
            true,
        ),
    ]);

    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    peripheral.advertise(counting_request(&hits, &misses));

    // Deferred: no resolution, no radio traffic.
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(misses.load(Ordering::SeqCst), 0);
    assert!(commands.try_recv().is_err());

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidUpdateState {
            state: PowerState::PoweredOn,
        });
    assert!(matches!(
        commands.try_recv().unwrap(),
        RadioCommand::AddService { .. }
    ));

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidAddService {
            service: service_uuid,
            error: None,
        });
    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidStartAdvertising { error: None });
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn unavailable_radio_rejects_without_any_registration() {
    let (mut peripheral, mut commands) = radio_backed_peripheral(vec![
        Service::for_characteristics(
            vec![Characteristic::for_string("ABC-123", Uuid::from_u128(0xC3)).unwrap()],
            Uuid::from_u128(0x53),
            true,
        ),
    ]);

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidUpdateState {
            state: PowerState::Unsupported,
        });

    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    peripheral.advertise(counting_request(&hits, &misses));

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(misses.load(Ordering::SeqCst), 1);
    assert!(commands.try_recv().is_err());
}

#[test]
fn second_call_fails_fast_and_leaves_the_first_untouched() {
    let service_uuid = Uuid::from_u128(0x54);
    let (mut peripheral, _commands) = radio_backed_peripheral(vec![
        Service::for_characteristics(
            vec![Characteristic::for_string("HELLO", Uuid::from_u128(0xC4)).unwrap()],
            service_uuid,
            true,
        ),
    ]);
    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidUpdateState {
            state: PowerState::PoweredOn,
        });

    let hits = Arc::new(AtomicUsize::new(0));
    let misses = Arc::new(AtomicUsize::new(0));
    peripheral.advertise(counting_request(&hits, &misses));

    let second_hits = Arc::new(AtomicUsize::new(0));
    let second_misses = Arc::new(AtomicUsize::new(0));
    peripheral.advertise(counting_request(&second_hits, &second_misses));
    assert_eq!(second_misses.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 0);

    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidAddService {
            service: service_uuid,
            error: None,
        });
    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidStartAdvertising { error: None });
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(misses.load(Ordering::SeqCst), 0);
}

#[test]
fn stop_when_not_advertising_is_silent() {
    let (mut peripheral, mut commands) = radio_backed_peripheral(vec![
        Service::for_characteristics(
            vec![Characteristic::for_string("HELLO", Uuid::from_u128(0xC5)).unwrap()],
            Uuid::from_u128(0x55),
            true,
        ),
    ]);
    peripheral.stop_advertising();
    assert!(!peripheral.is_advertising());
    assert!(commands.try_recv().is_err());
}

#[test]
fn peripherals_are_fully_independent() {
    let service = Service::for_characteristics(
        vec![Characteristic::for_string("HELLO", Uuid::from_u128(0xC6)).unwrap()],
        Uuid::from_u128(0x56),
        true,
    );
    let mut first = Peripheral::for_services(vec![service.clone()], SimulatedAdvertiser::new());
    let second = Peripheral::for_services(vec![service], SimulatedAdvertiser::new());

    first.advertise(AdvertiseRequest::new(|| {}));
    assert!(first.is_advertising());
    assert!(!second.is_advertising());
}
