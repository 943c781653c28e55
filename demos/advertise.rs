use ble_advertiser::{
    AdvertiseRequest, Characteristic, ChannelRadio, Peripheral, PowerState, RadioAdvertiser,
    RadioCommand, RadioEvent, Service,
};

const ADVERTISED_STRING: &str = "ABC-123";

fn main() {
    if let Err(err) = pretty_env_logger::try_init() {
        eprintln!("WARNING: failed to initialize logging framework: {}", err);
    }

    let (radio, mut commands) = ChannelRadio::new();
    let mut peripheral = Peripheral::advertise_string(
        ADVERTISED_STRING,
        Characteristic::DEFAULT_UUID,
        Service::DEFAULT_UUID,
        RadioAdvertiser::new(radio),
        AdvertiseRequest::new(|| println!("Advertising service"))
            .or_else(|| println!("Failed to advertise service")),
    )
    .expect("advertised string is printable ASCII");

    // Scripted backend standing in for a real radio session: report power
    // readiness, then confirm each command the state machine issues.
    peripheral
        .advertiser_mut()
        .handle_event(RadioEvent::DidUpdateState {
            state: PowerState::PoweredOn,
        });
    while let Ok(command) = commands.try_recv() {
        match command {
            RadioCommand::AddService { service } => {
                peripheral
                    .advertiser_mut()
                    .handle_event(RadioEvent::DidAddService {
                        service: service.uuid,
                        error: None,
                    });
            }
            RadioCommand::StartAdvertising { service_uuids } => {
                println!("Broadcasting services {:?}", service_uuids);
                peripheral
                    .advertiser_mut()
                    .handle_event(RadioEvent::DidStartAdvertising { error: None });
            }
            RadioCommand::StopAdvertising => println!("Broadcast stopped"),
        }
    }

    println!("Advertising: {}", peripheral.is_advertising());
    peripheral.stop_advertising();
    println!("Advertising: {}", peripheral.is_advertising());
}
