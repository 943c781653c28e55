use super::RadioStack;
use crate::gatt;
use log::warn;
use tokio::sync::mpsc;
use uuid::Uuid;

/// One instruction to the radio session.
#[derive(Debug, Clone)]
pub enum RadioCommand {
    AddService { service: gatt::Service },
    StartAdvertising { service_uuids: Vec<Uuid> },
    StopAdvertising,
}

/// A [`RadioStack`] that forwards every command over an mpsc channel. A
/// platform backend drains the receiver, drives its session, and pushes
/// [`crate::gatt::radio_event::RadioEvent`]s back; tests script the
/// receiver directly.
#[derive(Debug)]
pub struct ChannelRadio {
    commands: mpsc::UnboundedSender<RadioCommand>,
    advertising: bool,
}

impl ChannelRadio {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RadioCommand>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        (
            ChannelRadio {
                commands,
                advertising: false,
            },
            receiver,
        )
    }

    fn send(&self, command: RadioCommand) {
        // A closed channel means the backend is gone; the confirmation will
        // simply never arrive, consistent with the no-timeout contract.
        if self.commands.send(command).is_err() {
            warn!("radio command dropped, backend channel closed");
        }
    }
}

impl RadioStack for ChannelRadio {
    fn add_service(&mut self, service: &gatt::Service) {
        self.send(RadioCommand::AddService {
            service: service.clone(),
        });
    }

    fn start_advertising(&mut self, service_uuids: &[Uuid]) {
        self.advertising = true;
        self.send(RadioCommand::StartAdvertising {
            service_uuids: service_uuids.to_vec(),
        });
    }

    fn stop_advertising(&mut self) {
        self.advertising = false;
        self.send(RadioCommand::StopAdvertising);
    }

    /// Reflects the last instruction issued, not a confirmed session query;
    /// only the backend behind the channel knows the live session state.
    fn is_advertising(&self) -> bool {
        self.advertising
    }
}
