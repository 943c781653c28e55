use uuid::Uuid;

/// Power state reported by the radio session. Anything other than
/// [`PowerState::PoweredOn`] makes the session unusable until the radio
/// sends another update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Resetting,
    Unauthorized,
    Unsupported,
    Unknown,
}

impl PowerState {
    pub fn is_powered(&self) -> bool {
        matches!(self, PowerState::PoweredOn)
    }
}

/// Notifications delivered by a radio backend. All of them arrive on one
/// event channel and feed [`crate::advertiser::RadioAdvertiser::handle_event`].
#[derive(Debug, Clone)]
pub enum RadioEvent {
    DidUpdateState {
        state: PowerState,
    },
    DidAddService {
        service: Uuid,
        error: Option<String>,
    },
    DidStartAdvertising {
        error: Option<String>,
    },
}
