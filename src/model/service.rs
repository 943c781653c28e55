use super::characteristic::Characteristic;
use uuid::Uuid;

/// A named group of characteristics advertised together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub uuid: Uuid,
    pub characteristics: Vec<Characteristic>,
    pub primary: bool,
}

impl Service {
    pub const DEFAULT_UUID: Uuid = Uuid::from_u128(0xD0CBD57E_68FA_4F7A_9B45_F38F40FC08D8);

    /// Pure constructor; no validation beyond structure.
    pub fn for_characteristics(
        characteristics: Vec<Characteristic>,
        uuid: Uuid,
        primary: bool,
    ) -> Self {
        Service {
            uuid,
            characteristics,
            primary,
        }
    }
}
