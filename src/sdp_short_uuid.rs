use uuid::Uuid;

const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// Builds a full uuid from a 16 or 32 bit SDP short identifier on the
/// Bluetooth base uuid.
pub trait SdpShortUuid<T: Into<u32>> {
    fn from_sdp_short_uuid(uuid: T) -> Uuid {
        Uuid::from_u128(BLUETOOTH_BASE_UUID | ((uuid.into() as u128) << 96))
    }
}

impl SdpShortUuid<u16> for Uuid {}
impl SdpShortUuid<u32> for Uuid {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_uuid_lands_on_the_base_uuid() {
        let uuid = Uuid::from_sdp_short_uuid(0x2A3D_u16);
        assert_eq!(
            uuid.to_string(),
            "00002a3d-0000-1000-8000-00805f9b34fb"
        );
    }
}
