use super::properties::{AttributePermission, CharacteristicProperty};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Characteristic {
    pub uuid: Uuid,
    pub properties: Vec<CharacteristicProperty>,
    pub permissions: Vec<AttributePermission>,
    pub value: Option<Vec<u8>>,
}

impl Characteristic {
    pub fn new(
        uuid: Uuid,
        properties: Vec<CharacteristicProperty>,
        permissions: Vec<AttributePermission>,
        value: Option<Vec<u8>>,
    ) -> Self {
        Characteristic {
            uuid,
            properties,
            permissions,
            value,
        }
    }
}

/// The writable flag expands into the matching property/permission pair.
impl From<&crate::model::Characteristic> for Characteristic {
    fn from(characteristic: &crate::model::Characteristic) -> Self {
        let (properties, permissions) = if characteristic.writable {
            (
                vec![CharacteristicProperty::Write],
                vec![AttributePermission::Writeable],
            )
        } else {
            (
                vec![CharacteristicProperty::Read],
                vec![AttributePermission::Readable],
            )
        };
        Characteristic::new(
            characteristic.uuid,
            properties,
            permissions,
            Some(characteristic.value.clone()),
        )
    }
}
