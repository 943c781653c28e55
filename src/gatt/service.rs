use super::characteristic::Characteristic;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Service {
    pub uuid: Uuid,
    pub primary: bool,
    pub characteristics: Vec<Characteristic>,
}

impl Service {
    pub fn new(uuid: Uuid, primary: bool, characteristics: Vec<Characteristic>) -> Self {
        Service {
            uuid,
            primary,
            characteristics,
        }
    }
}

impl From<&crate::model::Service> for Service {
    fn from(service: &crate::model::Service) -> Self {
        Service::new(
            service.uuid,
            service.primary,
            service
                .characteristics
                .iter()
                .map(Characteristic::from)
                .collect(),
        )
    }
}
