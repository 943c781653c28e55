#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacteristicProperty {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributePermission {
    Readable,
    Writeable,
}
