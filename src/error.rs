use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// The caller supplied a string outside the printable ASCII range.
    UnencodableString,
    Unknown,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: {description}")]
pub struct Error {
    pub name: String,
    pub description: String,
    pub error_type: ErrorType,
}

impl Error {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        error_type: ErrorType,
    ) -> Self {
        Error {
            name: name.into(),
            description: description.into(),
            error_type,
        }
    }

    pub fn from_type(error_type: ErrorType) -> Self {
        let (name, description) = match error_type {
            ErrorType::UnencodableString => (
                "UnencodableString",
                "value is not representable as printable ASCII",
            ),
            ErrorType::Unknown => ("Unknown", "unknown error"),
        };
        Error::new(name, description, error_type)
    }
}
