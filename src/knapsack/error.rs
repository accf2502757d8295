use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InstanceError {
    NonPositiveWeight(usize),
    NegativeValue(usize),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWeight(id) => {
                write!(f, "Item {} needs a finite weight greater than zero.", id)
            }
            Self::NegativeValue(id) => {
                write!(f, "Item {} needs a finite, non negative value.", id)
            }
        }
    }
}

impl Error for InstanceError {}

#[derive(Debug)]
pub enum ImportError {
    MissingFile(String),
    InvalidFormat(String),
    InvalidItem(InstanceError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(file) => write!(f, "Missing file: {}", file),
            Self::InvalidFormat(msg) => write!(f, "Invalid format on file: {}", msg),
            Self::InvalidItem(err) => write!(f, "Invalid item in file: {}", err),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidItem(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InstanceError> for ImportError {
    fn from(err: InstanceError) -> Self {
        Self::InvalidItem(err)
    }
}
