use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The key '{}' is already defined", String::from_utf8_lossy(.0))]
    AlreadyDefined(Vec<u8>),
    #[error("The key '{}' is not defined", String::from_utf8_lossy(.0))]
    Undefined(Vec<u8>),
}

impl Error {
    /// The bytes of the key the operation was attempted on.
    pub fn key(&self) -> &[u8] {
        match self {
            Error::AlreadyDefined(key) | Error::Undefined(key) => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
