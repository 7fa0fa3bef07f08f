/// Validation failures at the public API boundary.
///
/// Decoding never produces one of these; malformed telegrams degrade to unknown
/// results instead.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid device id {0:?}: must be 6, 8 or 12 hex digits")]
    InvalidDeviceId(String),
    #[error("invalid eep {0:?}: must be of the form \"FF-FF-FF\"")]
    InvalidEep(String),
    #[error("{field} is too long: {actual} > {max} characters")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("no device has been taught with id {0}")]
    UnknownDevice(String),
    #[error("invalid hex telegram: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("invalid device list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
