//! Error handling on the casper platform.
use casper_types::ApiError;

/// Represents error conditions of the standard payment installer which have no counterpart in
/// [`ApiError`].
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The destination argument names neither hash nor URef addressing.
    UnknownDestination = 1,
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::User(error as u16)
    }
}
