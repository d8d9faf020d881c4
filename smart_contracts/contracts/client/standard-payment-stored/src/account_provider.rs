use casper_types::{ApiError, URef};

/// Provides access to the purses of the calling account.
pub trait AccountProvider {
    /// Returns the main purse of the calling account.
    fn get_main_purse(&self) -> Result<URef, ApiError>;
}
