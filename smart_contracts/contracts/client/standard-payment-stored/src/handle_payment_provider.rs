use casper_types::{ApiError, URef};

/// Provides access to the handle payment system contract.
pub trait HandlePaymentProvider {
    /// Returns the purse into which payment for the current deploy is collected.
    fn get_payment_purse(&mut self) -> Result<URef, ApiError>;
}
