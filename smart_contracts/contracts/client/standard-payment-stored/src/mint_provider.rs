use casper_types::{ApiError, URef, U512};

/// Moves tokens between purses.
pub trait MintProvider {
    /// Transfers `amount` from `source` to `target`.
    fn transfer_purse_to_purse(
        &mut self,
        source: URef,
        target: URef,
        amount: U512,
    ) -> Result<(), ApiError>;
}
