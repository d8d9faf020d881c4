use casper_types::{ApiError, U512};

use crate::{AccountProvider, HandlePaymentProvider, MintProvider};

/// The payment logic run by the stored `delegate` entry point.
pub trait StandardPayment: AccountProvider + MintProvider + HandlePaymentProvider + Sized {
    /// Moves `amount` from the caller's main purse into the payment purse.
    fn pay(&mut self, amount: U512) -> Result<(), ApiError> {
        let main_purse = self.get_main_purse()?;
        let payment_purse = self.get_payment_purse()?;
        self.transfer_purse_to_purse(main_purse, payment_purse, amount)
            .map_err(|_| ApiError::Transfer)
    }
}
