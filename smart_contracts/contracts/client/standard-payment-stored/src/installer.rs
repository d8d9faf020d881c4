use casper_types::{contracts::NamedKeys, ApiError, Key};
use tracing::{debug, warn};

use crate::{
    ArgumentProvider, Destination, NamedKeyProvider, StorageProvider, ARG_DESTINATION,
    CONTRACT_NAME, ENTRY_POINT_DELEGATE,
};

/// Installs the `delegate` entry point and publishes its address under [`CONTRACT_NAME`].
pub trait StandardPaymentStored:
    ArgumentProvider + StorageProvider + NamedKeyProvider + Sized
{
    /// Reads the destination argument, stores `delegate` accordingly and binds the resulting key
    /// in the caller's named keys.
    ///
    /// Nothing is written to the named keys unless the whole sequence succeeds.
    fn install(&mut self) -> Result<Key, ApiError> {
        let destination_bytes = self
            .get_arg(ARG_DESTINATION)
            .ok_or(ApiError::MissingArgument)?;

        let destination = Destination::from_arg_bytes(destination_bytes).map_err(|error| {
            warn!(?error, "rejected destination argument");
            error
        })?;

        let key = self.store_delegate(destination)?;
        self.put_key(CONTRACT_NAME, key);
        debug!(%destination, ?key, "installed standard payment");
        Ok(key)
    }

    /// Stores `delegate` with no named keys at the given destination.
    fn store_delegate(&mut self, destination: Destination) -> Result<Key, ApiError> {
        let named_keys = NamedKeys::new();
        let maybe_key = match destination {
            Destination::Hash => self.store_function_at_hash(ENTRY_POINT_DELEGATE, named_keys),
            Destination::URef => self.store_function(ENTRY_POINT_DELEGATE, named_keys),
        };

        match maybe_key {
            Some(key) if destination.accepts(&key) => Ok(key),
            other => {
                warn!(%destination, key = ?other, "host returned unexpected key variant");
                Err(ApiError::UnexpectedKeyVariant)
            }
        }
    }
}
