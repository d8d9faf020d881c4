use casper_types::Key;

/// Provides write access to the named keys of the calling account.
pub trait NamedKeyProvider {
    /// Binds `name` to `key`, replacing any previous binding.
    fn put_key(&mut self, name: &str, key: Key);
}
