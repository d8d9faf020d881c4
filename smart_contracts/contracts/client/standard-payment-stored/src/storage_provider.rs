use casper_types::{contracts::NamedKeys, Key};

/// Stores exported functions in global state.
///
/// Both methods return `None` when the host fails to produce an address. The caller checks the
/// variant of any returned [`Key`].
pub trait StorageProvider {
    /// Stores the function `name` at an immutable, hash-derived address.
    fn store_function_at_hash(&mut self, name: &str, named_keys: NamedKeys) -> Option<Key>;

    /// Stores the function `name` behind a newly created unforgeable reference.
    fn store_function(&mut self, name: &str, named_keys: NamedKeys) -> Option<Key>;
}
