use alloc::vec::Vec;

/// Provides access to the raw arguments of the current invocation.
pub trait ArgumentProvider {
    /// Returns the serialized bytes of the named argument, or `None` if it was not supplied.
    fn get_arg(&self, name: &str) -> Option<Vec<u8>>;
}
