//! The addressing strategy selected by the caller of the installer.
use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use casper_types::{bytesrepr, ApiError, Key};

use crate::error::Error;

/// Selector literal for hash addressing.
pub const DESTINATION_HASH: &str = "hash";
/// Selector literal for URef addressing.
pub const DESTINATION_UREF: &str = "uref";

/// Where the `delegate` entry point is stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Stored at an immutable hash address, discoverable by anyone.
    Hash,
    /// Stored behind an unforgeable reference, reachable only by its holders.
    URef,
}

impl Destination {
    /// Decodes a destination from the raw bytes of a serialized `String` argument.
    ///
    /// Bytes which are not exactly one serialized `String` yield [`ApiError::InvalidArgument`],
    /// and a well-formed string naming no known destination yields
    /// [`Error::UnknownDestination`].
    pub fn from_arg_bytes(bytes: Vec<u8>) -> Result<Self, ApiError> {
        let destination: String =
            bytesrepr::deserialize(bytes).map_err(|_| ApiError::InvalidArgument)?;
        destination.parse().map_err(ApiError::from)
    }

    /// Returns `true` if `key` has the variant this destination produces.
    pub fn accepts(&self, key: &Key) -> bool {
        match self {
            Destination::Hash => matches!(key, Key::Hash(_)),
            Destination::URef => matches!(key, Key::URef(_)),
        }
    }
}

impl FromStr for Destination {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            DESTINATION_HASH => Ok(Destination::Hash),
            DESTINATION_UREF => Ok(Destination::URef),
            _ => Err(Error::UnknownDestination),
        }
    }
}

impl Display for Destination {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Destination::Hash => formatter.write_str(DESTINATION_HASH),
            Destination::URef => formatter.write_str(DESTINATION_UREF),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use assert_matches::assert_matches;
    use casper_types::{account::AccountHash, bytesrepr::ToBytes, AccessRights, URef};

    use super::*;

    fn string_arg(value: &str) -> Vec<u8> {
        value.to_string().to_bytes().expect("should serialize")
    }

    #[test]
    fn should_parse_known_destinations() {
        assert_eq!("hash".parse(), Ok(Destination::Hash));
        assert_eq!("uref".parse(), Ok(Destination::URef));
    }

    #[test]
    fn should_display_as_selector_literal() {
        for destination in [Destination::Hash, Destination::URef] {
            assert_eq!(destination.to_string().parse(), Ok(destination));
        }
    }

    #[test]
    fn should_reject_near_misses() {
        for value in ["", "Hash", "UREF", "hash ", " uref", "hash\0", "contract"] {
            assert_eq!(
                value.parse::<Destination>(),
                Err(Error::UnknownDestination),
                "{:?} should not parse",
                value
            );
        }
    }

    #[test]
    fn should_decode_from_serialized_string() {
        assert_eq!(
            Destination::from_arg_bytes(string_arg("hash")),
            Ok(Destination::Hash)
        );
        assert_eq!(
            Destination::from_arg_bytes(string_arg("uref")),
            Ok(Destination::URef)
        );
    }

    #[test]
    fn should_report_invalid_argument_for_malformed_bytes() {
        assert_matches!(
            Destination::from_arg_bytes(Vec::new()),
            Err(ApiError::InvalidArgument)
        );
        // length prefix promises more bytes than are present
        assert_matches!(
            Destination::from_arg_bytes(vec![4, 0, 0, 0, b'h']),
            Err(ApiError::InvalidArgument)
        );
        // not utf-8
        assert_matches!(
            Destination::from_arg_bytes(vec![2, 0, 0, 0, 0xc3, 0x28]),
            Err(ApiError::InvalidArgument)
        );

        let mut trailing = string_arg("hash");
        trailing.push(0);
        assert_matches!(
            Destination::from_arg_bytes(trailing),
            Err(ApiError::InvalidArgument)
        );
    }

    #[test]
    fn should_report_unknown_destination_for_wellformed_strings() {
        assert_eq!(
            Destination::from_arg_bytes(string_arg("HASH")),
            Err(ApiError::User(Error::UnknownDestination as u16))
        );
    }

    #[test]
    fn should_accept_only_matching_key_variant() {
        let hash_key = Key::Hash([1; 32]);
        let uref_key = Key::URef(URef::new([2; 32], AccessRights::READ_ADD_WRITE));
        let account_key = Key::Account(AccountHash::new([3; 32]));

        assert!(Destination::Hash.accepts(&hash_key));
        assert!(!Destination::Hash.accepts(&uref_key));
        assert!(!Destination::Hash.accepts(&account_key));

        assert!(Destination::URef.accepts(&uref_key));
        assert!(!Destination::URef.accepts(&hash_key));
        assert!(!Destination::URef.accepts(&account_key));
    }
}
