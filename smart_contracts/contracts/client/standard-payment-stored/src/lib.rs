//! Session code which stores the standard payment logic as a `delegate` entry point and publishes
//! its address under the `"standard_payment"` named key.
//!
//! The `"destination"` argument selects the addressing of the stored function:
//!
//! * `"hash"` stores it at an immutable hash address, discoverable by anyone,
//! * `"uref"` stores it behind an unforgeable reference held only by the caller.
//!
//! Any other value, or bytes which do not decode as a `String`, revert the deploy before anything
//! is written.
//!
//! The installer is written against the [`ArgumentProvider`], [`StorageProvider`] and
//! [`NamedKeyProvider`] traits, and the stored payment logic against [`AccountProvider`],
//! [`MintProvider`] and [`HandlePaymentProvider`]. On `wasm32` these are implemented over the casper
//! host and exported as the `call` and `delegate` entry points.
#![cfg_attr(target_arch = "wasm32", no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod account_provider;
mod argument_provider;
#[cfg(target_arch = "wasm32")]
mod contract;
mod destination;
mod error;
mod handle_payment_provider;
mod installer;
mod mint_provider;
mod named_key_provider;
mod standard_payment;
mod storage_provider;

pub use crate::{
    account_provider::AccountProvider,
    argument_provider::ArgumentProvider,
    destination::{Destination, DESTINATION_HASH, DESTINATION_UREF},
    error::Error,
    handle_payment_provider::HandlePaymentProvider,
    installer::StandardPaymentStored,
    mint_provider::MintProvider,
    named_key_provider::NamedKeyProvider,
    standard_payment::StandardPayment,
    storage_provider::StorageProvider,
};

/// Named key under which the address of the stored payment logic is published.
pub const CONTRACT_NAME: &str = "standard_payment";
/// Name of the stored entry point which runs the standard payment logic.
pub const ENTRY_POINT_DELEGATE: &str = "delegate";
/// Name of the argument selecting the [`Destination`].
pub const ARG_DESTINATION: &str = "destination";
