//! Bindings of the installer and the stored payment logic to the casper host.
use alloc::{string::ToString, vec, vec::Vec};

use casper_contract::{
    contract_api::{self, account, runtime, storage, system},
    ext_ffi,
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{
    api_error,
    contracts::NamedKeys,
    system::{handle_payment, standard_payment::ARG_AMOUNT},
    ApiError, CLType, EntryPoint, EntryPointAccess, EntryPointType, EntryPoints, Key, Parameter,
    RuntimeArgs, URef, U512,
};

use crate::{
    AccountProvider, ArgumentProvider, HandlePaymentProvider, MintProvider, NamedKeyProvider,
    StandardPayment, StandardPaymentStored, StorageProvider,
};

struct StandardPaymentStoredContract;

fn get_named_arg_size(name: &str) -> Option<usize> {
    let mut arg_size: usize = 0;
    let ret = unsafe {
        ext_ffi::casper_get_named_arg_size(
            name.as_bytes().as_ptr(),
            name.len(),
            &mut arg_size as *mut usize,
        )
    };
    match api_error::result_from(ret) {
        Ok(_) => Some(arg_size),
        Err(ApiError::MissingArgument) => None,
        Err(e) => runtime::revert(e),
    }
}

fn delegate_entry_points(name: &str) -> EntryPoints {
    let mut entry_points = EntryPoints::new();
    let entry_point = EntryPoint::new(
        name.to_string(),
        vec![Parameter::new(ARG_AMOUNT, CLType::U512)],
        CLType::Unit,
        EntryPointAccess::Public,
        EntryPointType::Session,
    );
    entry_points.add_entry_point(entry_point);
    entry_points
}

impl ArgumentProvider for StandardPaymentStoredContract {
    fn get_arg(&self, name: &str) -> Option<Vec<u8>> {
        let arg_size = get_named_arg_size(name)?;
        if arg_size == 0 {
            // Avoids allocation with 0 bytes and a call to get_named_arg
            return Some(Vec::new());
        }
        let data_non_null_ptr = contract_api::alloc_bytes(arg_size);
        let ret = unsafe {
            ext_ffi::casper_get_named_arg(
                name.as_bytes().as_ptr(),
                name.len(),
                data_non_null_ptr.as_ptr(),
                arg_size,
            )
        };
        let data = unsafe { Vec::from_raw_parts(data_non_null_ptr.as_ptr(), arg_size, arg_size) };
        api_error::result_from(ret).unwrap_or_revert();
        Some(data)
    }
}

impl StorageProvider for StandardPaymentStoredContract {
    fn store_function_at_hash(&mut self, name: &str, named_keys: NamedKeys) -> Option<Key> {
        let (contract_hash, _contract_version) =
            storage::new_contract(delegate_entry_points(name), Some(named_keys), None, None);
        Some(contract_hash.into())
    }

    fn store_function(&mut self, name: &str, named_keys: NamedKeys) -> Option<Key> {
        let (contract_hash, _contract_version) =
            storage::new_contract(delegate_entry_points(name), Some(named_keys), None, None);
        let contract_uref: URef = storage::new_uref(Key::from(contract_hash));
        Some(contract_uref.into())
    }
}

impl NamedKeyProvider for StandardPaymentStoredContract {
    fn put_key(&mut self, name: &str, key: Key) {
        runtime::put_key(name, key)
    }
}

impl StandardPaymentStored for StandardPaymentStoredContract {}

struct StandardPaymentContract;

impl AccountProvider for StandardPaymentContract {
    fn get_main_purse(&self) -> Result<URef, ApiError> {
        Ok(account::get_main_purse())
    }
}

impl MintProvider for StandardPaymentContract {
    fn transfer_purse_to_purse(
        &mut self,
        source: URef,
        target: URef,
        amount: U512,
    ) -> Result<(), ApiError> {
        system::transfer_from_purse_to_purse(source, target, amount, None)
    }
}

impl HandlePaymentProvider for StandardPaymentContract {
    fn get_payment_purse(&mut self) -> Result<URef, ApiError> {
        let handle_payment_pointer = system::get_handle_payment();
        let payment_purse = runtime::call_contract(
            handle_payment_pointer,
            handle_payment::METHOD_GET_PAYMENT_PURSE,
            RuntimeArgs::default(),
        );
        Ok(payment_purse)
    }
}

impl StandardPayment for StandardPaymentContract {}

#[no_mangle]
pub extern "C" fn delegate() {
    let amount: U512 = runtime::get_named_arg(ARG_AMOUNT);
    StandardPaymentContract.pay(amount).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn call() {
    StandardPaymentStoredContract.install().unwrap_or_revert();
}
