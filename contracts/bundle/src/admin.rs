use crate::error::BundleError;
use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn has_administrator(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn read_administrator(e: &Env) -> Result<Address, BundleError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(BundleError::NotInitialized)
}

pub fn write_administrator(e: &Env, id: &Address) {
    e.storage().instance().set(&DataKey::Admin, id);
}

/// Returns the next bundle token id. Ids start at 1.
pub fn get_and_increase_bundle_id(e: &Env) -> u32 {
    let prev: u32 = e.storage().instance().get(&DataKey::BundleId).unwrap_or(0);
    e.storage().instance().set(&DataKey::BundleId, &(prev + 1));
    prev + 1
}
