use crate::storage_types::{DataKey, TokenId, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// One NFT held in escrow on behalf of a bundle token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BundleItem {
    pub collection: Address,
    pub token_id: TokenId,
}

pub fn read_items(env: &Env, bundle_id: TokenId) -> Vec<BundleItem> {
    env.storage()
        .persistent()
        .get(&DataKey::Items(bundle_id))
        .unwrap_or(Vec::new(env))
}

pub fn write_items(env: &Env, bundle_id: TokenId, items: &Vec<BundleItem>) {
    let key = DataKey::Items(bundle_id);
    env.storage().persistent().set(&key, items);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn remove_items(env: &Env, bundle_id: TokenId) {
    env.storage().persistent().remove(&DataKey::Items(bundle_id));
}
