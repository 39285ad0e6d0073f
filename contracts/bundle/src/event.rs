use crate::storage_types::TokenId;
use soroban_sdk::{symbol_short, Address, Env};

/// Emits an event when cards are wrapped into a new bundle token.
pub fn emit_bundle_created(env: &Env, owner: &Address, bundle_id: &TokenId, items: u32) {
    env.events()
        .publish((symbol_short!("bundle"), symbol_short!("create"), owner.clone()), (bundle_id.0, items));
}

/// Emits an event when a bundle token is unwrapped and burned.
pub fn emit_bundle_released(env: &Env, owner: &Address, bundle_id: &TokenId) {
    env.events()
        .publish((symbol_short!("bundle"), symbol_short!("release"), owner.clone()), bundle_id.0);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, bundle_id: &TokenId) {
    env.events()
        .publish((symbol_short!("transfer"), from.clone(), to.clone()), bundle_id.0);
}
