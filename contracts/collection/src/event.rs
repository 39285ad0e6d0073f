use crate::storage_types::TokenId;
use soroban_sdk::{symbol_short, Address, Env};

/// Emits an event when a token is minted.
pub fn emit_mint(env: &Env, to: &Address, token_id: &TokenId) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), token_id.0);
}

/// Emits an event when a token changes hands.
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: &TokenId) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        token_id.0,
    );
}

/// Emits an event when a single-token approval is set or cleared.
pub fn emit_approve(env: &Env, owner: &Address, token_id: &TokenId) {
    env.events()
        .publish((symbol_short!("approve"), owner.clone()), token_id.0);
}

pub fn emit_approval_for_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish(
        (symbol_short!("appr_all"), owner.clone(), operator.clone()),
        approved,
    );
}

pub fn emit_burn(env: &Env, from: &Address, token_id: &TokenId) {
    env.events()
        .publish((symbol_short!("burn"), from.clone()), token_id.0);
}
