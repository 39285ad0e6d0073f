use crate::storage_types::{DataKey, TokenId, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn read_balance(env: &Env, addr: Address) -> u64 {
    let key = DataKey::Balance(addr);
    env.storage()
        .persistent()
        .get::<DataKey, u64>(&key)
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, addr: Address, amount: u64) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn read_owner(env: &Env, token_id: TokenId) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn write_owner(env: &Env, token_id: TokenId, owner: Option<Address>) {
    let key = DataKey::Owner(token_id);
    match owner {
        Some(addr) => {
            env.storage().persistent().set(&key, &addr);
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        }
        None => env.storage().persistent().remove(&key),
    }
}

pub fn read_approved(env: &Env, token_id: TokenId) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: TokenId, approved: Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(addr) => {
            env.storage().persistent().set(&key, &addr);
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        }
        None => env.storage().persistent().remove(&key),
    }
}

pub fn read_approval_for_all(env: &Env, owner: Address, operator: Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::ApprovalForAll(owner, operator))
        .unwrap_or(false)
}

pub fn write_approval_for_all(env: &Env, owner: Address, operator: Address, approved: bool) {
    let key = DataKey::ApprovalForAll(owner, operator);
    if approved {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Moves a bundle token and clears its single-token approval.
pub fn move_token(env: &Env, from: &Address, to: &Address, token_id: TokenId) {
    write_balance(env, from.clone(), read_balance(env, from.clone()) - 1);
    write_balance(env, to.clone(), read_balance(env, to.clone()) + 1);
    write_approved(env, token_id.clone(), None);
    write_owner(env, token_id, Some(to.clone()));
}
