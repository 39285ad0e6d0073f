use crate::storage_types::{DataKey, TokenId, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn read_approved(env: &Env, token_id: TokenId) -> Option<Address> {
    let key = DataKey::Approved(token_id);
    env.storage().persistent().get::<DataKey, Address>(&key)
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
    let key = DataKey::ApprovalForAll(owner, operator);
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&key)
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

/// True when `spender` may move `token_id` on behalf of `owner`.
pub fn is_authorized_spender(env: &Env, owner: &Address, spender: &Address, token_id: &TokenId) -> bool {
    spender == owner
        || read_approval_for_all(env, owner.clone(), spender.clone())
        || read_approved(env, token_id.clone()).as_ref() == Some(spender)
}
