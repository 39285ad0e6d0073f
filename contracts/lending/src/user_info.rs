use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env, Vec};

fn read_ids(e: &Env, key: &DataKey) -> Vec<u64> {
    e.storage().persistent().get(key).unwrap_or(Vec::new(e))
}

fn write_ids(e: &Env, key: &DataKey, ids: &Vec<u64>) {
    if ids.is_empty() {
        e.storage().persistent().remove(key);
        return;
    }
    e.storage().persistent().set(key, ids);
    e.storage()
        .persistent()
        .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

fn push_id(e: &Env, key: DataKey, id: u64) {
    let mut ids = read_ids(e, &key);
    if !ids.contains(id) {
        ids.push_back(id);
        write_ids(e, &key, &ids);
    }
}

fn remove_id(e: &Env, key: DataKey, id: u64) {
    let mut ids = read_ids(e, &key);
    if let Some(pos) = ids.first_index_of(id) {
        ids.remove(pos);
        write_ids(e, &key, &ids);
    }
}

/// Lender-side positions of `owner`, whatever their state.
pub fn read_user_deposits(e: &Env, owner: &Address) -> Vec<u64> {
    read_ids(e, &DataKey::UserDeposits(owner.clone()))
}

pub fn add_user_deposit(e: &Env, owner: &Address, id: u64) {
    push_id(e, DataKey::UserDeposits(owner.clone()), id);
}

pub fn remove_user_deposit(e: &Env, owner: &Address, id: u64) {
    remove_id(e, DataKey::UserDeposits(owner.clone()), id);
}

/// Receipt positions held by `borrower`.
pub fn read_user_receipts(e: &Env, borrower: &Address) -> Vec<u64> {
    read_ids(e, &DataKey::UserReceipts(borrower.clone()))
}

pub fn add_user_receipt(e: &Env, borrower: &Address, id: u64) {
    push_id(e, DataKey::UserReceipts(borrower.clone()), id);
}

pub fn remove_user_receipt(e: &Env, borrower: &Address, id: u64) {
    remove_id(e, DataKey::UserReceipts(borrower.clone()), id);
}

/// Positions currently open for borrowing.
pub fn read_listed(e: &Env) -> Vec<u64> {
    read_ids(e, &DataKey::Listed)
}

pub fn add_listed(e: &Env, id: u64) {
    push_id(e, DataKey::Listed, id);
}

pub fn remove_listed(e: &Env, id: u64) {
    remove_id(e, DataKey::Listed, id);
}
