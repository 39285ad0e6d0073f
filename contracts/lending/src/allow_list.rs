use crate::error::LendingError;
use crate::event;
use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListKind {
    PaymentToken,
    Collection,
    BundleContract,
}

pub fn is_allowed(e: &Env, kind: ListKind, addr: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Allowed(kind, addr.clone()))
        .unwrap_or(false)
}

/// Allowed addresses of `kind` in insertion order.
pub fn read_allow_list(e: &Env, kind: ListKind) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::AllowList(kind))
        .unwrap_or(Vec::new(e))
}

fn write_allow_list(e: &Env, kind: ListKind, list: &Vec<Address>) {
    let key = DataKey::AllowList(kind);
    e.storage().persistent().set(&key, list);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Enables or disables `addr`. Repeating the current state is rejected.
/// Removal keeps the relative order of the remaining entries.
pub fn set_allowed(e: &Env, kind: ListKind, addr: &Address, enabled: bool) -> Result<(), LendingError> {
    let current = is_allowed(e, kind.clone(), addr);
    if enabled && current {
        return Err(LendingError::AlreadyAdded);
    }
    if !enabled && !current {
        return Err(LendingError::AlreadyRemoved);
    }

    let mut list = read_allow_list(e, kind.clone());
    let flag_key = DataKey::Allowed(kind.clone(), addr.clone());
    if enabled {
        list.push_back(addr.clone());
        e.storage().persistent().set(&flag_key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&flag_key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        if let Some(pos) = list.first_index_of(addr) {
            list.remove(pos);
        }
        e.storage().persistent().remove(&flag_key);
    }
    write_allow_list(e, kind.clone(), &list);

    event::emit_allow_list_changed(e, kind, addr, enabled);
    Ok(())
}

/// Collections and bundle contracts are both valid fee / limit targets.
pub fn is_acceptable_target(e: &Env, target: &Address) -> bool {
    is_allowed(e, ListKind::Collection, target) || is_allowed(e, ListKind::BundleContract, target)
}
