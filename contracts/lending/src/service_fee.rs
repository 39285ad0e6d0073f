use crate::allow_list::{is_acceptable_target, is_allowed, ListKind};
use crate::error::LendingError;
use crate::event;
use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, RATE_DENOMINATOR};
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceFee {
    pub id: u32,
    pub payment_token: Address,
    pub fee_amount: i128,
    pub active: bool,
    pub label: String,
    /// Share of the bought-back reward that is burned, out of 1000.
    pub burn_percent: u32,
}

fn get_and_increase_service_fee_id(e: &Env) -> u32 {
    let prev: u32 = e.storage().instance().get(&DataKey::ServiceFeeId).unwrap_or(0);
    e.storage().instance().set(&DataKey::ServiceFeeId, &(prev + 1));
    prev + 1
}

/// Id the next created fee will receive.
pub fn next_service_fee_id(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::ServiceFeeId)
        .unwrap_or(0)
        + 1
}

pub fn read_service_fee(e: &Env, id: u32) -> Result<ServiceFee, LendingError> {
    e.storage()
        .persistent()
        .get(&DataKey::ServiceFee(id))
        .ok_or(LendingError::InvalidFeeId)
}

fn write_service_fee(e: &Env, fee: &ServiceFee) {
    let key = DataKey::ServiceFee(fee.id);
    e.storage().persistent().set(&key, fee);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn read_linked_fee(e: &Env, target: &Address) -> Option<u32> {
    e.storage()
        .persistent()
        .get(&DataKey::LinkedFee(target.clone()))
}

pub fn create_service_fee(
    e: &Env,
    payment_token: Address,
    fee_amount: i128,
    active: bool,
    label: String,
    burn_percent: u32,
) -> Result<u32, LendingError> {
    if !is_allowed(e, ListKind::PaymentToken, &payment_token) {
        return Err(LendingError::TokenNotAllowed);
    }
    if burn_percent > RATE_DENOMINATOR {
        return Err(LendingError::InvalidBurnPercent);
    }
    if fee_amount <= 0 {
        return Err(LendingError::InvalidFeeAmount);
    }

    let fee = ServiceFee {
        id: get_and_increase_service_fee_id(e),
        payment_token,
        fee_amount,
        active,
        label,
        burn_percent,
    };
    write_service_fee(e, &fee);
    event::emit_service_fee_created(e, &fee);
    Ok(fee.id)
}

pub fn set_service_fee_active(e: &Env, id: u32, active: bool) -> Result<(), LendingError> {
    let mut fee = read_service_fee(e, id)?;
    fee.active = active;
    write_service_fee(e, &fee);
    event::emit_service_fee_active(e, id, active);
    Ok(())
}

pub fn link_service_fee(e: &Env, id: u32, target: &Address) -> Result<(), LendingError> {
    read_service_fee(e, id)?;
    if !is_acceptable_target(e, target) {
        return Err(LendingError::CollectionNotAcceptable);
    }
    if read_linked_fee(e, target).is_some() {
        return Err(LendingError::AlreadyLinked);
    }

    let key = DataKey::LinkedFee(target.clone());
    e.storage().persistent().set(&key, &id);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    event::emit_service_fee_linked(e, id, target, true);
    Ok(())
}

pub fn unlink_service_fee(e: &Env, target: &Address) -> Result<(), LendingError> {
    let id = read_linked_fee(e, target).ok_or(LendingError::NotLinked)?;
    e.storage()
        .persistent()
        .remove(&DataKey::LinkedFee(target.clone()));
    event::emit_service_fee_linked(e, id, target, false);
    Ok(())
}

/// Fee charged to borrowers of cards from `target`, if one is linked and active.
pub fn linked_active_fee(e: &Env, target: &Address) -> Result<Option<ServiceFee>, LendingError> {
    match read_linked_fee(e, target) {
        Some(id) => {
            let fee = read_service_fee(e, id)?;
            Ok(if fee.active { Some(fee) } else { None })
        }
        None => Ok(None),
    }
}
