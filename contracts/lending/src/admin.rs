use crate::error::LendingError;
use crate::storage_types::*;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token bought back with fee proceeds.
    pub reward_token: Address,
    /// Intermediate hop for buyback swaps.
    pub native_token: Address,
    pub router: Address,
    /// Sink for burned reward tokens and winnings.
    pub burn_address: Address,
}

/// Inclusive count bounds, used for bundle sizes and deposit limits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmountRange {
    pub min_amount: u32,
    pub max_amount: u32,
}

impl AmountRange {
    pub fn validate(&self) -> Result<(), LendingError> {
        if self.min_amount == 0 || self.min_amount > self.max_amount {
            return Err(LendingError::InvalidConfigAmount);
        }
        Ok(())
    }

    pub fn contains(&self, count: u32) -> bool {
        count >= self.min_amount && count <= self.max_amount
    }
}

pub fn has_administrator(e: &Env) -> bool {
    let key = DataKey::Admin;
    e.storage().instance().has(&key)
}

pub fn read_administrator(e: &Env) -> Result<Address, LendingError> {
    let key = DataKey::Admin;
    e.storage()
        .instance()
        .get(&key)
        .ok_or(LendingError::NotInitialized)
}

pub fn write_administrator(env: &Env, id: &Address) {
    let key = DataKey::Admin;
    env.storage().instance().set(&key, id);
}

/// Fails unless `caller` is the stored administrator and has signed.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), LendingError> {
    let admin = read_administrator(e)?;
    if *caller != admin {
        return Err(LendingError::Unauthorized);
    }
    caller.require_auth();
    bump_instance(e);
    Ok(())
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn write_config(e: &Env, config: &Config) {
    let key = DataKey::Config;
    e.storage().instance().set(&key, config);
}

pub fn read_config(e: &Env) -> Result<Config, LendingError> {
    let key = DataKey::Config;
    e.storage()
        .instance()
        .get(&key)
        .ok_or(LendingError::NotInitialized)
}

pub fn read_bundle_mode(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::BundleMode)
        .unwrap_or(false)
}

pub fn write_bundle_mode(e: &Env, enabled: bool) {
    e.storage().instance().set(&DataKey::BundleMode, &enabled);
}

pub fn read_bundle_amount(e: &Env) -> AmountRange {
    e.storage()
        .instance()
        .get(&DataKey::BundleAmount)
        .unwrap_or(AmountRange {
            min_amount: 1,
            max_amount: u32::MAX,
        })
}

pub fn write_bundle_amount(e: &Env, range: &AmountRange) {
    e.storage().instance().set(&DataKey::BundleAmount, range);
}

/// Fails unless merged bundles are enabled and `count` fits the bundle bounds.
pub fn check_bundle_size(e: &Env, count: u32) -> Result<(), LendingError> {
    if !read_bundle_mode(e) {
        return Err(LendingError::BundleModeDisabled);
    }
    if !read_bundle_amount(e).contains(count) {
        return Err(LendingError::InvalidDepositAmount);
    }
    Ok(())
}

pub fn read_deposit_limit(e: &Env, target: &Address) -> Option<AmountRange> {
    let key = DataKey::DepositLimit(target.clone());
    e.storage().persistent().get(&key)
}

pub fn write_deposit_limit(e: &Env, target: &Address, range: &AmountRange) {
    let key = DataKey::DepositLimit(target.clone());
    e.storage().persistent().set(&key, range);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Fails when `count` tokens of `target` in one deposit fall outside its limit.
pub fn check_deposit_limit(e: &Env, target: &Address, count: u32) -> Result<(), LendingError> {
    match read_deposit_limit(e, target) {
        Some(range) if !range.contains(count) => Err(LendingError::DepositLimitExceeded),
        _ => Ok(()),
    }
}
