use crate::error::LendingError;
use crate::event;
use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{token, Address, Env};

pub fn read_treasury(e: &Env, token: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Treasury(token.clone()))
        .unwrap_or(0)
}

fn write_treasury(e: &Env, token: &Address, amount: i128) {
    let key = DataKey::Treasury(token.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Books `amount` of `token`, already held by the contract, as treasury.
pub fn credit_treasury(e: &Env, token: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let balance = read_treasury(e, token) + amount;
    write_treasury(e, token, balance);
    event::emit_treasury_credited(e, token, amount);
}

/// Pays out the whole treasury balance of `token` to `to`.
pub fn withdraw_treasury(e: &Env, token: &Address, to: &Address) -> Result<i128, LendingError> {
    let amount = read_treasury(e, token);
    if amount <= 0 {
        return Err(LendingError::NoWithdrawableAmount);
    }
    write_treasury(e, token, 0);
    token::Client::new(e, token).transfer(&e.current_contract_address(), to, &amount);
    log::info!("treasury withdrawal of {}", amount);
    event::emit_treasury_withdrawn(e, token, to, amount);
    Ok(amount)
}
