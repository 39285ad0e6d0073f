use crate::admin::{read_config, Config};
use crate::allow_list::{is_allowed, ListKind};
use crate::error::LendingError;
use crate::event;
use crate::external::RouterClient;
use crate::storage_types::{
    DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, RATE_DENOMINATOR, SWAP_DEADLINE_SECS,
};
use crate::token_interaction::{authorize_router_pull, pay};
use crate::treasury::credit_treasury;
use soroban_sdk::{contracttype, token, vec, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Buyback {
    pub rate: u32,
    pub enabled: bool,
}

/// Outcome of routing one fee payment.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    /// Portion of the fee sent through the buyback swap.
    pub buyback_amount: i128,
    /// Reward tokens obtained for `buyback_amount`.
    pub reward_amount: i128,
    pub burn_amount: i128,
    /// Fee-token amount kept by the treasury.
    pub treasury_amount: i128,
    /// Reward-token amount kept by the treasury.
    pub treasury_reward: i128,
}

/// `amount * rate / 1000`, truncated.
pub fn apply_rate(amount: i128, rate: u32) -> Result<i128, LendingError> {
    amount
        .checked_mul(rate as i128)
        .map(|v| v / RATE_DENOMINATOR as i128)
        .ok_or(LendingError::InvalidAmount)
}

pub fn read_buyback(e: &Env, token: &Address) -> Option<Buyback> {
    e.storage()
        .persistent()
        .get(&DataKey::Buyback(token.clone()))
}

fn write_buyback(e: &Env, token: &Address, buyback: &Buyback) {
    let key = DataKey::Buyback(token.clone());
    e.storage().persistent().set(&key, buyback);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn set_buyback_fee(e: &Env, token: &Address, rate: u32) -> Result<(), LendingError> {
    if !is_allowed(e, ListKind::PaymentToken, token) {
        return Err(LendingError::TokenNotAllowed);
    }
    if rate == 0 || rate > RATE_DENOMINATOR {
        return Err(LendingError::InvalidRate);
    }
    let enabled = read_buyback(e, token).map(|b| b.enabled).unwrap_or(false);
    write_buyback(e, token, &Buyback { rate, enabled });
    event::emit_buyback_config(e, token, rate, enabled);
    Ok(())
}

pub fn enable_buyback(e: &Env, token: &Address, enabled: bool) -> Result<(), LendingError> {
    if !is_allowed(e, ListKind::PaymentToken, token) {
        return Err(LendingError::TokenNotAllowed);
    }
    let mut buyback = match read_buyback(e, token) {
        Some(b) if b.rate > 0 => b,
        _ => return Err(LendingError::BuybackRateNotSet),
    };
    buyback.enabled = enabled;
    write_buyback(e, token, &buyback);
    event::emit_buyback_config(e, token, buyback.rate, enabled);
    Ok(())
}

fn swap_path(e: &Env, config: &Config, token: &Address) -> Vec<Address> {
    if *token == config.native_token {
        vec![e, config.native_token.clone(), config.reward_token.clone()]
    } else {
        vec![
            e,
            token.clone(),
            config.native_token.clone(),
            config.reward_token.clone(),
        ]
    }
}

/// Swaps `amount_in` of `token` into the reward token and returns the
/// amount received. Any router failure or shortfall against the quote is
/// `SwapFailed`.
fn swap_to_reward(e: &Env, config: &Config, token: &Address, amount_in: i128) -> Result<i128, LendingError> {
    let path = swap_path(e, config, token);
    let router = RouterClient::new(e, &config.router);

    let amount_out_min = match router.try_get_amounts_out(&amount_in, &path) {
        Ok(Ok(amounts)) => amounts.last().unwrap_or(0),
        _ => return Err(LendingError::SwapFailed),
    };
    if amount_out_min <= 0 {
        return Err(LendingError::SwapFailed);
    }
    let pair = match router.try_router_pair_for(&path.get_unchecked(0), &path.get_unchecked(1)) {
        Ok(Ok(pair)) => pair,
        _ => return Err(LendingError::SwapFailed),
    };

    let this = e.current_contract_address();
    let reward = token::Client::new(e, &config.reward_token);
    let before = reward.balance(&this);
    authorize_router_pull(e, token, &pair, amount_in);
    let deadline = e.ledger().timestamp() + SWAP_DEADLINE_SECS;
    match router.try_swap_exact_tokens_for_tokens(&amount_in, &amount_out_min, &path, &this, &deadline) {
        Ok(Ok(_)) => {}
        _ => return Err(LendingError::SwapFailed),
    }
    let received = reward.balance(&this) - before;
    if received < amount_out_min {
        return Err(LendingError::SwapFailed);
    }
    Ok(received)
}

/// Routes `amount` of `token`, already held by the contract, into buyback
/// and treasury. Nothing is burned or credited unless the swap succeeded.
pub fn take_fee(e: &Env, token: &Address, amount: i128, burn_percent: u32) -> Result<FeeSplit, LendingError> {
    if amount <= 0 {
        return Ok(FeeSplit::default());
    }
    let config = read_config(e)?;

    let buyback_amount = match read_buyback(e, token) {
        Some(b) if b.enabled => apply_rate(amount, b.rate)?,
        _ => 0,
    };
    let reward_amount = if buyback_amount == 0 {
        0
    } else if *token == config.reward_token {
        buyback_amount
    } else {
        swap_to_reward(e, &config, token, buyback_amount)?
    };
    let burn_amount = apply_rate(reward_amount, burn_percent)?;

    let split = FeeSplit {
        buyback_amount,
        reward_amount,
        burn_amount,
        treasury_amount: amount - buyback_amount,
        treasury_reward: reward_amount - burn_amount,
    };

    pay(e, &config.reward_token, &e.current_contract_address(), &config.burn_address, split.burn_amount);
    credit_treasury(e, token, split.treasury_amount);
    credit_treasury(e, &config.reward_token, split.treasury_reward);
    log::debug!(
        "fee {} split: buyback {} burn {}",
        amount,
        split.buyback_amount,
        split.burn_amount
    );
    event::emit_fee_taken(e, token, &split);
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rate_truncates() {
        assert_eq!(apply_rate(10_000_000, 100).unwrap(), 1_000_000);
        assert_eq!(apply_rate(999, 100).unwrap(), 99);
        assert_eq!(apply_rate(7, 1000).unwrap(), 7);
        assert_eq!(apply_rate(7, 0).unwrap(), 0);
    }

    #[test]
    fn test_apply_rate_overflow() {
        assert_eq!(apply_rate(i128::MAX, 2), Err(LendingError::InvalidAmount));
    }
}
