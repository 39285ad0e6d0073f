use crate::actions::buyback::FeeSplit;
use crate::actions::winning::WinningDistribution;
use crate::allow_list::ListKind;
use crate::position::{CollateralKind, LendTerms};
use crate::service_fee::ServiceFee;
use soroban_sdk::{symbol_short, Address, Env, String, Vec};

// Administration

pub fn emit_config_updated(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("config"), admin.clone()), ());
}

/// Emits an event when an allow-list entry is toggled.
pub fn emit_allow_list_changed(env: &Env, kind: ListKind, addr: &Address, enabled: bool) {
    env.events()
        .publish((symbol_short!("allow"), addr.clone()), (kind, enabled));
}

/// Emits an event when a service fee is created.
pub fn emit_service_fee_created(env: &Env, fee: &ServiceFee) {
    env.events().publish(
        (symbol_short!("fee"), symbol_short!("create"), fee.id),
        (
            fee.payment_token.clone(),
            fee.fee_amount,
            fee.active,
            fee.label.clone(),
            fee.burn_percent,
        ),
    );
}

pub fn emit_service_fee_active(env: &Env, id: u32, active: bool) {
    env.events()
        .publish((symbol_short!("fee"), symbol_short!("active"), id), active);
}

/// Emits an event when a fee is linked to (or unlinked from) a collection or bundle.
pub fn emit_service_fee_linked(env: &Env, id: u32, target: &Address, linked: bool) {
    env.events().publish(
        (symbol_short!("fee"), symbol_short!("link"), id),
        (target.clone(), linked),
    );
}

pub fn emit_buyback_config(env: &Env, token: &Address, rate: u32, enabled: bool) {
    env.events()
        .publish((symbol_short!("buyback"), symbol_short!("config"), token.clone()), (rate, enabled));
}

// Vault

/// Emits an event when a position is created by a deposit.
pub fn emit_deposit(env: &Env, owner: &Address, id: u64, kind: CollateralKind, cards: u32) {
    env.events()
        .publish((symbol_short!("deposit"), owner.clone()), (id, kind, cards));
}

/// Emits an event when a position is withdrawn and its cards returned.
pub fn emit_withdraw(env: &Env, owner: &Address, id: u64) {
    env.events()
        .publish((symbol_short!("withdraw"), owner.clone()), id);
}

// Deck

/// Emits an event when a position is listed for lend.
pub fn emit_list(env: &Env, owner: &Address, id: u64, terms: &LendTerms) {
    env.events().publish(
        (symbol_short!("lend"), symbol_short!("list"), owner.clone()),
        (
            id,
            terms.payment_token.clone(),
            terms.daily_interest,
            terms.prepay_amount,
            terms.max_duration_days,
            terms.game_fee,
        ),
    );
}

/// Emits an event when positions are merged into a new bundle.
pub fn emit_merge(env: &Env, owner: &Address, id: u64, merged: &Vec<u64>) {
    env.events()
        .publish((symbol_short!("merge"), owner.clone()), (id, merged.clone()));
}

// Lend & Borrow

/// Emits an event when a listed position is borrowed.
pub fn emit_borrow(env: &Env, borrower: &Address, id: u64, receipt_id: u64, duration_days: u32) {
    env.events().publish(
        (symbol_short!("lend"), symbol_short!("borrow"), borrower.clone()),
        (id, receipt_id, duration_days),
    );
}

/// Emits an event when the lender collects the locked interest of a matured loan.
pub fn emit_interest_claimed(env: &Env, lender: &Address, id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("lend"), symbol_short!("interest"), lender.clone()),
        (id, amount),
    );
}

pub fn emit_loan_closed(env: &Env, lender: &Address, id: u64, receipt_id: u64) {
    env.events().publish(
        (symbol_short!("lend"), symbol_short!("close"), lender.clone()),
        (id, receipt_id),
    );
}

// Winnings

/// Emits an event when winnings of a borrowed position are distributed.
pub fn emit_winnings_calculated(
    env: &Env,
    id: u64,
    total: i128,
    distribution: &WinningDistribution,
    meta: &Vec<String>,
) {
    env.events().publish(
        (symbol_short!("winning"), symbol_short!("calc"), id),
        (
            total,
            distribution.lender_amount,
            distribution.borrower_amount,
            distribution.burn_amount,
            distribution.treasury_amount,
            meta.clone(),
        ),
    );
}

pub fn emit_winnings_claimed(env: &Env, claimant: &Address, id: u64, token: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("winning"), symbol_short!("claim"), claimant.clone()),
        (id, token.clone(), amount),
    );
}

// Fees & Treasury

/// Emits an event when a service fee has been split into buyback and treasury.
pub fn emit_fee_taken(env: &Env, token: &Address, split: &FeeSplit) {
    env.events().publish(
        (symbol_short!("fee"), symbol_short!("take"), token.clone()),
        (
            split.buyback_amount,
            split.reward_amount,
            split.burn_amount,
            split.treasury_amount,
            split.treasury_reward,
        ),
    );
}

pub fn emit_treasury_credited(env: &Env, token: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("treasury"), symbol_short!("credit"), token.clone()), amount);
}

pub fn emit_treasury_withdrawn(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("treasury"), symbol_short!("withdraw"), token.clone()),
        (to.clone(), amount),
    );
}
