use crate::actions::winning::has_unclaimed_winnings;
use crate::admin::check_bundle_size;
use crate::allow_list::{is_allowed, ListKind};
use crate::error::LendingError;
use crate::event;
use crate::position::{
    create_position, read_position, remove_position, write_lend_terms, write_position, CollateralKind,
    CollateralRef, LendTerms, PositionState,
};
use crate::user_info::{add_listed, remove_user_deposit};
use soroban_sdk::{Address, Env, Vec};

pub fn validate_terms(e: &Env, terms: &LendTerms) -> Result<(), LendingError> {
    if !is_allowed(e, ListKind::PaymentToken, &terms.payment_token) {
        return Err(LendingError::TokenNotAllowed);
    }
    terms.winning_split.validate()?;
    if terms.max_duration_days == 0 {
        return Err(LendingError::InvalidDuration);
    }
    if terms.require_prepay != (terms.prepay_amount > 0) || terms.prepay_amount < 0 {
        return Err(LendingError::InvalidPrepaySetting);
    }
    if terms.daily_interest < 0 || terms.game_fee < 0 {
        return Err(LendingError::InvalidAmount);
    }
    Ok(())
}

/// Lists each `position_ids[i]` with `terms[i]`.
pub fn list(
    e: &Env,
    owner: &Address,
    position_ids: Vec<u64>,
    terms: Vec<LendTerms>,
) -> Result<(), LendingError> {
    owner.require_auth();
    if position_ids.is_empty() || terms.is_empty() {
        return Err(LendingError::InvalidLength);
    }
    if position_ids.len() != terms.len() {
        return Err(LendingError::MismatchedLength);
    }

    for (id, lend_terms) in position_ids.iter().zip(terms.iter()) {
        let mut position = read_position(e, id)?;
        if position.is_receipt() {
            return Err(LendingError::ReceiptPositionNotEligible);
        }
        if position.owner != *owner {
            return Err(LendingError::NotOwner);
        }
        validate_terms(e, &lend_terms)?;
        match position.state {
            PositionState::Listed => return Err(LendingError::AlreadyListed),
            PositionState::Borrowed => return Err(LendingError::PositionBorrowed),
            _ => {}
        }

        event::emit_list(e, owner, id, &lend_terms);
        position.state = PositionState::Listed;
        write_position(e, &position);
        write_lend_terms(e, id, &lend_terms);
        add_listed(e, id);
    }
    Ok(())
}

/// Merges Deposited positions of `owner` into one new MergedBundle position.
/// The source positions are destroyed; their ids are never reused.
pub fn merge_deposits(e: &Env, owner: &Address, position_ids: Vec<u64>) -> Result<u64, LendingError> {
    owner.require_auth();
    if position_ids.is_empty() {
        return Err(LendingError::InvalidLength);
    }

    let mut seen: Vec<u64> = Vec::new(e);
    let mut refs: Vec<CollateralRef> = Vec::new(e);
    for id in position_ids.iter() {
        if seen.contains(id) {
            return Err(LendingError::InvalidPositionId);
        }
        let position = read_position(e, id)?;
        if position.is_receipt() {
            return Err(LendingError::ReceiptPositionNotEligible);
        }
        if position.owner != *owner {
            return Err(LendingError::NotOwner);
        }
        match position.state {
            PositionState::Borrowed => return Err(LendingError::PositionBorrowed),
            PositionState::Listed => return Err(LendingError::PositionListed),
            _ => {}
        }
        if has_unclaimed_winnings(e, id, owner) {
            return Err(LendingError::UnclaimedBalance);
        }
        seen.push_back(id);
        refs.append(&position.collateral);
    }
    check_bundle_size(e, refs.len())?;

    for id in seen.iter() {
        remove_position(e, id);
        remove_user_deposit(e, owner, id);
    }
    let merged = create_position(e, owner, CollateralKind::MergedBundle, refs);
    log::debug!("merged {} positions into {}", seen.len(), merged.id);
    event::emit_merge(e, owner, merged.id, &seen);
    Ok(merged.id)
}
