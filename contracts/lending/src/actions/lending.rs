use crate::actions::buyback::take_fee;
use crate::error::LendingError;
use crate::event;
use crate::position::{
    get_and_increase_deposit_id, read_borrow_info, read_lend_terms, read_position,
    remove_borrow_info, remove_lend_terms, remove_position, write_borrow_info, write_position,
    BorrowInfo, LendTerms, Position, PositionState,
};
use crate::service_fee::{linked_active_fee, ServiceFee};
use crate::token_interaction::pay;
use crate::user_info::{add_user_receipt, remove_listed, remove_user_receipt};
use soroban_sdk::{token, Address, Env, Map, Vec};

/// Interest locked for a loan of `duration_days`.
pub fn interest_for(daily_interest: i128, duration_days: u32) -> Result<i128, LendingError> {
    daily_interest
        .checked_mul(duration_days as i128)
        .ok_or(LendingError::InvalidAmount)
}

fn add_cost(costs: &mut Map<Address, i128>, token: &Address, amount: i128) -> Result<(), LendingError> {
    if amount == 0 {
        return Ok(());
    }
    let total = costs
        .get(token.clone())
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(LendingError::InvalidAmount)?;
    costs.set(token.clone(), total);
    Ok(())
}

/// Borrows every listed position in `position_ids` for `duration_days`.
/// All positions must belong to the same lender. Returns the receipt ids
/// issued to the borrower, in input order.
pub fn borrow(
    e: &Env,
    borrower: &Address,
    position_ids: Vec<u64>,
    duration_days: u32,
) -> Result<Vec<u64>, LendingError> {
    borrower.require_auth();
    if position_ids.is_empty() {
        return Err(LendingError::InvalidLength);
    }

    let mut lender: Option<Address> = None;
    let mut positions: Vec<(Position, LendTerms)> = Vec::new(e);
    let mut fees: Vec<ServiceFee> = Vec::new(e);
    let mut costs: Map<Address, i128> = Map::new(e);
    for id in position_ids.iter() {
        let position = read_position(e, id).map_err(|_| LendingError::NotListedForLend)?;
        if position.state == PositionState::Borrowed || positions.iter().any(|(p, _)| p.id == id) {
            return Err(LendingError::AlreadyBorrowed);
        }
        if position.state != PositionState::Listed {
            return Err(LendingError::NotListedForLend);
        }
        match &lender {
            Some(l) if *l != position.owner => return Err(LendingError::LenderMismatch),
            Some(_) => {}
            None => lender = Some(position.owner.clone()),
        }
        let terms = read_lend_terms(e, id).ok_or(LendingError::NotListedForLend)?;
        if duration_days == 0 || duration_days > terms.max_duration_days {
            return Err(LendingError::InvalidDuration);
        }

        let interest = interest_for(terms.daily_interest, duration_days)?;
        add_cost(&mut costs, &terms.payment_token, terms.prepay_amount)?;
        add_cost(&mut costs, &terms.payment_token, interest)?;
        for contract in position.collateral_contracts(e).iter() {
            if let Some(fee) = linked_active_fee(e, &contract)? {
                add_cost(&mut costs, &fee.payment_token, fee.fee_amount)?;
                fees.push_back(fee);
            }
        }
        positions.push_back((position, terms));
    }

    for (token, amount) in costs.iter() {
        if token::Client::new(e, &token).balance(borrower) < amount {
            return Err(LendingError::InsufficientFunds);
        }
    }

    let this = e.current_contract_address();
    let now = e.ledger().timestamp();
    let mut receipts: Vec<u64> = Vec::new(e);
    for (mut position, terms) in positions.iter() {
        let interest = interest_for(terms.daily_interest, duration_days)?;
        pay(e, &terms.payment_token, borrower, &position.owner, terms.prepay_amount);
        pay(e, &terms.payment_token, borrower, &this, interest);

        let receipt = Position {
            id: get_and_increase_deposit_id(e),
            owner: borrower.clone(),
            kind: position.kind.clone(),
            collateral: Vec::new(e),
            state: PositionState::Receipt,
            paired_id: Some(position.id),
        };
        write_position(e, &receipt);
        add_user_receipt(e, borrower, receipt.id);

        position.state = PositionState::Borrowed;
        write_position(e, &position);
        write_borrow_info(
            e,
            position.id,
            &BorrowInfo {
                borrower: borrower.clone(),
                start_timestamp: now,
                duration_days,
                locked_interest: interest,
                prepay_paid: terms.prepay_amount,
                receipt_id: receipt.id,
            },
        );
        remove_listed(e, position.id);

        event::emit_borrow(e, borrower, position.id, receipt.id, duration_days);
        receipts.push_back(receipt.id);
    }

    for fee in fees.iter() {
        pay(e, &fee.payment_token, borrower, &this, fee.fee_amount);
        take_fee(e, &fee.payment_token, fee.fee_amount, fee.burn_percent)?;
    }
    log::info!("{} positions borrowed for {} days", receipts.len(), duration_days);
    Ok(receipts)
}

/// Loads a lender-side position whose loan has matured.
fn matured_loan(e: &Env, lender: &Address, position_id: u64) -> Result<(Position, BorrowInfo), LendingError> {
    let position = read_position(e, position_id)?;
    if position.is_receipt() {
        return Err(LendingError::ReceiptPositionNotClaimable);
    }
    if position.owner != *lender {
        return Err(LendingError::NotAuthorized);
    }
    let info = match (&position.state, read_borrow_info(e, position_id)) {
        (PositionState::Borrowed, Some(info)) => info,
        _ => return Err(LendingError::NotBorrowed),
    };
    if e.ledger().timestamp() < info.matures_at() {
        return Err(LendingError::NotMatured);
    }
    Ok((position, info))
}

/// Retires the receipt and returns the position to Deposited.
fn settle_loan(e: &Env, mut position: Position, info: &BorrowInfo) {
    remove_position(e, info.receipt_id);
    remove_user_receipt(e, &info.borrower, info.receipt_id);
    position.state = PositionState::Deposited;
    write_position(e, &position);
    remove_lend_terms(e, position.id);
    remove_borrow_info(e, position.id);
}

pub fn claim_interest(e: &Env, lender: &Address, position_id: u64) -> Result<i128, LendingError> {
    lender.require_auth();
    let (position, info) = matured_loan(e, lender, position_id)?;
    if info.locked_interest <= 0 {
        return Err(LendingError::NothingToClaim);
    }
    let token = read_lend_terms(e, position_id)
        .map(|terms| terms.payment_token)
        .ok_or(LendingError::NotBorrowed)?;

    pay(e, &token, &e.current_contract_address(), lender, info.locked_interest);
    settle_loan(e, position, &info);
    event::emit_interest_claimed(e, lender, position_id, info.locked_interest);
    Ok(info.locked_interest)
}

/// Ends a matured loan that locked no interest.
pub fn close_loan(e: &Env, lender: &Address, position_id: u64) -> Result<(), LendingError> {
    lender.require_auth();
    let (position, info) = matured_loan(e, lender, position_id)?;
    if info.locked_interest > 0 {
        return Err(LendingError::UnclaimedBalance);
    }
    settle_loan(e, position, &info);
    event::emit_loan_closed(e, lender, position_id, info.receipt_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_is_daily_times_days() {
        assert_eq!(interest_for(5_000_000, 7).unwrap(), 35_000_000);
        assert_eq!(interest_for(0, 30).unwrap(), 0);
    }

    #[test]
    fn test_interest_overflow() {
        assert_eq!(interest_for(i128::MAX, 2), Err(LendingError::InvalidAmount));
    }
}
