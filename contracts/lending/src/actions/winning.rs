use crate::admin::{read_administrator, read_config};
use crate::error::LendingError;
use crate::event;
use crate::position::{read_borrow_info, read_lend_terms, read_position, PositionState, WinningSplit};
use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use crate::token_interaction::pay;
use crate::treasury::credit_treasury;
use crate::actions::buyback::apply_rate;
use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Claimable winnings of one participant of a position, in one token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningShare {
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningDistribution {
    pub lender_amount: i128,
    pub borrower_amount: i128,
    pub burn_amount: i128,
    /// Unassigned rate plus truncation dust.
    pub treasury_amount: i128,
}

pub fn split_winnings(total: i128, split: &WinningSplit) -> Result<WinningDistribution, LendingError> {
    let lender_amount = apply_rate(total, split.lender_rate)?;
    let borrower_amount = apply_rate(total, split.borrower_rate)?;
    let burn_amount = apply_rate(total, split.burn_rate)?;
    Ok(WinningDistribution {
        lender_amount,
        borrower_amount,
        burn_amount,
        treasury_amount: total - lender_amount - borrower_amount - burn_amount,
    })
}

/// Shares `claimant` holds on `position_id`. Outlives the position itself.
pub fn read_winnings(e: &Env, position_id: u64, claimant: &Address) -> Vec<WinningShare> {
    e.storage()
        .persistent()
        .get(&DataKey::Winnings(position_id, claimant.clone()))
        .unwrap_or(Vec::new(e))
}

fn write_winnings(e: &Env, position_id: u64, claimant: &Address, shares: &Vec<WinningShare>) {
    let key = DataKey::Winnings(position_id, claimant.clone());
    if shares.is_empty() {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn has_unclaimed_winnings(e: &Env, position_id: u64, claimant: &Address) -> bool {
    !read_winnings(e, position_id, claimant).is_empty()
}

pub fn claimable_winnings(e: &Env, position_id: u64, claimant: &Address) -> i128 {
    read_winnings(e, position_id, claimant)
        .iter()
        .map(|share| share.amount)
        .sum()
}

fn credit_share(e: &Env, position_id: u64, claimant: &Address, token: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let mut shares = read_winnings(e, position_id, claimant);
    match shares.iter().position(|share| share.token == *token) {
        Some(pos) => {
            let mut share = shares.get_unchecked(pos as u32);
            share.amount += amount;
            shares.set(pos as u32, share);
        }
        None => shares.push_back(WinningShare {
            token: token.clone(),
            amount,
        }),
    }
    write_winnings(e, position_id, claimant, &shares);
}

/// Distributes `total_winnings` of a borrowed position. The administrator
/// funds the amount. Repeated calls add to the claimable balances.
pub fn winning_calculation(
    e: &Env,
    position_id: u64,
    total_winnings: i128,
    meta: Vec<String>,
) -> Result<WinningDistribution, LendingError> {
    if total_winnings <= 0 {
        return Err(LendingError::InvalidAmount);
    }
    let position = read_position(e, position_id)?;
    if position.is_receipt() {
        return Err(LendingError::ReceiptPositionNotEligible);
    }
    if position.state != PositionState::Borrowed {
        return Err(LendingError::NotBorrowed);
    }
    let (terms, info) = match (read_lend_terms(e, position_id), read_borrow_info(e, position_id)) {
        (Some(terms), Some(info)) => (terms, info),
        _ => return Err(LendingError::NotBorrowed),
    };

    let distribution = split_winnings(total_winnings, &terms.winning_split)?;
    let config = read_config(e)?;
    let admin = read_administrator(e)?;
    let this = e.current_contract_address();
    let token = terms.payment_token;

    pay(e, &token, &admin, &this, total_winnings);
    pay(e, &token, &this, &config.burn_address, distribution.burn_amount);
    credit_treasury(e, &token, distribution.treasury_amount);

    credit_share(e, position_id, &position.owner, &token, distribution.lender_amount);
    credit_share(e, position_id, &info.borrower, &token, distribution.borrower_amount);

    event::emit_winnings_calculated(e, position_id, total_winnings, &distribution, &meta);
    Ok(distribution)
}

/// Pays every winning share `claimant` holds on `position_id`. Shares stay
/// claimable after the position is withdrawn.
pub fn claim_winnings(e: &Env, claimant: &Address, position_id: u64) -> Result<i128, LendingError> {
    claimant.require_auth();
    let position = read_position(e, position_id).ok();
    if position.as_ref().map(|p| p.is_receipt()).unwrap_or(false) {
        return Err(LendingError::ReceiptPositionNotClaimable);
    }

    let shares = read_winnings(e, position_id, claimant);
    if shares.is_empty() {
        let is_party = match position {
            Some(p) => {
                p.owner == *claimant
                    || read_borrow_info(e, position_id)
                        .map(|info| info.borrower == *claimant)
                        .unwrap_or(false)
            }
            None => return Err(LendingError::InvalidPositionId),
        };
        return Err(if is_party {
            LendingError::NothingToClaim
        } else {
            LendingError::NotAuthorized
        });
    }

    let this = e.current_contract_address();
    let mut claimed: i128 = 0;
    for share in shares.iter() {
        pay(e, &share.token, &this, claimant, share.amount);
        event::emit_winnings_claimed(e, claimant, position_id, &share.token, share.amount);
        claimed += share.amount;
    }
    write_winnings(e, position_id, claimant, &Vec::new(e));
    Ok(claimed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_dust_for_treasury() {
        let split = WinningSplit {
            lender_rate: 333,
            borrower_rate: 333,
            burn_rate: 100,
        };
        let d = split_winnings(1_001, &split).unwrap();
        assert_eq!(d.lender_amount, 333);
        assert_eq!(d.borrower_amount, 333);
        assert_eq!(d.burn_amount, 100);
        assert_eq!(d.treasury_amount, 235);
        assert_eq!(
            d.lender_amount + d.borrower_amount + d.burn_amount + d.treasury_amount,
            1_001
        );
    }

    #[test]
    fn test_full_split_leaves_only_dust() {
        let split = WinningSplit {
            lender_rate: 500,
            borrower_rate: 300,
            burn_rate: 200,
        };
        let d = split_winnings(999, &split).unwrap();
        assert_eq!(d.lender_amount, 499);
        assert_eq!(d.borrower_amount, 299);
        assert_eq!(d.burn_amount, 199);
        assert_eq!(d.treasury_amount, 2);
    }
}
