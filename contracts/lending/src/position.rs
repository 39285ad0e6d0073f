use crate::error::LendingError;
use crate::storage_types::{
    DataKey, TokenId, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, RATE_DENOMINATOR,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollateralKind {
    SingleCollection,
    MergedBundle,
    ExternalBundle,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionState {
    Deposited,
    Listed,
    Borrowed,
    /// Borrower-side marker of an open loan. Holds no collateral.
    Receipt,
}

/// A card held in custody: collection (or bundle contract) and token id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRef {
    pub contract: Address,
    pub token_id: TokenId,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinningSplit {
    pub lender_rate: u32,
    pub borrower_rate: u32,
    pub burn_rate: u32,
}

impl WinningSplit {
    pub fn validate(&self) -> Result<(), LendingError> {
        let total = self.lender_rate as u64 + self.borrower_rate as u64 + self.burn_rate as u64;
        if total > RATE_DENOMINATOR as u64 {
            return Err(LendingError::InvalidWinningRate);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LendTerms {
    pub payment_token: Address,
    /// Interest owed per day of the loan, in `payment_token` units.
    pub daily_interest: i128,
    pub prepay_amount: i128,
    pub max_duration_days: u32,
    pub require_prepay: bool,
    pub winning_split: WinningSplit,
    pub game_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowInfo {
    pub borrower: Address,
    pub start_timestamp: u64,
    pub duration_days: u32,
    pub locked_interest: i128,
    pub prepay_paid: i128,
    pub receipt_id: u64,
}

impl BorrowInfo {
    pub fn matures_at(&self) -> u64 {
        self.start_timestamp + self.duration_days as u64 * crate::storage_types::DAY_IN_SECONDS
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub id: u64,
    pub owner: Address,
    pub kind: CollateralKind,
    pub collateral: Vec<CollateralRef>,
    pub state: PositionState,
    /// For receipts, the lender-side position of the loan.
    pub paired_id: Option<u64>,
}

impl Position {
    pub fn is_receipt(&self) -> bool {
        self.state == PositionState::Receipt
    }

    /// Distinct collateral contracts, in first-seen order.
    pub fn collateral_contracts(&self, e: &Env) -> Vec<Address> {
        let mut contracts: Vec<Address> = Vec::new(e);
        for r in self.collateral.iter() {
            if !contracts.contains(&r.contract) {
                contracts.push_back(r.contract);
            }
        }
        contracts
    }
}

/// Allocates the next position id. Ids start at 1 and are never reused.
pub fn get_and_increase_deposit_id(e: &Env) -> u64 {
    let prev: u64 = e.storage().instance().get(&DataKey::DepositId).unwrap_or(0);
    e.storage().instance().set(&DataKey::DepositId, &(prev + 1));
    prev + 1
}

pub fn next_deposit_id(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::DepositId)
        .unwrap_or(0)
        + 1
}

pub fn read_position(e: &Env, id: u64) -> Result<Position, LendingError> {
    let key = DataKey::Position(id);
    match e.storage().persistent().get::<DataKey, Position>(&key) {
        Some(position) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            Ok(position)
        }
        None => Err(LendingError::InvalidPositionId),
    }
}

pub fn write_position(e: &Env, position: &Position) {
    let key = DataKey::Position(position.id);
    e.storage().persistent().set(&key, position);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn remove_position(e: &Env, id: u64) {
    e.storage().persistent().remove(&DataKey::Position(id));
    remove_lend_terms(e, id);
    remove_borrow_info(e, id);
}

/// Terms of a Listed or Borrowed position.
pub fn read_lend_terms(e: &Env, id: u64) -> Option<LendTerms> {
    e.storage().persistent().get(&DataKey::LendTerms(id))
}

pub fn write_lend_terms(e: &Env, id: u64, terms: &LendTerms) {
    let key = DataKey::LendTerms(id);
    e.storage().persistent().set(&key, terms);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn remove_lend_terms(e: &Env, id: u64) {
    e.storage().persistent().remove(&DataKey::LendTerms(id));
}

/// Loan record of a Borrowed position.
pub fn read_borrow_info(e: &Env, id: u64) -> Option<BorrowInfo> {
    e.storage().persistent().get(&DataKey::BorrowInfo(id))
}

pub fn write_borrow_info(e: &Env, id: u64, info: &BorrowInfo) {
    let key = DataKey::BorrowInfo(id);
    e.storage().persistent().set(&key, info);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn remove_borrow_info(e: &Env, id: u64) {
    e.storage().persistent().remove(&DataKey::BorrowInfo(id));
}

/// Creates a Deposited position owned by `owner` and indexes it.
pub fn create_position(
    e: &Env,
    owner: &Address,
    kind: CollateralKind,
    collateral: Vec<CollateralRef>,
) -> Position {
    let position = Position {
        id: get_and_increase_deposit_id(e),
        owner: owner.clone(),
        kind,
        collateral,
        state: PositionState::Deposited,
        paired_id: None,
    };
    write_position(e, &position);
    crate::user_info::add_user_deposit(e, owner, position.id);
    position
}
