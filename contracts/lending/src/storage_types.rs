use crate::allow_list::ListKind;
use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const DAY_IN_SECONDS: u64 = 86_400;
/// Rates are expressed out of 1000 (100 = 10%).
pub(crate) const RATE_DENOMINATOR: u32 = 1000;
pub(crate) const SWAP_DEADLINE_SECS: u64 = 300;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenId(pub u32);

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    BundleMode,
    BundleAmount,
    DepositLimit(Address),
    AllowList(ListKind),
    Allowed(ListKind, Address),
    ServiceFeeId,
    ServiceFee(u32),
    LinkedFee(Address),
    Buyback(Address),
    Treasury(Address),
    DepositId,
    Position(u64),
    LendTerms(u64),
    BorrowInfo(u64),
    UserDeposits(Address),
    UserReceipts(Address),
    Listed,
    Winnings(u64, Address),
}
