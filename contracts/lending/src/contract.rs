//! Vault and ledger for lending card decks against payment-token fees.

use crate::actions::{buyback, deck, deposit, lending, winning};
use crate::actions::buyback::{Buyback, FeeSplit};
use crate::actions::winning::{WinningDistribution, WinningShare};
use crate::admin::{
    bump_instance, has_administrator, read_administrator, read_bundle_amount, read_bundle_mode,
    read_config, read_deposit_limit, require_admin, write_administrator, write_bundle_amount,
    write_bundle_mode, write_config, write_deposit_limit, AmountRange, Config,
};
use crate::allow_list::{is_acceptable_target, is_allowed, read_allow_list, set_allowed, ListKind};
use crate::error::LendingError;
use crate::event;
use crate::position::{
    next_deposit_id, read_borrow_info, read_lend_terms, read_position, BorrowInfo, CollateralRef,
    LendTerms, Position, PositionState,
};
use crate::service_fee::{self, read_linked_fee, read_service_fee, ServiceFee};
use crate::storage_types::{TokenId, RATE_DENOMINATOR};
use crate::treasury::{read_treasury, withdraw_treasury};
use crate::user_info::{read_listed, read_user_deposits, read_user_receipts};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};
use soroban_token_sdk::TokenUtils;

/// A position together with its collateral split into parallel arrays.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositInfo {
    pub position: Position,
    pub contracts: Vec<Address>,
    pub token_ids: Vec<TokenId>,
}

#[contract]
pub struct LendingMaster;

#[contractimpl]
impl LendingMaster {
    pub fn initialize(e: Env, admin: Address, config: Config) -> Result<(), LendingError> {
        if has_administrator(&e) {
            return Err(LendingError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        write_config(&e, &config);
        bump_instance(&e);
        event::emit_config_updated(&e, &admin);
        Ok(())
    }

    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), LendingError> {
        let admin = read_administrator(&e)?;
        admin.require_auth();
        bump_instance(&e);

        write_administrator(&e, &new_admin);
        TokenUtils::new(&e).events().set_admin(admin, new_admin);
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, LendingError> {
        read_administrator(&e)
    }

    pub fn set_config(e: Env, caller: Address, config: Config) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        write_config(&e, &config);
        event::emit_config_updated(&e, &caller);
        Ok(())
    }

    pub fn config(e: Env) -> Result<Config, LendingError> {
        read_config(&e)
    }

    pub fn set_bundle_amount(e: Env, caller: Address, min: u32, max: u32) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        let range = AmountRange {
            min_amount: min,
            max_amount: max,
        };
        range.validate()?;
        write_bundle_amount(&e, &range);
        Ok(())
    }

    pub fn enable_bundle_mode(e: Env, caller: Address, enabled: bool) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        write_bundle_mode(&e, enabled);
        Ok(())
    }

    pub fn set_deposit_limit(
        e: Env,
        caller: Address,
        target: Address,
        limit: AmountRange,
    ) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        if !is_acceptable_target(&e, &target) {
            return Err(LendingError::CollectionNotAcceptable);
        }
        limit.validate()?;
        write_deposit_limit(&e, &target, &limit);
        Ok(())
    }

    pub fn withdraw_treasury(e: Env, caller: Address, token: Address) -> Result<i128, LendingError> {
        require_admin(&e, &caller)?;
        withdraw_treasury(&e, &token, &caller)
    }
}

// Allow lists
#[contractimpl]
impl LendingMaster {
    pub fn set_token(e: Env, caller: Address, token: Address, enabled: bool) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        set_allowed(&e, ListKind::PaymentToken, &token, enabled)
    }

    pub fn set_collections(
        e: Env,
        caller: Address,
        collections: Vec<Address>,
        enabled: bool,
    ) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        if collections.is_empty() {
            return Err(LendingError::InvalidLength);
        }
        for collection in collections.iter() {
            set_allowed(&e, ListKind::Collection, &collection, enabled)?;
        }
        Ok(())
    }

    pub fn set_bundle(e: Env, caller: Address, bundle: Address, enabled: bool) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        set_allowed(&e, ListKind::BundleContract, &bundle, enabled)
    }

    pub fn is_allowed(e: Env, kind: ListKind, addr: Address) -> bool {
        is_allowed(&e, kind, &addr)
    }

    pub fn get_allowed_tokens(e: Env) -> Vec<Address> {
        read_allow_list(&e, ListKind::PaymentToken)
    }

    pub fn get_allowed_collections(e: Env) -> Vec<Address> {
        read_allow_list(&e, ListKind::Collection)
    }

    pub fn get_allowed_bundles(e: Env) -> Vec<Address> {
        read_allow_list(&e, ListKind::BundleContract)
    }
}

// Service fees & Buyback
#[contractimpl]
impl LendingMaster {
    pub fn set_service_fee(
        e: Env,
        caller: Address,
        payment_token: Address,
        fee_amount: i128,
        active: bool,
        label: String,
        burn_percent: u32,
    ) -> Result<u32, LendingError> {
        require_admin(&e, &caller)?;
        service_fee::create_service_fee(&e, payment_token, fee_amount, active, label, burn_percent)
    }

    pub fn set_service_fee_active(e: Env, caller: Address, fee_id: u32, active: bool) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        service_fee::set_service_fee_active(&e, fee_id, active)
    }

    pub fn link_service_fee(e: Env, caller: Address, fee_id: u32, target: Address) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        service_fee::link_service_fee(&e, fee_id, &target)
    }

    pub fn unlink_service_fee(e: Env, caller: Address, target: Address) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        service_fee::unlink_service_fee(&e, &target)
    }

    pub fn get_service_fee(e: Env, fee_id: u32) -> Result<ServiceFee, LendingError> {
        read_service_fee(&e, fee_id)
    }

    pub fn get_linked_fee(e: Env, target: Address) -> Option<u32> {
        read_linked_fee(&e, &target)
    }

    /// Id the next created service fee will receive.
    pub fn service_fee_id(e: Env) -> u32 {
        service_fee::next_service_fee_id(&e)
    }

    pub fn set_buyback_fee(e: Env, caller: Address, token: Address, rate: u32) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        buyback::set_buyback_fee(&e, &token, rate)
    }

    pub fn enable_buyback(e: Env, caller: Address, token: Address, enabled: bool) -> Result<(), LendingError> {
        require_admin(&e, &caller)?;
        buyback::enable_buyback(&e, &token, enabled)
    }

    pub fn get_buyback(e: Env, token: Address) -> Option<Buyback> {
        buyback::read_buyback(&e, &token)
    }

    /// Routes `amount` of `token` from `payer` through buyback and treasury.
    ///
    /// Open to any payer so game fees collected outside a loan (entry fees,
    /// `LendTerms::game_fee`) go through the same split. The payer funds the
    /// whole amount and `burn_percent` only decides how much of the bought
    /// reward is burned rather than kept by the treasury.
    pub fn take_fee(
        e: Env,
        payer: Address,
        token: Address,
        amount: i128,
        burn_percent: u32,
    ) -> Result<FeeSplit, LendingError> {
        payer.require_auth();
        if !is_allowed(&e, ListKind::PaymentToken, &token) {
            return Err(LendingError::TokenNotAllowed);
        }
        if amount <= 0 {
            return Err(LendingError::InvalidFeeAmount);
        }
        if burn_percent > RATE_DENOMINATOR {
            return Err(LendingError::InvalidBurnPercent);
        }
        crate::token_interaction::pay(&e, &token, &payer, &e.current_contract_address(), amount);
        buyback::take_fee(&e, &token, amount, burn_percent)
    }

    pub fn treasury_balance(e: Env, token: Address) -> i128 {
        read_treasury(&e, &token)
    }
}

// Deposit
#[contractimpl]
impl LendingMaster {
    pub fn deposit_individual(
        e: Env,
        owner: Address,
        collections: Vec<Address>,
        token_ids: Vec<TokenId>,
        as_bundle: bool,
    ) -> Result<Vec<u64>, LendingError> {
        deposit::deposit_individual(&e, &owner, collections, token_ids, as_bundle)
    }

    pub fn deposit_external_bundle(
        e: Env,
        owner: Address,
        bundle_contract: Address,
        bundle_token_id: TokenId,
    ) -> Result<u64, LendingError> {
        deposit::deposit_external_bundle(&e, &owner, &bundle_contract, bundle_token_id)
    }

    pub fn withdraw(e: Env, owner: Address, position_ids: Vec<u64>) -> Result<(), LendingError> {
        deposit::withdraw(&e, &owner, position_ids)
    }
}

// Deck
#[contractimpl]
impl LendingMaster {
    pub fn list(
        e: Env,
        owner: Address,
        position_ids: Vec<u64>,
        terms: Vec<LendTerms>,
    ) -> Result<(), LendingError> {
        deck::list(&e, &owner, position_ids, terms)
    }

    pub fn merge_deposits(e: Env, owner: Address, position_ids: Vec<u64>) -> Result<u64, LendingError> {
        deck::merge_deposits(&e, &owner, position_ids)
    }
}

// Lend & Borrow
#[contractimpl]
impl LendingMaster {
    pub fn borrow(
        e: Env,
        borrower: Address,
        position_ids: Vec<u64>,
        duration_days: u32,
    ) -> Result<Vec<u64>, LendingError> {
        lending::borrow(&e, &borrower, position_ids, duration_days)
    }

    pub fn claim_interest(e: Env, lender: Address, position_id: u64) -> Result<i128, LendingError> {
        lending::claim_interest(&e, &lender, position_id)
    }

    pub fn close_loan(e: Env, lender: Address, position_id: u64) -> Result<(), LendingError> {
        lending::close_loan(&e, &lender, position_id)
    }

    pub fn winning_calculation(
        e: Env,
        caller: Address,
        position_id: u64,
        total_winnings: i128,
        meta: Vec<String>,
    ) -> Result<WinningDistribution, LendingError> {
        require_admin(&e, &caller)?;
        winning::winning_calculation(&e, position_id, total_winnings, meta)
    }

    pub fn claim_winnings(e: Env, claimant: Address, position_id: u64) -> Result<i128, LendingError> {
        winning::claim_winnings(&e, &claimant, position_id)
    }
}

// Queries
#[contractimpl]
impl LendingMaster {
    pub fn get_position(e: Env, position_id: u64) -> Result<Position, LendingError> {
        read_position(&e, position_id)
    }

    pub fn get_deposit_info(e: Env, position_id: u64) -> Result<DepositInfo, LendingError> {
        let position = read_position(&e, position_id)?;
        let mut contracts = Vec::new(&e);
        let mut token_ids = Vec::new(&e);
        for r in position.collateral.iter() {
            contracts.push_back(r.contract);
            token_ids.push_back(r.token_id);
        }
        Ok(DepositInfo {
            position,
            contracts,
            token_ids,
        })
    }

    pub fn get_collateral(e: Env, position_id: u64) -> Result<Vec<CollateralRef>, LendingError> {
        Ok(read_position(&e, position_id)?.collateral)
    }

    pub fn get_user_deposited_ids(e: Env, owner: Address) -> Vec<u64> {
        read_user_deposits(&e, &owner)
    }

    pub fn get_user_listed_ids(e: Env, owner: Address) -> Vec<u64> {
        ids_in_state(&e, &owner, PositionState::Listed)
    }

    pub fn get_user_not_listed_ids(e: Env, owner: Address) -> Vec<u64> {
        ids_in_state(&e, &owner, PositionState::Deposited)
    }

    /// Receipt ids held by `borrower`.
    pub fn get_user_borrowed_ids(e: Env, borrower: Address) -> Vec<u64> {
        read_user_receipts(&e, &borrower)
    }

    pub fn get_total_listed_ids(e: Env) -> Vec<u64> {
        read_listed(&e)
    }

    pub fn get_lend_terms(e: Env, position_id: u64) -> Option<LendTerms> {
        read_lend_terms(&e, position_id)
    }

    pub fn get_borrow_info(e: Env, position_id: u64) -> Option<BorrowInfo> {
        read_borrow_info(&e, position_id)
    }

    pub fn get_locked_interest(e: Env, position_id: u64) -> Result<i128, LendingError> {
        read_position(&e, position_id)?;
        Ok(read_borrow_info(&e, position_id)
            .map(|info| info.locked_interest)
            .unwrap_or(0))
    }

    pub fn get_claimable_winnings(e: Env, position_id: u64, claimant: Address) -> i128 {
        winning::claimable_winnings(&e, position_id, &claimant)
    }

    pub fn get_winnings(e: Env, position_id: u64, claimant: Address) -> Vec<WinningShare> {
        winning::read_winnings(&e, position_id, &claimant)
    }

    /// Id the next created position will receive.
    pub fn deposit_id(e: Env) -> u64 {
        next_deposit_id(&e)
    }

    pub fn get_deposit_limit(e: Env, target: Address) -> Option<AmountRange> {
        read_deposit_limit(&e, &target)
    }

    pub fn get_bundle_amount(e: Env) -> AmountRange {
        read_bundle_amount(&e)
    }

    pub fn is_bundle_mode(e: Env) -> bool {
        read_bundle_mode(&e)
    }
}

fn ids_in_state(e: &Env, owner: &Address, state: PositionState) -> Vec<u64> {
    let mut ids = Vec::new(e);
    for id in read_user_deposits(e, owner).iter() {
        if let Ok(position) = read_position(e, id) {
            if position.state == state {
                ids.push_back(id);
            }
        }
    }
    ids
}
