use crate::admin::{check_bundle_size, check_deposit_limit};
use crate::allow_list::{is_allowed, ListKind};
use crate::error::LendingError;
use crate::event;
use crate::external::{BundleClient, NftClient};
use crate::position::{create_position, read_position, remove_position, CollateralKind, CollateralRef, PositionState};
use crate::storage_types::TokenId;
use crate::token_interaction::{ensure_custody_ready, ensure_operator_approval, pull_nft, release_nft};
use crate::user_info::{remove_listed, remove_user_deposit};
use crate::actions::winning::has_unclaimed_winnings;
use soroban_sdk::{vec, Address, Env, Map, Vec};

/// Counts cards per collection and checks each count against its limit.
fn check_collection_limits(e: &Env, refs: &Vec<CollateralRef>) -> Result<(), LendingError> {
    let mut counts: Map<Address, u32> = Map::new(e);
    for r in refs.iter() {
        let count = counts.get(r.contract.clone()).unwrap_or(0);
        counts.set(r.contract, count + 1);
    }
    for (contract, count) in counts.iter() {
        check_deposit_limit(e, &contract, count)?;
    }
    Ok(())
}

pub fn deposit_individual(
    e: &Env,
    owner: &Address,
    collections: Vec<Address>,
    token_ids: Vec<TokenId>,
    as_bundle: bool,
) -> Result<Vec<u64>, LendingError> {
    owner.require_auth();
    if collections.is_empty() || token_ids.is_empty() {
        return Err(LendingError::InvalidLength);
    }
    if collections.len() != token_ids.len() {
        return Err(LendingError::MismatchedLength);
    }
    if as_bundle {
        check_bundle_size(e, collections.len())?;
    }

    let mut refs: Vec<CollateralRef> = Vec::new(e);
    for (contract, token_id) in collections.iter().zip(token_ids.iter()) {
        if !is_allowed(e, ListKind::Collection, &contract) {
            return Err(LendingError::CollectionNotAllowed);
        }
        let r = CollateralRef { contract, token_id };
        // The same card twice cannot be owned twice.
        if refs.contains(&r) {
            return Err(LendingError::NotOwner);
        }
        ensure_custody_ready(e, &r.contract, owner, &r.token_id)?;
        refs.push_back(r);
    }
    check_collection_limits(e, &refs)?;

    for r in refs.iter() {
        pull_nft(e, &r.contract, owner, &r.token_id);
    }

    let mut ids: Vec<u64> = Vec::new(e);
    if as_bundle {
        let cards = refs.len();
        let position = create_position(e, owner, CollateralKind::MergedBundle, refs);
        event::emit_deposit(e, owner, position.id, CollateralKind::MergedBundle, cards);
        ids.push_back(position.id);
    } else {
        for r in refs.iter() {
            let position = create_position(e, owner, CollateralKind::SingleCollection, vec![e, r]);
            event::emit_deposit(e, owner, position.id, CollateralKind::SingleCollection, 1);
            ids.push_back(position.id);
        }
    }
    log::debug!("deposited {} positions", ids.len());
    Ok(ids)
}

pub fn deposit_external_bundle(
    e: &Env,
    owner: &Address,
    bundle_contract: &Address,
    bundle_token_id: TokenId,
) -> Result<u64, LendingError> {
    owner.require_auth();
    if !is_allowed(e, ListKind::BundleContract, bundle_contract) {
        return Err(LendingError::BundleNotAllowed);
    }

    if !owns_token(e, bundle_contract, owner, &bundle_token_id) {
        return Err(LendingError::NotOwner);
    }

    let items = match BundleClient::new(e, bundle_contract).try_bundle_items(&bundle_token_id) {
        Ok(Ok(items)) => items,
        _ => return Err(LendingError::BundleNotAllowed),
    };
    if items.is_empty() {
        return Err(LendingError::InvalidDepositAmount);
    }
    let mut inner: Vec<CollateralRef> = Vec::new(e);
    for item in items.iter() {
        inner.push_back(CollateralRef {
            contract: item.collection,
            token_id: item.token_id,
        });
    }
    check_collection_limits(e, &inner)?;
    check_deposit_limit(e, bundle_contract, inner.len())?;
    ensure_operator_approval(e, bundle_contract, owner)?;

    pull_nft(e, bundle_contract, owner, &bundle_token_id);
    let position = create_position(
        e,
        owner,
        CollateralKind::ExternalBundle,
        vec![
            e,
            CollateralRef {
                contract: bundle_contract.clone(),
                token_id: bundle_token_id,
            },
        ],
    );
    event::emit_deposit(e, owner, position.id, CollateralKind::ExternalBundle, inner.len());
    Ok(position.id)
}

fn owns_token(e: &Env, contract: &Address, owner: &Address, token_id: &TokenId) -> bool {
    matches!(
        NftClient::new(e, contract).try_owner_of(token_id),
        Ok(Ok(current)) if current == *owner
    )
}

/// Returns the custodied cards of every position to `owner` and destroys
/// the positions.
pub fn withdraw(e: &Env, owner: &Address, position_ids: Vec<u64>) -> Result<(), LendingError> {
    owner.require_auth();
    if position_ids.is_empty() {
        return Err(LendingError::InvalidLength);
    }

    for id in position_ids.iter() {
        let position = read_position(e, id)?;
        if position.is_receipt() {
            return Err(LendingError::ReceiptPositionNotEligible);
        }
        if position.owner != *owner {
            return Err(LendingError::NotOwner);
        }
        if position.state == PositionState::Borrowed {
            return Err(LendingError::PositionBorrowed);
        }
        if has_unclaimed_winnings(e, id, owner) {
            return Err(LendingError::UnclaimedBalance);
        }

        if position.state == PositionState::Listed {
            remove_listed(e, id);
        }
        for r in position.collateral.iter() {
            release_nft(e, &r.contract, owner, &r.token_id);
        }
        remove_position(e, id);
        remove_user_deposit(e, owner, id);
        event::emit_withdraw(e, owner, id);
    }
    Ok(())
}
