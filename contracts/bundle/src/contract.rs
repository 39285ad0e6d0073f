//! Wraps cards from several collections into a single transferable bundle
//! token. The wrapped cards stay in this contract until the bundle is
//! released.

use crate::admin::{get_and_increase_bundle_id, has_administrator, read_administrator, write_administrator};
use crate::balance::{
    move_token, read_approval_for_all, read_approved, read_balance, read_owner,
    write_approval_for_all, write_approved, write_balance, write_owner,
};
use crate::collection::CollectionClient;
use crate::error::BundleError;
use crate::event;
use crate::items::{read_items, remove_items, write_items, BundleItem};
use crate::storage_types::{TokenId, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct Bundle;

#[contractimpl]
impl Bundle {
    pub fn initialize(e: Env, admin: Address) -> Result<(), BundleError> {
        if has_administrator(&e) {
            return Err(BundleError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, BundleError> {
        read_administrator(&e)
    }

    // Bundling

    /// Escrows every `(collections[i], token_ids[i])` card and mints one
    /// bundle token to `owner`. The owner must have approved this contract
    /// as operator on each collection.
    pub fn deposit_nfts(
        e: Env,
        owner: Address,
        collections: Vec<Address>,
        token_ids: Vec<TokenId>,
    ) -> Result<TokenId, BundleError> {
        owner.require_auth();
        if collections.is_empty() {
            return Err(BundleError::InvalidLength);
        }
        if collections.len() != token_ids.len() {
            return Err(BundleError::MismatchedLength);
        }
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let this = e.current_contract_address();
        let mut items: Vec<BundleItem> = Vec::new(&e);
        for (collection, token_id) in collections.iter().zip(token_ids.iter()) {
            let item = BundleItem {
                collection: collection.clone(),
                token_id: token_id.clone(),
            };
            if items.contains(&item) {
                return Err(BundleError::DuplicateItem);
            }
            CollectionClient::new(&e, &collection).transfer_from(&this, &owner, &this, &token_id);
            items.push_back(item);
        }

        let bundle_id = TokenId(get_and_increase_bundle_id(&e));
        write_items(&e, bundle_id.clone(), &items);
        write_owner(&e, bundle_id.clone(), Some(owner.clone()));
        write_balance(&e, owner.clone(), read_balance(&e, owner.clone()) + 1);

        log::debug!("bundle {} wraps {} cards", bundle_id.0, items.len());
        event::emit_bundle_created(&e, &owner, &bundle_id, items.len());
        Ok(bundle_id)
    }

    /// Burns the bundle token and hands every wrapped card back to its owner.
    pub fn withdraw_nfts(e: Env, owner: Address, bundle_id: TokenId) -> Result<(), BundleError> {
        owner.require_auth();
        let current = read_owner(&e, bundle_id.clone()).ok_or(BundleError::NonExistentToken)?;
        if current != owner {
            return Err(BundleError::NotOwner);
        }

        let this = e.current_contract_address();
        for item in read_items(&e, bundle_id.clone()).iter() {
            CollectionClient::new(&e, &item.collection).transfer(&this, &owner, &item.token_id);
        }

        remove_items(&e, bundle_id.clone());
        write_owner(&e, bundle_id.clone(), None);
        write_approved(&e, bundle_id.clone(), None);
        write_balance(&e, owner.clone(), read_balance(&e, owner.clone()) - 1);
        event::emit_bundle_released(&e, &owner, &bundle_id);
        Ok(())
    }

    pub fn bundle_items(e: Env, bundle_id: TokenId) -> Result<Vec<BundleItem>, BundleError> {
        if read_owner(&e, bundle_id.clone()).is_none() {
            return Err(BundleError::NonExistentToken);
        }
        Ok(read_items(&e, bundle_id))
    }

    // NFT surface

    pub fn owner_of(e: Env, id: TokenId) -> Result<Address, BundleError> {
        read_owner(&e, id).ok_or(BundleError::NonExistentToken)
    }

    pub fn balance_of(e: Env, owner: Address) -> u64 {
        read_balance(&e, owner)
    }

    pub fn approve(e: Env, owner: Address, operator: Option<Address>, id: TokenId) -> Result<(), BundleError> {
        owner.require_auth();
        if read_owner(&e, id.clone()).ok_or(BundleError::NonExistentToken)? != owner {
            return Err(BundleError::NotOwner);
        }
        write_approved(&e, id, operator);
        Ok(())
    }

    pub fn get_approved(e: Env, id: TokenId) -> Option<Address> {
        read_approved(&e, id)
    }

    pub fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        write_approval_for_all(&e, owner, operator, approved);
    }

    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        read_approval_for_all(&e, owner, operator)
    }

    pub fn transfer(e: Env, from: Address, to: Address, id: TokenId) -> Result<(), BundleError> {
        from.require_auth();
        if read_owner(&e, id.clone()).ok_or(BundleError::NonExistentToken)? != from {
            return Err(BundleError::NotOwner);
        }
        move_token(&e, &from, &to, id.clone());
        event::emit_transfer(&e, &from, &to, &id);
        Ok(())
    }

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: TokenId,
    ) -> Result<(), BundleError> {
        spender.require_auth();
        if read_owner(&e, id.clone()).ok_or(BundleError::NonExistentToken)? != from {
            return Err(BundleError::NotOwner);
        }
        let approved = spender == from
            || read_approval_for_all(&e, from.clone(), spender.clone())
            || read_approved(&e, id.clone()).as_ref() == Some(&spender);
        if !approved {
            return Err(BundleError::NotApproved);
        }
        move_token(&e, &from, &to, id.clone());
        event::emit_transfer(&e, &from, &to, &id);
        Ok(())
    }
}
