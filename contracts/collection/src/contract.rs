//! Non-fungible deck card collection. Each token id has exactly one owner.

use crate::admin::{has_administrator, read_administrator, write_administrator};
use crate::allowance::{
    is_authorized_spender, read_approval_for_all, read_approved, write_approval_for_all,
    write_approved,
};
use crate::balance::{move_token, read_balance, read_owner, read_supply, write_balance, write_owner, write_supply};
use crate::error::CollectionError;
use crate::event;
use crate::metadata::{read_metadata, write_metadata, CollectionMetadata};
use crate::storage_types::TokenId;
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use soroban_token_sdk::TokenUtils;

#[contract]
pub struct Collection;

#[contractimpl]
impl Collection {
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        base_uri: String,
    ) -> Result<(), CollectionError> {
        if has_administrator(&e) {
            return Err(CollectionError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);

        write_metadata(
            &e,
            CollectionMetadata {
                name,
                symbol,
                base_uri,
            },
        );
        Ok(())
    }

    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), CollectionError> {
        let admin = read_administrator(&e)?;
        admin.require_auth();

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&e, &new_admin);
        TokenUtils::new(&e).events().set_admin(admin, new_admin);
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, CollectionError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, CollectionError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn base_uri(env: Env) -> Result<String, CollectionError> {
        Ok(read_metadata(&env)?.base_uri)
    }

    pub fn total_supply(env: Env) -> u64 {
        read_supply(&env)
    }

    // Mint & Burn

    pub fn mint(env: Env, to: Address, id: TokenId) -> Result<(), CollectionError> {
        read_administrator(&env)?.require_auth();
        mint_one(&env, &to, id)
    }

    pub fn mint_batch(env: Env, to: Address, ids: Vec<TokenId>) -> Result<(), CollectionError> {
        read_administrator(&env)?.require_auth();
        if ids.is_empty() {
            return Err(CollectionError::InvalidLength);
        }
        for id in ids.iter() {
            mint_one(&env, &to, id)?;
        }
        Ok(())
    }

    pub fn burn(env: Env, from: Address, id: TokenId) -> Result<(), CollectionError> {
        from.require_auth();
        let owner = read_owner(&env, id.clone()).ok_or(CollectionError::NonExistentToken)?;
        if owner != from {
            return Err(CollectionError::NotOwner);
        }
        write_balance(&env, from.clone(), read_balance(&env, from.clone()) - 1);
        write_owner(&env, id.clone(), None);
        write_approved(&env, id.clone(), None);
        write_supply(&env, read_supply(&env) - 1);
        event::emit_burn(&env, &from, &id);
        Ok(())
    }

    // Ownership

    pub fn owner_of(env: Env, id: TokenId) -> Result<Address, CollectionError> {
        read_owner(&env, id).ok_or(CollectionError::NonExistentToken)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        read_balance(&env, owner)
    }

    // Approvals

    pub fn approve(
        env: Env,
        owner: Address,
        operator: Option<Address>,
        id: TokenId,
    ) -> Result<(), CollectionError> {
        owner.require_auth();
        let current = read_owner(&env, id.clone()).ok_or(CollectionError::NonExistentToken)?;
        if current != owner {
            return Err(CollectionError::NotOwner);
        }
        write_approved(&env, id.clone(), operator);
        event::emit_approve(&env, &owner, &id);
        Ok(())
    }

    pub fn get_approved(env: Env, id: TokenId) -> Option<Address> {
        read_approved(&env, id)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        write_approval_for_all(&env, owner.clone(), operator.clone(), approved);
        event::emit_approval_for_all(&env, &owner, &operator, approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        read_approval_for_all(&env, owner, operator)
    }

    // Transfers

    pub fn transfer(env: Env, from: Address, to: Address, id: TokenId) -> Result<(), CollectionError> {
        from.require_auth();
        let owner = read_owner(&env, id.clone()).ok_or(CollectionError::NonExistentToken)?;
        if owner != from {
            return Err(CollectionError::NotOwner);
        }
        write_approved(&env, id.clone(), None);
        move_token(&env, &from, &to, id.clone());
        event::emit_transfer(&env, &from, &to, &id);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: TokenId,
    ) -> Result<(), CollectionError> {
        spender.require_auth();
        let owner = read_owner(&env, id.clone()).ok_or(CollectionError::NonExistentToken)?;
        if owner != from {
            return Err(CollectionError::NotOwner);
        }
        if !is_authorized_spender(&env, &from, &spender, &id) {
            return Err(CollectionError::NotApproved);
        }
        write_approved(&env, id.clone(), None);
        move_token(&env, &from, &to, id.clone());
        event::emit_transfer(&env, &from, &to, &id);
        Ok(())
    }
}

fn mint_one(env: &Env, to: &Address, id: TokenId) -> Result<(), CollectionError> {
    if read_owner(env, id.clone()).is_some() {
        return Err(CollectionError::AlreadyMinted);
    }
    write_owner(env, id.clone(), Some(to.clone()));
    write_balance(env, to.clone(), read_balance(env, to.clone()) + 1);
    write_supply(env, read_supply(env) + 1);
    event::emit_mint(env, to, &id);
    Ok(())
}
