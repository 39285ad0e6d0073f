#![cfg(test)]
extern crate std;

use crate::{contract::Collection, storage_types::TokenId, CollectionClient, CollectionError};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, IntoVal, Vec};

fn create_collection<'a>(e: &Env, admin: &Address) -> CollectionClient<'a> {
    let collection = CollectionClient::new(e, &e.register_contract(None, Collection {}));
    collection.initialize(
        admin,
        &"Deck Cards".into_val(e),
        &"DECK".into_val(e),
        &"ipfs://deck/".into_val(e),
    );
    collection
}

#[test]
fn test_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    collection.mint(&user1, &TokenId(1));
    assert_eq!(collection.owner_of(&TokenId(1)), user1);
    assert_eq!(collection.balance_of(&user1), 1);
    assert_eq!(collection.total_supply(), 1);

    // Same id twice
    assert_eq!(
        collection.try_mint(&user1, &TokenId(1)),
        Err(Ok(CollectionError::AlreadyMinted))
    );
}

#[test]
fn test_batch_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    let ids: Vec<TokenId> = vec![&e, TokenId(1), TokenId(2), TokenId(3)];
    collection.mint_batch(&user1, &ids);
    assert_eq!(collection.balance_of(&user1), 3);
    assert_eq!(collection.owner_of(&TokenId(3)), user1);

    assert_eq!(
        collection.try_mint_batch(&user1, &Vec::new(&e)),
        Err(Ok(CollectionError::InvalidLength))
    );
}

#[test]
fn test_owner_of_missing_token() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    assert_eq!(
        collection.try_owner_of(&TokenId(42)),
        Err(Ok(CollectionError::NonExistentToken))
    );
}

#[test]
fn test_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    collection.mint(&user1, &TokenId(1));
    collection.transfer(&user1, &user2, &TokenId(1));
    assert_eq!(collection.owner_of(&TokenId(1)), user2);
    assert_eq!(collection.balance_of(&user1), 0);
    assert_eq!(collection.balance_of(&user2), 1);

    // user1 no longer owns it
    assert_eq!(
        collection.try_transfer(&user1, &user2, &TokenId(1)),
        Err(Ok(CollectionError::NotOwner))
    );
}

#[test]
fn test_transfer_from_requires_approval() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let operator = Address::generate(&e);
    let receiver = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    collection.mint(&owner, &TokenId(7));
    assert_eq!(
        collection.try_transfer_from(&operator, &owner, &receiver, &TokenId(7)),
        Err(Ok(CollectionError::NotApproved))
    );

    collection.set_approval_for_all(&owner, &operator, &true);
    assert!(collection.is_approved_for_all(&owner, &operator));
    collection.transfer_from(&operator, &owner, &receiver, &TokenId(7));
    assert_eq!(collection.owner_of(&TokenId(7)), receiver);
}

#[test]
fn test_single_approval_is_cleared_on_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let operator = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    collection.mint(&owner, &TokenId(2));
    collection.approve(&owner, &Some(operator.clone()), &TokenId(2));
    assert_eq!(collection.get_approved(&TokenId(2)), Some(operator.clone()));

    collection.transfer_from(&operator, &owner, &operator, &TokenId(2));
    assert_eq!(collection.owner_of(&TokenId(2)), operator);
    assert_eq!(collection.get_approved(&TokenId(2)), None);
}

#[test]
fn test_burn() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    collection.mint(&user1, &TokenId(5));
    collection.burn(&user1, &TokenId(5));
    assert_eq!(collection.balance_of(&user1), 0);
    assert_eq!(collection.total_supply(), 0);
    assert_eq!(
        collection.try_owner_of(&TokenId(5)),
        Err(Ok(CollectionError::NonExistentToken))
    );
}

#[test]
fn test_initialize_twice() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let collection = create_collection(&e, &admin);

    assert_eq!(
        collection.try_initialize(
            &admin,
            &"x".into_val(&e),
            &"x".into_val(&e),
            &"x".into_val(&e)
        ),
        Err(Ok(CollectionError::AlreadyInitialized))
    );
}
