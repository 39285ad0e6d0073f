#![cfg(test)]
extern crate std;

use crate::{contract::Bundle, BundleClient, BundleError, BundleItem, TokenId};
use deck_collection::{Collection, CollectionClient, TokenId as CardId};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, IntoVal, Vec};

fn create_collection<'a>(e: &Env, admin: &Address) -> CollectionClient<'a> {
    let collection = CollectionClient::new(e, &e.register_contract(None, Collection {}));
    collection.initialize(
        admin,
        &"Cards".into_val(e),
        &"CRD".into_val(e),
        &"ipfs://cards/".into_val(e),
    );
    collection
}

fn create_bundle<'a>(e: &Env, admin: &Address) -> BundleClient<'a> {
    let bundle = BundleClient::new(e, &e.register_contract(None, Bundle {}));
    bundle.initialize(admin);
    bundle
}

#[test]
fn test_deposit_and_withdraw_nfts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);
    let heroes = create_collection(&e, &admin);
    let weapons = create_collection(&e, &admin);
    let bundle = create_bundle(&e, &admin);

    heroes.mint_batch(&user, &vec![&e, CardId(1), CardId(2)]);
    weapons.mint(&user, &CardId(9));
    heroes.set_approval_for_all(&user, &bundle.address, &true);
    weapons.set_approval_for_all(&user, &bundle.address, &true);

    let collections: Vec<Address> = vec![&e, heroes.address.clone(), heroes.address.clone(), weapons.address.clone()];
    let ids: Vec<TokenId> = vec![&e, TokenId(1), TokenId(2), TokenId(9)];
    let bundle_id = bundle.deposit_nfts(&user, &collections, &ids);
    assert_eq!(bundle_id, TokenId(1));
    assert_eq!(bundle.owner_of(&bundle_id), user);
    assert_eq!(heroes.owner_of(&CardId(1)), bundle.address);
    assert_eq!(weapons.owner_of(&CardId(9)), bundle.address);

    let items = bundle.bundle_items(&bundle_id);
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.get(2).unwrap(),
        BundleItem {
            collection: weapons.address.clone(),
            token_id: TokenId(9)
        }
    );

    bundle.withdraw_nfts(&user, &bundle_id);
    assert_eq!(heroes.owner_of(&CardId(2)), user);
    assert_eq!(weapons.owner_of(&CardId(9)), user);
    assert_eq!(bundle.balance_of(&user), 0);
    assert_eq!(
        bundle.try_bundle_items(&bundle_id),
        Err(Ok(BundleError::NonExistentToken))
    );
}

#[test]
fn test_deposit_rejects_bad_input() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);
    let heroes = create_collection(&e, &admin);
    let bundle = create_bundle(&e, &admin);
    heroes.mint(&user, &CardId(1));
    heroes.set_approval_for_all(&user, &bundle.address, &true);

    assert_eq!(
        bundle.try_deposit_nfts(&user, &Vec::new(&e), &Vec::new(&e)),
        Err(Ok(BundleError::InvalidLength))
    );
    assert_eq!(
        bundle.try_deposit_nfts(&user, &vec![&e, heroes.address.clone()], &vec![&e, TokenId(1), TokenId(2)]),
        Err(Ok(BundleError::MismatchedLength))
    );
    assert_eq!(
        bundle.try_deposit_nfts(
            &user,
            &vec![&e, heroes.address.clone(), heroes.address.clone()],
            &vec![&e, TokenId(1), TokenId(1)]
        ),
        Err(Ok(BundleError::DuplicateItem))
    );
    // Nothing was escrowed by the failed calls
    assert_eq!(heroes.owner_of(&CardId(1)), user);
}

#[test]
fn test_transfer_from_bundle_token() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);
    let vault = Address::generate(&e);
    let heroes = create_collection(&e, &admin);
    let bundle = create_bundle(&e, &admin);
    heroes.mint(&user, &CardId(3));
    heroes.set_approval_for_all(&user, &bundle.address, &true);
    let bundle_id = bundle.deposit_nfts(&user, &vec![&e, heroes.address.clone()], &vec![&e, TokenId(3)]);

    assert_eq!(
        bundle.try_transfer_from(&vault, &user, &vault, &bundle_id),
        Err(Ok(BundleError::NotApproved))
    );
    bundle.set_approval_for_all(&user, &vault, &true);
    bundle.transfer_from(&vault, &user, &vault, &bundle_id);
    assert_eq!(bundle.owner_of(&bundle_id), vault);

    // Only the current holder can unwrap
    assert_eq!(
        bundle.try_withdraw_nfts(&user, &bundle_id),
        Err(Ok(BundleError::NotOwner))
    );
}

#[test]
fn test_approvals_outlive_default_ttl() {
    use crate::storage_types::DAY_IN_LEDGERS;
    use soroban_sdk::testutils::Ledger;

    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user = Address::generate(&e);
    let operator = Address::generate(&e);
    let heroes = create_collection(&e, &admin);
    let bundle = create_bundle(&e, &admin);
    heroes.mint(&user, &CardId(4));
    heroes.set_approval_for_all(&user, &bundle.address, &true);
    let bundle_id = bundle.deposit_nfts(&user, &vec![&e, heroes.address.clone()], &vec![&e, TokenId(4)]);

    bundle.approve(&user, &Some(operator.clone()), &bundle_id);
    bundle.set_approval_for_all(&user, &operator, &true);

    // Past the minimum persistent entry lifetime, still inside the instance bump
    e.ledger().with_mut(|li| li.sequence_number += DAY_IN_LEDGERS);

    assert_eq!(bundle.get_approved(&bundle_id), Some(operator.clone()));
    assert!(bundle.is_approved_for_all(&user, &operator));
    assert_eq!(bundle.bundle_items(&bundle_id).len(), 1);
    assert_eq!(bundle.owner_of(&bundle_id), user);
}
