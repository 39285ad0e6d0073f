use crate::storage_types::TokenId;
use soroban_sdk::{contractclient, Address, Env};

/// The subset of the collection interface a bundle needs to escrow cards.
#[allow(dead_code)]
#[contractclient(name = "CollectionClient")]
pub trait CollectionInterface {
    fn owner_of(env: Env, id: TokenId) -> Address;
    fn transfer(env: Env, from: Address, to: Address, id: TokenId);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: TokenId);
}
