//! Interfaces of the contracts the lending master talks to.

use crate::storage_types::TokenId;
use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

/// One card wrapped by an external bundle token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BundleItem {
    pub collection: Address,
    pub token_id: TokenId,
}

#[allow(dead_code)]
#[contractclient(name = "NftClient")]
pub trait NftInterface {
    fn owner_of(env: Env, id: TokenId) -> Address;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer(env: Env, from: Address, to: Address, id: TokenId);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: TokenId);
}

#[allow(dead_code)]
#[contractclient(name = "BundleClient")]
pub trait BundleInterface {
    fn bundle_items(env: Env, bundle_id: TokenId) -> Vec<BundleItem>;
}

#[allow(dead_code)]
#[contractclient(name = "RouterClient")]
pub trait RouterInterface {
    fn get_amounts_out(env: Env, amount_in: i128, path: Vec<Address>) -> Vec<i128>;
    fn router_pair_for(env: Env, token_a: Address, token_b: Address) -> Address;
    fn swap_exact_tokens_for_tokens(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;
}
