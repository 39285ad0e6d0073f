use crate::error::LendingError;
use crate::external::NftClient;
use crate::storage_types::TokenId;
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    symbol_short, token, vec, Address, Env, IntoVal, Vec,
};

/// Pre-authorizes `token.transfer(current_contract, pair, amount)` so the
/// router can pull the swap input from this contract.
pub fn authorize_router_pull(e: &Env, token: &Address, pair: &Address, amount: i128) {
    let sub_invocation = SubContractInvocation {
        context: ContractContext {
            contract: token.clone(),
            fn_name: symbol_short!("transfer"),
            args: (e.current_contract_address(), pair.clone(), amount).into_val(e),
        },
        sub_invocations: vec![e],
    };

    let mut auth_entries = Vec::new(e);
    auth_entries.push_back(InvokerContractAuthEntry::Contract(sub_invocation));
    e.authorize_as_current_contract(auth_entries);
}

/// Fails with `NotOwner` unless `owner` holds `token_id` and has approved
/// this contract as operator.
pub fn ensure_custody_ready(
    e: &Env,
    contract: &Address,
    owner: &Address,
    token_id: &TokenId,
) -> Result<(), LendingError> {
    let client = NftClient::new(e, contract);
    match client.try_owner_of(token_id) {
        Ok(Ok(current)) if current == *owner => {}
        _ => return Err(LendingError::NotOwner),
    }
    ensure_operator_approval(e, contract, owner)
}

pub fn ensure_operator_approval(e: &Env, contract: &Address, owner: &Address) -> Result<(), LendingError> {
    let client = NftClient::new(e, contract);
    match client.try_is_approved_for_all(owner, &e.current_contract_address()) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(LendingError::NotOwner),
    }
}

/// Moves `token_id` from `owner` into contract custody.
pub fn pull_nft(e: &Env, contract: &Address, owner: &Address, token_id: &TokenId) {
    let this = e.current_contract_address();
    NftClient::new(e, contract).transfer_from(&this, owner, &this, token_id);
}

/// Returns `token_id` from contract custody to `to`.
pub fn release_nft(e: &Env, contract: &Address, to: &Address, token_id: &TokenId) {
    NftClient::new(e, contract).transfer(&e.current_contract_address(), to, token_id);
}

pub fn pay(e: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(e, token).transfer(from, to, &amount);
    }
}
