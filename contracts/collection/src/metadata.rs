use soroban_sdk::{contracttype, Env, String};

use crate::error::CollectionError;
use crate::storage_types::DataKey;

#[derive(Clone)]
#[contracttype]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

pub fn write_metadata(e: &Env, metadata: CollectionMetadata) {
    let key = DataKey::Metadata;
    e.storage().instance().set(&key, &metadata);
}

pub fn read_metadata(e: &Env) -> Result<CollectionMetadata, CollectionError> {
    let key = DataKey::Metadata;
    e.storage()
        .instance()
        .get(&key)
        .ok_or(CollectionError::NotInitialized)
}
