#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
mod error;
mod event;
mod metadata;
mod storage_types;
mod test;

pub use crate::contract::{Collection, CollectionClient};
pub use crate::error::CollectionError;
pub use crate::metadata::CollectionMetadata;
pub use crate::storage_types::TokenId;
