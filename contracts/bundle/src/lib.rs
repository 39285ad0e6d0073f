#![no_std]

mod admin;
mod balance;
mod collection;
mod contract;
mod error;
mod event;
mod items;
mod storage_types;
mod test;

pub use crate::contract::{Bundle, BundleClient};
pub use crate::error::BundleError;
pub use crate::items::BundleItem;
pub use crate::storage_types::TokenId;
