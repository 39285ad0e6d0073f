#![no_std]

mod actions;
mod admin;
mod allow_list;
mod contract;
mod error;
mod event;
mod external;
mod position;
mod service_fee;
mod storage_types;
mod token_interaction;
mod treasury;
mod user_info;

pub use crate::actions::buyback::{Buyback, FeeSplit};
pub use crate::actions::winning::{WinningDistribution, WinningShare};
pub use crate::admin::{AmountRange, Config};
pub use crate::allow_list::ListKind;
pub use crate::contract::{DepositInfo, LendingMaster, LendingMasterClient};
pub use crate::error::LendingError;
pub use crate::external::BundleItem;
pub use crate::position::{
    BorrowInfo, CollateralKind, CollateralRef, LendTerms, Position, PositionState, WinningSplit,
};
pub use crate::service_fee::ServiceFee;
pub use crate::storage_types::TokenId;
