pub mod buyback;
pub mod deck;
pub mod deposit;
pub mod lending;
pub mod winning;
