use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingError {
    // Setup
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the administrator.
    Unauthorized = 3,
    /// Empty input array.
    InvalidLength = 10,
    /// Paired input arrays differ in length.
    MismatchedLength = 11,

    // Allow lists
    TokenNotAllowed = 20,
    CollectionNotAllowed = 21,
    BundleNotAllowed = 22,
    /// Target is neither an allowed collection nor an allowed bundle contract.
    CollectionNotAcceptable = 23,
    AlreadyAdded = 24,
    AlreadyRemoved = 25,

    // Fees, buyback and treasury
    InvalidFeeAmount = 30,
    InvalidBurnPercent = 31,
    InvalidFeeId = 32,
    AlreadyLinked = 33,
    NotLinked = 34,
    InvalidRate = 35,
    BuybackRateNotSet = 36,
    SwapFailed = 37,
    NoWithdrawableAmount = 38,

    // Deposits
    InvalidConfigAmount = 40,
    DepositLimitExceeded = 41,
    /// Merged bundle size is outside the configured bounds.
    InvalidDepositAmount = 42,
    BundleModeDisabled = 43,

    // Position state machine
    NotOwner = 50,
    InvalidPositionId = 51,
    AlreadyListed = 52,
    PositionListed = 53,
    PositionBorrowed = 54,
    AlreadyBorrowed = 55,
    NotListedForLend = 56,
    LenderMismatch = 57,
    NotBorrowed = 58,
    ReceiptPositionNotClaimable = 59,
    ReceiptPositionNotEligible = 60,
    UnclaimedBalance = 61,

    // Lend terms
    InvalidWinningRate = 70,
    InvalidDuration = 71,
    InvalidPrepaySetting = 72,

    // Funds and claims
    InsufficientFunds = 80,
    NotMatured = 81,
    NothingToClaim = 82,
    NotAuthorized = 83,
    /// Negative amount or arithmetic overflow.
    InvalidAmount = 84,
}
