use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BundleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidLength = 10,
    MismatchedLength = 11,
    DuplicateItem = 12,
    NonExistentToken = 20,
    NotOwner = 21,
    NotApproved = 22,
}
