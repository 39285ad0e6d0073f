use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectionError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AlreadyMinted = 10,
    NonExistentToken = 11,
    NotOwner = 12,
    NotApproved = 13,
    InvalidLength = 14,
}
