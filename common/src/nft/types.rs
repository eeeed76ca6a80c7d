use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotOwner = 3,
    NotApproved = 4,
    NotInitialized = 5,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenCount,
    Owner(u64),          // Current holder of a token
    Approved(u64),       // Single operator allowed to move a token
    TokenUri(u64),
    Balance(Address),    // Number of tokens held by an address
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
