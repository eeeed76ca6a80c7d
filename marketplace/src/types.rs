use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidPrice = 3,
    ListingNotFound = 4,
    AlreadySold = 5,
    InsufficientPayment = 6,
    Unauthorized = 7,
    NotForSale = 8,
    InsufficientBalance = 9,
}

/// Who holds the listed token. The marketplace keeps it in escrow from
/// listing until a sale hands it to the buyer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Custody {
    Marketplace,
    Buyer(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub id: u64,
    pub asset_contract: Address,
    pub token_id: u64,
    pub seller: Address,
    pub price: i128,
    pub sold: bool,
    pub for_sale: bool,
    pub custody: Custody,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),
    ListingCount,
    TokenListing(Address, u64), // Latest listing id for (asset contract, token id)
    SellerListings(Address),    // Listings created by a seller
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
