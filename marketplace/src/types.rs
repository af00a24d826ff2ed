use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidPrice = 1,
    NotFound = 2,
    InsufficientPayment = 3,
    AlreadySold = 4,
    Unauthorized = 5,
    ReentrancyRejected = 6,
    NotTokenOwner = 7,
    TokenNotFound = 8,
    InsufficientBalance = 9,
    Overflow = 10,
    NotInitialized = 11,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub id: u64,
    pub asset_contract: Address,
    pub asset_id: u64,
    pub price: i128,
    pub seller: Address,
    pub sold: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),
    ListingCount,
    Locked, // Set while list or purchase is executing
}

pub const FEE_ACCOUNT: Symbol = symbol_short!("FEE_ACCT");
pub const FEE_PERCENT: Symbol = symbol_short!("FEE_PCT");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
