use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    TokenNotFound = 3,
    NotOwner = 4,
    Unauthorized = 5,
    SelfApproval = 6,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenCount,
    Token(u64),                      // Owner and metadata for each token ID
    Balance(Address),                // Number of tokens held by an address
    Approved(u64),                   // Single-token approval
    Operator(Address, Address),      // (owner, operator) blanket approval
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Token {
    pub owner: Address,
    pub token_uri: String,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const NAME: Symbol = symbol_short!("NAME");
pub const SYMBOL: Symbol = symbol_short!("SYMBOL");
