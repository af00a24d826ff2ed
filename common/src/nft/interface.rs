use soroban_sdk::{contractclient, Address, Env, String};
use super::types::Error;

/// Ownership surface of an asset registry, as consumed by the marketplace.
#[contractclient(name = "NFTContractClient")]
pub trait NFTInterface {
    fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error>;
    fn version() -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn balance_of(env: Env, owner: Address) -> u64;
    fn total_supply(env: Env) -> u64;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool)
        -> Result<(), Error>;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
}
