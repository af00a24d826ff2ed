use common::{
    nft::types::Error as RegistryError,
    storage::{get_data, get_persistent},
};
use soroban_sdk::{Address, Env, InvokeError, Symbol, TryFromVal, Val};

use crate::types::{DataKey, Error, Listing, FEE_PERCENT};

use super::contract_clients::get_nft_client;

pub fn read_config<V>(env: &Env, key: &Symbol) -> Result<V, Error>
where
    V: TryFromVal<Env, Val>,
{
    get_data(env, key).ok_or(Error::NotInitialized)
}

pub fn read_listing_count(env: &Env) -> u64 {
    get_data(env, &DataKey::ListingCount).unwrap_or(0)
}

pub fn get_listing_by_id(env: &Env, listing_id: u64) -> Result<Listing, Error> {
    if listing_id == 0 || listing_id > read_listing_count(env) {
        return Err(Error::NotFound);
    }
    get_persistent(env, &DataKey::Listing(listing_id)).ok_or(Error::NotFound)
}

/// `price * (100 + fee_percent) / 100`, floored.
///
/// Ids that were never listed read as a zero price, so the total is 0 rather
/// than an error.
pub fn calculate_total_price(env: &Env, listing_id: u64) -> Result<i128, Error> {
    let price: i128 = get_persistent::<_, Listing>(env, &DataKey::Listing(listing_id))
        .map(|listing| listing.price)
        .unwrap_or(0);
    let fee_percent: u64 = read_config(env, &FEE_PERCENT)?;

    apply_fee(price, fee_percent)
}

pub fn apply_fee(price: i128, fee_percent: u64) -> Result<i128, Error> {
    let multiplier: i128 = 100 + i128::from(fee_percent);
    price
        .checked_mul(multiplier)
        .map(|gross| gross / 100)
        .ok_or(Error::Overflow)
}

/// Moves `asset_id` from `seller` into marketplace custody.
pub fn take_custody(
    env: &Env,
    asset_contract: &Address,
    seller: &Address,
    asset_id: u64,
) -> Result<(), Error> {
    let marketplace: Address = env.current_contract_address();
    match get_nft_client(env, asset_contract).try_transfer_from(
        &marketplace,
        seller,
        &marketplace,
        &asset_id,
    ) {
        Ok(_) => Ok(()),
        Err(err) => Err(registry_error(err)),
    }
}

/// Hands `asset_id` from marketplace custody to `buyer`.
pub fn release_custody(
    env: &Env,
    asset_contract: &Address,
    buyer: &Address,
    asset_id: u64,
) -> Result<(), Error> {
    let marketplace: Address = env.current_contract_address();
    match get_nft_client(env, asset_contract).try_transfer(&marketplace, buyer, &asset_id) {
        Ok(_) => Ok(()),
        Err(err) => Err(registry_error(err)),
    }
}

fn registry_error(err: Result<RegistryError, InvokeError>) -> Error {
    match err {
        Ok(RegistryError::NotOwner) => Error::NotTokenOwner,
        Ok(RegistryError::TokenNotFound) => Error::TokenNotFound,
        // missing approval or anything else the registry aborts with
        Ok(_) | Err(_) => Error::Unauthorized,
    }
}
