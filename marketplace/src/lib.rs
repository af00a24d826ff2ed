#![no_std]
#![allow(clippy::unused_unit)]

mod events;
mod types;
mod utils;

use common::storage::{get_persistent, store_data, store_persistent};
use events::MarketplaceEvent;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};
use utils::{
    contract_clients::get_payment_token_client,
    helpers::{
        calculate_total_price, get_listing_by_id, read_config, read_listing_count, release_custody,
        take_custody,
    },
    lock::OperationLock,
};

pub use types::{Error, Listing};
use types::{DataKey, FEE_ACCOUNT, FEE_PERCENT, PAYMENT_TOKEN};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    /// Fixes the fee account, fee percentage and payment token for the
    /// lifetime of the contract. None of them has a setter.
    ///
    /// `fee_percent` is a whole percent with no upper bound.
    pub fn __constructor(
        env: Env,
        fee_account: Address,
        fee_percent: u64,
        payment_token: Address,
    ) {
        store_data(&env, &FEE_ACCOUNT, &fee_account);
        store_data(&env, &FEE_PERCENT, &fee_percent);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &DataKey::ListingCount, &0u64);

        MarketplaceEvent::Initialized(fee_account, fee_percent, payment_token).publish(&env);
    }

    pub fn version() -> u32 {
        1
    }

    /// Takes custody of `asset_id` from `seller` and offers it at `price`.
    ///
    /// The marketplace must be approved on `asset_contract` for the asset.
    /// Nothing is recorded unless the registry transfer succeeds.
    ///
    /// `price` is not checked against the fee. A price where
    /// `price * (100 + fee_percent)` overflows `i128` is accepted, but every
    /// later `purchase` of it fails with `Overflow`. There is no delisting, so
    /// such an asset stays in custody for good.
    pub fn list(
        env: Env,
        seller: Address,
        asset_contract: Address,
        asset_id: u64,
        price: i128,
    ) -> Result<u64, Error> {
        let _lock = OperationLock::acquire(&env)?;
        seller.require_auth();

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let listing_id: u64 = read_listing_count(&env) + 1;
        take_custody(&env, &asset_contract, &seller, asset_id)?;

        let listing = Listing {
            id: listing_id,
            asset_contract: asset_contract.clone(),
            asset_id,
            price,
            seller: seller.clone(),
            sold: false,
        };
        store_persistent(&env, &DataKey::Listing(listing_id), &listing);
        store_data(&env, &DataKey::ListingCount, &listing_id);

        log!(&env, "listing {} offered at {}", listing_id, price);
        MarketplaceEvent::Offered(listing_id, asset_contract, asset_id, price, seller)
            .publish(&env);

        Ok(listing_id)
    }

    /// Buys listing `listing_id` for `payment_amount` of the payment token.
    ///
    /// The seller receives exactly the listing price. Everything above it,
    /// overpayment included, goes to the fee account.
    pub fn purchase(
        env: Env,
        buyer: Address,
        listing_id: u64,
        payment_amount: i128,
    ) -> Result<(), Error> {
        let _lock = OperationLock::acquire(&env)?;
        buyer.require_auth();

        // Priced before the range check; unknown ids price at 0 and are
        // rejected just below.
        let total_price: i128 = calculate_total_price(&env, listing_id)?;
        let mut listing: Listing = get_listing_by_id(&env, listing_id)?;

        if payment_amount < total_price {
            return Err(Error::InsufficientPayment);
        }
        if listing.sold {
            return Err(Error::AlreadySold);
        }

        let token_client: token::Client<'_> = get_payment_token_client(&env)?;
        if token_client.balance(&buyer) < payment_amount {
            return Err(Error::InsufficientBalance);
        }

        let fee_account: Address = read_config(&env, &FEE_ACCOUNT)?;
        let fee_amount: i128 = payment_amount - listing.price;

        token_client.transfer(&buyer, &listing.seller, &listing.price);
        if fee_amount > 0 {
            token_client.transfer(&buyer, &fee_account, &fee_amount);
        }

        listing.sold = true;
        store_persistent(&env, &DataKey::Listing(listing_id), &listing);

        release_custody(&env, &listing.asset_contract, &buyer, listing.asset_id)?;

        log!(&env, "listing {} bought, fee {}", listing_id, fee_amount);
        MarketplaceEvent::Bought(
            listing_id,
            listing.asset_contract,
            listing.asset_id,
            listing.price,
            listing.seller,
            buyer,
        )
        .publish(&env);

        Ok(())
    }

    pub fn get_total_price(env: Env, listing_id: u64) -> Result<i128, Error> {
        calculate_total_price(&env, listing_id)
    }

    pub fn get_listing(env: Env, listing_id: u64) -> Result<Listing, Error> {
        get_listing_by_id(&env, listing_id)
    }

    pub fn get_all_listings(env: Env) -> Vec<Listing> {
        let listing_count: u64 = read_listing_count(&env);
        let mut listings: Vec<Listing> = Vec::<Listing>::new(&env);

        for id in 1..=listing_count {
            if let Some(listing) = get_persistent(&env, &DataKey::Listing(id)) {
                listings.push_back(listing);
            }
        }

        listings
    }

    pub fn get_listing_count(env: Env) -> u64 {
        read_listing_count(&env)
    }

    pub fn get_fee_account(env: Env) -> Result<Address, Error> {
        read_config(&env, &FEE_ACCOUNT)
    }

    pub fn get_fee_percent(env: Env) -> Result<u64, Error> {
        read_config(&env, &FEE_PERCENT)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        read_config(&env, &PAYMENT_TOKEN)
    }
}
