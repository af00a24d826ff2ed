#![cfg(test)]

use super::{MarketplaceTest, INITIAL_BALANCE};
use crate::types::{Error, Listing};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{log, Address, Env, IntoVal, Symbol};

const ONE_UNIT: i128 = 1_0000000; // 1 token in 7 decimals

#[test]
fn test_purchase_end_to_end() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &total_price);
    log!(&test.env, "bought {} for {}", listing_id, total_price);

    assert_eq!(test.token_client.balance(&test.alice), ONE_UNIT);
    assert_eq!(
        test.token_client.balance(&test.fee_account),
        total_price - ONE_UNIT
    );
    assert_eq!(
        test.token_client.balance(&test.bob),
        INITIAL_BALANCE - total_price
    );
    assert_eq!(
        test.token_client.balance(&test.marketplace_client.address),
        0
    );

    assert_eq!(test.nft_client.owner_of(&asset_id), test.bob);
    assert_eq!(test.nft_client.balance_of(&test.bob), 1);

    let listing: Listing = test.marketplace_client.get_listing(&listing_id);
    assert!(listing.sold);
    assert_eq!(listing.seller, test.alice);
    assert_eq!(listing.price, ONE_UNIT);
}

#[test]
fn test_purchase_only_once() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &total_price);
    let bob_balance: i128 = test.token_client.balance(&test.bob);
    let fee_balance: i128 = test.token_client.balance(&test.fee_account);

    let result = test
        .marketplace_client
        .try_purchase(&test.bob, &listing_id, &total_price);

    assert_eq!(result, Err(Ok(Error::AlreadySold)));
    assert_eq!(test.token_client.balance(&test.bob), bob_balance);
    assert_eq!(test.token_client.balance(&test.fee_account), fee_balance);
    assert_eq!(test.token_client.balance(&test.alice), ONE_UNIT);
    assert_eq!(test.nft_client.owner_of(&asset_id), test.bob);
}

#[test]
fn test_purchase_with_insufficient_payment() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    // the bare price is not enough once the fee is added
    let result = test
        .marketplace_client
        .try_purchase(&test.bob, &listing_id, &(total_price - 1));

    assert_eq!(result, Err(Ok(Error::InsufficientPayment)));
    assert!(!test.marketplace_client.get_listing(&listing_id).sold);
    assert_eq!(test.token_client.balance(&test.bob), INITIAL_BALANCE);
    assert_eq!(test.token_client.balance(&test.alice), 0);
    assert_eq!(test.token_client.balance(&test.fee_account), 0);
    assert_eq!(
        test.nft_client.owner_of(&asset_id),
        test.marketplace_client.address
    );
}

#[test]
fn test_purchase_unknown_listing() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_from_alice(ONE_UNIT);

    for id in [0_u64, listing_id + 1] {
        let result = test
            .marketplace_client
            .try_purchase(&test.bob, &id, &INITIAL_BALANCE);
        assert_eq!(result, Err(Ok(Error::NotFound)));
    }

    assert_eq!(test.token_client.balance(&test.bob), INITIAL_BALANCE);
}

#[test]
fn test_overpayment_goes_to_fee_account() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);
    let payment: i128 = total_price + 5_000;

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &payment);

    assert_eq!(test.token_client.balance(&test.alice), ONE_UNIT);
    assert_eq!(
        test.token_client.balance(&test.fee_account),
        payment - ONE_UNIT
    );
    assert_eq!(
        test.token_client.balance(&test.bob),
        INITIAL_BALANCE - payment
    );
}

#[test]
fn test_truncated_fee_pays_seller_only() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    // 2 * 102 / 100 floors back to the bare price
    let (listing_id, asset_id) = test.list_from_alice(2);
    assert_eq!(test.marketplace_client.get_total_price(&listing_id), 2);

    test.marketplace_client.purchase(&test.bob, &listing_id, &2);

    assert_eq!(test.token_client.balance(&test.alice), 2);
    assert_eq!(test.token_client.balance(&test.fee_account), 0);
    assert_eq!(test.nft_client.owner_of(&asset_id), test.bob);
}

#[test]
fn test_purchase_without_funds() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);
    let broke: Address = Address::generate(&test.env);

    let result = test
        .marketplace_client
        .try_purchase(&broke, &listing_id, &total_price);

    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    assert!(!test.marketplace_client.get_listing(&listing_id).sold);
    assert_eq!(
        test.nft_client.owner_of(&asset_id),
        test.marketplace_client.address
    );
}

#[test]
fn test_buyer_can_relist() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &total_price);

    // bob relists what he bought
    test.nft_client
        .approve(&test.bob, &test.marketplace_client.address, &asset_id);
    let relisted: u64 = test.marketplace_client.list(
        &test.bob,
        &test.nft_client.address,
        &asset_id,
        &(2 * ONE_UNIT),
    );

    assert_eq!(relisted, 2);
    assert!(test.marketplace_client.get_listing(&listing_id).sold);
    assert!(!test.marketplace_client.get_listing(&relisted).sold);
    assert_eq!(
        test.nft_client.owner_of(&asset_id),
        test.marketplace_client.address
    );
}

#[test]
fn test_bought_event() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, asset_id) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &total_price);

    let (name, payload) = test.last_marketplace_event();
    assert_eq!(name, Symbol::new(&test.env, "Bought"));
    assert_eq!(payload.len(), 6);

    let emitted_id: u64 = payload.get(0).unwrap().into_val(&test.env);
    let asset_contract: Address = payload.get(1).unwrap().into_val(&test.env);
    let emitted_asset: u64 = payload.get(2).unwrap().into_val(&test.env);
    let price: i128 = payload.get(3).unwrap().into_val(&test.env);
    let seller: Address = payload.get(4).unwrap().into_val(&test.env);
    let buyer: Address = payload.get(5).unwrap().into_val(&test.env);

    assert_eq!(emitted_id, listing_id);
    assert_eq!(asset_contract, test.nft_client.address);
    assert_eq!(emitted_asset, asset_id);
    assert_eq!(price, ONE_UNIT);
    assert_eq!(seller, test.alice);
    assert_eq!(buyer, test.bob);
}

#[test]
fn test_underpaying_sold_listing() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_from_alice(ONE_UNIT);
    let total_price: i128 = test.marketplace_client.get_total_price(&listing_id);

    test.marketplace_client
        .purchase(&test.bob, &listing_id, &total_price);

    // payment is checked before the sold flag
    let result = test
        .marketplace_client
        .try_purchase(&test.bob, &listing_id, &(total_price - 1));
    assert_eq!(result, Err(Ok(Error::InsufficientPayment)));
}

#[test]
fn test_unknown_listing_with_zero_payment() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_from_alice(ONE_UNIT);

    // range is checked before payment
    let result = test
        .marketplace_client
        .try_purchase(&test.bob, &(listing_id + 1), &0);
    assert_eq!(result, Err(Ok(Error::NotFound)));

    let result = test.marketplace_client.try_purchase(&test.bob, &0, &0);
    assert_eq!(result, Err(Ok(Error::NotFound)));
}
