#![cfg(test)]

use super::{MarketplaceTest, BUYER_FUNDS};
use crate::types::{Custody, Error, Listing};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_purchase_pays_seller_and_transfers_token() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let price: i128 = 10;
    let (listing_id, token_id) = test.list_sneaker(price);

    let seller_balance: i128 = test.token_client.balance(&test.alice);
    test.marketplace_client
        .purchase(&listing_id, &test.bob, &price);

    assert_eq!(test.token_client.balance(&test.alice), seller_balance + price);
    assert_eq!(test.token_client.balance(&test.bob), BUYER_FUNDS - price);
    assert_eq!(test.nft_client.owner_of(&token_id), test.bob);

    let listing: Listing = test.marketplace_client.get_listing(&listing_id);
    assert!(listing.sold);
    assert_eq!(listing.custody, Custody::Buyer(test.bob.clone()));
    assert_eq!(listing.seller, test.alice);
}

#[test]
fn test_purchase_already_sold_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_sneaker(10);

    test.marketplace_client.purchase(&listing_id, &test.bob, &10);

    let res = test
        .marketplace_client
        .try_purchase(&listing_id, &test.bob, &10);
    assert_eq!(res, Err(Ok(Error::AlreadySold)));

    let carol: Address = Address::generate(&test.env);
    let res = test.marketplace_client.try_purchase(&listing_id, &carol, &10);
    assert_eq!(res, Err(Ok(Error::AlreadySold)));

    // the buyer was only charged once
    assert_eq!(test.token_client.balance(&test.bob), BUYER_FUNDS - 10);
}

#[test]
fn test_purchase_without_paying_price_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, token_id) = test.list_sneaker(10);

    let res = test.marketplace_client.try_purchase(&listing_id, &test.bob, &0);
    assert_eq!(res, Err(Ok(Error::InsufficientPayment)));

    let res = test.marketplace_client.try_purchase(&listing_id, &test.bob, &9);
    assert_eq!(res, Err(Ok(Error::InsufficientPayment)));

    let listing: Listing = test.marketplace_client.get_listing(&listing_id);
    assert!(!listing.sold);
    assert_eq!(listing.custody, Custody::Marketplace);
    assert_eq!(test.token_client.balance(&test.bob), BUYER_FUNDS);
    assert_eq!(test.token_client.balance(&test.alice), 0);
    assert_eq!(
        test.nft_client.owner_of(&token_id),
        test.marketplace_client.address
    );
}

#[test]
fn test_purchase_unknown_listing_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    test.list_sneaker(10);

    let res = test.marketplace_client.try_purchase(&2, &test.bob, &10);
    assert_eq!(res, Err(Ok(Error::ListingNotFound)));
}

#[test]
fn test_purchase_without_funds_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_sneaker(10);
    let carol: Address = Address::generate(&test.env);

    let res = test.marketplace_client.try_purchase(&listing_id, &carol, &10);
    assert_eq!(res, Err(Ok(Error::InsufficientBalance)));
    assert!(!test.marketplace_client.get_listing(&listing_id).sold);
}

#[test]
fn test_overpayment_only_charges_price() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_sneaker(10);

    test.marketplace_client.purchase(&listing_id, &test.bob, &25);

    assert_eq!(test.token_client.balance(&test.bob), BUYER_FUNDS - 10);
    assert_eq!(test.token_client.balance(&test.alice), 10);
}

#[test]
fn test_purchase_not_for_sale_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, token_id) = test.list_sneaker(10);

    assert!(!test
        .marketplace_client
        .toggle_for_sale(&listing_id, &test.alice));

    let res = test
        .marketplace_client
        .try_purchase(&listing_id, &test.bob, &10);
    assert_eq!(res, Err(Ok(Error::NotForSale)));

    assert!(test
        .marketplace_client
        .toggle_for_sale(&listing_id, &test.alice));
    test.marketplace_client.purchase(&listing_id, &test.bob, &10);
    assert_eq!(test.nft_client.owner_of(&token_id), test.bob);
}

#[test]
fn test_toggle_for_sale_by_other_account_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (listing_id, _) = test.list_sneaker(10);

    let res = test
        .marketplace_client
        .try_toggle_for_sale(&listing_id, &test.bob);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));
    assert!(test.marketplace_client.get_listing(&listing_id).for_sale);
}

#[test]
fn test_buyer_can_relist_purchased_token() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let (first_listing, token_id) = test.list_sneaker(10);
    test.marketplace_client
        .purchase(&first_listing, &test.bob, &10);

    test.nft_client
        .approve(&test.bob, &test.marketplace_client.address, &token_id);
    let second_listing: u64 = test.marketplace_client.create_listing(
        &test.bob,
        &test.nft_client.address,
        &token_id,
        &15,
    );
    assert_eq!(second_listing, 2);

    // the sold listing stays on record untouched
    let old: Listing = test.marketplace_client.get_listing(&first_listing);
    assert!(old.sold);
    assert_eq!(old.seller, test.alice);

    let new: Listing = test.marketplace_client.get_listing(&second_listing);
    assert!(!new.sold);
    assert_eq!(new.seller, test.bob);
    assert_eq!(
        test.nft_client.owner_of(&token_id),
        test.marketplace_client.address
    );

    // price lookups by token resolve to the live listing
    let repriced: u64 = test.marketplace_client.modify_price_by_token(
        &test.nft_client.address,
        &token_id,
        &test.bob,
        &12,
    );
    assert_eq!(repriced, second_listing);
    assert_eq!(test.marketplace_client.get_listing(&second_listing).price, 12);
}
