#![no_std]
#![allow(clippy::unused_unit)]

mod events;
pub mod ledger;
mod storage;
pub mod types;
mod utils;

use events::MarketplaceEvent;
use ledger::ListingLedger;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};
use storage::{get_data, has_data, store_data};
use types::{DataKey, Error, Listing, ADMIN, PAYMENT_TOKEN};
use utils::helpers::{ensure_balance, pay_seller, release_custody, take_custody};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &DataKey::ListingCount, &0u64);

        MarketplaceEvent::Initialized(admin, payment_token).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        MarketplaceEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    pub fn set_payment_token(env: Env, token_addr: Address) -> Result<(), Error> {
        require_admin(&env)?;
        store_data(&env, &PAYMENT_TOKEN, &token_addr);
        Ok(())
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        get_data(&env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)
    }

    /// Lists `token_id` of `asset_contract` at `price` and moves the token into
    /// marketplace custody. Returns the new listing id.
    pub fn create_listing(
        env: Env,
        seller: Address,
        asset_contract: Address,
        token_id: u64,
        price: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();
        require_initialized(&env)?;

        let listing: Listing =
            ListingLedger::new(&env).insert(&asset_contract, token_id, price, &seller)?;
        take_custody(&env, &listing);

        let listing_id: u64 = listing.id;
        MarketplaceEvent::Offered(listing).publish(&env);

        Ok(listing_id)
    }

    /// Buys a listing. `payment` is the most the buyer is willing to pay;
    /// exactly the listed price is transferred to the seller.
    pub fn purchase(env: Env, listing_id: u64, buyer: Address, payment: i128) -> Result<(), Error> {
        buyer.require_auth();
        require_initialized(&env)?;

        let mut ledger = ListingLedger::new(&env);
        let listing: Listing = ledger.get(listing_id)?;
        ListingLedger::ensure_purchasable(&listing, payment)?;
        ensure_balance(&env, &buyer, listing.price)?;

        let listing: Listing = ledger.settle(listing_id, &buyer, payment)?;
        release_custody(&env, &listing, &buyer);
        pay_seller(&env, &buyer, &listing);

        MarketplaceEvent::Bought(listing, buyer).publish(&env);
        Ok(())
    }

    pub fn modify_price(
        env: Env,
        listing_id: u64,
        caller: Address,
        new_price: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let listing: Listing = ListingLedger::new(&env).reprice(listing_id, &caller, new_price)?;
        MarketplaceEvent::PriceModified(listing.id, listing.price).publish(&env);
        Ok(())
    }

    // Same as `modify_price`, resolving the listing from the token it sells.
    pub fn modify_price_by_token(
        env: Env,
        asset_contract: Address,
        token_id: u64,
        caller: Address,
        new_price: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();

        let mut ledger = ListingLedger::new(&env);
        let listing_id: u64 = ledger.find_by_token(&asset_contract, token_id)?;
        let listing: Listing = ledger.reprice(listing_id, &caller, new_price)?;

        MarketplaceEvent::PriceModified(listing.id, listing.price).publish(&env);
        Ok(listing_id)
    }

    pub fn toggle_for_sale(env: Env, listing_id: u64, caller: Address) -> Result<bool, Error> {
        caller.require_auth();

        let listing: Listing = ListingLedger::new(&env).toggle_for_sale(listing_id, &caller)?;
        log!(&env, "listing {} for sale: {}", listing.id, listing.for_sale);

        MarketplaceEvent::ForSaleToggled(listing.id, listing.for_sale).publish(&env);
        Ok(listing.for_sale)
    }

    pub fn get_listing(env: Env, listing_id: u64) -> Result<Listing, Error> {
        ListingLedger::new(&env).get(listing_id)
    }

    pub fn get_all_listings(env: Env) -> Vec<Listing> {
        ListingLedger::new(&env).all()
    }

    pub fn get_listing_count(env: Env) -> u64 {
        ListingLedger::new(&env).count()
    }

    pub fn get_seller_listings(env: Env, seller: Address) -> Vec<u64> {
        ListingLedger::new(&env).of_seller(&seller)
    }
}

fn require_initialized(env: &Env) -> Result<(), Error> {
    if !has_data(env, &ADMIN) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin: Address = get_data(env, &ADMIN).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}
