//! The listing ledger: every listing ever created, its sale status and the
//! id counter.
//!
//! All guards run before the first write, so a rejected call leaves the
//! ledger exactly as it found it. Token and payment movements are not the
//! ledger's business; the contract performs them after a successful state
//! transition within the same invocation.

use soroban_sdk::{log, Address, Env, Vec};

use crate::{
    storage::{get_data, get_persistent, store_data, store_persistent},
    types::{Custody, DataKey, Error, Listing},
};

pub struct ListingLedger {
    env: Env,
}

impl ListingLedger {
    pub fn new(env: &Env) -> Self {
        ListingLedger { env: env.clone() }
    }

    pub fn count(&self) -> u64 {
        get_data(&self.env, &DataKey::ListingCount).unwrap_or(0)
    }

    pub fn get(&self, listing_id: u64) -> Result<Listing, Error> {
        get_persistent(&self.env, &DataKey::Listing(listing_id)).ok_or(Error::ListingNotFound)
    }

    /// Records a new unsold listing held in marketplace custody and returns it.
    pub fn insert(
        &mut self,
        asset_contract: &Address,
        token_id: u64,
        price: i128,
        seller: &Address,
    ) -> Result<Listing, Error> {
        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let listing_id: u64 = self.count() + 1;
        let listing = Listing {
            id: listing_id,
            asset_contract: asset_contract.clone(),
            token_id,
            seller: seller.clone(),
            price,
            sold: false,
            for_sale: true,
            custody: Custody::Marketplace,
        };

        self.put(&listing);
        store_data(&self.env, &DataKey::ListingCount, &listing_id);

        // A token sold and re-listed points at its newest listing.
        store_persistent(
            &self.env,
            &DataKey::TokenListing(asset_contract.clone(), token_id),
            &listing_id,
        );

        let mut seller_listings: Vec<u64> = self.of_seller(seller);
        seller_listings.push_back(listing_id);
        store_persistent(
            &self.env,
            &DataKey::SellerListings(seller.clone()),
            &seller_listings,
        );

        log!(&self.env, "listing {} created at price {}", listing_id, price);
        Ok(listing)
    }

    pub fn ensure_purchasable(listing: &Listing, payment: i128) -> Result<(), Error> {
        if listing.sold {
            return Err(Error::AlreadySold);
        }
        if !listing.for_sale {
            return Err(Error::NotForSale);
        }
        if payment < listing.price {
            return Err(Error::InsufficientPayment);
        }
        Ok(())
    }

    /// Flips the listing to sold and hands custody to `buyer`.
    pub fn settle(
        &mut self,
        listing_id: u64,
        buyer: &Address,
        payment: i128,
    ) -> Result<Listing, Error> {
        let mut listing: Listing = self.get(listing_id)?;
        Self::ensure_purchasable(&listing, payment)?;

        listing.sold = true;
        listing.custody = Custody::Buyer(buyer.clone());
        self.put(&listing);

        log!(&self.env, "listing {} sold to {}", listing_id, buyer.clone());
        Ok(listing)
    }

    pub fn reprice(
        &mut self,
        listing_id: u64,
        caller: &Address,
        new_price: i128,
    ) -> Result<Listing, Error> {
        let mut listing: Listing = self.get(listing_id)?;
        Self::ensure_editable_by(&listing, caller)?;
        if new_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        listing.price = new_price;
        self.put(&listing);

        log!(&self.env, "listing {} repriced to {}", listing_id, new_price);
        Ok(listing)
    }

    pub fn toggle_for_sale(&mut self, listing_id: u64, caller: &Address) -> Result<Listing, Error> {
        let mut listing: Listing = self.get(listing_id)?;
        Self::ensure_editable_by(&listing, caller)?;

        listing.for_sale = !listing.for_sale;
        self.put(&listing);

        Ok(listing)
    }

    pub fn find_by_token(&self, asset_contract: &Address, token_id: u64) -> Result<u64, Error> {
        get_persistent(
            &self.env,
            &DataKey::TokenListing(asset_contract.clone(), token_id),
        )
        .ok_or(Error::ListingNotFound)
    }

    pub fn all(&self) -> Vec<Listing> {
        let mut listings: Vec<Listing> = Vec::new(&self.env);
        for id in 1..=self.count() {
            if let Some(listing) = get_persistent(&self.env, &DataKey::Listing(id)) {
                listings.push_back(listing);
            }
        }
        listings
    }

    pub fn of_seller(&self, seller: &Address) -> Vec<u64> {
        get_persistent(&self.env, &DataKey::SellerListings(seller.clone()))
            .unwrap_or_else(|| Vec::new(&self.env))
    }

    // Only the seller may touch a listing, and only while it is unsold.
    fn ensure_editable_by(listing: &Listing, caller: &Address) -> Result<(), Error> {
        if listing.seller != *caller {
            return Err(Error::Unauthorized);
        }
        if listing.sold {
            return Err(Error::AlreadySold);
        }
        Ok(())
    }

    fn put(&mut self, listing: &Listing) {
        store_persistent(&self.env, &DataKey::Listing(listing.id), listing);
    }
}
