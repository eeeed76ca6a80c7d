use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

use crate::types::Listing;

pub enum MarketplaceEvent {
    Initialized(Address, Address),
    Upgraded(u32),
    Offered(Listing),
    Bought(Listing, Address),
    PriceModified(u64, i128),
    ForSaleToggled(u64, bool),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Upgraded(..) => stringify!(Upgraded),
            MarketplaceEvent::Offered(..) => stringify!(Offered),
            MarketplaceEvent::Bought(..) => stringify!(Bought),
            MarketplaceEvent::PriceModified(..) => stringify!(PriceModified),
            MarketplaceEvent::ForSaleToggled(..) => stringify!(ForSaleToggled),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            MarketplaceEvent::Initialized(admin, payment_token) => {
                v.push_back(admin.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            MarketplaceEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            // (id, asset_contract, token_id, price, seller)
            MarketplaceEvent::Offered(listing) => {
                v.push_back(listing.id.into_val(env));
                v.push_back(listing.asset_contract.into_val(env));
                v.push_back(listing.token_id.into_val(env));
                v.push_back(listing.price.into_val(env));
                v.push_back(listing.seller.into_val(env));
            }
            // (id, asset_contract, token_id, price, seller, buyer)
            MarketplaceEvent::Bought(listing, buyer) => {
                v.push_back(listing.id.into_val(env));
                v.push_back(listing.asset_contract.into_val(env));
                v.push_back(listing.token_id.into_val(env));
                v.push_back(listing.price.into_val(env));
                v.push_back(listing.seller.into_val(env));
                v.push_back(buyer.into_val(env));
            }
            MarketplaceEvent::PriceModified(listing_id, price) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(price.into_val(env));
            }
            MarketplaceEvent::ForSaleToggled(listing_id, for_sale) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(for_sale.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
