use soroban_sdk::{token, Address, Env};

use crate::types::{Error, Listing};

use super::contract_clients::{get_nft_client, get_payment_token_client};

// Pulls the token into marketplace custody. The seller must have approved
// the marketplace on the asset contract beforehand.
pub fn take_custody(env: &Env, listing: &Listing) {
    let marketplace: Address = env.current_contract_address();
    get_nft_client(env, &listing.asset_contract).transfer_from(
        &marketplace,
        &listing.seller,
        &marketplace,
        &listing.token_id,
    );
}

pub fn release_custody(env: &Env, listing: &Listing, buyer: &Address) {
    get_nft_client(env, &listing.asset_contract).transfer(
        &env.current_contract_address(),
        buyer,
        &listing.token_id,
    );
}

pub fn ensure_balance(env: &Env, buyer: &Address, amount: i128) -> Result<(), Error> {
    let token_client: token::Client<'_> = get_payment_token_client(env);
    if token_client.balance(buyer) < amount {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

// Only the listed price moves; anything the buyer offered above it stays
// with the buyer.
pub fn pay_seller(env: &Env, buyer: &Address, listing: &Listing) {
    let token_client: token::Client<'_> = get_payment_token_client(env);
    token_client.transfer(buyer, &listing.seller, &listing.price);
}
