use crate::{
    storage::get_data,
    types::{Error, PAYMENT_TOKEN},
};
use common::nft::interface::NFTContractClient;
use soroban_sdk::{panic_with_error, token, Address, Env};

pub fn get_nft_client<'a>(env: &'a Env, asset_contract: &Address) -> NFTContractClient<'a> {
    NFTContractClient::new(env, asset_contract)
}

pub fn get_payment_token_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = match get_data(env, &PAYMENT_TOKEN) {
        Some(token_addr) => token_addr,
        None => panic_with_error!(env, Error::NotInitialized),
    };
    token::Client::new(env, &token_addr)
}
