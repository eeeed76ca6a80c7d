use soroban_sdk::{contractclient, Address, BytesN, Env, String};
use super::types::Error;

/// One-of-one collectible token. The marketplace only relies on `owner_of`
/// and `transfer_from`, so any asset contract exposing this interface can be
/// listed.
#[contractclient(name = "NFTContractClient")]
pub trait NFTInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_uri: String) -> u64;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn approve(env: Env, owner: Address, approved: Address, token_id: u64) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn balance(env: Env, owner: Address) -> u32;
    fn total_supply(env: Env) -> u64;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn exists(env: Env, token_id: u64) -> bool;
}
