use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

use crate::{
    events::NFTEvent,
    storage::{get_data, get_persistent, has_data, has_persistent, store_data, store_persistent},
    utils::{move_token, read_balance, read_owner, require_admin},
};
use common::nft::{
    interface::NFTInterface,
    types::{DataKey, Error, ADMIN},
};

const NAME: &str = "Sneakers Marketplace Collection";
const SYMBOL: &str = "SNKR";

#[contract]
pub struct NFTContract;

#[contractimpl]
impl NFTInterface for NFTContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &DataKey::TokenCount, &0u64);
        NFTEvent::Initialized(admin).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        require_admin(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        NFTEvent::Upgraded(Self::version()).publish(&env);
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    // Anyone can mint a sneaker to themselves; ids start at 1.
    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        to.require_auth();

        let token_count: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);
        let token_id: u64 = token_count + 1;

        store_persistent(&env, &DataKey::Owner(token_id), &to);
        store_persistent(&env, &DataKey::TokenUri(token_id), &token_uri);
        let balance: u32 = read_balance(&env, &to);
        store_persistent(&env, &DataKey::Balance(to.clone()), &(balance + 1));
        store_data(&env, &DataKey::TokenCount, &token_id);

        log!(&env, "minted sneaker {} to {}", token_id, to);
        NFTEvent::Mint(token_id, to).publish(&env);

        token_id
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        read_owner(&env, token_id)
    }

    fn approve(env: Env, owner: Address, approved: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        if read_owner(&env, token_id)? != owner {
            return Err(Error::NotOwner);
        }

        store_persistent(&env, &DataKey::Approved(token_id), &approved);
        NFTEvent::Approve(token_id, owner, approved).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::Approved(token_id))
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        if read_owner(&env, token_id)? != from {
            return Err(Error::NotOwner);
        }

        move_token(&env, &from, &to, token_id);
        NFTEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address = read_owner(&env, token_id)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        if spender != owner {
            let approved: Option<Address> = get_persistent(&env, &DataKey::Approved(token_id));
            if approved != Some(spender) {
                return Err(Error::NotApproved);
            }
        }

        move_token(&env, &from, &to, token_id);
        NFTEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn balance(env: Env, owner: Address) -> u32 {
        read_balance(&env, &owner)
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        get_persistent(&env, &DataKey::TokenUri(token_id)).ok_or(Error::TokenNotFound)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::Owner(token_id))
    }
}
