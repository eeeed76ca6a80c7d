use crate::storage::{get_data, get_persistent, remove_persistent, store_persistent};
use common::nft::types::{DataKey, Error, ADMIN};
use soroban_sdk::{panic_with_error, Address, Env};

pub fn require_admin(env: &Env) -> Address {
    let admin: Address = match get_data(env, &ADMIN) {
        Some(admin) => admin,
        None => panic_with_error!(env, Error::NotInitialized),
    };
    admin.require_auth();
    admin
}

pub fn read_owner(env: &Env, token_id: u64) -> Result<Address, Error> {
    get_persistent(env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)
}

pub fn read_balance(env: &Env, owner: &Address) -> u32 {
    get_persistent(env, &DataKey::Balance(owner.clone())).unwrap_or(0)
}

/// Moves `token_id` to `to`, fixing both balances and dropping any approval.
/// Callers are responsible for checking that `from` is the current owner.
pub fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) {
    let from_balance: u32 = read_balance(env, from);
    store_persistent(
        env,
        &DataKey::Balance(from.clone()),
        &from_balance.saturating_sub(1),
    );
    let to_balance: u32 = read_balance(env, to);
    store_persistent(env, &DataKey::Balance(to.clone()), &(to_balance + 1));

    store_persistent(env, &DataKey::Owner(token_id), to);
    remove_persistent(env, &DataKey::Approved(token_id));
}
