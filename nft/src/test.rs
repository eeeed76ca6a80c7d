#![cfg(test)]
extern crate std;

use crate::contract::NFTContract;
use common::nft::interface::NFTContractClient;
use common::nft::types::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

struct NFTTest {
    env: Env,
    client: NFTContractClient<'static>,
    alice: Address,
    bob: Address,
    admin: Address,
}

impl NFTTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(NFTContract, ());
        let client: NFTContractClient<'static> = NFTContractClient::new(&env, &contract_id);

        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);
        let admin: Address = Address::generate(&env);

        client.initialize(&admin);

        NFTTest {
            env,
            client,
            alice,
            bob,
            admin,
        }
    }

    fn mint_to(&self, owner: &Address) -> u64 {
        let uri = String::from_str(&self.env, "https://example.com/sneakers/1");
        self.client.mint(owner, &uri)
    }
}

#[test]
fn test_initialize_twice_fails() {
    let test = NFTTest::setup();
    let res = test.client.try_initialize(&test.admin);
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let test = NFTTest::setup();

    let first: u64 = test.mint_to(&test.alice);
    let second: u64 = test.mint_to(&test.bob);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(test.client.owner_of(&first), test.alice);
    assert_eq!(test.client.owner_of(&second), test.bob);
    assert_eq!(test.client.balance(&test.alice), 1);
    assert_eq!(test.client.total_supply(), 2);
    assert_eq!(
        test.client.token_uri(&first),
        String::from_str(&test.env, "https://example.com/sneakers/1")
    );
}

#[test]
fn test_owner_of_unknown_token() {
    let test = NFTTest::setup();
    assert_eq!(test.client.try_owner_of(&7), Err(Ok(Error::TokenNotFound)));
    assert!(!test.client.exists(&7));
}

#[test]
fn test_transfer_from_requires_approval() {
    let test = NFTTest::setup();
    let operator: Address = Address::generate(&test.env);
    let token_id: u64 = test.mint_to(&test.alice);

    let res = test
        .client
        .try_transfer_from(&operator, &test.alice, &test.bob, &token_id);
    assert_eq!(res, Err(Ok(Error::NotApproved)));

    test.client.approve(&test.alice, &operator, &token_id);
    assert_eq!(test.client.get_approved(&token_id), Some(operator.clone()));

    test.client
        .transfer_from(&operator, &test.alice, &test.bob, &token_id);

    assert_eq!(test.client.owner_of(&token_id), test.bob);
    assert_eq!(test.client.balance(&test.alice), 0);
    assert_eq!(test.client.balance(&test.bob), 1);
    // approval does not survive the transfer
    assert_eq!(test.client.get_approved(&token_id), None);
}

#[test]
fn test_only_owner_can_approve_or_transfer() {
    let test = NFTTest::setup();
    let token_id: u64 = test.mint_to(&test.alice);

    let res = test.client.try_approve(&test.bob, &test.bob, &token_id);
    assert_eq!(res, Err(Ok(Error::NotOwner)));

    let res = test.client.try_transfer(&test.bob, &test.admin, &token_id);
    assert_eq!(res, Err(Ok(Error::NotOwner)));

    test.client.transfer(&test.alice, &test.bob, &token_id);
    assert_eq!(test.client.owner_of(&token_id), test.bob);
}
