// ==========================================================================
// ARQUIVO: gov_token_test.rs
// Descrição: Testes do token de governança (minter, mint e transferência)
// ==========================================================================

use multiversx_sc::types::{Address, ManagedBuffer};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, rust_biguint,
    testing_framework::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};

use gov_token::*;

const WASM_PATH: &str = "output/gov-token.wasm";

struct ContractSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> gov_token::ContractObj<DebugApi>,
{
    pub blockchain_wrapper: BlockchainStateWrapper,
    pub owner_address: Address,
    pub minter_address: Address,
    pub user_address: Address,
    pub contract_wrapper: ContractObjWrapper<gov_token::ContractObj<DebugApi>, ContractObjBuilder>,
}

fn setup_contract<ContractObjBuilder>(builder: ContractObjBuilder) -> ContractSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> gov_token::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0u64);
    let mut blockchain_wrapper = BlockchainStateWrapper::new();
    let owner_address = blockchain_wrapper.create_user_account(&rust_zero);
    let minter_address = blockchain_wrapper.create_user_account(&rust_zero);
    let user_address = blockchain_wrapper.create_user_account(&rust_zero);

    let contract_wrapper = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&owner_address),
        builder,
        WASM_PATH,
    );

    blockchain_wrapper
        .execute_tx(&owner_address, &contract_wrapper, &rust_zero, |sc| {
            sc.init(
                ManagedBuffer::from("Crowd Loan Governance"),
                ManagedBuffer::from("CLGOV"),
                6u8,
            );
        })
        .assert_ok();

    ContractSetup {
        blockchain_wrapper,
        owner_address,
        minter_address,
        user_address,
        contract_wrapper,
    }
}

fn configure_minter<ContractObjBuilder>(setup: &mut ContractSetup<ContractObjBuilder>)
where
    ContractObjBuilder: 'static + Copy + Fn() -> gov_token::ContractObj<DebugApi>,
{
    let minter = setup.minter_address.clone();
    setup
        .blockchain_wrapper
        .execute_tx(&setup.owner_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.set_minter(managed_address!(&minter));
        })
        .assert_ok();
}

#[test]
fn test_init() {
    let mut setup = setup_contract(gov_token::contract_obj);

    setup
        .blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            assert_eq!(sc.get_name(), ManagedBuffer::from("Crowd Loan Governance"));
            assert_eq!(sc.get_ticker(), ManagedBuffer::from("CLGOV"));
            assert_eq!(sc.get_decimals(), 6u8);
            assert_eq!(sc.total_supply(), managed_biguint!(0));
        })
        .assert_ok();
}

#[test]
fn test_mint_by_minter() {
    let mut setup = setup_contract(gov_token::contract_obj);
    configure_minter(&mut setup);
    let user = setup.user_address.clone();

    setup
        .blockchain_wrapper
        .execute_tx(&setup.minter_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.mint_endpoint(managed_address!(&user), managed_biguint!(5_000));
        })
        .assert_ok();

    setup
        .blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            assert_eq!(sc.balance_of(managed_address!(&user)), managed_biguint!(5_000));
            assert_eq!(sc.total_supply(), managed_biguint!(5_000));
        })
        .assert_ok();
}

#[test]
fn test_mint_without_minter_fails() {
    let mut setup = setup_contract(gov_token::contract_obj);
    let user = setup.user_address.clone();

    setup
        .blockchain_wrapper
        .execute_tx(&setup.owner_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.mint_endpoint(managed_address!(&user), managed_biguint!(1));
        })
        .assert_user_error("minter not configured");
}

#[test]
fn test_mint_by_other_address_fails() {
    let mut setup = setup_contract(gov_token::contract_obj);
    configure_minter(&mut setup);
    let user = setup.user_address.clone();

    setup
        .blockchain_wrapper
        .execute_tx(&setup.user_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.mint_endpoint(managed_address!(&user), managed_biguint!(1_000));
        })
        .assert_user_error("only minter can mint");

    setup
        .blockchain_wrapper
        .execute_tx(&setup.minter_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.mint_endpoint(managed_address!(&user), managed_biguint!(0));
        })
        .assert_user_error("amount must be positive");
}

#[test]
fn test_set_minter_only_owner() {
    let mut setup = setup_contract(gov_token::contract_obj);
    let user = setup.user_address.clone();

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.set_minter(managed_address!(&user));
        })
        .assert_error(4, "Endpoint can only be called by owner");
}

#[test]
fn test_transfer_moves_voting_weight() {
    let mut setup = setup_contract(gov_token::contract_obj);
    configure_minter(&mut setup);
    let user = setup.user_address.clone();
    let owner = setup.owner_address.clone();

    setup
        .blockchain_wrapper
        .execute_tx(&setup.minter_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.mint_endpoint(managed_address!(&user), managed_biguint!(1_000));
        })
        .assert_ok();

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.transfer(managed_address!(&owner), managed_biguint!(400));
        })
        .assert_ok();

    setup
        .blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            assert_eq!(sc.balance_of(managed_address!(&user)), managed_biguint!(600));
            assert_eq!(sc.balance_of(managed_address!(&owner)), managed_biguint!(400));
            // Transferências não alteram o suprimento
            assert_eq!(sc.total_supply(), managed_biguint!(1_000));
        })
        .assert_ok();

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.transfer(managed_address!(&owner), managed_biguint!(601));
        })
        .assert_user_error("insufficient balance");

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.transfer(managed_address!(&user), managed_biguint!(1));
        })
        .assert_user_error("cannot transfer to self");

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.transfer(managed_address!(&Address::zero()), managed_biguint!(1));
        })
        .assert_user_error("cannot transfer to zero address");

    setup
        .blockchain_wrapper
        .execute_tx(&user, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.transfer(managed_address!(&owner), managed_biguint!(0));
        })
        .assert_user_error("amount must be positive");

    setup
        .blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            assert_eq!(sc.balance_of(managed_address!(&user)), managed_biguint!(600));
        })
        .assert_ok();
}
