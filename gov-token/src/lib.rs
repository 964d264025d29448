#![no_std]
// Token de governança do empréstimo coletivo: o peso de voto de cada
// investidor é o seu saldo neste contrato

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Informações básicas do token
/// - name: Nome do token
/// - ticker: Símbolo/código do token
/// - decimals: Número de casas decimais (mesmas do token de financiamento)
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct TokenInfo<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub ticker: ManagedBuffer<M>,
    pub decimals: u8,
}

/// Contrato do token de governança
/// O único endereço que pode criar tokens é o minter (o contrato do empréstimo)
#[multiversx_sc::contract]
pub trait GovToken {
    /// @param token_name: Nome completo do token
    /// @param token_ticker: Símbolo do token
    /// @param token_decimals: Número de casas decimais do token
    #[init]
    fn init(&self, token_name: ManagedBuffer, token_ticker: ManagedBuffer, token_decimals: u8) {
        self.token_info().set(TokenInfo {
            name: token_name,
            ticker: token_ticker,
            decimals: token_decimals,
        });
        self.total_token_supply().set_if_empty(BigUint::zero());
    }

    // ======== FUNÇÕES DE VISUALIZAÇÃO (VIEW) ========

    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        self.token_info().get().name
    }

    #[view(getTicker)]
    fn get_ticker(&self) -> ManagedBuffer {
        self.token_info().get().ticker
    }

    #[view(getDecimals)]
    fn get_decimals(&self) -> u8 {
        self.token_info().get().decimals
    }

    /// Suprimento total em circulação (denominador do quórum)
    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.total_token_supply().get()
    }

    /// Saldo (peso de voto) de um endereço
    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    #[view(getMinter)]
    fn get_minter(&self) -> ManagedAddress {
        self.minter_address().get()
    }

    // ======== ADMINISTRAÇÃO ========

    /// Define o contrato autorizado a criar tokens (somente owner)
    #[endpoint(setMinter)]
    fn set_minter(&self, minter: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        require!(!minter.is_zero(), "minter cannot be zero address");
        self.minter_address().set(&minter);
        self.minter_set_event(&minter);
    }

    // ======== OPERAÇÕES ========

    /// Cria tokens para um endereço (somente minter)
    #[endpoint(mint)]
    fn mint_endpoint(&self, to: ManagedAddress, amount: BigUint) {
        require!(!self.minter_address().is_empty(), "minter not configured");
        require!(
            self.blockchain().get_caller() == self.minter_address().get(),
            "only minter can mint"
        );
        require!(amount > 0u64, "amount must be positive");

        self.balances(&to).update(|balance| *balance += &amount);
        self.total_token_supply().update(|supply| *supply += &amount);

        self.mint_event(&to, &amount);
    }

    /// Transfere peso de governança do remetente para outro endereço
    #[endpoint]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), "cannot transfer to zero address");
        require!(caller != to, "cannot transfer to self");
        require!(amount > 0u64, "amount must be positive");

        let balance = self.balances(&caller).get();
        require!(balance >= amount, "insufficient balance");

        self.balances(&caller).set(&(&balance - &amount));
        self.balances(&to).update(|to_balance| *to_balance += &amount);

        self.transfer_event(&caller, &to, &amount);
    }

    // ======== DEFINIÇÃO DE EVENTOS ========

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("minter_set")]
    fn minter_set_event(&self, #[indexed] minter: &ManagedAddress);

    // ======== DEFINIÇÃO DE STORAGE ========

    #[storage_mapper("token_info")]
    fn token_info(&self) -> SingleValueMapper<TokenInfo<Self::Api>>;

    #[storage_mapper("total_supply")]
    fn total_token_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minter_address")]
    fn minter_address(&self) -> SingleValueMapper<ManagedAddress>;
}
