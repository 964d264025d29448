multiversx_sc::imports!();

use crate::proxies::{gov_token_proxy, identity_registry_proxy, price_adapter_proxy};
use crate::types::{Capability, Loan, LoanStatus, Pledge, Repayment, Vote};

// Estado do empréstimo: o contrato é o único dono destes dados
#[multiversx_sc::module]
pub trait StorageModule {
    // --- Colaboradores externos ---
    #[view(getIdentityRegistryAddress)]
    #[storage_mapper("identity_registry_address")]
    fn identity_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGovTokenAddress)]
    #[storage_mapper("gov_token_address")]
    fn gov_token_address(&self) -> SingleValueMapper<ManagedAddress>;

    // Vazio quando nenhum adaptador de preço está configurado
    #[storage_mapper("price_adapter_address")]
    fn price_adapter_address(&self) -> SingleValueMapper<ManagedAddress>;

    // --- Empréstimo ---
    #[view(getStatus)]
    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<LoanStatus>;

    #[storage_mapper("loan")]
    fn loan(&self) -> SingleValueMapper<Loan<Self::Api>>;

    #[storage_mapper("pledge")]
    fn pledge(&self) -> SingleValueMapper<Pledge<Self::Api>>;

    #[storage_mapper("repayments")]
    fn repayments(&self, repayment_id: u64) -> SingleValueMapper<Repayment<Self::Api>>;

    #[storage_mapper("vote")]
    fn vote(&self) -> SingleValueMapper<Vote<Self::Api>>;

    // --- Livro de investimentos ---
    #[view(getInvestment)]
    #[storage_mapper("investments")]
    fn investments(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investors")]
    fn investors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(hasClaimedGovTokens)]
    #[storage_mapper("gov_tokens_claimed")]
    fn gov_tokens_claimed(&self, investor: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(hasClaimedRefund)]
    #[storage_mapper("refund_claimed")]
    fn refund_claimed(&self, investor: &ManagedAddress) -> SingleValueMapper<bool>;

    // --- Livros de distribuição ---
    #[view(getProfitClaimed)]
    #[storage_mapper("profit_claimed")]
    fn profit_claimed(&self, repayment_id: u64, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getPledgeShareClaimed)]
    #[storage_mapper("pledge_share_claimed")]
    fn pledge_share_claimed(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // Chave: instante de início da votação
    #[storage_mapper("has_voted")]
    fn has_voted(&self, vote_start: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // --- Controle de acesso e operação ---
    #[storage_mapper("capabilities")]
    fn capabilities(&self, principal: &ManagedAddress) -> UnorderedSetMapper<Capability>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("operation_locked")]
    fn operation_locked(&self) -> SingleValueMapper<bool>;

    #[view(getMinCreditScore)]
    #[storage_mapper("min_credit_score")]
    fn min_credit_score(&self) -> SingleValueMapper<u64>;

    // Proxies para os contratos externos
    #[proxy]
    fn identity_registry_proxy(&self, sc_address: ManagedAddress) -> identity_registry_proxy::Proxy<Self::Api>;

    #[proxy]
    fn price_adapter_proxy(&self, sc_address: ManagedAddress) -> price_adapter_proxy::Proxy<Self::Api>;

    #[proxy]
    fn gov_token_proxy(&self, sc_address: ManagedAddress) -> gov_token_proxy::Proxy<Self::Api>;
}
