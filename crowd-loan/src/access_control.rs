multiversx_sc::imports!();

use common_types::{Role, VerificationResult};

use crate::proxies::identity_registry_proxy::ProxyTrait as _;
use crate::types::Capability;

// Tabela de autorização (endereço → capacidades), pausa global e os
// predicados de guarda avaliados antes de cada operação
#[multiversx_sc::module]
pub trait AccessControlModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[endpoint(grantCapability)]
    fn grant_capability(&self, principal: ManagedAddress, capability: Capability) {
        self.blockchain().check_caller_is_owner();
        self.require_not_paused();
        require!(!principal.is_zero(), "Invalid address");
        require!(
            self.capabilities(&principal).insert(capability),
            "Capability already granted"
        );
        self.capability_granted_event(&principal, capability);
    }

    #[endpoint(revokeCapability)]
    fn revoke_capability(&self, principal: ManagedAddress, capability: Capability) {
        self.blockchain().check_caller_is_owner();
        self.require_not_paused();
        require!(
            self.capabilities(&principal).swap_remove(&capability),
            "Capability not granted"
        );
        self.capability_revoked_event(&principal, capability);
    }

    #[view(hasCapability)]
    fn has_capability(&self, principal: ManagedAddress, capability: Capability) -> bool {
        self.capabilities(&principal).contains(&capability)
    }

    #[endpoint(pause)]
    fn pause(&self) {
        let caller = self.blockchain().get_caller();
        self.authorize(&caller, Capability::Pauser);
        require!(!self.paused().get(), "Contract is already paused");
        self.paused().set(true);
        self.paused_event(&caller);
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        let caller = self.blockchain().get_caller();
        self.authorize(&caller, Capability::Pauser);
        require!(self.paused().get(), "Contract is not paused");
        self.paused().set(false);
        self.unpaused_event(&caller);
    }

    fn authorize(&self, principal: &ManagedAddress, capability: Capability) {
        require!(
            self.capabilities(principal).contains(&capability),
            "Caller lacks required capability"
        );
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), "Contract is paused");
    }

    // Consulta o registro de identidade a cada chamada, sem cache
    fn require_verified(&self, principal: &ManagedAddress, role: Role) -> VerificationResult<Self::Api> {
        let registry = self.identity_registry_address().get();
        let verification: VerificationResult<Self::Api> = self
            .identity_registry_proxy(registry)
            .check_verification(principal.clone(), self.blockchain().get_sc_address(), role)
            .execute_on_dest_context();

        let now = self.blockchain().get_block_timestamp();
        require!(verification.is_valid_for(role, now), "Caller is not verified for this role");
        verification
    }

    // O chamador deve ser o cliente do empréstimo e ter credencial de cliente
    fn require_verified_client(&self) -> ManagedAddress {
        let caller = self.require_loan_client();
        self.require_verified(&caller, Role::Client);
        caller
    }

    fn require_loan_client(&self) -> ManagedAddress {
        require!(!self.loan().is_empty(), "Loan not initialized");
        let caller = self.blockchain().get_caller();
        require!(caller == self.loan().get().client, "Only the client can call this function");
        caller
    }

    // Investidor verificado com participação não nula; retorna sua contribuição
    fn require_investor_with_stake(&self) -> (ManagedAddress, BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_verified(&caller, Role::Investor);
        let contribution = self.investments(&caller).get();
        require!(contribution > 0u64, "No stake in this loan");
        (caller, contribution)
    }

    fn lock_operation(&self) {
        require!(!self.operation_locked().get(), "Operation in progress");
        self.operation_locked().set(true);
    }

    fn unlock_operation(&self) {
        self.operation_locked().set(false);
    }
}
