// ==========================================================================
// MÓDULO: identity-registry/src/identity_registry.rs
// Descrição: Registro de credenciais (cliente, investidor, auditor) consultado
//            pelo contrato de empréstimo coletivo antes de cada operação
//            privilegiada
// ==========================================================================

#![no_std]
multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub use common_types::{AccreditationLevel, Role, VerificationResult};

/// Credencial emitida para um par (endereço, papel)
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Credential<M: ManagedTypeApi> {
    pub id: u64,
    pub expiry: u64,
    pub usd_limit: BigUint<M>,
    pub accreditation: AccreditationLevel,
    pub revoked: bool,
}

#[multiversx_sc::contract]
pub trait IdentityRegistry {
    #[init]
    fn init(&self) {
        self.credential_counter().set_if_empty(0u64);
    }

    // Define o endereço do emissor autorizado a registrar credenciais
    #[endpoint(setIssuer)]
    fn set_issuer(&self, issuer_address: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        require!(!issuer_address.is_zero(), "Issuer address cannot be zero");
        self.issuer_address().set(issuer_address);
    }

    // Emite (ou substitui) a credencial de um endereço para um papel
    #[endpoint(issueCredential)]
    fn issue_credential(
        &self,
        principal: ManagedAddress,
        role: Role,
        expiry: u64,
        usd_limit: BigUint,
        accreditation: AccreditationLevel,
    ) -> u64 {
        self.require_issuer();
        require!(role != Role::None, "Invalid role");
        require!(
            expiry == 0 || expiry > self.blockchain().get_block_timestamp(),
            "Expiry must be in the future"
        );

        let credential_id = self.credential_counter().update(|counter| {
            *counter += 1;
            *counter
        });

        self.credentials(&principal, role).set(Credential {
            id: credential_id,
            expiry,
            usd_limit,
            accreditation,
            revoked: false,
        });

        self.credential_issued_event(&principal, role, credential_id);
        credential_id
    }

    #[endpoint(revokeCredential)]
    fn revoke_credential(&self, principal: ManagedAddress, role: Role) {
        self.require_issuer();
        require!(!self.credentials(&principal, role).is_empty(), "Credential not found");

        let mut credential = self.credentials(&principal, role).get();
        require!(!credential.revoked, "Credential already revoked");
        credential.revoked = true;
        let credential_id = credential.id;
        self.credentials(&principal, role).set(credential);

        self.credential_revoked_event(&principal, role, credential_id);
    }

    // A instância do empréstimo é recebida para compatibilidade da interface;
    // as credenciais deste registro valem para qualquer instância
    #[view(checkVerification)]
    fn check_verification(
        &self,
        principal: ManagedAddress,
        _loan_instance: ManagedAddress,
        role: Role,
    ) -> VerificationResult<Self::Api> {
        if role == Role::None || self.credentials(&principal, role).is_empty() {
            return VerificationResult::unverified();
        }

        let credential = self.credentials(&principal, role).get();
        let now = self.blockchain().get_block_timestamp();
        let expired = credential.expiry != 0 && credential.expiry <= now;

        VerificationResult {
            verified: !credential.revoked && !expired,
            credential_id: credential.id,
            role,
            expiry: credential.expiry,
            usd_limit: credential.usd_limit,
            accreditation: credential.accreditation,
        }
    }

    #[view(getCredential)]
    fn get_credential(&self, principal: ManagedAddress, role: Role) -> OptionalValue<Credential<Self::Api>> {
        if self.credentials(&principal, role).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.credentials(&principal, role).get())
        }
    }

    fn require_issuer(&self) {
        require!(!self.issuer_address().is_empty(), "Issuer not configured");
        require!(
            self.blockchain().get_caller() == self.issuer_address().get(),
            "Only issuer can manage credentials"
        );
    }

    #[event("credential_issued")]
    fn credential_issued_event(
        &self,
        #[indexed] principal: &ManagedAddress,
        #[indexed] role: Role,
        credential_id: u64,
    );

    #[event("credential_revoked")]
    fn credential_revoked_event(
        &self,
        #[indexed] principal: &ManagedAddress,
        #[indexed] role: Role,
        credential_id: u64,
    );

    // --- Storage mappers ---
    #[storage_mapper("issuer_address")]
    fn issuer_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("credential_counter")]
    fn credential_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("credentials")]
    fn credentials(&self, principal: &ManagedAddress, role: Role) -> SingleValueMapper<Credential<Self::Api>>;
}
