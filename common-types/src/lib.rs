// ==========================================================================
// MÓDULO: common-types/src/lib.rs
// Descrição: Tipos compartilhados entre o contrato de empréstimo coletivo e
//            os adaptadores externos (identidade, preço e token de governança)
// ==========================================================================

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Casas decimais da moeda de referência (stablecoin de conta) usada para
/// limites de investimento e verificação de colateral
pub const REFERENCE_DECIMALS: u32 = 18;

/// Papel verificado de um participante perante uma instância de empréstimo
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Role {
    None,
    Client,
    Investor,
    Auditor,
}

/// Classificação regulatória do investidor, em ordem crescente de
/// exposição de risco permitida
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug,
)]
pub enum AccreditationLevel {
    None,
    Retail,
    AccreditedIndividual,
    Institutional,
}

/// Resposta do adaptador de identidade para `checkVerification`
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct VerificationResult<M: ManagedTypeApi> {
    pub verified: bool,
    pub credential_id: u64,
    pub role: Role,
    pub expiry: u64,
    pub usd_limit: BigUint<M>,
    pub accreditation: AccreditationLevel,
}

impl<M: ManagedTypeApi> VerificationResult<M> {
    pub fn unverified() -> Self {
        VerificationResult {
            verified: false,
            credential_id: 0,
            role: Role::None,
            expiry: 0,
            usd_limit: BigUint::zero(),
            accreditation: AccreditationLevel::None,
        }
    }

    /// Credencial válida para o papel pedido no instante `now`
    /// (expiry = 0 significa sem expiração)
    pub fn is_valid_for(&self, role: Role, now: u64) -> bool {
        self.verified && self.role == role && (self.expiry == 0 || self.expiry > now)
    }
}
