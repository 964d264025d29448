// Interfaces dos contratos externos consumidos pelo empréstimo

pub mod identity_registry_proxy {
    multiversx_sc::imports!();

    use common_types::{Role, VerificationResult};

    #[multiversx_sc::proxy]
    pub trait IdentityRegistry {
        #[view(checkVerification)]
        fn check_verification(
            &self,
            principal: ManagedAddress,
            loan_instance: ManagedAddress,
            role: Role,
        ) -> VerificationResult<Self::Api>;
    }
}

pub mod price_adapter_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait PriceAdapter {
        #[view(assetToReference)]
        fn asset_to_reference(&self, amount: BigUint, asset: TokenIdentifier) -> OptionalValue<BigUint>;

        #[view(referenceToAsset)]
        fn reference_to_asset(&self, reference_amount: BigUint, asset: TokenIdentifier) -> OptionalValue<BigUint>;
    }
}

pub mod gov_token_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait GovToken {
        #[view(balanceOf)]
        fn balance_of(&self, address: ManagedAddress) -> BigUint;

        #[view(totalSupply)]
        fn total_supply(&self) -> BigUint;

        #[endpoint(mint)]
        fn mint(&self, to: ManagedAddress, amount: BigUint);
    }
}
