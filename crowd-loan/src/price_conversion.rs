multiversx_sc::imports!();

use common_types::REFERENCE_DECIMALS;

use crate::proxies::price_adapter_proxy::ProxyTrait as _;
use crate::types::Loan;
use crate::MIN_COLLATERAL_RATIO_PERCENT;

// Conversões via adaptador de preço, cada uma com seu fallback local
#[multiversx_sc::module]
pub trait PriceConversionModule: crate::storage::StorageModule + crate::events::EventsModule {
    fn asset_to_reference(&self, amount: &BigUint, asset: &TokenIdentifier) -> Option<BigUint> {
        if self.price_adapter_address().is_empty() {
            return None;
        }

        let adapter = self.price_adapter_address().get();
        let converted: OptionalValue<BigUint> = self
            .price_adapter_proxy(adapter)
            .asset_to_reference(amount.clone(), asset.clone())
            .execute_on_dest_context();
        converted.into_option()
    }

    fn reference_to_asset(&self, reference_amount: &BigUint, asset: &TokenIdentifier) -> Option<BigUint> {
        if self.price_adapter_address().is_empty() {
            return None;
        }

        let adapter = self.price_adapter_address().get();
        let converted: OptionalValue<BigUint> = self
            .price_adapter_proxy(adapter)
            .reference_to_asset(reference_amount.clone(), asset.clone())
            .execute_on_dest_context();
        converted.into_option()
    }

    /// Limite do investidor convertido para unidades do token de financiamento.
    /// Sem cotação, assume paridade 1:1 e apenas ajusta as casas decimais.
    fn investment_limit_in_funding_units(&self, usd_limit: &BigUint, loan: &Loan<Self::Api>) -> BigUint {
        match self.reference_to_asset(usd_limit, &loan.funding_token) {
            Some(limit) => limit,
            None => self.scale_reference_decimals(usd_limit, loan.funding_decimals),
        }
    }

    fn scale_reference_decimals(&self, reference_amount: &BigUint, asset_decimals: u32) -> BigUint {
        if asset_decimals >= REFERENCE_DECIMALS {
            reference_amount * &BigUint::from(10u64).pow(asset_decimals - REFERENCE_DECIMALS)
        } else {
            reference_amount / &BigUint::from(10u64).pow(REFERENCE_DECIMALS - asset_decimals)
        }
    }

    /// Verifica se a garantia vale pelo menos 120% do empréstimo.
    /// Retorna None quando alguma conversão não está disponível: nesse caso a
    /// garantia é aceita sem a verificação.
    fn check_collateral_value(
        &self,
        pledge_token: &TokenIdentifier,
        pledge_amount: &BigUint,
        loan: &Loan<Self::Api>,
    ) -> Option<bool> {
        let pledge_value = self.asset_to_reference(pledge_amount, pledge_token)?;
        let loan_value = self.asset_to_reference(&loan.target_amount, &loan.funding_token)?;

        let sufficient = &pledge_value * &BigUint::from(100u64)
            >= &loan_value * &BigUint::from(MIN_COLLATERAL_RATIO_PERCENT);
        if sufficient {
            self.collateral_value_checked_event(&pledge_value, &loan_value);
        }
        Some(sufficient)
    }
}
