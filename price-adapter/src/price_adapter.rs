// ==========================================================================
// MÓDULO: price-adapter/src/price_adapter.rs
// Descrição: Adaptador de preços que converte valores entre a moeda de
//            referência e a unidade nativa de um token, usando a cotação ao
//            vivo do feeder ou, se ela estiver velha, a cotação de reserva
// ==========================================================================

#![no_std]
multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_types::REFERENCE_DECIMALS;

/// Configuração e cotações de um token
/// - price: unidades de referência (18 casas) por 1 unidade inteira do token
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AssetQuote<M: ManagedTypeApi> {
    pub decimals: u32,
    pub live_price: BigUint<M>,
    pub updated_at: u64,
    pub fallback_price: BigUint<M>,
}

#[multiversx_sc::contract]
pub trait PriceAdapter {
    #[init]
    fn init(&self, max_quote_age: u64) {
        require!(max_quote_age > 0, "Max quote age must be positive");
        self.max_quote_age().set(max_quote_age);
    }

    // Define o endereço do feeder autorizado a publicar cotações
    #[endpoint(setFeeder)]
    fn set_feeder(&self, feeder_address: ManagedAddress) {
        self.blockchain().check_caller_is_owner();
        require!(!feeder_address.is_zero(), "Feeder address cannot be zero");
        self.feeder_address().set(feeder_address);
    }

    #[endpoint(setMaxQuoteAge)]
    fn set_max_quote_age(&self, max_quote_age: u64) {
        self.blockchain().check_caller_is_owner();
        require!(max_quote_age > 0, "Max quote age must be positive");
        self.max_quote_age().set(max_quote_age);
    }

    // Registra um token e sua cotação de reserva
    #[endpoint(configureAsset)]
    fn configure_asset(&self, asset: TokenIdentifier, decimals: u32, fallback_price: BigUint) {
        self.blockchain().check_caller_is_owner();
        require!(asset.is_valid_esdt_identifier(), "Invalid token identifier");
        require!(decimals <= 36, "Too many decimals");

        if self.quotes(&asset).is_empty() {
            self.quotes(&asset).set(AssetQuote {
                decimals,
                live_price: BigUint::zero(),
                updated_at: 0,
                fallback_price: fallback_price.clone(),
            });
        } else {
            self.quotes(&asset).update(|quote| {
                quote.decimals = decimals;
                quote.fallback_price = fallback_price.clone();
            });
        }

        self.fallback_price_set_event(&asset, &fallback_price);
    }

    #[endpoint(updatePrice)]
    fn update_price(&self, asset: TokenIdentifier, price: BigUint) {
        require!(!self.feeder_address().is_empty(), "Feeder not configured");
        require!(
            self.blockchain().get_caller() == self.feeder_address().get(),
            "Only feeder can update prices"
        );
        require!(!self.quotes(&asset).is_empty(), "Asset not configured");
        require!(price > 0u64, "Price must be positive");

        let now = self.blockchain().get_block_timestamp();
        self.quotes(&asset).update(|quote| {
            quote.live_price = price.clone();
            quote.updated_at = now;
        });

        self.price_updated_event(&asset, now, &price);
    }

    // Vazio quando não há cotação utilizável para o token
    #[view(assetToReference)]
    fn asset_to_reference(&self, amount: BigUint, asset: TokenIdentifier) -> OptionalValue<BigUint> {
        match self.usable_quote(&asset) {
            Some((price, decimals)) => {
                OptionalValue::Some(amount * price / self.pow10(decimals))
            },
            None => OptionalValue::None,
        }
    }

    #[view(referenceToAsset)]
    fn reference_to_asset(&self, reference_amount: BigUint, asset: TokenIdentifier) -> OptionalValue<BigUint> {
        match self.usable_quote(&asset) {
            Some((price, decimals)) => {
                OptionalValue::Some(reference_amount * self.pow10(decimals) / price)
            },
            None => OptionalValue::None,
        }
    }

    #[view(getQuote)]
    fn get_quote(&self, asset: TokenIdentifier) -> OptionalValue<AssetQuote<Self::Api>> {
        if self.quotes(&asset).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.quotes(&asset).get())
        }
    }

    #[view(getReferenceDecimals)]
    fn get_reference_decimals(&self) -> u32 {
        REFERENCE_DECIMALS
    }

    /// Cotação ao vivo se ainda fresca, senão a de reserva (se houver)
    fn usable_quote(&self, asset: &TokenIdentifier) -> Option<(BigUint, u32)> {
        if self.quotes(asset).is_empty() {
            return None;
        }

        let quote = self.quotes(asset).get();
        let now = self.blockchain().get_block_timestamp();
        let fresh = quote.live_price > 0u64
            && quote.updated_at <= now
            && now - quote.updated_at <= self.max_quote_age().get();

        if fresh {
            Some((quote.live_price, quote.decimals))
        } else if quote.fallback_price > 0u64 {
            Some((quote.fallback_price, quote.decimals))
        } else {
            None
        }
    }

    fn pow10(&self, decimals: u32) -> BigUint {
        BigUint::from(10u64).pow(decimals)
    }

    #[event("price_updated")]
    fn price_updated_event(
        &self,
        #[indexed] asset: &TokenIdentifier,
        #[indexed] timestamp: u64,
        price: &BigUint,
    );

    #[event("fallback_price_set")]
    fn fallback_price_set_event(&self, #[indexed] asset: &TokenIdentifier, price: &BigUint);

    // --- Storage mappers ---
    #[storage_mapper("feeder_address")]
    fn feeder_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("max_quote_age")]
    fn max_quote_age(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quotes")]
    fn quotes(&self, asset: &TokenIdentifier) -> SingleValueMapper<AssetQuote<Self::Api>>;
}
