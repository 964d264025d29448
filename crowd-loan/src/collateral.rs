multiversx_sc::imports!();

use crate::types::{LoanStatus, Pledge};

// Custódia da garantia: depósito, bloqueio, desbloqueio e devolução ao cliente
#[multiversx_sc::module]
pub trait CollateralModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access_control::AccessControlModule
    + crate::price_conversion::PriceConversionModule
{
    // Recebe a garantia enviada junto com a chamada e a bloqueia
    #[payable("*")]
    #[endpoint(submitPledge)]
    fn submit_pledge(&self, document_hash: ManagedBuffer) {
        self.require_not_paused();
        self.lock_operation();

        let client = self.require_verified_client();
        require!(
            self.status().get() == LoanStatus::PledgeSubmitted,
            "Loan is not awaiting a pledge"
        );

        let payment = self.call_value().single_esdt();
        let token = payment.token_identifier.clone();
        let amount = payment.amount.clone();
        require!(payment.token_nonce == 0, "Pledge must be a fungible token");
        require!(amount > 0u64, "Pledge amount must be positive");
        require!(!document_hash.is_empty(), "Document hash cannot be empty");

        let loan = self.loan().get();
        if let Some(sufficient) = self.check_collateral_value(&token, &amount, &loan) {
            require!(sufficient, "Insufficient collateral value");
        }

        self.pledge().set(Pledge {
            token: token.clone(),
            amount: amount.clone(),
            document_hash: document_hash.clone(),
            locked: true,
        });
        self.status().set(LoanStatus::InvestmentActive);

        self.pledge_submitted_event(&client, &token, &document_hash, &amount);
        self.pledge_locked_event(&token, &amount);

        self.unlock_operation();
    }

    // Libera a garantia após uma captação fracassada
    #[endpoint(unlockPledge)]
    fn unlock_pledge(&self) {
        self.require_not_paused();

        let client = self.require_loan_client();
        require!(
            self.status().get() == LoanStatus::FundingFailed,
            "Funding has not failed"
        );
        require!(!self.pledge().is_empty(), "No pledge submitted");

        let mut pledge = self.pledge().get();
        require!(pledge.locked, "Pledge is not locked");
        pledge.locked = false;
        self.pledge().set(&pledge);

        self.pledge_unlocked_event(&client, &pledge.amount);
    }

    // Devolve a garantia desbloqueada ao cliente
    #[endpoint(withdrawPledge)]
    fn withdraw_pledge(&self) {
        self.require_not_paused();
        self.lock_operation();

        let client = self.require_loan_client();
        require!(!self.pledge().is_empty(), "No pledge submitted");

        let mut pledge = self.pledge().get();
        require!(!pledge.locked, "Pledge is still locked");
        require!(pledge.amount > 0u64, "Nothing to withdraw");

        let amount = pledge.amount.clone();
        pledge.amount = BigUint::zero();
        self.pledge().set(&pledge);

        self.send().direct_esdt(&client, &pledge.token, 0, &amount);
        self.pledge_withdrawn_event(&client, &pledge.token, &amount);

        self.unlock_operation();
    }
}
