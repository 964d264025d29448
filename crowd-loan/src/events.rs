multiversx_sc::imports!();

use crate::types::Capability;

// Trilha de auditoria: um evento por mudança de estado
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("loan_initialized")]
    fn loan_initialized_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] funding_token: &TokenIdentifier,
        #[indexed] total_repayments: u64,
        target_amount: &BigUint,
    );

    // ----- Custódia da garantia -----
    #[event("pledge_submitted")]
    fn pledge_submitted_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] document_hash: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("collateral_value_checked")]
    fn collateral_value_checked_event(&self, #[indexed] pledge_value: &BigUint, loan_value: &BigUint);

    #[event("pledge_locked")]
    fn pledge_locked_event(&self, #[indexed] token: &TokenIdentifier, amount: &BigUint);

    #[event("pledge_unlocked")]
    fn pledge_unlocked_event(&self, #[indexed] client: &ManagedAddress, amount: &BigUint);

    #[event("pledge_withdrawn")]
    fn pledge_withdrawn_event(
        &self,
        #[indexed] client: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    // ----- Investimentos -----
    #[event("investment_received")]
    fn investment_received_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] total_funded: &BigUint,
        amount: &BigUint,
    );

    #[event("funding_succeeded")]
    fn funding_succeeded_event(&self, #[indexed] total_funded: &BigUint, withdrawal_deadline: u64);

    #[event("funding_failed")]
    fn funding_failed_event(&self, #[indexed] total_funded: &BigUint, target_amount: &BigUint);

    #[event("gov_tokens_claimed")]
    fn gov_tokens_claimed_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    #[event("refund_claimed")]
    fn refund_claimed_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    // ----- Cronograma de pagamentos -----
    #[event("funds_withdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] client: &ManagedAddress, amount: &BigUint);

    #[event("repayment_scheduled")]
    fn repayment_scheduled_event(
        &self,
        #[indexed] repayment_id: u64,
        #[indexed] due_date: u64,
        amount: &BigUint,
    );

    #[event("penalty_calculated")]
    fn penalty_calculated_event(
        &self,
        #[indexed] repayment_id: u64,
        #[indexed] weeks_late: u64,
        penalty: &BigUint,
    );

    #[event("repayment_received")]
    fn repayment_received_event(
        &self,
        #[indexed] repayment_id: u64,
        #[indexed] principal: &BigUint,
        penalty: &BigUint,
    );

    #[event("loan_completed")]
    fn loan_completed_event(&self, #[indexed] completed_at: u64);

    // ----- Distribuição -----
    #[event("profit_claimed")]
    fn profit_claimed_event(
        &self,
        #[indexed] investor: &ManagedAddress,
        #[indexed] repayment_id: u64,
        amount: &BigUint,
    );

    #[event("pledge_share_claimed")]
    fn pledge_share_claimed_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    // ----- Governança -----
    #[event("vote_started")]
    fn vote_started_event(&self, #[indexed] repayment_id: u64, #[indexed] start_time: u64, end_time: u64);

    #[event("vote_cast")]
    fn vote_cast_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] support: bool, weight: &BigUint);

    #[event("vote_completed")]
    fn vote_completed_event(
        &self,
        #[indexed] votes_for: &BigUint,
        #[indexed] votes_against: &BigUint,
        approved: bool,
    );

    #[event("loan_defaulted")]
    fn loan_defaulted_event(&self, #[indexed] repayment_id: u64, defaulted_at: u64);

    // ----- Administração -----
    #[event("paused")]
    fn paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("capability_granted")]
    fn capability_granted_event(&self, #[indexed] principal: &ManagedAddress, #[indexed] capability: Capability);

    #[event("capability_revoked")]
    fn capability_revoked_event(&self, #[indexed] principal: &ManagedAddress, #[indexed] capability: Capability);

    #[event("min_credit_score_set")]
    fn min_credit_score_set_event(&self, #[indexed] score: u64);

    #[event("price_adapter_set")]
    fn price_adapter_set_event(&self, #[indexed] price_adapter: &ManagedAddress);
}
