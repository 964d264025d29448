multiversx_sc::imports!();

use common_types::{AccreditationLevel, Role};

use crate::proxies::gov_token_proxy::ProxyTrait as _;
use crate::types::LoanStatus;
use crate::{HIGH_RISK_THRESHOLD, WITHDRAWAL_GRACE_PERIOD};

// Livro de investimentos: aportes, teto de captação, reembolsos e direitos de voto
#[multiversx_sc::module]
pub trait InvestmentModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access_control::AccessControlModule
    + crate::price_conversion::PriceConversionModule
{
    #[payable("*")]
    #[endpoint(invest)]
    fn invest(&self) {
        self.require_not_paused();
        self.lock_operation();

        let caller = self.blockchain().get_caller();
        let verification = self.require_verified(&caller, Role::Investor);
        require!(
            self.status().get() == LoanStatus::InvestmentActive,
            "Investment is not active"
        );

        let mut loan = self.loan().get();
        let now = self.blockchain().get_block_timestamp();
        require!(now <= loan.investment_period_end, "Investment period has ended");

        let payment = self.call_value().single_esdt();
        let amount = payment.amount.clone();
        require!(
            payment.token_identifier == loan.funding_token && payment.token_nonce == 0,
            "Invalid funding token"
        );
        require!(amount > 0u64, "Investment amount must be positive");

        if loan.risk_rating > HIGH_RISK_THRESHOLD {
            require!(
                verification.accreditation >= AccreditationLevel::AccreditedIndividual,
                "High-risk loan requires accredited investor"
            );
        }

        let previous = self.investments(&caller).get();
        let limit = self.investment_limit_in_funding_units(&verification.usd_limit, &loan);
        require!(&previous + &amount <= limit, "Investment exceeds investor limit");
        require!(
            &loan.total_funded + &amount <= loan.target_amount,
            "Investment exceeds target amount"
        );

        self.investments(&caller).set(&previous + &amount);
        self.investors().insert(caller.clone());
        loan.total_funded += &amount;

        self.investment_received_event(&caller, &loan.total_funded, &amount);

        if loan.total_funded == loan.target_amount {
            loan.withdrawal_deadline = now + WITHDRAWAL_GRACE_PERIOD;
            self.status().set(LoanStatus::FundingSuccessful);
            self.funding_succeeded_event(&loan.total_funded, loan.withdrawal_deadline);
        }
        self.loan().set(&loan);

        self.unlock_operation();
    }

    // Encerra a captação depois do período de investimento, ou marca como
    // fracassada a captação cujo prazo de saque expirou
    #[endpoint(updateFundingStatus)]
    fn update_funding_status(&self) {
        self.require_not_paused();
        require!(!self.loan().is_empty(), "Loan not initialized");

        let now = self.blockchain().get_block_timestamp();
        match self.status().get() {
            LoanStatus::InvestmentActive => {
                let mut loan = self.loan().get();
                require!(now > loan.investment_period_end, "Investment period still active");

                if loan.total_funded >= loan.target_amount {
                    loan.withdrawal_deadline = now + WITHDRAWAL_GRACE_PERIOD;
                    self.status().set(LoanStatus::FundingSuccessful);
                    self.funding_succeeded_event(&loan.total_funded, loan.withdrawal_deadline);
                    self.loan().set(&loan);
                } else {
                    self.mark_funding_failed();
                }
            },
            LoanStatus::FundingSuccessful => {
                require!(
                    now > self.loan().get().withdrawal_deadline,
                    "Withdrawal period still active"
                );
                self.mark_funding_failed();
            },
            _ => sc_panic!("Funding status cannot be updated"),
        }
    }

    #[endpoint(claimRefund)]
    fn claim_refund(&self) {
        self.require_not_paused();
        self.lock_operation();

        let (caller, contribution) = self.require_investor_with_stake();

        if self.status().get() == LoanStatus::FundingSuccessful
            && self.blockchain().get_block_timestamp() > self.loan().get().withdrawal_deadline
        {
            self.mark_funding_failed();
        }
        require!(
            self.status().get() == LoanStatus::FundingFailed,
            "Refunds are not available"
        );
        require!(!self.refund_claimed(&caller).get(), "Refund already claimed");

        self.refund_claimed(&caller).set(true);

        let funding_token = self.loan().get().funding_token;
        self.send().direct_esdt(&caller, &funding_token, 0, &contribution);
        self.refund_claimed_event(&caller, &contribution);

        self.unlock_operation();
    }

    // Cunha o peso de governança equivalente ao aporte do investidor
    #[endpoint(claimGovTokens)]
    fn claim_gov_tokens(&self) {
        self.require_not_paused();
        self.lock_operation();

        let (caller, contribution) = self.require_investor_with_stake();
        let status = self.status().get();
        require!(
            status == LoanStatus::FundingSuccessful
                || status == LoanStatus::FundsWithdrawn
                || status == LoanStatus::InRepayment,
            "Governance tokens not available"
        );
        require!(
            !self.gov_tokens_claimed(&caller).get(),
            "Governance tokens already claimed"
        );

        self.gov_tokens_claimed(&caller).set(true);

        let gov_token = self.gov_token_address().get();
        self.gov_token_proxy(gov_token)
            .mint(caller.clone(), contribution.clone())
            .execute_on_dest_context::<()>();
        self.gov_tokens_claimed_event(&caller, &contribution);

        self.unlock_operation();
    }

    fn mark_funding_failed(&self) {
        let loan = self.loan().get();
        self.status().set(LoanStatus::FundingFailed);
        self.funding_failed_event(&loan.total_funded, &loan.target_amount);
    }
}
