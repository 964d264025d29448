// ==========================================================================
// MÓDULO: crowd-loan/src/crowd_loan.rs
// Descrição: Empréstimo coletivo com garantia. O cliente deposita a garantia,
//            investidores verificados financiam o valor alvo, o cliente paga
//            em parcelas e os investidores podem votar pela expropriação da
//            garantia em caso de atraso prolongado
// ==========================================================================

#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod access_control;
pub mod collateral;
pub mod distribution;
pub mod events;
pub mod governance;
pub mod investment;
pub mod price_conversion;
pub mod proxies;
pub mod repayment;
pub mod storage;
pub mod types;

use types::{Capability, Loan, LoanStatus, Pledge, Repayment, Vote};

// Parâmetros fixos da política de crédito
pub const MIN_COLLATERAL_RATIO_PERCENT: u64 = 120;
pub const HIGH_RISK_THRESHOLD: u8 = 70;
pub const MAX_RISK_RATING: u8 = 100;
pub const MAX_TOTAL_REPAYMENTS: u64 = 120;
pub const MAX_INTEREST_RATE_BPS: u64 = 10_000;
pub const MAX_MIN_CREDIT_SCORE: u64 = 1000;
pub const MAX_PENALTY_PERCENT: u64 = 50;

// Prazos (segundos)
pub const WEEK: u64 = 7 * 24 * 60 * 60;
pub const WITHDRAWAL_GRACE_PERIOD: u64 = WEEK;
pub const LATE_PAYMENT_THRESHOLD: u64 = 90 * 24 * 60 * 60;
pub const VOTING_PERIOD: u64 = WEEK;
pub const MAX_INVESTMENT_PERIOD: u64 = 365 * 24 * 60 * 60;
pub const MAX_REPAYMENT_INTERVAL: u64 = 365 * 24 * 60 * 60;

// Governança (pontos base)
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const QUORUM_BPS: u64 = 3_000;
pub const APPROVAL_BPS: u64 = 5_100;

#[multiversx_sc::contract]
pub trait CrowdLoan:
    storage::StorageModule
    + events::EventsModule
    + access_control::AccessControlModule
    + price_conversion::PriceConversionModule
    + collateral::CollateralModule
    + investment::InvestmentModule
    + repayment::RepaymentModule
    + distribution::DistributionModule
    + governance::GovernanceModule
{
    // O implantador recebe todas as capacidades administrativas
    #[init]
    fn init(
        &self,
        identity_registry_address: ManagedAddress,
        gov_token_address: ManagedAddress,
        price_adapter_address: OptionalValue<ManagedAddress>,
    ) {
        require!(!identity_registry_address.is_zero(), "Invalid identity registry address");
        require!(!gov_token_address.is_zero(), "Invalid governance token address");

        self.identity_registry_address().set(identity_registry_address);
        self.gov_token_address().set(gov_token_address);
        if let OptionalValue::Some(price_adapter) = price_adapter_address {
            self.price_adapter_address().set(price_adapter);
        }

        let owner = self.blockchain().get_caller();
        for capability in Capability::ALL {
            self.capabilities(&owner).insert(capability);
        }

        self.status().set(LoanStatus::Inactive);
        self.vote().set(Vote::not_started());
        self.paused().set(false);
        self.operation_locked().set(false);
    }

    // Define os termos do empréstimo e monta o cronograma de parcelas
    #[endpoint(initializeLoan)]
    fn initialize_loan(
        &self,
        client: ManagedAddress,
        funding_token: TokenIdentifier,
        funding_decimals: u32,
        target_amount: BigUint,
        investment_period: u64,
        repayment_interval: u64,
        total_repayments: u64,
        interest_rate_bps: u64,
        risk_rating: u8,
        jurisdiction: ManagedBuffer,
    ) {
        self.require_not_paused();
        self.authorize(&self.blockchain().get_caller(), Capability::Initializer);
        require!(
            self.status().get() == LoanStatus::Inactive,
            "Loan already initialized"
        );

        require!(!client.is_zero(), "Invalid client address");
        require!(funding_token.is_valid_esdt_identifier(), "Invalid funding token");
        require!(target_amount > 0u64, "Target amount must be positive");
        require!(investment_period > 0, "Investment period must be positive");
        require!(investment_period <= MAX_INVESTMENT_PERIOD, "Investment period too long");
        require!(repayment_interval > 0, "Repayment interval must be positive");
        require!(repayment_interval <= MAX_REPAYMENT_INTERVAL, "Repayment interval too long");
        require!(
            total_repayments > 0 && total_repayments <= MAX_TOTAL_REPAYMENTS,
            "Invalid number of repayments"
        );
        require!(
            risk_rating > 0 && risk_rating <= MAX_RISK_RATING,
            "Invalid risk rating"
        );
        require!(interest_rate_bps <= MAX_INTEREST_RATE_BPS, "Invalid interest rate");

        let interest = &target_amount * &BigUint::from(interest_rate_bps) / &BigUint::from(BPS_DENOMINATOR);
        let total_owed = &target_amount + &interest;
        let installment = &total_owed / &BigUint::from(total_repayments);

        // A última parcela absorve o resto da divisão
        let mut scheduled = BigUint::zero();
        for repayment_id in 0..total_repayments {
            let principal = if repayment_id + 1 == total_repayments {
                &total_owed - &scheduled
            } else {
                installment.clone()
            };
            scheduled += &principal;
            self.repayments(repayment_id).set(Repayment {
                principal,
                penalty: BigUint::zero(),
                due_date: 0,
                paid_date: 0,
                paid: false,
            });
        }

        let now = self.blockchain().get_block_timestamp();
        let loan = Loan {
            client: client.clone(),
            funding_token: funding_token.clone(),
            funding_decimals,
            target_amount: target_amount.clone(),
            total_funded: BigUint::zero(),
            remaining_balance: total_owed,
            investment_period_end: now + investment_period,
            withdrawal_deadline: 0,
            repayment_interval,
            interest_rate_bps,
            next_repayment_due: 0,
            total_repayments,
            completed_repayments: 0,
            risk_rating,
            jurisdiction,
        };
        self.loan().set(&loan);
        self.status().set(LoanStatus::PledgeSubmitted);

        self.loan_initialized_event(&client, &funding_token, total_repayments, &target_amount);
    }

    // Pontuação mínima de crédito exigida dos clientes (escala 0-1000)
    #[endpoint(setMinCreditScore)]
    fn set_min_credit_score(&self, score: u64) {
        self.require_not_paused();
        self.authorize(&self.blockchain().get_caller(), Capability::RiskManager);
        require!(score <= MAX_MIN_CREDIT_SCORE, "Invalid credit score");

        self.min_credit_score().set(score);
        self.min_credit_score_set_event(score);
    }

    #[endpoint(setPriceAdapter)]
    fn set_price_adapter(&self, price_adapter: ManagedAddress) {
        self.require_not_paused();
        self.authorize(&self.blockchain().get_caller(), Capability::OracleManager);
        require!(!price_adapter.is_zero(), "Invalid price adapter address");

        self.price_adapter_address().set(&price_adapter);
        self.price_adapter_set_event(&price_adapter);
    }

    // ----- Consultas -----
    #[view(getLoan)]
    fn get_loan(&self) -> OptionalValue<Loan<Self::Api>> {
        if self.loan().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.loan().get())
        }
    }

    #[view(getPledge)]
    fn get_pledge(&self) -> OptionalValue<Pledge<Self::Api>> {
        if self.pledge().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.pledge().get())
        }
    }

    #[view(getRepayment)]
    fn get_repayment(&self, repayment_id: u64) -> Repayment<Self::Api> {
        require!(!self.repayments(repayment_id).is_empty(), "Invalid repayment id");
        self.repayments(repayment_id).get()
    }

    #[view(getVote)]
    fn get_vote(&self) -> Vote<Self::Api> {
        self.vote().get()
    }

    #[view(getPriceAdapterAddress)]
    fn get_price_adapter_address(&self) -> OptionalValue<ManagedAddress> {
        if self.price_adapter_address().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.price_adapter_address().get())
        }
    }

    #[view(getInvestors)]
    fn get_investors(&self) -> MultiValueEncoded<ManagedAddress> {
        self.investors().iter().collect()
    }

    #[view(getTotalFunded)]
    fn get_total_funded(&self) -> BigUint {
        if self.loan().is_empty() {
            return BigUint::zero();
        }
        self.loan().get().total_funded
    }

    #[view(getRemainingBalance)]
    fn get_remaining_balance(&self) -> BigUint {
        if self.loan().is_empty() {
            return BigUint::zero();
        }
        self.loan().get().remaining_balance
    }
}
