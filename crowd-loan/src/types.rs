multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/*
Status do empréstimo
Inactive → PledgeSubmitted → InvestmentActive → {FundingSuccessful | FundingFailed}
→ FundsWithdrawn → InRepayment → {Completed | Defaulted}
*/
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug)]
pub enum LoanStatus {
    Inactive,
    PledgeSubmitted,
    InvestmentActive,
    FundingSuccessful,
    FundingFailed,
    FundsWithdrawn,
    InRepayment,
    Completed,
    Defaulted,
}

// Capacidades administrativas concedidas por endereço
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Capability {
    Initializer,
    Pauser,
    RiskManager,
    OracleManager,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Initializer,
        Capability::Pauser,
        Capability::RiskManager,
        Capability::OracleManager,
    ];
}

// Dados do empréstimo (único por instância do contrato)
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Loan<M: ManagedTypeApi> {
    pub client: ManagedAddress<M>,
    pub funding_token: TokenIdentifier<M>,
    pub funding_decimals: u32,
    pub target_amount: BigUint<M>,
    pub total_funded: BigUint<M>,
    pub remaining_balance: BigUint<M>,
    pub investment_period_end: u64,
    pub withdrawal_deadline: u64,
    pub repayment_interval: u64,
    pub interest_rate_bps: u64,
    pub next_repayment_due: u64,
    pub total_repayments: u64,
    pub completed_repayments: u64,
    pub risk_rating: u8,
    pub jurisdiction: ManagedBuffer<M>,
}

// Garantia depositada pelo cliente
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Pledge<M: ManagedTypeApi> {
    pub token: TokenIdentifier<M>,
    pub amount: BigUint<M>,
    pub document_hash: ManagedBuffer<M>,
    pub locked: bool,
}

// Parcela do cronograma; due_date só é definido no saque dos fundos
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Repayment<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub penalty: BigUint<M>,
    pub due_date: u64,
    pub paid_date: u64,
    pub paid: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug)]
pub enum VoteStatus {
    NotStarted,
    Active,
    Completed,
}

// Votação de expropriação (reutilizável)
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Vote<M: ManagedTypeApi> {
    pub repayment_id: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub status: VoteStatus,
    pub approved: bool,
}

impl<M: ManagedTypeApi> Vote<M> {
    pub fn not_started() -> Self {
        Vote {
            repayment_id: 0,
            start_time: 0,
            end_time: 0,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            status: VoteStatus::NotStarted,
            approved: false,
        }
    }

    pub fn total_votes(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }
}
