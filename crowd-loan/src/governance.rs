multiversx_sc::imports!();

use crate::proxies::gov_token_proxy::ProxyTrait as _;
use crate::types::{LoanStatus, Vote, VoteStatus};
use crate::{APPROVAL_BPS, BPS_DENOMINATOR, LATE_PAYMENT_THRESHOLD, QUORUM_BPS, VOTING_PERIOD};

// Votação de expropriação: investidores decidem, com quórum e maioria,
// declarar o empréstimo inadimplente após atraso prolongado
#[multiversx_sc::module]
pub trait GovernanceModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access_control::AccessControlModule
{
    #[endpoint(startExpropriationVote)]
    fn start_expropriation_vote(&self, repayment_id: u64) {
        self.require_not_paused();
        self.require_investor_with_stake();
        require!(
            self.status().get() == LoanStatus::InRepayment,
            "Loan is not in repayment"
        );
        require!(
            repayment_id < self.loan().get().total_repayments,
            "Invalid repayment id"
        );

        let repayment = self.repayments(repayment_id).get();
        require!(!repayment.paid, "Repayment already made");

        let now = self.blockchain().get_block_timestamp();
        require!(
            now > repayment.due_date + LATE_PAYMENT_THRESHOLD,
            "Repayment is not late enough"
        );
        require!(
            self.vote().get().status != VoteStatus::Active,
            "Vote already active"
        );

        let vote = Vote {
            repayment_id,
            start_time: now,
            end_time: now + VOTING_PERIOD,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            status: VoteStatus::Active,
            approved: false,
        };
        self.vote().set(&vote);

        self.vote_started_event(repayment_id, vote.start_time, vote.end_time);
    }

    // Peso do voto = saldo de tokens de governança no momento do voto,
    // limitado ao que foi emitido para o próprio investidor
    #[endpoint(vote)]
    fn vote_on_expropriation(&self, support: bool) {
        self.require_not_paused();
        let (caller, contribution) = self.require_investor_with_stake();

        let mut vote = self.vote().get();
        require!(vote.status == VoteStatus::Active, "No active vote");
        require!(
            self.blockchain().get_block_timestamp() <= vote.end_time,
            "Voting period has ended"
        );
        require!(
            !self.has_voted(vote.start_time, &caller).get(),
            "Already voted"
        );

        let gov_token = self.gov_token_address().get();
        let balance: BigUint = self
            .gov_token_proxy(gov_token)
            .balance_of(caller.clone())
            .execute_on_dest_context();
        let minted = if self.gov_tokens_claimed(&caller).get() {
            contribution
        } else {
            BigUint::zero()
        };
        let weight = if balance > minted { minted } else { balance };
        require!(weight > 0u64, "No voting power");

        if support {
            vote.votes_for += &weight;
        } else {
            vote.votes_against += &weight;
        }
        self.has_voted(vote.start_time, &caller).set(true);
        self.vote().set(&vote);

        self.vote_cast_event(&caller, support, &weight);
    }

    #[endpoint(finalizeVote)]
    fn finalize_vote(&self) {
        self.require_not_paused();

        let mut vote = self.vote().get();
        require!(vote.status == VoteStatus::Active, "No active vote");
        require!(
            self.blockchain().get_block_timestamp() > vote.end_time,
            "Voting period still active"
        );

        let gov_token = self.gov_token_address().get();
        let total_supply: BigUint = self
            .gov_token_proxy(gov_token)
            .total_supply()
            .execute_on_dest_context();

        let total_votes = vote.total_votes();
        vote.approved = self.quorum_reached(&total_votes, &total_supply)
            && self.approval_reached(&vote.votes_for, &total_votes);
        vote.status = VoteStatus::Completed;
        self.vote().set(&vote);

        self.vote_completed_event(&vote.votes_for, &vote.votes_against, vote.approved);

        if vote.approved
            && self.status().get() == LoanStatus::InRepayment
            && !self.repayments(vote.repayment_id).get().paid
        {
            self.status().set(LoanStatus::Defaulted);
            self.loan_defaulted_event(vote.repayment_id, self.blockchain().get_block_timestamp());
        }
    }

    // Participação mínima de 30% do suprimento de governança
    fn quorum_reached(&self, total_votes: &BigUint, total_supply: &BigUint) -> bool {
        *total_supply > 0u64
            && total_votes * &BigUint::from(BPS_DENOMINATOR) >= total_supply * &BigUint::from(QUORUM_BPS)
    }

    // Maioria de 51% dos votos emitidos
    fn approval_reached(&self, votes_for: &BigUint, total_votes: &BigUint) -> bool {
        *total_votes > 0u64
            && votes_for * &BigUint::from(BPS_DENOMINATOR) >= total_votes * &BigUint::from(APPROVAL_BPS)
    }
}
