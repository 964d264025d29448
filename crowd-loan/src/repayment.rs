multiversx_sc::imports!();

use crate::types::{Loan, LoanStatus, Repayment};
use crate::{MAX_PENALTY_PERCENT, WEEK};

// Cronograma de pagamentos e multa por atraso
#[multiversx_sc::module]
pub trait RepaymentModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access_control::AccessControlModule
{
    // Saque dos fundos captados; fixa as datas de vencimento das parcelas
    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self) {
        self.require_not_paused();
        self.lock_operation();

        let client = self.require_verified_client();
        require!(
            self.status().get() == LoanStatus::FundingSuccessful,
            "Funding not successful"
        );

        let mut loan = self.loan().get();
        let now = self.blockchain().get_block_timestamp();
        require!(now <= loan.withdrawal_deadline, "Withdrawal deadline has passed");

        for repayment_id in 0..loan.total_repayments {
            let due_date = now + (repayment_id + 1) * loan.repayment_interval;
            let principal = self.repayments(repayment_id).update(|repayment| {
                repayment.due_date = due_date;
                repayment.principal.clone()
            });
            self.repayment_scheduled_event(repayment_id, due_date, &principal);
        }
        loan.next_repayment_due = now + loan.repayment_interval;

        self.status().set(LoanStatus::FundsWithdrawn);
        self.funds_withdrawn_event(&client, &loan.total_funded);
        self.status().set(LoanStatus::InRepayment);
        self.loan().set(&loan);

        self.send().direct_esdt(&client, &loan.funding_token, 0, &loan.total_funded);

        self.unlock_operation();
    }

    // Paga uma parcela; o excedente enviado é devolvido ao cliente
    #[payable("*")]
    #[endpoint(makeRepayment)]
    fn make_repayment(&self, repayment_id: u64) {
        self.require_not_paused();
        self.lock_operation();

        let client = self.require_verified_client();
        require!(
            self.status().get() == LoanStatus::InRepayment,
            "Loan is not in repayment"
        );

        let mut loan = self.loan().get();
        require!(repayment_id < loan.total_repayments, "Invalid repayment id");

        let mut repayment = self.repayments(repayment_id).get();
        require!(!repayment.paid, "Repayment already made");

        let payment = self.call_value().single_esdt();
        let received = payment.amount.clone();
        require!(
            payment.token_identifier == loan.funding_token && payment.token_nonce == 0,
            "Invalid repayment token"
        );

        let now = self.blockchain().get_block_timestamp();
        let (weeks_late, penalty) = self.calculate_penalty(&repayment, now);
        let amount_due = &repayment.principal + &penalty;
        require!(received >= amount_due, "Insufficient repayment amount");

        repayment.penalty = penalty.clone();
        repayment.paid = true;
        repayment.paid_date = now;
        self.repayments(repayment_id).set(&repayment);

        loan.remaining_balance -= &repayment.principal;
        loan.completed_repayments += 1;

        if penalty > 0u64 {
            self.penalty_calculated_event(repayment_id, weeks_late, &penalty);
        }
        self.repayment_received_event(repayment_id, &repayment.principal, &penalty);

        if loan.completed_repayments == loan.total_repayments {
            self.status().set(LoanStatus::Completed);
            self.loan_completed_event(now);

            let mut pledge = self.pledge().get();
            pledge.locked = false;
            self.pledge().set(&pledge);
            self.pledge_unlocked_event(&client, &pledge.amount);
        } else if let Some(next_due) = self.following_unpaid_due_date(&loan, repayment_id) {
            loan.next_repayment_due = next_due;
        }
        self.loan().set(&loan);

        let surplus = &received - &amount_due;
        if surplus > 0u64 {
            self.send().direct_esdt(&client, &loan.funding_token, 0, &surplus);
        }

        self.unlock_operation();
    }

    /// Valor da parcela e a multa que seria cobrada se paga agora.
    /// Para parcelas já pagas, retorna a multa efetivamente cobrada.
    #[view(getRepaymentDue)]
    fn get_repayment_due(&self, repayment_id: u64) -> MultiValue2<BigUint, BigUint> {
        require!(!self.loan().is_empty(), "Loan not initialized");
        require!(
            repayment_id < self.loan().get().total_repayments,
            "Invalid repayment id"
        );

        let repayment = self.repayments(repayment_id).get();
        let penalty = if repayment.paid {
            repayment.penalty.clone()
        } else {
            let (_, penalty) = self.calculate_penalty(&repayment, self.blockchain().get_block_timestamp());
            penalty
        };
        (repayment.principal, penalty).into()
    }

    // 1% do valor por semana completa de atraso, limitado a 50%
    fn calculate_penalty(&self, repayment: &Repayment<Self::Api>, paid_at: u64) -> (u64, BigUint) {
        if repayment.due_date == 0 || paid_at <= repayment.due_date {
            return (0, BigUint::zero());
        }

        let weeks_late = (paid_at - repayment.due_date) / WEEK;
        let hundred = BigUint::from(100u64);
        let penalty = &repayment.principal * &BigUint::from(weeks_late) / &hundred;
        let cap = &repayment.principal * &BigUint::from(MAX_PENALTY_PERCENT) / &hundred;
        if penalty > cap {
            (weeks_late, cap)
        } else {
            (weeks_late, penalty)
        }
    }

    // Próxima parcela em aberto depois da que foi paga; se não houver,
    // volta ao início do cronograma
    fn following_unpaid_due_date(&self, loan: &Loan<Self::Api>, paid_id: u64) -> Option<u64> {
        ((paid_id + 1)..loan.total_repayments)
            .chain(0..paid_id)
            .map(|repayment_id| self.repayments(repayment_id).get())
            .find(|repayment| !repayment.paid)
            .map(|repayment| repayment.due_date)
    }
}
