multiversx_sc::imports!();

use crate::types::LoanStatus;

// Distribuição proporcional dos pagamentos e, após inadimplência, da garantia
#[multiversx_sc::module]
pub trait DistributionModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access_control::AccessControlModule
{
    #[endpoint(claimRepaymentProfit)]
    fn claim_repayment_profit(&self, repayment_id: u64) {
        self.require_not_paused();
        self.lock_operation();

        let (caller, contribution) = self.require_investor_with_stake();
        let loan = self.loan().get();
        require!(repayment_id < loan.total_repayments, "Invalid repayment id");

        let repayment = self.repayments(repayment_id).get();
        require!(repayment.paid, "Repayment not yet made");
        require!(
            self.profit_claimed(repayment_id, &caller).is_empty(),
            "Profit already claimed"
        );

        let share = &contribution * &(&repayment.principal + &repayment.penalty) / &loan.total_funded;
        require!(share > 0u64, "Nothing to claim");

        self.profit_claimed(repayment_id, &caller).set(&share);

        self.send().direct_esdt(&caller, &loan.funding_token, 0, &share);
        self.profit_claimed_event(&caller, repayment_id, &share);

        self.unlock_operation();
    }

    // A parte é calculada sobre o saldo atual da garantia, portanto depende
    // da ordem em que os investidores fazem o resgate
    #[endpoint(claimPledgeShare)]
    fn claim_pledge_share(&self) {
        self.require_not_paused();
        self.lock_operation();

        let (caller, contribution) = self.require_investor_with_stake();
        require!(
            self.status().get() == LoanStatus::Defaulted,
            "Loan is not defaulted"
        );

        let mut pledge = self.pledge().get();
        require!(pledge.amount > 0u64, "No collateral left");

        let claimed = self.pledge_share_claimed(&caller).get();
        let entitlement = if claimed >= contribution {
            BigUint::zero()
        } else {
            &contribution - &claimed
        };

        let total_funded = self.loan().get().total_funded;
        let share = &entitlement * &pledge.amount / &total_funded;
        require!(share > 0u64, "Nothing to claim");

        self.pledge_share_claimed(&caller).set(&claimed + &share);
        pledge.amount -= &share;
        self.pledge().set(&pledge);

        self.send().direct_esdt(&caller, &pledge.token, 0, &share);
        self.pledge_share_claimed_event(&caller, &share);

        self.unlock_operation();
    }
}
