//! Group overview: total spending, balances and the settlement plan.

use crate::{
    Balances, Expense, MoneyCents, Person, ResultEngine, SettlementPlan, compute_balances,
    plan_settlements,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
    /// Sum of every expense amount.
    pub total_spending: MoneyCents,
    pub balances: Balances,
    pub settlements: SettlementPlan,
}

impl GroupSummary {
    /// Returns `true` when no payment is needed.
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}

/// Runs both stages of the engine over a roster and ledger.
pub fn summarize(people: &[Person], expenses: &[Expense]) -> ResultEngine<GroupSummary> {
    let balances = compute_balances(people, expenses)?;
    let settlements = plan_settlements(&balances)?;
    Ok(GroupSummary {
        total_spending: expenses.iter().map(|e| e.amount).sum(),
        balances,
        settlements,
    })
}
