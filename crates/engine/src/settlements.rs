//! Debt simplification.
//!
//! [`plan_settlements`] turns a set of balances into a list of direct
//! payments that brings everyone back to zero. The matching is greedy:
//! debtors and creditors are walked in roster order with two cursors and
//! each step pays as much as both sides allow. This is not guaranteed to
//! use the fewest possible payments, but it is linear, deterministic and
//! never emits more than `debtors + creditors - 1` transfers.

use serde::{Deserialize, Serialize};

use crate::{Balances, EPSILON, EngineError, MoneyCents, Person, ResultEngine};

/// A single directed payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: Person,
    pub to: Person,
    pub amount: MoneyCents,
}

/// Ordered list of settlements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementPlan(Vec<Settlement>);

impl SettlementPlan {
    pub fn iter(&self) -> std::slice::Iter<'_, Settlement> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every payment in the plan.
    pub fn total(&self) -> MoneyCents {
        self.0.iter().map(|s| s.amount).sum()
    }

    /// Total paid by `name` across the plan.
    pub fn paid_by(&self, name: &str) -> MoneyCents {
        self.0
            .iter()
            .filter(|s| s.from.name() == name)
            .map(|s| s.amount)
            .sum()
    }

    /// Total received by `name` across the plan.
    pub fn received_by(&self, name: &str) -> MoneyCents {
        self.0
            .iter()
            .filter(|s| s.to.name() == name)
            .map(|s| s.amount)
            .sum()
    }

}

impl<'a> IntoIterator for &'a SettlementPlan {
    type Item = &'a Settlement;
    type IntoIter = std::slice::Iter<'a, Settlement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outstanding amount of one side of the matching. Always positive.
struct Open<'a> {
    person: &'a Person,
    remaining: MoneyCents,
}

/// Plans the payments that settle `balances`.
///
/// People within epsilon of zero are left out. Debtors and creditors keep
/// the order of `balances`. Returns an empty plan when everybody is
/// settled.
///
/// Fails with [`EngineError::InternalInconsistency`] if the payments miss
/// the debtor or creditor total by more than `EPSILON`, plus whatever the
/// left-out balances and [`Balances::rounding_slack`] account for. That
/// only happens when `balances` does not sum to zero.
pub fn plan_settlements(balances: &Balances) -> ResultEngine<SettlementPlan> {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    let mut left_out = MoneyCents::ZERO;
    for balance in balances {
        if balance.amount.is_within_epsilon() {
            left_out += balance.amount.abs();
            continue;
        }
        if balance.amount.is_positive() {
            creditors.push(Open {
                person: &balance.person,
                remaining: balance.amount,
            });
        } else {
            debtors.push(Open {
                person: &balance.person,
                remaining: -balance.amount,
            });
        }
    }

    let owed_total: MoneyCents = creditors.iter().map(|c| c.remaining).sum();
    let owing_total: MoneyCents = debtors.iter().map(|d| d.remaining).sum();

    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let pay = debtor.remaining.min(creditor.remaining);

        settlements.push(Settlement {
            from: debtor.person.clone(),
            to: creditor.person.clone(),
            amount: pay,
        });

        debtor.remaining -= pay;
        creditor.remaining -= pay;

        if debtor.remaining.is_negligible() {
            i += 1;
        }
        if creditor.remaining.is_negligible() {
            j += 1;
        }
    }

    let plan = SettlementPlan(settlements);
    let paid = plan.total();
    let allowed = EPSILON + left_out + balances.rounding_slack();
    if (paid - owed_total).abs() > allowed || (paid - owing_total).abs() > allowed {
        return Err(EngineError::InternalInconsistency(format!(
            "settlements move {paid} but creditors are owed {owed_total} \
             and debtors owe {owing_total}"
        )));
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = plan.len(),
        "planned settlements"
    );
    Ok(plan)
}
