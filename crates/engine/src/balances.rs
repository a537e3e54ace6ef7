//! Net balances per person.
//!
//! [`compute_balances`] folds a ledger into one signed amount per roster
//! member: positive means the person is owed money, negative means they owe.
//! Balances are derived data, rebuilt from scratch on every call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{EPSILON, EngineError, Expense, MoneyCents, Person, ResultEngine};

/// Whether a person is owed money, owes money, or is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    IsOwed,
    Owes,
    SettledUp,
}

impl BalanceStatus {
    /// Classifies an amount, treating anything within epsilon as settled.
    #[must_use]
    pub fn of(amount: MoneyCents) -> Self {
        if amount.is_within_epsilon() {
            Self::SettledUp
        } else if amount.is_positive() {
            Self::IsOwed
        } else {
            Self::Owes
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsOwed => "is_owed",
            Self::Owes => "owes",
            Self::SettledUp => "settled_up",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub person: Person,
    pub amount: MoneyCents,
}

impl Balance {
    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.amount)
    }
}

/// Balances of a whole roster, kept in roster order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    entries: Vec<Balance>,
    index: HashMap<Person, usize>,
    slack: MoneyCents,
}

impl Balances {
    /// Starts every person at zero, keeping the given order.
    ///
    /// Duplicated names keep their first position.
    pub fn zeroed<'a>(people: impl IntoIterator<Item = &'a Person>) -> Self {
        let mut balances = Self::default();
        for person in people {
            if balances.index.contains_key(person) {
                continue;
            }
            balances.index.insert(person.clone(), balances.entries.len());
            balances.entries.push(Balance {
                person: person.clone(),
                amount: MoneyCents::ZERO,
            });
        }
        balances
    }

    fn entry_mut(&mut self, person: &Person) -> ResultEngine<&mut Balance> {
        let idx = *self
            .index
            .get(person)
            .ok_or_else(|| EngineError::UnknownPerson(person.to_string()))?;
        Ok(&mut self.entries[idx])
    }

    /// Applies a single expense: the payer is credited the full amount and
    /// every owed share is debited from its holder.
    fn apply(&mut self, expense: &Expense) -> ResultEngine<()> {
        // Resolve every reference before touching any balance.
        let shares = expense.owed_shares()?;
        for (person, _) in &shares {
            if !self.index.contains_key(*person) {
                return Err(EngineError::UnknownPerson(person.to_string()));
            }
        }

        let owed: MoneyCents = shares.iter().map(|(_, share)| *share).sum();
        self.slack += (expense.amount - owed).abs().min(EPSILON);

        self.entry_mut(&expense.paid_by)?.amount += expense.amount;
        for (person, share) in shares {
            self.entry_mut(person)?.amount -= share;
        }
        Ok(())
    }

    /// Balance of `name`, if they are in the roster.
    pub fn get(&self, name: &str) -> Option<MoneyCents> {
        self.index.get(name).map(|&idx| self.entries[idx].amount)
    }

    /// Status of `name`, if they are in the roster.
    pub fn status(&self, name: &str) -> Option<BalanceStatus> {
        self.get(name).map(BalanceStatus::of)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Balance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every balance. Zero for any balances built from a valid ledger.
    pub fn total(&self) -> MoneyCents {
        self.entries.iter().map(|b| b.amount).sum()
    }

    /// Cents left unassigned by custom splits that missed their amount by
    /// at most `EPSILON`.
    pub fn rounding_slack(&self) -> MoneyCents {
        self.slack
    }

    /// Returns `true` when nobody owes more than `EPSILON`.
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|b| b.amount.is_within_epsilon())
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes the net balance of every person in `people` from `expenses`.
///
/// - Everyone in `people` gets an entry, even with no expenses at all.
/// - Expenses are applied in input order.
/// - A payer, participant or share holder outside `people` is an
///   [`EngineError::UnknownPerson`].
/// - A non-positive amount or an empty split is an
///   [`EngineError::InvalidExpense`].
///
/// Custom shares are trusted to add up to the expense amount. Whatever a
/// split leaves unassigned, up to `EPSILON` per expense, is tallied in
/// [`Balances::rounding_slack`].
pub fn compute_balances(people: &[Person], expenses: &[Expense]) -> ResultEngine<Balances> {
    let mut balances = Balances::zeroed(people);
    for expense in expenses {
        balances.apply(expense)?;
    }
    Ok(balances)
}
