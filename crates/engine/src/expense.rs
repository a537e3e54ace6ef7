//! Expense primitives.
//!
//! An [`Expense`] is a single payment made by one person on behalf of some
//! part of the group. How the cost is shared is described by its [`Split`].
//!
//! Expenses are immutable once recorded: the ledger only ever appends or
//! removes whole expenses.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, Person, ResultEngine};

/// Identifier of an expense inside a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Explicit amount owed by one person in a custom split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub person: Person,
    pub amount: MoneyCents,
}

impl Share {
    #[must_use]
    pub fn new(person: Person, amount: MoneyCents) -> Self {
        Self { person, amount }
    }
}

/// How an expense is divided among the group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Split {
    /// Divided evenly among the participants.
    Equal { participants: Vec<Person> },
    /// Divided by explicit per-person amounts that add up to the total.
    Custom { shares: Vec<Share> },
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal { .. } => "equal",
            Self::Custom { .. } => "custom",
        }
    }

    /// Everyone who owes part of the expense, in declaration order.
    pub fn people(&self) -> Box<dyn Iterator<Item = &Person> + '_> {
        match self {
            Self::Equal { participants } => Box::new(participants.iter()),
            Self::Custom { shares } => Box::new(shares.iter().map(|share| &share.person)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: MoneyCents,
    pub paid_by: Person,
    pub date: DateTime<Utc>,
    pub split: Split,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: MoneyCents,
        paid_by: Person,
        date: DateTime<Utc>,
        split: Split,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            paid_by,
            date,
            split,
        }
    }

    /// Returns `true` if `name` owes part of the expense without having paid
    /// for it.
    pub fn owed_by_other_than_payer(&self, name: &str) -> bool {
        self.paid_by.name() != name && self.split.people().any(|p| p.name() == name)
    }

    /// Resolves the amount each person owes for this expense.
    ///
    /// Equal splits are divided to the cent with leftover cents going to the
    /// first participants (see [`MoneyCents::split_evenly`]). Custom splits
    /// are returned as declared; their sum is not checked here.
    pub fn owed_shares(&self) -> ResultEngine<Vec<(&Person, MoneyCents)>> {
        if !self.amount.is_positive() {
            return Err(EngineError::InvalidExpense(format!(
                "expense {} has non-positive amount {}",
                self.id, self.amount
            )));
        }
        match &self.split {
            Split::Equal { participants } => {
                if participants.is_empty() {
                    return Err(EngineError::InvalidExpense(format!(
                        "expense {} splits equally between nobody",
                        self.id
                    )));
                }
                let shares = self.amount.split_evenly(participants.len());
                Ok(participants.iter().zip(shares).collect())
            }
            Split::Custom { shares } => {
                if shares.is_empty() {
                    return Err(EngineError::InvalidExpense(format!(
                        "expense {} has no custom shares",
                        self.id
                    )));
                }
                Ok(shares
                    .iter()
                    .map(|share| (&share.person, share.amount))
                    .collect())
            }
        }
    }
}
