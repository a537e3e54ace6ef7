//! Command structs for group mutations.
//!
//! These types group the parameters of a new expense, keeping call sites
//! readable and avoiding long argument lists. They carry raw names: the
//! [`Group`](crate::Group) resolves and validates them against its roster.

use chrono::{DateTime, Utc};

use crate::MoneyCents;

/// Split requested for a new expense, by person name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitCmd {
    Equal { participants: Vec<String> },
    Custom { shares: Vec<(String, MoneyCents)> },
}

/// Record a new expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: MoneyCents,
    pub paid_by: String,
    pub date: Option<DateTime<Utc>>,
    pub split: SplitCmd,
}

impl NewExpense {
    /// An expense shared evenly between `participants`.
    #[must_use]
    pub fn equal<I, S>(
        description: impl Into<String>,
        amount: MoneyCents,
        paid_by: impl Into<String>,
        participants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            date: None,
            split: SplitCmd::Equal {
                participants: participants.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// An expense shared by explicit per-person amounts.
    #[must_use]
    pub fn custom<I, S>(
        description: impl Into<String>,
        amount: MoneyCents,
        paid_by: impl Into<String>,
        shares: I,
    ) -> Self
    where
        I: IntoIterator<Item = (S, MoneyCents)>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            date: None,
            split: SplitCmd::Custom {
                shares: shares
                    .into_iter()
                    .map(|(name, amount)| (name.into(), amount))
                    .collect(),
            },
        }
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}
