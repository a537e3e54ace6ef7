//! Replays a [`GroupSnapshot`] through [`Group`], so every expense in a file
//! goes through the same validation as one entered by hand.

use api_types::{
    expense::{ExpenseNew, Split},
    group::GroupSnapshot,
};
use chrono::Utc;
use engine::{Group, MoneyCents, NewExpense, ResultEngine};

use crate::error::{AppError, Result};

fn new_expense(raw: &ExpenseNew) -> ResultEngine<NewExpense> {
    let amount: MoneyCents = raw.amount.parse()?;
    let cmd = match &raw.split {
        Split::Equal { participants } => NewExpense::equal(
            raw.description.as_str(),
            amount,
            raw.paid_by.as_str(),
            participants.iter().map(String::as_str),
        ),
        Split::Custom { shares } => {
            let shares = shares
                .iter()
                .map(|share| -> ResultEngine<(&str, MoneyCents)> {
                    Ok((share.person.as_str(), share.amount.parse()?))
                })
                .collect::<ResultEngine<Vec<_>>>()?;
            NewExpense::custom(raw.description.as_str(), amount, raw.paid_by.as_str(), shares)
        }
    };
    Ok(match raw.date {
        Some(date) => cmd.date(date.with_timezone(&Utc)),
        None => cmd,
    })
}

/// Builds a group from a snapshot, stopping at the first invalid entry.
///
/// Expense errors carry the 1-based position of the expense in the file.
pub fn load_group(snapshot: &GroupSnapshot) -> Result<Group> {
    let mut group = Group::with_people(&snapshot.people)?;
    for (idx, raw) in snapshot.expenses.iter().enumerate() {
        new_expense(raw)
            .and_then(|cmd| group.add_expense(cmd))
            .map_err(|source| AppError::Snapshot {
                index: idx + 1,
                description: raw.description.clone(),
                source,
            })?;
    }
    tracing::debug!(
        people = group.people().len(),
        expenses = group.expenses().len(),
        "snapshot loaded"
    );
    Ok(group)
}
