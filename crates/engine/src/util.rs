//! Internal helpers for expense validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! checks the [`Group`](crate::Group) runs before an expense enters the
//! ledger, so an invalid expense is never partially applied.

use std::collections::HashSet;

use crate::{
    EngineError, MoneyCents, NewExpense, Person, ResultEngine, Share, Split, commands::SplitCmd,
};

/// Resolve a name against the roster, returning the canonical `Person`.
pub(crate) fn resolve_person(roster: &[Person], name: &str) -> ResultEngine<Person> {
    let candidate = Person::new(name)?;
    roster
        .iter()
        .find(|p| **p == candidate)
        .cloned()
        .ok_or_else(|| EngineError::UnknownPerson(candidate.to_string()))
}

/// Reject names appearing twice in the same split.
fn ensure_unique<'a>(people: impl IntoIterator<Item = &'a Person>) -> ResultEngine<()> {
    let mut seen = HashSet::new();
    for person in people {
        if !seen.insert(person) {
            return Err(EngineError::InvalidExpense(format!(
                "\"{person}\" appears twice in the split"
            )));
        }
    }
    Ok(())
}

/// Validate a new expense against the roster and return its resolved parts.
pub(crate) fn validate_new_expense(
    roster: &[Person],
    cmd: &NewExpense,
) -> ResultEngine<(String, Person, Split)> {
    let description = cmd.description.trim();
    if description.is_empty() {
        return Err(EngineError::InvalidExpense(
            "description is empty".to_string(),
        ));
    }
    if !cmd.amount.is_positive() {
        return Err(EngineError::InvalidExpense(format!(
            "amount must be > 0, got {}",
            cmd.amount
        )));
    }

    let paid_by = resolve_person(roster, &cmd.paid_by)?;

    let split = match &cmd.split {
        SplitCmd::Equal { participants } => {
            if participants.is_empty() {
                return Err(EngineError::InvalidExpense(
                    "equal split needs at least one participant".to_string(),
                ));
            }
            let participants = participants
                .iter()
                .map(|name| resolve_person(roster, name))
                .collect::<ResultEngine<Vec<_>>>()?;
            ensure_unique(&participants)?;
            Split::Equal { participants }
        }
        SplitCmd::Custom { shares } => {
            if shares.is_empty() {
                return Err(EngineError::InvalidExpense(
                    "custom split needs at least one share".to_string(),
                ));
            }
            let shares = shares
                .iter()
                .map(|(name, amount)| -> ResultEngine<Share> {
                    if amount.is_negative() {
                        return Err(EngineError::InvalidExpense(format!(
                            "share of \"{name}\" is negative"
                        )));
                    }
                    Ok(Share::new(resolve_person(roster, name)?, *amount))
                })
                .collect::<ResultEngine<Vec<_>>>()?;
            ensure_unique(shares.iter().map(|s| &s.person))?;

            let total = shares
                .iter()
                .try_fold(MoneyCents::ZERO, |acc, s| acc.checked_add(s.amount))
                .ok_or_else(|| EngineError::InvalidAmount("shares too large".to_string()))?;
            if !(total - cmd.amount).is_within_epsilon() {
                return Err(EngineError::InvalidExpense(format!(
                    "custom shares add up to {total}, expected {}",
                    cmd.amount
                )));
            }
            Split::Custom { shares }
        }
    };

    Ok((description.to_string(), paid_by, split))
}
