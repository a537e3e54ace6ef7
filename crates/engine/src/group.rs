//! Group state: the roster of people and the ledger of expenses.
//!
//! Every mutation validates first and only then changes state, so a failed
//! call leaves the group exactly as it was. Balances and settlements are
//! never cached: they are recomputed from the current roster and ledger on
//! each request.

use chrono::Utc;

use crate::{
    Balances, EngineError, Expense, ExpenseId, GroupSummary, NewExpense, Person, ResultEngine,
    SettlementPlan, compute_balances, plan_settlements, summarize,
    util::{resolve_person, validate_new_expense},
};

#[derive(Clone, Debug)]
pub struct Group {
    people: Vec<Person>,
    expenses: Vec<Expense>,
    next_expense_id: u64,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            expenses: Vec::new(),
            next_expense_id: 1,
        }
    }

    /// Builds a group with an initial roster.
    ///
    /// Fails on the first blank or duplicated name.
    pub fn with_people<I, S>(people: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group = Self::new();
        for name in people {
            group.add_person(name.as_ref())?;
        }
        Ok(group)
    }

    /// Roster in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Ledger in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Adds a person to the roster.
    pub fn add_person(&mut self, name: &str) -> ResultEngine<Person> {
        let person = Person::new(name)?;
        if self.people.contains(&person) {
            return Err(EngineError::ExistingKey(person.to_string()));
        }
        tracing::debug!(person = %person, "person added");
        self.people.push(person.clone());
        Ok(person)
    }

    /// Removes a person together with the expenses they paid for.
    ///
    /// Fails with [`EngineError::PersonReferenced`] if the person still owes
    /// part of an expense somebody else paid: dropping them would leave that
    /// expense pointing outside the roster.
    pub fn remove_person(&mut self, name: &str) -> ResultEngine<Vec<Expense>> {
        let person = resolve_person(&self.people, name)?;
        if let Some(expense) = self
            .expenses
            .iter()
            .find(|e| e.owed_by_other_than_payer(person.name()))
        {
            return Err(EngineError::PersonReferenced(format!(
                "{person} (expense {})",
                expense.id
            )));
        }

        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.expenses)
            .into_iter()
            .partition(|e| e.paid_by == person);
        self.expenses = kept;
        self.people.retain(|p| *p != person);
        tracing::debug!(person = %person, expenses = removed.len(), "person removed");
        Ok(removed)
    }

    /// Validates and records a new expense, returning its id.
    pub fn add_expense(&mut self, cmd: NewExpense) -> ResultEngine<ExpenseId> {
        let (description, paid_by, split) = validate_new_expense(&self.people, &cmd)?;
        let id = ExpenseId(self.next_expense_id);
        let expense = Expense::new(
            id,
            description,
            cmd.amount,
            paid_by,
            cmd.date.unwrap_or_else(Utc::now),
            split,
        );
        tracing::debug!(
            expense = %id,
            amount = %expense.amount,
            split = expense.split.as_str(),
            "expense added"
        );
        self.expenses.push(expense);
        self.next_expense_id += 1;
        Ok(id)
    }

    /// Removes an expense from the ledger.
    pub fn delete_expense(&mut self, id: ExpenseId) -> ResultEngine<Expense> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        Ok(self.expenses.remove(idx))
    }

    pub fn balances(&self) -> ResultEngine<Balances> {
        compute_balances(&self.people, &self.expenses)
    }

    pub fn settlements(&self) -> ResultEngine<SettlementPlan> {
        plan_settlements(&self.balances()?)
    }

    pub fn summary(&self) -> ResultEngine<GroupSummary> {
        summarize(&self.people, &self.expenses)
    }
}
