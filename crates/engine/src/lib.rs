//! Shared-expense engine.
//!
//! Given a roster of people and a ledger of expenses, the engine computes
//! what each person is owed or owes ([`compute_balances`]) and a short list
//! of direct payments that settles everybody ([`plan_settlements`]).
//!
//! Both stages are pure functions of their input. [`Group`] owns a roster
//! and a ledger for callers that want validated mutations on top.

pub use balances::{Balance, BalanceStatus, Balances, compute_balances};
pub use commands::{NewExpense, SplitCmd};
pub use error::EngineError;
pub use expense::{Expense, ExpenseId, Share, Split};
pub use group::Group;
pub use money::{EPSILON, MoneyCents};
pub use person::Person;
pub use settlements::{Settlement, SettlementPlan, plan_settlements};
pub use summary::{GroupSummary, summarize};

mod balances;
mod commands;
mod error;
mod expense;
mod group;
mod money;
mod person;
mod settlements;
mod summary;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
