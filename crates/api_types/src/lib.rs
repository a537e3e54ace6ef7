use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// One explicit amount in a custom split.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ShareNew {
        pub person: String,
        /// Decimal string with at most 2 fractional digits (e.g. `"12.50"`).
        pub amount: String,
    }

    /// How a new expense is divided.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum Split {
        Equal { participants: Vec<String> },
        Custom { shares: Vec<ShareNew> },
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        /// Decimal string with at most 2 fractional digits (e.g. `"90.00"`).
        pub amount: String,
        pub paid_by: String,
        /// RFC3339 timestamp, including timezone offset. Defaults to now.
        #[serde(default)]
        pub date: Option<DateTime<FixedOffset>>,
        pub split: Split,
    }
}

pub mod group {
    use super::*;

    /// A roster plus a ledger, in the order they were entered.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GroupSnapshot {
        pub people: Vec<String>,
        #[serde(default)]
        pub expenses: Vec<expense::ExpenseNew>,
    }
}

pub mod report {
    use super::*;

    /// Where a person stands once every expense is accounted for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BalanceState {
        IsOwed,
        Owes,
        SettledUp,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalanceView {
        pub person: String,
        /// Signed decimal string: positive means the person is owed money.
        pub amount: String,
        pub amount_minor: i64,
        pub status: BalanceState,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SettlementView {
        pub from: String,
        pub to: String,
        pub amount: String,
        pub amount_minor: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Report {
        /// Symbol the amounts are expressed in (display only).
        pub currency: String,
        pub total_spending: String,
        pub balances: Vec<BalanceView>,
        pub settlements: Vec<SettlementView>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_tagged_splits() {
        let raw = r#"{
            "people": ["Alice", "Bob"],
            "expenses": [
                {
                    "description": "Dinner",
                    "amount": "50.00",
                    "paid_by": "Alice",
                    "date": "2024-05-01T20:00:00+02:00",
                    "split": {
                        "type": "custom",
                        "shares": [
                            { "person": "Alice", "amount": "20" },
                            { "person": "Bob", "amount": "30" }
                        ]
                    }
                },
                {
                    "description": "Taxi",
                    "amount": "12",
                    "paid_by": "Bob",
                    "split": { "type": "equal", "participants": ["Alice", "Bob"] }
                }
            ]
        }"#;

        let snapshot: group::GroupSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.people, vec!["Alice", "Bob"]);
        assert_eq!(snapshot.expenses.len(), 2);
        assert!(matches!(
            &snapshot.expenses[0].split,
            expense::Split::Custom { shares } if shares.len() == 2
        ));
        assert!(snapshot.expenses[1].date.is_none());
    }
}
