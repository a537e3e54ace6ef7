use chrono::{TimeZone, Utc};

use engine::{
    BalanceStatus, EngineError, ExpenseId, Group, MoneyCents, NewExpense, Person,
    compute_balances, plan_settlements,
};

fn cents(value: i64) -> MoneyCents {
    MoneyCents::new(value)
}

fn transfers(group: &Group) -> Vec<(String, String, i64)> {
    group
        .settlements()
        .unwrap()
        .iter()
        .map(|s| (s.from.to_string(), s.to.to_string(), s.amount.cents()))
        .collect()
}

#[test]
fn equal_split_between_three() {
    let mut group = Group::with_people(["Alice", "Bob", "Carol"]).unwrap();
    group
        .add_expense(NewExpense::equal(
            "Groceries",
            cents(90_00),
            "Alice",
            ["Alice", "Bob", "Carol"],
        ))
        .unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.get("Alice"), Some(cents(60_00)));
    assert_eq!(balances.get("Bob"), Some(cents(-30_00)));
    assert_eq!(balances.get("Carol"), Some(cents(-30_00)));

    assert_eq!(
        transfers(&group),
        vec![
            ("Bob".to_string(), "Alice".to_string(), 30_00),
            ("Carol".to_string(), "Alice".to_string(), 30_00),
        ]
    );
}

#[test]
fn custom_split_between_two() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::custom(
            "Dinner",
            cents(50_00),
            "Alice",
            [("Alice", cents(20_00)), ("Bob", cents(30_00))],
        ))
        .unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.get("Alice"), Some(cents(30_00)));
    assert_eq!(balances.get("Bob"), Some(cents(-30_00)));
    assert_eq!(
        transfers(&group),
        vec![("Bob".to_string(), "Alice".to_string(), 30_00)]
    );
}

#[test]
fn cancelling_expenses_settle_everyone() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::equal("X", cents(20_00), "Alice", ["Alice", "Bob"]))
        .unwrap();
    group
        .add_expense(NewExpense::equal("Y", cents(20_00), "Bob", ["Alice", "Bob"]))
        .unwrap();

    let summary = group.summary().unwrap();
    assert_eq!(summary.total_spending, cents(40_00));
    assert!(summary.balances.is_settled());
    assert!(summary.is_settled());
    for balance in &summary.balances {
        assert_eq!(balance.status(), BalanceStatus::SettledUp);
    }
}

#[test]
fn empty_ledger_is_all_zero() {
    let group = Group::with_people(["Alice", "Bob", "Carol"]).unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.len(), 3);
    assert!(balances.iter().all(|b| b.amount.is_zero()));
    assert!(group.settlements().unwrap().is_empty());
}

#[test]
fn single_person_without_expenses() {
    let group = Group::with_people(["Alice"]).unwrap();

    assert_eq!(group.balances().unwrap().get("Alice"), Some(MoneyCents::ZERO));
    assert!(group.settlements().unwrap().is_empty());
}

#[test]
fn uneven_split_still_sums_to_zero() {
    let mut group = Group::with_people(["Alice", "Bob", "Carol"]).unwrap();
    group
        .add_expense(NewExpense::equal(
            "Taxi",
            cents(100_00),
            "Carol",
            ["Alice", "Bob", "Carol"],
        ))
        .unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.get("Alice"), Some(cents(-33_34)));
    assert_eq!(balances.get("Bob"), Some(cents(-33_33)));
    assert_eq!(balances.get("Carol"), Some(cents(66_67)));
    assert_eq!(balances.total(), MoneyCents::ZERO);

    let plan = group.settlements().unwrap();
    assert_eq!(plan.received_by("Carol"), cents(66_67));
}

#[test]
fn empty_equal_split_is_invalid() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    let err = group
        .add_expense(NewExpense::equal("Nothing", cents(10_00), "Alice", Vec::<String>::new()))
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidExpense(_)));
    assert!(group.expenses().is_empty());
}

#[test]
fn invalid_expenses_are_never_recorded() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();

    let cases = [
        NewExpense::equal("Free", MoneyCents::ZERO, "Alice", ["Bob"]),
        NewExpense::equal("Refund", cents(-5_00), "Alice", ["Bob"]),
        NewExpense::equal("   ", cents(5_00), "Alice", ["Bob"]),
        NewExpense::equal("Twice", cents(5_00), "Alice", ["Bob", "Bob"]),
        NewExpense::custom("Short", cents(50_00), "Alice", [("Bob", cents(49_98))]),
        NewExpense::custom("Nobody", cents(50_00), "Alice", Vec::<(String, MoneyCents)>::new()),
        NewExpense::custom(
            "Negative",
            cents(10_00),
            "Alice",
            [("Alice", cents(20_00)), ("Bob", cents(-10_00))],
        ),
    ];
    for cmd in cases {
        let err = group.add_expense(cmd.clone()).unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidExpense(_)),
            "{cmd:?} gave {err:?}"
        );
    }

    let err = group
        .add_expense(NewExpense::equal("Stranger", cents(5_00), "Mallory", ["Bob"]))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownPerson("Mallory".to_string()));

    let err = group
        .add_expense(NewExpense::custom(
            "Stranger share",
            cents(5_00),
            "Alice",
            [("Mallory", cents(5_00))],
        ))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownPerson("Mallory".to_string()));

    assert!(group.expenses().is_empty());
}

#[test]
fn custom_shares_within_a_cent_are_accepted() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::custom(
            "Dinner",
            cents(50_00),
            "Alice",
            [("Alice", cents(20_00)), ("Bob", cents(29_99))],
        ))
        .unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.get("Alice"), Some(cents(30_00)));
    assert_eq!(balances.get("Bob"), Some(cents(-29_99)));
    assert_eq!(
        transfers(&group),
        vec![("Bob".to_string(), "Alice".to_string(), 29_99)]
    );
}

#[test]
fn many_short_custom_splits_still_settle() {
    let mut group = Group::with_people(["Alice", "Bob", "Carol"]).unwrap();
    for _ in 0..5 {
        group
            .add_expense(NewExpense::custom(
                "Taxi",
                cents(30_00),
                "Alice",
                [("Bob", cents(14_99)), ("Carol", cents(15_00))],
            ))
            .unwrap();
    }

    // Alice +150.00, Bob -74.95, Carol -75.00
    assert_eq!(
        transfers(&group),
        vec![
            ("Bob".to_string(), "Alice".to_string(), 74_95),
            ("Carol".to_string(), "Alice".to_string(), 75_00),
        ]
    );
}

#[test]
fn one_cent_debt_needs_no_payment() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::equal("Sweet", cents(1), "Alice", ["Bob"]))
        .unwrap();

    let balances = group.balances().unwrap();
    assert_eq!(balances.get("Bob"), Some(cents(-1)));
    assert_eq!(balances.status("Alice"), Some(BalanceStatus::SettledUp));
    assert_eq!(balances.status("Bob"), Some(BalanceStatus::SettledUp));
    assert!(transfers(&group).is_empty());
    assert!(group.summary().unwrap().is_settled());
}

#[test]
fn names_are_normalized_on_lookup() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::equal("Coffee", cents(4_00), " Alice ", ["Bob "]))
        .unwrap();

    assert_eq!(group.expenses()[0].paid_by, Person::new("Alice").unwrap());
    assert_eq!(group.balances().unwrap().get("Bob"), Some(cents(-4_00)));
}

#[test]
fn duplicate_and_blank_people_are_rejected() {
    let mut group = Group::new();
    group.add_person("Alice").unwrap();

    assert_eq!(
        group.add_person("Alice"),
        Err(EngineError::ExistingKey("Alice".to_string()))
    );
    assert!(matches!(
        group.add_person(""),
        Err(EngineError::InvalidPerson(_))
    ));
    assert_eq!(group.people().len(), 1);
}

#[test]
fn expense_ids_are_sequential_and_deletable() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let first = group
        .add_expense(NewExpense::equal("A", cents(10_00), "Alice", ["Bob"]).date(date))
        .unwrap();
    let second = group
        .add_expense(NewExpense::equal("B", cents(6_00), "Bob", ["Alice"]))
        .unwrap();

    assert_eq!(first, ExpenseId(1));
    assert_eq!(second, ExpenseId(2));
    assert_eq!(group.expense(first).unwrap().date, date);

    let removed = group.delete_expense(first).unwrap();
    assert_eq!(removed.description, "A");
    assert_eq!(group.balances().unwrap().get("Bob"), Some(cents(6_00)));

    assert_eq!(
        group.delete_expense(first),
        Err(EngineError::KeyNotFound("#1".to_string()))
    );
}

#[test]
fn removing_a_payer_drops_their_expenses() {
    let mut group = Group::with_people(["Alice", "Bob", "Carol"]).unwrap();
    group
        .add_expense(NewExpense::equal("Tickets", cents(30_00), "Carol", ["Carol"]))
        .unwrap();
    group
        .add_expense(NewExpense::equal("Snacks", cents(8_00), "Alice", ["Alice", "Bob"]))
        .unwrap();

    let removed = group.remove_person("Carol").unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(group.people().len(), 2);
    assert_eq!(group.expenses().len(), 1);
    assert_eq!(group.balances().unwrap().get("Alice"), Some(cents(4_00)));
}

#[test]
fn removing_a_participant_is_refused() {
    let mut group = Group::with_people(["Alice", "Bob"]).unwrap();
    group
        .add_expense(NewExpense::equal("Snacks", cents(8_00), "Alice", ["Alice", "Bob"]))
        .unwrap();

    assert!(matches!(
        group.remove_person("Bob"),
        Err(EngineError::PersonReferenced(_))
    ));
    assert_eq!(group.people().len(), 2);
    assert_eq!(group.expenses().len(), 1);

    assert_eq!(
        group.remove_person("Zed"),
        Err(EngineError::UnknownPerson("Zed".to_string()))
    );
}

#[test]
fn recomputing_is_idempotent() {
    let mut group = Group::with_people(["Alice", "Bob", "Carol", "Dan"]).unwrap();
    group
        .add_expense(NewExpense::equal(
            "Rent",
            cents(1_000_00),
            "Dan",
            ["Alice", "Bob", "Carol", "Dan"],
        ))
        .unwrap();
    group
        .add_expense(NewExpense::custom(
            "Power",
            cents(120_00),
            "Bob",
            [("Alice", cents(70_00)), ("Carol", cents(50_00))],
        ))
        .unwrap();

    let people = group.people().to_vec();
    let expenses = group.expenses().to_vec();
    let first = compute_balances(&people, &expenses).unwrap();
    let second = compute_balances(&people, &expenses).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        plan_settlements(&first).unwrap(),
        plan_settlements(&second).unwrap()
    );
}
