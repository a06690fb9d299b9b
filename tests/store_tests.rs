mod common;

use chrono::Duration;
use pretty_assertions::assert_eq;

use clockin::PlanError;
use clockin::models::{ApprovalStatus, PresencePlan};
use common::{TestOrg, draft, previous_week, week};

#[test]
fn upsert_then_get_round_trips() {
    let mut store = clockin::PlanStore::new();
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    store.upsert(plan.clone()).unwrap();
    assert_eq!(store.get("emp1", week()), Some(plan));
    assert_eq!(store.get("emp1", previous_week()), None);
}

#[test]
fn upsert_replaces_entry_for_same_key() {
    let mut store = clockin::PlanStore::new();
    let first = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let mut second = first.clone();
    second.days[0].status = Some("Vacation".to_string());

    store.upsert(first).unwrap();
    store.upsert(second.clone()).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("emp1", week()), Some(second));
}

#[test]
fn upsert_rejects_misaligned_week() {
    let mut store = clockin::PlanStore::new();
    let mut plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    plan.days[4].date += Duration::days(1);

    let err = store.upsert(plan).unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)), "got {err:?}");

    let mut truncated = PresencePlan::template("emp1", week());
    truncated.days.pop();
    assert!(store.upsert(truncated).is_err());
}

#[test]
fn get_or_template_creates_implicit_draft() {
    let store = clockin::PlanStore::new();
    let plan = store.get_or_template("emp1", week());

    assert_eq!(plan.status, ApprovalStatus::NotSubmitted);
    assert_eq!(plan.days.len(), 5);
    assert!(plan.days.iter().all(|day| day.status.is_none()));
    // Viewing does not persist
    assert!(store.is_empty());
}

#[test]
fn listings_are_scoped_and_sorted() {
    let org = TestOrg::new();
    let mut store = clockin::PlanStore::new();
    store
        .upsert(draft("emp1", week(), ["Office"; 5]))
        .unwrap();
    store
        .upsert(draft("emp1", previous_week(), ["Home"; 5]))
        .unwrap();
    store
        .upsert(draft("emp2", week(), ["Office"; 5]))
        .unwrap();

    let for_user = store.list_for_user("emp1");
    assert_eq!(for_user.len(), 2);
    // Most recent week first
    assert_eq!(for_user[0].week_of, week());
    assert_eq!(for_user[1].week_of, previous_week());

    let for_team = store.list_for_team(&org.directory, "t1");
    assert_eq!(for_team.len(), 2);
    assert!(for_team.iter().all(|plan| plan.user_id == "emp1"));

    assert_eq!(store.list_all().len(), 3);
}

#[test]
fn copy_previous_week_carries_statuses_into_new_draft() {
    let mut store = clockin::PlanStore::new();
    let mut source = draft(
        "emp1",
        previous_week(),
        ["Office", "Home", "Office", "Office", "Home"],
    );
    source.status = ApprovalStatus::Approved;
    store.upsert(source).unwrap();

    let copy = store.copy_previous_week("emp1", week()).unwrap();

    assert_eq!(copy.week_of, week());
    assert_eq!(copy.status, ApprovalStatus::NotSubmitted);
    assert_eq!(copy.submitted_at, None);
    assert!(copy.has_valid_week());
    assert_eq!(copy.days[1].status.as_deref(), Some("Home"));
    assert_eq!(copy.days[3].status.as_deref(), Some("Office"));

    assert_eq!(store.copy_previous_week("emp2", week()), None);
}
