mod common;

use pretty_assertions::assert_eq;

use clockin::models::{ApprovalStatus, NotificationCategory, PresencePlan, WorkPolicy};
use clockin::{PlanError, WorkflowEngine};
use common::{TestOrg, draft, week};

#[test]
fn submit_moves_draft_to_pending_and_notifies_lead() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    let outcome = engine.submit(plan, &org.user("emp1"), false).unwrap();

    assert_eq!(outcome.plan.status, ApprovalStatus::Pending);
    assert!(outcome.plan.submitted_at.is_some());
    assert_eq!(outcome.plan.violation_reason, None);
    assert_eq!(outcome.notifications.len(), 1);
    let event = &outcome.notifications[0];
    assert_eq!(event.recipient_id, "lead1");
    assert_eq!(event.category, NotificationCategory::Info);
    assert!(event.message.contains("2024-01-07"));
}

#[test]
fn submit_with_any_blank_day_fails_validation() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let mut plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    plan.days[3].status = None;

    let err = engine.submit(plan, &org.user("emp1"), false).unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)), "got {err:?}");
}

#[test]
fn submit_rejects_unknown_status_values() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Teleporting", "Home", "Home"]);

    let err = engine.submit(plan, &org.user("emp1"), false).unwrap_err();
    assert_eq!(
        err,
        PlanError::validation("Unknown status value: Teleporting")
    );
}

#[test]
fn submit_is_owner_only() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    let err = engine.submit(plan, &org.user("emp2"), false).unwrap_err();
    assert!(matches!(err, PlanError::PermissionDenied(_)), "got {err:?}");
}

#[test]
fn policy_violation_blocks_submission_without_override() {
    let mut org = TestOrg::new();
    org.settings.set_work_policy(WorkPolicy {
        min_office_days: 3,
        max_home_days: 3,
    });
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    let err = engine.submit(plan.clone(), &org.user("emp1"), false).unwrap_err();
    match &err {
        PlanError::PolicyViolation(reason) => {
            // Shortfall message carries both the requirement and the tally
            assert!(reason.contains('3'), "missing requirement in: {reason}");
            assert!(reason.contains('2'), "missing tally in: {reason}");
        }
        other => panic!("expected PolicyViolation, got {other:?}"),
    }

    // With explicit confirmation the reason is recorded and the plan moves on
    let outcome = engine.submit(plan, &org.user("emp1"), true).unwrap();
    assert_eq!(outcome.plan.status, ApprovalStatus::Pending);
    let reason = outcome.plan.violation_reason.expect("reason not stored");
    assert!(reason.contains('3') && reason.contains('2'));
}

#[test]
fn mandatory_date_forces_status_on_submission() {
    let mut org = TestOrg::new();
    org.settings
        .add_mandatory_date(clockin::models::MandatoryDateInput {
            date: week() + chrono::Duration::days(2),
            status: "Office".to_string(),
            description: "All hands".to_string(),
            team_ids: vec![],
        })
        .unwrap();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    let outcome = engine.submit(plan, &org.user("emp1"), false).unwrap();
    assert_eq!(outcome.plan.days[2].status.as_deref(), Some("Office"));
}

#[test]
fn lead_approves_pending_plan_of_own_team() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let pending = engine.submit(plan, &org.user("emp1"), false).unwrap().plan;

    let outcome = engine.approve(pending, &org.user("lead1")).unwrap();

    assert_eq!(outcome.plan.status, ApprovalStatus::Approved);
    assert_eq!(outcome.notifications.len(), 1);
    let event = &outcome.notifications[0];
    assert_eq!(event.recipient_id, "emp1");
    assert_eq!(event.category, NotificationCategory::Success);
    assert!(event.message.contains("Approved"));
}

#[test]
fn plain_employee_cannot_approve() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let pending = engine.submit(plan, &org.user("emp1"), false).unwrap().plan;

    let err = engine.approve(pending, &org.user("emp2")).unwrap_err();
    assert!(matches!(err, PlanError::PermissionDenied(_)), "got {err:?}");
}

#[test]
fn lead_of_another_team_cannot_review() {
    let org = TestOrg::new();
    // emp2 belongs to t2; t1's lead has no authority there
    let plan = draft("emp2", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let pending = engine.submit(plan, &org.user("emp2"), false).unwrap().plan;

    let err = engine.reject(pending.clone(), &org.user("lead1")).unwrap_err();
    assert!(matches!(err, PlanError::PermissionDenied(_)), "got {err:?}");

    // An admin may review any team's plans
    let outcome = engine.reject(pending, &org.user("admin1")).unwrap();
    assert_eq!(outcome.plan.status, ApprovalStatus::Rejected);
    assert_eq!(
        outcome.notifications[0].category,
        NotificationCategory::Warning
    );
}

#[test]
fn review_requires_pending_state() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let not_submitted = PresencePlan::template("emp1", week());

    let err = engine.approve(not_submitted, &org.user("lead1")).unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)), "got {err:?}");
}

#[test]
fn approved_is_terminal_for_the_week() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let pending = engine.submit(plan, &org.user("emp1"), false).unwrap().plan;
    let approved = engine.approve(pending, &org.user("lead1")).unwrap().plan;

    // No edge leaves Approved: neither re-review, resubmit, nor reopen
    assert!(engine.reject(approved.clone(), &org.user("lead1")).is_err());
    assert!(engine.submit(approved.clone(), &org.user("emp1"), false).is_err());
    assert!(engine.reopen(approved, &org.user("emp1")).is_err());
}

#[test]
fn rejected_plan_reopens_with_days_preserved() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let pending = engine.submit(plan, &org.user("emp1"), false).unwrap().plan;
    let rejected = engine.reject(pending, &org.user("lead1")).unwrap().plan;

    let reopened = engine.reopen(rejected, &org.user("emp1")).unwrap().plan;

    assert_eq!(reopened.status, ApprovalStatus::NotSubmitted);
    assert_eq!(reopened.submitted_at, None);
    assert_eq!(reopened.violation_reason, None);
    assert_eq!(reopened.days[0].status.as_deref(), Some("Office"));
    assert_eq!(reopened.days[4].status.as_deref(), Some("Home"));

    // And the cycle can continue: edit + resubmit
    let outcome = engine.submit(reopened, &org.user("emp1"), false).unwrap();
    assert_eq!(outcome.plan.status, ApprovalStatus::Pending);
}

#[test]
fn reopen_is_owner_only_and_rejected_only() {
    let org = TestOrg::new();
    let engine = WorkflowEngine::new(&org.directory, &org.settings);
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);
    let pending = engine.submit(plan, &org.user("emp1"), false).unwrap().plan;

    let err = engine.reopen(pending.clone(), &org.user("emp1")).unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)), "got {err:?}");

    let rejected = engine.reject(pending, &org.user("lead1")).unwrap().plan;
    let err = engine.reopen(rejected, &org.user("emp2")).unwrap_err();
    assert!(matches!(err, PlanError::PermissionDenied(_)), "got {err:?}");
}

#[test]
fn planner_facade_runs_full_cycle_and_persists() {
    let mut planner = common::planner();
    let plan = draft("emp1", week(), ["Office", "Office", "Home", "Home", "Home"]);

    let events = planner.submit(plan, "emp1", false).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(
        planner.plans.get("emp1", week()).unwrap().status,
        ApprovalStatus::Pending
    );

    let events = planner.approve("emp1", week(), "lead1").unwrap();
    assert_eq!(events[0].recipient_id, "emp1");
    assert_eq!(
        planner.plans.get("emp1", week()).unwrap().status,
        ApprovalStatus::Approved
    );

    // Reviewing a week with no record surfaces NotFound
    let err = planner.approve("emp1", common::previous_week(), "lead1").unwrap_err();
    assert!(matches!(err, PlanError::NotFound(_)), "got {err:?}");
}
