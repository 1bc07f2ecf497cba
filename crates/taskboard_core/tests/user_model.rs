use taskboard_core::{TaskId, User};

#[test]
fn user_new_starts_without_tasks() {
    let user = User::new("alice");
    assert_eq!(user.username(), "alice");
    assert_eq!(user.task_count(), 0);
    assert!(user.task_ids().is_empty());
}

#[test]
fn add_task_id_is_idempotent_and_keeps_order() {
    let mut user = User::new("alice");
    user.add_task_id(TaskId::new("TASK-0001"));
    user.add_task_id(TaskId::new("TASK-0002"));
    user.add_task_id(TaskId::new("TASK-0001"));

    assert_eq!(user.task_count(), 2);
    let ids: Vec<&str> = user.task_ids().iter().map(TaskId::as_str).collect();
    assert_eq!(ids, vec!["TASK-0001", "TASK-0002"]);
}

#[test]
fn remove_task_id_reports_whether_it_was_linked() {
    let mut user = User::new("bob");
    user.add_task_id(TaskId::new("TASK-0003"));

    assert!(user.has_task("TASK-0003"));
    assert!(user.remove_task_id("TASK-0003"));
    assert!(!user.has_task("TASK-0003"));
    assert!(!user.remove_task_id("TASK-0003"));
    assert_eq!(user.task_count(), 0);
}

#[test]
fn user_serialization_lists_task_ids() {
    let mut user = User::new("carol");
    user.add_task_id(TaskId::new("TASK-0007"));

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["username"], "carol");
    assert_eq!(json["task_ids"], serde_json::json!(["TASK-0007"]));
    assert!(json["created_at"].is_string());
}
