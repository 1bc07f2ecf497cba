use taskboard_core::{
    RegistryConfig, RegistryError, RegistryErrorKind, RegistryStats, TaskRegistry, TaskStatus,
};

fn registry_with_alice() -> TaskRegistry {
    let registry = TaskRegistry::new();
    registry.register_user("Alice").unwrap();
    registry
}

#[test]
fn register_user_returns_snapshot() {
    let registry = TaskRegistry::new();
    let user = registry.register_user("Alice").unwrap();

    assert_eq!(user.username(), "Alice");
    assert_eq!(user.task_count(), 0);
    assert_eq!(registry.user_count(), 1);
}

#[test]
fn duplicate_registration_is_soft_failure_and_keeps_first_user() {
    let registry = registry_with_alice();
    let task = registry.create_task("Alice", "A", "Work").unwrap();
    let before = registry.get_user("Alice").unwrap();

    let err = registry.register_user("Alice").unwrap_err();
    assert_eq!(err, RegistryError::UserAlreadyExists("Alice".to_string()));
    assert_eq!(err.kind(), RegistryErrorKind::AlreadyExists);

    let after = registry.get_user("Alice").unwrap();
    assert_eq!(after, before);
    assert!(after.has_task(task.id().as_str()));
    assert_eq!(registry.user_count(), 1);
}

#[test]
fn usernames_are_case_sensitive_keys() {
    let registry = registry_with_alice();
    registry.register_user("alice").unwrap();
    assert_eq!(registry.user_count(), 2);
}

#[test]
fn create_task_issues_sequential_ids_and_links_owner() {
    let registry = registry_with_alice();

    let first = registry.create_task("Alice", "A", "Work").unwrap();
    let second = registry.create_task("Alice", "B", "Work").unwrap();

    assert_eq!(first.id().as_str(), "TASK-0001");
    assert_eq!(second.id().as_str(), "TASK-0002");
    assert!(first.sequence() < second.sequence());
    assert_eq!(first.assigned_user(), "Alice");
    assert_eq!(first.status(), TaskStatus::Pending);

    let user = registry.get_user("Alice").unwrap();
    let ids: Vec<&str> = user.task_ids().iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["TASK-0001", "TASK-0002"]);
}

#[test]
fn create_task_for_unknown_user_leaves_state_unchanged() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();

    let users_before = registry.user_count();
    let tasks_before = registry.task_count();
    let sequence_before = registry.next_task_sequence();

    let err = registry.create_task("Zoe", "Z", "Work").unwrap_err();
    assert_eq!(err, RegistryError::UserNotFound("Zoe".to_string()));
    assert_eq!(err.kind(), RegistryErrorKind::NotFound);

    assert_eq!(registry.user_count(), users_before);
    assert_eq!(registry.task_count(), tasks_before);
    assert_eq!(registry.next_task_sequence(), sequence_before);

    let next = registry.create_task("Alice", "B", "Work").unwrap();
    assert_eq!(next.id().as_str(), "TASK-0002");
}

#[test]
fn delete_then_list_returns_remaining_task_only() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();
    registry.create_task("Alice", "B", "Work").unwrap();

    let removed = registry.delete_task("TASK-0001").unwrap();
    assert_eq!(removed.description(), "A");

    let tasks = registry.tasks_of("Alice");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id().as_str(), "TASK-0002");
    assert_eq!(tasks[0].description(), "B");

    assert!(registry.get_task("TASK-0001").is_none());
    assert!(!registry.get_user("Alice").unwrap().has_task("TASK-0001"));
}

#[test]
fn deleted_ids_are_never_reused() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();
    registry.delete_task("TASK-0001").unwrap();

    let next = registry.create_task("Alice", "B", "Work").unwrap();
    assert_eq!(next.id().as_str(), "TASK-0002");
}

#[test]
fn operations_on_unknown_task_are_soft_failures() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();
    let snapshot = registry.get_task("TASK-0001").unwrap();

    let missing = RegistryError::TaskNotFound("TASK-0999".to_string());
    assert_eq!(
        registry.update_task_description("TASK-0999", "x"),
        Err(missing.clone())
    );
    assert_eq!(
        registry.update_task_category("TASK-0999", "x"),
        Err(missing.clone())
    );
    assert_eq!(registry.complete_task("TASK-0999"), Err(missing.clone()));
    assert_eq!(registry.uncomplete_task("TASK-0999"), Err(missing.clone()));
    assert_eq!(registry.delete_task("TASK-0999").unwrap_err(), missing);

    assert_eq!(registry.task_count(), 1);
    assert_eq!(registry.get_task("TASK-0001").unwrap(), snapshot);
}

#[test]
fn delete_twice_reports_not_found_second_time() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();

    registry.delete_task("TASK-0001").unwrap();
    let err = registry.delete_task("TASK-0001").unwrap_err();
    assert_eq!(err.kind(), RegistryErrorKind::NotFound);
}

#[test]
fn updates_change_description_and_category() {
    let registry = registry_with_alice();
    let created = registry.create_task("Alice", "A", "Work").unwrap();

    registry
        .update_task_description("TASK-0001", "Complete and submit")
        .unwrap();
    registry.update_task_category("TASK-0001", "Shopping").unwrap();

    let task = registry.get_task("TASK-0001").unwrap();
    assert_eq!(task.description(), "Complete and submit");
    assert_eq!(task.category(), "Shopping");
    assert_eq!(task.created_at(), created.created_at());
    assert!(task.updated_at() >= created.updated_at());
}

#[test]
fn complete_then_uncomplete_restores_pending() {
    let registry = registry_with_alice();
    let created = registry.create_task("Alice", "A", "Work").unwrap();

    registry.complete_task("TASK-0001").unwrap();
    let completed = registry.get_task("TASK-0001").unwrap();
    assert!(completed.is_completed());
    assert_eq!(completed.status(), TaskStatus::Completed);

    registry.uncomplete_task("TASK-0001").unwrap();
    let pending = registry.get_task("TASK-0001").unwrap();
    assert!(!pending.is_completed());
    assert_eq!(pending.status(), TaskStatus::Pending);

    assert!(completed.updated_at() >= created.updated_at());
    assert!(pending.updated_at() >= completed.updated_at());
}

#[test]
fn snapshots_do_not_alias_registry_state() {
    let registry = registry_with_alice();
    let mut snapshot = registry.create_task("Alice", "A", "Work").unwrap();

    snapshot.set_description("changed locally");
    snapshot.set_completed(true);

    let stored = registry.get_task("TASK-0001").unwrap();
    assert_eq!(stored.description(), "A");
    assert!(!stored.is_completed());
}

#[test]
fn category_query_ignores_case() {
    let registry = registry_with_alice();
    registry.register_user("Bob").unwrap();
    registry.create_task("Alice", "A", "Work").unwrap();
    registry.create_task("Bob", "B", "work").unwrap();
    registry.create_task("Alice", "C", "Personal").unwrap();

    let upper = registry.tasks_by_category("Work");
    let lower = registry.tasks_by_category("work");
    assert_eq!(upper, lower);

    let ids: Vec<&str> = upper.iter().map(|task| task.id().as_str()).collect();
    assert_eq!(ids, vec!["TASK-0001", "TASK-0002"]);
    assert!(registry.tasks_by_category("Shopping").is_empty());
}

#[test]
fn pending_and_completed_queries_partition_user_tasks() {
    let registry = registry_with_alice();
    registry.create_task("Alice", "A", "Work").unwrap();
    registry.create_task("Alice", "B", "Work").unwrap();
    registry.create_task("Alice", "C", "Work").unwrap();
    registry.complete_task("TASK-0002").unwrap();

    let pending: Vec<String> = registry
        .pending_tasks_of("Alice")
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    let completed: Vec<String> = registry
        .completed_tasks_of("Alice")
        .iter()
        .map(|task| task.id().to_string())
        .collect();

    assert_eq!(pending, vec!["TASK-0001", "TASK-0003"]);
    assert_eq!(completed, vec!["TASK-0002"]);
}

#[test]
fn queries_for_unknown_user_are_empty() {
    let registry = registry_with_alice();
    assert!(registry.tasks_of("Zoe").is_empty());
    assert!(registry.pending_tasks_of("Zoe").is_empty());
    assert!(registry.completed_tasks_of("Zoe").is_empty());
    assert!(registry.get_user("Zoe").is_none());
}

#[test]
fn all_tasks_and_users_are_ordered() {
    let registry = TaskRegistry::new();
    registry.register_user("Charlie").unwrap();
    registry.register_user("Alice").unwrap();
    registry.register_user("Bob").unwrap();
    registry.create_task("Charlie", "C", "Work").unwrap();
    registry.create_task("Alice", "A", "Work").unwrap();
    registry.create_task("Bob", "B", "Work").unwrap();

    let usernames: Vec<String> = registry
        .all_users()
        .iter()
        .map(|user| user.username().to_string())
        .collect();
    assert_eq!(usernames, vec!["Alice", "Bob", "Charlie"]);

    let owners: Vec<String> = registry
        .all_tasks()
        .iter()
        .map(|task| task.assigned_user().to_string())
        .collect();
    assert_eq!(owners, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn stats_count_users_and_task_states() {
    let registry = registry_with_alice();
    registry.register_user("Bob").unwrap();
    assert_eq!(
        registry.stats(),
        RegistryStats {
            total_users: 2,
            ..RegistryStats::default()
        }
    );

    registry.create_task("Alice", "A", "Work").unwrap();
    registry.create_task("Alice", "B", "Work").unwrap();
    registry.create_task("Bob", "C", "Personal").unwrap();
    registry.complete_task("TASK-0003").unwrap();

    let stats = registry.stats();
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);

    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["total_tasks"], 3);
}

#[test]
fn custom_config_controls_id_text_only() {
    let config = RegistryConfig::default()
        .with_task_id_prefix("T")
        .with_task_id_width(1);
    let registry = TaskRegistry::with_config(config);
    registry.register_user("Alice").unwrap();

    let ids: Vec<String> = (0..11)
        .map(|index| {
            registry
                .create_task("Alice", format!("task {index}"), "Work")
                .unwrap()
                .id()
                .to_string()
        })
        .collect();

    assert_eq!(ids.first().map(String::as_str), Some("T1"));
    assert_eq!(ids.last().map(String::as_str), Some("T11"));

    let sequences: Vec<u64> = registry
        .all_tasks()
        .iter()
        .map(|task| task.sequence())
        .collect();
    assert_eq!(sequences, (1..=11).collect::<Vec<u64>>());
}
