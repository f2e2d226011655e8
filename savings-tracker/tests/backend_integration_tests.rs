//! End-to-end tests through `Backend` over a file-backed data directory.

use savings_tracker::backend::storage::{FileKeyValueStore, KeyValueStorage, DEFAULT_STORAGE_KEY};
use savings_tracker::{Backend, TrackerConfig};
use shared::{CreateGoalRequest, NotificationSeverity};
use std::fs;
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn request(name: &str, goal: &str, due: &str, saved: &str) -> CreateGoalRequest {
    CreateGoalRequest {
        name: name.to_string(),
        goal_amount: goal.to_string(),
        due_date: due.to_string(),
        saved_amount: saved.to_string(),
    }
}

#[test]
fn test_reads_legacy_payload_with_string_amounts() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::new(temp_dir.path()).unwrap();
    store
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"name":"Trip","goal":"1000","dueDate":"2030-01-01","savedAmount":"250"},
                {"name":"Broken","goal":"lots","dueDate":"2030-01-01","savedAmount":0},
                {"name":"Bike","goal":300,"dueDate":"2030-02-01","savedAmount":20}]"#,
        )
        .unwrap();

    let backend = Backend::with_data_directory(temp_dir.path());

    let goals = backend.commands.goal_service().goals();
    let names: Vec<&str> = goals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Trip", "Bike"]);
    assert_eq!(goals[0].goal_amount, 1000.0);
    assert_eq!(goals[0].saved_amount, 250.0);
}

#[test]
fn test_writes_numeric_camel_case_payload() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();

    let mut backend = Backend::with_data_directory(temp_dir.path());
    backend
        .commands
        .submit_new_goal(request("Trip", "1000", "2030-01-01", "250"));

    let payload = fs::read_to_string(temp_dir.path().join("savingsList.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "Trip", "goal": 1000.0, "dueDate": "2030-01-01", "savedAmount": 250.0}])
    );
}

#[test]
fn test_full_session() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let mut backend = Backend::with_data_directory(temp_dir.path());
    let commands = &mut backend.commands;

    let created = commands.submit_new_goal(request("Trip", "1000", "2030-01-01", "250"));
    assert_eq!(created.notification.severity, NotificationSeverity::Success);
    let duplicate = commands.submit_new_goal(request("Trip", "10", "2030-01-01", "0"));
    assert_eq!(duplicate.notification.severity, NotificationSeverity::Error);

    commands.select_goal("Trip");
    commands.record_deposit("250");
    commands.record_withdrawal("100");
    let pacing = commands.get_pacing().unwrap();
    assert_eq!(pacing.progress_percent, 40.0);
    assert_eq!(pacing.remaining_amount, 600.0);

    assert!(commands.remove_goal("Trip").selection_cleared);
    assert!(commands.get_pacing().is_none());
    drop(backend);

    let reloaded = Backend::with_data_directory(temp_dir.path());
    assert!(reloaded.commands.goal_service().goals().is_empty());
}

#[test]
fn test_legacy_empty_write_behavior() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let mut config = TrackerConfig::default();
    config.persist_empty_collection = false;
    savings_tracker::ConfigRepository::new(temp_dir.path()).save(&config).unwrap();

    let mut backend = Backend::with_data_directory(temp_dir.path());
    backend
        .commands
        .submit_new_goal(request("Trip", "1000", "2030-01-01", "0"));
    backend.commands.remove_goal("Trip");
    drop(backend);

    // The last goal reappears since the empty collection was never written
    let reloaded = Backend::with_data_directory(temp_dir.path());
    assert_eq!(reloaded.commands.goal_service().goals().len(), 1);
}
