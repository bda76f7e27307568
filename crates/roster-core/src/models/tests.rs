#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use jiff::civil::date;
    use uuid::Uuid;

    use crate::{
        models::{TaskFilter, TaskPage, TaskRecord, TaskStatus, UserId, TASK_SCHEMA_VERSION},
        params::{QueryScope, TaskQuery},
    };

    fn create_test_task() -> TaskRecord {
        TaskRecord {
            schema_version: TASK_SCHEMA_VERSION,
            id: "0cc68a93-0d70-4d60-9c2a-7e70ff1b5d16".to_string(),
            name: "Buy milk".to_string(),
            description: "Two liters, whole".to_string(),
            assignees: vec![UserId(100), UserId(200)],
            due_date: Some(date(2024, 2, 1)),
            status: TaskStatus::Incomplete,
            added_by: UserId(100),
        }
    }

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Incomplete.as_str(), "incomplete");
        assert_eq!(TaskStatus::Complete.as_str(), "complete");
    }

    #[test]
    fn test_task_status_from_str() {
        assert_eq!(
            TaskStatus::from_str("incomplete").unwrap(),
            TaskStatus::Incomplete
        );
        assert_eq!(
            TaskStatus::from_str("Complete").unwrap(),
            TaskStatus::Complete
        );
        assert!(TaskStatus::from_str("done").is_err());
    }

    #[test]
    fn test_task_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Incomplete).unwrap(),
            "\"incomplete\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Complete).unwrap(),
            "\"complete\""
        );
    }

    #[test]
    fn test_new_task_defaults() {
        let task = TaskRecord::new("Buy milk", "Two liters", vec![UserId(1)], None, UserId(1));

        assert_eq!(task.schema_version, TASK_SCHEMA_VERSION);
        assert_eq!(task.status, TaskStatus::Incomplete);
        assert!(task.is_open());
        assert_eq!(task.due_date, None);
        assert_eq!(task.added_by, UserId(1));
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_new_tasks_get_unique_ids() {
        let a = TaskRecord::new("a", "a", vec![UserId(1)], None, UserId(1));
        let b = TaskRecord::new("b", "b", vec![UserId(1)], None, UserId(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = create_test_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_key_order_is_stable() {
        let json = serde_json::to_string_pretty(&create_test_task()).unwrap();

        let keys = [
            "\"schema_version\"",
            "\"id\"",
            "\"name\"",
            "\"description\"",
            "\"assignees\"",
            "\"due_date\"",
            "\"status\"",
            "\"added_by\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| json.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_due_date_serializes_verbatim() {
        let task = create_test_task();
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"due_date\":\"2024-02-01\""));
    }

    #[test]
    fn test_absent_due_date_serializes_as_null() {
        let mut task = create_test_task();
        task.due_date = None;
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"due_date\":null"));
    }

    #[test]
    fn test_non_ascii_text_stays_unescaped() {
        let mut task = create_test_task();
        task.name = "牛乳を買う".to_string();
        let json = serde_json::to_string_pretty(&task).unwrap();
        assert!(json.contains("牛乳を買う"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_legacy_record_without_schema_version_loads() {
        let json = r#"{
            "id": "abc",
            "name": "Buy milk",
            "description": "Two liters",
            "assignees": [100],
            "due_date": null,
            "status": "incomplete",
            "added_by": 100
        }"#;
        let task: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(task.schema_version, TASK_SCHEMA_VERSION);
        assert_eq!(task.assignees, vec![UserId(100)]);
    }

    #[test]
    fn test_user_id_is_transparent_in_json() {
        let json = serde_json::to_string(&UserId(42)).unwrap();
        assert_eq!(json, "42");
        let back: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(back, UserId(42));
    }

    #[test]
    fn test_user_id_from_str() {
        assert_eq!(UserId::from_str("123").unwrap(), UserId(123));
        assert!(UserId::from_str("<@123>").is_err());
        assert!(UserId::from_str("").is_err());
    }

    #[test]
    fn test_filter_requires_incomplete_status() {
        let mut task = create_test_task();
        let filter = TaskFilter::default();
        assert!(filter.matches(&task));

        task.status = TaskStatus::Complete;
        assert!(!filter.matches(&task));
    }

    #[test]
    fn test_filter_by_assignee_membership() {
        let task = create_test_task();

        let member = TaskFilter {
            assignee: Some(UserId(200)),
        };
        assert!(member.matches(&task));

        let stranger = TaskFilter {
            assignee: Some(UserId(999)),
        };
        assert!(!stranger.matches(&task));
    }

    #[test]
    fn test_filter_from_query_scope() {
        let mine = TaskQuery {
            requester: UserId(7),
            scope: QueryScope::Mine,
        };
        let filter: TaskFilter = (&mine).into();
        assert_eq!(filter.assignee, Some(UserId(7)));

        let all = TaskQuery {
            requester: UserId(7),
            scope: QueryScope::All,
        };
        let filter: TaskFilter = (&all).into();
        assert_eq!(filter.assignee, None);
    }

    #[test]
    fn test_page_keeps_short_lists_intact() {
        let matches: Vec<TaskRecord> = (0..3)
            .map(|n| {
                TaskRecord::new(
                    format!("task {n}"),
                    "body",
                    vec![UserId(1)],
                    None,
                    UserId(1),
                )
            })
            .collect();
        let page = TaskPage::from_matches(matches);

        assert_eq!(page.len(), 3);
        assert_eq!(page.total, 3);
        assert!(!page.is_truncated());
        assert!(!page.is_empty());
        assert_eq!(page.tasks[0].name, "task 0");
    }

    #[test]
    fn test_page_truncates_to_ceiling() {
        let matches: Vec<TaskRecord> = (0..30)
            .map(|n| {
                TaskRecord::new(
                    format!("task {n}"),
                    "body",
                    vec![UserId(1)],
                    None,
                    UserId(1),
                )
            })
            .collect();
        let page = TaskPage::from_matches(matches);

        assert_eq!(page.len(), 25);
        assert_eq!(page.total, 30);
        assert!(page.is_truncated());
        // Insertion order survives truncation
        assert_eq!(page.tasks[24].name, "task 24");
    }

    #[test]
    fn test_empty_page() {
        let page = TaskPage::from_matches(Vec::new());
        assert!(page.is_empty());
        assert!(!page.is_truncated());
    }
}
