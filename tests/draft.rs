use chrono::NaiveDate;
use studyflow::model::{Category, DraftError, DraftTask, Priority, TagSet, Task, TaskPayload, TaskSubmission};
use uuid::Uuid;

#[test]
fn test_default_draft() {
    let draft = DraftTask::default();
    assert_eq!(draft.content, "");
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.category, Category::General);
    assert!(draft.tags.is_empty());
    assert!(!draft.has_content());
}

#[test]
fn test_tag_set_dedupes_and_trims() {
    let mut tags = TagSet::new();
    assert!(tags.insert("exam"));
    assert!(tags.insert("  math "));

    // Duplicates (after trimming) and blanks are rejected
    assert!(!tags.insert("exam"));
    assert!(!tags.insert(" exam  "));
    assert!(!tags.insert("   "));

    // Tags are case-sensitive
    assert!(tags.insert("Exam"));

    assert_eq!(tags.to_vec(), vec!["exam", "math", "Exam"]);
}

#[test]
fn test_tag_set_remove_is_exact() {
    let mut tags: TagSet = ["exam", "math"].iter().collect();

    assert!(!tags.remove("Exam"));
    assert!(!tags.remove("ex"));
    assert!(tags.remove("exam"));
    assert_eq!(tags.to_vec(), vec!["math"]);

    assert_eq!(tags.pop().as_deref(), Some("math"));
    assert!(tags.is_empty());
}

#[test]
fn test_normalize_minimal_draft() {
    let draft = DraftTask {
        content: "Buy milk".to_string(),
        estimated_time: "45".to_string(),
        ..Default::default()
    };

    let submission = draft.normalize().unwrap();
    assert_eq!(submission.content, "Buy milk");
    assert_eq!(submission.estimated_time, Some(45));
    assert_eq!(submission.deadline, None);
    assert_eq!(submission.description, None);
    assert!(submission.tags.is_empty());
}

#[test]
fn test_normalize_trims_content_and_omits_blanks() {
    let draft = DraftTask {
        content: "   Read chapter 4  ".to_string(),
        description: "   ".to_string(),
        estimated_time: "  ".to_string(),
        deadline: "".to_string(),
        ..Default::default()
    };

    let submission = draft.normalize().unwrap();
    assert_eq!(submission.content, "Read chapter 4");
    assert_eq!(submission.description, None);
    assert_eq!(submission.estimated_time, None);
    assert_eq!(submission.deadline, None);
}

#[test]
fn test_normalize_full_draft() {
    let draft = DraftTask {
        content: "Essay".to_string(),
        description: "History essay, 2000 words".to_string(),
        priority: Priority::Urgent,
        category: Category::Assignment,
        estimated_time: "120".to_string(),
        deadline: "2025-03-14T17:30".to_string(),
        tags: ["history", "writing"].iter().collect(),
    };

    let submission = draft.normalize().unwrap();
    let expected_deadline = NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(17, 30, 0)
        .unwrap();

    assert_eq!(submission.priority, Priority::Urgent);
    assert_eq!(submission.category, Category::Assignment);
    assert_eq!(submission.estimated_time, Some(120));
    assert_eq!(submission.deadline, Some(expected_deadline));
    assert_eq!(submission.description.as_deref(), Some("History essay, 2000 words"));
    assert_eq!(submission.tags, vec!["history", "writing"]);
}

#[test]
fn test_normalize_rejects_bad_input() {
    let empty = DraftTask::with_content("   ");
    assert_eq!(empty.normalize(), Err(DraftError::EmptyContent));

    let zero = DraftTask {
        estimated_time: "0".to_string(),
        ..DraftTask::with_content("Task")
    };
    assert_eq!(
        zero.normalize(),
        Err(DraftError::InvalidEstimatedTime("0".to_string()))
    );

    let words = DraftTask {
        estimated_time: "an hour".to_string(),
        ..DraftTask::with_content("Task")
    };
    assert!(matches!(words.normalize(), Err(DraftError::InvalidEstimatedTime(_))));

    let bad_deadline = DraftTask {
        deadline: "next friday".to_string(),
        ..DraftTask::with_content("Task")
    };
    assert_eq!(
        bad_deadline.normalize(),
        Err(DraftError::InvalidDeadline("next friday".to_string()))
    );
}

#[test]
fn test_draft_from_task_round_trips_fields() {
    let submission = TaskSubmission {
        content: "Lab report".to_string(),
        description: Some("Chemistry".to_string()),
        priority: Priority::High,
        category: Category::Study,
        estimated_time: Some(90),
        deadline: NaiveDate::from_ymd_opt(2025, 5, 2).and_then(|d| d.and_hms_opt(9, 0, 0)),
        tags: vec!["lab".to_string()],
    };
    let task = Task::from_submission(Uuid::new_v4(), submission.clone());

    let draft = DraftTask::from_task(&task);
    assert_eq!(draft.content, "Lab report");
    assert_eq!(draft.estimated_time, "90");
    assert_eq!(draft.deadline, "2025-05-02T09:00");
    assert_eq!(draft.normalize().unwrap(), submission);
}

#[test]
fn test_payload_wire_format() {
    // Absent optional fields are omitted from the serialized submission
    let payload = TaskPayload::Create {
        task: TaskSubmission::from_content("Buy milk"),
    };
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["kind"], "create");
    assert_eq!(json["task"]["content"], "Buy milk");
    assert_eq!(json["task"]["priority"], "medium");
    assert_eq!(json["task"]["category"], "general");
    assert!(json["task"].get("deadline").is_none());
    assert!(json["task"].get("estimated_time").is_none());

    let quick = serde_json::to_value(TaskPayload::Quick {
        content: "Call mom".to_string(),
    })
    .unwrap();
    assert_eq!(quick, serde_json::json!({ "kind": "quick", "content": "Call mom" }));
}

#[test]
fn test_priority_and_category_cycling() {
    assert_eq!(Priority::Urgent.next(), Priority::Low);
    assert_eq!(Priority::Low.previous(), Priority::Urgent);
    assert_eq!(Category::General.next(), Category::Study);
    assert_eq!("assignment".parse::<Category>(), Ok(Category::Assignment));
    assert!("homework".parse::<Category>().is_err());
}
