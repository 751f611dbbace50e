use todonote_core::{
    FieldError, IdPolicy, InMemoryTodoStore, StoreConfig, TodoDraft, TodoService,
    TodoServiceError, TodoStore,
};

fn service() -> TodoService<InMemoryTodoStore> {
    TodoService::new(InMemoryTodoStore::new())
}

fn legacy_service() -> TodoService<InMemoryTodoStore> {
    TodoService::new(InMemoryTodoStore::with_config(StoreConfig {
        id_policy: IdPolicy::StoreSize,
    }))
}

#[test]
fn create_on_empty_store_assigns_id_zero() {
    let mut service = service();

    let item = service.create_todo("Groceries", "Milk, eggs").unwrap();
    assert_eq!(item.item_id, 0);
    assert_eq!(item.title, "Groceries");
    assert!(!item.is_completed);
    assert_eq!(service.items(), &[item]);
}

#[test]
fn create_rejects_short_title_and_leaves_store_unchanged() {
    let mut service = service();

    let err = service.create_todo("Hi", "").unwrap_err();
    match err {
        TodoServiceError::Validation(report) => {
            assert_eq!(
                report.title_message(),
                Some("Title must be at least 3 characters.")
            );
            assert_eq!(report.description, None);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.store().is_empty());
}

#[test]
fn create_assigns_prior_count_as_id_under_both_policies() {
    for mut candidate in [service(), legacy_service()] {
        candidate.create_todo("First", "").unwrap();
        let before = candidate.items().len();
        let second = candidate.create_todo("Second", "desc").unwrap();
        assert_eq!(second.item_id as usize, before);
        assert_eq!(candidate.items().len(), before + 1);
    }
}

#[test]
fn delete_then_find_reports_not_found() {
    let mut service = service();
    service.create_todo("First", "").unwrap();
    service.create_todo("Second", "desc").unwrap();

    assert!(service.delete_todo(0));
    assert_eq!(service.items().len(), 1);
    assert_eq!(service.items()[0].item_id, 1);
    assert_eq!(service.items()[0].title, "Second");
    assert!(service.find_todo(0).is_none());
    assert!(!service.delete_todo(0));
}

#[test]
fn edit_updates_text_only() {
    let mut service = service();
    service.create_todo("First", "").unwrap();
    let second = service.create_todo("Second", "desc").unwrap();
    service.toggle_completion(second.item_id).unwrap();

    let updated = service
        .edit_todo(second.item_id, "Updated", "new desc")
        .unwrap();
    assert_eq!(updated.item_id, 1);
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.description, "new desc");
    assert!(updated.is_completed);
    assert_eq!(service.find_todo(1), Some(&updated));
}

#[test]
fn edit_rejects_invalid_text_without_mutation() {
    let mut service = service();
    let item = service.create_todo("Keep me", "body").unwrap();

    let err = service
        .edit_todo(item.item_id, "Keep me", "x".repeat(121))
        .unwrap_err();
    assert!(matches!(err, TodoServiceError::Validation(_)));
    assert_eq!(service.find_todo(item.item_id), Some(&item));
}

#[test]
fn edit_and_toggle_report_missing_item() {
    let mut service = service();

    let err = service.edit_todo(42, "Valid", "").unwrap_err();
    assert_eq!(err, TodoServiceError::NotFound(42));
    let err = service.toggle_completion(42).unwrap_err();
    assert_eq!(err, TodoServiceError::NotFound(42));
}

#[test]
fn toggle_twice_restores_completion() {
    let mut service = service();
    let item = service.create_todo("Laundry", "").unwrap();

    assert!(service.toggle_completion(item.item_id).unwrap());
    assert!(!service.toggle_completion(item.item_id).unwrap());
    assert!(!service.find_todo(item.item_id).unwrap().is_completed);
}

#[test]
fn resolve_edit_target_parses_route_argument() {
    let mut service = service();
    let item = service.create_todo("Groceries", "").unwrap();

    assert_eq!(service.resolve_edit_target("0"), Some(&item));
    assert_eq!(service.resolve_edit_target("1"), None);
    assert_eq!(service.resolve_edit_target("zero"), None);
}

#[test]
fn legacy_policy_reuses_ids_after_delete() {
    let mut service = legacy_service();
    service.create_todo("First", "").unwrap();
    service.create_todo("Second", "").unwrap();
    assert!(service.delete_todo(0));

    let third = service.create_todo("Third", "").unwrap();
    assert_eq!(third.item_id, 1);
    assert_eq!(service.find_todo(1).unwrap().title, "Second");
}

#[test]
fn submit_new_fills_draft_errors_on_failure() {
    let mut service = service();
    let mut draft = TodoDraft::new();
    draft.set_title("Hi");

    assert!(service.submit_new(&mut draft).is_err());
    assert_eq!(draft.title_error(), Some(FieldError::TitleTooShort.message()));
    assert!(service.items().is_empty());

    draft.set_title("Hello");
    let item = service.submit_new(&mut draft).unwrap();
    assert_eq!(item.title, "Hello");
    assert_eq!(draft.title_error(), None);
}

#[test]
fn submit_edit_commits_prefilled_draft() {
    let mut service = service();
    let item = service.create_todo("Read", "chapter 1").unwrap();

    let target = service.resolve_edit_target("0").cloned().unwrap();
    let mut draft = TodoDraft::for_item(&target);
    draft.set_description("chapter 2");

    let updated = service.submit_edit(item.item_id, &mut draft).unwrap();
    assert_eq!(updated.title, "Read");
    assert_eq!(updated.description, "chapter 2");
}

#[test]
fn row_actions_hit_the_tapped_row_when_ids_collide() {
    let mut service = legacy_service();
    service.create_todo("First", "").unwrap();
    service.create_todo("Second", "").unwrap();
    assert!(service.delete_todo(0));
    let third = service.create_todo("Third", "").unwrap();
    assert_eq!(third.item_id, 1);

    assert!(service.toggle_row(1).unwrap());
    let state = service
        .items()
        .iter()
        .map(|item| (item.title.as_str(), item.is_completed))
        .collect::<Vec<_>>();
    assert_eq!(state, vec![("Second", false), ("Third", true)]);

    let removed = service.delete_row(1).unwrap();
    assert_eq!(removed.title, "Third");
    let titles = service
        .items()
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Second"]);
}

#[test]
fn row_actions_report_out_of_range_rows() {
    let mut service = service();
    service.create_todo("Only", "").unwrap();

    assert_eq!(
        service.toggle_row(3).unwrap_err(),
        TodoServiceError::RowOutOfRange(3)
    );
    assert_eq!(
        service.delete_row(1).unwrap_err(),
        TodoServiceError::RowOutOfRange(1)
    );
    assert_eq!(service.items().len(), 1);
}
