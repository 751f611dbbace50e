//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todonote_core` linkage outside the Flutter runtime.
//! - Walk one add/edit/toggle/delete pass with deterministic output.

use todonote_core::{InMemoryTodoStore, StoreConfig, TodoDraft, TodoService};

fn main() {
    println!("todonote_core ping={}", todonote_core::ping());
    println!("todonote_core version={}", todonote_core::core_version());

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            std::process::exit(2);
        }
    };
    println!("id_policy={}", config.id_policy.as_str());

    let mut service = TodoService::new(InMemoryTodoStore::with_config(config));

    let mut draft = TodoDraft::new();
    draft.set_title("Hi");
    if service.submit_new(&mut draft).is_err() {
        println!("rejected title_error={:?}", draft.title_error().unwrap_or(""));
    }

    draft.set_title("Groceries");
    draft.set_description("Milk, eggs");
    let seeded = [
        service.submit_new(&mut draft),
        service.create_todo("Second", "desc"),
    ];
    for result in seeded {
        match result {
            Ok(item) => println!("created item_id={}", item.item_id),
            Err(err) => println!("create failed: {err}"),
        }
    }

    if let Some(target) = service.resolve_edit_target("1").cloned() {
        let mut edit = TodoDraft::for_item(&target);
        edit.set_title("Updated");
        edit.set_description("new desc");
        if let Err(err) = service.submit_edit(target.item_id, &mut edit) {
            println!("edit failed: {err}");
        }
    }
    if let Err(err) = service.toggle_completion(1) {
        println!("toggle failed: {err}");
    }
    service.delete_todo(0);

    for item in service.items() {
        let mark = if item.is_completed { "x" } else { " " };
        println!(
            "[{mark}] {} {} - {}",
            item.item_id, item.title, item.description
        );
    }
}
