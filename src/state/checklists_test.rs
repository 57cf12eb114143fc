use super::*;
use crate::net::types::ChecklistItem;

fn item(number: i64, completed: bool) -> ChecklistItem {
    ChecklistItem {
        id: number,
        item_number: number,
        requirement: format!("Requirement {number}"),
        description: String::new(),
        completed,
        priority: "MEDIUM".to_owned(),
        notes: None,
    }
}

fn checklist(id: i64, items: Vec<ChecklistItem>) -> Checklist {
    Checklist {
        id,
        standard_name: "ISO 27001:2022".to_owned(),
        standard: "ISO_27001".to_owned(),
        total_items: 0,
        completed_items: 0,
        items,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
        generated_by: "system".to_owned(),
    }
}

#[test]
fn progress_recomputes_from_items() {
    let list = checklist(1, vec![item(1, true), item(2, false), item(3, true)]);
    assert_eq!(progress(&list), (2, 3));
    assert_eq!(progress_percent(&list), 67);
}

#[test]
fn progress_falls_back_to_server_counters_without_items() {
    let mut list = checklist(1, Vec::new());
    list.total_items = 10;
    list.completed_items = 4;
    assert_eq!(progress(&list), (4, 10));
    assert_eq!(progress_percent(&list), 40);
}

#[test]
fn progress_percent_of_empty_checklist_is_zero() {
    let list = checklist(1, Vec::new());
    assert_eq!(progress_percent(&list), 0);
}

#[test]
fn apply_update_replaces_matching_checklist() {
    let mut state = ChecklistsState {
        items: vec![checklist(1, vec![item(1, false)]), checklist(2, Vec::new())],
        ..ChecklistsState::default()
    };

    state.apply_update(checklist(1, vec![item(1, true)]));
    assert!(state.items[0].items[0].completed);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn apply_update_ignores_unknown_checklist() {
    let mut state = ChecklistsState {
        items: vec![checklist(1, Vec::new())],
        ..ChecklistsState::default()
    };
    state.apply_update(checklist(99, Vec::new()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 1);
}

#[test]
fn template_file_name_matches_standard_and_format() {
    assert_eq!(template_file_name("ISO_27001", ExportFormat::Excel), "ISO_27001_Checklist.xlsx");
    assert_eq!(template_file_name("GDPR", ExportFormat::Pdf), "GDPR_Checklist.pdf");
}
