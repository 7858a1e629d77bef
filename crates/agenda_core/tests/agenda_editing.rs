use agenda_core::{AgendaFieldUpdate, AgendaItem, AgendaList, EditError, MoveDirection};
use std::collections::HashSet;
use uuid::Uuid;

fn sample_list() -> AgendaList {
    AgendaList::from_items(vec![
        AgendaItem::activity("Reception", "Reception Team", "15m"),
        AgendaItem::section("PREPARED SPEECH"),
        AgendaItem::activity("Project Speech #1", "Speaker 1", "7m"),
    ])
    .unwrap()
}

fn ids(list: &AgendaList) -> Vec<Uuid> {
    list.items().iter().map(|item| item.id).collect()
}

#[test]
fn insert_at_splices_placeholder_without_touching_others() {
    let mut list = sample_list();
    let before = list.items().to_vec();

    let inserted = list.insert_at(1, false).unwrap().clone();
    assert_eq!(inserted.activity, "New Activity");
    assert_eq!(inserted.duration, "5m");
    assert!(inserted.role.is_empty());
    assert!(!inserted.is_section_header);

    assert_eq!(list.len(), 4);
    assert_eq!(list.items()[1], inserted);
    assert_eq!(list.items()[0], before[0]);
    assert_eq!(list.items()[2], before[1]);
    assert_eq!(list.items()[3], before[2]);
}

#[test]
fn insert_at_accepts_both_ends() {
    let mut list = sample_list();
    let head = list.insert_at(0, true).unwrap().id;
    let tail_index = list.len();
    let tail = list.insert_at(tail_index, false).unwrap().id;

    assert_eq!(list.items().first().map(|item| item.id), Some(head));
    assert_eq!(list.items().last().map(|item| item.id), Some(tail));
    let header = list.get(head).unwrap();
    assert_eq!(header.activity, "NEW SESSION");
    assert!(header.duration.is_empty());
}

#[test]
fn insert_past_end_is_rejected_and_list_unchanged() {
    let mut list = sample_list();
    let before = list.clone();
    let err = list.insert_at(4, false).unwrap_err();
    assert_eq!(err, EditError::IndexOutOfBounds { index: 4, len: 3 });
    assert_eq!(list, before);
}

#[test]
fn insert_then_delete_restores_original_sequence() {
    for index in 0..=3 {
        let mut list = sample_list();
        let before = list.clone();
        let id = list.insert_at(index, index % 2 == 0).unwrap().id;

        let removed = list.delete_by_id(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(list, before);
    }
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut list = sample_list();
    let before = list.clone();
    assert!(list.delete_by_id(Uuid::new_v4()).is_none());
    assert_eq!(list, before);
}

#[test]
fn move_adjacent_swaps_neighbours() {
    let mut list = sample_list();
    let original = ids(&list);

    assert!(list.move_adjacent(2, MoveDirection::Up));
    assert_eq!(ids(&list), vec![original[0], original[2], original[1]]);

    assert!(list.move_adjacent(0, MoveDirection::Down));
    assert_eq!(ids(&list), vec![original[2], original[0], original[1]]);
}

#[test]
fn move_adjacent_at_boundaries_is_silent_noop() {
    let mut list = sample_list();
    let before = list.clone();

    assert!(!list.move_adjacent(0, MoveDirection::Up));
    assert!(!list.move_adjacent(list.len() - 1, MoveDirection::Down));
    assert!(!list.move_adjacent(10, MoveDirection::Up));
    assert_eq!(list, before);
}

#[test]
fn update_field_touches_one_field_of_one_item() {
    let mut list = sample_list();
    let before = list.clone();
    let target = list.items()[2].id;

    assert!(list.update_field(target, AgendaFieldUpdate::Role("Alice".to_string())));

    let updated = list.get(target).unwrap();
    assert_eq!(updated.role, "Alice");
    assert_eq!(updated.activity, before.items()[2].activity);
    assert_eq!(updated.duration, before.items()[2].duration);
    assert_eq!(list.items()[..2], before.items()[..2]);
}

#[test]
fn update_field_unknown_id_is_noop() {
    let mut list = sample_list();
    let before = list.clone();
    assert!(!list.update_field(
        Uuid::new_v4(),
        AgendaFieldUpdate::Activity("Ghost".to_string())
    ));
    assert_eq!(list, before);
}

#[test]
fn identities_stay_unique_across_mixed_edits() {
    let mut list = sample_list();
    let mut deleted = HashSet::new();

    for round in 0..20 {
        let index = round % (list.len() + 1);
        let id = list.insert_at(index, round % 3 == 0).unwrap().id;
        list.move_adjacent(round % list.len(), MoveDirection::Down);
        if round % 4 == 0 {
            list.delete_by_id(id);
            deleted.insert(id);
        }
    }

    let live = ids(&list);
    let unique = live.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), live.len());
    assert!(live.iter().all(|id| !deleted.contains(id)));
}
