use agenda_core::{
    AgendaConfig, AgendaFieldUpdate, AgendaState, EditorSession, MeetingField, MoveDirection,
};

fn session() -> EditorSession {
    EditorSession::new(AgendaState::defaults())
}

#[test]
fn edits_mark_dirty_and_mark_saved_clears() {
    let mut session = session();
    session.insert_item(0, false).unwrap();
    assert!(session.is_dirty());

    session.mark_saved();
    assert!(!session.is_dirty());
}

#[test]
fn start_time_change_recomputes_schedule() {
    let mut session = session();
    assert_eq!(session.schedule()[1].display_time(), "02:45");

    assert!(session.update_meeting(MeetingField::Time, "19:00"));
    let schedule = session.schedule();
    assert_eq!(schedule[0].display_time(), "19:00");
    assert_eq!(schedule[1].display_time(), "19:15");
}

#[test]
fn duration_change_recomputes_following_rows() {
    let mut session = session();
    session.update_meeting(MeetingField::Time, "10:00");
    let first = session.agenda()[0].id;

    assert!(session.update_item(first, AgendaFieldUpdate::Duration("20m".to_string())));
    assert_eq!(session.schedule()[1].display_time(), "10:20");
}

#[test]
fn undo_and_redo_restore_whole_state() {
    let mut session = session();
    let initial = session.state().clone();

    let id = session.insert_item(2, true).unwrap();
    session.update_meeting(MeetingField::Theme, "Courage");
    let after_edits = session.state().clone();

    assert!(session.undo());
    assert!(session.state().agenda.get(id).is_some());
    assert_eq!(session.info().theme, initial.info.theme);

    assert!(session.undo());
    assert_eq!(session.state(), &initial);
    assert!(!session.undo());
    assert_eq!(session.state(), &initial);

    assert!(session.redo());
    assert!(session.redo());
    assert_eq!(session.state(), &after_edits);
    assert!(!session.redo());
}

#[test]
fn new_edit_after_undo_drops_redo() {
    let mut session = session();
    session.move_item(0, MoveDirection::Down);
    session.undo();
    assert!(session.can_redo());

    session.add_reminder("Bring a pen");
    assert!(!session.can_redo());
}

#[test]
fn history_capacity_bounds_undo_depth() {
    let config = AgendaConfig::default().with_history_capacity(3);
    let mut session = EditorSession::with_config(AgendaState::defaults(), &config);
    for n in 0..5 {
        session.update_meeting(MeetingField::MeetingNumber, n.to_string());
    }

    let mut undone = 0;
    while session.undo() {
        undone += 1;
    }
    assert_eq!(undone, 2);
    assert_eq!(session.info().meeting_number, "2");
}

#[test]
fn boundary_move_records_nothing() {
    let mut session = session();
    let last = session.agenda().len() - 1;
    assert!(!session.move_item(0, MoveDirection::Up));
    assert!(!session.move_item(last, MoveDirection::Down));
    assert!(!session.is_dirty());
    assert!(!session.can_undo());
}

#[test]
fn officers_and_reminders_are_editable() {
    let mut session = session();
    assert!(session.set_officer_name(1, "Dana Li"));
    assert_eq!(session.state().officers[1].name, "Dana Li");
    assert_eq!(session.state().officers[1].role, "VP Education");

    let index = session.add_reminder("Arrive ten minutes early");
    assert_eq!(index, 4);
    assert!(session.update_reminder(index, "Arrive early"));
    assert_eq!(
        session.remove_reminder(0).as_deref(),
        Some("Please turn off your mobile phone or turn it into silent mode!")
    );
    assert_eq!(session.state().reminders.len(), 4);
    assert_eq!(session.state().reminders[3], "Arrive early");
}

#[test]
fn replace_state_resets_history_and_dirty_flag() {
    let mut session = session();
    session.insert_item(0, false).unwrap();
    session.replace_state(AgendaState::defaults());
    assert!(!session.is_dirty());
    assert!(!session.can_undo());
}
