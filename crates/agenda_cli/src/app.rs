use crate::cli::{Cli, Commands, Direction, GlobalArgs, ItemField, ReminderCommands};
use agenda_core::db::open_db;
use agenda_core::{
    default_log_level, export_print, image_file_name, init_logging, render_print, AgendaConfig,
    AgendaFieldUpdate, AgendaItemId, EditorSession, FallbackReason, MeetingField, MoveDirection,
    ResetConfirmation, SqliteKvRepository, StateStore,
};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ACTIVITY_WIDTH: usize = 36;
const ROLE_WIDTH: usize = 20;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    start_logging(&cli.global)?;

    let config = match cli.global.namespace.as_deref() {
        Some(namespace) => AgendaConfig::default().with_namespace(namespace),
        None => AgendaConfig::default(),
    };
    let conn = open_db(&cli.global.db)
        .with_context(|| format!("failed to open agenda database {}", cli.global.db.display()))?;
    let repo = SqliteKvRepository::try_new(&conn).context("agenda database is not usable")?;
    let store = StateStore::new(repo, config.namespace.clone());

    if let Commands::Reset { yes } = cli.command {
        store
            .reset(ResetConfirmation::from(yes))
            .context("reset refused; pass --yes to clear saved data")?;
        println!("Reset namespace `{}` to defaults.", config.namespace);
        return Ok(());
    }

    let loaded = store.load();
    for (section, reason) in &loaded.fallbacks {
        match reason {
            FallbackReason::Missing => {}
            FallbackReason::Undecodable(detail) | FallbackReason::ReadFailed(detail) => {
                eprintln!("warning: saved {} unreadable, using defaults: {detail}", section.key());
            }
        }
    }
    let mut session = EditorSession::with_config(loaded.state, &config);

    let print_layout = matches!(cli.command, Commands::Show { print: true });
    if let Some(message) = apply(&mut session, cli.command)? {
        println!("{message}");
    }

    if session.is_dirty() {
        store
            .save(session.state())
            .context("failed to save agenda")?;
        session.mark_saved();
        info!("event=cli_save module=cli status=ok namespace={}", config.namespace);
    }

    if print_layout {
        print!("{}", render_print(session.state()));
    } else {
        print_schedule(&session);
    }
    Ok(())
}

fn start_logging(global: &GlobalArgs) -> Result<()> {
    let Some(log_dir) = global.log_dir.as_ref() else {
        return Ok(());
    };
    let level = global.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &log_dir.to_string_lossy())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")
}

/// Applies one command. Returns a status line for commands that produce one.
fn apply(session: &mut EditorSession, command: Commands) -> Result<Option<String>> {
    match command {
        Commands::Show { .. } | Commands::Reset { .. } => Ok(None),
        Commands::Insert { index, section } => {
            let id = session
                .insert_item(index, section)
                .context("insert failed")?;
            Ok(Some(format!("Inserted {id}")))
        }
        Commands::Delete { id } => {
            let id = parse_item_id(&id)?;
            let removed = session
                .delete_item(id)
                .ok_or_else(|| anyhow!("no agenda item with id {id}"))?;
            Ok(Some(format!("Deleted `{}`", removed.activity)))
        }
        Commands::Move { index, direction } => {
            let direction = match direction {
                Direction::Up => MoveDirection::Up,
                Direction::Down => MoveDirection::Down,
            };
            if session.move_item(index, direction) {
                return Ok(None);
            }
            let len = session.agenda().len();
            if index >= len {
                return Ok(Some(format!("Row {index} does not exist (0..{len}); nothing moved.")));
            }
            let edge = match direction {
                MoveDirection::Up => "top",
                MoveDirection::Down => "bottom",
            };
            Ok(Some(format!("Row {index} is already at the {edge}.")))
        }
        Commands::SetItem { id, field, value } => {
            let id = parse_item_id(&id)?;
            if !session.agenda().iter().any(|item| item.id == id) {
                return Ok(Some(format!("No agenda item with id {id}; nothing changed.")));
            }
            let update = match field {
                ItemField::Activity => AgendaFieldUpdate::Activity(value),
                ItemField::Role => AgendaFieldUpdate::Role(value),
                ItemField::Duration => AgendaFieldUpdate::Duration(value),
                ItemField::Section => AgendaFieldUpdate::SectionHeader(
                    value
                        .trim()
                        .parse::<bool>()
                        .with_context(|| format!("expected true or false, got `{value}`"))?,
                ),
            };
            session.update_item(id, update);
            Ok(None)
        }
        Commands::SetMeeting { field, value } => {
            let Some(field) = MeetingField::parse(&field) else {
                let known: Vec<&str> = MeetingField::all().iter().map(|f| f.name()).collect();
                bail!("unknown meeting field `{field}`; expected one of {}", known.join(", "));
            };
            session.update_meeting(field, value);
            Ok(None)
        }
        Commands::SetOfficer { index, name } => {
            let len = session.state().officers.len();
            if index >= len {
                bail!("officer index {index} out of range (0..{len})");
            }
            session.set_officer_name(index, name);
            Ok(None)
        }
        Commands::Reminder { command } => apply_reminder(session, command),
        Commands::Export { out } => {
            let path = out.unwrap_or_else(|| default_export_path(session));
            export_print(session.state(), &path)
                .with_context(|| format!("failed to export {}", path.display()))?;
            Ok(Some(format!("Wrote {}", path.display())))
        }
    }
}

fn apply_reminder(
    session: &mut EditorSession,
    command: ReminderCommands,
) -> Result<Option<String>> {
    let len = session.state().reminders.len();
    match command {
        ReminderCommands::Add { text } => {
            let index = session.add_reminder(text);
            Ok(Some(format!("Added reminder {}", index + 1)))
        }
        ReminderCommands::Set { index, text } => {
            if index >= len {
                bail!("reminder index {index} out of range (0..{len})");
            }
            session.update_reminder(index, text);
            Ok(None)
        }
        ReminderCommands::Remove { index } => {
            session
                .remove_reminder(index)
                .ok_or_else(|| anyhow!("reminder index {index} out of range (0..{len})"))?;
            Ok(None)
        }
    }
}

fn parse_item_id(raw: &str) -> Result<AgendaItemId> {
    Uuid::parse_str(raw.trim()).with_context(|| format!("invalid item id `{}`", raw.trim()))
}

fn default_export_path(session: &EditorSession) -> PathBuf {
    let name = image_file_name(&session.info().meeting_number);
    Path::new(&name).with_extension("txt")
}

fn print_schedule(session: &EditorSession) {
    let info = session.info();
    println!("Meeting #{}  {}", info.meeting_number, info.theme);
    for line in schedule_lines(session) {
        println!("{line}");
    }
}

/// One table line per row. The first timed row shows the start time as typed.
fn schedule_lines(session: &EditorSession) -> Vec<String> {
    let start_time = session.info().time.trim();
    session
        .schedule()
        .into_iter()
        .map(|scheduled| {
            let item = scheduled.item;
            if item.is_section_header {
                return format!(
                    "{:>3}  {:<5}  == {} ==  {}",
                    scheduled.index, "", item.activity, item.id
                );
            }
            let time = if scheduled.is_clock_seed() {
                start_time.to_string()
            } else {
                scheduled.display_time()
            };
            format!(
                "{:>3}  {:<5}  {:<aw$} {:<rw$} {:<6} {}",
                scheduled.index,
                time,
                item.activity,
                item.role,
                item.duration,
                item.id,
                aw = ACTIVITY_WIDTH,
                rw = ROLE_WIDTH,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{apply, default_export_path, schedule_lines};
    use crate::cli::{Commands, Direction, ItemField, ReminderCommands};
    use agenda_core::{AgendaState, EditorSession, MeetingField};
    use std::path::PathBuf;
    use uuid::Uuid;

    fn default_session() -> EditorSession {
        EditorSession::new(AgendaState::defaults())
    }

    fn move_row(index: usize, direction: Direction) -> Commands {
        Commands::Move { index, direction }
    }

    #[test]
    fn boundary_moves_succeed_without_changes() {
        let mut session = default_session();
        let before = session.state().clone();

        let top = apply(&mut session, move_row(0, Direction::Up)).unwrap();
        assert_eq!(top.as_deref(), Some("Row 0 is already at the top."));

        let last = session.agenda().len() - 1;
        let bottom = apply(&mut session, move_row(last, Direction::Down)).unwrap();
        assert_eq!(bottom, Some(format!("Row {last} is already at the bottom.")));

        assert!(apply(&mut session, move_row(99, Direction::Up)).is_ok());
        assert_eq!(session.state(), &before);
        assert!(!session.is_dirty());
    }

    #[test]
    fn interior_move_swaps_rows() {
        let mut session = default_session();
        let second = session.agenda()[1].id;

        let message = apply(&mut session, move_row(1, Direction::Up)).unwrap();
        assert_eq!(message, None);
        assert_eq!(session.agenda()[0].id, second);
        assert!(session.is_dirty());
    }

    #[test]
    fn set_item_with_unknown_id_changes_nothing() {
        let mut session = default_session();
        let before = session.state().clone();

        let message = apply(
            &mut session,
            Commands::SetItem {
                id: Uuid::new_v4().to_string(),
                field: ItemField::Activity,
                value: "Ghost".to_string(),
            },
        )
        .unwrap();
        assert!(message.unwrap().contains("nothing changed"));
        assert_eq!(session.state(), &before);
        assert!(!session.is_dirty());
    }

    #[test]
    fn set_item_rejects_malformed_input() {
        let mut session = default_session();
        let id = session.agenda()[0].id.to_string();

        assert!(apply(
            &mut session,
            Commands::SetItem {
                id: "row-1".to_string(),
                field: ItemField::Role,
                value: "Host".to_string(),
            },
        )
        .is_err());
        assert!(apply(
            &mut session,
            Commands::SetItem {
                id,
                field: ItemField::Section,
                value: "maybe".to_string(),
            },
        )
        .is_err());
        assert!(!session.is_dirty());
    }

    #[test]
    fn set_item_updates_duration_and_header_flag() {
        let mut session = default_session();
        let id = session.agenda()[2].id.to_string();

        apply(
            &mut session,
            Commands::SetItem {
                id: id.clone(),
                field: ItemField::Duration,
                value: "10m".to_string(),
            },
        )
        .unwrap();
        apply(
            &mut session,
            Commands::SetItem {
                id,
                field: ItemField::Section,
                value: " true ".to_string(),
            },
        )
        .unwrap();

        assert_eq!(session.agenda()[2].duration, "10m");
        assert!(session.agenda()[2].is_section_header);
    }

    #[test]
    fn reminder_commands_respect_bounds() {
        let mut session = default_session();
        let count = session.state().reminders.len();

        let err = apply(
            &mut session,
            Commands::Reminder {
                command: ReminderCommands::Remove { index: count },
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(apply(
            &mut session,
            Commands::Reminder {
                command: ReminderCommands::Set {
                    index: count,
                    text: "late".to_string(),
                },
            },
        )
        .is_err());
        assert!(!session.is_dirty());

        let added = apply(
            &mut session,
            Commands::Reminder {
                command: ReminderCommands::Add {
                    text: "Bring a name badge".to_string(),
                },
            },
        )
        .unwrap();
        assert_eq!(added, Some(format!("Added reminder {}", count + 1)));
        apply(
            &mut session,
            Commands::Reminder {
                command: ReminderCommands::Remove { index: 0 },
            },
        )
        .unwrap();
        assert_eq!(session.state().reminders.len(), count);
    }

    #[test]
    fn set_meeting_rejects_unknown_field() {
        let mut session = default_session();
        let err = apply(
            &mut session,
            Commands::SetMeeting {
                field: "venue".to_string(),
                value: "Hall".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("meeting_number"));

        apply(
            &mut session,
            Commands::SetMeeting {
                field: "word-of-the-day".to_string(),
                value: "Brave".to_string(),
            },
        )
        .unwrap();
        assert_eq!(session.info().word_of_the_day, "Brave");
    }

    #[test]
    fn delete_of_unknown_id_is_reported() {
        let mut session = default_session();
        let err = apply(
            &mut session,
            Commands::Delete {
                id: Uuid::new_v4().to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("no agenda item"));
    }

    #[test]
    fn default_export_path_follows_meeting_number() {
        let mut session = default_session();
        assert_eq!(default_export_path(&session), PathBuf::from("STTM-Agenda-M258.txt"));

        session.update_meeting(MeetingField::MeetingNumber, "../301");
        assert_eq!(default_export_path(&session), PathBuf::from("STTM-Agenda-M301.txt"));
    }

    #[test]
    fn schedule_lines_show_typed_start_time_on_first_row() {
        let mut session = default_session();
        session.update_meeting(MeetingField::Time, "7pm");

        let lines = schedule_lines(&session);
        assert!(lines[0].contains("7pm"));
        assert!(!lines[0].contains("02:30"));
        assert!(lines[1].contains("02:45"));
        assert!(lines[7].contains("== PREPARED SPEECH =="));
    }
}
