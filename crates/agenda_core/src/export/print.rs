//! Print-formatted agenda page.

use crate::export::ExportError;
use crate::model::state::AgendaState;
use crate::schedule::propagate::propagate;
use log::info;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const CLUB_NAME: &str = "ShanTou Toastmasters";
pub const CLUB_MISSION: &str = "We provide a supportive and positive learning experience in which \
members are empowered to develop communication and leadership skills, resulting in greater \
self-confidence and personal growth.";

/// Speech timing cues printed in the sidebar: (signal, short speech, long speech).
pub const TIME_RULES: [(&str, &str, &str); 4] = [
    ("Green", "1 min left", "2 min left"),
    ("Yellow", "0.5 min left", "1 min left"),
    ("Red", "Time is up", "Time is up"),
    ("Grace time", "30 sec", "30 sec"),
];

const PAGE_WIDTH: usize = 72;
const ACTIVITY_WIDTH: usize = 36;
const ROLE_WIDTH: usize = 20;

/// One printed agenda row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintRow {
    Section {
        label: String,
    },
    Activity {
        time: String,
        activity: String,
        role: String,
        duration: String,
    },
}

/// Print view model of one agenda state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPage {
    pub meeting_number: String,
    pub theme: String,
    pub introduction: String,
    pub rows: Vec<PrintRow>,
    /// `Monday, January 1`.
    pub date_line: String,
    pub start_time: String,
    pub location: String,
    pub location_en: String,
    pub word_of_the_day: String,
    pub logo_url: String,
    pub reminders: Vec<String>,
    /// `(role, name)` pairs in roster order.
    pub officers: Vec<(String, String)>,
}

impl PrintPage {
    /// Builds the page, deriving row times from the meeting start time.
    ///
    /// The first timed row prints the start time as typed; headers print
    /// no time.
    pub fn from_state(state: &AgendaState) -> Self {
        let info = &state.info;
        let rows = propagate(info.time.as_str(), state.agenda.items())
            .map(|scheduled| {
                let item = scheduled.item;
                if item.is_section_header {
                    return PrintRow::Section {
                        label: item.activity.clone(),
                    };
                }
                let time = if scheduled.is_clock_seed() {
                    info.time.trim().to_string()
                } else {
                    scheduled.display_time()
                };
                PrintRow::Activity {
                    time,
                    activity: item.activity.clone(),
                    role: item.role.clone(),
                    duration: item.duration.clone(),
                }
            })
            .collect();

        Self {
            meeting_number: info.meeting_number.clone(),
            theme: info.theme.clone(),
            introduction: info.introduction.clone(),
            rows,
            date_line: format!("{}, {} {}", info.day, info.month, info.date),
            start_time: info.time.clone(),
            location: info.location.clone(),
            location_en: info.location_en.clone(),
            word_of_the_day: info.word_of_the_day.clone(),
            logo_url: info.logo_url.clone(),
            reminders: state.reminders.clone(),
            officers: state
                .officers
                .iter()
                .map(|officer| (officer.role.clone(), officer.name.clone()))
                .collect(),
        }
    }
}

impl Display for PrintPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(PAGE_WIDTH);
        let thin_rule = "-".repeat(PAGE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{CLUB_NAME:<52}{:>20}", format!("Meeting #{}", self.meeting_number))?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Theme: {}", self.theme)?;
        for line in self.introduction.lines() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "{thin_rule}")?;
        writeln!(
            f,
            "{:<5}  {:<ACTIVITY_WIDTH$} {:>ROLE_WIDTH$} {:>6}",
            "Time", "Activity", "Role", "Dur."
        )?;
        writeln!(f, "{thin_rule}")?;
        for row in &self.rows {
            match row {
                PrintRow::Section { label } => {
                    writeln!(f, "{:^PAGE_WIDTH$}", format!("== {label} =="))?;
                }
                PrintRow::Activity {
                    time,
                    activity,
                    role,
                    duration,
                } => {
                    writeln!(
                        f,
                        "{time:<5}  {activity:<ACTIVITY_WIDTH$} {role:>ROLE_WIDTH$} {duration:>6}"
                    )?;
                }
            }
        }
        writeln!(f, "{thin_rule}")?;

        writeln!(f, "Time & Venue")?;
        writeln!(f, "  {} at {}", self.date_line, self.start_time)?;
        writeln!(f, "  {}", self.location)?;
        writeln!(f, "  {}", self.location_en)?;
        writeln!(f, "Word of the Day: {}", self.word_of_the_day)?;
        writeln!(f, "{thin_rule}")?;

        writeln!(f, "Time Rule")?;
        writeln!(f, "  {:<12} {:<14} {:<14}", "Type", "Short Speech", "Long Speech")?;
        for (signal, short, long) in TIME_RULES {
            writeln!(f, "  {signal:<12} {short:<14} {long:<14}")?;
        }
        writeln!(f, "{thin_rule}")?;

        writeln!(f, "Reminder")?;
        for (index, reminder) in self.reminders.iter().enumerate() {
            writeln!(f, "  {}. {reminder}", index + 1)?;
        }
        writeln!(f, "{thin_rule}")?;

        writeln!(f, "Club Officers")?;
        for (role, name) in &self.officers {
            writeln!(f, "  {role:<24} {name}")?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "Club Mission")?;
        writeln!(f, "{}", wrap(CLUB_MISSION, PAGE_WIDTH))?;
        write!(f, "{rule}")
    }
}

/// Renders the print page for `state`.
pub fn render_print(state: &AgendaState) -> String {
    PrintPage::from_state(state).to_string()
}

/// Writes the print rendering of `state` to `path`.
///
/// # Errors
/// - Returns `ExportError::Io` when the file cannot be written.
pub fn export_print(state: &AgendaState, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let rendered = render_print(state);
    std::fs::write(path, rendered.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=export_print module=export status=ok bytes={}",
        rendered.len()
    );
    Ok(())
}

fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let wrapped = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(wrapped, "aaa bbb\nccc ddd");
        assert!(wrapped.lines().all(|line| line.chars().count() <= 7));
    }
}
