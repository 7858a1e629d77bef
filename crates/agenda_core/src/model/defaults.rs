//! Hard-coded first-launch data.
//!
//! Used when the store holds nothing for the active namespace, when a stored
//! blob cannot be decoded, and after a confirmed reset.

use crate::model::agenda::AgendaItem;
use crate::model::meeting::{DayOfWeek, MeetingInfo, Month};
use crate::model::officer::Officer;

/// Start time used when the meeting time text is missing or malformed.
pub const DEFAULT_START_TIME: &str = "02:30";

pub fn default_meeting_info() -> MeetingInfo {
    MeetingInfo {
        meeting_number: "258".to_string(),
        theme: "Step Out of Comfort Zone".to_string(),
        introduction: "Great things never came from comfort zones. Let us explore our potential \
                       together in this wonderful meeting session."
            .to_string(),
        day: DayOfWeek::Monday.label().to_string(),
        month: Month::January.label().to_string(),
        date: "1".to_string(),
        time: DEFAULT_START_TIME.to_string(),
        location: "汕头市龙湖区梅溪西路2号知书空间".to_string(),
        location_en: "Zhishu Space, Meixi West Road No. 2".to_string(),
        word_of_the_day: "RESILIENCE".to_string(),
        logo_url: String::new(),
    }
}

pub fn default_agenda() -> Vec<AgendaItem> {
    vec![
        AgendaItem::activity("Reception", "Reception Team", "15m"),
        AgendaItem::activity("Meeting Preparation", "Meeting Manager", "15m"),
        AgendaItem::activity("Opening Remark", "President", "3m"),
        AgendaItem::activity("Timer Introduction", "", "2m"),
        AgendaItem::activity("Grammarian Introduction", "", "2m"),
        AgendaItem::activity("General Evaluator Introduction", "", "2m"),
        AgendaItem::activity("Guest Introduction & Icebreak", "", "15m"),
        AgendaItem::section("PREPARED SPEECH"),
        AgendaItem::activity("Project Speech #1", "Speaker 1", "7m"),
        AgendaItem::activity("Project Speech #2", "Speaker 2", "7m"),
        AgendaItem::activity("Evaluation Speech", "", "3m"),
        AgendaItem::activity("Evaluation Speech", "", "3m"),
        AgendaItem::activity("Group Photo", "", "10m"),
        AgendaItem::section("BREAK TIME 10 MIN").with_duration("10m"),
        AgendaItem::activity("Table Topic Speeches", "TT Master", "30m"),
        AgendaItem::activity("Table Topic Evaluation", "", "6m"),
        AgendaItem::activity("Timer Report", "", "3m"),
        AgendaItem::activity("Grammarian Report", "", "3m"),
        AgendaItem::activity("General Evaluator Report", "", "10m"),
        AgendaItem::section("CONCLUSION"),
        AgendaItem::activity("Voting for Best Facilitator", "", "1.5m"),
        AgendaItem::activity("Moment of Truth", "", "5m"),
        AgendaItem::activity("Awards", "", "2m"),
        AgendaItem::activity("Closing Remark", "President", "2m"),
    ]
}

pub fn default_officers() -> Vec<Officer> {
    vec![
        Officer::new("President", "Christina Chen"),
        Officer::new("VP Education", "Ellie Ding"),
        Officer::new("VP Membership", "Namen Zhou"),
        Officer::new("VP Public Relations", "Alexandra Huang"),
        Officer::new("Secretary", "Melody Mei"),
        Officer::new("Treasurer", "Harriet Zeng"),
        Officer::new("Sergeant at Arms", "Jason Chen"),
    ]
}

pub fn default_reminders() -> Vec<String> {
    [
        "Please turn off your mobile phone or turn it into silent mode!",
        "Do not talk about topics of Politics, Religion or Sex!",
        "Do not walk around when speakers present their speeches!",
        "Remember to bring your manuals and get project credits!",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
