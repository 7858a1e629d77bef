//! Meeting metadata model.
//!
//! # Responsibility
//! - Define the singleton meeting record shown in the agenda header.
//! - Provide day/month/date selection sources for front-ends.
//!
//! # Invariants
//! - Every field is a plain string; no cross-field constraints are enforced.
//! - `time` seeds the running clock but is stored verbatim, even when malformed.

use serde::{Deserialize, Serialize};

/// Singleton meeting metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInfo {
    pub meeting_number: String,
    pub theme: String,
    /// Multi-line free text. Sizing its control is a presentation concern.
    pub introduction: String,
    /// Day-of-week label, normally one of `DayOfWeek::label()`.
    pub day: String,
    /// Month label, normally one of `Month::label()`.
    pub month: String,
    /// Day-of-month label, normally one of `date_options()`.
    pub date: String,
    /// Meeting start time as typed by the user (`HH:MM`).
    pub time: String,
    pub location: String,
    pub location_en: String,
    pub word_of_the_day: String,
    /// Optional custom logo location. Empty means the built-in logo.
    #[serde(default)]
    pub logo_url: String,
}

/// Addressable field of `MeetingInfo` for single-field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingField {
    MeetingNumber,
    Theme,
    Introduction,
    Day,
    Month,
    Date,
    Time,
    Location,
    LocationEn,
    WordOfTheDay,
    LogoUrl,
}

impl MeetingField {
    const ALL: [MeetingField; 11] = [
        Self::MeetingNumber,
        Self::Theme,
        Self::Introduction,
        Self::Day,
        Self::Month,
        Self::Date,
        Self::Time,
        Self::Location,
        Self::LocationEn,
        Self::WordOfTheDay,
        Self::LogoUrl,
    ];

    /// Returns all editable fields in display order.
    pub fn all() -> &'static [MeetingField] {
        &Self::ALL
    }

    /// Stable snake_case name, matching the serialized field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::MeetingNumber => "meeting_number",
            Self::Theme => "theme",
            Self::Introduction => "introduction",
            Self::Day => "day",
            Self::Month => "month",
            Self::Date => "date",
            Self::Time => "time",
            Self::Location => "location",
            Self::LocationEn => "location_en",
            Self::WordOfTheDay => "word_of_the_day",
            Self::LogoUrl => "logo_url",
        }
    }

    /// Parses a field name. Accepts snake_case and kebab-case.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == normalized)
    }
}

impl MeetingInfo {
    /// Reads one field by name.
    pub fn field(&self, field: MeetingField) -> &str {
        match field {
            MeetingField::MeetingNumber => &self.meeting_number,
            MeetingField::Theme => &self.theme,
            MeetingField::Introduction => &self.introduction,
            MeetingField::Day => &self.day,
            MeetingField::Month => &self.month,
            MeetingField::Date => &self.date,
            MeetingField::Time => &self.time,
            MeetingField::Location => &self.location,
            MeetingField::LocationEn => &self.location_en,
            MeetingField::WordOfTheDay => &self.word_of_the_day,
            MeetingField::LogoUrl => &self.logo_url,
        }
    }

    /// Replaces one field. Returns `false` when the value is unchanged.
    pub fn set_field(&mut self, field: MeetingField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            MeetingField::MeetingNumber => &mut self.meeting_number,
            MeetingField::Theme => &mut self.theme,
            MeetingField::Introduction => &mut self.introduction,
            MeetingField::Day => &mut self.day,
            MeetingField::Month => &mut self.month,
            MeetingField::Date => &mut self.date,
            MeetingField::Time => &mut self.time,
            MeetingField::Location => &mut self.location,
            MeetingField::LocationEn => &mut self.location_en,
            MeetingField::WordOfTheDay => &mut self.word_of_the_day,
            MeetingField::LogoUrl => &mut self.logo_url,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

/// Day-of-week selection source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn all() -> &'static [DayOfWeek] {
        &Self::ALL
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Month selection source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub fn all() -> &'static [Month] {
        &Self::ALL
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

/// Day-of-month selection source: `"1"` through `"31"`.
pub fn date_options() -> Vec<String> {
    (1..=31).map(|day: u8| day.to_string()).collect()
}
