//! Lazy start-time walk over the agenda.

use crate::model::agenda::AgendaItem;
use crate::schedule::clock::ClockTime;
use crate::schedule::duration::parse_duration_minutes;
use std::iter::FusedIterator;
use std::slice::Iter;

/// One agenda row paired with its derived start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledItem<'a> {
    /// Position in the walked list.
    pub index: usize,
    pub item: &'a AgendaItem,
    /// Clock value before this row's own duration. `None` for headers.
    pub start: Option<ClockTime>,
}

impl ScheduledItem<'_> {
    /// Whether this row shows the editable meeting start time instead of a
    /// computed value.
    pub fn is_clock_seed(&self) -> bool {
        self.index == 0 && !self.item.is_section_header
    }

    /// Display text for the time cell. Headers display nothing.
    pub fn display_time(&self) -> String {
        self.start.map(|time| time.to_string()).unwrap_or_default()
    }
}

/// Iterator returned by [`propagate`].
#[derive(Debug, Clone)]
pub struct Propagation<'a> {
    items: std::iter::Enumerate<Iter<'a, AgendaItem>>,
    clock: ClockTime,
}

impl<'a> Iterator for Propagation<'a> {
    type Item = ScheduledItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        if item.is_section_header {
            return Some(ScheduledItem {
                index,
                item,
                start: None,
            });
        }

        let start = self.clock;
        if item.is_timed() {
            self.clock = self
                .clock
                .add_minutes(parse_duration_minutes(item.duration.as_str()));
        }
        Some(ScheduledItem {
            index,
            item,
            start: Some(start),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl ExactSizeIterator for Propagation<'_> {}

impl FusedIterator for Propagation<'_> {}

/// Derives every row's displayed start time from `start_time`.
///
/// A malformed `start_time` falls back to the default start time. Each timed
/// row shows the clock before its own duration is added.
pub fn propagate<'a>(start_time: &str, items: &'a [AgendaItem]) -> Propagation<'a> {
    Propagation {
        items: items.iter().enumerate(),
        clock: ClockTime::parse_or_default(start_time),
    }
}

/// Eager convenience over [`propagate`] returning display strings.
pub fn propagated_times(start_time: &str, items: &[AgendaItem]) -> Vec<Option<String>> {
    propagate(start_time, items)
        .map(|scheduled| scheduled.start.map(|time| time.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{propagate, propagated_times};
    use crate::model::agenda::AgendaItem;

    #[test]
    fn first_row_is_clock_seed_unless_header() {
        let items = vec![
            AgendaItem::activity("Reception", "", "15m"),
            AgendaItem::activity("Opening", "", "3m"),
        ];
        let rows = propagate("19:00", &items).collect::<Vec<_>>();
        assert!(rows[0].is_clock_seed());
        assert!(!rows[1].is_clock_seed());

        let headed = vec![AgendaItem::section("WELCOME")];
        let rows = propagate("19:00", &headed).collect::<Vec<_>>();
        assert!(!rows[0].is_clock_seed());
        assert_eq!(rows[0].display_time(), "");
    }

    #[test]
    fn walk_is_lazy_and_exact_sized() {
        let items = vec![
            AgendaItem::activity("A", "", "5m"),
            AgendaItem::activity("B", "", "5m"),
            AgendaItem::activity("C", "", "5m"),
        ];
        let mut walk = propagate("10:00", &items);
        assert_eq!(walk.len(), 3);
        let first = walk.next().and_then(|row| row.start);
        assert_eq!(first.map(|time| time.to_string()).as_deref(), Some("10:00"));
        assert_eq!(walk.len(), 2);
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(propagated_times("10:00", &[]).is_empty());
    }
}
