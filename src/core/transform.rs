//! Pure transforms over the event collection. No I/O, no store access.

use crate::core::ids::IdProvider;
use crate::models::event::{Event, EventDraft};
use crate::utils::date::derive_display_date;

/// Return a new vector ordered by ascending date.
///
/// Never mutates the input. The sort is stable: events sharing a date keep
/// their prior relative order, so repeated sorting is idempotent.
pub fn sort_by_date(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Build an event from a draft.
///
/// With `editing` unset a fresh id is minted; with `editing = Some(idx)` the
/// id of `existing[idx]` is preserved. The caller guarantees the index is in
/// range; an out-of-range index is a contract violation and panics.
pub fn build_event(
    draft: &EventDraft,
    editing: Option<usize>,
    existing: &[Event],
    ids: &mut dyn IdProvider,
) -> Event {
    let id = match editing {
        Some(idx) => existing[idx].id,
        None => ids.next_id(),
    };

    Event {
        id,
        description: draft.description.clone(),
        score: draft.score,
        date: draft.date,
        month_only: draft.month_only,
        display_date: derive_display_date(&draft.date, draft.month_only),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::SequentialIds;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(id: i64, date_str: &str, description: &str) -> Event {
        Event {
            id,
            description: description.to_string(),
            score: 0,
            date: date(date_str),
            month_only: false,
            display_date: date_str.to_string(),
        }
    }

    #[test]
    fn sort_orders_by_date_without_mutating_input() {
        let events = vec![event(1, "2024-02-01", "b"), event(2, "2024-01-01", "a")];

        let sorted = sort_by_date(&events);

        assert_eq!(sorted[0].date, date("2024-01-01"));
        assert_eq!(sorted[1].date, date("2024-02-01"));
        // input untouched
        assert_eq!(events[0].date, date("2024-02-01"));
        assert_eq!(events[1].date, date("2024-01-01"));
    }

    #[test]
    fn sort_is_idempotent_and_stable_on_ties() {
        let events = vec![
            event(1, "2024-05-01", "first"),
            event(2, "2024-05-01", "second"),
            event(3, "2024-04-01", "earlier"),
        ];

        let once = sort_by_date(&events);
        let twice = sort_by_date(&once);

        assert_eq!(once[0].id, 3);
        assert_eq!(once[1].id, 1);
        assert_eq!(once[2].id, 2);
        let ids: Vec<i64> = twice.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn create_mints_fresh_id_and_derives_display_date() {
        let draft = EventDraft {
            description: "A".to_string(),
            score: 0,
            date: date("2024-01-15"),
            month_only: true,
        };
        let mut ids = SequentialIds::starting_at(1);

        let ev = build_event(&draft, None, &[], &mut ids);

        assert_eq!(ev.id, 1);
        assert_eq!(ev.display_date, "2024-01");
    }

    #[test]
    fn create_with_day_granularity_keeps_full_display_date() {
        let draft = EventDraft {
            description: "A".to_string(),
            score: 0,
            date: date("2024-01-15"),
            month_only: false,
        };
        let mut ids = SequentialIds::starting_at(1);

        let ev = build_event(&draft, None, &[], &mut ids);

        assert_eq!(ev.display_date, "2024-01-15");
    }

    #[test]
    fn edit_preserves_existing_id() {
        let existing = vec![event(123, "2024-01-01", "Old")];
        let draft = EventDraft {
            description: "New".to_string(),
            score: 5,
            date: date("2024-02-01"),
            month_only: false,
        };
        let mut ids = SequentialIds::starting_at(999);

        let ev = build_event(&draft, Some(0), &existing, &mut ids);

        assert_eq!(ev.id, 123);
        assert_eq!(ev.description, "New");
        assert_eq!(ev.score, 5);
    }

    #[test]
    #[should_panic]
    fn edit_with_out_of_range_index_panics() {
        let draft = EventDraft {
            description: "X".to_string(),
            score: 0,
            date: date("2024-01-01"),
            month_only: false,
        };
        let mut ids = SequentialIds::starting_at(1);
        build_event(&draft, Some(3), &[], &mut ids);
    }
}
