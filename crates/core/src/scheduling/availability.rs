//! Bookable slot resolution for a single date
//!
//! Weekend days only offer every other slot of the full sequence. Slots that
//! already hold a meeting on the date are removed from the bookable set but
//! stay in the candidate set so the UI can render them disabled.

use std::collections::BTreeSet;

use aura_domain::{DayKind, SlotView, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slots structurally offered on `date`, before bookings are subtracted.
///
/// Weekends keep the even-indexed elements of `all_slots`; the index is into
/// the full sequence, so the result is only hourly when the window starts on
/// the hour.
pub fn candidate_slots(date: NaiveDate, all_slots: &[TimeSlot]) -> Vec<TimeSlot> {
    match DayKind::of(date) {
        DayKind::Weekday => all_slots.to_vec(),
        DayKind::Weekend => all_slots.iter().step_by(2).copied().collect(),
    }
}

/// Derive the candidate and bookable sets for `date`.
pub fn resolve<'a>(
    date: NaiveDate,
    all_slots: &[TimeSlot],
    booked: impl IntoIterator<Item = &'a TimeSlot>,
) -> Availability {
    let booked: BTreeSet<TimeSlot> = booked.into_iter().copied().collect();
    let candidates = candidate_slots(date, all_slots);
    let bookable = candidates.iter().filter(|slot| !booked.contains(slot)).copied().collect();

    Availability { date, candidates, bookable }
}

/// Result of resolving one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    /// Everything offered on the date, booked or not
    pub candidates: Vec<TimeSlot>,
    /// Candidates without an existing booking
    pub bookable: Vec<TimeSlot>,
}

impl Availability {
    pub fn day_kind(&self) -> DayKind {
        DayKind::of(self.date)
    }

    pub fn is_candidate(&self, slot: TimeSlot) -> bool {
        self.candidates.contains(&slot)
    }

    pub fn is_bookable(&self, slot: TimeSlot) -> bool {
        self.bookable.contains(&slot)
    }

    /// Candidates paired with their booked flag, in display order.
    pub fn slot_views(&self) -> Vec<SlotView> {
        self.candidates
            .iter()
            .map(|&time| SlotView { time, booked: !self.bookable.contains(&time) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::generate_slots;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    #[test]
    fn test_weekday_gets_full_sequence() {
        let all = generate_slots(9, 17).unwrap();

        assert_eq!(candidate_slots(date(2025, 3, 12), &all), all);
    }

    #[test]
    fn test_saturday_gets_even_indexed_slots() {
        let all = generate_slots(9, 17).unwrap();
        let expected: Vec<TimeSlot> =
            all.iter().enumerate().filter(|(i, _)| i % 2 == 0).map(|(_, s)| *s).collect();

        let candidates = candidate_slots(date(2025, 3, 8), &all);

        assert_eq!(candidates, expected);
        assert_eq!(candidates.len(), 9);
        assert!(candidates.iter().all(|s| s.minute() == 0));
    }

    #[test]
    fn test_weekend_subsampling_follows_index_not_clock() {
        // Window built from a half-past boundary: even indexes land on :30
        let all = vec![slot("09:30"), slot("10:00"), slot("10:30"), slot("11:00")];

        let candidates = candidate_slots(date(2025, 3, 9), &all);

        assert_eq!(candidates, vec![slot("09:30"), slot("10:30")]);
    }

    #[test]
    fn test_booked_slots_are_subtracted_but_still_displayed() {
        let all = generate_slots(9, 17).unwrap();
        let booked = [slot("09:00"), slot("13:30")];

        let availability = resolve(date(2025, 3, 10), &all, &booked);

        assert_eq!(availability.candidates.len(), 17);
        assert_eq!(availability.bookable.len(), 15);
        assert!(!availability.is_bookable(slot("09:00")));
        assert!(availability.is_bookable(slot("09:30")));
        assert!(availability.is_candidate(slot("09:00")));

        let views = availability.slot_views();
        assert_eq!(views.len(), 17);
        assert_eq!(views[0], SlotView { time: slot("09:00"), booked: true });
        assert_eq!(views[1], SlotView { time: slot("09:30"), booked: false });
    }

    #[test]
    fn test_booking_outside_candidates_does_not_shrink_weekend_set() {
        let all = generate_slots(9, 17).unwrap();

        let availability = resolve(date(2025, 3, 8), &all, &[slot("09:30")]);

        assert_eq!(availability.bookable, availability.candidates);
        assert_eq!(availability.day_kind(), DayKind::Weekend);
    }
}
