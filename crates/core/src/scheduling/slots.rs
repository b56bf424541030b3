//! Half-hour slot generation

use aura_domain::constants::{DEFAULT_END_HOUR, DEFAULT_START_HOUR, SLOT_MINUTES};
use aura_domain::{SchedulingError, TimeSlot};

/// Labels from `start:00` through `end:00` in half-hour steps.
///
/// No `:30` label is produced for the end hour. Fails with
/// [`SchedulingError::InvalidRange`] when `start > end` or when the end hour
/// cannot be expressed as a time of day.
pub fn generate_slots(start_hour: u32, end_hour: u32) -> Result<Vec<TimeSlot>, SchedulingError> {
    if start_hour > end_hour || end_hour > 23 {
        return Err(SchedulingError::InvalidRange { start: start_hour, end: end_hour });
    }

    let slots = (start_hour..=end_hour)
        .flat_map(|hour| {
            let half_past = (hour < end_hour).then(|| TimeSlot::from_hm(hour, SLOT_MINUTES));
            std::iter::once(TimeSlot::from_hm(hour, 0)).chain(half_past)
        })
        .flatten()
        .collect();

    Ok(slots)
}

/// The 09:00–17:00 window.
pub fn default_slots() -> Vec<TimeSlot> {
    // The constant window is always a valid range.
    generate_slots(DEFAULT_START_HOUR, DEFAULT_END_HOUR).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(slots: &[TimeSlot]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_default_window_has_seventeen_slots() {
        let slots = generate_slots(9, 17).unwrap();

        assert_eq!(slots.len(), 17);
        assert_eq!(slots.first().unwrap().to_string(), "09:00");
        assert_eq!(slots.last().unwrap().to_string(), "17:00");
        assert!(!labels(&slots).contains(&"17:30".to_string()));
        assert_eq!(slots, default_slots());
    }

    #[test]
    fn test_slots_step_by_thirty_minutes() {
        assert_eq!(labels(&generate_slots(9, 10).unwrap()), ["09:00", "09:30", "10:00"]);
        assert!(generate_slots(9, 17).unwrap().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_hour_window() {
        assert_eq!(labels(&generate_slots(12, 12).unwrap()), ["12:00"]);
    }

    #[test]
    fn test_full_day_window() {
        let slots = generate_slots(0, 23).unwrap();

        assert_eq!(slots.len(), 47);
        assert_eq!(slots.last().unwrap().to_string(), "23:00");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(generate_slots(17, 9), Err(SchedulingError::InvalidRange { start: 17, end: 9 }));
    }

    #[test]
    fn test_end_hour_past_midnight_is_rejected() {
        assert!(matches!(generate_slots(9, 24), Err(SchedulingError::InvalidRange { .. })));
    }
}
