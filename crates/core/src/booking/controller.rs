//! Booking form validation and submission

use aura_domain::{Meeting, NewMeeting, SchedulerFormState, SchedulingError, TimeSlot};
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::participants::parse_participants;
use crate::ledger::MeetingLedger;
use crate::scheduling::resolve;

/// Turns a [`SchedulerFormState`] into a ledger entry.
#[derive(Debug, Clone)]
pub struct BookingController {
    all_slots: Vec<TimeSlot>,
}

impl BookingController {
    /// `all_slots` is the full daily sequence the availability rules start from
    pub fn new(all_slots: Vec<TimeSlot>) -> Self {
        Self { all_slots }
    }

    pub fn all_slots(&self) -> &[TimeSlot] {
        &self.all_slots
    }

    /// Check the draft without touching the ledger.
    ///
    /// Checks run in order and stop at the first failure: title, time,
    /// participants, then slot availability on the draft's date.
    pub fn validate(
        &self,
        form: &SchedulerFormState,
        ledger: &MeetingLedger,
    ) -> Result<NewMeeting, SchedulingError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(SchedulingError::EmptyTitle);
        }

        let time = form.time.ok_or(SchedulingError::NoTimeSelected)?;
        let participants = parse_participants(&form.participants)?;

        let date = form.date;
        let booked = ledger.booked_slots(date)?;
        let availability = resolve(date, &self.all_slots, &booked);
        if !availability.is_candidate(time) {
            return Err(SchedulingError::SlotUnavailable { date, time });
        }
        if !availability.is_bookable(time) {
            return Err(SchedulingError::SlotConflict { date, time });
        }

        Ok(NewMeeting { title: title.to_string(), date, time, participants })
    }

    /// Validate and book the draft. Only a successful booking clears the
    /// selected time; on error the draft is left untouched.
    pub fn submit(
        &self,
        form: &mut SchedulerFormState,
        ledger: &MeetingLedger,
    ) -> Result<Meeting, SchedulingError> {
        let outcome = self.validate(form, ledger).and_then(|record| ledger.insert(record));

        match outcome {
            Ok(meeting) => {
                form.clear_time();
                Ok(meeting)
            }
            Err(err) => {
                if err.is_user_correctable() {
                    debug!(kind = err.kind(), error = %err, "booking rejected");
                } else {
                    warn!(kind = err.kind(), error = %err, "booking failed");
                }
                Err(err)
            }
        }
    }

    /// Point the draft at the day picked on the calendar
    pub fn select_day(&self, form: &mut SchedulerFormState, date: NaiveDate) {
        form.date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::generate_slots;

    fn controller() -> BookingController {
        BookingController::new(generate_slots(9, 17).unwrap())
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    fn draft() -> SchedulerFormState {
        SchedulerFormState::new(monday())
            .with_title("  Standup  ")
            .with_time(slot("09:00"))
            .with_participants("alice@company.com, bob@company.com")
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let ledger = MeetingLedger::in_memory();

        let record = controller().validate(&draft(), &ledger).unwrap();

        assert_eq!(record.title, "Standup");
        assert_eq!(record.participants, ["alice@company.com", "bob@company.com"]);
        assert!(ledger.all().unwrap().is_empty());
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        let ledger = MeetingLedger::in_memory();
        let c = controller();

        let mut form = draft().with_title("   ").with_participants("bob");
        form.time = None;
        assert_eq!(c.validate(&form, &ledger).unwrap_err(), SchedulingError::EmptyTitle);

        form.title = "Standup".into();
        assert_eq!(c.validate(&form, &ledger).unwrap_err(), SchedulingError::NoTimeSelected);

        form.time = Some(slot("08:00"));
        assert_eq!(c.validate(&form, &ledger).unwrap_err().kind(), "InvalidEmails");

        form.participants.clear();
        assert_eq!(c.validate(&form, &ledger).unwrap_err().kind(), "SlotUnavailable");
    }

    #[test]
    fn test_off_grid_weekend_slot_is_unavailable() {
        let ledger = MeetingLedger::in_memory();
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let mut form = draft();
        form.date = saturday;
        form.time = Some(slot("09:30"));

        let err = controller().validate(&form, &ledger).unwrap_err();

        assert_eq!(err, SchedulingError::SlotUnavailable { date: saturday, time: slot("09:30") });
    }

    #[test]
    fn test_submit_clears_only_time() {
        let ledger = MeetingLedger::in_memory();
        let mut form = draft();

        let meeting = controller().submit(&mut form, &ledger).unwrap();

        assert_eq!(meeting.title, "Standup");
        assert_eq!(form.time, None);
        assert_eq!(form.title, "  Standup  ");
        assert_eq!(form.date, monday());
        assert_eq!(form.participants, "alice@company.com, bob@company.com");
    }

    #[test]
    fn test_failed_submit_leaves_draft_untouched() {
        let ledger = MeetingLedger::in_memory();
        let c = controller();
        c.submit(&mut draft(), &ledger).unwrap();

        let mut second = draft().with_title("Other");
        let err = c.submit(&mut second, &ledger).unwrap_err();

        assert_eq!(err, SchedulingError::SlotConflict { date: monday(), time: slot("09:00") });
        assert_eq!(second.time, Some(slot("09:00")));
        assert_eq!(ledger.all().unwrap().len(), 1);
    }

    #[test]
    fn test_select_day_moves_draft() {
        let mut form = draft();
        let next = monday().succ_opt().unwrap();

        controller().select_day(&mut form, next);

        assert_eq!(form.date, next);
        assert_eq!(form.time, Some(slot("09:00")));
    }
}
