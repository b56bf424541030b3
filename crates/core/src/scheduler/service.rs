//! Scheduler service - composes the calendar, availability, ledger and booking

use std::sync::Arc;

use aura_domain::constants::WEEKDAY_LABELS;
use aura_domain::{
    CalendarDay, Meeting, MeetingId, MonthView, Result, SchedulerConfig, SchedulerFormState,
    SchedulingError, TimeSlot,
};
use chrono::NaiveDate;
use tracing::debug;

use crate::booking::BookingController;
use crate::calendar::MonthCursor;
use crate::clock_ports::Clock;
use crate::dashboard::Dashboard;
use crate::ledger::{IdGenerator, MeetingLedger, MeetingStore};
use crate::scheduling::{generate_slots, resolve, Availability};

/// One scheduling session: a ledger plus the rules that guard it.
pub struct SchedulerService {
    ledger: MeetingLedger,
    booking: BookingController,
    clock: Arc<dyn Clock>,
}

impl SchedulerService {
    /// Build a service for the configured working window.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidRange`] if the window cannot produce slots.
    pub fn new(
        config: &SchedulerConfig,
        store: Arc<dyn MeetingStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> std::result::Result<Self, SchedulingError> {
        let all_slots = generate_slots(config.start_hour, config.end_hour)?;
        debug!(
            start_hour = config.start_hour,
            end_hour = config.end_hour,
            slots = all_slots.len(),
            "scheduler configured"
        );

        Ok(Self {
            ledger: MeetingLedger::new(store, ids),
            booking: BookingController::new(all_slots),
            clock,
        })
    }

    pub fn ledger(&self) -> &MeetingLedger {
        &self.ledger
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Full daily slot sequence before weekend thinning
    pub fn all_slots(&self) -> &[TimeSlot] {
        self.booking.all_slots()
    }

    pub fn current_month(&self) -> MonthCursor {
        MonthCursor::containing(self.clock.today())
    }

    /// Month grid with meeting counts and today/selected markers.
    ///
    /// `selected` defaults to today.
    pub fn month_view(&self, cursor: MonthCursor, selected: Option<NaiveDate>) -> Result<MonthView> {
        let today = self.clock.today();
        let selected = selected.unwrap_or(today);
        let grid = cursor.grid();

        let counts = match (grid.first(), grid.last()) {
            (Some(first), Some(last)) => self.ledger.counts_by_date(first.date, last.date)?,
            _ => Default::default(),
        };

        let days = grid
            .into_iter()
            .map(|cell| CalendarDay {
                cell,
                meeting_count: counts.get(&cell.date).copied().unwrap_or(0),
                is_today: cell.date == today,
                is_selected: cell.date == selected,
            })
            .collect();

        Ok(MonthView {
            month: cursor.first_day(),
            label: cursor.label(),
            weekdays: WEEKDAY_LABELS.iter().map(|d| (*d).to_string()).collect(),
            days,
        })
    }

    /// Candidate and bookable slots for `date`
    pub fn availability(&self, date: NaiveDate) -> Result<Availability> {
        let booked = self.ledger.booked_slots(date)?;
        Ok(resolve(date, self.all_slots(), &booked))
    }

    /// Empty draft for today
    pub fn new_form(&self) -> SchedulerFormState {
        SchedulerFormState::new(self.clock.today())
    }

    pub fn select_day(&self, form: &mut SchedulerFormState, date: NaiveDate) {
        self.booking.select_day(form, date);
    }

    pub fn validate(
        &self,
        form: &SchedulerFormState,
    ) -> std::result::Result<aura_domain::NewMeeting, SchedulingError> {
        self.booking.validate(form, &self.ledger)
    }

    /// Book the draft. On success the draft's time is cleared.
    pub fn book(
        &self,
        form: &mut SchedulerFormState,
    ) -> std::result::Result<Meeting, SchedulingError> {
        self.booking.submit(form, &self.ledger)
    }

    /// Delete a meeting; unknown ids are ignored
    pub fn cancel(&self, id: &MeetingId) -> Result<bool> {
        self.ledger.remove(id)
    }

    pub fn meetings_on(&self, date: NaiveDate) -> Result<Vec<Meeting>> {
        self.ledger.query_by_date(date)
    }

    pub fn meetings(&self) -> Result<Vec<Meeting>> {
        self.ledger.all()
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        Dashboard::capture(&self.ledger, self.clock.as_ref())
    }
}

impl std::fmt::Debug for SchedulerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerService")
            .field("all_slots", &self.all_slots().len())
            .finish_non_exhaustive()
    }
}
