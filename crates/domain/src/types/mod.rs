//! Domain types and models

pub mod calendar;
pub mod meeting;
pub mod slot;

pub use calendar::{CalendarCell, CalendarDay, DayKind, MonthView};
pub use meeting::{date_key, Meeting, MeetingId, MeetingPhase, NewMeeting, SchedulerFormState};
pub use slot::{SlotView, TimeSlot};
