//! Meeting booking, listing and cancellation handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use aura_domain::{Meeting, MeetingId, SchedulerFormState, SchedulingError, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blocking, parse_date};
use crate::context::AppContext;
use crate::errors::ApiError;

/// `GET /api/meetings` parameters
#[derive(Debug, Default, Deserialize)]
pub struct MeetingsQuery {
    pub date: Option<String>,
}

/// Booking form as submitted by the client
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub title: String,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// `HH:MM`; missing or empty means no time picked
    #[serde(default)]
    pub time: Option<String>,
    /// Comma-separated addresses
    #[serde(default)]
    pub participants: String,
}

/// Created meeting plus the draft to show next
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub meeting: Meeting,
    pub form: SchedulerFormState,
}

pub async fn list_meetings(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<MeetingsQuery>,
) -> Result<Json<Vec<Meeting>>, ApiError> {
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("meetings::list", move || match query.date.as_deref() {
        Some(raw) => Ok(scheduler.meetings_on(parse_date(raw)?)?),
        None => Ok(scheduler.meetings()?),
    })
    .await
    .map(Json)
}

pub async fn create_meeting(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("meetings::create", move || {
        let mut form = scheduler.new_form();
        if let Some(date) = request.date {
            scheduler.select_day(&mut form, date);
        }
        form.title = request.title;
        form.participants = request.participants;
        let time = match request.time.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<TimeSlot>().map(Some),
        };
        form.time = match time {
            Ok(time) => time,
            // Title errors outrank a malformed time.
            Err(_) if form.title.trim().is_empty() => {
                return Err(SchedulingError::EmptyTitle.into());
            }
            Err(e) => return Err(e.into()),
        };

        let meeting = scheduler.book(&mut form)?;
        Ok(BookingResponse { meeting, form })
    })
    .await
    .map(|response| (StatusCode::CREATED, Json(response)))
}

/// Unknown ids still answer 204.
pub async fn cancel_meeting(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("meetings::cancel", move || Ok(scheduler.cancel(&MeetingId::new(id))?))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
