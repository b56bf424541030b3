//! Month grid and per-day slot handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use aura_core::MonthCursor;
use aura_domain::{DayKind, MonthView, SlotView, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blocking, parse_date};
use crate::context::AppContext;
use crate::errors::ApiError;

/// `GET /api/calendar` parameters
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    /// `YYYY-MM`; defaults to the current month
    pub month: Option<String>,
    /// `YYYY-MM-DD`; defaults to today
    pub selected: Option<String>,
}

/// `GET /api/slots` parameters
#[derive(Debug, Default, Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

/// Slots offered on one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub day_kind: DayKind,
    pub slots: Vec<SlotView>,
    pub bookable: Vec<TimeSlot>,
}

pub async fn month_view(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<MonthView>, ApiError> {
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("calendar::month_view", move || {
        let cursor = match query.month.as_deref() {
            Some(raw) => MonthCursor::parse(raw)?,
            None => scheduler.current_month(),
        };
        let selected = query.selected.as_deref().map(parse_date).transpose()?;

        Ok(scheduler.month_view(cursor, selected)?)
    })
    .await
    .map(Json)
}

pub async fn slots(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("calendar::slots", move || {
        let date = match query.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => scheduler.clock().today(),
        };
        let availability = scheduler.availability(date)?;

        Ok(SlotsResponse {
            date,
            day_kind: availability.day_kind(),
            slots: availability.slot_views(),
            bookable: availability.bookable,
        })
    })
    .await
    .map(Json)
}
