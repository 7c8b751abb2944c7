use crate::calendar::{change_month, month_grid};
use crate::completion::CompletionStore;
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CalendarResponse, DayQuery, DayResponse, PlanEntry, ProgressResponse,
    ToggleRequest, TrackReading,
};
use crate::plan::{ReadingPlan, TRACK_COUNT};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Local, NaiveDate};

const SERVICE_WORKER_JS: &str = include_str!("../assets/service-worker.js");

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = day_view(&state, today()).await;
    Html(render_index(&view))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<DayResponse>, AppError> {
    Ok(Json(day_view(&state, today()).await))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayResponse>, AppError> {
    let day = parse_day(&query.date)?;
    Ok(Json(day_view(&state, day).await))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let day = parse_day(&payload.date)?;
    check_track(payload.track)?;

    {
        let mut store = state.completions.lock().await;
        store.toggle(day, payload.track);
    }

    Ok(Json(day_view(&state, day).await))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let store = state.completions.lock().await;
    Ok(Json(progress_of(&store, &state.plan)))
}

pub async fn get_calendar(
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let cursor = change_month(parse_day(&query.cursor)?, query.shift);
    Ok(Json(CalendarResponse {
        cursor: cursor.to_string(),
        today: today().to_string(),
        grid: month_grid(cursor),
    }))
}

pub async fn plan_document(State(state): State<AppState>) -> Json<Vec<PlanEntry>> {
    Json(state.plan.entries().to_vec())
}

pub async fn service_worker() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], SERVICE_WORKER_JS)
}

async fn day_view(state: &AppState, day: NaiveDate) -> DayResponse {
    let labels = state.plan.reading_for(day);
    let store = state.completions.lock().await;
    let readings = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let track = i as u8 + 1;
            TrackReading {
                track,
                label,
                completed: store.is_completed(day, track),
            }
        })
        .collect();

    DayResponse {
        date: day.to_string(),
        readings,
        progress: progress_of(&store, &state.plan),
    }
}

fn progress_of(store: &CompletionStore, plan: &ReadingPlan) -> ProgressResponse {
    ProgressResponse {
        completed: store.completed_count(),
        total: plan.total_units(),
        percent: store.progress(plan.len()),
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn check_track(track: u8) -> Result<(), AppError> {
    if (1..=TRACK_COUNT).contains(&track) {
        Ok(())
    } else {
        Err(AppError::bad_request("track must be 1-4"))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
