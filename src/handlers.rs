use crate::calendar::ColorBand;
use crate::errors::AppError;
use crate::models::{DayCountResponse, IndexQuery, MonthSummary, YearReview};
use crate::state::AppState;
use crate::stats::{build_review, drinks_on, month_summaries};
use crate::ui::{render_index, WrappedPage};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let wrapped = match query.wrapped {
        Some(number) => Some(WrappedPage::from_number(number).ok_or_else(|| {
            AppError::bad_request(format!(
                "wrapped page must be between 1 and {}",
                WrappedPage::ALL.len()
            ))
        })?),
        None => None,
    };

    debug!(?wrapped, "rendering calendar");
    let review = build_review(&state.data);
    Ok(Html(render_index(&state.data, &review, wrapped)))
}

pub async fn get_review(State(state): State<AppState>) -> Json<YearReview> {
    Json(build_review(&state.data))
}

pub async fn get_months(State(state): State<AppState>) -> Json<Vec<MonthSummary>> {
    Json(month_summaries(&state.data.months))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayCountResponse>, AppError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
    let drinks = drinks_on(&state.data.months, date);
    debug!(%date, drinks, "day lookup");

    Ok(Json(DayCountResponse {
        date: date.to_string(),
        drinks,
        color: ColorBand::for_drinks(drinks).hex().to_string(),
    }))
}
