use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use log::{debug, warn};
use serde::Deserialize;

use agenda_parser::{parse_schedule, Schedule};

use crate::cache::Cache;

pub struct AppState {
    pub cache: Cache<String, Schedule>,
    pub upstream: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:key", get(handle_schedule))
        .fallback(|| async { Redirect::permanent(env!("CARGO_PKG_REPOSITORY")) })
        .with_state(state)
}

#[derive(Deserialize)]
struct ScheduleQuery {
    #[serde(default)]
    json: bool,
}

async fn handle_schedule(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    let key = normalize_key(&key);

    let Some(schedule) = fetch_schedule(&state, key).await else {
        return (StatusCode::BAD_GATEWAY, "Failed to fetch upstream schedule").into_response();
    };

    if query.json {
        return Json(schedule.as_ref()).into_response();
    }

    (
        [("content-type", "text/calendar")],
        schedule.to_ics().to_string(),
    )
        .into_response()
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .trim_matches('/')
        .trim_end_matches(".ics")
        .to_string()
}

fn feed_url(upstream: &str, key: &str) -> String {
    format!("{upstream}/{key}.json")
}

// Feeds without an anchor date describe the week the request falls into.
fn default_anchor(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

async fn fetch_schedule(state: &AppState, key: String) -> Option<Arc<Schedule>> {
    if let Some(schedule) = state.cache.get(&key) {
        return Some(schedule);
    }

    let url = feed_url(&state.upstream, &key);
    debug!("Fetching {url}");

    let response = reqwest::get(&url).await.ok()?;

    if !response.status().is_success() {
        warn!("Upstream responded with status {} for {url}", response.status());
        return None;
    }

    let body = response.text().await.ok()?;

    let Some(mut schedule) = parse_schedule(&body, default_anchor(Utc::now().date_naive())) else {
        warn!("Upstream feed at {url} is not a valid schedule");
        return None;
    };

    if schedule.name.is_empty() {
        schedule.name = key.clone();
    }

    Some(state.cache.insert(key, schedule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_request_keys() {
        assert_eq!(normalize_key("team"), "team");
        assert_eq!(normalize_key("/team.ics"), "team");
        assert_eq!(normalize_key(" team/ "), "team");
    }

    #[test]
    fn builds_upstream_feed_urls() {
        assert_eq!(
            feed_url("https://feeds.example.com", "team"),
            "https://feeds.example.com/team.json"
        );
    }

    #[test]
    fn anchors_to_the_monday_of_the_week() {
        let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();

        assert_eq!(default_anchor(monday), monday);
        assert_eq!(default_anchor(wednesday), monday);
        assert_eq!(default_anchor(sunday), monday);
    }
}
