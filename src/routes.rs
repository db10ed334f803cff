use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{AppState, error::AppResult, models::{RouteInfo, TitleFilter}, query};

const ROUTES: &[RouteInfo] = &[
    RouteInfo { path: "/", methods: &["GET"] },
    RouteInfo { path: "/titles", methods: &["GET"] },
    RouteInfo { path: "/titles/{title_id}", methods: &["GET"] },
    RouteInfo { path: "/titles/year/{year}", methods: &["GET"] },
];

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/titles", get(list_titles))
        .route("/titles/{title_id}", get(title_by_id))
        .route("/titles/year/{year}", get(titles_by_year))
        .with_state(state)
}

pub async fn index() -> Json<&'static [RouteInfo]> {
    Json(ROUTES)
}

pub async fn list_titles(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TitleFilter>,
) -> AppResult<Response> {
    let titles = state.store.search(query::condition_for(&filter)).await?;

    if titles.is_empty() {
        return Ok((StatusCode::NOT_FOUND, "no titles were found").into_response());
    }
    Ok(Json(titles).into_response())
}

pub async fn title_by_id(
    State(state): State<Arc<AppState>>,
    Path(title_id): Path<String>,
) -> AppResult<Response> {
    // A path parameter that is not a well-formed key is a miss, not a fault.
    let found = match title_id.parse::<i32>() {
        Ok(id) => state.store.by_id(id).await?,
        Err(_) => None,
    };

    match found {
        Some(title) => Ok(Json(title).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "no title found by id").into_response()),
    }
}

pub async fn titles_by_year(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> AppResult<Response> {
    let titles = match year.parse::<i32>() {
        Ok(year) => state.store.by_year(year).await?,
        Err(_) => Vec::new(),
    };

    if titles.is_empty() {
        return Ok((StatusCode::NOT_FOUND, "no title found by that year").into_response());
    }
    Ok(Json(titles).into_response())
}
