use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::{self, Category, ClipSource, EpisodePolicy, ResolvedClip, Show},
    state::AppState,
};

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(models::categories(state.catalog.origin()))
}

#[derive(Deserialize)]
pub struct ModeQuery {
    pub mode: Option<EpisodePolicy>,
}

/// GET /api/categories/{slug}/shows?mode=listing|display
///
/// Fetches the category page and every show on it. Shows whose page could
/// not be resolved are left out; a failure of the category page itself is
/// an error.
pub async fn category_shows(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<ModeQuery>, QueryRejection>,
) -> Result<Json<Vec<Show>>> {
    let Query(params) = params?;
    let category =
        models::find_category(state.catalog.origin(), &slug).ok_or(AppError::NotFound)?;
    let policy = params.mode.unwrap_or(EpisodePolicy::Listing);

    let shows = state.catalog.category_shows(&category, policy).await?;
    Ok(Json(shows))
}

#[derive(Deserialize)]
pub struct ShowQuery {
    pub link: String,
    pub mode: Option<EpisodePolicy>,
}

/// GET /api/shows?link=...&mode=listing|display
pub async fn get_show(
    State(state): State<AppState>,
    params: Result<Query<ShowQuery>, QueryRejection>,
) -> Result<Json<Show>> {
    let Query(params) = params?;
    ensure_on_site(&state, &params.link)?;
    let policy = params.mode.unwrap_or(EpisodePolicy::Display);

    let show = state.catalog.show(&params.link).await?;
    Ok(Json(policy.apply(show)))
}

#[derive(Deserialize)]
pub struct ClipQuery {
    pub link: String,
}

/// GET /api/clips?link=...
pub async fn get_clip(
    State(state): State<AppState>,
    params: Result<Query<ClipQuery>, QueryRejection>,
) -> Result<Json<ClipSource>> {
    let Query(params) = params?;
    ensure_on_site(&state, &params.link)?;

    let clip = state.catalog.clip(&params.link).await?;
    tracing::info!("Resolved clip for {}: {clip}", params.link);
    Ok(Json(clip.into()))
}

/// GET /api/shows/clips?link=...
///
/// Clip URLs for every available episode of a show, e.g. to queue them on a
/// cast receiver. Episodes whose clip cannot be found are omitted.
pub async fn show_clips(
    State(state): State<AppState>,
    params: Result<Query<ClipQuery>, QueryRejection>,
) -> Result<Json<Vec<ResolvedClip>>> {
    let Query(params) = params?;
    ensure_on_site(&state, &params.link)?;

    let show = EpisodePolicy::Listing.apply(state.catalog.show(&params.link).await?);
    let links: Vec<String> = show.episodes.into_iter().map(|e| e.link).collect();
    Ok(Json(state.catalog.resolve_clips(&links).await))
}

/// Only pages on the configured site may be fetched on a client's behalf.
fn ensure_on_site(state: &AppState, link: &str) -> Result<()> {
    let prefix = format!("{}/", state.catalog.origin());
    if link.starts_with(&prefix) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "link must point to {}",
            state.catalog.origin()
        )))
    }
}
