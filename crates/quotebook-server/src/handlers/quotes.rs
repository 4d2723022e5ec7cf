//! Quote handlers

use super::ApiError;
use crate::app::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use quotebook_core::{Quote, QuoteId};
use serde::{Deserialize, Serialize};

/// Missing fields decode as empty strings so the service reports them as
/// invalid input rather than failing at the extractor.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    author: String,
    #[serde(default)]
    quote: String,
}

#[derive(Debug, Serialize)]
pub struct CreateQuoteResponse {
    id: QuoteId,
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateQuoteResponse>), ApiError> {
    let Json(req_body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let id = state
        .quotes
        .create(&req_body.author, &req_body.quote)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateQuoteResponse { id })))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    author: Option<String>,
}

/// `GET /quotes`, or `GET /quotes?author=X` to filter by exact author.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = match query.author {
        Some(author) => state.quotes.filter_by_author(&author).await?,
        None => state.quotes.get_all().await?,
    };

    Ok(Json(quotes))
}

pub async fn random(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.quotes.get_random().await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<QuoteId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;

    state.quotes.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
