use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::debug;
use crate::books::dto::{ignored_fields, BookDraft};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::patch_book_cmd::{PatchBookCommand, PatchBookCommandRequest, PatchBookCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).patch(patch_book).delete(remove_book))
        .with_state(state)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase())
        .map(|value| value.starts_with("application/json") || value.contains("+json"))
        .unwrap_or(false)
}

// A missing body, or one not sent as JSON, reads as an empty object.
fn parse_draft(headers: &HeaderMap, body: &Bytes) -> Result<BookDraft, ServerError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        debug!(len = body.len(), "no JSON body, using empty draft");
        return Ok(BookDraft::default());
    }
    let json: Value = serde_json::from_slice(body).map_err(json_to_server_error)?;
    let ignored = ignored_fields(&json);
    if !ignored.is_empty() {
        debug!(?ignored, "ignoring non-string book fields");
    }
    serde_json::from_value(json).map_err(json_to_server_error)
}

pub async fn add_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req = AddBookCommandRequest::new(parse_draft(&headers, &body)?);
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    headers: HeaderMap,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req = UpdateBookCommandRequest::new(isbn.as_str(), parse_draft(&headers, &body)?);
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn patch_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    headers: HeaderMap,
    body: Bytes) -> Result<Json<PatchBookCommandResponse>, ServerError> {
    let req = PatchBookCommandRequest::new(isbn.as_str(), parse_draft(&headers, &body)?);
    let res = PatchBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
