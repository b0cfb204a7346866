use crate::errors::{AppError, SignupError};
use crate::models::{SheetResponse, StartRequest, StartResponse, SubmitResponse, ToggleResponse};
use crate::sheet::SignupSheet;
use crate::state::AppState;
use crate::storage::{load_ledger, persist_ledger};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::{error, warn};

/// Serving the page reloads the ledger from storage, dropping any session
/// that was never submitted.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut sheet = state.sheet.lock().await;
    let ledger = load_ledger(&state.data_path).await?;
    if let Some(user) = sheet.current_user() {
        warn!(user, "discarding unsubmitted selection");
    }
    *sheet = SignupSheet::new(ledger);
    Ok(Html(render_index(sheet.month())))
}

pub async fn get_sheet(State(state): State<AppState>) -> Json<SheetResponse> {
    let sheet = state.sheet.lock().await;
    Json(sheet.to_response())
}

pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    let mut sheet = state.sheet.lock().await;
    let user = sheet.start(&payload.username).map_err(rejected)?;
    let welcome = format!("Hello, {user}. Pick your days:");

    Ok(Json(StartResponse {
        welcome,
        sheet: sheet.to_response(),
    }))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Path(day): Path<u32>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut sheet = state.sheet.lock().await;
    let toggle = sheet.select_day(day).map_err(rejected)?;

    Ok(Json(ToggleResponse {
        cell: toggle.cell,
        selected: toggle.selected,
        selected_days: sheet.selected_days().to_vec(),
    }))
}

pub async fn submit(State(state): State<AppState>) -> Result<Json<SubmitResponse>, AppError> {
    let mut sheet = state.sheet.lock().await;
    let submission = sheet.submit().map_err(rejected)?;

    if let Err(err) = persist_ledger(&state.data_path, &submission.ledger).await {
        error!(user = %submission.user, "failed to persist submission: {err}");
        return Err(err);
    }
    sheet.finish_submit();

    Ok(Json(SubmitResponse {
        message: submission.confirmation(),
        user: submission.user,
        days: submission.days,
    }))
}

fn rejected(err: SignupError) -> AppError {
    warn!("request rejected: {err}");
    AppError::from(err)
}
