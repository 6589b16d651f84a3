// Wealth Board - Web Routes
// HTML page with one button per command, plus a small JSON API

use crate::board::Outcome;
use crate::dispatch::{Command, Dispatcher};
use crate::money::format_money;
use crate::person::Person;
use crate::render::render_page;
use crate::source::PersonSource;
use crate::transforms::calculate_wealth;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

pub type SharedSource = Arc<dyn PersonSource>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    dispatcher: Dispatcher<SharedSource>,
    /// Last source failure, shown on the page until the next successful command
    last_error: Arc<Mutex<Option<String>>>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher<SharedSource>) -> Self {
        AppState {
            dispatcher,
            last_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<SharedSource> {
        &self.dispatcher
    }

    fn set_error(&self, error: Option<String>) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = error;
        }
    }

    fn error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|slot| slot.clone())
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
struct WealthResponse {
    total: f64,
    formatted: String,
    people: usize,
}

#[derive(Serialize)]
struct CommandResponse {
    command: Command,
    outcome: Outcome,
    people: Vec<Person>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/people - Current store, in display order
async fn get_people(State(state): State<AppState>) -> impl IntoResponse {
    let board = state.dispatcher.snapshot().await;
    Json(ApiResponse::ok(board.people().to_vec()))
}

/// GET /api/wealth - Sum without touching the board
async fn get_wealth(State(state): State<AppState>) -> impl IntoResponse {
    let board = state.dispatcher.snapshot().await;
    let total = calculate_wealth(board.people());

    Json(ApiResponse::ok(WealthResponse {
        total,
        formatted: format_money(total),
        people: board.len(),
    }))
}

/// POST /api/commands/:command - Run a command, answer with the new store
async fn run_command_api(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let command = match name.parse::<Command>() {
        Ok(command) => command,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<CommandResponse>::error(err.to_string())),
            )
                .into_response()
        }
    };

    match state.dispatcher.dispatch(command).await {
        Ok(outcome) => {
            state.set_error(None);
            let board = state.dispatcher.snapshot().await;
            let response = CommandResponse {
                command,
                outcome,
                people: board.people().to_vec(),
            };

            (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
        }
        Err(err) => {
            tracing::warn!(%command, error = %err, "command failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::<CommandResponse>::error(err.to_string())),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Render the whole page from the current board
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let board = state.dispatcher.snapshot().await;
    Html(render_page(&board, state.error().as_deref()))
}

/// POST /commands/:command - Button target; always lands back on the page
async fn run_command_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let command = match name.parse::<Command>() {
        Ok(command) => command,
        Err(err) => return (StatusCode::NOT_FOUND, err.to_string()).into_response(),
    };

    match state.dispatcher.dispatch(command).await {
        Ok(_) => state.set_error(None),
        Err(err) => {
            tracing::warn!(%command, error = %err, "command failed");
            state.set_error(Some(err.to_string()));
        }
    }

    Redirect::to("/").into_response()
}

/// Build the full router (page + JSON API)
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/people", get(get_people))
        .route("/wealth", get(get_wealth))
        .route("/commands/:command", post(run_command_api))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_index))
        .route("/commands/:command", post(run_command_form))
        .with_state(state)
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}
