use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use marsdash_core::{parse_action, parse_link, reduce, Action, Effect, RouteParams, Store};
use marsdash_types::{rover_payload, ApodEnvelope, RoverEnvelope};
use marsdash_views::{render_page, PageOptions};

use crate::assets::{APP_CSS, BOOTSTRAP_JS};
use crate::error::AppError;
use crate::nasa::{NasaClient, ROVERS};

// ── Shared state ────────────────────────────────────────────────────

pub struct AppState {
    pub nasa: NasaClient,
    /// The single dashboard store. Locked only across reduce/render, never
    /// across an upstream await, so overlapping actions stay last-write-wins.
    pub store: Mutex<Store>,
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public
        .route("/health", get(health))
        .route("/", get(page))
        // NASA proxy
        .route("/apod", get(apod_proxy))
        .route("/rover/:rover_name", get(rover_proxy))
        // Store driver
        .route("/actions", post(action))
        // Canonical links are paths, so deep links land here
        .fallback(deep_link)
        .with_state(state)
}

// ── Request / Response types ────────────────────────────────────────

#[derive(Deserialize)]
pub struct RoverQuery {
    #[serde(rename = "pageNumber")]
    pub page_number: Option<u64>,
    pub camera: Option<String>,
    #[serde(rename = "earthDate")]
    pub earth_date: Option<String>,
}

impl RoverQuery {
    fn into_params(self) -> RouteParams {
        RouteParams {
            page_number: self.page_number.filter(|&n| n >= 1).unwrap_or(1),
            camera: self.camera.filter(|c| !c.is_empty()),
            earth_date: self.earth_date.filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Serialize)]
struct ActionResponse {
    html: String,
    link: String,
}

// ── Handlers: public ────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

async fn page(State(state): State<Arc<AppState>>) -> Html<String> {
    render_document(&state, Action::RouteTo("/".into())).await
}

/// Serve the dashboard for a canonical link (`/Curiosity&page=2&camera=FHAZ`),
/// so reloads and shared URLs work. Paths naming an unknown rover 404 without
/// touching the store.
async fn deep_link(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let path = uri.path().to_string();
    if let Some((rover, _)) = parse_link(&path) {
        if !ROVERS.contains(&rover.to_lowercase().as_str()) {
            return Err(AppError::NotFound("unknown page".into()));
        }
    }
    Ok(render_document(&state, Action::RouteTo(path)).await)
}

// ── Handlers: NASA proxy ────────────────────────────────────────────

async fn apod_proxy(State(state): State<Arc<AppState>>) -> Result<Json<ApodEnvelope>, AppError> {
    let image = state.nasa.apod().await?;
    Ok(Json(ApodEnvelope { image }))
}

async fn rover_proxy(
    State(state): State<Arc<AppState>>,
    Path(rover_name): Path<String>,
    Query(query): Query<RoverQuery>,
) -> Result<Json<RoverEnvelope>, AppError> {
    let name = normalize_rover(&rover_name)?;
    let params = query.into_params();
    let photos = state.nasa.photos(&name, &params).await?;
    let envelope =
        rover_payload(photos).ok_or_else(|| AppError::NotFound("no photos found".into()))?;
    Ok(Json(envelope))
}

fn normalize_rover(name: &str) -> Result<String, AppError> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(AppError::BadRequest("rover name is required".into()));
    }
    if !ROVERS.contains(&name.as_str()) {
        return Err(AppError::BadRequest("invalid rover name".into()));
    }
    Ok(name)
}

// ── Handlers: store driver ──────────────────────────────────────────

async fn action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let value = req.payload.get("value").and_then(|v| v.as_str());
    let action = parse_action(&req.action, value)
        .ok_or_else(|| AppError::BadRequest(format!("unknown action: {}", req.action)))?;

    let (html, link) = drive(&state, action).await;
    Ok(Json(ActionResponse { html, link }))
}

/// Apply an action, run the fetch it asks for, and render the app.
async fn drive(state: &AppState, action: Action) -> (String, String) {
    let effect = {
        let mut store = state.store.lock().await;
        reduce(&mut store, action)
    };

    if let Some(effect) = effect {
        run_effect(state, effect).await;
    }

    let store = state.store.lock().await;
    (marsdash_views::render_app(&store), store.router.current_link.clone())
}

async fn run_effect(state: &AppState, effect: Effect) {
    match effect {
        Effect::FetchApod => match state.nasa.apod().await {
            Ok(apod) => {
                let mut store = state.store.lock().await;
                reduce(&mut store, Action::ApodLoaded(apod));
            }
            // Swallowed: the home page keeps its loading fragment.
            Err(e) => eprintln!("[apod] fetch failed: {}", e),
        },

        Effect::FetchRover { rover, params } => {
            let name = rover.to_lowercase();
            match state.nasa.photos(&name, &params).await {
                Ok(photos) => match rover_payload(photos) {
                    Some(envelope) => {
                        let mut store = state.store.lock().await;
                        reduce(
                            &mut store,
                            Action::RoverLoaded {
                                rover: envelope.rover_data,
                                photos: envelope.photos,
                            },
                        );
                    }
                    // Store untouched: the gallery keeps its loading fragment.
                    None => eprintln!(
                        "[rover] no photos for {} (page {})",
                        name, params.page_number
                    ),
                },
                Err(e) => {
                    eprintln!("[rover] fetch failed for {}: {}", name, e);
                    let mut store = state.store.lock().await;
                    reduce(&mut store, Action::RoverFailed);
                }
            }
        }
    }
}

async fn render_document(state: &AppState, action: Action) -> Html<String> {
    let (body, _) = drive(state, action).await;
    Html(render_page(&PageOptions {
        body,
        title: Some("Mars Rover Dashboard".into()),
        description: Some("NASA Astronomy Picture of the Day and Mars rover photo galleries".into()),
        inline_css: Some(APP_CSS.into()),
        inline_scripts: vec![BOOTSTRAP_JS.into()],
        mount_selector: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rover() {
        assert_eq!(normalize_rover("Curiosity").unwrap(), "curiosity");
        assert_eq!(normalize_rover(" spirit ").unwrap(), "spirit");
        assert!(matches!(normalize_rover("mars"), Err(AppError::BadRequest(_))));
        assert!(matches!(normalize_rover(""), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_rover_query_into_params() {
        let params = RoverQuery {
            page_number: Some(2),
            camera: Some("FHAZ".into()),
            earth_date: Some("".into()),
        }
        .into_params();
        assert_eq!(params.page_number, 2);
        assert_eq!(params.camera.as_deref(), Some("FHAZ"));
        assert!(params.earth_date.is_none());
    }

    #[test]
    fn test_rover_query_defaults_page() {
        let params = RoverQuery {
            page_number: Some(0),
            camera: None,
            earth_date: None,
        }
        .into_params();
        assert_eq!(params.page_number, 1);
    }

    #[test]
    fn test_action_request_value_extraction() {
        let req: ActionRequest =
            serde_json::from_str(r#"{"action":"camera","payload":{"value":"FHAZ"}}"#).unwrap();
        assert_eq!(req.payload.get("value").and_then(|v| v.as_str()), Some("FHAZ"));

        let req: ActionRequest = serde_json::from_str(r#"{"action":"home"}"#).unwrap();
        assert!(req.payload.get("value").is_none());
    }
}
