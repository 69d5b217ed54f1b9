//! Event collection endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};

use evman_core::{Event, EventDraft, EventStatus};

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(replace_event).delete(delete_event),
        )
        .route("/api/events/{id}/status", patch(patch_status))
}

/// Event as returned by the API: the stored fields plus the derived
/// display date, computed once here at read time.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(flatten)]
    event: Event,
    display_date: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let display_date = event.display_date();
        EventResponse {
            event,
            display_date,
        }
    }
}

/// Request body for the status patch
#[derive(Deserialize)]
pub struct PatchStatusRequest {
    pub status: EventStatus,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// GET /api/events - List all events
async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.store.find_all()?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /api/events/:id - Get one event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state
        .store
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(event.into()))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let event = state.store.insert(draft)?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

/// PUT /api/events/:id - Replace an event
async fn replace_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state.store.replace(&id, draft)?;
    Ok(Json(event.into()))
}

/// PATCH /api/events/:id/status - Update only the status field
async fn patch_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PatchStatusRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let event = state.store.patch_status(&id, req.status)?;
    Ok(Json(event.into()))
}

/// DELETE /api/events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete(&id)?;
    Ok(Json(DeleteResponse { deleted: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use evman_core::EventStore;
    use tower::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();
        let app = router().with_state(AppState { store });
        (app, dir)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_then_list_reflects_store() {
        let (app, _dir) = test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/events",
                serde_json::json!({
                    "name": "Standup",
                    "date": "2030-01-15",
                    "place": "Room A",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let events = body_json(response).await;
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["name"], "Standup");
        assert_eq!(events[0]["status"], "upcoming");
        assert_eq!(events[0]["displayDate"], "Tuesday, January 15, 2030");
    }

    #[tokio::test]
    async fn create_with_blank_name_is_bad_request() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(post_json(
                "/api/events",
                serde_json::json!({
                    "name": "   ",
                    "date": "2030-01-15",
                    "place": "Room A",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn patch_status_round_trips() {
        let (app, _dir) = test_app();

        let created = app
            .clone()
            .oneshot(post_json(
                "/api/events",
                serde_json::json!({
                    "name": "Standup",
                    "date": "2030-01-15",
                    "place": "Room A",
                }),
            ))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/events/{}/status", id))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"status":"success"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let fetched = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/events/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let fetched = body_json(fetched).await;
        assert_eq!(fetched["status"], "success");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let (app, _dir) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/events/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn delete_removes_the_event() {
        let (app, _dir) = test_app();

        let created = app
            .clone()
            .oneshot(post_json(
                "/api/events",
                serde_json::json!({
                    "name": "Standup",
                    "date": "2030-01-15",
                    "place": "Room A",
                }),
            ))
            .await
            .unwrap();
        let created = body_json(created).await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/events/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let events = body_json(response).await;
        assert_eq!(events.as_array().unwrap().len(), 0);
    }
}
