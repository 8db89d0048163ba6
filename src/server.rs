// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content API server.
//!
//! Serves the display lists the viewer fetches in remote mode and accepts
//! contact form posts, keeping received messages in memory.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::content::{ContentKind, SiteContent};
use crate::io::contact::CONTACT_PATH;
use crate::models::content::{BlogPost, Experience, Project};
use crate::models::contact::ContactForm;

/// A contact message as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// 1-based, in order of arrival
    pub id: usize,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Shared state for the handlers.
#[derive(Clone)]
pub struct ServerState {
    content: Arc<SiteContent>,
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl ServerState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the messages received so far.
    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().await.clone()
    }
}

/// Build the API router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(ContentKind::Projects.path(), get(projects))
        .route(ContentKind::Experiences.path(), get(experiences))
        .route(ContentKind::Blog.path(), get(blog))
        .route(CONTACT_PATH, post(contact))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, content: SiteContent) -> Result<()> {
    let app = router(ServerState::new(content));

    log::info!("Starting content API on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> Json<Value> {
    let mut endpoints: Vec<&str> = ContentKind::all().iter().map(|kind| kind.path()).collect();
    endpoints.push(CONTACT_PATH);

    Json(json!({
        "message": "Welcome to the portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
    }))
}

async fn projects(State(state): State<ServerState>) -> Json<Vec<Project>> {
    Json(state.content.projects.clone())
}

async fn experiences(State(state): State<ServerState>) -> Json<Vec<Experience>> {
    Json(state.content.experiences.clone())
}

async fn blog(State(state): State<ServerState>) -> Json<Vec<BlogPost>> {
    Json(state.content.blog_posts.clone())
}

async fn contact(State(state): State<ServerState>, Json(form): Json<ContactForm>) -> Json<Value> {
    let mut messages = state.messages.lock().await;
    let message = ContactMessage {
        id: messages.len() + 1,
        name: form.name,
        email: form.email,
        message: form.message,
        timestamp: Utc::now(),
    };
    log::info!(
        "New contact message from {} ({}): {}",
        message.name,
        message.email,
        message.message
    );
    messages.push(message);

    Json(json!({ "status": "success", "message": "Message received!" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "timestamp": Utc::now().to_rfc3339() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn contact_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(CONTACT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_lists_served_from_content() {
        let content = SiteContent::fallback();
        let app = router(ServerState::new(content.clone()));

        let response = app.clone().oneshot(get_request("/api/projects")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let projects: Vec<Project> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(projects, content.projects);

        let response = app.clone().oneshot(get_request("/api/experiences")).await.unwrap();
        let experiences: Vec<Experience> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(experiences, content.experiences);

        let response = app.oneshot(get_request("/api/blog")).await.unwrap();
        let posts: Vec<BlogPost> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(posts, content.blog_posts);
    }

    #[tokio::test]
    async fn test_contact_stores_messages_in_order() {
        let state = ServerState::new(SiteContent::fallback());
        let app = router(state.clone());

        let response = app
            .clone()
            .oneshot(contact_request(r#"{"name":"Ann","email":"ann@example.com","message":"Hi"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "success", "message": "Message received!" })
        );

        app.oneshot(contact_request(r#"{"name":"Bo","email":"bo@example.com","message":"Hello"}"#))
            .await
            .unwrap();

        let messages = state.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, 1);
        assert_eq!(messages[0].name, "Ann");
        assert_eq!(messages[1].id, 2);
        assert_eq!(messages[1].message, "Hello");
    }

    #[tokio::test]
    async fn test_contact_rejects_missing_fields() {
        let state = ServerState::new(SiteContent::fallback());
        let app = router(state.clone());

        let response = app
            .oneshot(contact_request(r#"{"name":"Ann"}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        assert!(state.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = router(ServerState::new(SiteContent::fallback()));

        let health = body_json(app.clone().oneshot(get_request("/api/health")).await.unwrap()).await;
        assert_eq!(health["status"], "healthy");
        assert!(DateTime::parse_from_rfc3339(health["timestamp"].as_str().unwrap()).is_ok());

        let root = body_json(app.oneshot(get_request("/")).await.unwrap()).await;
        let endpoints = root["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 4);
        assert!(endpoints.contains(&json!("/api/contact")));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = router(ServerState::new(SiteContent::fallback()));
        let request = Request::builder()
            .uri("/api/projects")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
