// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Remote content loading with silent fallback.
//!
//! Each content list is fetched once from its API endpoint. Any failure
//! (network error, non-success status, malformed or empty body) is logged
//! and replaced by the built-in list for that content type. There is no
//! retry, backoff or caching.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::content::{fallback, ContentKind, ContentUpdate};

/// Reasons a remote list could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not a JSON array of the expected records.
    #[error("malformed content: {0}")]
    Malformed(String),

    /// Body parsed but held no records.
    #[error("content list is empty")]
    Empty,
}

/// Anything that can return the raw body of a GET request.
pub trait ContentSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Blocking HTTP content source.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a source whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// Join the configured base URL and an API path.
///
/// Without a base the path stays relative (same-origin).
pub fn endpoint_url(base: Option<&str>, path: &str) -> String {
    match base.map(str::trim) {
        Some(base) if !base.is_empty() => format!("{}{}", base.trim_end_matches('/'), path),
        _ => path.to_string(),
    }
}

/// One attempt at fetching and decoding a non-empty list.
pub fn attempt<T: DeserializeOwned>(source: &dyn ContentSource, url: &str) -> Result<Vec<T>, LoadError> {
    let body = source.fetch(url)?;
    let items: Vec<T> =
        serde_json::from_str(&body).map_err(|e| LoadError::Malformed(e.to_string()))?;

    if items.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(items)
}

/// Fetch a list, or return `fallback` if anything goes wrong.
pub fn load<T: DeserializeOwned>(source: &dyn ContentSource, url: &str, fallback: Vec<T>) -> Vec<T> {
    attempt(source, url).unwrap_or_else(|e| {
        log::warn!("Using built-in content for {}: {}", url, e);
        fallback
    })
}

/// Load one content type against its own fallback.
pub fn load_kind(source: &dyn ContentSource, base: Option<&str>, kind: ContentKind) -> ContentUpdate {
    let url = endpoint_url(base, kind.path());
    match kind {
        ContentKind::Projects => ContentUpdate::Projects(load(source, &url, fallback::projects())),
        ContentKind::Experiences => {
            ContentUpdate::Experiences(load(source, &url, fallback::experiences()))
        }
        ContentKind::Blog => ContentUpdate::Blog(load(source, &url, fallback::blog_posts())),
    }
}

/// Start one independent background load per content type.
///
/// Updates arrive on the returned receiver in completion order. The
/// channel disconnects once every load has reported.
pub fn spawn_content_loads(source: Arc<dyn ContentSource>, base: Option<String>) -> Receiver<ContentUpdate> {
    let (sender, receiver) = channel();

    for &kind in ContentKind::all() {
        let sender = sender.clone();
        let source = Arc::clone(&source);
        let base = base.clone();

        std::thread::spawn(move || {
            let update = load_kind(source.as_ref(), base.as_deref(), kind);
            log::info!("Loaded {} {:?} entries", update.len(), kind);
            let _ = sender.send(update);
        });
    }

    receiver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{BlogPost, Project};
    use std::collections::HashMap;

    enum Reply {
        Body(&'static str),
        Status(u16),
        Down,
    }

    struct StubSource {
        replies: HashMap<String, Reply>,
    }

    impl StubSource {
        fn new(replies: Vec<(&str, Reply)>) -> Self {
            Self {
                replies: replies
                    .into_iter()
                    .map(|(url, reply)| (url.to_string(), reply))
                    .collect(),
            }
        }
    }

    impl ContentSource for StubSource {
        fn fetch(&self, url: &str) -> Result<String, LoadError> {
            match self.replies.get(url) {
                Some(Reply::Body(body)) => Ok(body.to_string()),
                Some(Reply::Status(status)) => Err(LoadError::Status {
                    status: *status,
                    url: url.to_string(),
                }),
                Some(Reply::Down) | None => Err(LoadError::Network("connection refused".to_string())),
            }
        }
    }

    const REMOTE_BLOG: &str =
        r#"[{"id":9,"title":"Remote","date":"2024-02-02","excerpt":"From the API","link":"/p/9"}]"#;

    #[test]
    fn test_endpoint_url_joins_base() {
        assert_eq!(endpoint_url(Some("http://localhost:8000/"), "/api/blog"), "http://localhost:8000/api/blog");
        assert_eq!(endpoint_url(Some("https://x.dev"), "/api/projects"), "https://x.dev/api/projects");
    }

    #[test]
    fn test_endpoint_url_relative_without_base() {
        assert_eq!(endpoint_url(None, "/api/blog"), "/api/blog");
        assert_eq!(endpoint_url(Some("  "), "/api/blog"), "/api/blog");
    }

    #[test]
    fn test_load_uses_remote_list() {
        let source = StubSource::new(vec![("/api/blog", Reply::Body(REMOTE_BLOG))]);
        let posts: Vec<BlogPost> = load(&source, "/api/blog", fallback::blog_posts());

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 9);
        assert_eq!(posts[0].title, "Remote");
    }

    #[test]
    fn test_network_failure_yields_fallback_exactly() {
        let source = StubSource::new(vec![("/api/projects", Reply::Down)]);
        let projects: Vec<Project> = load(&source, "/api/projects", fallback::projects());
        assert_eq!(projects, fallback::projects());
    }

    #[test]
    fn test_error_status_yields_fallback() {
        let source = StubSource::new(vec![("/api/blog", Reply::Status(503))]);
        let err = attempt::<BlogPost>(&source, "/api/blog").unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 503, .. }));

        let posts: Vec<BlogPost> = load(&source, "/api/blog", fallback::blog_posts());
        assert_eq!(posts, fallback::blog_posts());
    }

    #[test]
    fn test_malformed_body_yields_fallback() {
        let source = StubSource::new(vec![
            ("/a", Reply::Body("<html>not json</html>")),
            ("/b", Reply::Body(r#"[{"id":1,"title":"missing fields"}]"#)),
            ("/c", Reply::Body(r#"{"id":1}"#)),
        ]);

        for url in ["/a", "/b", "/c"] {
            assert!(matches!(
                attempt::<BlogPost>(&source, url),
                Err(LoadError::Malformed(_))
            ));
            assert_eq!(load(&source, url, fallback::blog_posts()), fallback::blog_posts());
        }
    }

    #[test]
    fn test_empty_list_yields_fallback() {
        let source = StubSource::new(vec![("/api/projects", Reply::Body("[]"))]);
        assert!(matches!(
            attempt::<Project>(&source, "/api/projects"),
            Err(LoadError::Empty)
        ));
        assert_eq!(
            load(&source, "/api/projects", fallback::projects()),
            fallback::projects()
        );
    }

    #[test]
    fn test_failures_are_isolated_per_kind() {
        let source = StubSource::new(vec![
            ("http://api/api/projects", Reply::Status(500)),
            ("http://api/api/blog", Reply::Body(REMOTE_BLOG)),
        ]);

        let projects = load_kind(&source, Some("http://api"), ContentKind::Projects);
        let experiences = load_kind(&source, Some("http://api"), ContentKind::Experiences);
        let blog = load_kind(&source, Some("http://api"), ContentKind::Blog);

        assert_eq!(projects, ContentUpdate::Projects(fallback::projects()));
        assert_eq!(experiences, ContentUpdate::Experiences(fallback::experiences()));
        match blog {
            ContentUpdate::Blog(posts) => assert_eq!(posts[0].id, 9),
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[test]
    fn test_spawned_loads_report_every_kind() {
        let source: Arc<dyn ContentSource> =
            Arc::new(StubSource::new(vec![("/api/blog", Reply::Body(REMOTE_BLOG))]));
        let receiver = spawn_content_loads(source, None);

        let mut kinds: Vec<ContentKind> = receiver.iter().map(|update| update.kind()).collect();
        kinds.sort_by_key(|k| k.path());

        assert_eq!(
            kinds,
            vec![ContentKind::Blog, ContentKind::Experiences, ContentKind::Projects]
        );
    }
}
