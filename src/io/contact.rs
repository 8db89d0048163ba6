// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Outbound transports for the contact form.
//!
//! A submission is delivered either to the portfolio backend
//! (`POST {base}/api/contact`) or to a templated email-relay service.
//! Both perform exactly one blocking request per call; retries are never
//! attempted.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use super::config::{Config, ContactConfig, TransportKind};
use super::loader::endpoint_url;
use crate::models::contact::ContactForm;

/// Path of the backend contact endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Errors that can occur while delivering a message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request could not be sent.
    #[error("network error: {0}")]
    Network(String),

    /// Receiver answered with a non-success status.
    #[error("message rejected with status {0}")]
    Rejected(u16),

    /// The worker delivering the message went away without reporting.
    #[error("submission interrupted")]
    Interrupted,
}

impl SubmitError {
    /// Returns a short message suitable for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach the server. Please try again.",
            Self::Rejected(_) => "The message was not accepted. Please try again later.",
            Self::Interrupted => "Sending was interrupted. Please try again.",
        }
    }
}

/// Something that can deliver a contact form.
pub trait ContactTransport: Send + Sync {
    fn send(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

fn http_client(timeout: Duration) -> Result<Client, SubmitError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SubmitError::Network(e.to_string()))
}

fn post_json<B: Serialize + ?Sized>(client: &Client, url: &str, body: &B) -> Result<(), SubmitError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(SubmitError::Rejected(response.status().as_u16()));
    }

    Ok(())
}

/// Posts the form as JSON to the portfolio backend.
pub struct BackendTransport {
    client: Client,
    url: String,
}

impl BackendTransport {
    pub fn new(api_base: Option<&str>, timeout: Duration) -> Result<Self, SubmitError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: endpoint_url(api_base, CONTACT_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactTransport for BackendTransport {
    fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        log::debug!("Posting contact form to {}", self.url);
        post_json(&self.client, &self.url, form)
    }
}

#[derive(Debug, Serialize)]
struct RelayParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: RelayParams<'a>,
}

/// Sends the form through a templated email-relay service.
///
/// Service, template and public key are opaque identifiers taken from the
/// configuration.
pub struct EmailRelayTransport {
    client: Client,
    relay_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailRelayTransport {
    pub fn new(
        relay_url: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SubmitError> {
        Ok(Self {
            client: http_client(timeout)?,
            relay_url: relay_url.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        })
    }

    fn request<'a>(&'a self, form: &'a ContactForm) -> RelayRequest<'a> {
        RelayRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: RelayParams {
                from_name: &form.name,
                from_email: &form.email,
                message: &form.message,
            },
        }
    }
}

impl ContactTransport for EmailRelayTransport {
    fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        log::debug!("Sending contact form through relay {}", self.relay_url);
        post_json(&self.client, &self.relay_url, &self.request(form))
    }
}

/// Build the transport selected by the configuration.
///
/// Expects a validated [`Config`]; missing relay identifiers are reported as
/// empty strings.
pub fn transport_from_config(config: &Config) -> Result<Arc<dyn ContactTransport>, SubmitError> {
    let timeout = config.request_timeout();
    let ContactConfig {
        transport: kind,
        relay_url,
        service_id,
        template_id,
        public_key,
    } = &config.contact;

    let transport: Arc<dyn ContactTransport> = match kind {
        TransportKind::Backend => {
            let backend = BackendTransport::new(config.api_base.as_deref(), timeout)?;
            log::info!("Contact messages go to {}", backend.url());
            Arc::new(backend)
        }
        TransportKind::EmailRelay => {
            log::info!("Contact messages go through email relay {}", relay_url);
            Arc::new(EmailRelayTransport::new(
                relay_url.as_str(),
                service_id.clone().unwrap_or_default(),
                template_id.clone().unwrap_or_default(),
                public_key.clone().unwrap_or_default(),
                timeout,
            )?)
        }
    };

    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_from_base() {
        let transport =
            BackendTransport::new(Some("http://localhost:8000"), Duration::from_secs(1)).unwrap();
        assert_eq!(transport.url(), "http://localhost:8000/api/contact");
    }

    #[test]
    fn test_backend_url_relative_without_base() {
        let transport = BackendTransport::new(None, Duration::from_secs(1)).unwrap();
        assert_eq!(transport.url(), "/api/contact");
    }

    #[test]
    fn test_backend_body_is_form_fields() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
        );
    }

    #[test]
    fn test_relay_request_shape() {
        let transport = EmailRelayTransport::new(
            "https://relay.example/send",
            "service_1",
            "template_2",
            "public_3",
            Duration::from_secs(1),
        )
        .unwrap();
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");

        let body = serde_json::to_value(transport.request(&form)).unwrap();
        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_2");
        assert_eq!(body["user_id"], "public_3");
        assert_eq!(body["template_params"]["from_name"], "Ada");
        assert_eq!(body["template_params"]["from_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hello");
    }

    #[test]
    fn test_unreachable_backend_is_network_error() {
        // Relative URLs cannot be resolved by a native client
        let transport = BackendTransport::new(None, Duration::from_secs(1)).unwrap();
        let result = transport.send(&ContactForm::new("Ada", "ada@example.com", "Hello"));
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        for err in [
            SubmitError::Network("x".to_string()),
            SubmitError::Rejected(500),
            SubmitError::Interrupted,
        ] {
            assert!(!err.user_message().is_empty());
        }
    }
}
