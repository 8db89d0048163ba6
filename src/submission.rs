// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact submission pipeline.
//!
//! Drives [`SubmissionStatus`] through `Idle -> Pending -> Success | Error
//! -> Idle`. Each accepted submission performs exactly one outbound call on
//! a background thread; the UI thread collects the outcome with
//! [`SubmissionPipeline::poll`]. The return to `Idle` is a reset task owned
//! by the pipeline and cancelled whenever a new submission starts.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::io::contact::{ContactTransport, SubmitError};
use crate::models::contact::{ContactForm, SubmissionStatus};

/// Why a submit request was refused without any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
    #[error("name, email and message are required")]
    Incomplete,
}

/// Pending return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledReset {
    due: Instant,
}

impl ScheduledReset {
    fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Owns submission status, the in-flight call and the reset timer.
pub struct SubmissionPipeline {
    transport: Arc<dyn ContactTransport>,
    status: SubmissionStatus,
    in_flight: Option<Receiver<Result<(), SubmitError>>>,
    reset: Option<ScheduledReset>,
    reset_delay: Duration,
    last_error: Option<SubmitError>,
}

impl SubmissionPipeline {
    pub fn new(transport: Arc<dyn ContactTransport>, reset_delay: Duration) -> Self {
        Self {
            transport,
            status: SubmissionStatus::Idle,
            in_flight: None,
            reset: None,
            reset_delay,
            last_error: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Error behind the current `Error` status.
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// When the current outcome will revert to `Idle`, if scheduled.
    pub fn reset_due(&self) -> Option<Instant> {
        self.reset.map(|reset| reset.due)
    }

    /// Whether the submit control should be enabled for `form`.
    pub fn can_submit(&self, form: &ContactForm) -> bool {
        !self.status.is_pending() && form.is_complete()
    }

    /// Start delivering `form`.
    ///
    /// Refused while a previous submission is pending or when a field is
    /// empty. Cancels any scheduled reset from an earlier outcome.
    pub fn submit(&mut self, form: &ContactForm) -> Result<(), SubmitRejected> {
        if self.status.is_pending() {
            return Err(SubmitRejected::InFlight);
        }
        if !form.is_complete() {
            return Err(SubmitRejected::Incomplete);
        }

        self.reset = None;
        self.last_error = None;
        self.status = SubmissionStatus::Pending;

        let (sender, receiver) = channel();
        self.in_flight = Some(receiver);

        let transport = Arc::clone(&self.transport);
        let form = form.clone();
        std::thread::spawn(move || {
            let _ = sender.send(transport.send(&form));
        });

        log::info!("Contact submission started");
        Ok(())
    }

    /// Collect a finished call and fire a due reset.
    ///
    /// On success the form is cleared; on failure it keeps its values.
    /// Returns `true` when the status changed.
    pub fn poll(&mut self, form: &mut ContactForm, now: Instant) -> bool {
        let mut changed = false;

        let received = self.in_flight.as_ref().map(|receiver| receiver.try_recv());
        match received {
            Some(Ok(result)) => {
                self.in_flight = None;
                self.finish(result, form, now);
                changed = true;
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.in_flight = None;
                self.finish(Err(SubmitError::Interrupted), form, now);
                changed = true;
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }

        if self.reset.is_some_and(|reset| reset.is_due(now)) {
            self.reset = None;
            self.last_error = None;
            self.status = SubmissionStatus::Idle;
            changed = true;
        }

        changed
    }

    fn finish(&mut self, result: Result<(), SubmitError>, form: &mut ContactForm, now: Instant) {
        match result {
            Ok(()) => {
                log::info!("Contact message sent");
                form.clear();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                log::warn!("Contact message failed: {}", e);
                self.status = SubmissionStatus::Error;
                self.last_error = Some(e);
            }
        }

        self.reset = Some(ScheduledReset::after(now, self.reset_delay));
    }
}
