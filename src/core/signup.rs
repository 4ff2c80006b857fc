//! Signup submission flow
//!
//! [`SignupController`] owns one form's submit gate and session store and runs
//! a single submission: send the draft, classify the body, then either raise a
//! notification or persist and publish the new session.

use leptos::logging::{debug_warn, log, warn};
use serde_json::Value;

use crate::core::events::{AppEvent, EventSink, Notification, Notifier};
use crate::core::form::{FormField, FormInputs};
use crate::core::lifecycle::{CancelToken, SubmitGate};
use crate::core::session::{KeyValueStore, Session, SessionStore};

/// Backend endpoint accepting the signup draft
pub const SIGNUP_ENDPOINT: &str = "/api/users/signup";

/// Title used for every signup failure toast
const ERROR_TITLE: &str = "Error";

/// Failures that never reached an application-level answer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignupError {
    /// Network failure or a body that is not JSON
    #[error("{0}")]
    Transport(String),

    /// JSON body that is neither an error nor a user record
    #[error("Unexpected response from server: {0}")]
    UnexpectedResponse(String),
}

/// Application-level answer to a signup request
#[derive(Debug, Clone, PartialEq)]
pub enum SignupResponse {
    Created(Session),
    Rejected(String),
}

impl SignupResponse {
    /// Classify a decoded response body.
    ///
    /// An object with a truthy `error` field is a rejection; any other object
    /// is the new session.
    pub fn from_body(body: Value) -> Result<Self, SignupError> {
        match body {
            Value::Object(map) => match map.get("error") {
                Some(error) if is_truthy(error) => Ok(SignupResponse::Rejected(error_message(error))),
                _ => Ok(SignupResponse::Created(Session::from_map(map))),
            },
            other => Err(SignupError::UnexpectedResponse(describe_kind(&other).to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn describe_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Transport for the signup request
#[allow(async_fn_in_trait)]
pub trait SignupApi {
    /// POST the draft as JSON and return the decoded response body
    async fn signup(&self, inputs: &FormInputs) -> Result<Value, SignupError>;
}

/// What a call to [`SignupController::submit`] did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Session stored and published
    SignedUp(Session),
    /// Backend answered with an error message
    Rejected(String),
    /// Request failed before an application answer
    Failed(String),
    /// Required fields were empty; nothing was sent
    Incomplete(Vec<FormField>),
    /// Another submission was still pending; nothing was sent
    Ignored,
    /// The form was torn down before the response arrived
    Discarded,
}

/// Runs signup submissions for one mounted form
pub struct SignupController<A, S> {
    api: A,
    sessions: SessionStore<S>,
    gate: SubmitGate,
}

impl<A: SignupApi, S: KeyValueStore> SignupController<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            sessions: SessionStore::new(storage),
            gate: SubmitGate::new(),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    #[cfg(test)]
    fn gate(&self) -> &SubmitGate {
        &self.gate
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Send `inputs` once and apply the result.
    ///
    /// Nothing is sent, and nothing is shown, while a previous submission is
    /// pending. If `lifetime` is cancelled by the time the response arrives,
    /// the response is dropped.
    pub async fn submit(
        &self,
        inputs: &FormInputs,
        lifetime: &CancelToken,
        events: &impl EventSink,
        notifier: &impl Notifier,
    ) -> SubmitOutcome {
        if self.gate.is_pending() {
            debug_warn!("Signup request {}, ignoring submit", self.gate.phase());
            return SubmitOutcome::Ignored;
        }

        let missing = inputs.missing_fields();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(FormField::label).collect();
            notifier.notify(Notification::error(
                ERROR_TITLE,
                format!("Please fill in: {}", labels.join(", ")),
            ));
            return SubmitOutcome::Incomplete(missing);
        }

        let Some(_ticket) = self.gate.try_begin() else {
            debug_warn!("Signup request {}, ignoring submit", self.gate.phase());
            return SubmitOutcome::Ignored;
        };

        log!("Submitting signup for username: {}", inputs.username);

        let result = self
            .api
            .signup(inputs)
            .await
            .and_then(SignupResponse::from_body);

        if lifetime.is_cancelled() {
            log!("Signup form closed before response arrived, dropping it");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(SignupResponse::Created(session)) => {
                if let Err(e) = self.sessions.save(&session) {
                    warn!("Failed to persist session: {}", e);
                }
                events.publish(AppEvent::SessionSet(session.clone()));
                SubmitOutcome::SignedUp(session)
            }
            Ok(SignupResponse::Rejected(message)) => {
                notifier.notify(Notification::error(ERROR_TITLE, message.clone()));
                SubmitOutcome::Rejected(message)
            }
            Err(err) => {
                let message = err.to_string();
                warn!("Signup request failed: {}", message);
                notifier.notify(Notification::error(ERROR_TITLE, message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
