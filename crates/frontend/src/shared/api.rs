//! REST plumbing shared by every entity client.
//!
//! All endpoints speak JSON and report failures through one error envelope
//! (`{"message": "..."}`); there is deliberately no per-endpoint guessing of
//! the error shape.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status and a message envelope.
    #[error("{0}")]
    Backend(String),
    /// The request never completed (network, CORS, aborted transport).
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx response carried a body that did not parse as expected.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the error toast, preferring the backend-supplied message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: String,
}

thread_local! {
    static API_BASE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Override the API base URL (single configuration value of the app).
pub fn set_api_base(base: impl Into<String>) {
    API_BASE.with(|slot| *slot.borrow_mut() = Some(base.into()));
}

/// Base URL for API requests: the configured override if set, otherwise
/// derived from the current window location with the backend port.
pub fn api_base() -> String {
    if let Some(base) = API_BASE.with(|slot| slot.borrow().clone()) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn failure(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) if !envelope.message.trim().is_empty() => ApiError::Backend(envelope.message),
        _ => ApiError::Transport(format!("HTTP {}", status)),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// PUT where only the status matters; the local copy is already the source
/// of truth after a 2xx.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = Request::put(&url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    Ok(())
}

/// Issue one DELETE per path concurrently and join all-or-nothing: the first
/// rejection is the batch outcome and no partial result is reported.
pub async fn delete_all(paths: impl IntoIterator<Item = String>) -> Result<(), ApiError> {
    let requests = paths.into_iter().collect::<Vec<_>>();
    futures::future::try_join_all(requests.iter().map(|path| delete(path)))
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Backend("Serial number already exists".to_string());
        assert_eq!(
            err.user_message("Failed to create item"),
            "Serial number already exists"
        );
    }

    #[test]
    fn test_user_message_falls_back_on_transport() {
        let err = ApiError::Transport("HTTP 502".to_string());
        assert_eq!(err.user_message("Failed to create item"), "Failed to create item");
    }

    #[test]
    fn test_blank_backend_message_falls_back() {
        let err = ApiError::Backend("   ".to_string());
        assert_eq!(err.user_message("Failed to load"), "Failed to load");
    }
}
