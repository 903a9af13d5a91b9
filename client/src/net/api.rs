//! REST API helpers for the words/combinations collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every call makes exactly one attempt. Transport failures, undecodable
//! bodies, `success: false` envelopes and bare non-2xx statuses all come back
//! as `ApiError` so panels can report them without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    ApiError, BatchCombinationRequest, BatchCreated, Combination, CreateCombinationRequest, CreateWordRequest,
    Envelope, Word, WordType,
};

/// Fixed base path of the collaborator API.
pub const API_BASE: &str = "/api";

pub fn words_endpoint(filter: Option<WordType>) -> String {
    match filter {
        Some(kind) => format!("{API_BASE}/words?type={}", kind.as_str()),
        None => format!("{API_BASE}/words"),
    }
}

pub fn word_endpoint(id: i64) -> String {
    format!("{API_BASE}/words/{id}")
}

pub fn combinations_endpoint(verb_id: Option<i64>) -> String {
    match verb_id {
        Some(id) => format!("{API_BASE}/combinations?verb_id={id}"),
        None => format!("{API_BASE}/combinations"),
    }
}

pub fn combination_endpoint(id: i64) -> String {
    format!("{API_BASE}/combinations/{id}")
}

pub fn combinations_batch_endpoint() -> String {
    format!("{API_BASE}/combinations/batch")
}

pub fn combinations_by_verb_endpoint(verb_id: i64) -> String {
    format!("{API_BASE}/combinations/by-verb/{verb_id}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a data-carrying response.
///
/// An unparseable body is a decode failure on 2xx and a status failure
/// otherwise; a parsed envelope always wins over the status code.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if is_success(status) => return Err(ApiError::Decode(e.to_string())),
        Err(_) => return Err(ApiError::Status(status)),
    };
    if !envelope.success {
        return Err(ApiError::Rejected(envelope.rejection_message()));
    }
    let data = envelope
        .data
        .ok_or_else(|| ApiError::Decode("response missing data".to_owned()))?;
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response whose success is signalled by status alone (DELETE).
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        return Ok(());
    }
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) if !envelope.success && (envelope.error.is_some() || envelope.data.is_some()) => {
            Err(ApiError::Rejected(envelope.rejection_message()))
        }
        _ => Err(ApiError::Status(status)),
    }
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_data<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    decode_response(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_empty(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    decode_empty(status, &body)
}

#[cfg(feature = "hydrate")]
async fn get_data<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(transport)?;
    read_data(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_data<B: serde::Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_data(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(transport)?;
    read_empty(resp).await
}

/// Fetch words via `GET /words`, optionally filtered by type.
///
/// # Errors
///
/// Returns an `ApiError` on transport, decode, or upstream rejection.
pub async fn list_words(filter: Option<WordType>) -> Result<Vec<Word>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&words_endpoint(filter)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Create a word via `POST /words`.
///
/// # Errors
///
/// Returns an `ApiError` on transport, decode, or upstream rejection.
pub async fn create_word(request: &CreateWordRequest) -> Result<Word, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_data(&format!("{API_BASE}/words"), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Delete a word via `DELETE /words/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or a non-2xx status.
pub async fn delete_word(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&word_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch combinations via `GET /combinations`, optionally for one verb.
///
/// # Errors
///
/// Returns an `ApiError` on transport, decode, or upstream rejection.
pub async fn list_combinations(verb_id: Option<i64>) -> Result<Vec<Combination>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_data(&combinations_endpoint(verb_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = verb_id;
        Err(ApiError::Unavailable)
    }
}

/// Create one combination via `POST /combinations`.
///
/// # Errors
///
/// Returns an `ApiError` on transport, decode, or upstream rejection.
pub async fn create_combination(request: &CreateCombinationRequest) -> Result<Combination, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_data(&combinations_endpoint(None), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create the verb x subjects (x objects) cross-product via `POST /combinations/batch`.
/// Returns how many combinations the upstream created.
///
/// # Errors
///
/// Returns an `ApiError` on transport, decode, or upstream rejection.
pub async fn create_combinations_batch(request: &BatchCombinationRequest) -> Result<u64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let created: BatchCreated = post_data(&combinations_batch_endpoint(), request).await?;
        Ok(created.count)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Delete one combination via `DELETE /combinations/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or a non-2xx status.
pub async fn delete_combination(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&combination_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Delete every combination of a verb via `DELETE /combinations/by-verb/{verb_id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or a non-2xx status.
pub async fn delete_combinations_by_verb(verb_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&combinations_by_verb_endpoint(verb_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = verb_id;
        Err(ApiError::Unavailable)
    }
}
