//! API Lambda handler - thin router over the processing pipeline and speech.
//!
//! Routes:
//! - `POST /api/process-url` fetch, summarize and translate an article
//! - `POST /api/synthesize` text → MP3
//! - `GET /api/voices` voice picker catalogue
//! - `OPTIONS *` CORS preflight

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::state::AppState;
use super::{helpers, parsing};
use crate::core::models::{ProcessUrlRequest, SynthesizeRequest};
use crate::speech::format_voice_catalogue;

pub use self::function_handler as handler;

const PROCESS_URL_PATH: &str = "/api/process-url";
const SYNTHESIZE_PATH: &str = "/api/synthesize";
const VOICES_PATH: &str = "/api/voices";

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err`: every failure is rendered as an HTTP error response.
#[tracing::instrument(level = "info", skip(state, event))]
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let payload = event.payload;
    let request_origin = payload
        .get("headers")
        .and_then(|headers| parsing::get_header_value(headers, "Origin"));

    let response = route(state, &payload).await;
    Ok(helpers::with_cors(
        response,
        &state.allowed_origin,
        request_origin,
    ))
}

/// Dispatches on method and path. Paths are matched by suffix so a stage
/// prefix (`/prod/api/voices`) still routes.
pub async fn route(state: &AppState, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or("GET");
    let path = parsing::request_path(payload).unwrap_or("/");
    info!(method, path, "API request");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::preflight_response();
    }

    let is_get = method.eq_ignore_ascii_case("GET");
    let is_post = method.eq_ignore_ascii_case("POST");

    if path.ends_with(PROCESS_URL_PATH) {
        if is_post {
            return handle_process_url(state, payload).await;
        }
    } else if path.ends_with(SYNTHESIZE_PATH) {
        if is_post {
            return handle_synthesize(state, payload).await;
        }
    } else if path.ends_with(VOICES_PATH) {
        if is_get {
            return handle_voices(state).await;
        }
    } else {
        return helpers::err_response(404, "Not Found");
    }

    helpers::err_response(405, "Method Not Allowed")
}

// ============================================================================
// Route Handlers
// ============================================================================

async fn handle_process_url(state: &AppState, payload: &Value) -> Value {
    let request: ProcessUrlRequest = match parsing::parse_json_body(payload) {
        Ok(r) => r,
        Err(response) => return response,
    };

    match state.processor.process_request(&request).await {
        Ok(article) => helpers::json_response(200, &article),
        Err(e) => {
            warn!(status = e.status_code(), "Processing failed: {}", e);
            helpers::err_response(e.status_code(), &e.to_string())
        }
    }
}

async fn handle_synthesize(state: &AppState, payload: &Value) -> Value {
    let request: SynthesizeRequest = match parsing::parse_json_body(payload) {
        Ok(r) => r,
        Err(response) => return response,
    };

    if request.text.trim().is_empty() || request.voice.trim().is_empty() {
        return helpers::err_response(400, "Text and voice must be provided.");
    }

    let Some(speech) = &state.speech else {
        return helpers::err_response(503, "Speech synthesis is not configured.");
    };

    match speech.synthesize(&request.text, &request.voice).await {
        Ok(audio) => helpers::audio_response(&audio),
        Err(e) => {
            error!("Speech synthesis failed: {}", e);
            helpers::err_response(500, &e.to_string())
        }
    }
}

async fn handle_voices(state: &AppState) -> Value {
    let Some(speech) = &state.speech else {
        return helpers::err_response(
            503,
            "Could not fetch voices from service: speech synthesis is not configured",
        );
    };

    match speech.list_voices().await {
        Ok(voices) => helpers::json_response(200, &format_voice_catalogue(&voices)),
        Err(e) => {
            error!("Failed to list voices: {}", e);
            helpers::err_response(503, &format!("Could not fetch voices from service: {e}"))
        }
    }
}
