//! Response builders for API Gateway / function URL proxy responses.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::{Value, json};

/// Returns a JSON response with the given status code.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        json!({ "error": format!("Failed to serialize response: {e}") }).to_string()
    });
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns MP3 audio as a base64-encoded binary body.
#[must_use]
pub fn audio_response(audio: &[u8]) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": "audio/mpeg" },
        "isBase64Encoded": true,
        "body": STANDARD.encode(audio)
    })
}

/// Returns an empty 204 response for CORS preflight requests.
#[must_use]
pub fn preflight_response() -> Value {
    json!({
        "statusCode": 204,
        "headers": {
            "Access-Control-Allow-Methods": "*",
            "Access-Control-Allow-Headers": "*",
            "Access-Control-Max-Age": "600"
        },
        "body": ""
    })
}

/// Adds CORS headers when the request origin is the allowed one (or any origin is allowed).
#[must_use]
pub fn with_cors(mut response: Value, allowed_origin: &str, request_origin: Option<&str>) -> Value {
    let origin = match request_origin {
        Some(origin) if allowed_origin == "*" || origin == allowed_origin => origin.to_string(),
        _ => return response,
    };

    if !response.get("headers").is_some_and(Value::is_object) {
        response["headers"] = json!({});
    }
    response["headers"]["Access-Control-Allow-Origin"] = Value::String(origin);
    response["headers"]["Access-Control-Allow-Credentials"] = Value::String("true".into());
    response["headers"]["Vary"] = Value::String("Origin".into());
    response
}
