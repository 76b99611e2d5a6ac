use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::helpers;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from a v2 (`requestContext.http.method`) or v1 (`httpMethod`) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request path from a v2 (`rawPath`) or v1 (`path`) event.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Returns the request body as text, decoding it if the gateway base64-encoded it.
///
/// # Errors
///
/// Returns a ready-made 400 response if the body is missing or undecodable.
pub fn extract_body(payload: &Value) -> Result<String, Value> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Err(helpers::err_response(400, "Missing body"));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body.to_string());
    }

    STANDARD
        .decode(body)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| helpers::err_response(400, "Invalid body encoding"))
}

/// Extracts and deserializes a JSON request body.
///
/// # Errors
///
/// Returns a ready-made 400 response describing the problem.
pub fn parse_json_body<T: DeserializeOwned>(payload: &Value) -> Result<T, Value> {
    let body = extract_body(payload)?;
    serde_json::from_str(&body)
        .map_err(|e| helpers::err_response(400, &format!("Invalid request body: {e}")))
}
