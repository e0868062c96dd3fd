//! Share tokens: one poem as a URL-safe string.
//!
//! The token is a versioned JSON payload encoded as unpadded base64url.
//! Decoding validates field by field so a mangled or hand-edited token
//! reports which part was rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use verse_core::{Poem, Style};

const SHARE_VERSION: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("share token is not valid base64url")]
    InvalidEncoding,
    #[error("share token payload is not valid JSON: {0}")]
    InvalidPayload(String),
    #[error("unsupported share token version {0}")]
    UnsupportedVersion(u32),
    #[error("share token field `{0}` is missing or empty")]
    MissingField(&'static str),
    #[error("share token field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
    #[error("share token date is not RFC 3339: {0}")]
    InvalidDate(String),
}

#[derive(Serialize, Deserialize)]
struct SharePayload {
    v: u32,
    text: String,
    style: String,
    prompt: String,
    doom: u32,
    date: String,
}

/// Encode one poem as a share token.
pub fn encode(poem: &Poem) -> String {
    let payload = SharePayload {
        v: SHARE_VERSION,
        text: poem.text.clone(),
        style: poem.style.name().to_string(),
        prompt: poem.prompt.clone(),
        doom: u32::from(poem.doom),
        date: poem.date.to_rfc3339(),
    };
    let bytes = serde_json::to_vec(&payload).expect("share payload serializable");
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a share token back into a poem, validating every field.
pub fn decode(token: &str) -> Result<Poem, ShareError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|_| ShareError::InvalidEncoding)?;
    let payload: SharePayload =
        serde_json::from_slice(&bytes).map_err(|e| ShareError::InvalidPayload(e.to_string()))?;

    if payload.v != SHARE_VERSION {
        return Err(ShareError::UnsupportedVersion(payload.v));
    }
    if payload.text.trim().is_empty() {
        return Err(ShareError::MissingField("text"));
    }
    if payload.style.trim().is_empty() {
        return Err(ShareError::MissingField("style"));
    }
    if payload.doom > 100 {
        return Err(ShareError::OutOfRange { field: "doom", value: payload.doom.to_string() });
    }
    let date = DateTime::parse_from_rfc3339(&payload.date)
        .map_err(|_| ShareError::InvalidDate(payload.date.clone()))?
        .with_timezone(&Utc);

    Ok(Poem {
        text: payload.text,
        style: Style::from(payload.style),
        prompt: payload.prompt,
        doom: payload.doom as u8,
        date,
    })
}
