//! Shareable links that carry a tool's inputs.
//!
//! Codes use the same layout as the site's own links: the inputs are
//! serialized to camelCase JSON, percent-encoded, then base64 encoded with the
//! standard alphabet. [`share_url`] escapes the code for the `data` query
//! parameter. [`decode`] also accepts URL-safe codes, with or without padding,
//! and plain JSON inside the base64.

use crate::error::ShareError;
use base64::{Engine, alphabet};
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::debug;

pub const BASE_URL: &str = "https://pairdish.com";

/// Name of the query parameter a share code travels in.
pub const SHARE_PARAM: &str = "data";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

pub fn encode<T: Serialize>(state: &T) -> Result<String, ShareError> {
    let json = serde_json::to_string(state)?;
    Ok(STANDARD.encode(urlencoding::encode(&json).as_bytes()))
}

pub fn decode<T: DeserializeOwned>(code: &str) -> Result<T, ShareError> {
    // Base64 never contains '%', so this only undoes query escaping.
    let code = urlencoding::decode(code.trim())?;
    let engine = if code.contains(['-', '_']) {
        &URL_SAFE_LENIENT
    } else {
        &STANDARD_LENIENT
    };
    let bytes = engine.decode(code.as_bytes())?;

    // Percent-encoded JSON starts with the escaped '{'.
    let json = if bytes.first() == Some(&b'%') {
        urlencoding::decode_binary(&bytes)
    } else {
        Cow::Borrowed(bytes.as_slice())
    };
    Ok(serde_json::from_slice(&json)?)
}

/// Decodes a share code, falling back to the default state when the code is
/// damaged or belongs to a different tool.
pub fn decode_or_default<T: DeserializeOwned + Default>(code: &str) -> T {
    decode(code).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring unreadable share code");
        T::default()
    })
}

/// Full link to `path` on the site with `state` attached.
pub fn share_url<T: Serialize>(path: &str, state: &T) -> Result<String, ShareError> {
    let code = encode(state)?;
    let path = path.trim_start_matches('/');
    Ok(format!(
        "{BASE_URL}/{path}?{SHARE_PARAM}={}",
        urlencoding::encode(&code)
    ))
}

/// Pulls the share code out of a link produced by [`share_url`] or by the
/// site. The code is returned still escaped; [`decode`] unescapes it.
pub fn code_from_url(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map(|(_, value)| value)
}
