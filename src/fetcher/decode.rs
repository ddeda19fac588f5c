//! Body decoding using the charset declared in `Content-Type`
//!
//! Labels are resolved with the WHATWG rules from `encoding_rs`, so
//! `iso-8859-1` decodes as windows-1252 the way browsers do. Without a usable
//! label the body must be UTF-8.

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use super::types::FetchError;

/// `charset` parameter of a `Content-Type` value, unquoted
fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

pub(crate) fn encoding_for(content_type: Option<&str>) -> &'static Encoding {
    let Some(label) = content_type.and_then(charset_label) else {
        return UTF_8;
    };

    Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
        debug!("Unknown charset '{label}', decoding as UTF-8");
        UTF_8
    })
}

/// Decode `body` strictly; malformed input for the chosen encoding is an error
pub(crate) fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, FetchError> {
    let encoding = encoding_for(content_type);
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            debug!("Body is not valid {}", encoding.name());
            FetchError::Decode
        })
}
