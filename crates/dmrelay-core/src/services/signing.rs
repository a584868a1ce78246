//! ACS3-HMAC-SHA256 request signing for DirectMail RPC calls.
//!
//! The signing process:
//! 1. Build the canonical request from method, path, sorted query, signed headers and payload hash
//! 2. String to sign = algorithm + "\n" + hex(sha256(canonical request))
//! 3. Signature = hex(hmac_sha256(access key secret, string to sign))
//! 4. Send it in the `Authorization` header together with the signed `x-acs-*` headers

use crate::config::Credentials;
use crate::constants::SIGNATURE_ALGORITHM;
use crate::error::DmError;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// RFC 3986 unreserved characters stay as-is, everything else is encoded.
/// Spaces become `%20`, `*` becomes `%2A`.
const RFC3986_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Everything needed to sign one request
#[derive(Debug, Clone)]
pub struct SigningInput<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub action: &'a str,
    pub version: &'a str,
    pub canonical_query: &'a str,
    pub payload: &'a [u8],
    /// ISO 8601 UTC, e.g. `2026-01-01T00:00:00Z`
    pub timestamp: &'a str,
    pub nonce: &'a str,
}

pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986_SET).to_string()
}

/// Encodes and sorts parameters into `k1=v1&k2=v2`
pub fn canonical_query_string(params: &[(&str, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> Result<String, DmError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| DmError::Signing(format!("Invalid signing key: {}", e)))?;
    mac.update(data);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Signed headers, lowercase and sorted by name
fn signed_headers(input: &SigningInput<'_>) -> Vec<(&'static str, String)> {
    vec![
        ("host", input.host.to_string()),
        ("x-acs-action", input.action.to_string()),
        ("x-acs-content-sha256", sha256_hex(input.payload)),
        ("x-acs-date", input.timestamp.to_string()),
        ("x-acs-signature-nonce", input.nonce.to_string()),
        ("x-acs-version", input.version.to_string()),
    ]
}

fn signed_header_names(headers: &[(&'static str, String)]) -> String {
    headers
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(";")
}

/// Builds the canonical request string for `input`
pub fn canonical_request(input: &SigningInput<'_>) -> String {
    let headers = signed_headers(input);

    let canonical_headers: String = headers
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value.trim()))
        .collect();
    let signed_names = signed_header_names(&headers);

    format!(
        "{}\n/\n{}\n{}\n{}\n{}",
        input.method,
        input.canonical_query,
        canonical_headers,
        signed_names,
        sha256_hex(input.payload)
    )
}

/// Signs the request and returns the headers to attach, `authorization` included.
/// `host` is left out since the HTTP client sets it from the URL.
pub fn sign(
    input: &SigningInput<'_>,
    credentials: &Credentials,
) -> Result<Vec<(&'static str, String)>, DmError> {
    let canonical = canonical_request(input);
    let string_to_sign = format!("{}\n{}", SIGNATURE_ALGORITHM, sha256_hex(canonical.as_bytes()));
    let signature = hmac_sha256_hex(
        credentials.access_key_secret().as_bytes(),
        string_to_sign.as_bytes(),
    )?;

    let mut headers = signed_headers(input);
    let signed_names = signed_header_names(&headers);

    headers.retain(|(name, _)| *name != "host");
    headers.push((
        "authorization",
        format!(
            "{} Credential={},SignedHeaders={},Signature={}",
            SIGNATURE_ALGORITHM,
            credentials.access_key_id(),
            signed_names,
            signature
        ),
    ));

    Ok(headers)
}
