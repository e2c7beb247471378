//! Parser for the security-disclosure metadata block embedded in program
//! binaries: a header/footer-delimited region of NUL-separated key/value
//! tokens. Framing is bit-exact; required-field validation is strict;
//! unrecognized keys are dropped silently.

use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HEADER: &str = "=======BEGIN SECURITY.TXT V1=======";
pub const FOOTER: &str = "=======END SECURITY.TXT V1=======";

pub const REQUIRED_KEYS: &[&str] = &["name", "project_url", "contacts", "policy"];
pub const OPTIONAL_KEYS: &[&str] = &[
    "preferred_languages",
    "encryption",
    "source_code",
    "source_release",
    "source_revision",
    "auditors",
    "acknowledgements",
    "expiry",
];

/// Validated security-disclosure record. The four required fields are always
/// present once parsing succeeds.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityTxt {
    pub name: String,
    pub project_url: String,
    pub contacts: String,
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_languages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl SecurityTxt {
    /// Field access by recognized key name, for table-style rendering.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "project_url" => Some(&self.project_url),
            "contacts" => Some(&self.contacts),
            "policy" => Some(&self.policy),
            "preferred_languages" => self.preferred_languages.as_deref(),
            "encryption" => self.encryption.as_deref(),
            "source_code" => self.source_code.as_deref(),
            "source_release" => self.source_release.as_deref(),
            "source_revision" => self.source_revision.as_deref(),
            "auditors" => self.auditors.as_deref(),
            "acknowledgements" => self.acknowledgements.as_deref(),
            "expiry" => self.expiry.as_deref(),
            _ => None,
        }
    }
}

/// Three distinct failure states: callers render different empty-states for
/// "no security.txt" versus "corrupt security.txt" versus undecodable input.
#[derive(Debug, Error)]
pub enum SecurityTxtError {
    #[error("program data is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("no security.txt block present in program data")]
    NotPresent,
    #[error("security.txt is missing required fields: {0:?}")]
    MissingRequiredFields(Vec<String>),
}

/// Parse the block out of base64-encoded program account data.
pub fn parse(program_data_base64: &str) -> Result<SecurityTxt, SecurityTxtError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(program_data_base64)?;
    parse_bytes(&bytes)
}

/// Parse the block out of raw program bytes.
pub fn parse_bytes(data: &[u8]) -> Result<SecurityTxt, SecurityTxtError> {
    let header_start =
        find_subslice(data, HEADER.as_bytes()).ok_or(SecurityTxtError::NotPresent)?;
    let body_start = header_start + HEADER.len();
    let footer_offset = find_subslice(&data[body_start..], FOOTER.as_bytes())
        .ok_or(SecurityTxtError::NotPresent)?;
    let body = &data[body_start..body_start + footer_offset];

    // Both sentinels are NUL-terminated, so the body starts and ends with a
    // NUL delimiter; strip them before tokenizing.
    let body = body.strip_prefix(&[0u8][..]).unwrap_or(body);
    let body = body.strip_suffix(&[0u8][..]).unwrap_or(body);

    let tokens: Vec<&[u8]> = if body.is_empty() {
        Vec::new()
    } else {
        body.split(|b| *b == 0).collect()
    };

    // Alternating key/value pairs; an unmatched trailing token is ignored.
    // The byte layout is a flat stream, so later duplicates overwrite
    // earlier ones (incidental last-write-wins, kept from the original
    // format, not a guaranteed contract).
    let mut record = SecurityTxt::default();
    let mut seen: Vec<&str> = Vec::new();
    for pair in tokens.chunks_exact(2) {
        let key = String::from_utf8_lossy(pair[0]);
        let value = String::from_utf8_lossy(pair[1]).into_owned();
        if let Some(known) = recognized_key(&key) {
            assign(&mut record, known, value);
            if !seen.contains(&known) {
                seen.push(known);
            }
        }
    }

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !seen.contains(*key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SecurityTxtError::MissingRequiredFields(missing));
    }

    Ok(record)
}

fn recognized_key(key: &str) -> Option<&'static str> {
    REQUIRED_KEYS
        .iter()
        .chain(OPTIONAL_KEYS.iter())
        .find(|known| **known == key)
        .copied()
}

fn assign(record: &mut SecurityTxt, key: &'static str, value: String) {
    match key {
        "name" => record.name = value,
        "project_url" => record.project_url = value,
        "contacts" => record.contacts = value,
        "policy" => record.policy = value,
        "preferred_languages" => record.preferred_languages = Some(value),
        "encryption" => record.encryption = Some(value),
        "source_code" => record.source_code = Some(value),
        "source_release" => record.source_release = Some(value),
        "source_revision" => record.source_revision = Some(value),
        "auditors" => record.auditors = Some(value),
        "acknowledgements" => record.acknowledgements = Some(value),
        "expiry" => record.expiry = Some(value),
        _ => {}
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
