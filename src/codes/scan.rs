//! Build code detection in free-form chat text.
//!
//! Messages are scanned for both code shapes. The short letter format
//! is checked first since it cannot be confused with base64; the long
//! format is only reported when the candidate actually inflates, so
//! ordinary base64 pastes (attachments, tokens) stay untouched.

use fancy_regex::Regex;
use tracing::warn;

use crate::codes::catalog::GameDataCatalog;
use crate::codes::character::Character;
use crate::codes::decoder::decode_legacy;
use crate::codes::modern::{decode_modern, inflate};
use crate::common::error::DecodeError;

/// Genotype letter, class letter, six attribute letters, then any
/// number of two-character tokens with an optional variant marker.
const LEGACY_PATTERN: &str =
    r"(?:^|\s)[AB][A-L][A-Z]{6}(?:[0-9A-Z][0-9A-Z](?:#\d)?)*";

/// At least 80 characters of base64 with optional padding. Real codes
/// are far longer; the floor filters out short incidental base64.
const MODERN_PATTERN: &str =
    r"(?:[A-Za-z0-9+/]{4}){20}(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?";

/// Result of scanning one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A build code was found and decoded.
    Decoded {
        character: Box<Character>,
        /// The matched code text, as found in the message.
        code: String,
    },
    /// Nothing in the message looked like a build code.
    NotRecognized,
    /// Something matched a code shape but would not decode.
    Malformed(DecodeError),
}

/// Scanner holding the compiled code patterns.
#[derive(Debug)]
pub struct CodeScanner {
    legacy: Regex,
    modern: Regex,
}

impl CodeScanner {
    pub fn new() -> Result<Self, fancy_regex::Error> {
        Ok(Self {
            legacy: Regex::new(LEGACY_PATTERN)?,
            modern: Regex::new(MODERN_PATTERN)?,
        })
    }

    /// Scan a message for a build code and decode the first one found.
    pub fn scan(&self, text: &str, catalog: &GameDataCatalog) -> DecodeOutcome {
        if let Some(candidate) = self.find_match(&self.legacy, text) {
            let code = candidate.trim();
            return match decode_legacy(code, catalog) {
                Ok(character) => DecodeOutcome::Decoded {
                    character: Box::new(character),
                    code: code.to_string(),
                },
                Err(error) => DecodeOutcome::Malformed(error),
            };
        }

        if let Some(candidate) = self.find_match(&self.modern, text) {
            // Base64 that does not gunzip is not a build code at all.
            let Some(json_text) = inflate(candidate) else {
                return DecodeOutcome::NotRecognized;
            };
            return match decode_modern(&json_text, catalog) {
                Ok(character) => DecodeOutcome::Decoded {
                    character: Box::new(character),
                    code: candidate.to_string(),
                },
                Err(error) => DecodeOutcome::Malformed(error),
            };
        }

        DecodeOutcome::NotRecognized
    }

    fn find_match<'t>(&self, regex: &Regex, text: &'t str) -> Option<&'t str> {
        match regex.find(text) {
            Ok(found) => found.map(|m| m.as_str()),
            Err(error) => {
                warn!("Code pattern match error: {error}");
                None
            }
        }
    }
}
