//! Error types for the application.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Game-data table loading errors. Fatal at startup, never recovered.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read game data file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse game data: {message}")]
    ParseError { message: String },

    #[error("Game data validation failed: {message}")]
    ValidationError { message: String },
}

/// A catalog lookup miss. Always carries the offending token so the
/// caller can report exactly what failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {table} code '{token}'")]
pub struct LookupError {
    pub table: &'static str,
    pub token: String,
}

/// Build-code decoding errors. A code that raised one of these was
/// recognized as code-shaped but failed internal decode; this is
/// distinct from ordinary chat text that merely resembles a code,
/// which is not an error at all (see `DecodeOutcome::NotRecognized`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("build code too short: {length} characters (need at least 8)")]
    TooShort { length: usize },

    #[error("unknown genotype code '{code}'")]
    UnknownGenotype { code: char },

    #[error("unknown {genotype} class code '{code}'")]
    UnknownClass {
        genotype: &'static str,
        code: char,
    },

    #[error("unknown mod token '{token}' at position {position}")]
    UnknownModToken { token: String, position: usize },

    #[error("dangling character '{character}' at position {position}")]
    DanglingCharacter { character: char, position: usize },

    #[error("variant marker at position {position} has no preceding mod token")]
    VariantWithoutMod { position: usize },

    #[error("variant marker at position {position} but this game data has no variant tables")]
    VariantsUnsupported { position: usize },

    #[error("mod token '{token}' has no variant {index}")]
    UnknownVariant { token: String, index: u32 },

    #[error("unknown genotype '{name}'")]
    UnknownGenotypeName { name: String },

    #[error("unknown subtype '{name}'")]
    UnknownClassName { name: String },

    #[error("unknown attribute '{name}'")]
    UnknownStat { name: String },

    #[error("build payload has no {module} module")]
    MissingModule { module: &'static str },

    #[error("invalid build payload: {message}")]
    InvalidPayload { message: String },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
