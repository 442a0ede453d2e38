//! Error types for JSON-LD document building

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonLdError {
    #[error("Duplicate anonymous subject: a resource without a subject is already registered")]
    DuplicateAnonymousSubject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
