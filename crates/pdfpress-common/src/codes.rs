//! Closed registry of error codes reported by the PDF pipeline.

use serde::{Deserialize, Serialize};

/// Failure conditions the PDF pipeline can report to the user.
///
/// The set is closed: every variant maps to exactly one translation key
/// (see [`message_key`](Self::message_key)) and one English default message
/// (the `Display` impl), so display code can always produce text even when
/// no resource bundle is available.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// Upload exceeds the configured size limit.
    #[error("The file is too large. The maximum supported size is 100 MB.")]
    FileTooLarge,

    /// Upload is not a PDF.
    #[error("This file type is not supported. Please upload a PDF file.")]
    InvalidFileType,

    /// Upload has no content.
    #[error("The file is empty. Please choose a file that contains data.")]
    EmptyFile,

    /// Document is encrypted and cannot be opened.
    #[error("This PDF is password protected. Remove the password and try again.")]
    PasswordProtected,

    /// Document failed to parse.
    #[error("The file appears to be damaged and could not be read.")]
    CorruptedFile,

    /// Document exceeds the page limit.
    #[error("This document has too many pages. The limit is 500 pages.")]
    TooManyPages,

    /// The pipeline failed mid-operation.
    #[error("Something went wrong while processing your file. Please try again.")]
    ProcessingFailed,

    /// Transfer was interrupted.
    #[error("A network error interrupted the transfer. Check your connection and try again.")]
    NetworkError,

    /// Operation exceeded its deadline and was cancelled.
    #[error("The operation took too long and was cancelled. Please try again.")]
    Timeout,

    /// Anything the pipeline could not classify.
    #[error("An unexpected error occurred. Please try again.")]
    Unknown,
}

const ALL_CODES: [ErrorCode; 10] = [
    ErrorCode::FileTooLarge,
    ErrorCode::InvalidFileType,
    ErrorCode::EmptyFile,
    ErrorCode::PasswordProtected,
    ErrorCode::CorruptedFile,
    ErrorCode::TooManyPages,
    ErrorCode::ProcessingFailed,
    ErrorCode::NetworkError,
    ErrorCode::Timeout,
    ErrorCode::Unknown,
];

impl ErrorCode {
    /// All codes in registry order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &ALL_CODES
    }

    /// The wire token for this code, as emitted by the pipeline and serde.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FileTooLarge => "fileTooLarge",
            Self::InvalidFileType => "invalidFileType",
            Self::EmptyFile => "emptyFile",
            Self::PasswordProtected => "passwordProtected",
            Self::CorruptedFile => "corruptedFile",
            Self::TooManyPages => "tooManyPages",
            Self::ProcessingFailed => "processingFailed",
            Self::NetworkError => "networkError",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    /// The translation key for this code under the `errors` namespace.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::FileTooLarge => "errors.fileTooLarge",
            Self::InvalidFileType => "errors.invalidFileType",
            Self::EmptyFile => "errors.emptyFile",
            Self::PasswordProtected => "errors.passwordProtected",
            Self::CorruptedFile => "errors.corruptedFile",
            Self::TooManyPages => "errors.tooManyPages",
            Self::ProcessingFailed => "errors.processingFailed",
            Self::NetworkError => "errors.networkError",
            Self::Timeout => "errors.timeout",
            Self::Unknown => "errors.unknown",
        }
    }

    /// The English message shown when no bundle resolves the translation key.
    ///
    /// Never empty and never the bare variant name.
    #[must_use]
    pub fn default_message(&self) -> String {
        self.to_string()
    }

    /// Parse a wire token back into a code. Exact match only.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fileTooLarge" => Some(Self::FileTooLarge),
            "invalidFileType" => Some(Self::InvalidFileType),
            "emptyFile" => Some(Self::EmptyFile),
            "passwordProtected" => Some(Self::PasswordProtected),
            "corruptedFile" => Some(Self::CorruptedFile),
            "tooManyPages" => Some(Self::TooManyPages),
            "processingFailed" => Some(Self::ProcessingFailed),
            "networkError" => Some(Self::NetworkError),
            "timeout" => Some(Self::Timeout),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Whether `code` is a member of the registry.
    #[must_use]
    pub fn is_valid_code(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}
