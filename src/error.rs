// src/error.rs
use std::path::PathBuf;
use std::process::ExitCode;

use string_calc_core::CalculatorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Short machine-friendly name used in JSON error output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Calculator(err) => err.kind(),
            Self::FileRead { .. } | Self::Stdin(_) => "io",
            Self::Encoding(_) => "encoding",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}
