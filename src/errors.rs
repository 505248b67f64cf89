//! Unified application error type.
//! Every module (config, core, export, cli) returns AppError so the CLI can
//! report failures consistently and pick the right exit code.

use std::io;
use thiserror::Error;

/// Whether a failure was caused by the submitted data or by the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    ClientError,
    ServerError,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown day: {0}")]
    InvalidDay(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Operation errors
    // ---------------------------
    #[error("Timetable generation failed: {0}")]
    Generation(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("{0} is not available in this build; reinstall with `--features xlsx` to enable it")]
    CapabilityMissing(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),
}

impl AppError {
    /// Collapses any failure raised while generating into the flat
    /// request-level error, keeping only its message.
    pub fn generation(err: AppError) -> AppError {
        match err {
            AppError::Generation(_) => err,
            other => AppError::Generation(other.to_string()),
        }
    }

    pub fn export<E: std::fmt::Display>(err: E) -> AppError {
        AppError::Export(err.to_string())
    }

    pub fn status(&self) -> ErrorStatus {
        match self {
            AppError::Generation(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidDay(_)
            | AppError::InvalidInput(_)
            | AppError::InvalidExportFormat(_)
            | AppError::Json(_)
            | AppError::Yaml(_) => ErrorStatus::ClientError,
            _ => ErrorStatus::ServerError,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.status() {
            ErrorStatus::ClientError => 2,
            ErrorStatus::ServerError => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
