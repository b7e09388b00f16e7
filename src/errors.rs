//! Unified application error type.
//! Every module (models, core, cli, config) returns AppError so that the
//! CLI has one place to report failures from.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid epidemiological week: {0} (expected 1-53)")]
    InvalidWeek(String),

    #[error("Invalid work modality: {0}")]
    InvalidModality(String),

    #[error("Invalid activity cycle: {0}")]
    InvalidCycle(String),

    // ---------------------------
    // Ingestion errors
    // ---------------------------
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unsupported import file: {0} (use .xlsx or .pdf)")]
    UnsupportedImport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
