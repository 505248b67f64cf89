pub mod build;
pub mod config;
pub mod export;
pub mod generate;
pub mod init;
pub mod show;

use crate::core::generate::{GenerateOutcome, generate};
use crate::errors::AppResult;
use crate::models::TimetableRequest;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_yaml};
use serde::de::DeserializeOwned;
use std::fs;

/// Reads a JSON or YAML document, picked by file extension.
pub(crate) fn read_document<T: DeserializeOwned>(file: &str) -> AppResult<T> {
    let path = expand_tilde(file);
    let content = fs::read_to_string(&path)?;

    if is_yaml(&path) {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Loads and generates a request, reporting notices when `verbose`.
pub(crate) fn generate_from_file(file: &str, verbose: bool) -> AppResult<GenerateOutcome> {
    let request: TimetableRequest = read_document(file)?;
    let outcome = generate(&request)?;

    if verbose {
        for notice in &outcome.notices {
            warning(notice);
        }
    }

    Ok(outcome)
}
