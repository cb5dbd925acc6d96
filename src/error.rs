use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Scrapey
#[derive(Error, Debug)]
pub enum ScrapeyError {
    #[error("Config file {} does not exist\n\nTroubleshooting:\n- Check the path passed with --config\n- The default location is configs/default.json relative to the working directory", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}\n\nTroubleshooting:\n- Check file permissions\n- Make sure the path points to a regular file", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file {}: {source}\n\nTroubleshooting:\n- Validate the file with a JSON linter\n- See configs/default.json for the expected layout", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unknown storage format: {0}. Must be one of json, xml, excel, mongodb, mysql")]
    UnknownStorageFormat(String),
}

/// Fetch-specific errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}\n\nTroubleshooting:\n- Check internet connection\n- Verify the base URL and routes in config")]
    Request(String),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {0} timed out")]
    Timeout(String),
}

pub type Result<T> = std::result::Result<T, ScrapeyError>;
