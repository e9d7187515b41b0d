//! JSON artifact persistence

use crate::ArtifactError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Default file name of the trusted setup
pub const TRUSTED_SETUP_FILE: &str = "trusted_setup.json";
/// Default file name of a fixed-constant proof
pub const PROOF_FILE: &str = "proof.json";
/// Default file name of a proof bundle
pub const BUNDLE_FILE: &str = "bundle.json";

/// Reads a JSON file and deserializes it
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "artifact loaded");
    Ok(data)
}

/// Writes data to a JSON file, replacing any previous contents
pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<(), ArtifactError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::to_writer_pretty(BufWriter::new(file), data).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "artifact written");
    Ok(())
}
