// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Utils to build an `FRRConfiguration` from JSON / YAML text.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::frr_configuration_crd::FRRConfiguration;

#[derive(Debug, thiserror::Error)]
pub enum LoadCrdError {
    #[error("Failed to read CRD from file ({0}): {1}")]
    Io(String, std::io::Error),
    #[error("Failed to deserialize CRD from YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("Failed to deserialize CRD from JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported file extension {0}")]
    UnsupportedExtension(String),
    #[error("Missing file extension")]
    MissingExtension,
}

/// Deserialize an `FRRConfiguration` from a string holding YAML. Since JSON is a subset of
/// YAML, this also accepts JSON input.
///
/// # Errors
/// Fails if the text cannot be deserialized.
pub fn load_crd_from_str(text: &str) -> Result<FRRConfiguration, LoadCrdError> {
    Ok(serde_yaml_ng::from_str(text)?)
}

fn read(path: &str) -> Result<String, LoadCrdError> {
    fs::read_to_string(path).map_err(|e| LoadCrdError::Io(path.to_string(), e))
}

/// Read the file at `path` and deserialize its contents into a `T`, which may be a whole object
/// or a part of it such as its `TypeMeta`. The file is assumed to contain JSON or YAML, as told
/// by its extension.
///
/// # Errors
/// This function may fail if the file does not exist or cannot be read, or if the contents
/// cannot be deserialized.
pub fn load_from_file<T: DeserializeOwned>(path: &str) -> Result<T, LoadCrdError> {
    let ext = Path::new(path).extension();
    let value = match ext {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            serde_yaml_ng::from_str(&read(path)?)?
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::from_str(&read(path)?)?,
        Some(ext) => {
            return Err(LoadCrdError::UnsupportedExtension(
                ext.to_string_lossy().into_owned(),
            ));
        }
        None => return Err(LoadCrdError::MissingExtension),
    };
    Ok(value)
}

/// Read the file at `path` and deserialize into an `FRRConfiguration` object.
///
/// # Errors
/// Same as [`load_from_file`].
pub fn load_crd_from_file(path: &str) -> Result<FRRConfiguration, LoadCrdError> {
    let crd = load_from_file(path)?;
    debug!("Loaded FRRConfiguration from {path}");
    Ok(crd)
}
