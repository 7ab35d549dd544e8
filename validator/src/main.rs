// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A configuration validator. The validator expects an `FRRConfiguration` CRD in JSON or YAML
//! from stdin (or a file) and compiles it into the configuration that would be handed to the
//! FRR renderer. It produces a result as a YAML string in stdout, with the resolved
//! configuration on success.

#![deny(clippy::all)]

mod cmdline;

use std::io::{self, Read};

use clap::Parser;
use config::Config;
use k8s_intf::frr_configuration_crd::{FRRConfiguration, FRRK8S_API_GROUP, FRRK8S_API_VERSION};
use k8s_intf::utils::{LoadCrdError, load_crd_from_file, load_crd_from_str, load_from_file};
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cmdline::Cmdline;

/// The type representing an error when validating a request
#[derive(Debug)]
enum ValidateError {
    /// This type contains errors that may occur when using this tool.
    EnvironmentError(String),

    /// This type contains errors that may occur when deserializing from JSON or YAML.
    /// If the inputs are machine-generated, these should not occur.
    DeserializeError(String),

    /// This type contains errors that may occur if the type metadata is missing or wrong.
    MetadataError(String),

    /// This type contains errors that may occur when compiling the CRD into an FRR configuration:
    /// malformed addresses or prefixes, or communities requested for prefixes that are not
    /// advertised. The user is responsible for these.
    ConversionError(String),
}
impl ValidateError {
    /// Provide a string indicating the type of error
    fn get_type(&self) -> &str {
        match self {
            ValidateError::EnvironmentError(_) => "Environment",
            ValidateError::DeserializeError(_) => "Deserialization",
            ValidateError::MetadataError(_) => "Metadata",
            ValidateError::ConversionError(_) => "Conversion",
        }
    }

    fn get_msg(&self) -> &str {
        match self {
            ValidateError::EnvironmentError(v)
            | ValidateError::DeserializeError(v)
            | ValidateError::MetadataError(v)
            | ValidateError::ConversionError(v) => v,
        }
    }
}

impl From<&ValidateError> for ValidateReply {
    fn from(value: &ValidateError) -> Self {
        ValidateReply {
            success: false,
            errors: vec![ValidateErrorOut {
                r#type: value.get_type().to_owned(),
                message: value.get_msg().to_owned(),
            }],
            config: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ValidateErrorOut {
    r#type: String,
    message: String,
}

/// The type representing the outcome of a validation request
#[derive(Debug, Serialize)]
struct ValidateReply {
    success: bool,
    errors: Vec<ValidateErrorOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<Config>,
}
impl ValidateReply {
    fn success(config: Config) -> Self {
        Self {
            success: true,
            errors: vec![],
            config: Some(config),
        }
    }
}

/// Check that the object is an `FRRConfiguration` of a version we understand
fn check_type_meta(meta: &TypeMeta) -> Result<(), ValidateError> {
    let expected = format!("{FRRK8S_API_GROUP}/{FRRK8S_API_VERSION}");
    if meta.api_version != expected {
        return Err(ValidateError::MetadataError(format!(
            "Invalid apiVersion {}, expected {expected}",
            meta.api_version
        )));
    }
    if meta.kind != "FRRConfiguration" {
        return Err(ValidateError::MetadataError(format!(
            "Invalid kind {}",
            meta.kind
        )));
    }
    Ok(())
}

fn validate_type_meta(input: &str) -> Result<(), ValidateError> {
    let meta = serde_yaml_ng::from_str::<TypeMeta>(input)
        .map_err(|e| ValidateError::MetadataError(format!("Missing type metadata: {e}")))?;
    check_type_meta(&meta)
}

fn validate_file_type_meta(path: &str) -> Result<(), ValidateError> {
    let meta = load_from_file::<TypeMeta>(path).map_err(|e| match e {
        LoadCrdError::Yaml(_) | LoadCrdError::Json(_) => {
            ValidateError::MetadataError(format!("Missing type metadata: {e}"))
        }
        _ => ValidateError::EnvironmentError(e.to_string()),
    })?;
    check_type_meta(&meta)
}

/// Compile a deserialized CRD
fn compile(crd: &FRRConfiguration) -> Result<Config, ValidateError> {
    Config::try_from(crd).map_err(|e| ValidateError::ConversionError(e.to_string()))
}

/// Main validation function
fn validate(input: &str) -> Result<Config, ValidateError> {
    validate_type_meta(input)?;
    let crd = load_crd_from_str(input).map_err(|e| ValidateError::DeserializeError(e.to_string()))?;
    compile(&crd)
}

/// Read from stdin and validate
fn validate_from_stdin() -> Result<Config, ValidateError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| ValidateError::EnvironmentError(format!("Failed to read from stdin: {e}")))?;

    validate(&input)
}

/// Read the file at `path` and validate
fn validate_from_file(path: &str) -> Result<Config, ValidateError> {
    validate_file_type_meta(path)?;
    let crd = load_crd_from_file(path).map_err(|e| ValidateError::DeserializeError(e.to_string()))?;
    compile(&crd)
}

/// Build a validation reply to be output as YAML
fn build_reply(result: Result<Config, ValidateError>) -> ValidateReply {
    match result {
        Ok(config) => ValidateReply::success(config),
        Err(e) => {
            info!("Validation failed: {}", e.get_msg());
            ValidateReply::from(&e)
        }
    }
}

fn main() {
    let args = Cmdline::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .init();

    let result = match args.file.as_deref() {
        Some(path) => {
            debug!("Validating FRRConfiguration from file {path}");
            validate_from_file(path)
        }
        None => validate_from_stdin(),
    };
    let reply = build_reply(result);
    match serde_yaml_ng::to_string(&reply) {
        Ok(out) => println!("{out}"),
        Err(e) => eprintln!("Failure serializing validation response: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID: &str = r"
apiVersion: frrk8s.metallb.io/v1beta1
kind: FRRConfiguration
metadata:
  name: test
spec:
  bgp:
    routers:
    - asn: 64512
      prefixes: [192.0.2.0/24, 2001:db8::/64]
      neighbors:
      - asn: 64513
        address: 192.0.2.2
        toAdvertise:
          allowed:
            mode: all
          withCommunity:
          - prefixes: [2001:db8::/64]
            community: large:1:2:3
";

    #[test]
    fn test_validate_success() {
        let config = validate(VALID).unwrap();
        let neighbor = &config.routers[0].neighbors[0];
        assert_eq!(neighbor.name, "64513@192.0.2.2");
        assert_eq!(neighbor.port, 179);
        assert_eq!(
            neighbor.outgoing.prefixes_v6[0].large_communities,
            vec!["1:2:3".to_string()]
        );

        let reply = build_reply(Ok(config));
        let out = serde_yaml_ng::to_string(&reply).unwrap();
        assert!(out.contains("success: true"));
        assert!(out.contains("largeCommunities:"));
    }

    #[test]
    fn test_validate_policy_violation() {
        let input = VALID.replace("mode: all", "mode: filtered");
        let err = validate(&input).unwrap_err();
        assert_eq!(err.get_type(), "Conversion");
        assert_eq!(
            err.get_msg(),
            "prefix 2001:db8::/64 with community large:1:2:3 not in allowed list for neighbor 192.0.2.2"
        );

        let reply = build_reply(Err(err));
        assert!(!reply.success);
        assert!(reply.config.is_none());
        assert_eq!(reply.errors.len(), 1);
        assert_eq!(reply.errors[0].r#type, "Conversion");
    }

    #[test]
    fn test_validate_metadata() {
        let err = validate(&VALID.replace("v1beta1", "v1")).unwrap_err();
        assert_eq!(err.get_type(), "Metadata");

        let err = validate(&VALID.replace("kind: FRRConfiguration", "kind: Other")).unwrap_err();
        assert_eq!(err.get_type(), "Metadata");

        let err = validate("spec: {}").unwrap_err();
        assert_eq!(err.get_type(), "Metadata");
    }

    fn write_temp(name: &str, contents: &str) -> String {
        let name = format!("frrk8s-validator-{}-{name}", std::process::id());
        let path = std::env::temp_dir().join(name);
        let path = path.to_string_lossy().into_owned();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validate_from_file() {
        let path = write_temp("valid.yaml", VALID);
        let result = validate_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap().routers[0].neighbors[0].name, "64513@192.0.2.2");
    }

    #[test]
    fn test_validate_from_file_checks_metadata() {
        let wrong_kind = "apiVersion: example.com/v9\nkind: SomethingElse\nspec: {}\n";
        let path = write_temp("wrong-kind.yaml", wrong_kind);
        let err = validate_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.get_type(), "Metadata");
        // same verdict as for the same text on stdin
        assert_eq!(validate(wrong_kind).unwrap_err().get_type(), "Metadata");

        let path = write_temp("no-meta.json", r#"{"spec": {}}"#);
        let err = validate_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.get_type(), "Metadata");

        let err = validate_from_file("/nonexistent/frr.yaml").unwrap_err();
        assert_eq!(err.get_type(), "Environment");
    }

    #[test]
    fn test_validate_deserialize_error() {
        let err = validate(&VALID.replace("asn: 64513", "asn: not-a-number")).unwrap_err();
        assert_eq!(err.get_type(), "Deserialization");
    }

    #[test]
    fn test_validate_malformed_address() {
        let err = validate(&VALID.replace("192.0.2.2", "192.0.2")).unwrap_err();
        assert_eq!(err.get_type(), "Conversion");
        assert!(err.get_msg().contains("192.0.2"));
    }
}
