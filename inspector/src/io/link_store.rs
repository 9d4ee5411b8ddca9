//! Link loading: bounded read, schema check, and projection into a [`Record`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Read};
use std::path::Path;

use jsonschema::validator_for;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::types::FieldSelector;
use crate::error::InspectError;
use crate::io::config::InspectConfig;
use crate::record::Record;

const LINK_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/link/v1.schema.json"
));

/// Anything that can turn a locator into a loaded record.
pub trait RecordSource {
    fn load(&self, locator: &Path) -> Result<Record, InspectError>;
}

/// Reads in-toto link files from disk.
///
/// Accepts both signed envelopes (`{"signed": {...}, "signatures": [...]}`)
/// and bare link bodies. Signatures are not verified.
#[derive(Debug, Clone)]
pub struct LinkFileSource {
    max_record_bytes: u64,
}

impl LinkFileSource {
    pub fn new(max_record_bytes: u64) -> Self {
        Self { max_record_bytes }
    }

    pub fn from_config(config: &InspectConfig) -> Self {
        Self::new(config.max_record_bytes)
    }
}

impl RecordSource for LinkFileSource {
    fn load(&self, locator: &Path) -> Result<Record, InspectError> {
        debug!(path = %locator.display(), limit = self.max_record_bytes, "loading link");
        let contents = read_bounded(locator, self.max_record_bytes)?;
        let record = parse_link(locator, &contents)?;
        debug!(
            name = ?record.name,
            exit_code = record.exit_code,
            streams = ?record.byproducts.keys().collect::<Vec<_>>(),
            "link loaded"
        );
        Ok(record)
    }
}

#[derive(Debug, Deserialize)]
struct LinkBody {
    name: Option<String>,
    #[serde(default)]
    byproducts: LinkByproducts,
    /// Pre-1.0 links stored the exit code next to the byproducts.
    return_value: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct LinkByproducts {
    stdout: Option<String>,
    stderr: Option<String>,
    #[serde(rename = "return-value")]
    return_value: Option<i64>,
}

/// Parse link JSON into a [`Record`]. `path` is only used in error messages.
pub fn parse_link(path: &Path, contents: &str) -> Result<Record, InspectError> {
    let value: Value = serde_json::from_str(contents)
        .map_err(|err| InspectError::malformed(path, format!("parse json: {err}")))?;
    validate_schema(path, &value)?;

    let body = match value.get("signed") {
        Some(signed) => signed.clone(),
        None => value,
    };
    let link: LinkBody = serde_json::from_value(body)
        .map_err(|err| InspectError::malformed(path, format!("deserialize link: {err}")))?;

    let exit_code = link
        .byproducts
        .return_value
        .or(link.return_value)
        .ok_or_else(|| InspectError::malformed(path, "link records no return value"))?;

    let mut byproducts = BTreeMap::new();
    if let Some(stdout) = link.byproducts.stdout {
        byproducts.insert(FieldSelector::Stdout.as_str().to_string(), stdout);
    }
    if let Some(stderr) = link.byproducts.stderr {
        byproducts.insert(FieldSelector::Stderr.as_str().to_string(), stderr);
    }

    Ok(Record {
        name: link.name,
        byproducts,
        exit_code,
    })
}

fn read_bounded(path: &Path, limit: u64) -> Result<String, InspectError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == IoErrorKind::NotFound => {
            return Err(InspectError::RecordNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(InspectError::malformed(path, format!("open: {err}"))),
    };
    let metadata = file
        .metadata()
        .map_err(|err| InspectError::malformed(path, format!("stat: {err}")))?;
    if !metadata.is_file() {
        return Err(InspectError::RecordNotFound {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() > limit {
        return Err(oversized(path, metadata.len(), limit));
    }

    let mut contents = String::new();
    file.take(limit.saturating_add(1))
        .read_to_string(&mut contents)
        .map_err(|err| InspectError::malformed(path, format!("read: {err}")))?;
    // The file may have grown between stat and read.
    if contents.len() as u64 > limit {
        return Err(oversized(path, contents.len() as u64, limit));
    }
    Ok(contents)
}

fn oversized(path: &Path, size: u64, limit: u64) -> InspectError {
    InspectError::malformed(path, format!("size {size} exceeds limit of {limit} bytes"))
}

fn validate_schema(path: &Path, link: &Value) -> Result<(), InspectError> {
    let schema: Value = serde_json::from_str(LINK_SCHEMA)
        .map_err(|err| InspectError::malformed(path, format!("parse link schema: {err}")))?;
    let validator = validator_for(&schema)
        .map_err(|err| InspectError::malformed(path, format!("invalid link schema: {err}")))?;
    let messages: Vec<String> = validator
        .iter_errors(link)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(InspectError::malformed(
            path,
            format!("schema validation failed: {}", messages.join("; ")),
        ));
    }
    Ok(())
}
