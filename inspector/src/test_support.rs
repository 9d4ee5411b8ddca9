//! Test-only helpers for building records and link fixtures.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::error::InspectError;
use crate::io::link_store::RecordSource;
use crate::record::Record;

/// Create a record with optional streams and no step name.
pub fn record(stdout: Option<&str>, stderr: Option<&str>, exit_code: i64) -> Record {
    let mut byproducts = BTreeMap::new();
    if let Some(stdout) = stdout {
        byproducts.insert("stdout".to_string(), stdout.to_string());
    }
    if let Some(stderr) = stderr {
        byproducts.insert("stderr".to_string(), stderr.to_string());
    }
    Record {
        name: None,
        byproducts,
        exit_code,
    }
}

/// `stdout = "build OK"`, `stderr = ""`, exit code `0`, step `build`.
pub fn build_ok_record() -> Record {
    Record {
        name: Some("build".to_string()),
        ..record(Some("build OK"), Some(""), 0)
    }
}

/// Serialize `record` as a signed in-toto link envelope.
pub fn link_json(record: &Record) -> String {
    let mut byproducts = Map::new();
    for (stream, text) in &record.byproducts {
        byproducts.insert(stream.clone(), Value::String(text.clone()));
    }
    byproducts.insert("return-value".to_string(), json!(record.exit_code));

    let mut signed = json!({
        "_type": "link",
        "command": ["make", "build"],
        "materials": {},
        "products": {},
        "environment": {},
        "byproducts": byproducts,
    });
    if let Some(name) = &record.name {
        signed["name"] = json!(name);
    }
    let envelope = json!({
        "signatures": [{"keyid": "0123abcd", "sig": "00"}],
        "signed": signed,
    });
    let mut buf = serde_json::to_string_pretty(&envelope).expect("serialize link");
    buf.push('\n');
    buf
}

/// Temporary directory holding link fixtures.
pub struct LinkDir {
    dir: tempfile::TempDir,
}

impl LinkDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create link tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_link(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn write_record(&self, name: &str, record: &Record) -> Result<PathBuf> {
        self.write_link(name, &link_json(record))
    }
}

/// In-memory source returning a fixed result and counting loads.
pub struct StaticSource {
    result: Result<Record, InspectError>,
    loads: Cell<u32>,
}

impl StaticSource {
    pub fn ok(record: Record) -> Self {
        Self {
            result: Ok(record),
            loads: Cell::new(0),
        }
    }

    pub fn err(err: InspectError) -> Self {
        Self {
            result: Err(err),
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> u32 {
        self.loads.get()
    }
}

impl RecordSource for StaticSource {
    fn load(&self, _locator: &Path) -> Result<Record, InspectError> {
        self.loads.set(self.loads.get() + 1);
        self.result.clone()
    }
}
