//! Adaptador de bytes crudos.
//!
//! Persiste payloads `Binary` byte a byte. No reconoce opciones.

use std::fs;
use std::path::Path;

use serde_json::Value;

use arti_core::{Artifact, DatasetError, Payload};

use crate::format::FormatAdapter;

#[derive(Debug, Default)]
pub struct RawBytesAdapter;

impl RawBytesAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for RawBytesAdapter {
    fn name(&self) -> &'static str {
        "raw-bytes"
    }

    fn read(&self, path: &Path, _options: &Value) -> Result<Artifact, DatasetError> {
        let bytes = fs::read(path).map_err(|e| DatasetError::Io { path: path.to_path_buf(),
                                                                  source: e })?;
        Ok(Artifact::bytes(bytes))
    }

    fn write(&self, path: &Path, artifact: &Artifact, _options: &Value) -> Result<(), DatasetError> {
        let bytes = artifact.as_bytes().ok_or_else(|| DatasetError::Format { adapter: self.name(),
                                                                             detail: format!("expected a Binary payload, got {}",
                                                                                             artifact.type_name()) })?;
        fs::write(path, bytes).map_err(|e| DatasetError::Io { path: path.to_path_buf(),
                                                              source: e })
    }
}
