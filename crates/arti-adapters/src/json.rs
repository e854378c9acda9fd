//! Adaptador JSON (serde_json).
//!
//! El archivo contiene el payload JSON tal cual, sin sobre adicional. Opción
//! reconocida en escritura: `pretty` (bool) para salida indentada.

use std::fs;
use std::path::Path;

use serde_json::Value;

use arti_core::{Artifact, DatasetError, Payload};

use crate::format::FormatAdapter;

#[derive(Debug, Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for JsonAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read(&self, path: &Path, _options: &Value) -> Result<Artifact, DatasetError> {
        let bytes = fs::read(path).map_err(|e| DatasetError::Io { path: path.to_path_buf(),
                                                                  source: e })?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| DatasetError::Format { adapter: self.name(),
                                                                                             detail: format!("undecodable payload at '{}': {e}", path.display()) })?;
        log::debug!("json adapter read {} bytes from {}", bytes.len(), path.display());
        Ok(Artifact::json(value))
    }

    fn write(&self, path: &Path, artifact: &Artifact, options: &Value) -> Result<(), DatasetError> {
        let payload = match &artifact.payload {
            Payload::Json(v) => v,
            other => {
                return Err(DatasetError::Format { adapter: self.name(),
                                                  detail: format!("expected a JSON payload, got {}",
                                                                  kind_label(other)) })
            }
        };
        let pretty = options.get("pretty").and_then(Value::as_bool).unwrap_or(false);
        let encoded = if pretty {
            serde_json::to_vec_pretty(payload)
        } else {
            serde_json::to_vec(payload)
        };
        let bytes = encoded.map_err(|e| DatasetError::Format { adapter: self.name(),
                                                               detail: format!("unencodable payload: {e}") })?;
        fs::write(path, &bytes).map_err(|e| DatasetError::Io { path: path.to_path_buf(),
                                                               source: e })?;
        log::debug!("json adapter wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

fn kind_label(payload: &Payload) -> &'static str {
    match payload {
        Payload::Json(_) => "Json",
        Payload::Binary(_) => "Binary",
        Payload::Native(_) => "Native",
    }
}
