//! Artifact neutral del almacén.
//!
//! Un `Artifact` es la unidad persistida o intercambiada entre pasos del
//! pipeline. Es neutral: el almacén nunca interpreta su contenido.
//! - `payload` lleva el dato en una de tres formas: JSON genérico, bytes
//!   crudos, o un valor nativo de proceso (no serializable por construcción).
//! - `metadata` anota información auxiliar que no forma parte de la identidad
//!   del payload (ver `hashing`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::native::NativeValue;

/// Tipos neutrales de artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// JSON genérico sin semántica.
    GenericJson,
    /// Bytes crudos (el adaptador decide su interpretación).
    RawBytes,
    /// Valor nativo de proceso; nunca cruza un límite de proceso.
    NativeOnly,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::GenericJson => "GenericJson",
            ArtifactKind::RawBytes => "RawBytes",
            ArtifactKind::NativeOnly => "NativeOnly",
        }
    }
}

/// Contenido del artifact. La variante `Native` está excluida de serde:
/// serializarla falla, y ese fallo es exactamente lo que el sondeo de
/// transferencia (`arti-shared::transfer::dry_run`) detecta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Payload {
    Json(Value),
    Binary(Vec<u8>),
    #[serde(skip)]
    Native(Arc<dyn NativeValue>),
}

/// Artifact producido/consumido por pasos del pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub payload: Payload,
    pub metadata: Option<Value>, // información auxiliar (fuera de la identidad)
}

impl Artifact {
    /// Artifact JSON genérico.
    pub fn json(payload: Value) -> Self {
        Self { kind: ArtifactKind::GenericJson,
               payload: Payload::Json(payload),
               metadata: None }
    }

    /// Artifact de bytes crudos.
    pub fn bytes(bytes: Vec<u8>) -> Self {
        Self { kind: ArtifactKind::RawBytes,
               payload: Payload::Binary(bytes),
               metadata: None }
    }

    /// Artifact nativo de proceso (no transferible entre procesos).
    pub fn native(value: Arc<dyn NativeValue>) -> Self {
        Self { kind: ArtifactKind::NativeOnly,
               payload: Payload::Native(value),
               metadata: None }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Tipo declarado del artifact para diagnósticos: el tipo concreto del
    /// valor nativo cuando lo hay, el kind neutral en caso contrario.
    pub fn type_name(&self) -> &str {
        match &self.payload {
            Payload::Native(n) => n.type_name(),
            _ => self.kind.as_str(),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Binary(b) => Some(b),
            _ => None,
        }
    }
}
