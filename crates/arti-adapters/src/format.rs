//! Contrato de adaptadores de formato.
//!
//! Un adaptador es un par estrecho leer/escribir: el núcleo versionado nunca
//! inspecciona el contenido del artifact, sólo computa y valida rutas
//! alrededor de estas llamadas. Las `options` llegan opacas desde la
//! configuración del dataset; cada adaptador reconoce las suyas e ignora el
//! resto.

use std::path::Path;

use serde_json::Value;

use arti_core::{Artifact, DatasetError};

pub trait FormatAdapter: Send + Sync {
    /// Nombre estable del adaptador (aparece en `describe` y en errores).
    fn name(&self) -> &'static str;

    /// Lee el artifact almacenado en `path`.
    fn read(&self, path: &Path, options: &Value) -> Result<Artifact, DatasetError>;

    /// Escribe `artifact` en `path`.
    fn write(&self, path: &Path, artifact: &Artifact, options: &Value) -> Result<(), DatasetError>;
}
