//! Capacidad uniforme `Dataset`.
//!
//! Todo lo que el runtime del pipeline ve de un artifact lógico es este
//! contrato: cargar, guardar, comprobar existencia y describirse. Detrás
//! puede haber un archivo versionado, un slot en memoria o un contenedor
//! compartido entre workers; el llamador no distingue cuál.

pub mod memory;

pub use memory::MemoryDataset;

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::DatasetError;
use crate::model::Artifact;

/// Descripción de la configuración de un dataset. Mapa con orden de
/// inserción estable para que el mismo dataset se describa siempre igual.
pub type Describe = IndexMap<String, Value>;

/// Contrato uniforme de datasets. Las implementaciones no reintentan: todo
/// fallo se propaga al llamador con su contexto.
pub trait Dataset: Send + Sync {
    /// Carga el artifact actual.
    fn load(&self) -> Result<Artifact, DatasetError>;

    /// Persiste `artifact` en el backend del dataset.
    fn save(&self, artifact: Artifact) -> Result<(), DatasetError>;

    /// Indica si hay un artifact cargable en este momento.
    fn exists(&self) -> Result<bool, DatasetError>;

    /// Configuración relevante del dataset (vacía si no tiene ninguna).
    fn describe(&self) -> Describe;
}
