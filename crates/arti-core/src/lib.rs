//! arti-core: núcleo neutral del almacén de artifacts versionado.
//!
//! Este crate define el contrato uniforme `Dataset` (load/save/exists/
//! describe), el `Artifact` neutral que circula por el pipeline, y la
//! resolución de rutas versionadas con su chequeo de consistencia
//! escritura-lectura. No conoce formatos concretos ni transportes: esos
//! viven en `arti-adapters` y `arti-shared`.

pub mod constants;
pub mod dataset;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod version;

pub use dataset::{Dataset, Describe, MemoryDataset};
pub use errors::DatasetError;
pub use model::{Artifact, ArtifactKind, NativeValue, Payload};
pub use version::{generate_timestamp, Version, VersionedPath};
