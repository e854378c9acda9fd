//! arti-adapters: formatos concretos y dataset versionado en disco.
//!
//! Módulos:
//! - `format`: contrato estrecho leer/escribir que implementa cada formato.
//! - `json` / `raw`: adaptadores concretos (serde_json y bytes crudos).
//! - `dataset`: `VersionedFileDataset`, composición resolutor + adaptador.
//! - `config`: raíz de datos desde variables de entorno (.env).

pub mod config;
pub mod dataset;
pub mod format;
pub mod json;
pub mod raw;

pub use config::DataRootConfig;
pub use dataset::VersionedFileDataset;
pub use format::FormatAdapter;
pub use json::JsonAdapter;
pub use raw::RawBytesAdapter;
