//! Dataset versionado ligado a formato.
//!
//! Composición, no herencia: un [`VersionedPath`] resuelve rutas y vigila la
//! consistencia escritura-lectura; un [`FormatAdapter`] materializa bytes.
//! El flujo de guardado es el del almacén versionado: resolver ruta de
//! escritura → crear directorios → escribir → comprobar que la carga por
//! defecto ve lo recién escrito.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use arti_core::{Artifact, Dataset, DatasetError, Describe, Version, VersionedPath};

use crate::format::FormatAdapter;

pub struct VersionedFileDataset {
    resolver: VersionedPath,
    adapter: Box<dyn FormatAdapter>,
    load_options: Value,
    save_options: Value,
}

impl VersionedFileDataset {
    /// Crea el dataset para la referencia lógica `base_path`, con el par de
    /// versiones opcional (ver [`Version`]).
    pub fn new(base_path: impl Into<std::path::PathBuf>,
               adapter: Box<dyn FormatAdapter>,
               version: Option<Version>)
               -> Result<Self, DatasetError> {
        Ok(Self { resolver: VersionedPath::new(base_path, version)?,
                  adapter,
                  load_options: json!({}),
                  save_options: json!({}) })
    }

    /// Opciones opacas para el adaptador; este dataset no define su
    /// semántica.
    pub fn with_options(mut self, load_options: Value, save_options: Value) -> Self {
        self.load_options = load_options;
        self.save_options = save_options;
        self
    }

    pub fn resolver(&self) -> &VersionedPath {
        &self.resolver
    }
}

impl Dataset for VersionedFileDataset {
    fn load(&self) -> Result<Artifact, DatasetError> {
        let load_path = self.resolver.resolve_load()?;
        log::debug!("loading '{}' from {}", self.resolver.filename(), load_path.display());
        self.adapter.read(&load_path, &self.load_options)
    }

    fn save(&self, artifact: Artifact) -> Result<(), DatasetError> {
        let save_path = self.resolver.resolve_save();
        if let Some(parent) = save_path.parent() {
            ensure_dir(parent)?;
        }
        self.adapter.write(&save_path, &artifact, &self.save_options)?;
        log::debug!("saved '{}' as version {}",
                    self.resolver.filename(),
                    self.resolver.save_version());
        // el guardado queda escrito aunque el chequeo falle; sólo la
        // garantía de lectura por defecto se reporta rota
        let load_path = self.resolver.resolve_load()?;
        self.resolver.check_consistency(&load_path, &save_path)
    }

    fn exists(&self) -> Result<bool, DatasetError> {
        match self.resolver.resolve_load() {
            Ok(path) => Ok(path.is_file()),
            Err(DatasetError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> Describe {
        let mut map = Describe::new();
        map.insert("base_path".into(), json!(self.resolver.base().display().to_string()));
        map.insert("adapter".into(), json!(self.adapter.name()));
        map.insert("load_version".into(), json!(self.resolver.load_pin()));
        map.insert("save_version".into(), json!(self.resolver.save_version_if_resolved()));
        map.insert("load_options".into(), self.load_options.clone());
        map.insert("save_options".into(), self.save_options.clone());
        map
    }
}

fn ensure_dir(parent: &Path) -> Result<(), DatasetError> {
    fs::create_dir_all(parent).map_err(|e| DatasetError::Io { path: parent.to_path_buf(),
                                                              source: e })
}
