//! Resolución de rutas versionadas y chequeo de consistencia
//! escritura-lectura.
//!
//! Una referencia lógica `…/thing` se materializa como
//! `…/thing/<timestamp>/thing`. Las rutas de carga y de guardado se derivan
//! de forma independiente a partir del par de versiones; el chequeo
//! post-guardado detecta escritores concurrentes cuando la carga por defecto
//! ya no apunta a lo recién escrito. Detecta la carrera, no la resuelve:
//! quien necesite orden entre escritores debe fijar versiones explícitas.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::errors::DatasetError;

use super::{generate_timestamp, Version};

/// Resolutor de rutas para un artifact lógico versionado.
///
/// Inmutable una vez fijadas o generadas las versiones: la versión de
/// guardado se resuelve una única vez por handle (`OnceCell`), de modo que
/// guardados repetidos desde el mismo handle caen siempre en el mismo
/// directorio de versión.
#[derive(Debug)]
pub struct VersionedPath {
    base: PathBuf,
    filename: String,
    load_pin: Option<String>,
    save_slot: OnceCell<String>,
}

impl VersionedPath {
    /// Crea el resolutor para `base`. El nombre de archivo dentro de cada
    /// directorio de versión es el componente final de `base`.
    pub fn new(base: impl Into<PathBuf>, version: Option<Version>) -> Result<Self, DatasetError> {
        let base = base.into();
        let filename = base.file_name()
                           .and_then(|n| n.to_str())
                           .map(str::to_string)
                           .ok_or_else(|| DatasetError::InvalidReference(base.display().to_string()))?;
        let version = version.unwrap_or_default();
        let save_slot = match version.save {
            Some(v) => OnceCell::with_value(v),
            None => OnceCell::new(),
        };
        Ok(Self { base,
                  filename,
                  load_pin: version.load,
                  save_slot })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Versión de carga fijada, si la hay.
    pub fn load_pin(&self) -> Option<&str> {
        self.load_pin.as_deref()
    }

    pub fn load_pinned(&self) -> bool {
        self.load_pin.is_some()
    }

    /// Ruta física de una versión concreta: `base/<version>/<filename>`.
    pub fn path_for(&self, version: &str) -> PathBuf {
        self.base.join(version).join(&self.filename)
    }

    /// Versión de guardado del handle. Se resuelve una única vez: o la
    /// versión explícita recibida en la construcción, o un timestamp fresco
    /// generado en el primer uso y cacheado para el resto de la vida del
    /// handle.
    pub fn save_version(&self) -> &str {
        self.save_slot.get_or_init(generate_timestamp)
    }

    /// Versión de guardado sólo si ya fue resuelta (no fuerza generación).
    pub fn save_version_if_resolved(&self) -> Option<&str> {
        self.save_slot.get().map(String::as_str)
    }

    /// Ruta de escritura. No comprueba contenido existente: reescribir
    /// dentro de la misma versión es decisión del llamador; cruzar versiones
    /// nunca pisa el directorio de otra.
    pub fn resolve_save(&self) -> PathBuf {
        self.path_for(self.save_version())
    }

    /// Ruta de lectura. Con versión fijada resuelve exactamente esa versión
    /// (su ausencia es `NotFound`, nunca "usar la última"); sin fijar,
    /// resuelve la versión existente más reciente bajo `base`.
    pub fn resolve_load(&self) -> Result<PathBuf, DatasetError> {
        match &self.load_pin {
            Some(pin) => {
                let path = self.path_for(pin);
                if path.is_file() {
                    Ok(path)
                } else {
                    Err(DatasetError::NotFound(path.display().to_string()))
                }
            }
            None => {
                let latest = self.latest_version()?;
                Ok(self.path_for(&latest))
            }
        }
    }

    /// Enumera los directorios de versión bajo `base` que contienen el
    /// artifact y devuelve el máximo lexicográfico (== más reciente, por el
    /// formato de ancho fijo). Determinista para un listado dado.
    fn latest_version(&self) -> Result<String, DatasetError> {
        let entries = fs::read_dir(&self.base).map_err(|e| self.map_listing_error(e))?;
        let mut latest: Option<String> = None;
        for entry in entries {
            let entry = entry.map_err(|e| DatasetError::Io { path: self.base.clone(),
                                                             source: e })?;
            let version_dir = entry.path();
            if !version_dir.is_dir() || !version_dir.join(&self.filename).is_file() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(n) => n,
                Err(_) => continue,
            };
            if latest.as_deref().map_or(true, |current| name.as_str() > current) {
                latest = Some(name);
            }
        }
        latest.ok_or_else(|| DatasetError::NotFound(self.base.display().to_string()))
    }

    fn map_listing_error(&self, err: io::Error) -> DatasetError {
        if err.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound(self.base.display().to_string())
        } else {
            DatasetError::Io { path: self.base.clone(),
                               source: err }
        }
    }

    /// Chequeo de consistencia escritura-lectura, invocado tras un guardado.
    /// Con versión de carga fijada se omite incondicionalmente (las lecturas
    /// fijadas pueden divergir del último guardado a propósito). Ambos lados
    /// se canonicalizan antes de comparar para no dar falsos positivos con
    /// symlinks o segmentos relativos.
    pub fn check_consistency(&self, load_path: &Path, save_path: &Path) -> Result<(), DatasetError> {
        if self.load_pinned() {
            return Ok(());
        }
        if canonical(load_path) != canonical(save_path) {
            return Err(DatasetError::Consistency { save_path: save_path.display().to_string(),
                                                   load_path: load_path.display().to_string() });
        }
        Ok(())
    }
}

// Canonicaliza si la ruta existe; cae a la forma léxica si no.
fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
