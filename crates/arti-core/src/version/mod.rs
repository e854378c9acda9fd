//! Identidad versionada de artifacts.
//!
//! Cada escritura de un artifact lógico queda calificada por un timestamp
//! UTC que se inserta como segmento de ruta. Un `Version` fija (o deja
//! abierta) la versión de lectura y la de escritura por separado; la
//! resolución a rutas concretas vive en [`VersionedPath`].

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::VERSION_FORMAT;

pub mod path;

pub use path::VersionedPath;

/// Par de versiones opcionales de un handle.
/// - `load` fijada: la lectura resuelve exactamente esa versión o falla.
/// - `load` abierta: la lectura resuelve la versión existente más reciente.
/// - `save` abierta: se genera un timestamp una única vez, en el primer uso,
///   y se reutiliza durante toda la vida del handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub load: Option<String>,
    pub save: Option<String>,
}

impl Version {
    pub fn new(load: Option<String>, save: Option<String>) -> Self {
        Self { load, save }
    }

    /// Lectura fijada a una versión exacta; escritura abierta.
    pub fn pinned_load(load: impl Into<String>) -> Self {
        Self { load: Some(load.into()),
               save: None }
    }

    /// Escritura fijada; lectura abierta (resuelve la más reciente).
    pub fn pinned_save(save: impl Into<String>) -> Self {
        Self { load: None,
               save: Some(save.into()) }
    }
}

// Último timestamp emitido por este proceso. La guardia garantiza emisión
// estrictamente creciente aunque dos handles pidan versión en el mismo
// milisegundo.
static LAST_EMITTED: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Genera un timestamp de versión UTC estrictamente creciente dentro del
/// proceso. Precisión de milisegundos; ancho fijo, por lo que el orden
/// lexicográfico de los segmentos coincide con el cronológico.
pub fn generate_timestamp() -> String {
    let mut last = LAST_EMITTED.lock().unwrap_or_else(|e| e.into_inner());
    loop {
        let candidate = Utc::now().format(VERSION_FORMAT).to_string();
        if candidate > *last {
            last.clear();
            last.push_str(&candidate);
            return candidate;
        }
        // mismo milisegundo que la emisión anterior: esperar al siguiente tick
        thread::sleep(Duration::from_millis(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_strictly_increasing() {
        let mut prev = generate_timestamp();
        for _ in 0..20 {
            let next = generate_timestamp();
            assert!(next > prev, "{next} should sort after {prev}");
            prev = next;
        }
    }

    #[test]
    fn timestamp_has_path_safe_fixed_width() {
        let ts = generate_timestamp();
        assert_eq!(ts.len(), "2026-08-06T12.34.56.789Z".len());
        assert!(!ts.contains(':'));
        assert!(ts.ends_with('Z'));
    }
}
