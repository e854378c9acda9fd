//! Constantes del núcleo de IO.
//!
//! `VERSION_FORMAT` participa en la identidad física de cada versión: el
//! timestamp se inserta como segmento de ruta, así que el formato debe tener
//! ancho fijo para que el orden lexicográfico coincida con el cronológico.

/// Formato chrono de los timestamps de versión (UTC, milisegundos).
/// Los puntos reemplazan a los dos puntos para producir segmentos de ruta
/// válidos en cualquier sistema de archivos.
pub const VERSION_FORMAT: &str = "%Y-%m-%dT%H.%M.%S%.3fZ";
