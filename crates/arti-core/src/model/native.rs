//! Valores nativos: datos que sólo existen dentro del proceso.
//!
//! Un paso puede producir valores que no tienen forma serializable (sockets,
//! conexiones, modelos con estado FFI). El almacén los acepta como payload
//! `Native` para moverlos dentro del proceso, pero cualquier intento de
//! cruzar un límite de proceso falla en la codificación de transferencia.

use std::any::Any;
use std::fmt;

/// Valor opaco de proceso. `type_name` aparece en los diagnósticos de
/// transferencia, así que debe nombrar el tipo concreto.
pub trait NativeValue: Any + Send + Sync + fmt::Debug {
    /// Nombre del tipo concreto (p. ej. "Socket").
    fn type_name(&self) -> &'static str;

    /// Acceso dinámico para downcasting en el consumidor final.
    fn as_any(&self) -> &dyn Any;
}
