//! arti-shared: intercambio de artifacts entre workers paralelos.
//!
//! Módulos:
//! - `transfer`: sobre de transferencia (serialización verificada) y el
//!   sondeo en seco que diagnostica datos no transferibles.
//! - `manager`: capacidad de alojar contenedores compartidos y su
//!   implementación en proceso (`SharedStoreManager`).
//! - `proxy`: `SharedArtifactProxy`, la cara `Dataset` del contenedor
//!   compartido.

pub mod manager;
pub mod proxy;
pub mod transfer;

pub use manager::{ContainerManager, SharedContainer, SharedStoreManager};
pub use proxy::SharedArtifactProxy;
pub use transfer::TransferFrame;
