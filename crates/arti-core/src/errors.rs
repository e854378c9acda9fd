//! Errores del almacén de artifacts.
//! Una única taxonomía para datasets locales, versionados y compartidos.
//! Cada variante conserva el contexto (ruta, versión, tipo) necesario para
//! diagnosticar sin re-ejecutar; ningún error se reintenta internamente.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// La versión pedida (fijada o "la última") no existe al cargar.
    #[error("no artifact found at '{0}'")]
    NotFound(String),

    /// Un guardado recién completado no es visible en la ruta de carga por
    /// defecto: otro escritor produjo una versión más nueva en paralelo.
    #[error("save path '{save_path}' is no longer the default load path '{load_path}'; a newer version was written concurrently")]
    Consistency { save_path: String, load_path: String },

    /// Un dataset compartido se usó antes de ligarle un contenedor.
    #[error("shared dataset used before a container manager was attached")]
    Unbound,

    /// El artifact no superó el sondeo de codificación de transferencia.
    #[error("{type_name} cannot be transfer-encoded; workers exchange artifacts through shared memory and only serializable payloads can cross the process boundary")]
    NonTransferable { type_name: String },

    /// El manager o el slot remoto dejaron de ser alcanzables.
    #[error("shared container unreachable: {0}")]
    ContainerLost(String),

    /// Un frame de transferencia llegó corrupto o no decodificable.
    #[error("transfer frame rejected: {0}")]
    TransferCorrupt(String),

    #[error("io failure at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fallo de un adaptador de formato (codificación o decodificación).
    #[error("format adapter '{adapter}': {detail}")]
    Format { adapter: &'static str, detail: String },

    /// La referencia lógica no tiene componente final utilizable como nombre.
    #[error("invalid dataset reference '{0}': base path needs a final component")]
    InvalidReference(String),
}
