//! Raíz de datos desde variables de entorno.
//! Convención `ARTIFLOW_DATA_ROOT`; si no está definida se usa `./data`.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct DataRootConfig {
    pub root: PathBuf,
}

impl DataRootConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let root = env::var("ARTIFLOW_DATA_ROOT").map(PathBuf::from)
                                                 .unwrap_or_else(|_| PathBuf::from("./data"));
        Self { root }
    }

    /// Ruta base de un artifact lógico bajo la raíz de datos.
    pub fn base_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
