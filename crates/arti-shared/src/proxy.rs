//! Proxy de intercambio de artifacts entre workers paralelos.
//!
//! Presenta la capacidad `Dataset` delegando el almacenamiento real en un
//! contenedor alojado por un manager compartido. Su único valor añadido,
//! además de la delegación, es el diagnóstico de fallos de guardado:
//! distinguir "el dato no puede cruzar un límite de proceso" (rediseñar el
//! dato) de "el transporte falló" (revisar la infraestructura). Confundirlos
//! produce diagnósticos engañosos en pipelines de producción.

use arti_core::{Artifact, Dataset, DatasetError, Describe};

use crate::manager::{ContainerManager, SharedContainer};
use crate::transfer;

/// Cara `Dataset` de un contenedor compartido. Sin manager está "sin ligar":
/// cualquier uso falla rápido en lugar de no hacer nada en silencio.
pub struct SharedArtifactProxy {
    container: Option<Box<dyn SharedContainer>>,
}

impl SharedArtifactProxy {
    /// Crea el proxy; con `manager` presente el contenedor se crea ya.
    pub fn new(manager: Option<&dyn ContainerManager>) -> Result<Self, DatasetError> {
        let container = match manager {
            Some(m) => Some(m.create_container()?),
            None => None,
        };
        Ok(Self { container })
    }

    /// Proxy sin contenedor; hay que ligarlo con [`attach`] antes de usarlo.
    ///
    /// [`attach`]: SharedArtifactProxy::attach
    pub fn unbound() -> Self {
        Self { container: None }
    }

    /// Crea un contenedor nuevo en `manager` y lo liga a este proxy.
    /// Religar descarta el contenedor anterior sin migrar sus datos: ligar
    /// exactamente una vez por slot lógico, antes de repartir el proxy a los
    /// workers, es responsabilidad del llamador.
    pub fn attach(&mut self, manager: &dyn ContainerManager) -> Result<(), DatasetError> {
        if self.container.is_some() {
            log::warn!("shared proxy re-attached; previous container data is abandoned");
        }
        self.container = Some(manager.create_container()?);
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.container.is_some()
    }

    fn container(&self) -> Result<&dyn SharedContainer, DatasetError> {
        self.container.as_deref().ok_or(DatasetError::Unbound)
    }
}

impl Dataset for SharedArtifactProxy {
    fn load(&self) -> Result<Artifact, DatasetError> {
        self.container()?.load()
    }

    fn save(&self, artifact: Artifact) -> Result<(), DatasetError> {
        let container = self.container()?;
        match container.save(artifact.clone()) {
            Ok(()) => Ok(()),
            Err(remote_err) => {
                // sondeo independiente del canal: ¿el dato se codifica?
                if transfer::dry_run(&artifact).is_err() {
                    Err(DatasetError::NonTransferable { type_name: artifact.type_name().to_string() })
                } else {
                    // la serialización está bien: la causa real es otra y se
                    // propaga sin envolver
                    Err(remote_err)
                }
            }
        }
    }

    fn exists(&self) -> Result<bool, DatasetError> {
        self.container()?.exists()
    }

    /// Sin configuración propia que devolver: todo el estado vive en el
    /// contenedor remoto.
    fn describe(&self) -> Describe {
        Describe::new()
    }
}
