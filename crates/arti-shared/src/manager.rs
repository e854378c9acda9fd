//! Alojamiento de contenedores compartidos.
//!
//! `ContainerManager` es la capacidad externa mínima: construir un
//! contenedor direccionable con load/save. `SharedStoreManager` es la
//! implementación en proceso: un slot [`MemoryDataset`] por contenedor en un
//! mapa concurrente. Los handles guardan una referencia débil al mapa, de
//! modo que un manager caído se reporta como contenedor perdido en vez de
//! colgar al worker. El mapa serializa los accesos individuales a cada slot;
//! no hay más locking que ése (un único escritor lógico por slot es
//! responsabilidad del grafo de pasos).

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use uuid::Uuid;

use arti_core::{Artifact, Dataset, DatasetError, MemoryDataset};

use crate::transfer;

/// Handle mínimo a un contenedor remoto.
pub trait SharedContainer: Send + Sync {
    fn load(&self) -> Result<Artifact, DatasetError>;
    fn save(&self, artifact: Artifact) -> Result<(), DatasetError>;
    fn exists(&self) -> Result<bool, DatasetError>;
}

/// Capacidad de construir contenedores compartidos.
pub trait ContainerManager {
    fn create_container(&self) -> Result<Box<dyn SharedContainer>, DatasetError>;
}

type SlotMap = DashMap<Uuid, MemoryDataset>;

/// Manager en proceso: aloja un `MemoryDataset` por contenedor creado.
#[derive(Debug, Default)]
pub struct SharedStoreManager {
    slots: Arc<SlotMap>,
}

impl SharedStoreManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contenedores vivos (diagnóstico).
    pub fn container_count(&self) -> usize {
        self.slots.len()
    }
}

impl ContainerManager for SharedStoreManager {
    fn create_container(&self) -> Result<Box<dyn SharedContainer>, DatasetError> {
        let id = Uuid::new_v4();
        self.slots.insert(id, MemoryDataset::new());
        log::debug!("shared container {id} created");
        Ok(Box::new(StoreHandle { slots: Arc::downgrade(&self.slots),
                                  id }))
    }
}

struct StoreHandle {
    slots: Weak<SlotMap>,
    id: Uuid,
}

impl StoreHandle {
    fn slots(&self) -> Result<Arc<SlotMap>, DatasetError> {
        self.slots
            .upgrade()
            .ok_or_else(|| DatasetError::ContainerLost("manager is no longer running".into()))
    }
}

impl SharedContainer for StoreHandle {
    fn load(&self) -> Result<Artifact, DatasetError> {
        let slots = self.slots()?;
        let slot = slots.get(&self.id)
                        .ok_or_else(|| DatasetError::ContainerLost(format!("container {} was evicted", self.id)))?;
        slot.load()
    }

    fn save(&self, artifact: Artifact) -> Result<(), DatasetError> {
        // el artifact cruza el "canal" codificado y verificado, como lo
        // haría entre procesos reales
        let frame = transfer::encode(&artifact)?;
        let marshalled = transfer::decode(&frame)?;
        let slots = self.slots()?;
        let slot = slots.get(&self.id)
                        .ok_or_else(|| DatasetError::ContainerLost(format!("container {} was evicted", self.id)))?;
        slot.save(marshalled)
    }

    fn exists(&self) -> Result<bool, DatasetError> {
        let slots = self.slots()?;
        let slot = slots.get(&self.id)
                        .ok_or_else(|| DatasetError::ContainerLost(format!("container {} was evicted", self.id)))?;
        slot.exists()
    }
}
