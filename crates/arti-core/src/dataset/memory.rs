//! Dataset en memoria de un solo slot.
//!
//! Es el dataset implícito de los resultados intermedios de un pipeline y
//! también el contenedor que el manager compartido aloja por cada slot.
//! `RwLock` permite guardar desde `&self`, que es lo que necesitan los
//! workers paralelos que comparten el handle.

use std::sync::RwLock;

use serde_json::json;

use crate::errors::DatasetError;
use crate::model::Artifact;

use super::{Dataset, Describe};

#[derive(Debug, Default)]
pub struct MemoryDataset {
    slot: RwLock<Option<Artifact>>,
}

impl MemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(artifact: Artifact) -> Self {
        Self { slot: RwLock::new(Some(artifact)) }
    }

    /// Vacía el slot y devuelve el artifact que contenía.
    pub fn release(&self) -> Option<Artifact> {
        self.slot.write().unwrap_or_else(|e| e.into_inner()).take()
    }
}

impl Dataset for MemoryDataset {
    fn load(&self) -> Result<Artifact, DatasetError> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| DatasetError::NotFound("in-memory slot is empty (nothing saved yet)".into()))
    }

    fn save(&self, artifact: Artifact) -> Result<(), DatasetError> {
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(artifact);
        Ok(())
    }

    fn exists(&self) -> Result<bool, DatasetError> {
        Ok(self.slot.read().unwrap_or_else(|e| e.into_inner()).is_some())
    }

    fn describe(&self) -> Describe {
        let mut map = Describe::new();
        map.insert("dataset".into(), json!("memory"));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_slot_load_is_not_found() {
        let ds = MemoryDataset::new();
        assert!(matches!(ds.load(), Err(DatasetError::NotFound(_))));
        assert!(!ds.exists().unwrap());
    }

    #[test]
    fn save_then_load_round_trips() {
        let ds = MemoryDataset::new();
        ds.save(Artifact::json(json!({"v": 7}))).unwrap();
        assert!(ds.exists().unwrap());
        let back = ds.load().unwrap();
        assert_eq!(back.as_json(), Some(&json!({"v": 7})));
    }

    #[test]
    fn save_replaces_previous_artifact() {
        let ds = MemoryDataset::with_initial(Artifact::json(json!(1)));
        ds.save(Artifact::json(json!(2))).unwrap();
        assert_eq!(ds.load().unwrap().as_json(), Some(&json!(2)));
        assert!(ds.release().is_some());
        assert!(!ds.exists().unwrap());
    }
}
