//! Integración entre crates: un paso de pipeline escribe su resultado en el
//! store versionado, los workers paralelos lo reparten por el contenedor
//! compartido, y el runtime trata ambos backends a través del mismo contrato
//! `Dataset`.

use rayon::prelude::*;
use serde_json::json;

use arti_adapters::{JsonAdapter, VersionedFileDataset};
use arti_core::{Artifact, Dataset, MemoryDataset};
use arti_shared::{SharedArtifactProxy, SharedStoreManager};

#[test]
fn versioned_output_feeds_parallel_workers() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("acquired");

    // paso 1: persistir el resultado con identidad versionada
    let output = VersionedFileDataset::new(&base, Box::new(JsonAdapter::new()), None).unwrap();
    output.save(Artifact::json(json!({"samples": [10, 20, 30]}))).unwrap();

    // paso 2: repartir el artifact ya computado sin volver a tocar disco
    let manager = SharedStoreManager::new();
    let proxy = SharedArtifactProxy::new(Some(&manager)).unwrap();
    proxy.save(output.load().unwrap()).unwrap();

    let totals: Vec<i64> = (0..4)
        .into_par_iter()
        .map(|_| {
            let artifact = proxy.load().unwrap();
            artifact.as_json().unwrap()["samples"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_i64().unwrap())
                .sum()
        })
        .collect();

    assert_eq!(totals, vec![60; 4]);
}

#[test]
fn the_runtime_is_agnostic_to_the_backing_dataset() {
    let tmp = tempfile::tempdir().unwrap();
    let manager = SharedStoreManager::new();

    let file_ds = VersionedFileDataset::new(tmp.path().join("slot"), Box::new(JsonAdapter::new()), None).unwrap();
    let shared_ds = SharedArtifactProxy::new(Some(&manager)).unwrap();
    let memory_ds = MemoryDataset::new();

    let datasets: Vec<Box<dyn Dataset>> = vec![Box::new(file_ds), Box::new(shared_ds), Box::new(memory_ds)];

    for ds in &datasets {
        ds.save(Artifact::json(json!({"ok": true}))).unwrap();
        assert!(ds.exists().unwrap());
        assert_eq!(ds.load().unwrap().as_json(), Some(&json!({"ok": true})));
    }

    // describe es parte del contrato aunque el proxy no tenga configuración
    assert!(datasets[1].describe().is_empty());
    assert!(!datasets[0].describe().is_empty());
}
