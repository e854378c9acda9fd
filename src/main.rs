//! Binario de validación del almacén de artifacts.
//!
//! Recorre los dos escenarios extremo a extremo del núcleo: el store
//! versionado en disco (resolución de rutas, consistencia escritura-lectura)
//! y el proxy compartido entre workers paralelos (delegación y diagnóstico
//! de datos no transferibles).

use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use serde_json::json;

use arti_adapters::{JsonAdapter, VersionedFileDataset};
use arti_core::{Artifact, Dataset, DatasetError, NativeValue, Version};
use arti_shared::{SharedArtifactProxy, SharedStoreManager};

#[derive(Debug)]
struct GpuBuffer;

impl NativeValue for GpuBuffer {
    fn type_name(&self) -> &'static str {
        "GpuBuffer"
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

fn demo_root() -> PathBuf {
    std::env::temp_dir().join(format!("artiflow-demo-{}", std::process::id()))
}

/// Validación del store versionado: guardar, releer, fijar versiones y
/// provocar (a propósito) el error de consistencia.
fn run_versioned_validation(root: &PathBuf) {
    let base = root.join("thing");

    let ds = VersionedFileDataset::new(&base, Box::new(JsonAdapter::new()), None)
        .expect("dataset for a valid base path");
    assert!(!ds.exists().expect("exists before any save"));

    ds.save(Artifact::json(json!({"rows": [1, 2, 3]}))).expect("first save");
    let version = ds.resolver().save_version_if_resolved().expect("resolved save version").to_string();
    println!("[OK] saved version {version} under {}", base.display());

    let back = ds.load().expect("default load after save");
    assert_eq!(back.as_json(), Some(&json!({"rows": [1, 2, 3]})));
    println!("[OK] default load sees the version just written");

    let pinned = VersionedFileDataset::new(&base,
                                           Box::new(JsonAdapter::new()),
                                           Some(Version::pinned_load("2000-01-01T00.00.00.000Z")))
        .expect("dataset with pinned load");
    match pinned.load() {
        Err(DatasetError::NotFound(_)) => println!("[OK] pinned load of a missing version is NotFound"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    // un escritor con versión vieja pierde la garantía de lectura por defecto
    let stale = VersionedFileDataset::new(&base,
                                          Box::new(JsonAdapter::new()),
                                          Some(Version::pinned_save("1999-01-01T00.00.00.000Z")))
        .expect("dataset with stale save pin");
    match stale.save(Artifact::json(json!("stale"))) {
        Err(DatasetError::Consistency { .. }) => println!("[OK] concurrent-version race detected after save"),
        other => panic!("expected Consistency, got {other:?}"),
    }
}

/// Validación del intercambio compartido: workers paralelos sobre un mismo
/// contenedor y diagnóstico de datos no transferibles.
fn run_shared_validation() {
    let manager = SharedStoreManager::new();
    let proxy = SharedArtifactProxy::new(Some(&manager)).expect("bound proxy");

    (0..8i64).into_par_iter().for_each(|worker| {
        proxy.save(Artifact::json(json!({"worker": worker}))).expect("shared save");
        proxy.load().expect("shared load");
    });
    println!("[OK] 8 parallel workers exchanged artifacts through one container");

    match proxy.save(Artifact::native(Arc::new(GpuBuffer))) {
        Err(err @ DatasetError::NonTransferable { .. }) => {
            println!("[OK] non-transferable data diagnosed: {err}");
        }
        other => panic!("expected NonTransferable, got {other:?}"),
    }

    drop(manager);
    match proxy.save(Artifact::json(json!("fine"))) {
        Err(DatasetError::ContainerLost(_)) => println!("[OK] dead manager surfaces as a transport fault"),
        other => panic!("expected ContainerLost, got {other:?}"),
    }
}

fn main() {
    let _ = dotenvy::dotenv();
    let root = demo_root();

    run_versioned_validation(&root);
    run_shared_validation();

    let _ = std::fs::remove_dir_all(&root);
    println!("[DONE] artifact store validation complete");
}
