use std::fs;
use std::path::{Path, PathBuf};

use arti_core::{DatasetError, Version, VersionedPath};

// Deja un artifact escrito a mano bajo base/<version>/<filename>.
fn plant_version(base: &Path, version: &str) -> PathBuf {
    let dir = base.join(version);
    fs::create_dir_all(&dir).expect("create version dir");
    let file = dir.join(base.file_name().unwrap());
    fs::write(&file, b"{\"v\":1}").expect("write artifact");
    file
}

fn base_in(tmp: &tempfile::TempDir) -> PathBuf {
    tmp.path().join("thing")
}

#[test]
fn unpinned_load_resolves_the_latest_version_deterministically() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);
    plant_version(&base, "2026-08-06T10.00.00.000Z");
    let newest = plant_version(&base, "2026-08-06T11.30.00.500Z");
    plant_version(&base, "2026-08-06T11.00.00.000Z");

    let resolver = VersionedPath::new(&base, None).unwrap();
    for _ in 0..3 {
        assert_eq!(resolver.resolve_load().unwrap(), newest);
    }
}

#[test]
fn version_directories_without_the_artifact_are_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);
    let older = plant_version(&base, "2026-08-06T10.00.00.000Z");
    // directorio de versión más nuevo pero vacío: no debe ganar
    fs::create_dir_all(base.join("2026-08-06T12.00.00.000Z")).unwrap();

    let resolver = VersionedPath::new(&base, None).unwrap();
    assert_eq!(resolver.resolve_load().unwrap(), older);
}

#[test]
fn pinned_load_resolves_exactly_that_version() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);
    let pinned = plant_version(&base, "2026-08-06T10.00.00.000Z");
    plant_version(&base, "2026-08-06T11.00.00.000Z");

    let resolver = VersionedPath::new(&base, Some(Version::pinned_load("2026-08-06T10.00.00.000Z"))).unwrap();
    assert_eq!(resolver.resolve_load().unwrap(), pinned);
}

#[test]
fn pinned_load_missing_version_is_not_found_even_if_others_exist() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);
    plant_version(&base, "2026-08-06T11.00.00.000Z");

    let resolver = VersionedPath::new(&base, Some(Version::pinned_load("2026-08-06T09.00.00.000Z"))).unwrap();
    match resolver.resolve_load() {
        Err(DatasetError::NotFound(path)) => assert!(path.contains("2026-08-06T09.00.00.000Z")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_base_is_not_found_for_load_but_fine_for_save() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);

    let resolver = VersionedPath::new(&base, None).unwrap();
    assert!(matches!(resolver.resolve_load(), Err(DatasetError::NotFound(_))));
    // resolver rutas de guardado no exige que la base exista todavía
    let save = resolver.resolve_save();
    assert!(save.starts_with(&base));
}

#[test]
fn save_path_is_stable_within_a_handle() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);

    let resolver = VersionedPath::new(&base, None).unwrap();
    let first = resolver.resolve_save();
    let second = resolver.resolve_save();
    assert_eq!(first, second);
    assert_eq!(resolver.save_version_if_resolved(), first.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str()));
}

#[test]
fn explicit_save_version_is_used_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);

    let resolver = VersionedPath::new(&base, Some(Version::pinned_save("2026-08-06T08.00.00.000Z"))).unwrap();
    assert_eq!(resolver.resolve_save(), base.join("2026-08-06T08.00.00.000Z").join("thing"));
}

#[test]
fn a_concurrent_newer_version_trips_the_consistency_check() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);

    let resolver = VersionedPath::new(&base, None).unwrap();
    let save_path = resolver.resolve_save();
    fs::create_dir_all(save_path.parent().unwrap()).unwrap();
    fs::write(&save_path, b"{}").unwrap();

    // otro escritor mete una versión posterior antes del chequeo
    plant_version(&base, "9999-12-31T23.59.59.999Z");

    let load_path = resolver.resolve_load().unwrap();
    match resolver.check_consistency(&load_path, &save_path) {
        Err(DatasetError::Consistency { save_path: s, load_path: l }) => {
            assert!(s.contains(resolver.save_version_if_resolved().unwrap()));
            assert!(l.contains("9999-12-31T23.59.59.999Z"));
        }
        other => panic!("expected Consistency, got {other:?}"),
    }
}

#[test]
fn pinned_load_bypasses_the_consistency_check() {
    let tmp = tempfile::tempdir().unwrap();
    let base = base_in(&tmp);
    plant_version(&base, "2026-08-06T10.00.00.000Z");

    let resolver = VersionedPath::new(&base, Some(Version::pinned_load("2026-08-06T10.00.00.000Z"))).unwrap();
    let save_path = resolver.resolve_save();
    fs::create_dir_all(save_path.parent().unwrap()).unwrap();
    fs::write(&save_path, b"{}").unwrap();
    plant_version(&base, "9999-12-31T23.59.59.999Z");

    let load_path = resolver.resolve_load().unwrap();
    assert!(resolver.check_consistency(&load_path, &save_path).is_ok());
}

#[test]
fn base_without_final_component_is_rejected() {
    assert!(matches!(VersionedPath::new("/", None), Err(DatasetError::InvalidReference(_))));
}
