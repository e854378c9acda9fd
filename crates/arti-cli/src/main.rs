use std::path::PathBuf;

use arti_adapters::{DataRootConfig, JsonAdapter, VersionedFileDataset};
use arti_core::{Artifact, Dataset, Version};

fn usage() {
    eprintln!("uso: arti-cli <save|load|exists> --name <ID> [--base <RUTA>] [--version <V>] [--payload <JSON>] [--pretty]");
    eprintln!("  save   guarda el payload JSON como una nueva versión del artifact");
    eprintln!("  load   imprime el payload de la versión pedida (o la más reciente)");
    eprintln!("  exists indica si hay alguna versión cargable");
    eprintln!("la raíz de datos sale de ARTIFLOW_DATA_ROOT (defecto ./data)");
}

fn main() {
    // Cargar .env si existe para obtener ARTIFLOW_DATA_ROOT
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(2);
    }

    let command = args[1].as_str();
    let mut name: Option<String> = None;
    let mut base: Option<PathBuf> = None;
    let mut version: Option<String> = None;
    let mut payload: Option<String> = None;
    let mut pretty = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                i += 1;
                if i < args.len() { name = Some(args[i].clone()); }
            }
            "--base" => {
                i += 1;
                if i < args.len() { base = Some(PathBuf::from(&args[i])); }
            }
            "--version" => {
                i += 1;
                if i < args.len() { version = Some(args[i].clone()); }
            }
            "--payload" => {
                i += 1;
                if i < args.len() { payload = Some(args[i].clone()); }
            }
            "--pretty" => pretty = true,
            other => {
                eprintln!("[arti-cli] flag desconocida: {other}");
                usage();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let base_path = match (base, name) {
        (Some(b), _) => b,
        (None, Some(n)) => DataRootConfig::from_env().base_for(&n),
        (None, None) => {
            eprintln!("[arti-cli] falta --name o --base");
            std::process::exit(2);
        }
    };

    match command {
        "save" => {
            let raw = match payload {
                Some(p) => p,
                None => {
                    eprintln!("[arti-cli] save requiere --payload");
                    std::process::exit(2);
                }
            };
            let value: serde_json::Value = match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("[arti-cli] payload no es JSON válido: {e}");
                    std::process::exit(2);
                }
            };
            let ds = match VersionedFileDataset::new(&base_path,
                                                    Box::new(JsonAdapter::new()),
                                                    version.map(Version::pinned_save)) {
                Ok(d) => d.with_options(serde_json::json!({}), serde_json::json!({"pretty": pretty})),
                Err(e) => {
                    eprintln!("[arti-cli] {e}");
                    std::process::exit(4);
                }
            };
            if let Err(e) = ds.save(Artifact::json(value)) {
                eprintln!("[arti-cli] save falló: {e}");
                std::process::exit(5);
            }
            println!("{}", ds.resolver().save_version_if_resolved().unwrap_or("?"));
        }
        "load" => {
            let ds = match VersionedFileDataset::new(&base_path,
                                                    Box::new(JsonAdapter::new()),
                                                    version.map(Version::pinned_load)) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("[arti-cli] {e}");
                    std::process::exit(4);
                }
            };
            match ds.load() {
                Ok(artifact) => match artifact.as_json() {
                    Some(v) => println!("{v}"),
                    None => println!("{:?}", artifact.kind),
                },
                Err(e) => {
                    eprintln!("[arti-cli] load falló: {e}");
                    std::process::exit(4);
                }
            }
        }
        "exists" => {
            let ds = match VersionedFileDataset::new(&base_path,
                                                    Box::new(JsonAdapter::new()),
                                                    version.map(Version::pinned_load)) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("[arti-cli] {e}");
                    std::process::exit(4);
                }
            };
            match ds.exists() {
                Ok(true) => println!("true"),
                Ok(false) => {
                    println!("false");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("[arti-cli] exists falló: {e}");
                    std::process::exit(4);
                }
            }
        }
        other => {
            eprintln!("[arti-cli] comando desconocido: {other}");
            usage();
            std::process::exit(2);
        }
    }
}
