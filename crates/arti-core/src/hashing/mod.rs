//! Fingerprints estables de payloads.
//!
//! La identidad de un artifact es el hash blake3 de la forma canónica de su
//! payload. La metadata queda fuera de la identidad. Los payloads nativos no
//! tienen forma canónica (no son hasheables ni transferibles).

pub mod canonical;
pub mod hash;

pub use canonical::canonical_payload;
pub use hash::hash_bytes;

use crate::model::Artifact;

/// Fingerprint del artifact, si su payload admite forma canónica.
pub fn artifact_fingerprint(artifact: &Artifact) -> Option<String> {
    canonical_payload(artifact).map(|c| hash_bytes(c.as_bytes()))
}
