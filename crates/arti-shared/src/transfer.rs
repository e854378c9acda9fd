//! Sobre de transferencia: codificación verificable de artifacts.
//!
//! Todo artifact que cruza el límite de proceso viaja como un
//! [`TransferFrame`]: cuerpo JSON más checksum blake3 del cuerpo. `dry_run`
//! ejecuta la misma codificación sin tocar ningún canal; es el sondeo que
//! separa "el dato no puede cruzar el proceso" de "el canal falló". Los
//! payloads nativos fallan aquí por construcción (su variante está excluida
//! de serde).

use arti_core::hashing::hash_bytes;
use arti_core::{Artifact, DatasetError};

/// Forma codificada de un artifact en tránsito.
#[derive(Debug, Clone)]
pub struct TransferFrame {
    checksum: String,
    body: Vec<u8>,
}

impl TransferFrame {
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Codifica el artifact para transferencia.
pub fn encode(artifact: &Artifact) -> Result<TransferFrame, DatasetError> {
    let body = serde_json::to_vec(artifact).map_err(|e| DatasetError::Format { adapter: "transfer",
                                                                               detail: format!("{} is not transfer-encodable: {e}",
                                                                                               artifact.type_name()) })?;
    Ok(TransferFrame { checksum: hash_bytes(&body),
                       body })
}

/// Decodifica un frame verificando su checksum.
pub fn decode(frame: &TransferFrame) -> Result<Artifact, DatasetError> {
    let actual = hash_bytes(&frame.body);
    if actual != frame.checksum {
        return Err(DatasetError::TransferCorrupt(format!("checksum mismatch: expected {}, got {actual}",
                                                         frame.checksum)));
    }
    serde_json::from_slice(&frame.body)
        .map_err(|e| DatasetError::TransferCorrupt(format!("undecodable body: {e}")))
}

/// Sondeo en seco: ¿puede este artifact codificarse siquiera? No transmite
/// nada; se usa sólo para diagnosticar fallos de guardado compartido.
pub fn dry_run(artifact: &Artifact) -> Result<(), DatasetError> {
    encode(artifact).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arti_core::NativeValue;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug)]
    struct PinnedBuffer;

    impl NativeValue for PinnedBuffer {
        fn type_name(&self) -> &'static str {
            "PinnedBuffer"
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn frames_round_trip_payload_and_metadata() {
        let artifact = Artifact::json(json!({"x": [1, 2]})).with_metadata(json!({"step": "acquire"}));
        let frame = encode(&artifact).unwrap();
        let back = decode(&frame).unwrap();
        assert_eq!(back.as_json(), Some(&json!({"x": [1, 2]})));
        assert_eq!(back.metadata, Some(json!({"step": "acquire"})));
    }

    #[test]
    fn tampered_body_is_rejected() {
        let frame = encode(&Artifact::json(json!("ok"))).unwrap();
        let mut corrupt = frame.clone();
        corrupt.body[0] ^= 0xff;
        assert!(matches!(decode(&corrupt), Err(DatasetError::TransferCorrupt(_))));
    }

    #[test]
    fn native_payloads_fail_the_dry_run() {
        let artifact = Artifact::native(Arc::new(PinnedBuffer));
        assert!(dry_run(&artifact).is_err());
        assert!(dry_run(&Artifact::json(json!(1))).is_ok());
    }
}
