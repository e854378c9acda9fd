//! Forma canónica de payloads para fingerprints estables.
//!
//! Reglas: claves de objeto en orden lexicográfico, sin espacios, cada
//! variante de payload con prefijo propio para que un JSON y unos bytes
//! iguales byte a byte no colisionen. `Native` no tiene forma canónica.

use serde_json::Value;

use crate::model::{Artifact, Payload};

/// Devuelve la forma canónica del payload, o `None` si es nativo.
pub fn canonical_payload(artifact: &Artifact) -> Option<String> {
    let mut out = String::new();
    match &artifact.payload {
        Payload::Json(value) => {
            out.push_str("json:");
            write_value(&mut out, value);
        }
        Payload::Binary(bytes) => {
            out.push_str("bytes:");
            out.push_str(&bytes.len().to_string());
            out.push(':');
            for b in bytes {
                out.push_str(&format!("{b:02x}"));
            }
        }
        Payload::Native(_) => return None,
    }
    Some(out)
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            // serde_json escapa de forma estable
            out.push_str(&serde_json::to_string(s).unwrap_or_default());
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key).unwrap_or_default());
                out.push(':');
                write_value(out, &map[key.as_str()]);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::artifact_fingerprint;
    use crate::model::Artifact;
    use serde_json::json;

    #[test]
    fn key_order_does_not_change_the_canonical_form() {
        let a = Artifact::json(json!({"b": 2, "a": 1}));
        let b = Artifact::json(json!({"a": 1, "b": 2}));
        assert_eq!(canonical_payload(&a), canonical_payload(&b));
        assert_eq!(artifact_fingerprint(&a), artifact_fingerprint(&b));
    }

    #[test]
    fn json_and_bytes_never_collide() {
        let a = Artifact::json(json!("abc"));
        let b = Artifact::bytes("\"abc\"".as_bytes().to_vec());
        assert_ne!(canonical_payload(&a), canonical_payload(&b));
    }

    #[test]
    fn metadata_stays_out_of_the_fingerprint() {
        let plain = Artifact::json(json!({"v": 1}));
        let annotated = Artifact::json(json!({"v": 1})).with_metadata(json!({"note": "x"}));
        assert_eq!(artifact_fingerprint(&plain), artifact_fingerprint(&annotated));
    }
}
