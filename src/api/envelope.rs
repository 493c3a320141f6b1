// src/api/envelope.rs
// The backend's response envelope is not uniform: some endpoints answer with
// the bare resource, some with {data}, some with {success, message, data}.
// Rather than unwrapping ad hoc at each call site, every endpoint declares
// one of these decoders next to its request function.

use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The resource itself is the body.
    Bare,
    /// `{ "data": T }`
    Data,
    /// `{ "success": bool, "message": string, "data": T }`
    Full,
}

/// Unwraps a response body according to the endpoint's envelope and
/// deserializes the payload.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value, envelope: Envelope) -> ApiResult<T> {
    let inner = match envelope {
        Envelope::Bare => value,
        Envelope::Data | Envelope::Full => match value {
            serde_json::Value::Object(mut map) => map.remove("data").ok_or(ApiError::Envelope)?,
            _ => return Err(ApiError::Envelope),
        },
    };
    serde_json::from_value(inner).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_bare_resource() {
        let v = json!({"id": "p-1", "name": "MacBook"});
        let out: serde_json::Value = decode(v.clone(), Envelope::Bare).unwrap();
        assert_eq!(out, v);
    }

    #[test]
    fn decodes_data_envelope() {
        let v = json!({"data": [1, 2, 3]});
        let out: Vec<i32> = decode(v, Envelope::Data).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn decodes_full_envelope() {
        let v = json!({"success": true, "message": "ok", "data": {"total": 4}});
        let out: serde_json::Value = decode(v, Envelope::Full).unwrap();
        assert_eq!(out["total"], 4);
    }

    #[test]
    fn missing_data_member_is_an_envelope_error() {
        let v = json!({"success": true});
        let err = decode::<serde_json::Value>(v, Envelope::Full).unwrap_err();
        assert!(matches!(err, ApiError::Envelope));
    }
}
